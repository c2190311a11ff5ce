//! Ammunition records

use serde::{Deserialize, Serialize};

use crate::core::error::{DamageError, Result};
use crate::core::types::DamageType;

fn default_one() -> i32 {
    1
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ammo {
    pub name: String,
    /// Must equal the weapon's caliber for the pairing to be valid
    pub caliber: String,
    /// Accuracy modifier, not used for damage
    #[serde(default)]
    pub ac_mod: i32,
    /// Armor DR adjustment in percent; negative for armor piercing
    #[serde(default)]
    pub dr_mod: i32,
    #[serde(default = "default_one")]
    pub dmg_mult: i32,
    #[serde(default = "default_one")]
    pub dmg_div: i32,
    /// Overrides the weapon's damage type when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dmg_type: Option<String>,
}

impl Ammo {
    pub fn new(name: &str, caliber: &str, dr_mod: i32, dmg_mult: i32, dmg_div: i32) -> Self {
        Self {
            name: name.to_string(),
            caliber: caliber.to_string(),
            ac_mod: 0,
            dr_mod,
            dmg_mult,
            dmg_div,
            dmg_type: None,
        }
    }

    pub fn with_dmg_type(mut self, tag: &str) -> Self {
        self.dmg_type = Some(tag.to_string());
        self
    }

    /// Damage type override, if this ammo carries one
    pub fn damage_type(&self) -> Option<DamageType> {
        self.dmg_type.as_deref().map(DamageType::from_tag)
    }

    /// Damage multiplier as a float
    pub fn damage_factor(&self) -> f64 {
        f64::from(self.dmg_mult) / f64::from(self.dmg_div)
    }

    /// Reject numeric input no formula can evaluate
    pub fn validate(&self) -> Result<()> {
        if self.dmg_div == 0 {
            return Err(DamageError::InvalidAmmo {
                ammo: self.name.clone(),
                reason: format!("damage divisor is zero (multiplier {})", self.dmg_mult),
            });
        }
        if self.dmg_div < 0 || self.dmg_mult < 0 {
            return Err(DamageError::InvalidAmmo {
                ammo: self.name.clone(),
                reason: format!(
                    "damage modifier {}/{} must not be negative",
                    self.dmg_mult, self.dmg_div
                ),
            });
        }
        Ok(())
    }

    /// Multi-line description used for tooltips and CLI listings
    pub fn summary(&self) -> String {
        let dr_mod = match self.dr_mod {
            0 => "0".to_string(),
            m if m > 0 => format!("+{}%", m),
            m => format!("{}%", m),
        };
        let dmg_mod = if self.dmg_mult == self.dmg_div {
            self.dmg_mult.to_string()
        } else {
            format!("{}/{}", self.dmg_mult, self.dmg_div)
        };
        let dmg_type = match self.damage_type() {
            Some(ty) if ty != DamageType::Normal => format!("\nType: {}", ty),
            _ => String::new(),
        };
        format!(
            "{}\nDR mod: {}\nDMG mod: {}{}",
            self.name, dr_mod, dmg_mod, dmg_type
        )
    }
}
