//! Weapon records

use serde::{Deserialize, Serialize};

use crate::core::types::DamageType;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    /// Unique within a mod's weapon list
    pub name: String,
    /// Join key with compatible ammo
    pub caliber: String,
    pub min_dmg: i32,
    pub max_dmg: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dmg_type: Option<String>,
    /// Rounds per burst; present only on burst-capable weapons
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub burst: Option<u32>,
    /// No single-shot mode
    #[serde(default)]
    pub burst_only: bool,
    /// Penetrate perk
    #[serde(default)]
    pub penetrate: bool,
}

impl Weapon {
    pub fn new(name: &str, caliber: &str, min_dmg: i32, max_dmg: i32) -> Self {
        Self {
            name: name.to_string(),
            caliber: caliber.to_string(),
            min_dmg,
            max_dmg,
            dmg_type: None,
            burst: None,
            burst_only: false,
            penetrate: false,
        }
    }

    pub fn with_burst(mut self, rounds: u32) -> Self {
        self.burst = Some(rounds);
        self
    }

    pub fn with_dmg_type(mut self, tag: &str) -> Self {
        self.dmg_type = Some(tag.to_string());
        self
    }

    pub fn with_penetrate(mut self) -> Self {
        self.penetrate = true;
        self
    }

    pub fn supports_burst(&self) -> bool {
        self.burst.is_some_and(|rounds| rounds > 0)
    }

    /// Burst round count, zero when the weapon cannot burst
    pub fn burst_rounds(&self) -> u32 {
        self.burst.unwrap_or(0)
    }

    pub fn damage_type(&self) -> DamageType {
        self.dmg_type
            .as_deref()
            .map(DamageType::from_tag)
            .unwrap_or_default()
    }

    /// Multi-line description used for tooltips and CLI listings
    pub fn summary(&self) -> String {
        let dmg_type = match self.damage_type() {
            DamageType::Normal => String::new(),
            other => format!(" {}", other),
        };
        let burst = match self.burst {
            Some(rounds) if rounds > 0 => format!("\nBurst: {}", rounds),
            _ => String::new(),
        };
        format!(
            "{}\nDamage: {}-{}{}{}",
            self.name, self.min_dmg, self.max_dmg, dmg_type, burst
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal() {
        let json = r#"{"name":"Desert Eagle","caliber":".44 magnum","min_dmg":20,"max_dmg":32}"#;
        let weapon: Weapon = serde_json::from_str(json).unwrap();
        assert_eq!(weapon.damage_type(), DamageType::Normal);
        assert!(!weapon.supports_burst());
        assert!(!weapon.burst_only);
        assert!(!weapon.penetrate);
    }

    #[test]
    fn test_deserialize_full() {
        let json = r#"{"name":"Pulse Rifle","caliber":"Micro fusion cell","min_dmg":54,
            "max_dmg":78,"dmg_type":"electrical","burst":3,"burst_only":true,"penetrate":true}"#;
        let weapon: Weapon = serde_json::from_str(json).unwrap();
        assert_eq!(weapon.damage_type(), DamageType::Electrical);
        assert_eq!(weapon.burst_rounds(), 3);
        assert!(weapon.burst_only);
        assert!(weapon.penetrate);
    }

    #[test]
    fn test_summary() {
        let plain = Weapon::new("10mm pistol", "10mm", 5, 12);
        assert_eq!(plain.summary(), "10mm pistol\nDamage: 5-12");

        let smg = Weapon::new("Plasma SMG", "SEC", 10, 20)
            .with_dmg_type("plasma")
            .with_burst(5);
        assert_eq!(smg.summary(), "Plasma SMG\nDamage: 10-20 plasma\nBurst: 5");
    }
}
