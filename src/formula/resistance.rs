//! Elemental resistance lookup
//!
//! Picks the (DR, DT) pair of the armor that applies to an attack. Ammo
//! damage type wins over the weapon's; with neither, damage is normal.
//! Electrical damage uses the plasma pair, as the game does.

use serde::{Deserialize, Serialize};

use crate::core::types::DamageType;
use crate::data::{Ammo, Armor, Weapon};

/// The DR/DT pair selected for one damage type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Resistance {
    pub dr: i32,
    pub dt: i32,
}

impl Resistance {
    pub fn new(dr: i32, dt: i32) -> Self {
        Self { dr, dt }
    }
}

/// Damage type of a weapon firing a given ammo
pub fn damage_type(weapon: &Weapon, ammo: &Ammo) -> DamageType {
    ammo.damage_type().unwrap_or_else(|| weapon.damage_type())
}

/// Armor pair for a damage type
pub fn resistance_for(armor: &Armor, damage_type: DamageType) -> Resistance {
    match damage_type {
        DamageType::Fire => Resistance::new(armor.dr_fire, armor.dt_fire),
        DamageType::Plasma | DamageType::Electrical => {
            Resistance::new(armor.dr_plasma, armor.dt_plasma)
        }
        DamageType::Laser => Resistance::new(armor.dr_laser, armor.dt_laser),
        DamageType::Explosive => Resistance::new(armor.dr_explosive, armor.dt_explosive),
        DamageType::Normal | DamageType::Emp => Resistance::new(armor.dr, armor.dt),
    }
}

/// Armor pair that applies when `weapon` fires `ammo` at `armor`
pub fn resolve_resistance(armor: &Armor, weapon: &Weapon, ammo: &Ammo) -> Resistance {
    resistance_for(armor, damage_type(weapon, ammo))
}
