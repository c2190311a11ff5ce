//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use std::fmt;

/// Mod whose armor list is the reference axis for every comparison
pub const VANILLA_MOD_ID: &str = "vanilla";

/// Elemental damage category carried by weapons and ammo
///
/// Data files store this as a free-form tag. Tags the game does not
/// distinguish armor stats for (EMP, unknown strings) behave as `Normal`
/// when resistances are looked up, but keep their own variant so the tag
/// survives a round trip through the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DamageType {
    #[default]
    Normal,
    Laser,
    Fire,
    Plasma,
    Electrical,
    Emp,
    Explosive,
}

impl DamageType {
    /// Parse a data-file tag. Unrecognised tags fall back to `Normal`.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "laser" => DamageType::Laser,
            "fire" => DamageType::Fire,
            "plasma" => DamageType::Plasma,
            "electrical" => DamageType::Electrical,
            "emp" => DamageType::Emp,
            "explosive" => DamageType::Explosive,
            _ => DamageType::Normal,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DamageType::Normal => "normal",
            DamageType::Laser => "laser",
            DamageType::Fire => "fire",
            DamageType::Plasma => "plasma",
            DamageType::Electrical => "electrical",
            DamageType::Emp => "emp",
            DamageType::Explosive => "explosive",
        }
    }
}

impl fmt::Display for DamageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
