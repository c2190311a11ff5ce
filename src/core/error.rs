use thiserror::Error;

#[derive(Error, Debug)]
pub enum DamageError {
    #[error("Invalid ammo '{ammo}': {reason}")]
    InvalidAmmo { ammo: String, reason: String },

    #[error("Formula {formula} produced a non-finite damage value ({value})")]
    NonFinite { formula: &'static str, value: f64 },

    #[error("Unknown formula: {0}")]
    UnknownFormula(String),

    #[error("Mod not found: {0}")]
    UnknownMod(String),

    #[error("Weapon not found in mod {mod_id}: {weapon}")]
    UnknownWeapon { mod_id: String, weapon: String },

    #[error("Ammo not found in mod {mod_id} for caliber {caliber}: {ammo}")]
    UnknownAmmo {
        mod_id: String,
        ammo: String,
        caliber: String,
    },

    #[error("Caliber mismatch: weapon uses {weapon}, ammo is {ammo}")]
    CaliberMismatch { weapon: String, ammo: String },

    #[error("Invalid mod registry: {0}")]
    InvalidConfig(String),

    #[error("Invalid damage range: {0:?}")]
    InvalidRange(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, DamageError>;
