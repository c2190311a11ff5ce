pub mod config;
pub mod error;
pub mod types;

pub use config::{ModConfig, ModRegistry};
pub use error::{DamageError, Result};
pub use types::{DamageType, VANILLA_MOD_ID};
