//! fo2dmg - Fallout 2 damage calculator
//!
//! Weapon vs armor damage under vanilla rules and four community damage
//! formulas (FO2tweaks, YAAM, Glovz, EcCo).

pub mod analysis;
pub mod core;
pub mod data;
pub mod formula;

pub use crate::core::error::{DamageError, Result};
pub use crate::formula::{compute_damage, resolve_resistance, Attack, DamageRange, Formula};
