//! Weapon, ammo and armor records as produced by the data-loading step
//!
//! Records are plain values. They are built once when the data document is
//! loaded and never mutated afterwards.

pub mod ammo;
pub mod armor;
pub mod tables;
pub mod weapon;

pub use ammo::Ammo;
pub use armor::Armor;
pub use tables::{ModData, ModTables};
pub use weapon::Weapon;
