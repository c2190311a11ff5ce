//! Series preparation for the visualisation layer
//!
//! Every chart plots damage against the vanilla armor list. Mods that ship
//! their own version of an armor (matched by name) use it instead.

pub mod labels;
pub mod mode;
pub mod scenario;
pub mod series;

pub use labels::chart_title;
pub use mode::DamageMode;
pub use scenario::{hits_multiplier, Scenario};
pub use series::{
    caliber_series, damage_table, mod_comparison, weapon_comparison, DamagePoint, DamageSeries,
    WeaponEntry,
};
