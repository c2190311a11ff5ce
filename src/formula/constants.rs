//! Formula constants - every tunable number the variants share or own
//!
//! The crit chances and the EcCo burst split approximate the game's per-shot
//! RNG. They are fixed values, not derived ones.

// Armor bypass
/// Share of armor DR/DT a critical hit leaves in place, in percent
pub const CRITICAL_BYPASS_PERCENT: i64 = 20;
pub const CRITICAL_BYPASS_FACTOR: f64 = 0.2;
/// Penetrate divides DT by this (never stacks with a critical bypass)
pub const PENETRATE_DT_DIVISOR: i64 = 5;

// Vanilla
pub const VANILLA_DR_CAP: f64 = 90.0;
pub const VANILLA_CRIT_MULT_SINGLE: f64 = 3.0;
pub const VANILLA_CRIT_MULT_BURST: f64 = 2.0;

// FO2tweaks
pub const FO2TWEAKS_DR_CAP: f64 = 90.0;
pub const FO2TWEAKS_CRIT_MULT: f64 = 2.0;
/// Per-bullet crit chance at base luck
pub const FO2TWEAKS_BASE_CRIT_CHANCE: f64 = 0.05;
/// Per-bullet crit chance with Sniper and 10 Luck
pub const FO2TWEAKS_SNIPER_CRIT_CHANCE: f64 = 1.0 / 3.0;

// YAAM and Glovz multiply-damage constants (halved after multiplying)
pub const MULTIPLY_SINGLE_CRIT: i64 = 6;
pub const MULTIPLY_BURST_CRIT: i64 = 4;
pub const MULTIPLY_NORMAL: i64 = 2;
/// YAAM turns each point of negative DT into this many points of DR
pub const YAAM_NEGATIVE_DT_TO_DR: i64 = 10;

// EcCo
pub const ECCO_DR_CAP: f64 = 100.0;
/// AP ammo lowers DT by `dr_mod / ECCO_AP_DT_DIVISOR * ECCO_AP_DT_FACTOR`
pub const ECCO_AP_DT_DIVISOR: f64 = 10.0;
pub const ECCO_AP_DT_FACTOR: f64 = 1.3;
/// Share of a critical burst that lands as crits (rounded up)
pub const ECCO_BURST_CRIT_SHARE: f64 = 0.5;
