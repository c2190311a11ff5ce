//! Armor records
//!
//! DR is a percentage reduction, DT a flat amount subtracted first. The game
//! tracks separate pairs per damage type; EMP and electrical have no pair of
//! their own in the data.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Armor {
    pub name: String,
    #[serde(default)]
    pub abbrev: String,
    pub dr: i32,
    pub dt: i32,
    #[serde(default)]
    pub dr_fire: i32,
    #[serde(default)]
    pub dt_fire: i32,
    #[serde(default)]
    pub dr_plasma: i32,
    #[serde(default)]
    pub dt_plasma: i32,
    #[serde(default)]
    pub dr_laser: i32,
    #[serde(default)]
    pub dt_laser: i32,
    #[serde(default)]
    pub dr_explosive: i32,
    #[serde(default)]
    pub dt_explosive: i32,
}

impl Armor {
    /// Armor with the same (dr, dt) for every damage type
    pub fn uniform(name: &str, dr: i32, dt: i32) -> Self {
        Self {
            name: name.to_string(),
            abbrev: name.chars().take(3).collect(),
            dr,
            dt,
            dr_fire: dr,
            dt_fire: dt,
            dr_plasma: dr,
            dt_plasma: dt,
            dr_laser: dr,
            dt_laser: dt,
            dr_explosive: dr,
            dt_explosive: dt,
        }
    }

    /// No protection at all
    pub fn none() -> Self {
        Self::uniform("No armor", 0, 0)
    }
}
