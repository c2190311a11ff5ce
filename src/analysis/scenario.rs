//! Attack scenario chosen by the user, resolved per weapon

use serde::{Deserialize, Serialize};

use crate::data::Weapon;
use crate::formula::Attack;

/// Bullets assumed to land
///
/// A burst lands a third of its rounds (rounded), or all of them at point
/// blank range. Single shots land one.
pub fn hits_multiplier(burst: bool, point_blank: bool, burst_rounds: u32) -> u32 {
    if !burst {
        1
    } else if point_blank {
        burst_rounds
    } else {
        // round(rounds / 3); thirds never land on .5
        (burst_rounds + 1) / 3
    }
}

/// Modifiers applied to every weapon in a chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Scenario {
    pub burst: bool,
    pub point_blank: bool,
    pub critical: bool,
    pub ranged_bonus: i32,
    pub sniper_luck: bool,
}

impl Scenario {
    /// Whether `weapon` fires a burst under this scenario
    ///
    /// Only burst-capable weapons burst. Burst-only weapons always do.
    pub fn bursts(&self, weapon: &Weapon) -> bool {
        weapon.supports_burst() && (self.burst || weapon.burst_only)
    }

    pub fn attack_for(&self, weapon: &Weapon) -> Attack {
        let burst = self.bursts(weapon);
        Attack {
            critical: self.critical,
            burst,
            ranged_bonus: self.ranged_bonus,
            hits: hits_multiplier(burst, self.point_blank, weapon.burst_rounds()),
            sniper_luck: self.sniper_luck,
        }
    }
}
