//! Situational modifiers of a single attack

use serde::{Deserialize, Serialize};

/// How the shot is fired
///
/// `hits` is the number of bullets assumed to land. The caller derives it
/// from the weapon's burst size (see `analysis::Scenario`); formulas only
/// multiply by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attack {
    pub critical: bool,
    pub burst: bool,
    /// Bonus Ranged Damage perk, added to each bullet
    pub ranged_bonus: i32,
    pub hits: u32,
    /// Sniper perk with 10 Luck
    pub sniper_luck: bool,
}

impl Attack {
    /// Aimed single shot, no modifiers
    pub fn single() -> Self {
        Self {
            critical: false,
            burst: false,
            ranged_bonus: 0,
            hits: 1,
            sniper_luck: false,
        }
    }

    /// Burst with `hits` bullets landing
    pub fn burst(hits: u32) -> Self {
        Self {
            burst: true,
            hits,
            ..Self::single()
        }
    }

    pub fn with_critical(mut self) -> Self {
        self.critical = true;
        self
    }

    pub fn with_ranged_bonus(mut self, bonus: i32) -> Self {
        self.ranged_bonus = bonus;
        self
    }

    pub fn with_sniper_luck(mut self) -> Self {
        self.sniper_luck = true;
        self
    }

    pub fn with_hits(mut self, hits: u32) -> Self {
        self.hits = hits;
        self
    }
}

impl Default for Attack {
    fn default() -> Self {
        Self::single()
    }
}
