//! FO2tweaks damage
//!
//! All arithmetic stays in floating point; only display rounds.
//!
//! ```text
//! scale  = (100 + dr_mod) / 100
//! DT     = max(0, bypassed DT * scale)
//! DR     = bypassed DR * scale          if dr_mod > 0
//!          bypassed DR + dr_mod         otherwise
//!          clamped to [0, 90]
//! bullet = max(0, (base + ranged_bonus - DT) * scale * crit * (100 - DR) / 100)
//! ```
//!
//! The ammo's `dmg_mult/dmg_div` plays no part here; `scale` is the ammo
//! damage multiplier.
//!
//! Bursts blend crit and non-crit bullets by the per-bullet crit chance
//! (5%, or 1/3 with Sniper and 10 Luck). A requested critical burst makes
//! the first bullet a crit and blends the rest.

use crate::core::error::Result;
use crate::data::{Ammo, Armor, Weapon};
use crate::formula::attack::Attack;
use crate::formula::bypass::bypass_float;
use crate::formula::constants::{
    FO2TWEAKS_BASE_CRIT_CHANCE, FO2TWEAKS_CRIT_MULT, FO2TWEAKS_DR_CAP,
    FO2TWEAKS_SNIPER_CRIT_CHANCE,
};
use crate::formula::range::DamageRange;
use crate::formula::resistance::{resolve_resistance, Resistance};

struct Shot {
    res: Resistance,
    penetrate: bool,
    dr_mod: i32,
    bonus: f64,
}

impl Shot {
    fn bullet(&self, base: i32, critical: bool) -> f64 {
        let scale = (100.0 + f64::from(self.dr_mod)) / 100.0;
        let b = bypass_float(self.res, critical, self.penetrate);

        let dt = (b.dt * scale).max(0.0);
        let dr = if self.dr_mod > 0 {
            b.dr * scale
        } else {
            b.dr + f64::from(self.dr_mod)
        };
        let dr = dr.clamp(0.0, FO2TWEAKS_DR_CAP);
        let crit = if critical { FO2TWEAKS_CRIT_MULT } else { 1.0 };

        ((f64::from(base) + self.bonus - dt) * scale * crit * (100.0 - dr) / 100.0).max(0.0)
    }
}

/// Expected burst damage for the given per-bullet values
fn blended_burst(normal: f64, crit: f64, attack: &Attack) -> f64 {
    if attack.hits == 0 {
        return 0.0;
    }
    let chance = if attack.sniper_luck {
        FO2TWEAKS_SNIPER_CRIT_CHANCE
    } else {
        FO2TWEAKS_BASE_CRIT_CHANCE
    };
    let mixed = (1.0 - chance) * normal + chance * crit;
    let hits = f64::from(attack.hits);
    if attack.critical {
        crit + (hits - 1.0) * mixed
    } else {
        hits * mixed
    }
}

pub fn damage(weapon: &Weapon, ammo: &Ammo, armor: &Armor, attack: &Attack) -> Result<DamageRange> {
    ammo.validate()?;
    let shot = Shot {
        res: resolve_resistance(armor, weapon, ammo),
        penetrate: weapon.penetrate,
        dr_mod: ammo.dr_mod,
        bonus: f64::from(attack.ranged_bonus),
    };

    let total = |base: i32| {
        if attack.burst {
            blended_burst(shot.bullet(base, false), shot.bullet(base, true), attack)
        } else {
            shot.bullet(base, attack.critical) * f64::from(attack.hits)
        }
    };

    DamageRange::new(total(weapon.min_dmg), total(weapon.max_dmg)).checked("fo2tweaks")
}
