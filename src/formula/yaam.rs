//! YAAM (Yet Another Ammo Mod) damage
//!
//! Integer arithmetic, truncating at every step. Ammo `dr_mod` acts as an
//! ammo DT that is subtracted from armor DT. When that drives DT below zero
//! the deficit, times ten, is added to DR and DT itself stops at zero:
//!
//! ```text
//! calcDT = DT - dr_mod
//! calcDR = DR + 10 * calcDT   if calcDT < 0 (then calcDT = 0)
//! raw    = (base + ranged_bonus - calcDT) * multiply * mult / 2 / div
//! damage = raw - floor(calcDR * raw / 100)
//! ```
//!
//! A negative DR bonus can therefore be far larger than the DT it came from.

use crate::core::error::Result;
use crate::data::{Ammo, Armor, Weapon};
use crate::formula::attack::Attack;
use crate::formula::bypass::bypass_int;
use crate::formula::constants::{
    MULTIPLY_BURST_CRIT, MULTIPLY_NORMAL, MULTIPLY_SINGLE_CRIT, YAAM_NEGATIVE_DT_TO_DR,
};
use crate::formula::range::DamageRange;
use crate::formula::resistance::resolve_resistance;

/// Multiply-damage constant shared with Glovz
pub(crate) fn multiply_constant(attack: &Attack) -> i64 {
    match (attack.critical, attack.burst) {
        (true, false) => MULTIPLY_SINGLE_CRIT,
        (true, true) => MULTIPLY_BURST_CRIT,
        (false, _) => MULTIPLY_NORMAL,
    }
}

pub fn damage(weapon: &Weapon, ammo: &Ammo, armor: &Armor, attack: &Attack) -> Result<DamageRange> {
    ammo.validate()?;
    let b = bypass_int(resolve_resistance(armor, weapon, ammo), attack.critical, weapon.penetrate);

    let mut calc_dt = b.dt - i64::from(ammo.dr_mod);
    let mut dr_shift = 0;
    if calc_dt < 0 {
        dr_shift = calc_dt * YAAM_NEGATIVE_DT_TO_DR;
        calc_dt = 0;
    }
    let calc_dr = (b.dr + dr_shift).max(0);
    if calc_dr >= 100 {
        return Ok(DamageRange::zero());
    }

    let multiply = multiply_constant(attack);
    let mult = i64::from(ammo.dmg_mult);
    let div = i64::from(ammo.dmg_div);
    let bonus = i64::from(attack.ranged_bonus);
    let hits = i64::from(attack.hits);

    let per_bullet = |base: i32| -> i64 {
        let raw = i64::from(base) + bonus - calc_dt;
        if raw <= 0 {
            return 0;
        }
        let raw = raw * multiply * mult / 2 / div;
        let resisted = calc_dr * raw / 100;
        (raw - resisted).max(0)
    };

    DamageRange::new(
        (per_bullet(weapon.min_dmg) * hits) as f64,
        (per_bullet(weapon.max_dmg) * hits) as f64,
    )
    .checked("yaam")
}
