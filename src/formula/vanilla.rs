//! Vanilla Fallout 2 damage
//!
//! ```text
//! per shot = round(max(0, ((base * mult/div + ranged_bonus) * crit - DT) * (100 - DR) / 100))
//! DR       = clamp(DR + ammo dr_mod, 0, 90)
//! crit     = 3 single / 2 burst (the tables already fold in a base x2)
//! ```
//!
//! Critical hits keep 20% of armor. Penetrate floors DT / 5 on non-critical
//! hits. Rounding happens once per shot, before multiplying by hits.

use crate::core::error::Result;
use crate::data::{Ammo, Armor, Weapon};
use crate::formula::attack::Attack;
use crate::formula::bypass::{bypass_float, bypass_int, round_half_up};
use crate::formula::constants::{VANILLA_CRIT_MULT_BURST, VANILLA_CRIT_MULT_SINGLE, VANILLA_DR_CAP};
use crate::formula::range::DamageRange;
use crate::formula::resistance::resolve_resistance;

pub fn damage(weapon: &Weapon, ammo: &Ammo, armor: &Armor, attack: &Attack) -> Result<DamageRange> {
    ammo.validate()?;
    let res = resolve_resistance(armor, weapon, ammo);

    let (dr, dt) = if attack.critical {
        let b = bypass_float(res, true, false);
        (b.dr, b.dt)
    } else {
        let b = bypass_int(res, false, weapon.penetrate);
        (b.dr as f64, b.dt as f64)
    };
    let dr = (dr + f64::from(ammo.dr_mod)).clamp(0.0, VANILLA_DR_CAP);

    let crit_mult = match (attack.critical, attack.burst) {
        (true, false) => VANILLA_CRIT_MULT_SINGLE,
        (true, true) => VANILLA_CRIT_MULT_BURST,
        (false, _) => 1.0,
    };
    let factor = ammo.damage_factor();
    let bonus = f64::from(attack.ranged_bonus);
    let hits = f64::from(attack.hits);

    let per_shot = |base: i32| {
        let raw = (f64::from(base) * factor + bonus) * crit_mult - dt;
        round_half_up((raw * (100.0 - dr) / 100.0).max(0.0))
    };

    DamageRange::new(per_shot(weapon.min_dmg) * hits, per_shot(weapon.max_dmg) * hits)
        .checked("fallout2")
}
