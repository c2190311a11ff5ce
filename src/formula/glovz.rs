//! Glovz damage
//!
//! Same two-stage shape as YAAM, with different rounding and guards:
//! - ammo can never add DR; a positive `dr_mod` is negated
//! - the DT step runs only when armor DT > 0, subtracting `round(DT / div)`
//! - the DR step runs only when armor DR > 0; the adjusted DR is divided by
//!   the ammo multiplier and rounded before it is applied
//! - the multiply-damage constant (6/4/2) is applied last as
//!   `floor(ND * constant / 2)`

use crate::core::error::Result;
use crate::data::{Ammo, Armor, Weapon};
use crate::formula::attack::Attack;
use crate::formula::bypass::{bypass_int, round_half_up};
use crate::formula::range::DamageRange;
use crate::formula::resistance::resolve_resistance;
use crate::formula::yaam::multiply_constant;

pub fn damage(weapon: &Weapon, ammo: &Ammo, armor: &Armor, attack: &Attack) -> Result<DamageRange> {
    ammo.validate()?;
    let b = bypass_int(resolve_resistance(armor, weapon, ammo), attack.critical, weapon.penetrate);

    let ammo_drm = -i64::from(ammo.dr_mod.abs());
    let mult = f64::from(ammo.dmg_mult);
    let div = f64::from(ammo.dmg_div);
    let multiply = multiply_constant(attack) as f64;
    let bonus = i64::from(attack.ranged_bonus);
    let hits = f64::from(attack.hits);

    let dt_loss = if b.dt > 0 {
        round_half_up(b.dt as f64 / div)
    } else {
        0.0
    };

    // Percent of the remaining damage the armor stops; a negative adjusted DR
    // skips the step instead of adding damage
    let scaled_dr = if b.dr > 0 && b.dr + ammo_drm > 0 {
        let dr = (b.dr + ammo_drm) as f64;
        let scaled = if mult > 0.0 { round_half_up(dr / mult) } else { dr };
        Some(scaled.min(100.0))
    } else {
        None
    };

    let per_bullet = |base: i32| -> f64 {
        let mut nd = (i64::from(base) + bonus) as f64 - dt_loss;
        if nd <= 0.0 {
            return 0.0;
        }
        if let Some(dr) = scaled_dr {
            nd -= round_half_up(nd * dr / 100.0);
        }
        if nd <= 0.0 {
            return 0.0;
        }
        (nd * multiply / 2.0).floor()
    };

    DamageRange::new(
        per_bullet(weapon.min_dmg) * hits,
        per_bullet(weapon.max_dmg) * hits,
    )
    .checked("glovz")
}
