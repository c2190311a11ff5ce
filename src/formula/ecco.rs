//! EcCo (Economy and Combat Overhaul) damage
//!
//! Floating point, vanilla-shaped, with one asymmetric ammo rule: only
//! armor-piercing ammo (`dr_mod < 0`) touches DT, lowering it by
//! `dr_mod / 10 * 1.3`. Hollow points only affect DR.
//!
//! A critical burst lands half its bullets (rounded up) as crits and the
//! rest as normal hits. Sniper luck turns every bullet of it into a crit.

use crate::core::error::Result;
use crate::data::{Ammo, Armor, Weapon};
use crate::formula::attack::Attack;
use crate::formula::bypass::bypass_float;
use crate::formula::constants::{
    ECCO_AP_DT_DIVISOR, ECCO_AP_DT_FACTOR, ECCO_BURST_CRIT_SHARE, ECCO_DR_CAP,
    VANILLA_CRIT_MULT_BURST, VANILLA_CRIT_MULT_SINGLE,
};
use crate::formula::range::DamageRange;
use crate::formula::resistance::resolve_resistance;

pub fn damage(weapon: &Weapon, ammo: &Ammo, armor: &Armor, attack: &Attack) -> Result<DamageRange> {
    ammo.validate()?;
    let res = resolve_resistance(armor, weapon, ammo);
    let dr_mod = f64::from(ammo.dr_mod);
    let factor = ammo.damage_factor();
    let bonus = f64::from(attack.ranged_bonus);

    let bullet = |base: i32, critical: bool| -> f64 {
        let b = bypass_float(res, critical, weapon.penetrate);
        let dt = if ammo.dr_mod < 0 {
            (b.dt + dr_mod / ECCO_AP_DT_DIVISOR * ECCO_AP_DT_FACTOR).max(0.0)
        } else {
            b.dt
        };
        let dr = (b.dr + dr_mod).clamp(0.0, ECCO_DR_CAP);
        let crit = match (critical, attack.burst) {
            (true, false) => VANILLA_CRIT_MULT_SINGLE,
            (true, true) => VANILLA_CRIT_MULT_BURST,
            (false, _) => 1.0,
        };
        (((f64::from(base) * factor + bonus) * crit - dt) * (100.0 - dr) / 100.0).max(0.0)
    };

    let total = |base: i32| -> f64 {
        let hits = f64::from(attack.hits);
        if attack.burst && attack.critical && !attack.sniper_luck {
            let crits = (hits * ECCO_BURST_CRIT_SHARE).ceil();
            crits * bullet(base, true) + (hits - crits) * bullet(base, false)
        } else {
            bullet(base, attack.critical) * hits
        }
    };

    DamageRange::new(total(weapon.min_dmg), total(weapon.max_dmg)).checked("ecco")
}
