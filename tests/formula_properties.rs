//! Property tests for the damage formulas.
//!
//! Run longer with: PROPTEST_CASES=20000 cargo test --release formula_properties

#![allow(clippy::unwrap_used)]

use proptest::prelude::*;

use fo2dmg::data::{Ammo, Armor, Weapon};
use fo2dmg::{Attack, DamageRange, Formula};

const EPS: f64 = 1e-9;

fn weapon(min: i32, extra: i32) -> Weapon {
    Weapon::new("Gun", "cal", min, min + extra)
}

fn ammo(dr_mod: i32, mult: i32, div: i32) -> Ammo {
    Ammo::new("Round", "cal", dr_mod, mult, div)
}

fn attack(critical: bool, burst: bool, ranged_bonus: i32, hits: u32, sniper_luck: bool) -> Attack {
    Attack {
        critical,
        burst,
        ranged_bonus,
        hits,
        sniper_luck,
    }
}

fn eval(formula: Formula, w: &Weapon, a: &Ammo, armor: &Armor, atk: &Attack) -> DamageRange {
    formula.evaluate(w, a, armor, atk).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    /// The low roll never beats the high roll.
    #[test]
    fn min_never_exceeds_max(
        min in 0i32..40, extra in 0i32..40,
        dr_mod in -50i32..50, mult in 1i32..4, div in 1i32..4,
        dr in 0i32..95, dt in 0i32..30,
        critical in any::<bool>(), burst in any::<bool>(),
        rb in 0i32..10, hits in 0u32..15, luck in any::<bool>()
    ) {
        let w = weapon(min, extra);
        let a = ammo(dr_mod, mult, div);
        let armor = Armor::uniform("A", dr, dt);
        let atk = attack(critical, burst, rb, hits, luck);
        for formula in Formula::ALL {
            let r = eval(formula, &w, &a, &armor, &atk);
            prop_assert!(r.min >= 0.0, "{} negative min {}", formula, r.min);
            prop_assert!(r.min <= r.max + EPS, "{} {} > {}", formula, r.min, r.max);
        }
    }

    /// More DR or more DT never means more damage.
    #[test]
    fn armor_is_monotone(
        min in 0i32..40, extra in 0i32..40,
        dr_mod in -50i32..50, mult in 1i32..4, div in 1i32..4,
        dr in 0i32..95, dt in 0i32..30,
        more_dr in 0i32..20, more_dt in 0i32..10,
        critical in any::<bool>(), burst in any::<bool>(),
        rb in 0i32..10, hits in 0u32..15
    ) {
        let w = weapon(min, extra);
        let a = ammo(dr_mod, mult, div);
        let atk = attack(critical, burst, rb, hits, false);
        let light = Armor::uniform("Light", dr, dt);
        let heavier_dr = Armor::uniform("DR", dr + more_dr, dt);
        let heavier_dt = Armor::uniform("DT", dr, dt + more_dt);
        for formula in Formula::ALL {
            let base = eval(formula, &w, &a, &light, &atk);
            for heavy in [&heavier_dr, &heavier_dt] {
                let r = eval(formula, &w, &a, heavy, &atk);
                prop_assert!(r.min <= base.min + EPS, "{} min {} > {}", formula, r.min, base.min);
                prop_assert!(r.max <= base.max + EPS, "{} max {} > {}", formula, r.max, base.max);
            }
        }
    }

    /// Bonus ranged damage and extra hits never lower damage.
    #[test]
    fn bonus_and_hits_are_monotone(
        min in 0i32..40, extra in 0i32..40,
        dr_mod in -50i32..50, mult in 1i32..4, div in 1i32..4,
        dr in 0i32..95, dt in 0i32..30,
        critical in any::<bool>(), luck in any::<bool>(),
        rb in 0i32..10, hits in 0u32..15
    ) {
        let w = weapon(min, extra);
        let a = ammo(dr_mod, mult, div);
        let armor = Armor::uniform("A", dr, dt);
        for formula in Formula::ALL {
            let base = eval(formula, &w, &a, &armor, &attack(critical, true, rb, hits, luck));
            let bonus = eval(formula, &w, &a, &armor, &attack(critical, true, rb + 1, hits, luck));
            let more = eval(formula, &w, &a, &armor, &attack(critical, true, rb, hits + 1, luck));
            prop_assert!(bonus.max + EPS >= base.max, "{} bonus {} < {}", formula, bonus.max, base.max);
            prop_assert!(bonus.min + EPS >= base.min, "{} bonus {} < {}", formula, bonus.min, base.min);
            prop_assert!(more.max + EPS >= base.max, "{} hits {} < {}", formula, more.max, base.max);
            prop_assert!(more.min + EPS >= base.min, "{} hits {} < {}", formula, more.min, base.min);
        }
    }

    /// Zero-resistance armor behaves as no armor and beats any real armor.
    #[test]
    fn unarmored_is_upper_bound(
        min in 0i32..40, extra in 0i32..40,
        dr_mod in -50i32..50, mult in 1i32..4, div in 1i32..4,
        dr in 0i32..95, dt in 0i32..30,
        critical in any::<bool>(), burst in any::<bool>(),
        rb in 0i32..10, hits in 0u32..15, luck in any::<bool>()
    ) {
        let w = weapon(min, extra);
        let a = ammo(dr_mod, mult, div);
        let atk = attack(critical, burst, rb, hits, luck);
        let zero = Armor::uniform("Zero", 0, 0);
        let armor = Armor::uniform("A", dr, dt);
        for formula in Formula::ALL {
            let open = eval(formula, &w, &a, &zero, &atk);
            prop_assert_eq!(open, eval(formula, &w, &a, &Armor::none(), &atk));
            let r = eval(formula, &w, &a, &armor, &atk);
            prop_assert!(r.max <= open.max + EPS);
            prop_assert!(r.min <= open.min + EPS);
        }
    }

    /// Same inputs, same text; unknown ids read as fallout2.
    #[test]
    fn deterministic_with_fallback(
        min in 0i32..40, extra in 0i32..40,
        dr_mod in -50i32..50, mult in 1i32..4, div in 1i32..4,
        dr in 0i32..95, dt in 0i32..30,
        critical in any::<bool>(), burst in any::<bool>(),
        rb in 0i32..10, hits in 0u32..15, luck in any::<bool>(),
        unknown in "[a-z]{1,8}[0-9]"
    ) {
        let w = weapon(min, extra);
        let a = ammo(dr_mod, mult, div);
        let armor = Armor::uniform("A", dr, dt);
        let run = |id: &str| {
            fo2dmg::compute_damage(id, &w, &a, &armor, critical, burst, rb, hits, luck).unwrap()
        };
        for formula in Formula::ALL {
            prop_assert_eq!(run(formula.id()), run(formula.id()));
        }
        prop_assert_eq!(run(&unknown), run("fallout2"));
    }
}
