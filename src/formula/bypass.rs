//! Armor bypass and rounding shared by the variants
//!
//! A critical hit keeps only 20% of DR and DT. Penetrate divides DT by 5
//! but only on non-critical hits; the two never stack.

use crate::formula::constants::{
    CRITICAL_BYPASS_FACTOR, CRITICAL_BYPASS_PERCENT, PENETRATE_DT_DIVISOR,
};
use crate::formula::resistance::Resistance;

/// Armor stats after bypass
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Bypassed<T> {
    pub dr: T,
    pub dt: T,
}

/// Float bypass; penetrate divides without truncation
pub(crate) fn bypass_float(res: Resistance, critical: bool, penetrate: bool) -> Bypassed<f64> {
    let dr = f64::from(res.dr);
    let dt = f64::from(res.dt);
    if critical {
        Bypassed {
            dr: dr * CRITICAL_BYPASS_FACTOR,
            dt: dt * CRITICAL_BYPASS_FACTOR,
        }
    } else if penetrate {
        Bypassed {
            dr,
            dt: dt / PENETRATE_DT_DIVISOR as f64,
        }
    } else {
        Bypassed { dr, dt }
    }
}

/// Integer bypass; both steps floor
pub(crate) fn bypass_int(res: Resistance, critical: bool, penetrate: bool) -> Bypassed<i64> {
    let dr = i64::from(res.dr);
    let dt = i64::from(res.dt);
    if critical {
        Bypassed {
            dr: (dr * CRITICAL_BYPASS_PERCENT).div_euclid(100),
            dt: (dt * CRITICAL_BYPASS_PERCENT).div_euclid(100),
        }
    } else if penetrate {
        Bypassed {
            dr,
            dt: dt.div_euclid(PENETRATE_DT_DIVISOR),
        }
    } else {
        Bypassed { dr, dt }
    }
}

/// Round to nearest, halves toward positive infinity
pub(crate) fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}
