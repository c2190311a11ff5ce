//! Damage ranges and their text form
//!
//! The text form is what every consumer reads: `"min-max"`, or a bare `"0"`
//! when both ends are zero. Values print with at most one decimal and no
//! trailing `.0`, so integer variants print as plain integers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::{DamageError, Result};

/// Total damage of an attack for the lowest and highest base roll
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DamageRange {
    pub min: f64,
    pub max: f64,
}

impl DamageRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    pub fn is_zero(&self) -> bool {
        self.min == 0.0 && self.max == 0.0
    }

    pub fn average(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    /// Reject NaN or infinite ends instead of passing them downstream
    pub fn checked(self, formula: &'static str) -> Result<Self> {
        for value in [self.min, self.max] {
            if !value.is_finite() {
                return Err(DamageError::NonFinite { formula, value });
            }
        }
        Ok(self)
    }
}

/// Format one damage value: one decimal at most, `.0` dropped
pub fn format_damage(value: f64) -> String {
    let text = format!("{:.1}", value);
    match text.strip_suffix(".0") {
        // also catches -0.0 and tiny negatives
        Some("0") | Some("-0") => "0".to_string(),
        Some(whole) => whole.to_string(),
        None => text,
    }
}

impl fmt::Display for DamageRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let min = format_damage(self.min);
        let max = format_damage(self.max);
        if min == "0" && max == "0" {
            f.write_str("0")
        } else {
            write!(f, "{}-{}", min, max)
        }
    }
}

impl FromStr for DamageRange {
    type Err = DamageError;

    /// Parse `"min-max"` or a single value
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || DamageError::InvalidRange(s.to_string());
        let parse = |part: &str| part.trim().parse::<f64>().map_err(|_| invalid());

        let range = match s.split_once('-') {
            Some((min, max)) => Self::new(parse(min)?, parse(max)?),
            None => {
                let value = parse(s)?;
                Self::new(value, value)
            }
        };
        if !range.min.is_finite() || !range.max.is_finite() {
            return Err(invalid());
        }
        Ok(range)
    }
}
