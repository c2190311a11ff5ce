//! Which part of a damage range a chart shows

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::DamageError;
use crate::formula::{format_damage, DamageRange};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DamageMode {
    #[default]
    Average,
    Min,
    Max,
    /// Both ends
    Range,
}

impl DamageMode {
    /// Single plotted value; `Range` plots the average as its centre line
    pub fn value(&self, range: &DamageRange) -> f64 {
        match self {
            DamageMode::Min => range.min,
            DamageMode::Max => range.max,
            DamageMode::Average | DamageMode::Range => range.average(),
        }
    }

    /// Cell text for tables
    pub fn render(&self, range: &DamageRange) -> String {
        match self {
            DamageMode::Range => range.to_string(),
            _ => format_damage(self.value(range)),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DamageMode::Average => "Average",
            DamageMode::Min => "Min",
            DamageMode::Max => "Max",
            DamageMode::Range => "Range",
        }
    }
}

impl fmt::Display for DamageMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DamageMode {
    type Err = DamageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "average" | "avg" => Ok(DamageMode::Average),
            "min" => Ok(DamageMode::Min),
            "max" => Ok(DamageMode::Max),
            "range" => Ok(DamageMode::Range),
            other => Err(DamageError::InvalidConfig(format!(
                "unknown damage mode '{}'",
                other
            ))),
        }
    }
}
