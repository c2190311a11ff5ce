//! Damage formula engine
//!
//! Five historical formulas share one contract: weapon, ammo, armor and an
//! [`Attack`] in, a [`DamageRange`] out. Each keeps its own rounding order;
//! they are deliberately not unified.
//!
//! Formula ids arrive as strings from configuration. [`Formula::parse_or_default`]
//! turns them into the typed enum at the boundary, warning and falling back
//! to vanilla on anything unknown.

pub mod attack;
mod bypass;
pub mod constants;
pub mod ecco;
pub mod fo2tweaks;
pub mod glovz;
pub mod range;
pub mod resistance;
pub mod vanilla;
pub mod yaam;

pub use attack::Attack;
pub use range::{format_damage, DamageRange};
pub use resistance::{damage_type, resistance_for, resolve_resistance, Resistance};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::{DamageError, Result};
use crate::data::{Ammo, Armor, Weapon};

/// A named damage formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Formula {
    /// Vanilla Fallout 2
    #[default]
    Fallout2,
    Fo2Tweaks,
    Yaam,
    Glovz,
    Ecco,
}

impl Formula {
    pub const ALL: [Formula; 5] = [
        Formula::Fallout2,
        Formula::Ecco,
        Formula::Fo2Tweaks,
        Formula::Yaam,
        Formula::Glovz,
    ];

    /// Identifier used in configuration data
    pub fn id(&self) -> &'static str {
        match self {
            Formula::Fallout2 => "fallout2",
            Formula::Fo2Tweaks => "fo2tweaks",
            Formula::Yaam => "yaam",
            Formula::Glovz => "glovz",
            Formula::Ecco => "ecco",
        }
    }

    /// Whether results keep fractional damage
    pub fn is_fractional(&self) -> bool {
        matches!(self, Formula::Fo2Tweaks | Formula::Ecco)
    }

    /// Parse a formula id, warning and using vanilla when it is unknown
    pub fn parse_or_default(id: &str) -> Self {
        match id.parse() {
            Ok(formula) => formula,
            Err(_) => {
                tracing::warn!("Unknown formula: {}, falling back to fallout2", id);
                Formula::Fallout2
            }
        }
    }

    pub fn evaluate(
        &self,
        weapon: &Weapon,
        ammo: &Ammo,
        armor: &Armor,
        attack: &Attack,
    ) -> Result<DamageRange> {
        match self {
            Formula::Fallout2 => vanilla::damage(weapon, ammo, armor, attack),
            Formula::Fo2Tweaks => fo2tweaks::damage(weapon, ammo, armor, attack),
            Formula::Yaam => yaam::damage(weapon, ammo, armor, attack),
            Formula::Glovz => glovz::damage(weapon, ammo, armor, attack),
            Formula::Ecco => ecco::damage(weapon, ammo, armor, attack),
        }
    }
}

impl FromStr for Formula {
    type Err = DamageError;

    fn from_str(s: &str) -> Result<Self> {
        Formula::ALL
            .into_iter()
            .find(|f| f.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DamageError::UnknownFormula(s.to_string()))
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// String entry point: evaluate `formula_id` and render the range
///
/// Unknown ids fall back to vanilla. The result is `"min-max"`, or `"0"`
/// when nothing gets through.
#[allow(clippy::too_many_arguments)]
pub fn compute_damage(
    formula_id: &str,
    weapon: &Weapon,
    ammo: &Ammo,
    armor: &Armor,
    critical: bool,
    burst: bool,
    ranged_bonus: i32,
    hits: u32,
    sniper_luck: bool,
) -> Result<String> {
    let attack = Attack {
        critical,
        burst,
        ranged_bonus,
        hits,
        sniper_luck,
    };
    let range = Formula::parse_or_default(formula_id).evaluate(weapon, ammo, armor, &attack)?;
    Ok(range.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> (Weapon, Ammo, Armor) {
        (
            Weapon::new("Test gun", "10mm", 10, 16),
            Ammo::new("Plain", "10mm", 0, 1, 1),
            Armor::uniform("Vest", 50, 10),
        )
    }

    #[test]
    fn test_parse_ids() {
        for formula in Formula::ALL {
            assert_eq!(formula.id().parse::<Formula>().unwrap(), formula);
        }
        assert_eq!("FO2Tweaks".parse::<Formula>().unwrap(), Formula::Fo2Tweaks);
        assert!(matches!(
            "nope".parse::<Formula>(),
            Err(DamageError::UnknownFormula(_))
        ));
    }

    #[test]
    fn test_unknown_falls_back_to_vanilla() {
        assert_eq!(Formula::parse_or_default("mystery"), Formula::Fallout2);

        let (weapon, ammo, armor) = fixture();
        let fallback =
            compute_damage("mystery", &weapon, &ammo, &armor, true, false, 0, 1, false).unwrap();
        let vanilla =
            compute_damage("fallout2", &weapon, &ammo, &armor, true, false, 0, 1, false).unwrap();
        assert_eq!(fallback, vanilla);
    }

    #[test]
    fn test_critical_min_side() {
        let (weapon, ammo, armor) = fixture();
        let out =
            compute_damage("fallout2", &weapon, &ammo, &armor, true, false, 0, 1, false).unwrap();
        assert!(out.starts_with("25-"));
    }

    #[test]
    fn test_zero_renders_single_value() {
        let weapon = Weapon::new("Pea shooter", "BB", 1, 2);
        let ammo = Ammo::new("BB", "BB", 0, 1, 1);
        let armor = Armor::uniform("Power Armor", 40, 12);
        for formula in Formula::ALL {
            let out =
                compute_damage(formula.id(), &weapon, &ammo, &armor, false, false, 0, 1, false)
                    .unwrap();
            assert_eq!(out, "0", "{}", formula);
        }
    }

    #[test]
    fn test_serde_ids() {
        let json = serde_json::to_string(&Formula::Fo2Tweaks).unwrap();
        assert_eq!(json, "\"fo2tweaks\"");
        let parsed: Formula = serde_json::from_str("\"ecco\"").unwrap();
        assert_eq!(parsed, Formula::Ecco);
    }
}
