//! Chart titles and series labels

use crate::analysis::mode::DamageMode;
use crate::analysis::scenario::Scenario;

/// `"<base> (<Mode>)[ Burst| Point-blank burst][, Critical][, BRD n]"`
pub fn chart_title(base: &str, mode: DamageMode, scenario: &Scenario) -> String {
    let burst = match (scenario.burst, scenario.point_blank) {
        (true, true) => " Point-blank burst",
        (true, false) => " Burst",
        (false, _) => "",
    };

    let mut modifiers = Vec::new();
    if scenario.critical {
        modifiers.push("Critical".to_string());
    }
    if scenario.ranged_bonus > 0 {
        modifiers.push(format!("BRD {}", scenario.ranged_bonus));
    }
    let modifiers = if modifiers.is_empty() {
        String::new()
    } else {
        format!(", {}", modifiers.join(", "))
    };

    format!("{} ({}){}{}", base, mode.label(), burst, modifiers)
}

/// Series label for a weapon/ammo pair; ammo is named only when the
/// caliber offers a choice
pub(crate) fn pair_label(weapon: &str, ammo: &str, ammo_choices: usize) -> String {
    if ammo_choices > 1 {
        format!("{} + {}", weapon, ammo)
    } else {
        weapon.to_string()
    }
}
