//! Damage series over the reference armor list
//!
//! A series is one weapon/ammo pair evaluated against every reference
//! armor. Series are evaluated in parallel; output keeps input order.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analysis::labels::pair_label;
use crate::analysis::scenario::Scenario;
use crate::core::config::ModRegistry;
use crate::core::error::{DamageError, Result};
use crate::data::{Ammo, Armor, ModData, ModTables, Weapon};
use crate::formula::{Attack, DamageRange, Formula};

/// Damage against one armor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamagePoint {
    pub armor: String,
    pub range: DamageRange,
}

/// One plotted line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamageSeries {
    pub label: String,
    pub mod_id: String,
    pub weapon: String,
    pub ammo: String,
    pub points: Vec<DamagePoint>,
}

/// A weapon/ammo pick for the weapon comparison chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponEntry {
    pub mod_id: String,
    pub weapon: String,
    pub ammo: String,
}

/// Work item: everything needed to evaluate one series
struct Job<'a> {
    label: String,
    mod_id: &'a str,
    formula: Formula,
    tables: &'a ModTables,
    weapon: &'a Weapon,
    ammo: &'a Ammo,
    attack: Attack,
}

impl Job<'_> {
    fn run(self, axis: &[Armor]) -> Result<DamageSeries> {
        let points = axis
            .iter()
            .map(|reference| {
                let armor = self.tables.armor_or(reference);
                let range = self
                    .formula
                    .evaluate(self.weapon, self.ammo, armor, &self.attack)?;
                Ok(DamagePoint {
                    armor: reference.name.clone(),
                    range,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(DamageSeries {
            label: self.label,
            mod_id: self.mod_id.to_string(),
            weapon: self.weapon.name.clone(),
            ammo: self.ammo.name.clone(),
            points,
        })
    }
}

fn run_jobs(jobs: Vec<Job<'_>>, axis: &[Armor]) -> Result<Vec<DamageSeries>> {
    tracing::debug!(
        "Evaluating {} series against {} armors",
        jobs.len(),
        axis.len()
    );
    jobs.into_par_iter().map(|job| job.run(axis)).collect()
}

/// Every weapon x compatible ammo of a mod, optionally limited to a caliber
pub fn damage_table(
    data: &ModData,
    registry: &ModRegistry,
    mod_id: &str,
    caliber: Option<&str>,
    scenario: &Scenario,
) -> Result<Vec<DamageSeries>> {
    let axis = &data.vanilla()?.armor;
    let tables = data.require(mod_id)?;
    let formula = registry.require(mod_id)?.formula();

    let mut jobs = Vec::new();
    for weapon in &tables.weapons {
        if caliber.is_some_and(|c| c != weapon.caliber) {
            continue;
        }
        let ammo: Vec<&Ammo> = tables.compatible_ammo(weapon).collect();
        let attack = scenario.attack_for(weapon);
        for round in ammo.iter().copied() {
            jobs.push(Job {
                label: pair_label(&weapon.name, &round.name, ammo.len()),
                mod_id,
                formula,
                tables,
                weapon,
                ammo: round,
                attack,
            });
        }
    }

    run_jobs(jobs, axis)
}

/// Weapons and ammo of one caliber in one mod
///
/// A caliber with no ammo in this mod yields no series.
pub fn caliber_series(
    data: &ModData,
    registry: &ModRegistry,
    mod_id: &str,
    caliber: &str,
    scenario: &Scenario,
) -> Result<Vec<DamageSeries>> {
    damage_table(data, registry, mod_id, Some(caliber), scenario)
}

/// One weapon and ammo name across every mod, in registry order
///
/// Each mod uses its own version of the weapon when it has one. Mods
/// without that ammo for the weapon's caliber are skipped.
pub fn mod_comparison(
    data: &ModData,
    registry: &ModRegistry,
    weapon: &Weapon,
    ammo_name: &str,
    scenario: &Scenario,
) -> Result<Vec<DamageSeries>> {
    let axis = &data.vanilla()?.armor;

    let mut jobs = Vec::new();
    for config in registry.ordered() {
        let Some(tables) = data.get(&config.id) else {
            continue;
        };
        let mod_weapon = tables.find_weapon(&weapon.name).unwrap_or(weapon);
        let Some(ammo) = tables.find_ammo(ammo_name, &mod_weapon.caliber) else {
            tracing::debug!("{} has no {} for {}", config.id, ammo_name, weapon.name);
            continue;
        };
        jobs.push(Job {
            label: config.name.clone(),
            mod_id: &config.id,
            formula: config.formula(),
            tables,
            weapon: mod_weapon,
            ammo,
            attack: scenario.attack_for(mod_weapon),
        });
    }

    run_jobs(jobs, axis)
}

/// Explicitly chosen weapon/ammo pairs, possibly from different mods
pub fn weapon_comparison(
    data: &ModData,
    registry: &ModRegistry,
    entries: &[WeaponEntry],
    scenario: &Scenario,
) -> Result<Vec<DamageSeries>> {
    let axis = &data.vanilla()?.armor;

    let mut jobs = Vec::with_capacity(entries.len());
    for entry in entries {
        let config = registry.require(&entry.mod_id)?;
        let tables = data.require(&entry.mod_id)?;
        let weapon = tables
            .find_weapon(&entry.weapon)
            .ok_or_else(|| DamageError::UnknownWeapon {
                mod_id: entry.mod_id.clone(),
                weapon: entry.weapon.clone(),
            })?;
        let ammo = tables
            .find_ammo(&entry.ammo, &weapon.caliber)
            .ok_or_else(|| DamageError::UnknownAmmo {
                mod_id: entry.mod_id.clone(),
                ammo: entry.ammo.clone(),
                caliber: weapon.caliber.clone(),
            })?;

        let choices = tables.compatible_ammo(weapon).count();
        jobs.push(Job {
            label: format!(
                "{} ({})",
                pair_label(&weapon.name, &ammo.name, choices),
                config.name
            ),
            mod_id: &config.id,
            formula: config.formula(),
            tables,
            weapon,
            ammo,
            attack: scenario.attack_for(weapon),
        });
    }

    run_jobs(jobs, axis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn data() -> ModData {
        let vanilla = ModTables {
            weapons: vec![
                Weapon::new("10mm pistol", "10mm", 5, 12),
                Weapon::new("10mm SMG", "10mm", 5, 12).with_burst(10),
            ],
            ammo: vec![
                Ammo::new("10mm JHP", "10mm", 25, 2, 1),
                Ammo::new("10mm AP", "10mm", -25, 1, 2),
            ],
            armor: vec![Armor::none(), Armor::uniform("Leather Armor", 25, 2)],
        };
        let ecco = ModTables {
            weapons: vec![Weapon::new("10mm pistol", "10mm", 6, 13)],
            ammo: vec![Ammo::new("10mm AP", "10mm", -20, 1, 1)],
            armor: vec![Armor::uniform("Leather Armor", 30, 3)],
        };
        let mut mods = HashMap::new();
        mods.insert("vanilla".to_string(), vanilla);
        mods.insert("ecco".to_string(), ecco);
        ModData { mods }
    }

    #[test]
    fn test_caliber_series_labels_and_axis() {
        let series = caliber_series(
            &data(),
            &ModRegistry::builtin(),
            "vanilla",
            "10mm",
            &Scenario::default(),
        )
        .unwrap();
        let labels: Vec<&str> = series.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "10mm pistol + 10mm JHP",
                "10mm pistol + 10mm AP",
                "10mm SMG + 10mm JHP",
                "10mm SMG + 10mm AP",
            ]
        );
        assert!(series.iter().all(|s| s.points.len() == 2));
        assert_eq!(series[0].points[0].armor, "No armor");
        // JHP adds 25 DR even unarmored: 10 * 0.75 = 7.5 -> 8
        assert_eq!(series[0].points[0].range.to_string(), "8-18");
    }

    #[test]
    fn test_unknown_caliber_is_empty() {
        let series = caliber_series(
            &data(),
            &ModRegistry::builtin(),
            "vanilla",
            ".223",
            &Scenario::default(),
        )
        .unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn test_mod_comparison_skips_mods_without_ammo() {
        let pistol = Weapon::new("10mm pistol", "10mm", 5, 12);
        let series = mod_comparison(
            &data(),
            &ModRegistry::builtin(),
            &pistol,
            "10mm AP",
            &Scenario::default(),
        )
        .unwrap();
        let labels: Vec<&str> = series.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["Vanilla", "EcCo"]);

        let jhp = mod_comparison(
            &data(),
            &ModRegistry::builtin(),
            &pistol,
            "10mm JHP",
            &Scenario::default(),
        )
        .unwrap();
        assert_eq!(jhp.len(), 1);
    }

    #[test]
    fn test_mod_armor_overrides_reference() {
        let pistol = Weapon::new("10mm pistol", "10mm", 5, 12);
        let series = mod_comparison(
            &data(),
            &ModRegistry::builtin(),
            &pistol,
            "10mm AP",
            &Scenario::default(),
        )
        .unwrap();
        let ecco = &series[1];
        // EcCo pistol 6-13, leather 30/3, AP -20: DT 3 - 2.6 = 0.4, DR 10
        assert_eq!(ecco.points[1].armor, "Leather Armor");
        assert!((ecco.points[1].range.min - 5.6 * 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_weapon_comparison() {
        let entries = vec![
            WeaponEntry {
                mod_id: "vanilla".into(),
                weapon: "10mm SMG".into(),
                ammo: "10mm AP".into(),
            },
            WeaponEntry {
                mod_id: "ecco".into(),
                weapon: "10mm pistol".into(),
                ammo: "10mm AP".into(),
            },
        ];
        let scenario = Scenario {
            burst: true,
            ..Default::default()
        };
        let series =
            weapon_comparison(&data(), &ModRegistry::builtin(), &entries, &scenario).unwrap();
        assert_eq!(series[0].label, "10mm SMG + 10mm AP (Vanilla)");
        assert_eq!(series[1].label, "10mm pistol (EcCo)");
        // SMG 10-round burst lands 3: 5 * 1/2 = 2.5 -> 3 per bullet
        assert_eq!(series[0].points[0].range.to_string(), "9-18");
    }

    #[test]
    fn test_weapon_comparison_unknown_entries() {
        let registry = ModRegistry::builtin();
        let bad_weapon = vec![WeaponEntry {
            mod_id: "vanilla".into(),
            weapon: "Gauss rifle".into(),
            ammo: "2mm EC".into(),
        }];
        assert!(matches!(
            weapon_comparison(&data(), &registry, &bad_weapon, &Scenario::default()),
            Err(DamageError::UnknownWeapon { .. })
        ));

        let bad_mod = vec![WeaponEntry {
            mod_id: "yaam".into(),
            weapon: "10mm pistol".into(),
            ammo: "10mm AP".into(),
        }];
        assert!(matches!(
            weapon_comparison(&data(), &registry, &bad_mod, &Scenario::default()),
            Err(DamageError::UnknownMod(_))
        ));
    }
}
