//! Per-mod record tables and the loaded data document

use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{DamageError, Result};
use crate::core::types::VANILLA_MOD_ID;
use crate::data::{Ammo, Armor, Weapon};

/// Weapons, ammo and armor of a single mod
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModTables {
    #[serde(default)]
    pub weapons: Vec<Weapon>,
    #[serde(default)]
    pub ammo: Vec<Ammo>,
    #[serde(default)]
    pub armor: Vec<Armor>,
}

impl ModTables {
    pub fn find_weapon(&self, name: &str) -> Option<&Weapon> {
        self.weapons.iter().find(|w| w.name == name)
    }

    /// Ammo by name, restricted to one caliber
    pub fn find_ammo(&self, name: &str, caliber: &str) -> Option<&Ammo> {
        self.ammo
            .iter()
            .find(|a| a.name == name && a.caliber == caliber)
    }

    pub fn find_armor(&self, name: &str) -> Option<&Armor> {
        self.armor.iter().find(|a| a.name == name)
    }

    /// This mod's version of a reference armor, or the reference itself
    pub fn armor_or<'a>(&'a self, reference: &'a Armor) -> &'a Armor {
        self.find_armor(&reference.name).unwrap_or(reference)
    }

    /// Ammo whose caliber matches the weapon
    pub fn compatible_ammo<'a>(&'a self, weapon: &'a Weapon) -> impl Iterator<Item = &'a Ammo> {
        self.ammo_for_caliber(&weapon.caliber)
    }

    pub fn ammo_for_caliber<'a>(&'a self, caliber: &'a str) -> impl Iterator<Item = &'a Ammo> {
        self.ammo.iter().filter(move |a| a.caliber == caliber)
    }

    pub fn weapons_for_caliber<'a>(
        &'a self,
        caliber: &'a str,
    ) -> impl Iterator<Item = &'a Weapon> {
        self.weapons.iter().filter(move |w| w.caliber == caliber)
    }

    /// Calibers used by at least one weapon, sorted
    pub fn calibers(&self) -> Vec<&str> {
        let set: BTreeSet<&str> = self.weapons.iter().map(|w| w.caliber.as_str()).collect();
        set.into_iter().collect()
    }
}

/// Data document: `{ "mods": { "<mod id>": { weapons, ammo, armor } } }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModData {
    pub mods: HashMap<String, ModTables>,
}

impl ModData {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let data: ModData = serde_json::from_str(json)?;
        Ok(data)
    }

    /// Load the data document from a JSON file on disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let data = Self::from_json_str(&content)?;
        tracing::debug!("Loaded {} mods from {}", data.mods.len(), path.display());
        Ok(data)
    }

    pub fn get(&self, mod_id: &str) -> Option<&ModTables> {
        self.mods.get(mod_id)
    }

    pub fn require(&self, mod_id: &str) -> Result<&ModTables> {
        self.get(mod_id)
            .ok_or_else(|| DamageError::UnknownMod(mod_id.to_string()))
    }

    /// Vanilla tables; their armor list is the x axis of every series
    pub fn vanilla(&self) -> Result<&ModTables> {
        self.require(VANILLA_MOD_ID)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ModTables {
        ModTables {
            weapons: vec![
                Weapon::new("10mm pistol", "10mm", 5, 12),
                Weapon::new("10mm SMG", "10mm", 5, 12).with_burst(10),
                Weapon::new("Hunting rifle", ".223", 8, 20),
            ],
            ammo: vec![
                Ammo::new("10mm JHP", "10mm", 25, 2, 1),
                Ammo::new("10mm AP", "10mm", -25, 1, 2),
                Ammo::new(".223 FMJ", ".223", -30, 1, 1),
            ],
            armor: vec![Armor::uniform("Leather Armor", 25, 2)],
        }
    }

    #[test]
    fn test_compatible_ammo_uses_caliber() {
        let tables = sample();
        let smg = tables.find_weapon("10mm SMG").unwrap();
        let names: Vec<&str> = tables.compatible_ammo(smg).map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["10mm JHP", "10mm AP"]);
    }

    #[test]
    fn test_find_ammo_requires_caliber() {
        let tables = sample();
        assert!(tables.find_ammo("10mm AP", "10mm").is_some());
        assert!(tables.find_ammo("10mm AP", ".223").is_none());
    }

    #[test]
    fn test_armor_override_by_name() {
        let tables = sample();
        let reference = Armor::uniform("Leather Armor", 20, 0);
        assert_eq!(tables.armor_or(&reference).dr, 25);

        let other = Armor::uniform("Power Armor", 40, 12);
        assert_eq!(tables.armor_or(&other).dr, 40);
    }

    #[test]
    fn test_calibers_sorted_unique() {
        assert_eq!(sample().calibers(), vec![".223", "10mm"]);
    }

    #[test]
    fn test_mod_data_from_json() {
        let json = r#"{"mods":{"vanilla":{"weapons":[],"ammo":[],"armor":[
            {"name":"Leather Jacket","abbrev":"LJ","dr":20,"dt":0}]}}}"#;
        let data = ModData::from_json_str(json).unwrap();
        assert_eq!(data.vanilla().unwrap().armor.len(), 1);
        assert!(matches!(data.require("ecco"), Err(DamageError::UnknownMod(_))));
    }
}
