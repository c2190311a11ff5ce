//! Mod registry configuration
//!
//! Each supported mod names the damage formula it uses. The registry also
//! fixes the order mods are listed in, which every comparison follows.
//!
//! The built-in registry matches the data set shipped by the data-loading
//! step. A TOML file with the same shape can replace it:
//!
//! ```toml
//! order = ["vanilla", "ecco"]
//!
//! [[mods]]
//! id = "vanilla"
//! name = "Vanilla"
//! description = "Original Fallout 2 game data"
//! formula = "fallout2"
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{DamageError, Result};
use crate::core::types::VANILLA_MOD_ID;
use crate::formula::Formula;

/// One mod entry: display metadata plus the formula identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModConfig {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Formula identifier as written in configuration data
    pub formula: String,
}

impl ModConfig {
    pub fn new(id: &str, name: &str, description: &str, formula: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            formula: formula.to_string(),
        }
    }

    /// Resolve the formula identifier, falling back to vanilla on unknown ids
    pub fn formula(&self) -> Formula {
        Formula::parse_or_default(&self.formula)
    }
}

/// Ordered set of mod configurations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModRegistry {
    /// Display and iteration order of mod ids
    pub order: Vec<String>,
    pub mods: Vec<ModConfig>,
}

impl ModRegistry {
    /// The five mods the calculator ships with
    pub fn builtin() -> Self {
        let mods = vec![
            ModConfig::new(
                "vanilla",
                "Vanilla",
                "Original Fallout 2 game data",
                "fallout2",
            ),
            ModConfig::new("ecco", "EcCo", "Economy and Combat Overhaul", "ecco"),
            ModConfig::new(
                "fo2tweaks",
                "FO2tweaks",
                "FO2tweaks (vanilla data)",
                "fo2tweaks",
            ),
            ModConfig::new(
                "yaam",
                "YAAM",
                "Yet Another Ammo Mod (vanilla data)",
                "yaam",
            ),
            ModConfig::new(
                "glovz",
                "Glovz",
                "Glovz Damage Formula (vanilla data)",
                "glovz",
            ),
        ];
        let order = mods.iter().map(|m| m.id.clone()).collect();
        Self { order, mods }
    }

    /// Parse a registry from TOML text and validate it
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let registry: ModRegistry = toml::from_str(content)?;
        registry.validate()?;
        Ok(registry)
    }

    /// Load a registry from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let registry = Self::from_toml_str(&content)?;
        tracing::debug!(
            "Loaded {} mod configs from {}",
            registry.mods.len(),
            path.display()
        );
        Ok(registry)
    }

    /// Validate registry for internal consistency
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for config in &self.mods {
            if config.id.is_empty() {
                return Err(DamageError::InvalidConfig("mod id must not be empty".into()));
            }
            if !seen.insert(config.id.as_str()) {
                return Err(DamageError::InvalidConfig(format!(
                    "duplicate mod id '{}'",
                    config.id
                )));
            }
        }

        if !seen.contains(VANILLA_MOD_ID) {
            return Err(DamageError::InvalidConfig(format!(
                "'{}' mod must be registered",
                VANILLA_MOD_ID
            )));
        }

        for id in &self.order {
            if !seen.contains(id.as_str()) {
                return Err(DamageError::InvalidConfig(format!(
                    "order lists unregistered mod '{}'",
                    id
                )));
            }
        }

        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&ModConfig> {
        self.mods.iter().find(|m| m.id == id)
    }

    /// Like `get`, but a missing id is an error
    pub fn require(&self, id: &str) -> Result<&ModConfig> {
        self.get(id)
            .ok_or_else(|| DamageError::UnknownMod(id.to_string()))
    }

    /// Mod configs in display order
    pub fn ordered(&self) -> impl Iterator<Item = &ModConfig> {
        self.order.iter().filter_map(move |id| self.get(id))
    }
}

impl Default for ModRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
