//! Loadout configuration - units and their equipment, authored in TOML
//!
//! Item mods are written with the same flat record shape used for saves:
//!
//! ```toml
//! [[units]]
//! id = "archer"
//! max_life = 80.0
//! base_damage = 6.0
//!
//! [[units.items]]
//! slot = "main_hand"
//! id = "longbow"
//! name = "Longbow"
//! mods = [{ type = "multiple projectiles", numberOfProjectiles = 3 }]
//! ```
//!
//! Unlike save loading, a loadout is rejected if any record fails to decode.

use super::ConfigError;
use crate::combat::{CombatUnit, Item};
use crate::effect::Effect;
use crate::record::PersistedRecord;
use crate::types::EquipmentSlot;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::warn;

/// Container for unit loadouts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadoutConfig {
    #[serde(rename = "units")]
    pub units: Vec<UnitConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitConfig {
    pub id: String,
    pub max_life: f64,
    pub base_damage: f64,
    #[serde(default)]
    pub items: Vec<ItemConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemConfig {
    pub slot: EquipmentSlot,
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub mods: Vec<PersistedRecord>,
}

impl LoadoutConfig {
    /// Build every unit, rejecting duplicate unit ids
    pub fn build(&self) -> Result<Vec<CombatUnit>, ConfigError> {
        let mut seen = HashSet::new();
        let mut units = Vec::with_capacity(self.units.len());
        for unit in &self.units {
            if !seen.insert(unit.id.as_str()) {
                return Err(ConfigError::ValidationError(format!(
                    "duplicate unit id: {}",
                    unit.id
                )));
            }
            units.push(unit.build()?);
        }
        Ok(units)
    }
}

impl UnitConfig {
    /// Build a full-life unit with its items equipped
    pub fn build(&self) -> Result<CombatUnit, ConfigError> {
        if !self.max_life.is_finite() || self.max_life <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "{}: max_life must be positive, got {}",
                self.id, self.max_life
            )));
        }
        if !self.base_damage.is_finite() || self.base_damage < 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "{}: base_damage must be non-negative, got {}",
                self.id, self.base_damage
            )));
        }

        let mut unit = CombatUnit::new(self.id.clone(), self.max_life, self.base_damage);
        for item in &self.items {
            let built = item.build(&self.id)?;
            if unit.equip(item.slot, built).is_some() {
                return Err(ConfigError::ValidationError(format!(
                    "{}: slot {:?} is equipped twice",
                    self.id, item.slot
                )));
            }
        }
        Ok(unit)
    }
}

impl ItemConfig {
    fn build(&self, unit_id: &str) -> Result<Item, ConfigError> {
        let mut item = Item::new(self.id.clone(), self.name.clone());
        for record in &self.mods {
            let effect = Effect::from_record(record).map_err(|source| ConfigError::Record {
                unit: unit_id.to_string(),
                item: self.id.clone(),
                source,
            })?;
            item.mods.push(effect);
        }
        Ok(item)
    }
}

/// Load unit loadouts from a TOML file
pub fn load_loadouts(path: &Path) -> Result<Vec<CombatUnit>, ConfigError> {
    let config: LoadoutConfig = super::load_toml(path)?;
    config.build()
}

/// Load unit loadouts from a TOML string
pub fn parse_loadouts(content: &str) -> Result<Vec<CombatUnit>, ConfigError> {
    let config: LoadoutConfig = super::parse_toml(content)?;
    config.build()
}

/// Get the bundled loadouts
pub fn default_loadouts() -> Vec<CombatUnit> {
    let toml = include_str!("../../config/loadouts.toml");
    parse_loadouts(toml).unwrap_or_else(|error| {
        warn!(%error, "bundled loadouts failed to load, using plain units");
        vec![
            CombatUnit::new("fighter", 100.0, 10.0),
            CombatUnit::new("dummy", 100.0, 0.0),
        ]
    })
}
