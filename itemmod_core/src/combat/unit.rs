//! CombatUnit and Item - the entities item mods are invoked with

use crate::effect::{Effect, ItemMod};
use crate::rehydrate::rehydrate;
use crate::record::PersistedRecord;
use crate::types::EquipmentSlot;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// A piece of equipment carrying item mods
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    /// Mods in attachment order. Stored as flat records; on load, records
    /// that cannot be decoded are dropped.
    #[serde(default, deserialize_with = "deserialize_mods")]
    pub mods: Vec<Effect>,
}

impl Item {
    /// Create an item with no mods
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Item {
            id: id.into(),
            name: name.into(),
            mods: Vec::new(),
        }
    }

    /// Attach a mod after the existing ones
    pub fn with_mod(mut self, effect: Effect) -> Self {
        self.mods.push(effect);
        self
    }

    /// Tooltip lines, one per mod
    pub fn descriptions(&self) -> Vec<String> {
        self.mods.iter().map(|m| m.description()).collect()
    }
}

fn deserialize_mods<'de, D>(deserializer: D) -> Result<Vec<Effect>, D::Error>
where
    D: Deserializer<'de>,
{
    let records = Vec::<PersistedRecord>::deserialize(deserializer)?;
    Ok(rehydrate(&records))
}

/// Attack shape for the current turn, reset at every turn start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackProfile {
    pub projectiles: u32,
}

impl Default for AttackProfile {
    fn default() -> Self {
        AttackProfile { projectiles: 1 }
    }
}

/// A combatant: life totals plus equipped items
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombatUnit {
    pub id: String,
    pub max_life: f64,
    pub current_life: f64,
    /// Damage of a single projectile/hit
    pub base_damage: f64,
    #[serde(default)]
    equipment: BTreeMap<EquipmentSlot, Item>,
    #[serde(skip)]
    pub attack: AttackProfile,
}

impl CombatUnit {
    /// Create a unit at full life with nothing equipped
    pub fn new(id: impl Into<String>, max_life: f64, base_damage: f64) -> Self {
        CombatUnit {
            id: id.into(),
            max_life,
            current_life: max_life,
            base_damage,
            equipment: BTreeMap::new(),
            attack: AttackProfile::default(),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.current_life > 0.0
    }

    /// Lose up to `amount` life. Returns the life actually lost.
    pub fn take_damage(&mut self, amount: f64) -> f64 {
        // max() also maps NaN to 0
        let dealt = amount.max(0.0).min(self.current_life.max(0.0));
        self.current_life -= dealt;
        dealt
    }

    /// Regain up to `amount` life, capped at max life. Returns the life gained.
    pub fn heal(&mut self, amount: f64) -> f64 {
        let missing = (self.max_life - self.current_life).max(0.0);
        let healed = amount.max(0.0).min(missing);
        self.current_life += healed;
        healed
    }

    /// Equip an item, returning whatever was in the slot before
    pub fn equip(&mut self, slot: EquipmentSlot, item: Item) -> Option<Item> {
        self.equipment.insert(slot, item)
    }

    /// Remove the item in a slot
    pub fn unequip(&mut self, slot: EquipmentSlot) -> Option<Item> {
        self.equipment.remove(&slot)
    }

    /// Get the item in a slot
    pub fn equipped(&self, slot: EquipmentSlot) -> Option<&Item> {
        self.equipment.get(&slot)
    }

    /// Equipped items in slot order
    pub fn items(&self) -> impl Iterator<Item = (EquipmentSlot, &Item)> {
        self.equipment.iter().map(|(slot, item)| (*slot, item))
    }

    /// All attached mods in attachment order: slot order, then each item's
    /// mods in stored order
    pub fn mods(&self) -> impl Iterator<Item = &Effect> {
        self.equipment.values().flat_map(|item| item.mods.iter())
    }
}
