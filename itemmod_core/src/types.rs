//! Core tags shared across the item mod framework

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Kind of item mod, identified in stored records by a stable string tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectType {
    #[serde(rename = "life leech")]
    LifeLeech,
    #[serde(rename = "thorns")]
    Thorns,
    #[serde(rename = "reduce damage")]
    ReduceDamage,
    #[serde(rename = "multiple projectiles")]
    MultipleProjectiles,
}

impl EffectType {
    /// Get all known effect types
    pub fn all() -> &'static [EffectType] {
        &[
            EffectType::LifeLeech,
            EffectType::Thorns,
            EffectType::ReduceDamage,
            EffectType::MultipleProjectiles,
        ]
    }

    /// The tag written to the `type` field of a persisted record
    pub fn as_str(&self) -> &'static str {
        match self {
            EffectType::LifeLeech => "life leech",
            EffectType::Thorns => "thorns",
            EffectType::ReduceDamage => "reduce damage",
            EffectType::MultipleProjectiles => "multiple projectiles",
        }
    }
}

impl fmt::Display for EffectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tag that names no known effect type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown effect type: {0:?}")]
pub struct UnknownEffectType(pub String);

impl FromStr for EffectType {
    type Err = UnknownEffectType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EffectType::all()
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownEffectType(s.to_string()))
    }
}

/// Equipment slot for gear
///
/// Slot declaration order is the attachment order of a unit's item mods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentSlot {
    MainHand,
    OffHand,
    Helmet,
    BodyArmour,
    Gloves,
    Boots,
    Ring1,
    Ring2,
    Amulet,
    Belt,
}

impl EquipmentSlot {
    /// Get all equipment slots
    pub fn all() -> &'static [EquipmentSlot] {
        &[
            EquipmentSlot::MainHand,
            EquipmentSlot::OffHand,
            EquipmentSlot::Helmet,
            EquipmentSlot::BodyArmour,
            EquipmentSlot::Gloves,
            EquipmentSlot::Boots,
            EquipmentSlot::Ring1,
            EquipmentSlot::Ring2,
            EquipmentSlot::Amulet,
            EquipmentSlot::Belt,
        ]
    }
}
