//! Item mods - effects attached to equipment that hook into combat
//!
//! Every item mod implements [`ItemMod`]. The closed set of mods the game
//! knows about is the [`Effect`] sum type; its serialized form is the flat
//! record described in [`crate::record`].

mod life_leech;
mod multiple_projectiles;
mod reduce_damage;
mod thorns;

pub use life_leech::LifeLeech;
pub use multiple_projectiles::{MultipleProjectiles, MAX_PROJECTILES};
pub use reduce_damage::ReduceDamage;
pub use thorns::Thorns;

use crate::combat::CombatUnit;
use crate::error::ParameterError;
use crate::types::EffectType;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Combat lifecycle hooks for an item mod
///
/// Hooks never mutate the mod itself. Units are passed per call and are not
/// retained.
pub trait ItemMod {
    /// Transform incoming damage before it is applied to the target.
    ///
    /// Called on the target's mods, chained in attachment order. Returning
    /// `damage` unchanged is a no-op.
    fn before_receive_damage(&self, _attacker: &CombatUnit, _target: &CombatUnit, damage: f64) -> f64 {
        damage
    }

    /// Notification after a hit landed, called on the attacker's mods.
    ///
    /// `damage_dealt` is already clamped to the target's pre-hit life.
    fn on_damage_dealt(
        &self,
        _attacker: &mut CombatUnit,
        _target: &mut CombatUnit,
        _damage_dealt: f64,
        _rng: &mut dyn RngCore,
    ) {
    }

    /// Notification after a hit landed, called on the target's mods.
    fn on_damage_received(
        &self,
        _attacker: &mut CombatUnit,
        _target: &mut CombatUnit,
        _damage_dealt: f64,
        _rng: &mut dyn RngCore,
    ) {
    }

    /// Attempt to modify the attacker's outgoing attack for this turn.
    ///
    /// Returns true if the attempt took effect. At most one mod per turn gets
    /// to modify the attack; see [`crate::combat::offer_battle_turn`].
    fn on_battle_turn(&self, _attacker: &mut CombatUnit) -> bool {
        false
    }

    /// Human-readable summary for tooltips and logs
    fn description(&self) -> String;
}

/// A known item mod
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Effect {
    #[serde(rename = "life leech")]
    LifeLeech(LifeLeech),
    #[serde(rename = "thorns")]
    Thorns(Thorns),
    #[serde(rename = "reduce damage")]
    ReduceDamage(ReduceDamage),
    #[serde(rename = "multiple projectiles")]
    MultipleProjectiles(MultipleProjectiles),
}

impl Effect {
    /// Create a life leech mod
    pub fn life_leech(chance_to_leech: f64, leech_percentage: f64) -> Result<Self, ParameterError> {
        LifeLeech::new(chance_to_leech, leech_percentage).map(Effect::LifeLeech)
    }

    /// Create a thorns mod
    pub fn thorns(thorns_damage: f64) -> Result<Self, ParameterError> {
        Thorns::new(thorns_damage).map(Effect::Thorns)
    }

    /// Create a damage reduction mod
    pub fn reduce_damage(reduce_damage_amount: f64) -> Result<Self, ParameterError> {
        ReduceDamage::new(reduce_damage_amount).map(Effect::ReduceDamage)
    }

    /// Create a multiple projectiles mod
    pub fn multiple_projectiles(number_of_projectiles: u32) -> Result<Self, ParameterError> {
        MultipleProjectiles::new(number_of_projectiles).map(Effect::MultipleProjectiles)
    }

    /// The type tag of this mod
    pub fn effect_type(&self) -> EffectType {
        match self {
            Effect::LifeLeech(_) => EffectType::LifeLeech,
            Effect::Thorns(_) => EffectType::Thorns,
            Effect::ReduceDamage(_) => EffectType::ReduceDamage,
            Effect::MultipleProjectiles(_) => EffectType::MultipleProjectiles,
        }
    }

    /// Check that all parameters are within their valid ranges
    pub fn validate(&self) -> Result<(), ParameterError> {
        match self {
            Effect::LifeLeech(m) => m.validate(),
            Effect::Thorns(m) => m.validate(),
            Effect::ReduceDamage(m) => m.validate(),
            Effect::MultipleProjectiles(m) => m.validate(),
        }
    }

    fn as_item_mod(&self) -> &dyn ItemMod {
        match self {
            Effect::LifeLeech(m) => m,
            Effect::Thorns(m) => m,
            Effect::ReduceDamage(m) => m,
            Effect::MultipleProjectiles(m) => m,
        }
    }
}

impl ItemMod for Effect {
    fn before_receive_damage(&self, attacker: &CombatUnit, target: &CombatUnit, damage: f64) -> f64 {
        self.as_item_mod().before_receive_damage(attacker, target, damage)
    }

    fn on_damage_dealt(
        &self,
        attacker: &mut CombatUnit,
        target: &mut CombatUnit,
        damage_dealt: f64,
        rng: &mut dyn RngCore,
    ) {
        self.as_item_mod().on_damage_dealt(attacker, target, damage_dealt, rng)
    }

    fn on_damage_received(
        &self,
        attacker: &mut CombatUnit,
        target: &mut CombatUnit,
        damage_dealt: f64,
        rng: &mut dyn RngCore,
    ) {
        self.as_item_mod().on_damage_received(attacker, target, damage_dealt, rng)
    }

    fn on_battle_turn(&self, attacker: &mut CombatUnit) -> bool {
        self.as_item_mod().on_battle_turn(attacker)
    }

    fn description(&self) -> String {
        self.as_item_mod().description()
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}

fn check_finite(field: &'static str, value: f64) -> Result<(), ParameterError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ParameterError::NotFinite { field })
    }
}

/// Value must be a probability or fraction in [0, 1]
pub(crate) fn check_fraction(field: &'static str, value: f64) -> Result<(), ParameterError> {
    check_finite(field, value)?;
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ParameterError::OutOfRange {
            field,
            value,
            expected: "a value between 0 and 1",
        })
    }
}

pub(crate) fn check_non_negative(field: &'static str, value: f64) -> Result<(), ParameterError> {
    check_finite(field, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ParameterError::OutOfRange {
            field,
            value,
            expected: "a non-negative value",
        })
    }
}

/// Format a fraction as a whole percentage for descriptions
pub(crate) fn percent(value: f64) -> String {
    format!("{:.0}%", value * 100.0)
}
