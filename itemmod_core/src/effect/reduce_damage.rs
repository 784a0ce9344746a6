//! Flat reduction of every incoming hit

use super::{check_non_negative, ItemMod};
use crate::combat::CombatUnit;
use crate::error::ParameterError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReduceDamage {
    pub reduce_damage_amount: f64,
}

impl ReduceDamage {
    pub fn new(reduce_damage_amount: f64) -> Result<Self, ParameterError> {
        let reduce = ReduceDamage { reduce_damage_amount };
        reduce.validate()?;
        Ok(reduce)
    }

    pub fn validate(&self) -> Result<(), ParameterError> {
        check_non_negative("reduceDamageAmount", self.reduce_damage_amount)
    }
}

impl ItemMod for ReduceDamage {
    fn before_receive_damage(&self, _attacker: &CombatUnit, _target: &CombatUnit, damage: f64) -> f64 {
        (damage - self.reduce_damage_amount).max(0.0)
    }

    fn description(&self) -> String {
        format!("Reduces incoming damage by {}", self.reduce_damage_amount)
    }
}
