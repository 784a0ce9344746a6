//! Thorns - reflects a fixed amount of damage back at attackers

use super::{check_non_negative, ItemMod};
use crate::combat::CombatUnit;
use crate::error::ParameterError;
use rand::RngCore;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Thorns {
    pub thorns_damage: f64,
}

impl Thorns {
    pub fn new(thorns_damage: f64) -> Result<Self, ParameterError> {
        let thorns = Thorns { thorns_damage };
        thorns.validate()?;
        Ok(thorns)
    }

    pub fn validate(&self) -> Result<(), ParameterError> {
        check_non_negative("thornsDamage", self.thorns_damage)
    }
}

impl ItemMod for Thorns {
    fn on_damage_received(
        &self,
        attacker: &mut CombatUnit,
        _target: &mut CombatUnit,
        _damage_dealt: f64,
        _rng: &mut dyn RngCore,
    ) {
        // Reflected damage goes straight to life and does not run hooks
        attacker.take_damage(self.thorns_damage);
    }

    fn description(&self) -> String {
        format!("Reflects {} damage to attackers", self.thorns_damage)
    }
}
