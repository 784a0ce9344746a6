//! Multiple projectiles - turns a single attack into a volley

use super::ItemMod;
use crate::combat::CombatUnit;
use crate::error::ParameterError;
use serde::{Deserialize, Serialize};

/// Largest volley a single attack may fire
pub const MAX_PROJECTILES: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultipleProjectiles {
    pub number_of_projectiles: u32,
}

impl MultipleProjectiles {
    pub fn new(number_of_projectiles: u32) -> Result<Self, ParameterError> {
        let projectiles = MultipleProjectiles {
            number_of_projectiles,
        };
        projectiles.validate()?;
        Ok(projectiles)
    }

    pub fn validate(&self) -> Result<(), ParameterError> {
        if self.number_of_projectiles == 0 {
            return Err(ParameterError::TooFewProjectiles(self.number_of_projectiles));
        }
        if self.number_of_projectiles > MAX_PROJECTILES {
            return Err(ParameterError::TooManyProjectiles(self.number_of_projectiles));
        }
        Ok(())
    }
}

impl ItemMod for MultipleProjectiles {
    fn on_battle_turn(&self, attacker: &mut CombatUnit) -> bool {
        if attacker.attack.projectiles >= self.number_of_projectiles {
            return false;
        }
        attacker.attack.projectiles = self.number_of_projectiles;
        true
    }

    fn description(&self) -> String {
        if self.number_of_projectiles == 1 {
            "Fires 1 projectile per attack".to_string()
        } else {
            format!("Fires {} projectiles per attack", self.number_of_projectiles)
        }
    }
}
