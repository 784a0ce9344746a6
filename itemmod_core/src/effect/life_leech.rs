//! Life leech - chance to heal the attacker for part of the damage it dealt

use super::{check_fraction, percent, ItemMod};
use crate::combat::CombatUnit;
use crate::error::ParameterError;
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifeLeech {
    /// Probability in [0, 1] that a hit leeches
    pub chance_to_leech: f64,
    /// Fraction in [0, 1] of damage dealt returned as life
    pub leech_percentage: f64,
}

impl LifeLeech {
    pub fn new(chance_to_leech: f64, leech_percentage: f64) -> Result<Self, ParameterError> {
        let leech = LifeLeech {
            chance_to_leech,
            leech_percentage,
        };
        leech.validate()?;
        Ok(leech)
    }

    pub fn validate(&self) -> Result<(), ParameterError> {
        check_fraction("chanceToLeech", self.chance_to_leech)?;
        check_fraction("leechPercentage", self.leech_percentage)
    }
}

impl ItemMod for LifeLeech {
    fn on_damage_dealt(
        &self,
        attacker: &mut CombatUnit,
        _target: &mut CombatUnit,
        damage_dealt: f64,
        rng: &mut dyn RngCore,
    ) {
        // gen::<f64>() is in [0, 1), so a chance of 1 always leeches
        if rng.gen::<f64>() < self.chance_to_leech {
            attacker.heal(damage_dealt * self.leech_percentage);
        }
    }

    fn description(&self) -> String {
        format!(
            "{} chance to leech {} of damage dealt as life",
            percent(self.chance_to_leech),
            percent(self.leech_percentage)
        )
    }
}
