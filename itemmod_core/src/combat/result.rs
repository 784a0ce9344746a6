//! HitResult and TurnResult - outcomes of hook dispatch

use crate::types::EffectType;
use serde::{Deserialize, Serialize};

/// Result of resolving a single hit between two units
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HitResult {
    // === Damage ===
    /// Damage before any item mod ran
    pub raw_damage: f64,
    /// Damage after the target's `before_receive_damage` chain
    pub modified_damage: f64,
    /// Damage actually applied, clamped to the target's remaining life
    pub damage_dealt: f64,

    // === State Changes ===
    pub target_life_before: f64,
    pub target_life_after: f64,
    pub attacker_life_before: f64,
    pub attacker_life_after: f64,

    // === Flags ===
    /// Whether this hit took the target from alive to dead
    pub is_killing_blow: bool,
}

impl HitResult {
    /// Create an empty result for a hit of `raw_damage`
    pub fn new(raw_damage: f64) -> Self {
        HitResult {
            raw_damage,
            ..Default::default()
        }
    }

    /// Damage removed by the target's mods (negative if they amplified it)
    pub fn damage_prevented(&self) -> f64 {
        self.raw_damage - self.modified_damage
    }

    /// Attacker life change caused by mods (leech minus reflected damage)
    pub fn attacker_life_change(&self) -> f64 {
        self.attacker_life_after - self.attacker_life_before
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();

        if self.damage_dealt > 0.0 {
            parts.push(format!("{:.0} damage dealt", self.damage_dealt));
        }

        if self.damage_prevented() > 0.0 {
            parts.push(format!("{:.0} prevented", self.damage_prevented()));
        }

        let change = self.attacker_life_change();
        if change > 0.0 {
            parts.push(format!("attacker recovered {:.0}", change));
        } else if change < 0.0 {
            parts.push(format!("attacker took {:.0}", -change));
        }

        if self.is_killing_blow {
            parts.push("FATAL".to_string());
        }

        if parts.is_empty() {
            "No damage".to_string()
        } else {
            parts.join(", ")
        }
    }
}

/// Result of starting an attacker's turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnResult {
    /// Projectiles the attack will fire this turn
    pub projectiles: u32,
    /// Attachment index of the mod that modified the attack
    pub modified_by: Option<usize>,
    /// Type of that mod
    pub modifier: Option<EffectType>,
}

impl TurnResult {
    pub fn was_modified(&self) -> bool {
        self.modified_by.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_summary() {
        let mut result = HitResult::new(100.0);
        result.modified_damage = 80.0;
        result.damage_dealt = 40.0;
        result.attacker_life_before = 50.0;
        result.attacker_life_after = 45.0;
        result.is_killing_blow = true;

        let summary = result.summary();
        assert!(summary.contains("40 damage dealt"));
        assert!(summary.contains("20 prevented"));
        assert!(summary.contains("attacker took 5"));
        assert!(summary.contains("FATAL"));
    }

    #[test]
    fn test_empty_summary() {
        assert_eq!(HitResult::new(0.0).summary(), "No damage");
    }

    #[test]
    fn test_damage_prevented() {
        let mut result = HitResult::new(30.0);
        result.modified_damage = 18.0;
        assert!((result.damage_prevented() - 12.0).abs() < f64::EPSILON);
    }
}
