//! Turn-based duel simulation built on hit and turn resolution

use super::resolution::{resolve_hit_with_rng, start_turn};
use super::unit::CombatUnit;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Per-combatant totals over a duel
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DuelSide {
    pub unit_id: String,
    pub turns: u32,
    pub hits: u32,
    pub damage_dealt: f64,
    /// Turns on which an item mod modified the attack
    pub modified_turns: u32,
}

/// Outcome of a simulated duel
#[derive(Debug, Clone)]
pub struct DuelReport {
    /// Full rounds played (each side gets one turn per round)
    pub rounds: u32,
    /// Id of the only unit left alive, if any
    pub winner: Option<String>,
    pub first: DuelSide,
    pub second: DuelSide,
    pub first_final: CombatUnit,
    pub second_final: CombatUnit,
}

impl DuelReport {
    /// Whether the duel ended with neither or both units standing
    pub fn is_draw(&self) -> bool {
        self.winner.is_none()
    }
}

/// Simulate a duel: `first` acts first each round
///
/// Each turn starts with [`start_turn`], then the attacker fires one hit of
/// `base_damage` per projectile. Stops as soon as either unit dies or after
/// `max_rounds` rounds.
pub fn simulate_duel(
    first: &CombatUnit,
    second: &CombatUnit,
    max_rounds: u32,
    rng: &mut dyn RngCore,
) -> DuelReport {
    let mut a = first.clone();
    let mut b = second.clone();
    let mut side_a = DuelSide {
        unit_id: a.id.clone(),
        ..Default::default()
    };
    let mut side_b = DuelSide {
        unit_id: b.id.clone(),
        ..Default::default()
    };

    let mut rounds = 0;
    while rounds < max_rounds && a.is_alive() && b.is_alive() {
        rounds += 1;
        take_turn(&mut a, &mut b, &mut side_a, rng);
        if a.is_alive() && b.is_alive() {
            take_turn(&mut b, &mut a, &mut side_b, rng);
        }
    }

    let winner = match (a.is_alive(), b.is_alive()) {
        (true, false) => Some(a.id.clone()),
        (false, true) => Some(b.id.clone()),
        _ => None,
    };
    debug!(rounds, winner = ?winner, "duel finished");

    DuelReport {
        rounds,
        winner,
        first: side_a,
        second: side_b,
        first_final: a,
        second_final: b,
    }
}

fn take_turn(
    attacker: &mut CombatUnit,
    defender: &mut CombatUnit,
    side: &mut DuelSide,
    rng: &mut dyn RngCore,
) {
    let (started, turn) = start_turn(attacker);
    *attacker = started;
    side.turns += 1;
    if turn.was_modified() {
        side.modified_turns += 1;
    }

    // A unit without base damage never lands anything, however many it fires
    if attacker.base_damage <= 0.0 {
        return;
    }

    for _ in 0..turn.projectiles {
        if !attacker.is_alive() || !defender.is_alive() {
            break;
        }
        let (new_attacker, new_defender, hit) =
            resolve_hit_with_rng(attacker, defender, attacker.base_damage, rng);
        *attacker = new_attacker;
        *defender = new_defender;
        side.hits += 1;
        side.damage_dealt += hit.damage_dealt;
    }
}
