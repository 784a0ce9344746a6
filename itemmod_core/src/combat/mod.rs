//! Combat hook dispatch - run item mod hooks during hits and turns

mod dispatch;
mod duel;
mod resolution;
mod result;
mod unit;

pub use dispatch::{
    fold_before_receive_damage, notify_damage_dealt, notify_damage_received, offer_battle_turn,
};
pub use duel::{simulate_duel, DuelReport, DuelSide};
pub use resolution::{resolve_hit, resolve_hit_with_rng, start_turn};
pub use result::{HitResult, TurnResult};
pub use unit::{AttackProfile, CombatUnit, Item};
