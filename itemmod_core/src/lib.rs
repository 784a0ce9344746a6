//! itemmod_core - Item modifier framework for combat
//!
//! This library provides:
//! - Effect: the closed set of item mods and the ItemMod hook contract
//! - Records: the flat, untyped storage shape of an item mod
//! - Rehydration: turning a batch of records back into live item mods
//! - Combat dispatch: running item mod hooks for hits and turn starts

pub mod combat;
pub mod config;
pub mod effect;
pub mod error;
pub mod prelude;
pub mod record;
pub mod rehydrate;
pub mod types;

// Re-export core types for convenience
pub use combat::{resolve_hit, start_turn, CombatUnit, HitResult, Item, TurnResult};
pub use config::default_loadouts;
pub use effect::{Effect, ItemMod, LifeLeech, MultipleProjectiles, ReduceDamage, Thorns};
pub use error::{ParameterError, RecordError};
pub use record::{describe_record, PersistedRecord};
pub use rehydrate::{dehydrate, rehydrate, rehydrate_json, rehydrate_with_report, Rehydration};
pub use types::{EffectType, EquipmentSlot, UnknownEffectType};
