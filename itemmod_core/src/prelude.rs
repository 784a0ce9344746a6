//! Prelude module for convenient imports
//!
//! ```rust
//! use itemmod_core::prelude::*;
//! ```

// Core types
pub use crate::effect::{Effect, ItemMod};
pub use crate::types::{EffectType, EquipmentSlot};

// Persistence
pub use crate::record::{describe_record, PersistedRecord};
pub use crate::rehydrate::{dehydrate, rehydrate, rehydrate_with_report};

// Combat
pub use crate::combat::{resolve_hit, resolve_hit_with_rng, simulate_duel, start_turn};
pub use crate::combat::{CombatUnit, HitResult, Item, TurnResult};
