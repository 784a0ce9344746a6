//! Error types for effect construction and record decoding

use crate::types::EffectType;
use serde_json::Value;
use thiserror::Error;

/// An effect parameter outside its valid range
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },
    #[error("{field} = {value} is out of range, expected {expected}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        expected: &'static str,
    },
    #[error("numberOfProjectiles must be at least 1, got {0}")]
    TooFewProjectiles(u32),
    #[error("numberOfProjectiles must be at most {}, got {0}", crate::effect::MAX_PROJECTILES)]
    TooManyProjectiles(u32),
}

/// Failure to turn a persisted record into an effect (or back)
#[derive(Error, Debug)]
pub enum RecordError {
    #[error("record has no `type` field")]
    MissingType,
    #[error("record `type` field is not a string: {0}")]
    InvalidTypeField(Value),
    #[error("unrecognized item mod type: {0:?}")]
    UnrecognizedType(String),
    #[error("record is not a JSON object")]
    NotAnObject,
    #[error("malformed {effect_type} record: {source}")]
    Malformed {
        effect_type: EffectType,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid {effect_type} record: {source}")]
    InvalidParameter {
        effect_type: EffectType,
        #[source]
        source: ParameterError,
    },
    #[error("failed to encode item mod: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("failed to parse records: {0}")]
    Json(#[from] serde_json::Error),
}

impl RecordError {
    /// Whether this record came from a newer data version with an unknown type
    pub fn is_unrecognized(&self) -> bool {
        matches!(self, RecordError::UnrecognizedType(_))
    }
}
