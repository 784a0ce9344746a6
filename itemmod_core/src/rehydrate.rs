//! Rehydration - rebuild live item mods from a batch of persisted records
//!
//! Batch loading never fails because of a single record. Records with an
//! unrecognized type (saves written by a newer version) or with missing or
//! invalid parameters are dropped with a warning, and the remaining mods keep
//! their relative order.

use crate::effect::Effect;
use crate::error::RecordError;
use crate::record::PersistedRecord;
use serde_json::Value;
use tracing::warn;

/// A record that was dropped during rehydration
#[derive(Debug)]
pub struct SkippedRecord {
    /// Position of the record in the input batch
    pub index: usize,
    /// Why it was dropped
    pub error: RecordError,
}

/// Outcome of rehydrating a batch of records
#[derive(Debug, Default)]
pub struct Rehydration {
    /// Decoded mods in input order
    pub effects: Vec<Effect>,
    /// Records that were dropped
    pub skipped: Vec<SkippedRecord>,
}

impl Rehydration {
    /// Whether every record in the batch was decoded
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }

    /// Number of dropped records whose type was not recognized
    pub fn unrecognized_count(&self) -> usize {
        self.skipped.iter().filter(|s| s.error.is_unrecognized()).count()
    }

    fn push(&mut self, index: usize, decoded: Result<Effect, RecordError>) {
        match decoded {
            Ok(effect) => self.effects.push(effect),
            Err(error) => {
                warn!(index, %error, "dropping item mod record");
                self.skipped.push(SkippedRecord { index, error });
            }
        }
    }
}

/// Rehydrate a batch of records, dropping any that cannot be decoded
pub fn rehydrate(records: &[PersistedRecord]) -> Vec<Effect> {
    rehydrate_with_report(records).effects
}

/// Rehydrate a batch of records and report which ones were dropped
pub fn rehydrate_with_report(records: &[PersistedRecord]) -> Rehydration {
    let mut result = Rehydration::default();
    for (index, record) in records.iter().enumerate() {
        result.push(index, Effect::from_record(record));
    }
    result
}

/// Rehydrate from a JSON array of records
///
/// The document itself must be an array; entries that are not objects are
/// dropped like any other undecodable record.
pub fn rehydrate_json(json: &str) -> Result<Rehydration, RecordError> {
    let values: Vec<Value> = serde_json::from_str(json)?;

    let mut result = Rehydration::default();
    for (index, value) in values.into_iter().enumerate() {
        let decoded = match value {
            Value::Object(record) => Effect::from_record(&record),
            _ => Err(RecordError::NotAnObject),
        };
        result.push(index, decoded);
    }
    Ok(result)
}

/// Serialize a list of mods into persisted records, preserving order
pub fn dehydrate(effects: &[Effect]) -> Result<Vec<PersistedRecord>, RecordError> {
    effects.iter().map(Effect::to_record).collect()
}
