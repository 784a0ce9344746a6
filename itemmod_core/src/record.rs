//! Persisted records - the untyped storage shape of an item mod
//!
//! A record is a flat JSON object: a `type` field holding an [`EffectType`]
//! tag plus the mod's parameters, e.g.
//! `{"type": "life leech", "chanceToLeech": 0.3, "leechPercentage": 0.5}`.
//! Fields a mod does not declare are ignored on load.

use crate::effect::{Effect, ItemMod};
use crate::error::RecordError;
use crate::types::EffectType;
use serde_json::Value;

/// Untyped key/value record as read from or written to storage
pub type PersistedRecord = serde_json::Map<String, Value>;

/// Name of the field that carries the effect type tag
pub const TYPE_FIELD: &str = "type";

/// Read and resolve the `type` field of a record
pub fn record_type(record: &PersistedRecord) -> Result<EffectType, RecordError> {
    let tag = match record.get(TYPE_FIELD) {
        None => return Err(RecordError::MissingType),
        Some(Value::String(tag)) => tag,
        Some(other) => return Err(RecordError::InvalidTypeField(other.clone())),
    };
    tag.parse()
        .map_err(|_| RecordError::UnrecognizedType(tag.clone()))
}

impl Effect {
    /// Serialize into a flat persisted record
    pub fn to_record(&self) -> Result<PersistedRecord, RecordError> {
        match serde_json::to_value(self).map_err(RecordError::Encode)? {
            Value::Object(record) => Ok(record),
            _ => Err(RecordError::NotAnObject),
        }
    }

    /// Decode a single persisted record
    ///
    /// The type tag is resolved first so unknown types are reported as
    /// [`RecordError::UnrecognizedType`] rather than as a parse failure.
    pub fn from_record(record: &PersistedRecord) -> Result<Effect, RecordError> {
        let effect_type = record_type(record)?;

        let effect: Effect = serde_json::from_value(Value::Object(record.clone()))
            .map_err(|source| RecordError::Malformed { effect_type, source })?;

        effect
            .validate()
            .map_err(|source| RecordError::InvalidParameter { effect_type, source })?;

        Ok(effect)
    }
}

/// Describe a stored record without keeping the decoded mod
///
/// Records that cannot be decoded get a fallback instead of an error, so UI
/// listings of old or newer saves never fail. A known type with bad
/// parameters is reported as invalid rather than unknown.
pub fn describe_record(record: &PersistedRecord) -> String {
    match Effect::from_record(record) {
        Ok(effect) => effect.description(),
        Err(RecordError::UnrecognizedType(tag)) => format!("Unknown item mod: {}", tag),
        Err(RecordError::Malformed { effect_type, .. })
        | Err(RecordError::InvalidParameter { effect_type, .. }) => {
            format!("Invalid {} mod", effect_type)
        }
        Err(RecordError::InvalidTypeField(value)) => format!("Unknown item mod: {}", value),
        Err(_) => "Unknown item mod: <missing>".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> PersistedRecord {
        match value {
            Value::Object(map) => map,
            other => panic!("not an object: {other}"),
        }
    }

    #[test]
    fn test_to_record_field_names() {
        let record = Effect::life_leech(0.3, 0.5).unwrap().to_record().unwrap();
        assert_eq!(record.get("type"), Some(&json!("life leech")));
        assert_eq!(record.get("chanceToLeech"), Some(&json!(0.3)));
        assert_eq!(record.get("leechPercentage"), Some(&json!(0.5)));
        assert_eq!(record.len(), 3);

        let record = Effect::multiple_projectiles(3).unwrap().to_record().unwrap();
        assert_eq!(record.get("numberOfProjectiles"), Some(&json!(3)));
    }

    #[test]
    fn test_from_record() {
        let effect = Effect::from_record(&record(json!({"type": "thorns", "thornsDamage": 5}))).unwrap();
        assert_eq!(effect, Effect::thorns(5.0).unwrap());

        let effect = Effect::from_record(&record(json!({
            "type": "reduce damage",
            "reduceDamageAmount": 3.5
        })))
        .unwrap();
        assert_eq!(effect, Effect::reduce_damage(3.5).unwrap());
    }

    #[test]
    fn test_extra_fields_ignored() {
        let effect = Effect::from_record(&record(json!({
            "type": "thorns",
            "thornsDamage": 5,
            "addedInVersion": 7
        })))
        .unwrap();
        assert_eq!(effect, Effect::thorns(5.0).unwrap());
    }

    #[test]
    fn test_missing_type() {
        let err = Effect::from_record(&record(json!({"thornsDamage": 5}))).unwrap_err();
        assert!(matches!(err, RecordError::MissingType));
    }

    #[test]
    fn test_non_string_type() {
        let err = Effect::from_record(&record(json!({"type": 3}))).unwrap_err();
        assert!(matches!(err, RecordError::InvalidTypeField(_)));
    }

    #[test]
    fn test_unrecognized_type() {
        let err = Effect::from_record(&record(json!({"type": "bogus"}))).unwrap_err();
        assert!(err.is_unrecognized());
        assert!(matches!(err, RecordError::UnrecognizedType(ref tag) if tag == "bogus"));
    }

    #[test]
    fn test_missing_parameter_is_malformed() {
        let err = Effect::from_record(&record(json!({"type": "life leech", "chanceToLeech": 0.3})))
            .unwrap_err();
        assert!(matches!(
            err,
            RecordError::Malformed {
                effect_type: EffectType::LifeLeech,
                ..
            }
        ));
    }

    #[test]
    fn test_fractional_projectiles_is_malformed() {
        let err = Effect::from_record(&record(json!({
            "type": "multiple projectiles",
            "numberOfProjectiles": 2.5
        })))
        .unwrap_err();
        assert!(matches!(err, RecordError::Malformed { .. }));
    }

    #[test]
    fn test_out_of_range_parameter() {
        let err = Effect::from_record(&record(json!({
            "type": "life leech",
            "chanceToLeech": 1.5,
            "leechPercentage": 0.5
        })))
        .unwrap_err();
        assert!(matches!(err, RecordError::InvalidParameter { .. }));
    }

    #[test]
    fn test_describe_record() {
        let known = record(json!({"type": "thorns", "thornsDamage": 5}));
        assert_eq!(describe_record(&known), "Reflects 5 damage to attackers");

        let unknown = record(json!({"type": "frost nova", "radius": 3}));
        assert_eq!(describe_record(&unknown), "Unknown item mod: frost nova");

        let untyped = record(json!({"radius": 3}));
        assert_eq!(describe_record(&untyped), "Unknown item mod: <missing>");
    }

    #[test]
    fn test_describe_invalid_record() {
        let missing_field = record(json!({"type": "thorns"}));
        assert_eq!(describe_record(&missing_field), "Invalid thorns mod");

        let out_of_range = record(json!({"type": "life leech", "chanceToLeech": 2.0, "leechPercentage": 0.5}));
        assert_eq!(describe_record(&out_of_range), "Invalid life leech mod");

        let numeric_type = record(json!({"type": 7}));
        assert_eq!(describe_record(&numeric_type), "Unknown item mod: 7");
    }
}
