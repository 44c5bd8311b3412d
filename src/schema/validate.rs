//! All-or-nothing validation of raw input against a record type.

use super::record::{Record, RecordType};
use crate::models::{ValidationFailure, Violation};
use serde_json::{Map, Value};
use tracing::debug;

/// Validate `input` against `record_type`.
///
/// Every field is checked, in declaration order, without stopping at the
/// first problem:
/// 1. take the supplied value, else the default, else report it missing
/// 2. coerce supplied values to the declared type
/// 3. evaluate every constraint of the field in order
///
/// Returns a [`Record`] only when nothing failed. Otherwise the
/// [`ValidationFailure`] carries every violation found. Keys the schema does
/// not name are ignored.
pub fn validate(
    record_type: &RecordType,
    input: &Map<String, Value>,
) -> Result<Record, ValidationFailure> {
    debug!(
        record = record_type.name(),
        supplied = input.len(),
        "Validating record"
    );

    for key in input.keys() {
        if record_type.field(key).is_none() {
            debug!(record = record_type.name(), field = %key, "Ignoring unknown field");
        }
    }

    let mut violations = Vec::new();
    let mut values = Vec::with_capacity(record_type.fields().len());

    for spec in record_type.fields() {
        let candidate = match (input.get(spec.name()), spec.default()) {
            (Some(raw), _) => match spec.field_type().coerce(raw) {
                Some(value) => value,
                None => {
                    violations.push(Violation::TypeMismatch {
                        field: spec.name().to_string(),
                        expected: spec.field_type(),
                        actual: raw.clone(),
                    });
                    continue;
                }
            },
            (None, Some(default)) => default.clone(),
            (None, None) => {
                violations.push(Violation::MissingRequiredField {
                    field: spec.name().to_string(),
                });
                continue;
            }
        };

        let mut passed = true;
        for constraint in spec.constraints() {
            if !constraint.check(&candidate) {
                passed = false;
                violations.push(Violation::ConstraintViolation {
                    field: spec.name().to_string(),
                    constraint: constraint.to_string(),
                    actual: candidate.to_json(),
                });
            }
        }

        if passed {
            values.push((spec.name().to_string(), candidate));
        }
    }

    if !violations.is_empty() {
        debug!(
            record = record_type.name(),
            violations = violations.len(),
            "Validation failed"
        );
        return Err(ValidationFailure::new(record_type.name(), violations));
    }

    debug!(record = record_type.name(), "Validation succeeded");
    Ok(Record::new(record_type.name(), values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FieldType, FieldValue};
    use crate::schema::FieldSpec;
    use serde_json::json;

    fn input(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected JSON object, got {other}"),
        }
    }

    fn item_schema() -> RecordType {
        RecordType::builder("Item")
            .field(FieldSpec::required("label", FieldType::String).min_length(2).max_length(4))
            .field(FieldSpec::required("count", FieldType::Integer).ge(0).lt(10))
            .field(FieldSpec::optional("weight", FieldType::Float, 1.5))
            .build()
            .unwrap()
    }

    #[test]
    fn test_valid_input_applies_defaults() {
        let record = validate(&item_schema(), &input(json!({"label": "box", "count": 3}))).unwrap();
        assert_eq!(record.get_str("label"), Some("box"));
        assert_eq!(record.get_int("count"), Some(3));
        assert_eq!(record.get_float("weight"), Some(1.5));
        assert_eq!(record.len(), 3);
    }

    #[test]
    fn test_supplied_value_overrides_default() {
        let record = validate(
            &item_schema(),
            &input(json!({"label": "box", "count": 3, "weight": 2})),
        )
        .unwrap();
        assert_eq!(record.get("weight"), Some(&FieldValue::Float(2.0)));
    }

    #[test]
    fn test_all_violations_reported_in_schema_order() {
        let failure = validate(&item_schema(), &input(json!({"count": "many", "weight": true})))
            .unwrap_err();

        assert_eq!(
            failure.violations(),
            &[
                Violation::MissingRequiredField {
                    field: "label".to_string()
                },
                Violation::TypeMismatch {
                    field: "count".to_string(),
                    expected: FieldType::Integer,
                    actual: json!("many"),
                },
                Violation::TypeMismatch {
                    field: "weight".to_string(),
                    expected: FieldType::Float,
                    actual: json!(true),
                },
            ]
        );
    }

    #[test]
    fn test_every_failing_constraint_of_a_field_is_reported() {
        let schema = RecordType::builder("Range")
            .field(FieldSpec::required("n", FieldType::Integer).gt(5).gt(10))
            .build()
            .unwrap();
        let failure = validate(&schema, &input(json!({"n": 1}))).unwrap_err();
        assert_eq!(failure.len(), 2);
        assert_eq!(
            failure.violations()[1],
            Violation::ConstraintViolation {
                field: "n".to_string(),
                constraint: "> 10".to_string(),
                actual: json!(1),
            }
        );
    }

    #[test]
    fn test_constraint_and_missing_violations_together() {
        let failure = validate(&item_schema(), &input(json!({"label": "x"}))).unwrap_err();
        assert_eq!(failure.fields(), vec!["label", "count"]);
        assert!(matches!(
            failure.violations()[0],
            Violation::ConstraintViolation { ref constraint, .. } if constraint == "length >= 2"
        ));
        assert!(matches!(
            failure.violations()[1],
            Violation::MissingRequiredField { .. }
        ));
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let record = validate(
            &item_schema(),
            &input(json!({"label": "box", "count": 0, "colour": "red"})),
        )
        .unwrap();
        assert!(record.get("colour").is_none());
        assert_eq!(record.len(), 3);
    }

    #[test]
    fn test_idempotent() {
        let schema = item_schema();
        let raw = input(json!({"label": "tin", "count": "7"}));
        let first = validate(&schema, &raw).unwrap();
        let second = validate(&schema, &raw).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_record_type_validate_delegates() {
        let schema = item_schema();
        assert!(schema.validate(&input(json!({"label": "ab", "count": 9}))).is_ok());
        assert!(schema.validate(&input(json!({"label": "ab", "count": 10}))).is_err());
    }
}
