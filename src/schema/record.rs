//! Record types (schemas) and record instances.

use super::field::FieldSpec;
use crate::models::{FieldValue, SchemaError, ValidationFailure};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

/// Named, ordered collection of field specifications.
///
/// Built once through [`RecordType::builder`] and never mutated afterwards,
/// so a single instance can be shared freely across threads.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordType {
    name: String,
    fields: Vec<FieldSpec>,
}

impl RecordType {
    pub fn builder(name: impl Into<String>) -> RecordTypeBuilder {
        RecordTypeBuilder {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Field specifications in declaration order.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name() == name)
    }

    /// Names of fields that must be supplied.
    pub fn required_fields(&self) -> impl Iterator<Item = &str> {
        self.fields
            .iter()
            .filter(|f| f.is_required())
            .map(FieldSpec::name)
    }

    /// Validate `input` against this schema. See [`super::validate`].
    pub fn validate(&self, input: &Map<String, Value>) -> Result<Record, ValidationFailure> {
        super::validate(self, input)
    }
}

/// Accumulates field specifications and checks them for consistency.
#[derive(Debug)]
pub struct RecordTypeBuilder {
    name: String,
    fields: Vec<FieldSpec>,
}

impl RecordTypeBuilder {
    pub fn field(mut self, spec: FieldSpec) -> Self {
        self.fields.push(spec);
        self
    }

    /// Finish the schema.
    ///
    /// Rejects duplicate names, constraints that cannot apply to their
    /// field's type, and defaults that would themselves fail validation.
    pub fn build(self) -> Result<RecordType, SchemaError> {
        if self.name.is_empty() {
            return Err(SchemaError::EmptyName);
        }

        for (i, spec) in self.fields.iter().enumerate() {
            if self.fields[..i].iter().any(|f| f.name() == spec.name()) {
                return Err(SchemaError::DuplicateField {
                    record: self.name.clone(),
                    field: spec.name().to_string(),
                });
            }

            if let Some(constraint) = spec
                .constraints()
                .iter()
                .find(|c| !c.applies_to(spec.field_type()))
            {
                return Err(SchemaError::InapplicableConstraint {
                    record: self.name.clone(),
                    field: spec.name().to_string(),
                    field_type: spec.field_type(),
                    constraint: constraint.to_string(),
                });
            }

            let Some(default) = spec.default() else {
                continue;
            };
            if !spec.field_type().accepts(default) {
                return Err(SchemaError::DefaultTypeMismatch {
                    record: self.name.clone(),
                    field: spec.name().to_string(),
                    expected: spec.field_type(),
                });
            }
            if let Some(constraint) = spec.constraints().iter().find(|c| !c.check(default)) {
                return Err(SchemaError::DefaultViolatesConstraint {
                    record: self.name.clone(),
                    field: spec.name().to_string(),
                    constraint: constraint.to_string(),
                });
            }
        }

        Ok(RecordType {
            name: self.name,
            fields: self.fields,
        })
    }
}

/// Immutable, fully validated set of field values.
///
/// Holds exactly one value per field of its record type, in schema order.
/// Only produced by a successful validation.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    record_type: String,
    values: Vec<(String, FieldValue)>,
}

impl Record {
    pub(crate) fn new(record_type: &str, values: Vec<(String, FieldValue)>) -> Self {
        Self {
            record_type: record_type.to_string(),
            values,
        }
    }

    /// Name of the record type this instance conforms to.
    pub fn record_type(&self) -> &str {
        &self.record_type
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.values
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value)
    }

    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(FieldValue::as_str)
    }

    pub fn get_int(&self, field: &str) -> Option<i64> {
        self.get(field).and_then(FieldValue::as_int)
    }

    pub fn get_float(&self, field: &str) -> Option<f64> {
        self.get(field).and_then(FieldValue::as_float)
    }

    /// Field names and values in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Number of fields; always the field count of the record type.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True only for records of a type declared without fields.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// JSON object of all fields, in schema order.
    pub fn to_json(&self) -> Map<String, Value> {
        self.values
            .iter()
            .map(|(name, value)| (name.clone(), value.to_json()))
            .collect()
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (name, value) in &self.values {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
