//! Error types for fieldcheck.
//!
//! Taxonomy:
//! - Violations: one problem with one field of one input (expected failures)
//! - Schema errors: a record type was declared inconsistently (bugs)
//! - Access errors: a record was read through the wrong typed view

use super::FieldType;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// A single problem found while validating one field.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    #[error("{field}: field required")]
    MissingRequiredField { field: String },

    #[error("{field}: expected {expected}, got {actual}")]
    TypeMismatch {
        field: String,
        expected: FieldType,
        actual: Value,
    },

    #[error("{field}: value {actual} violates {constraint}")]
    ConstraintViolation {
        field: String,
        constraint: String,
        actual: Value,
    },
}

impl Violation {
    /// Name of the field this violation refers to.
    pub fn field(&self) -> &str {
        match self {
            Self::MissingRequiredField { field }
            | Self::TypeMismatch { field, .. }
            | Self::ConstraintViolation { field, .. } => field,
        }
    }
}

/// Every violation found during one validation attempt.
///
/// Never empty: a failure only exists when at least one check failed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationFailure {
    record: String,
    violations: Vec<Violation>,
}

impl ValidationFailure {
    pub(crate) fn new(record: impl Into<String>, violations: Vec<Violation>) -> Self {
        debug_assert!(!violations.is_empty());
        Self {
            record: record.into(),
            violations,
        }
    }

    /// Name of the record type that failed validation.
    pub fn record(&self) -> &str {
        &self.record
    }

    /// Violations in schema field order.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Names of the offending fields, deduplicated, in order.
    pub fn fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = Vec::with_capacity(self.violations.len());
        for violation in &self.violations {
            if !fields.contains(&violation.field()) {
                fields.push(violation.field());
            }
        }
        fields
    }

    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plural = if self.violations.len() == 1 { "" } else { "s" };
        write!(
            f,
            "{} validation error{plural} for {}",
            self.violations.len(),
            self.record
        )?;
        for violation in &self.violations {
            write!(f, "\n  {violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationFailure {}

/// A record type declared inconsistently.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaError {
    #[error("Record type has no name")]
    EmptyName,

    #[error("Duplicate field '{field}' in record type '{record}'")]
    DuplicateField { record: String, field: String },

    #[error("Default for '{field}' in record type '{record}' is not a valid {expected}")]
    DefaultTypeMismatch {
        record: String,
        field: String,
        expected: FieldType,
    },

    #[error("Default for '{field}' in record type '{record}' violates {constraint}")]
    DefaultViolatesConstraint {
        record: String,
        field: String,
        constraint: String,
    },

    #[error("Constraint {constraint} cannot apply to {field_type} field '{field}' in '{record}'")]
    InapplicableConstraint {
        record: String,
        field: String,
        field_type: FieldType,
        constraint: String,
    },
}

/// Top-level error type for fieldcheck.
#[derive(Debug, Error)]
pub enum FieldcheckError {
    #[error(transparent)]
    Validation(#[from] ValidationFailure),

    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("Expected a '{expected}' record, got '{found}'")]
    WrongRecordType { expected: String, found: String },

    #[error("Field '{field}' is missing or mistyped in record '{record}'")]
    FieldAccess { record: String, field: String },
}

impl FieldcheckError {
    /// Violations carried by this error, if it is a validation failure.
    pub fn violations(&self) -> Option<&[Violation]> {
        match self {
            Self::Validation(failure) => Some(failure.violations()),
            _ => None,
        }
    }
}

/// Result type alias for fieldcheck.
pub type Result<T> = std::result::Result<T, FieldcheckError>;
