//! Field specifications and constraints.

use super::email::is_valid_email;
use crate::models::{FieldType, FieldValue};
use std::fmt;

/// A predicate a field value must satisfy beyond its declared type.
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
    /// Lower numeric bound
    Min { value: f64, exclusive: bool },
    /// Upper numeric bound
    Max { value: f64, exclusive: bool },
    /// Minimum string length in characters
    MinLength(usize),
    /// Maximum string length in characters
    MaxLength(usize),
    /// Email syntax
    Email,
}

impl Constraint {
    /// Whether this constraint can be evaluated against values of `field_type`.
    pub fn applies_to(&self, field_type: FieldType) -> bool {
        match self {
            Self::Min { .. } | Self::Max { .. } => field_type.is_numeric(),
            Self::MinLength(_) | Self::MaxLength(_) => !field_type.is_numeric(),
            Self::Email => field_type == FieldType::Email,
        }
    }

    /// Evaluate against a typed value. Values the constraint does not apply
    /// to pass.
    pub fn check(&self, value: &FieldValue) -> bool {
        match self {
            Self::Min { value: bound, exclusive } => value.as_number().is_none_or(|n| {
                if *exclusive { n > *bound } else { n >= *bound }
            }),
            Self::Max { value: bound, exclusive } => value.as_number().is_none_or(|n| {
                if *exclusive { n < *bound } else { n <= *bound }
            }),
            Self::MinLength(min) => value.as_str().is_none_or(|s| s.chars().count() >= *min),
            Self::MaxLength(max) => value.as_str().is_none_or(|s| s.chars().count() <= *max),
            Self::Email => value.as_str().is_none_or(is_valid_email),
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Min { value, exclusive: true } => write!(f, "> {value}"),
            Self::Min { value, exclusive: false } => write!(f, ">= {value}"),
            Self::Max { value, exclusive: true } => write!(f, "< {value}"),
            Self::Max { value, exclusive: false } => write!(f, "<= {value}"),
            Self::MinLength(n) => write!(f, "length >= {n}"),
            Self::MaxLength(n) => write!(f, "length <= {n}"),
            Self::Email => f.write_str("email format"),
        }
    }
}

/// Static description of one named, typed, optionally constrained field.
///
/// A field is required exactly when it has no default.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    name: String,
    field_type: FieldType,
    default: Option<FieldValue>,
    constraints: Vec<Constraint>,
}

impl FieldSpec {
    /// A field the caller must supply.
    pub fn required(name: impl Into<String>, field_type: FieldType) -> Self {
        Self::with_default(name.into(), field_type, None)
    }

    /// A field that falls back to `default` when omitted.
    pub fn optional(
        name: impl Into<String>,
        field_type: FieldType,
        default: impl Into<FieldValue>,
    ) -> Self {
        Self::with_default(name.into(), field_type, Some(default.into()))
    }

    fn with_default(name: String, field_type: FieldType, default: Option<FieldValue>) -> Self {
        let constraints = if field_type == FieldType::Email {
            vec![Constraint::Email]
        } else {
            Vec::new()
        };
        Self {
            name,
            field_type,
            default,
            constraints,
        }
    }

    /// Append a constraint. Constraints are evaluated in the order added.
    pub fn constraint(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    /// Exclusive lower bound.
    pub fn gt(self, bound: impl Into<f64>) -> Self {
        self.constraint(Constraint::Min {
            value: bound.into(),
            exclusive: true,
        })
    }

    /// Inclusive lower bound.
    pub fn ge(self, bound: impl Into<f64>) -> Self {
        self.constraint(Constraint::Min {
            value: bound.into(),
            exclusive: false,
        })
    }

    /// Exclusive upper bound.
    pub fn lt(self, bound: impl Into<f64>) -> Self {
        self.constraint(Constraint::Max {
            value: bound.into(),
            exclusive: true,
        })
    }

    /// Inclusive upper bound.
    pub fn le(self, bound: impl Into<f64>) -> Self {
        self.constraint(Constraint::Max {
            value: bound.into(),
            exclusive: false,
        })
    }

    pub fn min_length(self, min: usize) -> Self {
        self.constraint(Constraint::MinLength(min))
    }

    pub fn max_length(self, max: usize) -> Self {
        self.constraint(Constraint::MaxLength(max))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    pub fn default(&self) -> Option<&FieldValue> {
        self.default.as_ref()
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn is_required(&self) -> bool {
        self.default.is_none()
    }
}
