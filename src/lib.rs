//! fieldcheck - data-driven record validation.
//!
//! ## Architecture
//!
//! A record type is a static table of field specifications. Each field has a
//! declared type, a default or a required flag, and ordered constraints
//! (numeric bounds, length bounds, email format).
//!
//! Validation is all-or-nothing:
//! - **Success**: an immutable [`Record`] with one typed value per field
//! - **Failure**: a [`ValidationFailure`] carrying every violation found
//!
//! ## Built-in records
//!
//! - [`API_CONFIG`] / [`ApiConfig`]: API key plus model and sampling defaults
//! - [`USER`] / [`User`]: bounded name, bounded age, email address

pub mod models;
pub mod records;
pub mod schema;

// Re-exports for convenience
pub use models::{
    FieldType, FieldValue, FieldcheckError, Result, SchemaError, ValidationFailure, Violation,
};
pub use records::{API_CONFIG, ApiConfig, USER, User};
pub use schema::{Constraint, FieldSpec, Record, RecordType, validate};
