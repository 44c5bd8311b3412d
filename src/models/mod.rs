//! Core data models for fieldcheck.
//!
//! - `value`: declared field types and typed field values
//! - `error`: violations, the aggregate failure, and crate errors

mod error;
mod value;

pub use error::*;
pub use value::*;
