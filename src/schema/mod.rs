//! Data-driven schemas: field specifications, record types and validation.

mod email;
mod field;
mod record;
mod validate;

pub use email::is_valid_email;
pub use field::{Constraint, FieldSpec};
pub use record::{Record, RecordType, RecordTypeBuilder};
pub use validate::validate;
