//! Built-in record types and their typed views.

mod config;
mod user;

pub use config::*;
pub use user::*;

use crate::models::{FieldcheckError, Result};
use crate::schema::{Record, RecordType};

fn expect_record_type(record: &Record, expected: &RecordType) -> Result<()> {
    if record.record_type() == expected.name() {
        Ok(())
    } else {
        Err(FieldcheckError::WrongRecordType {
            expected: expected.name().to_string(),
            found: record.record_type().to_string(),
        })
    }
}

fn field<'a, T>(
    record: &'a Record,
    name: &str,
    get: impl FnOnce(&'a Record, &str) -> Option<T>,
) -> Result<T> {
    get(record, name).ok_or_else(|| FieldcheckError::FieldAccess {
        record: record.record_type().to_string(),
        field: name.to_string(),
    })
}
