//! User record: a name, an age and an email address, all required.

use crate::models::{FieldType, FieldcheckError, Result};
use crate::schema::{FieldSpec, Record, RecordType};
use serde::Serialize;
use serde_json::{Map, Value};
use std::sync::LazyLock;

pub const MAX_NAME_LENGTH: usize = 50;
pub const MAX_AGE: i64 = 120;

/// Schema of the `User` record.
pub static USER: LazyLock<RecordType> = LazyLock::new(|| {
    RecordType::builder("User")
        .field(
            FieldSpec::required("name", FieldType::String)
                .min_length(1)
                .max_length(MAX_NAME_LENGTH),
        )
        .field(
            FieldSpec::required("age", FieldType::Integer)
                .gt(0)
                .le(MAX_AGE as f64),
        )
        .field(FieldSpec::required("email", FieldType::Email))
        .build()
        .expect("User schema is well formed")
});

/// Validated user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    name: String,
    age: i64,
    email: String,
}

impl User {
    pub fn new(name: impl Into<String>, age: i64, email: impl Into<String>) -> Result<Self> {
        let mut input = Map::new();
        input.insert("name".to_string(), Value::String(name.into()));
        input.insert("age".to_string(), Value::from(age));
        input.insert("email".to_string(), Value::String(email.into()));
        Self::from_values(&input)
    }

    /// Validate raw values and convert the resulting record.
    pub fn from_values(input: &Map<String, Value>) -> Result<Self> {
        USER.validate(input)?.try_into()
    }

    pub fn schema() -> &'static RecordType {
        &USER
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i64 {
        self.age
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

impl TryFrom<Record> for User {
    type Error = FieldcheckError;

    fn try_from(record: Record) -> Result<Self> {
        super::expect_record_type(&record, &USER)?;
        Ok(Self {
            name: super::field(&record, "name", Record::get_str)?.to_string(),
            age: super::field(&record, "age", Record::get_int)?,
            email: super::field(&record, "email", Record::get_str)?.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Violation;
    use crate::records::API_CONFIG;
    use serde_json::json;

    fn input(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected JSON object, got {other}"),
        }
    }

    fn user_with(name: &str, age: i64) -> Result<User> {
        User::new(name, age, "alice@example.com")
    }

    #[test]
    fn test_valid_user() {
        let record = USER
            .validate(&input(json!({"name": "Alice", "email": "alice@example.com", "age": 30})))
            .unwrap();
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({"name": "Alice", "age": 30, "email": "alice@example.com"})
        );

        let user = User::try_from(record).unwrap();
        assert_eq!(user.name(), "Alice");
        assert_eq!(user.age(), 30);
        assert_eq!(user.email(), "alice@example.com");
    }

    #[test]
    fn test_invalid_email_is_single_constraint_violation() {
        let failure = USER
            .validate(&input(json!({"name": "Alice", "email": "not-an-email", "age": 30})))
            .unwrap_err();
        assert_eq!(
            failure.violations(),
            &[Violation::ConstraintViolation {
                field: "email".to_string(),
                constraint: "email format".to_string(),
                actual: json!("not-an-email"),
            }]
        );
    }

    #[test]
    fn test_age_boundaries() {
        assert!(user_with("Alice", 0).is_err());
        assert!(user_with("Alice", 1).is_ok());
        assert!(user_with("Alice", 120).is_ok());
        assert!(user_with("Alice", 121).is_err());

        let err = user_with("Alice", 150).unwrap_err();
        assert_eq!(
            err.violations().unwrap(),
            &[Violation::ConstraintViolation {
                field: "age".to_string(),
                constraint: "<= 120".to_string(),
                actual: json!(150),
            }]
        );
    }

    #[test]
    fn test_name_length_boundaries() {
        assert!(user_with("", 30).is_err());
        assert!(user_with(&"a".repeat(1), 30).is_ok());
        assert!(user_with(&"a".repeat(50), 30).is_ok());
        assert!(user_with(&"a".repeat(51), 30).is_err());
    }

    #[test]
    fn test_missing_fields_do_not_hide_other_violations() {
        let failure = USER
            .validate(&input(json!({"age": 0, "email": "nope"})))
            .unwrap_err();
        assert_eq!(failure.fields(), vec!["name", "age", "email"]);
        assert!(matches!(
            failure.violations()[0],
            Violation::MissingRequiredField { .. }
        ));
        assert_eq!(
            failure
                .violations()
                .iter()
                .filter(|v| matches!(v, Violation::MissingRequiredField { .. }))
                .count(),
            1
        );
    }

    #[test]
    fn test_all_missing_reports_each_once() {
        let failure = USER.validate(&Map::new()).unwrap_err();
        assert_eq!(failure.len(), 3);
        assert!(
            failure
                .violations()
                .iter()
                .all(|v| matches!(v, Violation::MissingRequiredField { .. }))
        );
    }

    #[test]
    fn test_age_string_coerced() {
        let user = User::from_values(&input(json!({
            "name": "Bob",
            "age": "42",
            "email": "bob@example.org"
        })))
        .unwrap();
        assert_eq!(user.age(), 42);
    }

    #[test]
    fn test_wrong_record_type_rejected() {
        let record = API_CONFIG.validate(&input(json!({"api_key": "sk"}))).unwrap();
        let err = User::try_from(record).unwrap_err();
        assert!(matches!(err, FieldcheckError::WrongRecordType { .. }));
    }

    #[test]
    fn test_padded_email_rejected_and_value_kept_verbatim() {
        let failure = USER
            .validate(&input(json!({"name": "Alice", "email": " alice@example.com ", "age": 30})))
            .unwrap_err();
        assert_eq!(
            failure.violations(),
            &[Violation::ConstraintViolation {
                field: "email".to_string(),
                constraint: "email format".to_string(),
                actual: json!(" alice@example.com "),
            }]
        );

        let user = User::new("Alice", 30, "Alice@Example.COM").unwrap();
        assert_eq!(user.email(), "Alice@Example.COM");
    }
}
