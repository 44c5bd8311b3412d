//! API client configuration record.
//!
//! Only the key is mandatory; the model and sampling parameters fall back to
//! defaults.

use crate::models::{FieldType, FieldcheckError, Result};
use crate::schema::{FieldSpec, Record, RecordType};
use serde::Serialize;
use serde_json::{Map, Value};
use std::sync::LazyLock;

pub const DEFAULT_MODEL: &str = "gpt-4";
pub const DEFAULT_MAX_TOKENS: i64 = 1000;
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Schema of the `APIConfig` record.
pub static API_CONFIG: LazyLock<RecordType> = LazyLock::new(|| {
    RecordType::builder("APIConfig")
        .field(FieldSpec::required("api_key", FieldType::String))
        .field(FieldSpec::optional("model", FieldType::String, DEFAULT_MODEL))
        .field(FieldSpec::optional(
            "max_tokens",
            FieldType::Integer,
            DEFAULT_MAX_TOKENS,
        ))
        .field(FieldSpec::optional(
            "temperature",
            FieldType::Float,
            DEFAULT_TEMPERATURE,
        ))
        .build()
        .expect("APIConfig schema is well formed")
});

/// Validated API configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiConfig {
    api_key: String,
    model: String,
    max_tokens: i64,
    temperature: f64,
}

impl ApiConfig {
    /// Build a configuration from just an API key.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let mut input = Map::new();
        input.insert("api_key".to_string(), Value::String(api_key.into()));
        Self::from_values(&input)
    }

    /// Validate raw values and convert the resulting record.
    pub fn from_values(input: &Map<String, Value>) -> Result<Self> {
        API_CONFIG.validate(input)?.try_into()
    }

    pub fn schema() -> &'static RecordType {
        &API_CONFIG
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn max_tokens(&self) -> i64 {
        self.max_tokens
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }
}

impl TryFrom<Record> for ApiConfig {
    type Error = FieldcheckError;

    fn try_from(record: Record) -> Result<Self> {
        super::expect_record_type(&record, &API_CONFIG)?;
        Ok(Self {
            api_key: super::field(&record, "api_key", Record::get_str)?.to_string(),
            model: super::field(&record, "model", Record::get_str)?.to_string(),
            max_tokens: super::field(&record, "max_tokens", Record::get_int)?,
            temperature: super::field(&record, "temperature", Record::get_float)?,
        })
    }
}
