//! Schema error types
//!
//! Error codes:
//! - TABREC_SCHEMA_VALIDATION_FAILED
//! - TABREC_SCHEMA_MALFORMED

use std::fmt;

/// Schema-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaErrorCode {
    /// Field spec list violates a well-formedness rule
    SchemaValidationFailed,
    /// Declarative schema document could not be parsed
    SchemaMalformed,
}

impl SchemaErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            SchemaErrorCode::SchemaValidationFailed => "TABREC_SCHEMA_VALIDATION_FAILED",
            SchemaErrorCode::SchemaMalformed => "TABREC_SCHEMA_MALFORMED",
        }
    }
}

impl fmt::Display for SchemaErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Validation failure details
#[derive(Debug, Clone)]
pub struct ValidationDetails {
    /// Offending field id, or the spec attribute when no id is usable
    pub field: String,
    /// Expected condition
    pub expected: String,
    /// Actual value or condition found
    pub actual: String,
}

impl ValidationDetails {
    pub fn new(
        field: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn empty_field_id() -> Self {
        Self {
            field: "fieldId".into(),
            expected: "non-empty string".into(),
            actual: "empty".into(),
        }
    }

    pub fn duplicate_field_id(field_id: impl Into<String>) -> Self {
        Self {
            field: field_id.into(),
            expected: "unique fieldId".into(),
            actual: "duplicate".into(),
        }
    }
}

impl fmt::Display for ValidationDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "field '{}': expected {}, got {}",
            self.field, self.expected, self.actual
        )
    }
}

/// Schema error type with full context
#[derive(Debug)]
pub struct SchemaError {
    /// Error code
    code: SchemaErrorCode,
    /// Human-readable message
    message: String,
    /// Validation details if applicable
    details: Option<ValidationDetails>,
}

impl SchemaError {
    /// Create a validation failed error
    pub fn validation_failed(details: ValidationDetails) -> Self {
        Self {
            code: SchemaErrorCode::SchemaValidationFailed,
            message: format!("Schema validation failed: {}", details),
            details: Some(details),
        }
    }

    /// Create an error for a malformed schema document
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self {
            code: SchemaErrorCode::SchemaMalformed,
            message: format!("Malformed schema document: {}", reason.into()),
            details: None,
        }
    }

    /// Returns the error code
    pub fn code(&self) -> SchemaErrorCode {
        self.code
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns validation details if applicable
    pub fn details(&self) -> Option<&ValidationDetails> {
        self.details.as_ref()
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for SchemaError {}

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;
