//! Plan construction errors

use thiserror::Error;

/// Result type for plan construction
pub type PlanResult<T> = Result<T, PlanError>;

/// Errors raised while turning a schema into a column plan
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// A labeled field declares no usable emission policy
    #[error("column '{0}' must declare colOutputMode as one of include|exclude|obfuscate")]
    InvalidOutputMode(String),

    /// A required labeled column is missing from the parsed header
    #[error("header row does not include column '{0}' required by the schema")]
    HeaderColumnNotFound(String),
}
