//! Conversion errors

use thiserror::Error;

pub use crate::plan::PlanError;

/// Result type for conversion operations
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Errors raised by the public conversion operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// The input table has no header row
    #[error("table must start with a header row")]
    MissingHeader,

    /// Column plan construction failed
    #[error(transparent)]
    Plan(#[from] PlanError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_errors_pass_through_transparently() {
        let err = ConvertError::from(PlanError::HeaderColumnNotFound("Email".into()));
        assert_eq!(
            err.to_string(),
            PlanError::HeaderColumnNotFound("Email".into()).to_string()
        );
    }
}
