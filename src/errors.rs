use thiserror::Error;

/// Filtering errors - no I/O dependencies
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeSearchError {
    #[error("Invalid range expression '{expression}' for attribute '{attribute}'")]
    InvalidRangeExpression {
        attribute: String,
        expression: String,
    },
}

pub type Result<T> = std::result::Result<T, RangeSearchError>;
