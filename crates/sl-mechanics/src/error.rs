//! Error types for the mechanics crate.

/// Errors that can occur in the dice engine or encounter calculator.
#[derive(Debug, thiserror::Error)]
pub enum MechError {
    /// A dice formula does not match `<count>d<sides>[+/-modifier]`.
    #[error("invalid dice formula: '{0}'")]
    InvalidFormula(String),

    /// A numeric argument is outside its valid range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Convenience result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;
