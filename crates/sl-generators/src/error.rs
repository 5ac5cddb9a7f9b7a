//! Error types for the generators crate.

/// Errors that can occur during NPC or loot generation.
#[derive(Debug, thiserror::Error)]
pub enum GenError {
    /// A numeric argument is outside its valid range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Convenience result type for generator operations.
pub type GenResult<T> = Result<T, GenError>;
