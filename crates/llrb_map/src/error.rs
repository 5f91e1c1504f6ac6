use thiserror::Error;

/// The common error type used by this crate
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LlrbError {
    /// A required argument was absent
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// An element was requested from an empty collection
    #[error("Collection is empty")]
    EmptyCollection,

    /// The operation is not implemented by this collection
    #[error("Unsupported operation: {0}")]
    Unsupported(&'static str),

    /// The tree structure does not satisfy the red-black invariants
    #[error("Invariant violated: {0}")]
    InvariantViolation(String),
}

pub type Result<T, E = LlrbError> = std::result::Result<T, E>;
