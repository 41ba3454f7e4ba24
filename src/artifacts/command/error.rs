//! Errors raised by the dispatcher and the operation handlers.
//!
//! Only hard failures live here. Soft failures (empty commit message, missing
//! diff targets, unknown command names) are ordinary result strings.

/// Result type alias using [`CommandError`].
pub type Result<T> = std::result::Result<T, CommandError>;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// A sequence argument held something other than a list of strings.
    #[error("{parameter} should be a list")]
    TypeArgument { parameter: &'static str },

    /// `diff` was given the wrong number of versions.
    #[error("diff command requires exactly {expected} versions")]
    InvalidArgumentCount { expected: usize, actual: usize },

    /// A file named in a commit does not exist. Carries the path as given.
    #[error("{0} is not a valid file path")]
    PathNotFound(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
