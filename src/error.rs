use std::fmt;

/// Everything that can go wrong at the boundary of this crate.
///
/// There are exactly three kinds, matching the three ways a host embedding
/// this crate needs to react differently: a caller mistake (fix the call
/// site), a resource exhaustion (retry or give up), and a corrupted
/// invariant (stop trusting this index).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A caller-supplied argument violates a documented precondition, e.g.
    /// a window with `dstart >= dend`, or a positive window offset.
    InvalidArgument(String),
    /// An allocation failed. Construction and searching are otherwise
    /// infallible.
    OutOfMemory,
    /// A suffix array failed an integrity check that should be impossible to
    /// fail given a correct builder. This indicates a bug in this crate, not
    /// in the caller.
    InternalInvariant(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
            Error::OutOfMemory => write!(f, "allocation failure"),
            Error::InternalInvariant(msg) => write!(f, "internal invariant violated: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Shorthand for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
