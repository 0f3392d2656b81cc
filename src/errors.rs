//! HANDOFF default `Error`
use std::fmt;

/// Result type: `std::result::Result<T, Error>`
pub type Result<T> = std::result::Result<T, Error>;


/// Wrapping error type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Nothing was queued at the time of a non-blocking receive.
    /// The caller was not registered as a waiter.
    Empty,
}


// -----------------------------------------------------------------------------
// 		- Display -
// -----------------------------------------------------------------------------
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Empty => write!(f, "queue is empty"),
        }
    }
}

impl std::error::Error for Error {}
