//! Text validation failures.

use thiserror::Error;

/// Why a post was rejected. Checks run in declaration order and the first
/// failure is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Text may not be empty")]
    Empty,

    /// `length` is the normalized code-point count.
    #[error("Length {length} exceeds {max_length} characters")]
    TooLong { length: usize, max_length: usize },

    /// `offset` is in bytes, counted in the text as given.
    #[error("Invalid character [{character}] found at byte offset {offset}")]
    InvalidCharacter { character: char, offset: usize },
}
