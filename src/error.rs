//! Error types for eager sequence operations.
//!
//! Absence is not an error in this crate: operations that may simply find
//! nothing (`first`, `get`, `index_of`) return `Option`. This module covers
//! the cases where an operation's contract cannot be met at all.

use thiserror::Error;

/// Errors produced while realizing a sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// Seedless `reduce` was given an empty sequence, so there is no first
    /// element to seed the accumulator with.
    #[error("cannot reduce an empty sequence")]
    EmptySequence,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sequence_message() {
        let err = SequenceError::EmptySequence;
        assert_eq!(err.to_string(), "cannot reduce an empty sequence");
    }
}
