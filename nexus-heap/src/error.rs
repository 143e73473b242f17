//! Error types for heap operations.

use thiserror::Error;

/// Failure reported by a [`Heap`](crate::Heap) operation.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// Index outside `0..len`.
    #[error("index {index} out of range for heap of length {len}")]
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// Heap length at the time of the call.
        len: usize,
    },
    /// Query needs at least one element.
    #[error("heap is empty")]
    Empty,
}

/// String tag that names neither polarity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid heap polarity '{input}'")]
pub struct ParsePolarityError {
    /// The tag that failed to parse.
    pub input: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_index_out_of_range() {
        let err = HeapError::IndexOutOfRange { index: 7, len: 3 };
        assert_eq!(err.to_string(), "index 7 out of range for heap of length 3");
    }

    #[test]
    fn display_empty() {
        assert_eq!(HeapError::Empty.to_string(), "heap is empty");
    }
}
