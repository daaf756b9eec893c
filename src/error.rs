//! The crate's error type.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Precondition violations reported by curve math and editing operations.
///
/// None of these are transient: they all mean a caller broke an operation's contract.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// A bernstein basis polynomial was requested with `k > n`.
    #[error("basis index {k} exceeds degree {n}")]
    InvalidDegree {
        /// Index of the requested basis polynomial
        k: usize,
        /// Degree of the basis
        n: usize,
    },

    /// Two vectors of different length were combined.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Dimension of the left operand (or of the container)
        expected: usize,
        /// Dimension of the offending operand
        found: usize,
    },

    /// A segment or point index was out of bounds.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// The requested index
        index: usize,
        /// Length of the indexed sequence
        len: usize,
    },

    /// A point was appended to a spline without any segment.
    #[error("spline has no segment to append to")]
    NoActiveSegment,

    /// A numeric argument was outside its domain, e.g. a negative factorial.
    #[error("invalid argument {name} = {value}")]
    InvalidArgument {
        /// Name of the parameter
        name: &'static str,
        /// The rejected value
        value: i64,
    },
}
