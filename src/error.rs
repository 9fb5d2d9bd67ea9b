//! Error taxonomy for the public, fallible operations.
//!
//! Kernel-internal invariants (stride arithmetic, table lengths) are enforced
//! with assertions instead; they cannot be triggered through the public API.

use thiserror::Error;

/// Errors reported synchronously by `Planner` construction and execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FftError {
    /// The requested transform size is not a positive power of two.
    #[error("transform size {size} is not a positive power of two")]
    InvalidSize {
        /// The rejected size.
        size: usize,
    },
    /// A buffer handed to `run` does not match the prepared transform size.
    #[error("buffer length {actual} does not match prepared size {expected}")]
    LengthMismatch {
        /// The size the planner was prepared for.
        expected: usize,
        /// The length of the offending buffer.
        actual: usize,
    },
}
