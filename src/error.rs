//! Error types for `internset`.
//!
//! Errors only arise at construction time, when a caller-supplied
//! [`InternConfig`](crate::InternConfig) fails validation. Table operations
//! themselves are infallible: absence is reported through `Option`, and an
//! internal consistency violation is a panic, not an error value.

use thiserror::Error;

/// Result type alias for `internset` operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when building an intern table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Requested minimum capacity is not usable as a table size.
    ///
    /// Capacity must be a power of two so slot selection can use a bitmask,
    /// and must fit the 32-bit slot encoding.
    #[error("invalid minimum capacity {requested}: must be a power of two between 2 and 2^31")]
    InvalidCapacity {
        /// Capacity that failed validation.
        requested: usize,
    },

    /// Requested load factor is outside `(0, 1)`.
    ///
    /// A ratio of 1 or more would let the table fill completely, and a full
    /// table has no empty slot to terminate the linear probe.
    #[error("invalid load factor {numerator}/{denominator}: ratio must be strictly between 0 and 1")]
    InvalidLoadFactor {
        /// Load factor numerator.
        numerator: u32,
        /// Load factor denominator.
        denominator: u32,
    },

    /// Capacity and load factor together leave no room before the first
    /// resize.
    ///
    /// The growth threshold `capacity * numerator / denominator` rounds to
    /// zero, so doubling the capacity could leave it at zero again and the
    /// table would fill past its own threshold.
    #[error("load factor {numerator}/{denominator} is degenerate at capacity {min_capacity}: growth threshold rounds to zero")]
    DegenerateLoadFactor {
        /// Configured minimum capacity.
        min_capacity: usize,
        /// Load factor numerator.
        numerator: u32,
        /// Load factor denominator.
        denominator: u32,
    },
}
