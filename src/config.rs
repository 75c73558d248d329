//! Configuration for intern tables.
//!
//! [`InternConfig`] carries the tuning knobs of a table: the starting
//! capacity and the load-factor threshold that triggers growth. It derives
//! serde traits so an embedding application can keep these settings in its
//! own configuration file; the table itself is never serialized.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default minimum capacity of the slot table.
pub const DEFAULT_MIN_CAPACITY: usize = 16;

/// Default load-factor numerator.
///
/// Raising the load factor trades probe length for memory. At 7/8 lookups
/// stay close to a plain map while the table is considerably smaller; 3/4 is
/// slightly faster but wastes more slots.
pub const DEFAULT_LOAD_NUMERATOR: u32 = 7;

/// Default load-factor denominator.
pub const DEFAULT_LOAD_DENOMINATOR: u32 = 8;

/// Largest permitted capacity.
///
/// Slots store `identifier + 1` in a `u32`, so the table can never address
/// more than 2^31 slots without widening the encoding.
pub const MAX_CAPACITY: usize = 1 << 31;

/// Tuning parameters for an [`InternTable`](crate::InternTable).
///
/// The defaults (capacity 16, load factor 7/8) match the tuning the table
/// was designed around; most callers never need anything else. A larger
/// `min_capacity` avoids the early doubling steps when the final size is
/// known up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InternConfig {
    /// Initial capacity of the slot table. Must be a power of two.
    pub min_capacity: usize,

    /// Load-factor numerator.
    pub load_numerator: u32,

    /// Load-factor denominator.
    pub load_denominator: u32,
}

impl Default for InternConfig {
    fn default() -> Self {
        Self {
            min_capacity: DEFAULT_MIN_CAPACITY,
            load_numerator: DEFAULT_LOAD_NUMERATOR,
            load_denominator: DEFAULT_LOAD_DENOMINATOR,
        }
    }
}

impl InternConfig {
    /// Creates a config with the given minimum capacity and default load
    /// factor.
    #[must_use]
    pub fn with_min_capacity(min_capacity: usize) -> Self {
        Self {
            min_capacity,
            ..Self::default()
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCapacity`] unless `min_capacity` is a power of
    /// two in `2..=MAX_CAPACITY`, [`Error::InvalidLoadFactor`] unless the
    /// ratio is strictly between 0 and 1, and
    /// [`Error::DegenerateLoadFactor`] when `min_capacity * numerator`
    /// is below `denominator` (the growth threshold must be at least one
    /// entry, otherwise a single doubling cannot be relied on to raise it).
    pub fn validate(&self) -> Result<()> {
        if !self.min_capacity.is_power_of_two()
            || self.min_capacity < 2
            || self.min_capacity > MAX_CAPACITY
        {
            return Err(Error::InvalidCapacity {
                requested: self.min_capacity,
            });
        }

        if self.load_numerator == 0 || self.load_numerator >= self.load_denominator {
            return Err(Error::InvalidLoadFactor {
                numerator: self.load_numerator,
                denominator: self.load_denominator,
            });
        }

        // The table resizes once per over-threshold insertion. That is only
        // enough when the threshold is at least 1: doubling a capacity whose
        // threshold rounds to zero can round to zero again.
        if self.min_capacity * (self.load_numerator as usize) < self.load_denominator as usize {
            return Err(Error::DegenerateLoadFactor {
                min_capacity: self.min_capacity,
                numerator: self.load_numerator,
                denominator: self.load_denominator,
            });
        }

        Ok(())
    }
}
