//! # internset
//!
//! A memory-dense interning table: maps arbitrary values (strings, most of
//! the time) to small, stable, densely-packed integer identifiers and back.
//!
//! Replace repeated variable-length strings with cheap fixed-width integers
//! to shrink memory footprint and improve cache locality in datasets with
//! many duplicates, for example as the values of a much larger map.
//!
//! ## Design
//!
//! - **Dense ids**: identifiers start at 0, are assigned in first-insertion
//!   order with no gaps, and are never invalidated or reused.
//! - **Deferred key storage**: the open-addressing slot table stores only a
//!   `u32` per slot; keys live once in an ordered value store, which also
//!   makes the slot table rebuildable from scratch on resize.
//! - **Memory over raw speed**: tuned for density (7/8 load factor, u32
//!   slots) while keeping lookups competitive with a plain map.
//! - **No deletion, no thread-safe mutation, no persistence**: deliberately
//!   out of scope.
//!
//! ## Quick Start
//!
//! ```
//! use internset::InternTable;
//!
//! let mut table = InternTable::new();
//!
//! let foo = table.intern("foo");
//! let bar = table.intern("bar");
//! assert_eq!((foo, bar), (0, 1));
//!
//! // Same content, same identifier.
//! assert_eq!(table.intern("foo"), foo);
//!
//! // Identifiers resolve back to their values in O(1).
//! assert_eq!(table.resolve(foo).map(String::as_str), Some("foo"));
//!
//! // Absence is an Option, not an error.
//! assert_eq!(table.lookup("missing"), None);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
// Slot contents are u32 by design; the encoding helper asserts the
// identifier ceiling before casting, and capacities are validated.
#![allow(clippy::cast_possible_truncation)]

pub mod config;
#[cfg(test)]
mod config_tests;
pub mod error;
pub mod table;

pub use config::InternConfig;
pub use error::{Error, Result};
pub use table::InternTable;
