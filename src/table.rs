//! The intern table: a memory-dense map from values to stable integer ids.
//!
//! Two co-indexed structures back the table. The value store is an ordered,
//! append-only `Vec<K>` where the position of a value IS its identifier. The
//! slot table is an open-addressing `Vec<u32>` mapping a hash-derived slot to
//! `identifier + 1`, with `0` meaning empty (the shift keeps identifier 0
//! representable). The slot table is purely derived: it can be rebuilt from
//! the value store alone, which is exactly what resize does.

use std::borrow::Borrow;
use std::hash::{BuildHasher, Hash};

use rustc_hash::FxBuildHasher;

use crate::config::InternConfig;
use crate::error::Result;

/// Encodes an identifier for storage in a slot (`identifier + 1`, so 0 can
/// mean empty).
///
/// Panics once the identifier space is exhausted: a truncated slot value
/// would silently corrupt the table, and there is no wider encoding to fall
/// back to.
pub(crate) fn encode_slot(index: usize) -> u32 {
    assert!(
        index < u32::MAX as usize,
        "intern table full: u32 identifier space exhausted"
    );
    (index + 1) as u32
}

/// A memory-dense interning table mapping values to densely-packed ids.
///
/// Identifiers are assigned in first-insertion order starting at 0, are never
/// reused, and stay valid for the lifetime of the table. Interning the same
/// content twice returns the same identifier. There is no remove operation,
/// which is what keeps the probe logic free of tombstones.
///
/// Compared to a `HashMap<K, u32>` plus a `Vec<K>`, the table stores each key
/// once and spends four bytes per slot on the index, so it is markedly
/// smaller on datasets with many repeated strings, at comparable lookup
/// speed.
///
/// # Concurrency
///
/// The table is not safe for concurrent mutation. Concurrent [`intern`]
/// calls without external locking are a data race; wrap the table in a lock
/// if it is shared. Concurrent read-only [`lookup`]/[`resolve`] calls with no
/// writer are fine.
///
/// [`intern`]: InternTable::intern
/// [`lookup`]: InternTable::lookup
/// [`resolve`]: InternTable::resolve
///
/// # Examples
///
/// ```
/// use internset::InternTable;
///
/// let mut table = InternTable::new();
/// let foo = table.intern("foo");
/// let bar = table.intern("bar");
/// assert_eq!((foo, bar), (0, 1));
/// assert_eq!(table.intern("foo"), foo);
/// assert_eq!(table.resolve(bar).map(String::as_str), Some("bar"));
/// assert_eq!(table.lookup("missing"), None);
/// ```
#[derive(Debug, Clone)]
pub struct InternTable<K = String, S = FxBuildHasher> {
    /// Maps slot to `identifier + 1`; 0 means the slot is empty.
    slots: Vec<u32>,
    /// Value store: `values[id]` is the id-th distinct value interned.
    values: Vec<K>,
    /// `capacity - 1`; capacity is a power of two so this is a valid mask.
    mask: u32,
    /// Entry count at which the next insertion must grow the table first.
    max_load: usize,
    load_numerator: u32,
    load_denominator: u32,
    hasher: S,
}

impl<K: Hash + Eq> InternTable<K, FxBuildHasher> {
    /// Creates an empty table with the default configuration
    /// (capacity 16, load factor 7/8) and the default Fx hasher.
    #[must_use]
    pub fn new() -> Self {
        Self::from_validated(InternConfig::default(), FxBuildHasher)
    }

    /// Creates an empty table with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` fails [`InternConfig::validate`].
    pub fn with_config(config: InternConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_validated(config, FxBuildHasher))
    }
}

impl<K: Hash + Eq> Default for InternTable<K, FxBuildHasher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, S> InternTable<K, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Creates an empty table with the given configuration and hash builder.
    ///
    /// The hasher must be well-distributed: linear probing degrades quickly
    /// when the hash avalanches poorly.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` fails [`InternConfig::validate`].
    pub fn with_config_and_hasher(config: InternConfig, hasher: S) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_validated(config, hasher))
    }

    fn from_validated(config: InternConfig, hasher: S) -> Self {
        let capacity = config.min_capacity;
        Self {
            slots: vec![0; capacity],
            values: Vec::new(),
            mask: (capacity - 1) as u32,
            max_load: capacity * config.load_numerator as usize / config.load_denominator as usize,
            load_numerator: config.load_numerator,
            load_denominator: config.load_denominator,
            hasher,
        }
    }

    /// Returns the identifier for `value`, interning it if it is new.
    ///
    /// Equal content always maps to the same identifier, across resizes and
    /// for the lifetime of the table. New values copy into the table via
    /// [`ToOwned`]; no ownership of `value` itself is taken.
    ///
    /// # Panics
    ///
    /// Panics if the table detects internal corruption (a value reported
    /// present immediately after a resize that guarantees it is new). This
    /// indicates a bug, not a caller error.
    ///
    /// Also panics when interning a new value would overflow the
    /// `identifier + 1` slot encoding, i.e. at the `u32::MAX`-th distinct
    /// value.
    pub fn intern<Q>(&mut self, value: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ToOwned<Owned = K> + ?Sized,
    {
        let (mut slot, found) = self.find_slot(value);
        if found {
            return (self.slots[slot] - 1) as usize;
        }

        let index = self.values.len();
        if index >= self.max_load {
            // Resize, then search again: the slot computed above is against
            // the discarded table.
            self.resize();
            let (new_slot, found) = self.find_slot(value);
            assert!(!found, "intern table corrupted: value present after resize");
            slot = new_slot;
        }

        self.values.push(value.to_owned());
        self.slots[slot] = encode_slot(index);
        index
    }

    /// Returns the identifier for `value` if it has been interned.
    ///
    /// Pure query, no mutation. `None` means the value has never been
    /// interned; `Some(0)` is a real identifier, not a sentinel.
    #[must_use]
    pub fn lookup<Q>(&self, value: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let (slot, found) = self.find_slot(value);
        if !found {
            return None;
        }
        Some((self.slots[slot] - 1) as usize)
    }

    /// Returns the value for `id`, or `None` if `id` was never assigned.
    ///
    /// O(1) direct index into the value store.
    #[must_use]
    pub fn resolve(&self, id: usize) -> Option<&K> {
        self.values.get(id)
    }

    /// Number of distinct values interned. Identifiers cover `[0, len)`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if nothing has been interned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Current capacity of the slot table. Always a power of two; doubles
    /// whenever an insertion would push the load factor over the threshold.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Iterates over `(identifier, value)` pairs in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &K)> {
        self.values.iter().enumerate()
    }

    /// Returns `(slot, found)`: the slot holding `value`, or the empty slot
    /// where it belongs.
    fn find_slot<Q>(&self, value: &Q) -> (usize, bool)
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let hash = self.hasher.hash_one(value);
        // The mask only inspects low bits; fold the high half in so they
        // carry the whole 64-bit hash.
        let hash = (hash ^ (hash >> 32)) as u32;

        let mut slot = (hash & self.mask) as usize;
        loop {
            let index_plus_one = self.slots[slot];
            if index_plus_one == 0 {
                // Unused slot: value belongs here.
                return (slot, false);
            }
            let index = (index_plus_one - 1) as usize;
            if self.values[index].borrow() == value {
                return (slot, true);
            }

            slot = ((slot as u32 + 1) & self.mask) as usize;
        }
    }

    /// Doubles the slot table and rebuilds it from the value store.
    ///
    /// The old table is discarded outright rather than migrated: the value
    /// store is the authoritative record and the slot table is derived from
    /// it, so re-inserting every value in identifier order reproduces a
    /// correct table at the new capacity.
    fn resize(&mut self) {
        let next_capacity = self.slots.len() * 2;
        tracing::debug!(
            old_capacity = self.slots.len(),
            new_capacity = next_capacity,
            entries = self.values.len(),
            "resizing intern table"
        );

        self.slots = vec![0; next_capacity];
        self.mask = (next_capacity - 1) as u32;
        self.max_load =
            next_capacity * self.load_numerator as usize / self.load_denominator as usize;

        for index in 0..self.values.len() {
            let (slot, found) = self.find_slot::<K>(&self.values[index]);
            assert!(
                !found,
                "intern table corrupted: duplicate value during resize"
            );
            self.slots[slot] = encode_slot(index);
        }
    }
}
