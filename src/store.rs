use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::hash::{BuildHasher, Hasher};

use crate::error::Error;
use crate::key::CacheKey;
use crate::value::Value;

/// Map keyed by canonical keys, reusing them as their own hash values.
type KeyMap<V> = HashMap<CacheKey, V, BuildKeyHasher>;

/// The per-wrapper result store.
///
/// Entries are write-once: the first value bound to a key is authoritative
/// for the store's whole lifetime. There is no eviction.
pub(crate) struct Store {
    map: KeyMap<Value>,
    /// Keys in insertion order, for diagnostic iteration.
    order: Vec<CacheKey>,
}

impl Store {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self { map: KeyMap::default(), order: Vec::new() }
    }

    /// Whether a value is stored for the key.
    pub fn has(&self, key: CacheKey) -> bool {
        self.map.contains_key(&key)
    }

    /// The stored value for the key.
    ///
    /// Only valid after [`has`](Self::has) returned true for the same key.
    pub fn get(&self, key: CacheKey) -> Result<&Value, Error> {
        self.map.get(&key).ok_or(Error::KeyNotFound)
    }

    /// Binds a value to a key.
    ///
    /// The first write wins. Rebinding with an equal value is a no-op;
    /// rebinding with a different value fails.
    pub fn set(&mut self, key: CacheKey, value: Value) -> Result<(), Error> {
        match self.map.entry(key) {
            Entry::Vacant(entry) => {
                entry.insert(value);
                self.order.push(key);
                Ok(())
            }
            Entry::Occupied(entry) if *entry.get() == value => Ok(()),
            Entry::Occupied(_) => Err(Error::DuplicateKeyConflict),
        }
    }

    /// The number of stored entries.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Stored entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (CacheKey, &Value)> {
        self.order.iter().map(|&key| (key, &self.map[&key]))
    }
}

/// Builds hashers that pass canonical keys through instead of rehashing.
#[derive(Copy, Clone, Default)]
struct BuildKeyHasher;

impl BuildHasher for BuildKeyHasher {
    type Hasher = KeyHasher;

    fn build_hasher(&self) -> KeyHasher {
        KeyHasher::default()
    }
}

#[derive(Default)]
struct KeyHasher(u64);

impl Hasher for KeyHasher {
    fn finish(&self) -> u64 {
        self.0
    }

    fn write(&mut self, _: &[u8]) {
        unreachable!("canonical keys hash as u128")
    }

    fn write_u128(&mut self, i: u128) {
        // Fold the halves so both contribute to the bucket index.
        self.0 = (i as u64) ^ ((i >> 64) as u64);
    }
}
