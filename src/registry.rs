use rustc_hash::FxHashMap;

use crate::error::Error;
use crate::memoize::{Memoized, Recurse};
use crate::value::Value;

/// A named collection of memoized functions.
///
/// The registry is an explicit object rather than a process-wide table.
/// Wrappers live as long as the registry, so call counts and stored results
/// accumulate across scripts.
#[derive(Debug, Default)]
pub struct Registry {
    map: FxHashMap<String, Memoized>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a non-recursive computation under a name.
    ///
    /// Registering a name twice replaces the previous wrapper together with
    /// its store and counter.
    pub fn register<F>(&mut self, name: impl Into<String>, func: F)
    where
        F: Fn(&[Value]) -> Result<Value, Error> + Send + Sync + 'static,
    {
        self.map.insert(name.into(), Memoized::new(func));
    }

    /// Registers a self-recursive computation under a name.
    ///
    /// The function receives a handle to its own wrapper and must route
    /// recursive calls through it.
    pub fn register_recursive<F>(&mut self, name: impl Into<String>, func: F)
    where
        F: Fn(Recurse<'_>, &[Value]) -> Result<Value, Error> + Send + Sync + 'static,
    {
        self.map.insert(name.into(), Memoized::new_recursive(func));
    }

    /// Looks up a wrapper by name.
    pub fn get(&self, name: &str) -> Result<&Memoized, Error> {
        self.map
            .get(name)
            .ok_or_else(|| Error::UnknownFunction(name.into()))
    }

    /// The registered names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.map.keys().map(String::as_str)
    }
}
