use std::fmt::{self, Debug, Formatter};
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use crate::error::Error;
use crate::key::{self, CacheKey};
use crate::store::Store;
use crate::value::Value;

/// A registered computation in open-recursive form.
type RawFn = Box<dyn Fn(Recurse<'_>, &[Value]) -> Result<Value, Error> + Send + Sync>;

/// A memoized function.
///
/// Binds a raw computation to an exclusively owned result store and a call
/// counter. The counter tracks how often an external call actually reached
/// the raw computation; recursive re-entries through [`Recurse`] fill the
/// store but are not counted.
pub struct Memoized {
    /// The raw computation.
    func: RawFn,
    /// The wrapper's own result store.
    store: RwLock<Store>,
    /// Counts externally initiated calls that missed the store.
    calls: AtomicU64,
}

impl Memoized {
    /// Wraps a non-recursive computation.
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value, Error> + Send + Sync + 'static,
    {
        Self::new_recursive(move |_, args| func(args))
    }

    /// Wraps a computation that calls itself through the given handle.
    ///
    /// The handle passed to `func` resolves to this wrapper, so every
    /// self-call is a store lookup first.
    pub fn new_recursive<F>(func: F) -> Self
    where
        F: Fn(Recurse<'_>, &[Value]) -> Result<Value, Error> + Send + Sync + 'static,
    {
        Self {
            func: Box::new(func),
            store: RwLock::new(Store::new()),
            calls: AtomicU64::new(0),
        }
    }

    /// Executes the function, preferring a stored result.
    ///
    /// On a miss the raw computation runs, the counter increments, and the
    /// result is stored under the argument list's canonical key. A failing
    /// computation still counts as an attempt, but nothing is stored and the
    /// error propagates unchanged.
    pub fn invoke(&self, args: &[Value]) -> Result<Value, Error> {
        self.invoke_impl(args, true)
    }

    /// How many external calls reached the raw computation.
    pub fn call_count(&self) -> u64 {
        self.calls.load(Ordering::SeqCst)
    }

    /// Whether a result for the argument list is stored.
    pub fn is_cached(&self, args: &[Value]) -> Result<bool, Error> {
        Ok(self.store.read().has(key::encode(args)?))
    }

    /// The number of distinct argument lists computed so far.
    pub fn cache_len(&self) -> usize {
        self.store.read().len()
    }

    /// The stored results in insertion order, for diagnostics.
    pub fn cached_entries(&self) -> Vec<(CacheKey, Value)> {
        self.store
            .read()
            .entries()
            .map(|(key, value)| (key, value.clone()))
            .collect()
    }

    fn invoke_impl(&self, args: &[Value], counted: bool) -> Result<Value, Error> {
        let cache_key = key::encode(args)?;

        // Check for a stored result. The guard must drop before the raw
        // computation runs so that recursive re-entries can take the lock.
        {
            let store = self.store.read();
            if store.has(cache_key) {
                let value = store.get(cache_key)?.clone();
                #[cfg(feature = "testing")]
                crate::testing::register_hit();
                return Ok(value);
            }
        }

        // The attempt counts whether or not the computation succeeds.
        if counted {
            self.calls.fetch_add(1, Ordering::SeqCst);
        }

        // Failures are not stored; an identical later call re-attempts.
        let output = (self.func)(Recurse(self), args)?;

        // A conflicting rebind means the computation is non-deterministic.
        self.store.write().set(cache_key, output.clone())?;

        #[cfg(feature = "testing")]
        crate::testing::register_miss();

        Ok(output)
    }
}

impl Debug for Memoized {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memoized")
            .field("calls", &self.call_count())
            .field("cached", &self.cache_len())
            .finish_non_exhaustive()
    }
}

/// Handle through which a memoized function calls itself.
///
/// Re-entering through the handle makes every recursive subproblem a store
/// lookup on the owning wrapper. Re-entries are exempt from call counting.
#[derive(Copy, Clone)]
pub struct Recurse<'a>(&'a Memoized);

impl Recurse<'_> {
    /// Invokes the owning wrapper for a recursive subproblem.
    pub fn call(&self, args: &[Value]) -> Result<Value, Error> {
        self.0.invoke_impl(args, false)
    }
}

impl Debug for Recurse<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad("Recurse(..)")
    }
}
