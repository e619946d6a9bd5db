//! Memoization with call accounting.
//!
//! Wraps pure functions over dynamically typed [`Value`] arguments, derives a
//! canonical key per argument list, stores the first result per distinct key,
//! and counts how often the underlying computation actually ran. Recursive
//! functions call themselves through [`Recurse`], so every recursive
//! subproblem is a cache lookup rather than a recomputation.
//!
//! ```
//! use memotally::{run, Action, Registry, Value};
//!
//! let mut registry = Registry::new();
//! registry.register_recursive("fib", |fib, args| {
//!     let n = args[0].as_int().unwrap();
//!     if n <= 1 {
//!         return Ok(Value::Int(1));
//!     }
//!     let a = fib.call(&[Value::Int(n - 1)])?;
//!     let b = fib.call(&[Value::Int(n - 2)])?;
//!     Ok(Value::Int(a.as_int().unwrap() + b.as_int().unwrap()))
//! });
//!
//! let observed = run(&registry, "fib", &[
//!     Action::Call(vec![Value::Int(5)]),
//!     Action::GetCallCount,
//! ])?;
//! assert_eq!(observed, [Value::Int(8), Value::Int(1)]);
//! # Ok::<(), memotally::Error>(())
//! ```

mod error;
mod harness;
mod key;
mod memoize;
mod registry;
mod store;
mod value;

#[cfg(feature = "testing")]
pub mod testing;

pub use crate::error::Error;
pub use crate::harness::{run, Action};
pub use crate::key::{encode, CacheKey, MAX_DEPTH};
pub use crate::memoize::{Memoized, Recurse};
pub use crate::registry::Registry;
pub use crate::value::Value;
