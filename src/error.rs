/// The errors produced by this crate.
///
/// Only `UnknownFunction` and `Computation` are expected during normal use.
/// The remaining variants signal contract violations inside the harness or
/// its callers and are assertion-like.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The requested name is not present in the registry.
    #[error("unknown function: {0}")]
    UnknownFunction(String),

    /// An argument nests too deeply to canonicalize into a stable key.
    #[error("argument cannot be canonicalized into a stable key")]
    UnencodableArgument,

    /// A key was bound a second time with a different value.
    ///
    /// A key is computed at most once, so this indicates a non-deterministic
    /// registered function.
    #[error("cache key was rebound with a conflicting value")]
    DuplicateKeyConflict,

    /// A value was requested for a key that has no entry.
    #[error("no cache entry for key")]
    KeyNotFound,

    /// A registered function reported a failure of its own.
    ///
    /// Carried through `invoke` and `run` unchanged; the failed computation
    /// is never stored.
    #[error("computation failed: {0}")]
    Computation(String),
}
