use std::cell::Cell;

thread_local! {
    /// Whether the last finished call was served from a store.
    static LAST_WAS_HIT: Cell<bool> = const { Cell::new(false) };
    /// Hits observed on this thread, across all wrappers.
    static HITS: Cell<u64> = const { Cell::new(0) };
    /// Misses observed on this thread, across all wrappers.
    static MISSES: Cell<u64> = const { Cell::new(0) };
}

/// Whether the last finished call was a hit.
///
/// After a recursive call the flag reflects the outermost invocation, since
/// that one finishes last.
pub fn last_was_hit() -> bool {
    LAST_WAS_HIT.with(|cell| cell.get())
}

/// The number of hits observed on this thread.
pub fn hits() -> u64 {
    HITS.with(|cell| cell.get())
}

/// The number of misses observed on this thread.
///
/// Recursive re-entries register individually, so a single external call can
/// contribute several hits and misses.
pub fn misses() -> u64 {
    MISSES.with(|cell| cell.get())
}

/// Marks the last call as a hit.
pub(crate) fn register_hit() {
    LAST_WAS_HIT.with(|cell| cell.set(true));
    HITS.with(|cell| cell.set(cell.get() + 1));
}

/// Marks the last call as a miss.
pub(crate) fn register_miss() {
    LAST_WAS_HIT.with(|cell| cell.set(false));
    MISSES.with(|cell| cell.set(cell.get() + 1));
}
