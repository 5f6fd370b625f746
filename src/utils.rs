//! Identifier generation and small collection/string helpers
//!
//! Grab-bag utilities shared across view components. These keep the
//! best-effort posture of the rest of the crate: malformed input produces
//! garbage output rather than an error, and the one hard failure
//! ([`flatten`] on an empty outer vector) is a documented panic callers
//! guard against.

use std::cell::Cell;

/// Monotonic id source for view components needing unique keys.
///
/// An explicitly owned counter rather than process-global state: each
/// generator starts at 1 and is strictly increasing for its own lifetime.
/// `Cell`-based and `!Sync`, for single-threaded view code.
#[derive(Debug, Default)]
pub struct IdGenerator {
    counter: Cell<u64>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next id: 1, 2, 3, …
    pub fn next_id(&self) -> u64 {
        let next = self.counter.get() + 1;
        self.counter.set(next);
        next
    }
}

/// One-level concatenation of `groups`.
///
/// # Panics
///
/// Panics when `groups` itself is empty; there is no identity element and
/// callers must guard.
pub fn flatten<T>(groups: Vec<Vec<T>>) -> Vec<T> {
    groups
        .into_iter()
        .reduce(|mut acc, group| {
            acc.extend(group);
            acc
        })
        .expect("flatten called with an empty outer sequence")
}

/// Strips scheme, path, port, a leading `www.`, and query string from a
/// URL-like string, yielding a bare hostname.
///
/// Best-effort string splitting, not a URL parser: malformed input yields
/// unspecified (but never erroring) results.
pub fn hostname_from_url(url: &str) -> String {
    // With a scheme present the hostname sits after the double slash.
    let hostname = if url.contains("//") {
        url.split('/').nth(2).unwrap_or("")
    } else {
        url.split('/').next().unwrap_or("")
    };
    let hostname = hostname.split(':').next().unwrap_or("");
    let hostname = hostname.replacen("www.", "", 1);
    hostname
        .split('?')
        .next()
        .unwrap_or("")
        .to_string()
}
