//! Symbol matching predicates.
//!
//! A matcher decides whether a chunk read from the input satisfies a
//! transition key. Matchers are attached per state or registered once on
//! the FSM as the default.

use std::fmt;
use std::sync::Arc;

type MatchFn = dyn Fn(&[u8], &[u8]) -> bool + Send + Sync;

/// Pure predicate comparing a transition key against an input chunk.
///
/// # Example
///
/// ```rust
/// use generic_fsm::core::Matcher;
///
/// let exact = Matcher::exact();
/// assert!(exact.check(b"ab", b"ab"));
/// assert!(!exact.check(b"ab", b"a"));
///
/// let caseless = Matcher::new(|key, actual| key.eq_ignore_ascii_case(actual));
/// assert!(caseless.check(b"GO", b"go"));
/// ```
#[derive(Clone)]
pub struct Matcher {
    predicate: Arc<MatchFn>,
}

impl Matcher {
    /// Create a matcher from a predicate over `(key, actual)`.
    ///
    /// The predicate must be deterministic and total over its inputs: the
    /// engine relies on it to make runs reproducible.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&[u8], &[u8]) -> bool + Send + Sync + 'static,
    {
        Matcher {
            predicate: Arc::new(predicate),
        }
    }

    /// Byte-for-byte equality, lengths included.
    pub fn exact() -> Self {
        Self::new(|key, actual| key == actual)
    }

    /// Compare only the first byte of key and chunk.
    ///
    /// Two empty slices match; an empty slice never matches a non-empty one.
    pub fn first_byte() -> Self {
        Self::new(|key, actual| key.first() == actual.first())
    }

    /// Evaluate the predicate.
    pub fn check(&self, key: &[u8], actual: &[u8]) -> bool {
        (self.predicate)(key, actual)
    }
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Matcher(..)")
    }
}
