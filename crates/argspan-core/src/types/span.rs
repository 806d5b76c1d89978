use std::fmt;

use serde::{Deserialize, Serialize};

/// A contiguous, inclusive range of token indices within one sentence.
///
/// Spans have structural equality and a total order (by `start`, then `end`)
/// so they can serve as exact-match aggregation keys. On the wire a span is
/// a two-element array `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "[usize; 2]", from = "[usize; 2]")]
pub struct TokenSpan {
    /// First token index (inclusive).
    pub start: usize,
    /// Last token index (inclusive).
    pub end: usize,
}

impl TokenSpan {
    /// Creates a span over `[start, end]`, both inclusive.
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// Number of tokens covered by this span.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Always `false`: an inclusive span covers at least one token.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl From<TokenSpan> for [usize; 2] {
    fn from(span: TokenSpan) -> Self {
        [span.start, span.end]
    }
}

impl From<[usize; 2]> for TokenSpan {
    fn from([start, end]: [usize; 2]) -> Self {
        Self { start, end }
    }
}

impl fmt::Display for TokenSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}
