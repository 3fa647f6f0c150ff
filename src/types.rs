use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A pair produced by a successful match.
///
/// Both elements are owned by the pair once it is created; neither is
/// present in its source [`Matcher`](crate::Matcher) any longer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedPair<L, R> {
    /// The item taken from the left-hand collection.
    pub left: L,
    /// The item taken from the right-hand collection.
    pub right: R,
}

impl<L, R> MatchedPair<L, R> {
    /// Split the pair back into its two elements.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> From<(L, R)> for MatchedPair<L, R> {
    fn from((left, right): (L, R)) -> Self {
        Self { left, right }
    }
}

/// More than one candidate satisfied the predicate for a single item.
///
/// Strict one-to-one pairing requires the predicate to single out at most
/// one candidate at the moment an item is evaluated. When two or more
/// remaining candidates qualify, the operation fails with this error,
/// carrying the first two qualifying candidates in scan order. The scanned
/// collection itself is left untouched; the conflicting candidates are
/// cloned into the error.
///
/// This signals a contract violation in the predicate, not a transient
/// condition. There is nothing to retry; the fix is a more selective
/// predicate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("multiple items matched the predicate: {first:?}, {second:?}")]
pub struct AmbiguousMatchError<T: std::fmt::Debug> {
    /// The first qualifying candidate, in scan order.
    pub first: T,
    /// The second qualifying candidate, in scan order.
    pub second: T,
}

impl<T: std::fmt::Debug> AmbiguousMatchError<T> {
    pub fn new(first: T, second: T) -> Self {
        Self { first, second }
    }
}
