use std::fmt;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{info, warn, Level};

use crate::metrics::metrics_recorder;
use crate::types::{AmbiguousMatchError, MatchedPair};


/// An ordered, owned collection supporting predicate-driven one-to-one
/// extraction.
///
/// A `Matcher` owns its backing sequence exclusively and is mutated in
/// place by [`match_with`](Matcher::match_with) and
/// [`find_and_remove_unique`](Matcher::find_and_remove_unique). Removal is
/// stable: the relative order of untouched items never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Matcher<T> {
    items: Vec<T>,
}

impl<T> Matcher<T> {
    /// Construct a matcher from an initial sequence.
    pub fn new(items: impl IntoIterator<Item = T>) -> Self {
        Self {
            items: items.into_iter().collect(),
        }
    }

    /// Current remaining items, in order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Number of remaining items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over the remaining items in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Find the unique item satisfying `predicate`, remove it, and return it.
    ///
    /// Returns `Ok(None)` when no item qualifies. When two or more qualify,
    /// fails with [`AmbiguousMatchError`] carrying the first two in scan
    /// order and leaves the collection untouched.
    ///
    /// This is the single-collection workhorse behind
    /// [`match_with`](Matcher::match_with), exposed because it is a useful
    /// capability on its own.
    pub fn find_and_remove_unique<F>(
        &mut self,
        predicate: F,
    ) -> Result<Option<T>, AmbiguousMatchError<T>>
    where
        F: Fn(&T) -> bool,
        T: Clone + fmt::Debug,
    {
        Ok(self.unique_index(predicate)?.map(|idx| self.items.remove(idx)))
    }

    /// Two-pass candidate scan: collect qualifying indices first, decide
    /// afterwards. No mutation happens here, so a failed scan leaves the
    /// collection exactly as it was.
    fn unique_index<F>(&self, predicate: F) -> Result<Option<usize>, AmbiguousMatchError<T>>
    where
        F: Fn(&T) -> bool,
        T: Clone + fmt::Debug,
    {
        let candidates: Vec<usize> = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| predicate(item))
            .map(|(idx, _)| idx)
            .collect();

        match candidates.as_slice() {
            [] => Ok(None),
            [only] => Ok(Some(*only)),
            [first, second, ..] => Err(AmbiguousMatchError::new(
                self.items[*first].clone(),
                self.items[*second].clone(),
            )),
        }
    }
}

impl<T> Matcher<T> {
    /// Pair this matcher's items one-to-one against `other` under `predicate`.
    ///
    /// Left items are processed in their original order; for each, the
    /// current remainder of `other` is scanned for the unique item `y` with
    /// `predicate(x, y)`. A unique candidate is removed from both sides and
    /// recorded; zero candidates leave `x` in place; two or more abort the
    /// call with [`AmbiguousMatchError`] carrying the first two candidates
    /// in scan order.
    ///
    /// On success the returned pairs are in left processing order, this
    /// matcher retains exactly the left items that had no candidate, and
    /// `other` retains exactly the items never claimed — both in their
    /// original relative order.
    ///
    /// The operation is not transactional: pairs finalized before an
    /// ambiguity failure stay removed from both collections (and are
    /// dropped with the error), while the failing item and everything after
    /// it stay in place. The failing scan itself commits nothing.
    ///
    /// `predicate` must be side-effect free and deterministic for the
    /// duration of the call. Worst case is `O(n * m)` predicate
    /// evaluations.
    pub fn match_with<U, F>(
        &mut self,
        other: &mut Matcher<U>,
        predicate: F,
    ) -> Result<Vec<MatchedPair<T, U>>, AmbiguousMatchError<U>>
    where
        F: Fn(&T, &U) -> bool,
        U: Clone + fmt::Debug,
    {
        let span = tracing::span!(
            Level::INFO,
            "pairmatch.match",
            left_len = self.items.len(),
            right_len = other.items.len(),
        );
        let _guard = span.enter();
        let start = Instant::now();

        let mut pairs = Vec::new();
        let mut kept: Vec<T> = Vec::with_capacity(self.items.len());
        let mut left = std::mem::take(&mut self.items).into_iter();

        while let Some(item) = left.next() {
            match other.find_and_remove_unique(|candidate| predicate(&item, candidate)) {
                Ok(Some(claimed)) => {
                    pairs.push(MatchedPair {
                        left: item,
                        right: claimed,
                    });
                }
                Ok(None) => kept.push(item),
                Err(err) => {
                    // Restore the unprocessed tail so the failing item and
                    // everything after it remain in the left collection.
                    kept.push(item);
                    kept.extend(left);
                    self.items = kept;
                    warn!(error = %err, "match_ambiguous");
                    return Err(err);
                }
            }
        }
        self.items = kept;

        let latency = start.elapsed();
        info!(
            pair_count = pairs.len(),
            remaining_left = self.items.len(),
            remaining_right = other.items.len(),
            elapsed_micros = latency.as_micros() as u64,
            "match_success"
        );
        if let Some(recorder) = metrics_recorder() {
            recorder.record_match(latency, pairs.len(), self.items.len(), other.items.len());
        }

        Ok(pairs)
    }
}

impl<T> Default for Matcher<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> From<Vec<T>> for Matcher<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for Matcher<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<T> IntoIterator for Matcher<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Matcher<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Renders the current contents, e.g. `[12, 14, 16]`. This is the
/// inspection surface for callers that display residues after a match.
impl<T: fmt::Debug> fmt::Display for Matcher<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.items)
    }
}
