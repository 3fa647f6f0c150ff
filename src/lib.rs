//! # pairmatch
//!
//! ## Purpose
//!
//! `pairmatch` performs strict one-to-one pairing between two ordered
//! collections, driven by a caller-supplied predicate. For each item in the
//! left collection, the right collection is scanned for an item the
//! predicate accepts:
//!
//! - exactly one candidate — the pair is removed from both collections and
//!   recorded;
//! - zero candidates — the left item stays where it is;
//! - two or more candidates — the call fails with
//!   [`AmbiguousMatchError`], because the contract requires an unambiguous
//!   one-to-one correspondence.
//!
//! Left items are processed in their original order and removals take
//! immediate effect on the right side, so "unique" always means unique
//! among the candidates still remaining. The crate makes no attempt to
//! find a maximum or optimal matching; it only enforces that the predicate
//! is selective enough at each step.
//!
//! ## Core Types
//!
//! - [`Matcher`]: ordered, owned collection with the pairing operations
//!   [`match_with`](Matcher::match_with) and
//!   [`find_and_remove_unique`](Matcher::find_and_remove_unique).
//! - [`MatchedPair`]: one `(left, right)` result of a successful match.
//! - [`AmbiguousMatchError`]: the single error kind, carrying the two
//!   conflicting candidates for diagnostics.
//!
//! ## Example Usage
//!
//! ```
//! use pairmatch::Matcher;
//!
//! // Doubles of 1..=10 on the left, the strings "1".."10" on the right.
//! let mut numbers = Matcher::new((1..=10).map(|n| 2 * n));
//! let mut strings: Matcher<String> = (1..=10).map(|n| n.to_string()).collect();
//!
//! let pairs = numbers
//!     .match_with(&mut strings, |num, s| num.to_string() == *s)
//!     .expect("predicate is unambiguous");
//!
//! // Only the even values up to 10 have a string counterpart.
//! assert_eq!(pairs.len(), 5);
//! assert_eq!(pairs[0].left, 2);
//! assert_eq!(pairs[0].right, "2");
//! assert_eq!(numbers.items(), &[12, 14, 16, 18, 20]);
//! assert_eq!(strings.items(), &["1", "3", "5", "7", "9"]);
//! ```
//!
//! Ambiguity fails loudly rather than silently picking a candidate:
//!
//! ```
//! use pairmatch::Matcher;
//!
//! let mut left = Matcher::new([1u32]);
//! let mut right = Matcher::new(["1", "01"]);
//!
//! let err = left
//!     .match_with(&mut right, |n, s| {
//!         n.to_string() == *s || n.to_string() == s.trim_start_matches('0')
//!     })
//!     .expect_err("both candidates qualify");
//! assert_eq!((err.first, err.second), ("1", "01"));
//! ```
//!
//! ## Observability
//!
//! Every [`match_with`](Matcher::match_with) call runs under a `tracing`
//! span and logs its outcome. Install a [`MatchMetrics`] implementation via
//! [`set_match_metrics`] to additionally record per-call latency and
//! outcome counts; this is typically done once during startup so all
//! matchers share the same metrics backend.

pub mod engine;
pub mod metrics;
pub mod types;

pub use crate::engine::Matcher;
pub use crate::metrics::{set_match_metrics, MatchMetrics};
pub use crate::types::{AmbiguousMatchError, MatchedPair};
