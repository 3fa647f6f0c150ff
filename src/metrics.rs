// Metrics hooks for the pairing engine.
//
// Callers install a global `MatchMetrics` implementation via
// [`set_match_metrics`]; every subsequent [`Matcher::match_with`] call
// reports its wall-clock latency and outcome counts. This keeps
// instrumentation decoupled from any specific metrics backend.
//
// [`Matcher::match_with`]: crate::Matcher::match_with
use std::sync::{Arc, RwLock};
use std::time::Duration;

use once_cell::sync::OnceCell;

/// Metrics observer for pairing operations.
pub trait MatchMetrics: Send + Sync {
    /// Record the outcome of a completed `match_with` call.
    ///
    /// `latency` is the wall-clock duration of the call, `pair_count` is the
    /// number of pairs returned, and `remaining_left` / `remaining_right`
    /// are the sizes of the two residues after all removals.
    fn record_match(
        &self,
        latency: Duration,
        pair_count: usize,
        remaining_left: usize,
        remaining_right: usize,
    );
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn MatchMetrics>>> {
    static METRICS: OnceCell<RwLock<Option<Arc<dyn MatchMetrics>>>> = OnceCell::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

pub(crate) fn metrics_recorder() -> Option<Arc<dyn MatchMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

/// Install or clear the global match metrics recorder.
///
/// Typically called once during startup so every [`Matcher`](crate::Matcher)
/// in the process shares the same metrics backend.
pub fn set_match_metrics(recorder: Option<Arc<dyn MatchMetrics>>) {
    let lock = metrics_lock();
    let mut guard = lock.write().expect("match metrics lock poisoned");
    *guard = recorder;
}
