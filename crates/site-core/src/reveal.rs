//! One-shot scroll reveal bookkeeping.
//!
//! Elements are registered under a small integer id (their index in document
//! order). The first time an element crosses into view it leaves the pending
//! set for good and its reveal is scheduled; later crossings are ignored.

use std::time::Duration;

use fnv::{FnvHashMap, FnvHashSet};
use smallvec::SmallVec;

/// Parse a `data-delay` value in seconds. Anything unusable, including
/// values too large for a `Duration`, means no delay.
pub fn parse_delay(raw: Option<&str>) -> Duration {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|secs| *secs > 0.0)
        .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
        .unwrap_or(Duration::ZERO)
}

/// Delay as `setTimeout` milliseconds, saturating at `i32::MAX`.
pub fn timeout_millis(delay: Duration) -> i32 {
    i32::try_from(delay.as_millis()).unwrap_or(i32::MAX)
}

/// A reveal that became due: show `id` after `delay`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduledReveal {
    pub id: usize,
    pub delay: Duration,
}

#[derive(Debug, Default)]
pub struct RevealTracker {
    pending: FnvHashMap<usize, Duration>,
    visible: FnvHashSet<usize>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start watching `id`. Re-observing an element that was already
    /// revealed has no effect.
    pub fn observe(&mut self, id: usize, delay: Duration) {
        if self.visible.contains(&id) {
            return;
        }
        self.pending.insert(id, delay);
    }

    /// Feed one visibility change. Returns the delay to wait before revealing
    /// when this is the element's first crossing.
    pub fn on_intersection(&mut self, id: usize, is_intersecting: bool) -> Option<Duration> {
        if !is_intersecting {
            return None;
        }
        self.pending.remove(&id)
    }

    /// Feed a batch of visibility changes in delivery order.
    pub fn on_intersections(
        &mut self,
        entries: impl IntoIterator<Item = (usize, bool)>,
    ) -> SmallVec<[ScheduledReveal; 4]> {
        entries
            .into_iter()
            .filter_map(|(id, hit)| {
                self.on_intersection(id, hit)
                    .map(|delay| ScheduledReveal { id, delay })
            })
            .collect()
    }

    /// Record that the reveal for `id` fired. True only the first time.
    pub fn mark_visible(&mut self, id: usize) -> bool {
        self.pending.remove(&id);
        self.visible.insert(id)
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}
