//! Timeline: fire-and-forget deferred events over an injectable clock.
//!
//! The rotation loop suspends itself in exactly two places: the short settle
//! delay before a text fit, and the fixed inter-message duration before the
//! next cycle. Both are modeled as [`Deferred`] events pushed onto a
//! [`Timeline`] and popped by whichever driver owns the rotator (actor
//! thread, frame loop, or a test with a [`ManualClock`]).
//!
//! There is deliberately no `cancel` operation: once scheduled, an event
//! always fires. Drain-to-completion is a guarantee of the rotation design,
//! not an accidental omission.

use super::slot::Slot;
use std::cell::Cell;
use std::collections::BinaryHeap;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// A readable monotonic time source.
///
/// Time is expressed as a [`Duration`] since an arbitrary per-clock epoch,
/// which keeps virtual clocks trivial to build.
pub trait Clock {
    /// Current time since the clock's epoch.
    fn now(&self) -> Duration;
}

/// Production clock backed by [`Instant`].
#[derive(Debug, Clone)]
pub struct MonotonicClock {
    start: Instant,
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.start.elapsed()
    }
}

/// A manually advanced clock for deterministic drivers and tests.
///
/// Clones share the same underlying time, so a driver can hold one clone
/// while the rotator reads another.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    /// Create a clock at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward.
    pub fn advance(&self, delta: Duration) {
        self.now.set(self.now.get() + delta);
    }

    /// Set the clock to an absolute time.
    pub fn set(&self, now: Duration) {
        self.now.set(now);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// A deferred rotation event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deferred {
    /// Run the next rotation cycle.
    Cycle,
    /// Fit the text of the banner at the given slot (settle delay elapsed).
    Refit(Slot),
}

/// Heap entry. Ordered by due time, ties broken by schedule order.
#[derive(Debug, Clone, Copy)]
struct Entry {
    due: Duration,
    seq: u64,
    event: Deferred,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // BinaryHeap is a max-heap; invert so the earliest entry surfaces.
        (other.due, other.seq).cmp(&(self.due, self.seq))
    }
}

/// Pending deferred events, ordered by due time.
///
/// Scheduling is append-only: the timeline intentionally exposes no way to
/// remove or cancel an entry.
#[derive(Debug, Default)]
pub struct Timeline {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
}

impl Timeline {
    /// Create an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `event` to fire at `due` (clock time, not a delay).
    pub fn schedule(&mut self, due: Duration, event: Deferred) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { due, seq, event });
    }

    /// Pop the earliest event whose due time has arrived.
    pub fn pop_due(&mut self, now: Duration) -> Option<Deferred> {
        if self.heap.peek().is_some_and(|entry| entry.due <= now) {
            self.heap.pop().map(|entry| entry.event)
        } else {
            None
        }
    }

    /// Due time of the earliest pending event.
    pub fn next_due(&self) -> Option<Duration> {
        self.heap.peek().map(|entry| entry.due)
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Check if no events are pending.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
