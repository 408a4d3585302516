//! Rotator: the banner rotation state machine.
//!
//! One controller owns the whole rotation state: the FIFO queue of pending
//! messages, the active slot, the running flag, and the timeline of deferred
//! events. Producers call [`Rotator::show_banner_message`]; a driver calls
//! [`Rotator::tick`] to fire whatever the clock says is due.
//!
//! # Lifecycle
//!
//! ```text
//!            show_banner_message            empty queue
//!   Idle ──────────────────────▶ Running ──────────────▶ Idle
//!            (first cycle runs          (cycle observes
//!             synchronously)             nothing to pop)
//! ```
//!
//! Each cycle: fade out the active region, flip the slot, and — if a message
//! is waiting — pop it, show it on the new slot, and schedule both the
//! settle-delayed text fit and the next cycle. A cycle that finds the queue
//! empty schedules nothing, which is the only way the loop stops.

use super::slot::Slot;
use super::timeline::{Clock, Deferred, MonotonicClock, Timeline};
use crate::fit::FitOptions;
use crate::surface::{BannerPair, BannerSurface};
use std::collections::VecDeque;
use std::time::Duration;

/// Timing and fitting policy for a rotator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotatorConfig {
    /// Time each message stays on screen before the next cycle starts.
    ///
    /// Every message gets the same display time regardless of length; long
    /// messages are handled by the multi-line, auto-shrink text fit instead.
    pub display_duration: Duration,
    /// Pause between fade-in and text fitting, so the region has non-zero,
    /// stable layout dimensions before measurement.
    pub settle_delay: Duration,
    /// Fit configuration applied after the settle delay.
    pub fit: FitOptions,
}

impl Default for RotatorConfig {
    fn default() -> Self {
        Self {
            display_duration: Duration::from_millis(2500),
            settle_delay: Duration::from_millis(30),
            fit: FitOptions::default(),
        }
    }
}

/// The banner rotation controller.
///
/// Single-threaded by construction: all mutation flows through
/// [`show_banner_message`](Self::show_banner_message) and
/// [`tick`](Self::tick), so the queue, slot, and running flag never race.
/// Wrap it in a [`RotatorActor`](super::RotatorActor) to drive it from a
/// dedicated thread.
#[derive(Debug)]
pub struct Rotator<S, C = MonotonicClock> {
    banners: BannerPair<S>,
    pending: VecDeque<String>,
    active: Slot,
    running: bool,
    timeline: Timeline,
    config: RotatorConfig,
    clock: C,
}

impl<S: BannerSurface> Rotator<S> {
    /// Create a rotator with default timing over a monotonic clock.
    pub fn new(banners: BannerPair<S>) -> Self {
        Self::with_config(banners, RotatorConfig::default())
    }

    /// Create a rotator with custom timing over a monotonic clock.
    pub fn with_config(banners: BannerPair<S>, config: RotatorConfig) -> Self {
        Self::with_clock(banners, config, MonotonicClock::default())
    }
}

impl<S: BannerSurface, C: Clock> Rotator<S, C> {
    /// Create a rotator over an explicit clock.
    ///
    /// Pass a [`ManualClock`](super::ManualClock) to drive the state machine
    /// deterministically.
    pub fn with_clock(banners: BannerPair<S>, config: RotatorConfig, clock: C) -> Self {
        Self {
            banners,
            pending: VecDeque::new(),
            active: Slot::default(),
            running: false,
            timeline: Timeline::new(),
            config,
            clock,
        }
    }

    /// Enqueue a message for display.
    ///
    /// Messages display in exact enqueue order. Any string is accepted,
    /// including the empty one. If the rotator is idle, the first cycle runs
    /// synchronously within this call; if it is already running, the in-flight
    /// loop picks the message up on a later cycle and no second loop starts.
    pub fn show_banner_message(&mut self, message: impl Into<String>) {
        // An idle rotator can only ever see an empty queue; anything else
        // would mean a cycle went missing.
        debug_assert!(
            self.running || self.pending.is_empty(),
            "idle rotator with non-empty queue"
        );
        self.pending.push_back(message.into());
        if !self.running {
            self.run_cycle();
        }
    }

    /// Fire every deferred event that is due at the current clock reading.
    ///
    /// Drivers call this after sleeping until
    /// [`time_to_next_deadline`](Self::time_to_next_deadline), or on every
    /// frame. Events fire in due order; a cycle fired here may schedule
    /// further events, which are picked up in the same call if already due.
    pub fn tick(&mut self) {
        let now = self.clock.now();
        while let Some(event) = self.timeline.pop_due(now) {
            match event {
                Deferred::Cycle => self.run_cycle(),
                Deferred::Refit(slot) => self.banners.get_mut(slot).refit(&self.config.fit),
            }
        }
    }

    /// One rotation cycle.
    fn run_cycle(&mut self) {
        let now = self.clock.now();

        // Non-blocking fade-out of whatever was showing; the rest of the
        // cycle does not wait for the transition.
        self.banners.get_mut(self.active).fade_out();
        self.active = self.active.flip();

        if let Some(message) = self.pending.pop_front() {
            self.running = true;
            let banner = self.banners.get_mut(self.active);
            banner.set_text(&message);
            banner.fade_in();
            self.timeline
                .schedule(now + self.config.settle_delay, Deferred::Refit(self.active));
            self.timeline
                .schedule(now + self.config.display_duration, Deferred::Cycle);
        } else {
            // Normal termination: nothing to show, nothing rescheduled.
            self.running = false;
        }
    }

    /// Whether a display cycle is scheduled or in flight.
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Whether the rotator has fully drained: not running and no deferred
    /// events left to fire.
    pub fn is_idle(&self) -> bool {
        !self.running && self.timeline.is_empty()
    }

    /// The slot currently in the show/shown phase.
    pub const fn active_slot(&self) -> Slot {
        self.active
    }

    /// Number of messages waiting to be displayed.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Time until the next deferred event is due, if any.
    ///
    /// Zero when the event is already overdue.
    pub fn time_to_next_deadline(&self) -> Option<Duration> {
        self.timeline
            .next_due()
            .map(|due| due.saturating_sub(self.clock.now()))
    }

    /// The rotator's timing and fit policy.
    pub const fn config(&self) -> &RotatorConfig {
        &self.config
    }

    /// The banner pair being rotated.
    pub const fn banners(&self) -> &BannerPair<S> {
        &self.banners
    }

    /// The banner pair being rotated, mutably (e.g. for drawing).
    pub const fn banners_mut(&mut self) -> &mut BannerPair<S> {
        &mut self.banners
    }
}
