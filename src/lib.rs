//! # Marquee
//!
//! A timer-driven banner message rotation engine for terminal UIs.
//!
//! Marquee drains a FIFO queue of short notification messages through a pair
//! of alternating display regions ("banners"): each message fades in, holds
//! for a fixed duration, then yields to the next one while the previous
//! region fades out. When the queue runs dry the engine goes idle until the
//! next message arrives.
//!
//! ## Core Concepts
//!
//! - **FIFO queue**: messages display in exact enqueue order, never reordered
//! - **Alternating slots**: two regions take turns hosting the visible message
//! - **Fire-and-forget timeline**: scheduled cycles always run to completion;
//!   there is no cancellation
//! - **Injectable clock**: the rotation core is deterministic under a virtual
//!   clock, so the state machine is testable without wall-clock timers
//!
//! ## Example
//!
//! ```rust,ignore
//! use marquee::{BannerPair, Rect, Rotator, TerminalBanner};
//!
//! let banners = BannerPair::new(
//!     TerminalBanner::new(Rect::new(0, 0, 40, 5)),
//!     TerminalBanner::new(Rect::new(0, 6, 40, 5)),
//! );
//! let mut rotator = Rotator::new(banners);
//!
//! // First message on an idle rotator starts the loop synchronously.
//! rotator.show_banner_message("deploy finished");
//! rotator.show_banner_message("3 new reviews");
//!
//! // Drive the timeline from your frame loop.
//! rotator.tick();
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod controls;
pub mod fit;
pub mod layout;
pub mod rotate;
pub mod surface;

// Re-exports for convenience
pub use controls::{set_enabled, Toggle};
pub use fit::{fit_text, FitOptions, Fitted, FittedLine};
pub use layout::Rect;
pub use rotate::{
    Clock, Deferred, ManualClock, MonotonicClock, Rotator, RotatorActor, RotatorConfig,
    RotatorHandle, Slot, Timeline,
};
pub use surface::{BannerColor, BannerPair, BannerSurface, PairError, TerminalBanner};
