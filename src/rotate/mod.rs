//! The rotation core: queue, slots, timing, and the self-driving loop.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐  show_banner_message   ┌─────────────────────────┐
//! │  Producer(s) │ ─────────────────────▶ │         Rotator         │
//! └──────────────┘                        │  pending: FIFO queue    │
//!                                         │  active:  Slot (0|1)    │
//! ┌──────────────┐     Deferred events    │  running: bool          │
//! │   Timeline   │ ◀───────────────────▶  │                         │
//! │ (no cancel)  │   schedule / pop_due   └───────────┬─────────────┘
//! └──────────────┘                                    │ fade / text / refit
//!                                                     ▼
//!                                         ┌─────────────────────────┐
//!                                         │ BannerPair<S> (slots)   │
//!                                         └─────────────────────────┘
//! ```
//!
//! The rotator never sleeps on its own. A driver — the [`RotatorActor`]
//! thread, a frame loop, or a test holding a [`ManualClock`] — asks for
//! [`Rotator::time_to_next_deadline`], waits, and calls [`Rotator::tick`].

mod actor;
mod rotator;
mod slot;
mod timeline;

pub use actor::{RotatorActor, RotatorHandle};
pub use rotator::{Rotator, RotatorConfig};
pub use slot::Slot;
pub use timeline::{Clock, Deferred, ManualClock, MonotonicClock, Timeline};
