//! Display surfaces: the banner regions the rotation loop drives.
//!
//! The rotation core never talks to a concrete UI toolkit. It drives a
//! [`BannerPair`] of [`BannerSurface`] implementations: fade transitions are
//! "begin and return" calls, and text fitting happens behind [`BannerSurface::refit`].
//! [`TerminalBanner`] is the crossterm-backed reference implementation.

mod terminal;

pub use terminal::{BannerColor, TerminalBanner};

use crate::fit::FitOptions;
use crate::rotate::Slot;

/// One banner display region with a nested text sub-region.
///
/// Fade calls begin an asynchronous visual transition and return immediately;
/// they must not block the rotation cycle. A surface is assumed valid for the
/// life of the rotator — there is no error path here by design.
pub trait BannerSurface {
    /// Replace the text sub-region's content.
    fn set_text(&mut self, text: &str);

    /// Current text content.
    fn text(&self) -> &str;

    /// Begin fading the region in.
    fn fade_in(&mut self);

    /// Begin fading the region out.
    fn fade_out(&mut self);

    /// Fit the current text into the text sub-region.
    ///
    /// Called after the settle delay, once the region has stable layout
    /// dimensions. When [`FitOptions::re_process`] is unset, implementations
    /// may keep a previously computed fit.
    fn refit(&mut self, options: &FitOptions);
}

/// An ordered pair of banner surfaces, indexed by [`Slot`].
///
/// This is the "lookup returns exactly two regions" integration point: the
/// rotation loop alternates between index 0 and index 1.
#[derive(Debug)]
pub struct BannerPair<S> {
    slots: [S; 2],
}

impl<S: BannerSurface> BannerPair<S> {
    /// Create a pair from its two regions, in slot order.
    pub fn new(first: S, second: S) -> Self {
        Self {
            slots: [first, second],
        }
    }

    /// Build a pair from a lookup result.
    ///
    /// # Errors
    ///
    /// Returns [`PairError`] unless the lookup produced exactly two regions.
    /// Anything else is an integration defect worth failing loudly at
    /// construction time.
    pub fn from_lookup(surfaces: Vec<S>) -> Result<Self, PairError> {
        let slots: [S; 2] = surfaces.try_into().map_err(|surfaces: Vec<S>| PairError {
            found: surfaces.len(),
        })?;
        Ok(Self { slots })
    }

    /// Get the surface at `slot`.
    pub const fn get(&self, slot: Slot) -> &S {
        &self.slots[slot.index()]
    }

    /// Get the surface at `slot` mutably.
    pub const fn get_mut(&mut self, slot: Slot) -> &mut S {
        &mut self.slots[slot.index()]
    }

    /// Both surfaces in slot order.
    pub const fn surfaces(&self) -> &[S; 2] {
        &self.slots
    }

    /// Both surfaces in slot order, mutably.
    pub const fn surfaces_mut(&mut self) -> &mut [S; 2] {
        &mut self.slots
    }
}

/// A banner lookup did not produce exactly two regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairError {
    /// How many regions the lookup produced.
    pub found: usize,
}

impl std::fmt::Display for PairError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "banner lookup produced {} regions, expected 2", self.found)
    }
}

impl std::error::Error for PairError {}
