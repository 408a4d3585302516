//! Slot: index of one of the two alternating banner regions.

/// Identifies which of the two banner regions a cycle is acting on.
///
/// Exactly two values exist; [`Slot::flip`] moves to the other one. The
/// rotation loop flips the active slot once per cycle whether or not a
/// message is shown.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Slot(u8);

impl Slot {
    /// The first region (index 0).
    pub const ZERO: Self = Self(0);
    /// The second region (index 1).
    pub const ONE: Self = Self(1);

    /// The other slot.
    #[inline]
    #[must_use]
    pub const fn flip(self) -> Self {
        Self(1 - self.0)
    }

    /// Index into an ordered pair of regions.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}
