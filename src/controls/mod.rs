//! Enable/disable helpers for UI controls.
//!
//! Batch property setters consumed by surrounding UI glue, not by the
//! rotation core. No state machine here: callers pass a real collection, and
//! a lone control is wrapped by the caller (`&mut [control]`) instead of the
//! helper guessing at argument shapes.

/// A control with a "disabled" property.
pub trait Toggle {
    /// Set the control's disabled property.
    fn set_disabled(&mut self, disabled: bool);
}

/// Set every control's disabled property to `!enabled`.
pub fn set_enabled<T: Toggle>(controls: &mut [T], enabled: bool) {
    for control in controls {
        control.set_disabled(!enabled);
    }
}
