//! Slider constants
//!
//! Defaults for gesture thresholds, animation timing and the resize debounce.
//! `SliderConfig` starts from these values; tuning should happen here so every
//! slider on a page picks up the same feel.

/// Drag/swipe gesture defaults.
pub mod gesture {
    /// Horizontal distance (px) a gesture must exceed to advance one card.
    pub const DRAG_THRESHOLD_PX: f32 = 50.0;
}

/// Snap animation defaults.
pub mod animation {
    /// Duration (ms) of the settled-offset transition.
    pub const TRANSITION_MS: u64 = 350;
}

/// Layout recompute cadence.
pub mod layout {
    /// Quiet period (ms) after the last resize before geometry is recomputed.
    pub const RESIZE_DEBOUNCE_MS: u64 = 120;
    /// Lower bound for the step used as a divisor when counting visible cards.
    pub const MIN_STEP_DIVISOR: f32 = 1.0;
    /// Visible window never reports fewer cards than this.
    pub const MIN_VISIBLE_CARDS: usize = 1;
}
