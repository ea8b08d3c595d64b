//! Capability interface between the controller and its host.
//!
//! The controller never touches markup directly. It reads layout through
//! [`SliderSurface`] and writes the two side effects it owns: the track offset
//! and the disabled state of the previous/next controls.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::MissingPart;

/// One of the two navigation controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Control {
    /// Step back one card.
    Previous,
    /// Step forward one card.
    Next,
}

impl Control {
    /// Both controls, previous first.
    pub const ALL: [Control; 2] = [Control::Previous, Control::Next];
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Control::Previous => write!(f, "previous"),
            Control::Next => write!(f, "next"),
        }
    }
}

/// How an offset write should reach the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Animate toward the new offset over the given duration.
    Animated(Duration),
    /// Jump to the new offset (used while a gesture is in progress).
    Instant,
}

impl Transition {
    /// Whether the write animates.
    pub fn is_animated(&self) -> bool {
        matches!(self, Transition::Animated(_))
    }
}

/// Layout reads and style writes for one slider root.
///
/// Reads are re-queried on every recompute and never cached by the
/// controller. Implementations may return any float; the controller coerces
/// non-finite and negative values to 0.
pub trait SliderSurface {
    /// Content width of the clipping viewport.
    fn viewport_width(&self) -> f32;

    /// Inter-card gap of the track.
    fn track_gap(&self) -> f32;

    /// Rendered width of the first card, taken as representative.
    fn first_card_width(&self) -> f32;

    /// Current number of cards in the track.
    fn card_count(&self) -> usize;

    /// Translate the track left by `offset_px`.
    fn set_track_offset(&mut self, offset_px: f32, transition: Transition);

    /// Change how later offset writes are shown without moving the track.
    fn set_track_transition(&mut self, transition: Transition);

    /// Enable or disable a navigation control.
    fn set_control_disabled(&mut self, control: Control, disabled: bool);
}

/// A root container that can be resolved into a surface.
///
/// Resolution fails when the root lacks the viewport, track or either
/// control. Cards are optional.
pub trait SliderRoot {
    /// Surface produced on success.
    type Surface: SliderSurface;

    /// Locate the required parts, or name the first one missing.
    fn resolve(self) -> Result<Self::Surface, MissingPart>;
}
