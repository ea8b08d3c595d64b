//! SliderState: index, bounds and the in-flight drag session

use crate::geometry::Geometry;

/// An active drag or swipe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Pointer x where the gesture began.
    pub start_x: f32,
    /// Latest pointer x.
    pub current_x: f32,
    /// Settled offset at gesture start.
    pub base_offset_px: f32,
}

impl DragSession {
    /// Session starting and currently resting at `pointer_x`.
    pub fn new(pointer_x: f32, base_offset_px: f32) -> Self {
        Self {
            start_x: pointer_x,
            current_x: pointer_x,
            base_offset_px,
        }
    }

    /// Positive when dragging toward the next card.
    #[inline]
    pub fn delta(&self) -> f32 {
        self.start_x - self.current_x
    }
}

/// Gesture phase derived from whether a session is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    /// No pointer is down.
    Idle,
    /// A drag session is in flight.
    Dragging,
}

/// Index, bounds and gesture for one slider.
#[derive(Debug, Clone, Default)]
pub struct SliderState {
    /// First card of the current window. Always `<= max_index`.
    pub current_index: usize,
    /// Largest legal `current_index`.
    pub max_index: usize,
    /// Card width + gap. Zero when there are no cards.
    pub card_step: f32,
    /// In-flight gesture, if any.
    pub drag: Option<DragSession>,
}

impl SliderState {
    /// First card, no bounds, idle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a gesture is in flight.
    pub fn phase(&self) -> GesturePhase {
        if self.drag.is_some() {
            GesturePhase::Dragging
        } else {
            GesturePhase::Idle
        }
    }

    /// Shorthand for a `Dragging` phase.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Adopt freshly measured geometry, clamping the index down if the
    /// window grew or cards were removed.
    pub fn apply_geometry(&mut self, geometry: Geometry) {
        self.card_step = geometry.card_step;
        self.max_index = geometry.max_index;
        if self.current_index > self.max_index {
            self.current_index = self.max_index;
        }
    }

    /// Reset to the empty-slider state.
    pub fn clear(&mut self) {
        self.current_index = 0;
        self.max_index = 0;
        self.card_step = 0.0;
    }

    /// Offset the track rests at for `current_index`.
    #[inline]
    pub fn settled_offset(&self) -> f32 {
        self.current_index as f32 * self.card_step
    }

    /// Offset of the last reachable index.
    #[inline]
    pub fn max_offset(&self) -> f32 {
        self.max_index as f32 * self.card_step
    }

    /// Clamp a candidate offset into `[0, max_offset]`.
    pub fn clamp_offset(&self, offset: f32) -> f32 {
        if offset.is_nan() {
            return 0.0;
        }
        offset.clamp(0.0, self.max_offset())
    }

    /// Whether a previous card exists.
    pub fn can_go_previous(&self) -> bool {
        self.current_index > 0
    }

    /// Whether a next card exists.
    pub fn can_go_next(&self) -> bool {
        self.current_index < self.max_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_geometry_clamps_index() {
        let mut state = SliderState {
            current_index: 4,
            max_index: 4,
            card_step: 100.0,
            drag: None,
        };
        state.apply_geometry(Geometry {
            card_step: 110.0,
            visible_count: 4,
            max_index: 2,
        });
        assert_eq!(state.current_index, 2);
        assert_eq!(state.settled_offset(), 220.0);
    }

    #[test]
    fn clamp_offset_stays_in_bounds() {
        let state = SliderState {
            current_index: 0,
            max_index: 4,
            card_step: 100.0,
            drag: None,
        };
        assert_eq!(state.clamp_offset(-10.0), 0.0);
        assert_eq!(state.clamp_offset(450.0), 400.0);
        assert_eq!(state.clamp_offset(f32::NAN), 0.0);
    }

    #[test]
    fn drag_delta_sign() {
        let mut session = DragSession::new(200.0, 0.0);
        session.current_x = 140.0;
        assert_eq!(session.delta(), 60.0);
        session.current_x = 260.0;
        assert_eq!(session.delta(), -60.0);
    }
}
