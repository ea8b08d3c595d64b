//! SliderController: owns one slider's state and translates input into
//! index and offset changes on its surface.
//!
//! All methods are synchronous and infallible. Inputs that make no sense in
//! the current state (a move with no gesture, next at the last card, anything
//! after `dispose`) are silently ignored.

use std::time::Instant;

use crate::config::{CancelPolicy, SliderConfig};
use crate::debounce::PendingRecompute;
use crate::geometry::{Geometry, sanitize_px};
use crate::state::{DragSession, SliderState};
use crate::surface::{Control, SliderRoot, SliderSurface, Transition};

/// Whether the controller is listening to input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Listening to clicks, gestures and resizes.
    Active,
    /// The root had no cards at initialization. Both controls stay disabled
    /// and input is never engaged.
    Inert,
    /// Released by `dispose`. Input is ignored.
    Disposed,
}

/// Drives one slider through its [`SliderSurface`].
#[derive(Debug)]
pub struct SliderController<S> {
    surface: S,
    state: SliderState,
    config: SliderConfig,
    pending: PendingRecompute,
    lifecycle: Lifecycle,
    visible_count: usize,
    /// Last offset written to the surface.
    rendered_offset: f32,
    /// Bumped on every geometry recompute.
    generation: u64,
}

impl<S: SliderSurface> SliderController<S> {
    /// Resolve a root and start controlling it.
    ///
    /// Returns `None` without touching anything when the root is missing a
    /// viewport, track or control.
    pub fn initialize<R>(root: R, config: SliderConfig) -> Option<Self>
    where
        R: SliderRoot<Surface = S>,
    {
        match root.resolve() {
            Ok(surface) => Some(Self::attach(surface, config)),
            Err(missing) => {
                log::debug!("Skipping slider root: {}", missing);
                None
            }
        }
    }

    /// Start controlling an already resolved surface.
    pub fn attach(surface: S, config: SliderConfig) -> Self {
        let mut controller = Self {
            surface,
            state: SliderState::new(),
            config,
            pending: PendingRecompute::new(),
            lifecycle: Lifecycle::Active,
            visible_count: Geometry::EMPTY.visible_count,
            rendered_offset: 0.0,
            generation: 0,
        };

        if controller.surface.card_count() == 0 {
            log::debug!("Slider has no cards; controls disabled");
            controller.lifecycle = Lifecycle::Inert;
            controller.surface.set_control_disabled(Control::Previous, true);
            controller.surface.set_control_disabled(Control::Next, true);
            return controller;
        }

        controller.recalc_geometry();
        controller
    }

    /// Re-measure cards and viewport, recompute step and bounds, clamp the
    /// index and re-render.
    pub fn recalc_geometry(&mut self) {
        if self.lifecycle != Lifecycle::Active {
            return;
        }

        let card_count = self.surface.card_count();
        let geometry = if card_count == 0 {
            self.state.clear();
            Geometry::EMPTY
        } else {
            let geometry = Geometry::measure(
                card_count,
                self.surface.first_card_width(),
                self.surface.track_gap(),
                self.surface.viewport_width(),
            );
            self.state.apply_geometry(geometry);
            geometry
        };

        self.visible_count = geometry.visible_count;
        self.generation += 1;

        log::debug!(
            "Slider geometry recomputed: cards={}, step={}, visible={}, max_index={}, current_index={}",
            card_count,
            geometry.card_step,
            geometry.visible_count,
            geometry.max_index,
            self.state.current_index
        );

        self.render();
    }

    /// Snap the track to the settled offset and refresh control states.
    pub fn render(&mut self) {
        let offset = self.state.settled_offset();
        self.write_offset(offset, Transition::Animated(self.config.transition()));
        self.surface
            .set_control_disabled(Control::Previous, !self.state.can_go_previous());
        self.surface
            .set_control_disabled(Control::Next, !self.state.can_go_next());
    }

    /// Step back one card unless already at the first.
    pub fn go_to_previous(&mut self) {
        if self.lifecycle != Lifecycle::Active || !self.state.can_go_previous() {
            return;
        }
        self.state.current_index -= 1;
        self.render();
    }

    /// Step forward one card unless already at `max_index`.
    pub fn go_to_next(&mut self) {
        if self.lifecycle != Lifecycle::Active || !self.state.can_go_next() {
            return;
        }
        self.state.current_index += 1;
        self.render();
    }

    /// Begin a drag at `pointer_x`. A start while already dragging replaces
    /// the session.
    pub fn on_gesture_start(&mut self, pointer_x: f32) {
        if self.lifecycle != Lifecycle::Active {
            return;
        }
        let base = self.state.settled_offset();
        self.state.drag = Some(DragSession::new(pointer_x, base));
        // Track stays where it is until the first move; only the easing goes.
        self.surface.set_track_transition(Transition::Instant);
    }

    /// Follow the pointer without changing the index.
    pub fn on_gesture_move(&mut self, pointer_x: f32) {
        let Some(drag) = self.state.drag.as_mut() else {
            return;
        };
        drag.current_x = pointer_x;
        let candidate = drag.base_offset_px + drag.delta();
        let offset = self.state.clamp_offset(candidate);

        log::trace!("Slider drag offset {}", offset);
        self.write_offset(offset, Transition::Instant);
    }

    /// Release: move at most one card depending on the final displacement,
    /// then snap to the settled offset.
    pub fn on_gesture_end(&mut self) {
        let Some(drag) = self.state.drag.take() else {
            return;
        };
        self.settle(drag.delta());
    }

    /// Abort the gesture. Under [`CancelPolicy::SnapBack`] the index never
    /// changes; under [`CancelPolicy::ReuseLastDelta`] this behaves exactly
    /// like [`Self::on_gesture_end`].
    pub fn on_gesture_cancel(&mut self) {
        let Some(drag) = self.state.drag.take() else {
            return;
        };
        let delta = match self.config.cancel_policy {
            CancelPolicy::SnapBack => 0.0,
            CancelPolicy::ReuseLastDelta => drag.delta(),
        };
        self.settle(delta);
    }

    /// Note a viewport resize. The recompute runs on the first [`Self::poll`]
    /// after the debounce period has passed with no further resizes.
    pub fn on_resize(&mut self, now: Instant) {
        if self.lifecycle != Lifecycle::Active {
            return;
        }
        self.pending.schedule(now, self.config.resize_debounce());
    }

    /// Run the debounced recompute if it is due. Returns true if it ran.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.lifecycle != Lifecycle::Active {
            return false;
        }
        if self.pending.fire_if_due(now) {
            self.recalc_geometry();
            true
        } else {
            false
        }
    }

    /// When the pending recompute is due, if one is scheduled.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.deadline()
    }

    /// Release the controller: cancel the pending recompute and any gesture.
    pub fn dispose(&mut self) {
        self.pending.cancel();
        self.state.drag = None;
        self.lifecycle = Lifecycle::Disposed;
    }

    /// Hand the surface back to the host.
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Index, bounds and gesture state.
    pub fn state(&self) -> &SliderState {
        &self.state
    }

    /// Active configuration.
    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// Current lifecycle.
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Borrow the surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutably borrow the surface.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Index of the first card in view.
    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    /// Largest index the slider can reach.
    pub fn max_index(&self) -> usize {
        self.state.max_index
    }

    /// Card width plus gap, in pixels.
    pub fn card_step(&self) -> f32 {
        self.state.card_step
    }

    /// Whole cards that fit in the viewport.
    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    /// Offset most recently written to the track.
    pub fn rendered_offset(&self) -> f32 {
        self.rendered_offset
    }

    /// Number of geometry recomputes performed so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn settle(&mut self, delta: f32) {
        let threshold = self.config.drag_threshold_px;
        if delta > threshold && self.state.can_go_next() {
            self.state.current_index += 1;
        } else if delta < -threshold && self.state.can_go_previous() {
            self.state.current_index -= 1;
        }
        self.render();
    }

    fn write_offset(&mut self, offset: f32, transition: Transition) {
        let offset = sanitize_px(offset);
        self.rendered_offset = offset;
        self.surface.set_track_offset(offset, transition);
    }
}
