//! Adapter from platform input events to controller calls.
//!
//! Mouse movement, mouse release and resizes are observed at window level and
//! reach every slider on the page; a controller that is not dragging simply
//! ignores the move. Clicks, mouse presses and touch events belong to one
//! slider.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use slider_core::{Control, SliderController, SliderSurface};

use crate::dom::RootId;

/// Platform input as the host observes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum InputEvent {
    /// Click on a navigation control.
    Click {
        /// Control that was clicked.
        control: Control,
    },
    /// Mouse press inside the viewport.
    MouseDown {
        /// Client x of the pointer.
        x: f32,
    },
    /// Pointer movement anywhere in the window.
    MouseMove {
        /// Client x of the pointer.
        x: f32,
    },
    /// Mouse release anywhere in the window.
    MouseUp,
    /// Touch begins inside the viewport.
    TouchStart {
        /// Client x of each active touch point.
        touches: Vec<f32>,
    },
    /// Touch points moved.
    TouchMove {
        /// Client x of each active touch point.
        touches: Vec<f32>,
    },
    /// Last touch lifted.
    TouchEnd,
    /// The platform aborted the touch.
    TouchCancel,
    /// Window resized.
    Resize,
}

/// Where an event is observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Broadcast to every slider.
    Window,
    /// Delivered to the slider it was observed on.
    Slider,
}

impl InputEvent {
    /// Where the event is observed.
    pub fn scope(&self) -> Scope {
        match self {
            InputEvent::MouseMove { .. } | InputEvent::MouseUp | InputEvent::Resize => {
                Scope::Window
            }
            _ => Scope::Slider,
        }
    }

    /// Mouse presses suppress native text selection and image dragging.
    /// Touch listeners are passive.
    pub fn prevents_default(&self) -> bool {
        matches!(self, InputEvent::MouseDown { .. })
    }

    /// DOM event name, for logs.
    pub fn name(&self) -> &'static str {
        match self {
            InputEvent::Click { .. } => "click",
            InputEvent::MouseDown { .. } => "mousedown",
            InputEvent::MouseMove { .. } => "mousemove",
            InputEvent::MouseUp => "mouseup",
            InputEvent::TouchStart { .. } => "touchstart",
            InputEvent::TouchMove { .. } => "touchmove",
            InputEvent::TouchEnd => "touchend",
            InputEvent::TouchCancel => "touchcancel",
            InputEvent::Resize => "resize",
        }
    }
}

/// An input event together with the slider it was observed on.
#[derive(Debug, Clone, PartialEq)]
pub struct HostEvent {
    /// `None` for window-level events.
    pub root: Option<RootId>,
    /// The event itself.
    pub event: InputEvent,
}

impl HostEvent {
    /// Window-level event.
    pub fn window(event: InputEvent) -> Self {
        Self { root: None, event }
    }

    /// Event observed on one slider root.
    pub fn on(root: RootId, event: InputEvent) -> Self {
        Self {
            root: Some(root),
            event,
        }
    }
}

/// Translate one event into the matching controller call.
pub fn apply<S: SliderSurface>(
    controller: &mut SliderController<S>,
    event: &InputEvent,
    now: Instant,
) {
    match event {
        InputEvent::Click {
            control: Control::Previous,
        } => controller.go_to_previous(),
        InputEvent::Click {
            control: Control::Next,
        } => controller.go_to_next(),
        InputEvent::MouseDown { x } => controller.on_gesture_start(*x),
        InputEvent::MouseMove { x } => controller.on_gesture_move(*x),
        InputEvent::MouseUp | InputEvent::TouchEnd => controller.on_gesture_end(),
        InputEvent::TouchStart { touches } => {
            if let Some(&x) = touches.first() {
                controller.on_gesture_start(x);
            }
        }
        InputEvent::TouchMove { touches } => {
            if let Some(&x) = touches.first() {
                controller.on_gesture_move(x);
            }
        }
        InputEvent::TouchCancel => controller.on_gesture_cancel(),
        InputEvent::Resize => controller.on_resize(now),
    }
}
