//! # Slider Core
//!
//! State machine for a horizontal card slider. A [`SliderController`] owns the
//! current index, the index bounds derived from measured layout, and the
//! in-flight drag session. It reads geometry from and writes offsets to a
//! [`SliderSurface`], so the logic runs the same against a real page or a
//! recording fake (the `testing` feature).
//!
//! ## Modules
//!
//! - [`controller`]: navigation, gesture handling, debounced recomputes
//! - [`geometry`]: step size, visible window and gap parsing
//! - [`surface`]: the capability trait hosts implement
//! - [`config`]: thresholds and timings loaded from TOML
//!
//! ```
//! use slider_core::{Control, SliderConfig, SliderController, SliderSurface, Transition};
//!
//! struct Strip {
//!     offset: f32,
//! }
//!
//! impl SliderSurface for Strip {
//!     fn viewport_width(&self) -> f32 { 200.0 }
//!     fn track_gap(&self) -> f32 { 0.0 }
//!     fn first_card_width(&self) -> f32 { 100.0 }
//!     fn card_count(&self) -> usize { 6 }
//!     fn set_track_offset(&mut self, px: f32, _: Transition) { self.offset = px; }
//!     fn set_track_transition(&mut self, _: Transition) {}
//!     fn set_control_disabled(&mut self, _: Control, _: bool) {}
//! }
//!
//! // 6 cards of 100px, no gap, 200px viewport: two visible, max index 4
//! let mut slider = SliderController::attach(Strip { offset: 0.0 }, SliderConfig::default());
//! slider.on_gesture_start(200.0);
//! slider.on_gesture_move(140.0);
//! slider.on_gesture_end();
//! assert_eq!(slider.current_index(), 1);
//! assert_eq!(slider.surface().offset, 100.0);
//! ```

pub mod config;
pub mod constants;
pub mod controller;
pub mod debounce;
pub mod error;
pub mod geometry;
pub mod state;
pub mod surface;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use config::{CancelPolicy, SliderConfig};
pub use controller::{Lifecycle, SliderController};
pub use debounce::PendingRecompute;
pub use error::{ConfigError, MissingPart};
pub use geometry::Geometry;
pub use state::{DragSession, GesturePhase, SliderState};
pub use surface::{Control, SliderRoot, SliderSurface, Transition};
