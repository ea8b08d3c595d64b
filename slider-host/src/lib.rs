//! # Slider Host
//!
//! Page-side wiring for [`slider_core`]. The host discovers slider roots in a
//! [`Document`], resolves each into a [`DomSurface`], routes input events to
//! the matching controller and drives debounced recomputes from a tokio
//! event loop.
//!
//! The document is an in-memory stand-in for a rendered page: nodes carry
//! classes, a measured width, inline styles and a disabled flag. Fixtures in
//! TOML describe pages and timed event scripts, which the `slider-sim`
//! binary replays.

pub mod css;
pub mod document;
pub mod dom;
pub mod fixture;
pub mod input;
pub mod registry;
pub mod runtime;
pub mod sim;

pub use document::{Document, NodeId, NodeSpec, SharedDocument};
pub use dom::{DomRoot, DomSurface, RootId};
pub use fixture::{FixtureError, PageFixture, Script, ScriptedEvent};
pub use input::{HostEvent, InputEvent, Scope};
pub use registry::{DispatchOutcome, DomSlider, SliderRegistry, SliderSnapshot};
pub use runtime::{RunSummary, run};
pub use sim::{Replay, replay};
