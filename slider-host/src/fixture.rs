//! Page and event-script fixtures loaded from TOML.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::document::{Document, NodeSpec};
use crate::input::InputEvent;

/// Failure to load a page or script fixture.
#[derive(Error, Debug)]
pub enum FixtureError {
    /// The file could not be read.
    #[error("Failed to read fixture {path}: {source}")]
    Io {
        /// Fixture that was requested.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid fixture.
    #[error("Failed to parse fixture {path}: {source}")]
    Parse {
        /// Fixture that was requested.
        path: PathBuf,
        /// TOML error with location.
        #[source]
        source: toml::de::Error,
    },
}

/// A page: top-level nodes in document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageFixture {
    /// Top-level nodes in document order.
    #[serde(default, rename = "node")]
    pub nodes: Vec<NodeSpec>,
}

impl PageFixture {
    /// Read a page fixture from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        load_toml(path.as_ref())
    }

    /// Build a fresh document from the fixture.
    pub fn document(&self) -> Document {
        Document::from_specs(&self.nodes)
    }
}

/// One timed step of a replay script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptedEvent {
    /// Milliseconds since the start of the replay.
    pub at_ms: u64,
    /// Ordinal of the targeted slider root in document order. Window-level
    /// events ignore it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slider: Option<usize>,
    /// Set the viewport width before the event is delivered: on the targeted
    /// slider, or on every slider when `slider` is absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewport_width: Option<f32>,
    /// The event itself.
    #[serde(flatten)]
    pub input: InputEvent,
}

impl ScriptedEvent {
    /// Window-level event at `at_ms`.
    pub fn at(at_ms: u64, input: InputEvent) -> Self {
        Self {
            at_ms,
            slider: None,
            viewport_width: None,
            input,
        }
    }

    /// Target the slider with this ordinal.
    pub fn on_slider(mut self, ordinal: usize) -> Self {
        self.slider = Some(ordinal);
        self
    }

    /// Resize viewports before delivery.
    pub fn with_viewport_width(mut self, width: f32) -> Self {
        self.viewport_width = Some(width);
        self
    }
}

/// Timed events to replay against a page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Script {
    /// Events in script order.
    #[serde(default, rename = "event")]
    pub events: Vec<ScriptedEvent>,
}

impl Script {
    /// Read a script from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        load_toml(path.as_ref())
    }

    /// Events ordered by time; ties keep script order.
    pub fn ordered(&self) -> Vec<&ScriptedEvent> {
        let mut events: Vec<&ScriptedEvent> = self.events.iter().collect();
        events.sort_by_key(|event| event.at_ms);
        events
    }
}

fn load_toml<T: DeserializeOwned>(path: &Path) -> Result<T, FixtureError> {
    let raw = std::fs::read_to_string(path).map_err(|source| FixtureError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&raw).map_err(|source| FixtureError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::classes;
    use slider_core::Control;

    const PAGE: &str = r#"
[[node]]
class = "articles-slider"

[[node.children]]
class = "articles-slider__slider"
width = 640.0

[[node.children.children]]
class = "articles-slider__track"
style = { column-gap = "16px" }

[[node.children.children.children]]
class = "articles-slider__card"
width = 200.0
repeat = 5

[[node.children]]
class = "articles-slider__arrow--prev"

[[node.children]]
class = "articles-slider__arrow--next"
"#;

    #[test]
    fn page_fixture_builds_document() {
        let page: PageFixture = toml::from_str(PAGE).expect("page parses");
        let document = page.document();
        let root = document.query_all(classes::ROOT)[0];
        let track = document.query_within(root, classes::TRACK).expect("track");
        assert_eq!(document.query_all_within(track, classes::CARD).len(), 5);
        assert_eq!(document.style(track, "column-gap"), Some("16px"));
    }

    #[test]
    fn script_orders_by_time() {
        let script: Script = toml::from_str(
            r#"
[[event]]
at_ms = 300
type = "resize"
viewport_width = 900.0

[[event]]
at_ms = 0
slider = 0
type = "click"
control = "next"
"#,
        )
        .expect("script parses");

        let ordered = script.ordered();
        assert_eq!(ordered[0].input, InputEvent::Click { control: Control::Next });
        assert_eq!(ordered[0].slider, Some(0));
        assert_eq!(ordered[1].input, InputEvent::Resize);
        assert_eq!(ordered[1].viewport_width, Some(900.0));
    }

    #[test]
    fn load_reports_parse_errors_with_path() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("page.toml");
        std::fs::write(&path, "[[node]]\nclass = 3\n").expect("write fixture");

        match PageFixture::load(&path) {
            Err(FixtureError::Parse { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected parse error, got {other:?}"),
        }
    }
}
