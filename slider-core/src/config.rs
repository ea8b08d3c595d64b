//! Per-slider tuning loaded from TOML.
//!
//! Every key is optional; missing keys take the defaults from
//! [`crate::constants`].

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{animation, gesture, layout};
use crate::error::{ConfigError, Result};

/// What a cancelled gesture (e.g. `touchcancel`) does to the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CancelPolicy {
    /// Treat cancellation as zero displacement: always snap back.
    #[default]
    SnapBack,
    /// End the gesture with the last recorded pointer position, exactly as a
    /// normal release would.
    ReuseLastDelta,
}

/// Tuning shared by every slider on a page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SliderConfig {
    /// Displacement (px) a gesture must exceed to move one card.
    pub drag_threshold_px: f32,
    /// Quiet period after the last resize before geometry is recomputed.
    pub resize_debounce_ms: u64,
    /// Duration of the animated snap to a settled offset.
    pub transition_ms: u64,
    /// What a cancelled gesture does to the index.
    pub cancel_policy: CancelPolicy,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            drag_threshold_px: gesture::DRAG_THRESHOLD_PX,
            resize_debounce_ms: layout::RESIZE_DEBOUNCE_MS,
            transition_ms: animation::TRANSITION_MS,
            cancel_policy: CancelPolicy::default(),
        }
    }
}

impl SliderConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: SliderConfig = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&raw)?;
        log::debug!("Loaded slider config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Reject thresholds and timings the controller cannot work with.
    pub fn validate(&self) -> Result<()> {
        if !self.drag_threshold_px.is_finite() || self.drag_threshold_px < 0.0 {
            return Err(ConfigError::InvalidDragThreshold(self.drag_threshold_px));
        }
        if self.resize_debounce_ms == 0 {
            return Err(ConfigError::ZeroDebounce);
        }
        Ok(())
    }

    /// Quiet period as a [`Duration`].
    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }

    /// Snap animation length as a [`Duration`].
    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }
}
