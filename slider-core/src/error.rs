//! Errors for markup resolution and configuration loading.

use std::path::PathBuf;

use thiserror::Error;

/// A required element the slider root does not contain.
///
/// This is a markup precondition, not a runtime failure: initialization logs
/// it and leaves the root alone.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingPart {
    /// No clipping viewport.
    #[error("slider root has no viewport element")]
    Viewport,

    /// No track inside the root.
    #[error("slider root has no track element")]
    Track,

    /// No previous control.
    #[error("slider root has no previous control")]
    PreviousControl,

    /// No next control.
    #[error("slider root has no next control")]
    NextControl,
}

/// Failure to load or validate a [`crate::SliderConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("Failed to read config {path}: {source}")]
    Io {
        /// File that was requested.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid config TOML.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Threshold is negative or not finite.
    #[error("drag_threshold_px must be a finite, non-negative number (got {0})")]
    InvalidDragThreshold(f32),

    /// A zero debounce would recompute on every resize event.
    #[error("resize_debounce_ms must be greater than zero")]
    ZeroDebounce,
}

/// Result alias for configuration loading.
pub type Result<T> = std::result::Result<T, ConfigError>;
