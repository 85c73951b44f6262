//! Capture and recording configuration.
//!
//! The synthetic device emits NV21 frames, so dimensions must be even
//! for the chroma plane to line up. Rates are validated up front; the
//! notifier additionally rejects non-positive recording rates at
//! enable time.

use crate::notifier::NANOS_PER_SEC;
use crate::Nanos;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for the frame source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureConfig {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Rate at which the device offers frames, before any throttling.
    pub source_fps: u32,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            source_fps: 30,
        }
    }
}

impl CaptureConfig {
    /// Creates a configuration with the given dimensions.
    pub fn with_dimensions(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Validates the configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 || self.width % 2 != 0 || self.height % 2 != 0 {
            return Err(ConfigError::InvalidDimensions);
        }
        if self.source_fps == 0 || self.source_fps > 240 {
            return Err(ConfigError::InvalidSourceRate);
        }
        Ok(())
    }

    /// Size in bytes of one full frame buffer (NV21: 12 bits per pixel).
    pub fn frame_buffer_size(&self) -> usize {
        let pixels = (self.width as usize) * (self.height as usize);
        pixels + pixels / 2
    }

    /// Nanoseconds between two frames at the source rate.
    pub fn frame_interval_ns(&self) -> Nanos {
        NANOS_PER_SEC / Nanos::from(self.source_fps)
    }
}

/// Target video recording rate handed to the notifier.
///
/// Kept signed because the HAL surface is signed; validation rejects
/// anything non-positive before it reaches a division.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordingConfig {
    /// Requested video frames per second.
    pub fps: i32,
}

impl Default for RecordingConfig {
    fn default() -> Self {
        Self { fps: 15 }
    }
}

impl RecordingConfig {
    /// Validates the recording rate.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fps <= 0 {
            return Err(ConfigError::InvalidRecordingRate);
        }
        Ok(())
    }
}

/// Demo run settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Run continuously (true) or offer a fixed number of frames (false).
    pub continuous: bool,
    /// Number of frames to offer if not continuous.
    pub frame_count: u32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            continuous: false,
            frame_count: 120,
        }
    }
}

/// Full configuration file format.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    /// Frame source settings.
    #[serde(default)]
    pub capture: CaptureConfig,
    /// Recording settings.
    #[serde(default)]
    pub recording: RecordingConfig,
    /// Demo run settings.
    #[serde(default)]
    pub run: RunConfig,
}

impl FileConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileReadError(e.to_string()))?;
        let config: FileConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.capture.validate()?;
        config.recording.validate()?;
        Ok(config)
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    /// Zero or odd frame dimensions.
    #[error("invalid frame dimensions (must be non-zero and even)")]
    InvalidDimensions,
    /// Source rate outside the supported range.
    #[error("invalid source frame rate (must be 1-240 fps)")]
    InvalidSourceRate,
    /// Non-positive recording rate.
    #[error("invalid recording frame rate (must be positive)")]
    InvalidRecordingRate,
    /// Configuration file could not be read.
    #[error("failed to read config file: {0}")]
    FileReadError(String),
    /// Configuration file could not be parsed.
    #[error("failed to parse config file: {0}")]
    ParseError(String),
}
