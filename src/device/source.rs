//! Device-side frame production.
//!
//! The notifier only needs one thing from the device that offered a
//! frame: the size of a full frame buffer, so it can size the client
//! allocation. [`FrameSource`] is that boundary. [`SyntheticCamera`]
//! is a deterministic implementation for tests and the demo binary;
//! it generates patterned bytes, not a sensor simulation.

use super::{CaptureConfig, ConfigError, SourceFrame};
use thiserror::Error;

/// Errors that can occur while pulling frames from the device.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The camera has not been opened.
    #[error("camera not opened")]
    NotOpened,
    /// The capture configuration was rejected.
    #[error("invalid capture configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Answers the notifier's device queries during frame delivery.
///
/// Implemented by whatever produces frames; the notifier never learns
/// how a frame came to be.
pub trait FrameSource {
    /// Size in bytes of one full frame buffer from this device.
    fn frame_buffer_size(&self) -> usize;
}

/// Deterministic frame generator standing in for an emulated sensor.
///
/// Frames carry a fixed pattern mixed with the sequence number, and
/// timestamps advance by the configured source interval starting at
/// zero. Two cameras opened with the same configuration produce
/// identical streams.
#[derive(Debug, Default)]
pub struct SyntheticCamera {
    config: Option<CaptureConfig>,
    sequence: u64,
}

impl SyntheticCamera {
    /// Creates a closed camera.
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the camera with the given configuration.
    pub fn open(&mut self, config: &CaptureConfig) -> Result<(), SourceError> {
        config.validate()?;
        self.config = Some(config.clone());
        self.sequence = 0;
        tracing::info!(
            width = config.width,
            height = config.height,
            source_fps = config.source_fps,
            "synthetic camera opened"
        );
        Ok(())
    }

    /// Produces the next frame and its capture timestamp.
    pub fn capture(&mut self) -> Result<SourceFrame, SourceError> {
        let config = self.config.as_ref().ok_or(SourceError::NotOpened)?;

        // Patterned bytes, varied per frame by the sequence number.
        let size = config.frame_buffer_size();
        let data: Vec<u8> = (0..size)
            .map(|i| ((i as u64 ^ self.sequence).wrapping_mul(31) & 0xFF) as u8)
            .collect();

        let timestamp = self.sequence as i64 * config.frame_interval_ns();
        let frame = SourceFrame::new(data, timestamp, self.sequence);
        self.sequence += 1;
        Ok(frame)
    }

    /// Checks if the camera is currently open.
    pub fn is_open(&self) -> bool {
        self.config.is_some()
    }

    /// Closes the camera.
    pub fn close(&mut self) {
        self.config = None;
        tracing::info!("synthetic camera closed");
    }
}

impl FrameSource for SyntheticCamera {
    fn frame_buffer_size(&self) -> usize {
        self.config
            .as_ref()
            .map(CaptureConfig::frame_buffer_size)
            .unwrap_or(0)
    }
}
