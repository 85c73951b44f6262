//! Device-side boundary of the notifier.
//!
//! The real emulated camera device lives elsewhere; this module holds
//! the slice of it the notifier interacts with: a frame-buffer-size
//! query, a deterministic test camera, and the capture configuration.

mod config;
mod frame;
mod source;

pub use config::{CaptureConfig, ConfigError, FileConfig, RecordingConfig, RunConfig};
pub use frame::SourceFrame;
pub use source::{FrameSource, SourceError, SyntheticCamera};
