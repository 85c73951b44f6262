//! Emulated Camera Callback Dispatch Library
//!
//! A callback dispatch layer for an emulated camera device. Routes
//! device events and captured frames to client-registered callbacks,
//! honoring the client's enabled message kinds and capping video frame
//! delivery at a requested recording rate.
//!
//! # Architecture
//!
//! The system follows an explicit dispatch flow:
//!
//! ```text
//! device frames → gating → client callbacks
//!                   ↓
//!     enabled kinds · recording · throttle
//! ```
//!
//! # Design Principles
//!
//! - **Passive dispatch**: The notifier runs on its callers' threads and
//!   owns no thread of its own
//! - **Atomic control**: All notifier state sits behind one lock; client
//!   handlers are invoked outside it
//! - **Best-effort delivery**: Allocation failures skip a single frame
//!   and never stall the capture source
//! - **Client-owned memory**: Frames are copied into buffers obtained
//!   from the client's allocator
//!
//! # Example
//!
//! ```
//! use emucam_notify::{CallbackNotifier, CameraCallbacks, FrameSource, MessageFlags};
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//!
//! struct Device(usize);
//!
//! impl FrameSource for Device {
//!     fn frame_buffer_size(&self) -> usize {
//!         self.0
//!     }
//! }
//!
//! // Register handlers and switch on the video path at 30 fps
//! let notifier = CallbackNotifier::new();
//! let delivered = Arc::new(AtomicUsize::new(0));
//! let seen = delivered.clone();
//!
//! notifier.set_callbacks(
//!     CameraCallbacks::new()
//!         .with_timestamped_data(move |_ts, _kind, _buffer, _index| {
//!             seen.fetch_add(1, Ordering::SeqCst);
//!         })
//!         .with_heap_allocator(),
//! );
//! notifier.enable_message(MessageFlags::VIDEO_FRAME);
//! notifier.enable_video_recording(30).unwrap();
//!
//! // A 100 fps device against the 30 fps cap: roughly a third lands
//! let device = Device(16);
//! let frame = vec![0u8; 16];
//! for i in 0..10i64 {
//!     notifier.on_next_frame_available(&frame, i * 10_000_000, &device);
//! }
//! assert_eq!(delivered.load(Ordering::SeqCst), 3);
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod callback;
pub mod device;
pub mod message;
pub mod notifier;

// Re-export commonly used types at crate root
pub use callback::{
    heap_allocator, AllocateFn, CameraCallbacks, DataFn, FrameBuffer, NotifyFn,
    TimestampedDataFn, HEAP_POOL,
};
pub use device::{
    CaptureConfig, ConfigError, FileConfig, FrameSource, RecordingConfig, RunConfig, SourceError,
    SourceFrame, SyntheticCamera,
};
pub use message::MessageFlags;
pub use notifier::{CallbackNotifier, FrameThrottle, NotifierError, NANOS_PER_SEC};

/// Timestamp and duration unit used throughout the crate: nanoseconds,
/// signed to match device clock conventions.
pub type Nanos = i64;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
