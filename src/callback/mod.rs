//! Client-facing callback surface.
//!
//! The client hands the notifier a group of closures: event
//! notifications, data delivery (untimed and timestamped), and a
//! memory allocator the notifier calls back into for delivery buffers.
//! The notifier holds shared handles only; the client keeps ownership
//! of whatever its closures capture.

mod buffer;
mod handlers;

pub use buffer::{heap_allocator, FrameBuffer, HEAP_POOL};
pub use handlers::{AllocateFn, CameraCallbacks, DataFn, NotifyFn, TimestampedDataFn};
