//! Client callback handles.
//!
//! The HAL registers four independent handlers as one group. Each is a
//! shared closure; whatever state the client needs on invocation is
//! captured by the closure itself, so there is no separate opaque
//! context pointer to thread through.

use super::buffer::FrameBuffer;
use crate::message::MessageFlags;
use crate::Nanos;
use std::sync::Arc;

/// Event notification handler: `(kind, ext1, ext2)`.
///
/// Carries two extension words whose meaning depends on the kind
/// (for [`MessageFlags::ERROR`], `ext1` is the device error code).
pub type NotifyFn = Arc<dyn Fn(MessageFlags, i32, i32) + Send + Sync>;

/// Untimed frame-data handler: `(kind, buffer, index)`.
///
/// Receives ownership of the filled buffer.
pub type DataFn = Arc<dyn Fn(MessageFlags, FrameBuffer, usize) + Send + Sync>;

/// Timestamped frame-data handler: `(timestamp, kind, buffer, index)`.
///
/// The video-recording path delivers through this handler; the
/// timestamp is the device capture time in nanoseconds.
pub type TimestampedDataFn = Arc<dyn Fn(Nanos, MessageFlags, FrameBuffer, usize) + Send + Sync>;

/// Client memory allocator: `(pool, size, count)`.
///
/// `pool` identifies a shared buffer pool, or [`super::HEAP_POOL`] for
/// plain heap allocation. Returning `None` is an allocation failure;
/// the affected delivery is skipped.
pub type AllocateFn = Arc<dyn Fn(i32, usize, usize) -> Option<FrameBuffer> + Send + Sync>;

/// The full set of client callbacks, registered as one group.
///
/// Every handler is optional. An unset handler simply disables the
/// dispatch paths that would use it; nothing is validated at
/// registration time.
#[derive(Clone, Default)]
pub struct CameraCallbacks {
    /// Event notifications (shutter, focus, error, ...).
    pub notify: Option<NotifyFn>,
    /// Untimed data delivery (preview frames).
    pub data: Option<DataFn>,
    /// Timestamped data delivery (video frames while recording).
    pub timestamped_data: Option<TimestampedDataFn>,
    /// Buffer allocation requests back into the client.
    pub allocate: Option<AllocateFn>,
}

impl CameraCallbacks {
    /// Creates an empty group with no handlers set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the event notification handler.
    pub fn with_notify<F>(mut self, f: F) -> Self
    where
        F: Fn(MessageFlags, i32, i32) + Send + Sync + 'static,
    {
        self.notify = Some(Arc::new(f));
        self
    }

    /// Sets the untimed data handler.
    pub fn with_data<F>(mut self, f: F) -> Self
    where
        F: Fn(MessageFlags, FrameBuffer, usize) + Send + Sync + 'static,
    {
        self.data = Some(Arc::new(f));
        self
    }

    /// Sets the timestamped data handler.
    pub fn with_timestamped_data<F>(mut self, f: F) -> Self
    where
        F: Fn(Nanos, MessageFlags, FrameBuffer, usize) + Send + Sync + 'static,
    {
        self.timestamped_data = Some(Arc::new(f));
        self
    }

    /// Sets the memory allocator handler.
    pub fn with_allocator<F>(mut self, f: F) -> Self
    where
        F: Fn(i32, usize, usize) -> Option<FrameBuffer> + Send + Sync + 'static,
    {
        self.allocate = Some(Arc::new(f));
        self
    }

    /// Uses the built-in zeroed heap allocator for buffer requests.
    pub fn with_heap_allocator(mut self) -> Self {
        self.allocate = Some(super::heap_allocator());
        self
    }

    /// Returns true if no handler is set.
    pub fn is_empty(&self) -> bool {
        self.notify.is_none()
            && self.data.is_none()
            && self.timestamped_data.is_none()
            && self.allocate.is_none()
    }
}

impl std::fmt::Debug for CameraCallbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CameraCallbacks")
            .field("notify", &self.notify.is_some())
            .field("data", &self.data.is_some())
            .field("timestamped_data", &self.timestamped_data.is_some())
            .field("allocate", &self.allocate.is_some())
            .finish()
    }
}
