//! Client-owned delivery buffers.
//!
//! Frame data always reaches the client by copy: the notifier asks the
//! client's allocator for a buffer, fills it, and hands it over. No
//! device-side memory is ever loaned out.

use super::handlers::AllocateFn;
use std::sync::Arc;

/// Pool id passed to allocators when no shared pool is involved and the
/// client should allocate from its heap.
pub const HEAP_POOL: i32 = -1;

/// An owned byte buffer for frame delivery.
///
/// Produced by the client's allocator callback, filled by the notifier,
/// then passed to the data callback. Ownership travels with it; the
/// notifier keeps no reference after delivery.
#[derive(Clone)]
pub struct FrameBuffer {
    data: Vec<u8>,
}

impl FrameBuffer {
    /// Creates a zero-filled buffer of `size` bytes.
    pub fn zeroed(size: usize) -> Self {
        Self {
            data: vec![0u8; size],
        }
    }

    /// Wraps an existing byte vector.
    pub fn from_vec(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Returns the buffer contents.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns the buffer contents mutably.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Returns the buffer size in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the buffer holds no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Consumes the buffer, returning the underlying bytes.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }
}

impl std::fmt::Debug for FrameBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameBuffer")
            .field("bytes", &self.data.len())
            .finish()
    }
}

/// Builds an allocator that serves requests from the plain heap.
///
/// Buffers come back zero-filled with room for `size * count` bytes.
/// Returns `None` (an allocation failure) if the total overflows.
pub fn heap_allocator() -> AllocateFn {
    Arc::new(|_pool, size, count| {
        let total = size.checked_mul(count)?;
        Some(FrameBuffer::zeroed(total))
    })
}
