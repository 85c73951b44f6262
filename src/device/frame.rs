//! Frame type produced by the synthetic device.

use crate::Nanos;

/// A single captured frame with its device timestamp.
///
/// The notifier only ever borrows the bytes; ownership stays with the
/// capture loop that pulled the frame from the device.
#[derive(Clone)]
pub struct SourceFrame {
    /// Raw frame bytes in the device's native layout.
    data: Vec<u8>,
    /// Capture time on the device's monotonic clock.
    timestamp: Nanos,
    /// Monotonic sequence number.
    sequence: u64,
}

impl SourceFrame {
    /// Creates a new frame.
    pub fn new(data: Vec<u8>, timestamp: Nanos, sequence: u64) -> Self {
        Self {
            data,
            timestamp,
            sequence,
        }
    }

    /// Returns the raw frame bytes.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns the capture timestamp in nanoseconds.
    #[inline]
    pub fn timestamp(&self) -> Nanos {
        self.timestamp
    }

    /// Returns the sequence number.
    #[inline]
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Returns the frame size in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the frame holds no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl std::fmt::Debug for SourceFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFrame")
            .field("bytes", &self.data.len())
            .field("timestamp", &self.timestamp)
            .field("sequence", &self.sequence)
            .finish()
    }
}
