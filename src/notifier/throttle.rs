//! Video frame-rate throttling.
//!
//! Recording targets a client-requested frame rate, while the device
//! offers frames at its own pace. The throttle enforces a minimum gap
//! between delivered frames; anything offered sooner is dropped, not
//! queued.

use crate::Nanos;

/// Nanoseconds in one second.
pub const NANOS_PER_SEC: Nanos = 1_000_000_000;

/// Minimum inter-frame interval gate.
///
/// `accept` advances the last-accepted mark only when it returns true,
/// so rejected frames leave the schedule untouched. A freshly armed
/// throttle accepts the first frame it sees regardless of timestamp.
#[derive(Debug, Clone, Default)]
pub struct FrameThrottle {
    min_interval: Nanos,
    last_accepted: Option<Nanos>,
}

impl FrameThrottle {
    /// Creates a disarmed throttle (zero interval, no frame seen).
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the throttle with a minimum interval, forgetting any
    /// previously accepted frame.
    pub fn arm(&mut self, min_interval: Nanos) {
        self.min_interval = min_interval;
        self.last_accepted = None;
    }

    /// Returns to the disarmed zero state.
    pub fn reset(&mut self) {
        self.min_interval = 0;
        self.last_accepted = None;
    }

    /// Decides whether a frame at `timestamp` may be delivered.
    ///
    /// Returns true and records the timestamp iff no frame has been
    /// accepted since arming, or at least the minimum interval has
    /// elapsed since the last accepted frame. Otherwise returns false
    /// and leaves all state unchanged.
    pub fn accept(&mut self, timestamp: Nanos) -> bool {
        match self.last_accepted {
            Some(last) if timestamp.saturating_sub(last) < self.min_interval => false,
            _ => {
                self.last_accepted = Some(timestamp);
                true
            }
        }
    }

    /// Returns the configured minimum interval in nanoseconds.
    pub fn min_interval(&self) -> Nanos {
        self.min_interval
    }

    /// Returns the timestamp of the last accepted frame, if any.
    pub fn last_accepted(&self) -> Option<Nanos> {
        self.last_accepted
    }
}

/// Minimum inter-frame interval for a target rate.
///
/// Callers must reject `fps <= 0` before calling.
pub(crate) fn interval_for_fps(fps: i32) -> Nanos {
    NANOS_PER_SEC / Nanos::from(fps)
}
