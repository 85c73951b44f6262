//! The callback notifier.

use super::throttle::{interval_for_fps, FrameThrottle};
use crate::callback::{AllocateFn, CameraCallbacks, FrameBuffer, HEAP_POOL};
use crate::device::FrameSource;
use crate::message::MessageFlags;
use crate::Nanos;
use parking_lot::Mutex;
use thiserror::Error;

/// Errors reported by notifier control operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotifierError {
    /// Video recording was requested with a non-positive frame rate.
    #[error("invalid video recording frame rate: {fps} fps")]
    InvalidFrameRate {
        /// The rejected rate.
        fps: i32,
    },
    /// Metadata-in-buffers delivery is never supported; clients get
    /// raw frame data only.
    #[error("metadata-in-buffers mode is not supported")]
    MetadataUnsupported,
}

/// Mutable notifier state, guarded as one unit.
#[derive(Default)]
struct NotifierState {
    callbacks: CameraCallbacks,
    enabled: MessageFlags,
    recording: bool,
    throttle: FrameThrottle,
}

/// Dispatches camera events and frame data to client callbacks.
///
/// Single point of truth for the registered callbacks and the enabled
/// message kinds, and for deciding when the next video frame is due.
/// The component is passive: it runs on whatever thread calls it,
/// typically a device capture thread for frame delivery and a control
/// thread for everything else.
///
/// All state sits behind one mutex, so each call is atomic; there is
/// no ordering guarantee between calls. Client handlers are invoked
/// after the lock is released, so a slow handler cannot stall control
/// calls, and handlers may call back into the notifier.
pub struct CallbackNotifier {
    state: Mutex<NotifierState>,
}

impl CallbackNotifier {
    /// Creates a notifier with nothing registered and nothing enabled.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(NotifierState::default()),
        }
    }

    /// Replaces all client callbacks as one group.
    ///
    /// Unset handlers disable their dispatch paths; the handles are
    /// not validated.
    pub fn set_callbacks(&self, callbacks: CameraCallbacks) {
        tracing::debug!(?callbacks, "client callbacks registered");
        self.state.lock().callbacks = callbacks;
    }

    /// Adds `flags` to the set of enabled message kinds.
    pub fn enable_message(&self, flags: MessageFlags) {
        let mut state = self.state.lock();
        state.enabled.insert(flags);
        tracing::debug!(
            requested = %flags,
            enabled = %state.enabled,
            "camera messages enabled"
        );
    }

    /// Removes `flags` from the set of enabled message kinds.
    pub fn disable_message(&self, flags: MessageFlags) {
        let mut state = self.state.lock();
        state.enabled.remove(flags);
        tracing::debug!(
            requested = %flags,
            enabled = %state.enabled,
            "camera messages disabled"
        );
    }

    /// Returns true if any kind in `flags` is currently enabled.
    pub fn is_message_enabled(&self, flags: MessageFlags) -> bool {
        self.state.lock().enabled.intersects(flags)
    }

    /// Returns the currently enabled message kinds.
    pub fn enabled_messages(&self) -> MessageFlags {
        self.state.lock().enabled
    }

    /// Starts video recording at the given target frame rate.
    ///
    /// Frames will be delivered through the timestamped data handler
    /// no faster than `fps`, with excess frames dropped. Rejects
    /// non-positive rates; the recording state is untouched on error.
    pub fn enable_video_recording(&self, fps: i32) -> Result<(), NotifierError> {
        if fps <= 0 {
            return Err(NotifierError::InvalidFrameRate { fps });
        }
        let min_interval = interval_for_fps(fps);

        let mut state = self.state.lock();
        state.recording = true;
        state.throttle.arm(min_interval);
        tracing::debug!(fps, min_interval_ns = min_interval, "video recording enabled");
        Ok(())
    }

    /// Stops video recording and clears the throttle schedule.
    pub fn disable_video_recording(&self) {
        let mut state = self.state.lock();
        state.recording = false;
        state.throttle.reset();
        tracing::debug!("video recording disabled");
    }

    /// Returns true if video recording is currently enabled.
    pub fn is_video_recording_enabled(&self) -> bool {
        self.state.lock().recording
    }

    /// Accepts a delivered frame buffer back from the client.
    ///
    /// Delivery copies into client-owned memory, so there is no
    /// device-side buffer to recycle; the buffer is simply dropped.
    pub fn release_recording_frame(&self, frame: FrameBuffer) {
        drop(frame);
    }

    /// Requests metadata-wrapped buffer delivery.
    ///
    /// Always refused: this notifier only ever delivers raw frame
    /// data.
    pub fn store_metadata_in_buffers(&self, enable: bool) -> Result<(), NotifierError> {
        tracing::debug!(enable, "metadata buffer mode requested");
        Err(NotifierError::MetadataUnsupported)
    }

    /// Resets callbacks, enabled messages, recording flag and throttle
    /// to the freshly constructed state.
    ///
    /// Safe to call repeatedly and with nothing registered; intended
    /// for session teardown.
    pub fn cleanup(&self) {
        let mut state = self.state.lock();
        *state = NotifierState::default();
        tracing::debug!("callback notifier state cleared");
    }

    /// Offers the next available device frame for delivery.
    ///
    /// The video path fires iff [`MessageFlags::VIDEO_FRAME`] is
    /// enabled, a timestamped data handler is registered, recording is
    /// enabled, and the throttle accepts `timestamp` (checked last, so
    /// the schedule only advances when every other gate passes). The
    /// frame is then copied into a buffer requested from the client
    /// allocator and handed to the handler with a zero sub-index.
    ///
    /// When [`MessageFlags::PREVIEW_FRAME`] is enabled and an untimed
    /// data handler is registered, the frame is also copied out through
    /// that handler, unthrottled.
    ///
    /// Delivery is best effort. Allocation failures and undersized
    /// frames are logged and skipped; the throttle schedule is not
    /// rolled back for a skipped frame, and there is no error return.
    pub fn on_next_frame_available(
        &self,
        frame: &[u8],
        timestamp: Nanos,
        source: &dyn FrameSource,
    ) {
        let buffer_size = source.frame_buffer_size();

        // Gate decisions happen under the lock; handlers run after it
        // is released.
        let (video_cb, preview_cb, allocate) = {
            let mut state = self.state.lock();

            let video_due = state.enabled.contains(MessageFlags::VIDEO_FRAME)
                && state.callbacks.timestamped_data.is_some()
                && state.recording
                && state.throttle.accept(timestamp);
            let video_cb = if video_due {
                state.callbacks.timestamped_data.clone()
            } else {
                None
            };

            let preview_cb = if state.enabled.contains(MessageFlags::PREVIEW_FRAME) {
                state.callbacks.data.clone()
            } else {
                None
            };

            (video_cb, preview_cb, state.callbacks.allocate.clone())
        };

        if let Some(cb) = video_cb {
            if let Some(buffer) = copy_into_client_buffer(
                allocate.as_ref(),
                frame,
                buffer_size,
                MessageFlags::VIDEO_FRAME,
            ) {
                tracing::trace!(timestamp, bytes = buffer.len(), "delivering video frame");
                cb(timestamp, MessageFlags::VIDEO_FRAME, buffer, 0);
            }
        }

        if let Some(cb) = preview_cb {
            if let Some(buffer) = copy_into_client_buffer(
                allocate.as_ref(),
                frame,
                buffer_size,
                MessageFlags::PREVIEW_FRAME,
            ) {
                tracing::trace!(timestamp, bytes = buffer.len(), "delivering preview frame");
                cb(MessageFlags::PREVIEW_FRAME, buffer, 0);
            }
        }
    }

    /// Reports a device error to the client.
    ///
    /// Forwarded through the notify handler as an
    /// [`MessageFlags::ERROR`] event iff that kind is enabled and a
    /// handler is registered; otherwise the error is logged and
    /// dropped.
    pub fn on_device_error(&self, code: i32) {
        let notify = {
            let state = self.state.lock();
            if state.enabled.contains(MessageFlags::ERROR) {
                state.callbacks.notify.clone()
            } else {
                None
            }
        };

        match notify {
            Some(cb) => {
                tracing::warn!(code, "reporting device error to client");
                cb(MessageFlags::ERROR, code, 0);
            }
            None => {
                tracing::warn!(code, "device error dropped, no client error path");
            }
        }
    }
}

impl Default for CallbackNotifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Requests a client buffer of `size` bytes and copies the frame in.
///
/// Returns `None` (with an error logged) when the source frame is
/// shorter than the device's reported buffer size, no allocator is
/// registered, the allocator refuses, or the returned buffer is too
/// small. All of these skip exactly one delivery.
fn copy_into_client_buffer(
    allocate: Option<&AllocateFn>,
    frame: &[u8],
    size: usize,
    kind: MessageFlags,
) -> Option<FrameBuffer> {
    if frame.len() < size {
        tracing::error!(
            kind = %kind,
            frame_len = frame.len(),
            needed = size,
            "source frame shorter than device frame buffer, delivery skipped"
        );
        return None;
    }

    let Some(allocate) = allocate else {
        tracing::error!(kind = %kind, "no client allocator registered, delivery skipped");
        return None;
    };

    match allocate(HEAP_POOL, size, 1) {
        Some(mut buffer) if buffer.len() >= size => {
            buffer.data_mut()[..size].copy_from_slice(&frame[..size]);
            Some(buffer)
        }
        Some(buffer) => {
            tracing::error!(
                kind = %kind,
                got = buffer.len(),
                needed = size,
                "client buffer too small, delivery skipped"
            );
            None
        }
        None => {
            tracing::error!(kind = %kind, needed = size, "client memory allocation failed, delivery skipped");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    const FRAME_SIZE: usize = 96;
    /// 10 fps target: one frame per 100ms.
    const FPS: i32 = 10;
    const INTERVAL: Nanos = 100_000_000;

    struct FixedSource(usize);

    impl FrameSource for FixedSource {
        fn frame_buffer_size(&self) -> usize {
            self.0
        }
    }

    fn frame() -> Vec<u8> {
        (0..FRAME_SIZE).map(|i| i as u8).collect()
    }

    /// Notifier with a passing video baseline: VIDEO_FRAME enabled,
    /// timestamped handler and heap allocator registered, recording on.
    fn recording_notifier() -> (CallbackNotifier, Arc<AtomicUsize>) {
        let notifier = CallbackNotifier::new();
        let delivered = Arc::new(AtomicUsize::new(0));
        let seen = delivered.clone();

        notifier.set_callbacks(
            CameraCallbacks::new()
                .with_timestamped_data(move |_, _, _, _| {
                    seen.fetch_add(1, Ordering::SeqCst);
                })
                .with_heap_allocator(),
        );
        notifier.enable_message(MessageFlags::VIDEO_FRAME);
        notifier.enable_video_recording(FPS).unwrap();

        (notifier, delivered)
    }

    #[test]
    fn test_fresh_notifier_state() {
        let notifier = CallbackNotifier::new();
        assert!(notifier.enabled_messages().is_empty());
        assert!(!notifier.is_video_recording_enabled());
        assert!(!notifier.is_message_enabled(MessageFlags::all()));
    }

    #[test]
    fn test_enable_disable_messages() {
        let notifier = CallbackNotifier::new();

        notifier.enable_message(MessageFlags::SHUTTER | MessageFlags::FOCUS);
        notifier.enable_message(MessageFlags::VIDEO_FRAME);
        assert_eq!(
            notifier.enabled_messages(),
            MessageFlags::SHUTTER | MessageFlags::FOCUS | MessageFlags::VIDEO_FRAME
        );

        notifier.disable_message(MessageFlags::FOCUS);
        assert_eq!(
            notifier.enabled_messages(),
            MessageFlags::SHUTTER | MessageFlags::VIDEO_FRAME
        );
    }

    #[test]
    fn test_is_message_enabled_any_of() {
        let notifier = CallbackNotifier::new();
        notifier.enable_message(MessageFlags::SHUTTER);

        assert!(notifier.is_message_enabled(MessageFlags::SHUTTER));
        assert!(!notifier.is_message_enabled(MessageFlags::FOCUS));
        assert!(notifier.is_message_enabled(MessageFlags::SHUTTER | MessageFlags::FOCUS));
    }

    #[test]
    fn test_recording_rejects_non_positive_fps() {
        let notifier = CallbackNotifier::new();

        assert_eq!(
            notifier.enable_video_recording(0),
            Err(NotifierError::InvalidFrameRate { fps: 0 })
        );
        assert_eq!(
            notifier.enable_video_recording(-10),
            Err(NotifierError::InvalidFrameRate { fps: -10 })
        );
        assert!(!notifier.is_video_recording_enabled());
    }

    #[test]
    fn test_recording_toggle() {
        let notifier = CallbackNotifier::new();

        notifier.enable_video_recording(30).unwrap();
        assert!(notifier.is_video_recording_enabled());

        notifier.disable_video_recording();
        assert!(!notifier.is_video_recording_enabled());
    }

    #[test]
    fn test_store_metadata_always_unsupported() {
        let notifier = CallbackNotifier::new();
        assert_eq!(
            notifier.store_metadata_in_buffers(true),
            Err(NotifierError::MetadataUnsupported)
        );
        assert_eq!(
            notifier.store_metadata_in_buffers(false),
            Err(NotifierError::MetadataUnsupported)
        );
    }

    #[test]
    fn test_video_delivery_payload() {
        let notifier = CallbackNotifier::new();
        let received = Arc::new(std::sync::Mutex::new(Vec::new()));
        let sink = received.clone();

        notifier.set_callbacks(
            CameraCallbacks::new()
                .with_timestamped_data(move |ts, kind, buffer, index| {
                    sink.lock()
                        .unwrap()
                        .push((ts, kind, buffer.into_vec(), index));
                })
                .with_heap_allocator(),
        );
        notifier.enable_message(MessageFlags::VIDEO_FRAME);
        notifier.enable_video_recording(FPS).unwrap();

        let source = FixedSource(FRAME_SIZE);
        notifier.on_next_frame_available(&frame(), 42, &source);

        let received = received.lock().unwrap();
        assert_eq!(received.len(), 1);
        let (ts, kind, data, index) = &received[0];
        assert_eq!(*ts, 42);
        assert_eq!(*kind, MessageFlags::VIDEO_FRAME);
        assert_eq!(data, &frame());
        assert_eq!(*index, 0);
    }

    #[test]
    fn test_video_delivery_requires_message_bit() {
        let (notifier, delivered) = recording_notifier();
        notifier.disable_message(MessageFlags::VIDEO_FRAME);

        notifier.on_next_frame_available(&frame(), 0, &FixedSource(FRAME_SIZE));
        assert_eq!(delivered.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_video_delivery_requires_timestamped_handler() {
        let (notifier, delivered) = recording_notifier();
        // Same group minus the timestamped handler.
        notifier.set_callbacks(CameraCallbacks::new().with_heap_allocator());

        notifier.on_next_frame_available(&frame(), 0, &FixedSource(FRAME_SIZE));
        assert_eq!(delivered.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_video_delivery_requires_recording() {
        let (notifier, delivered) = recording_notifier();
        notifier.disable_video_recording();

        notifier.on_next_frame_available(&frame(), 0, &FixedSource(FRAME_SIZE));
        assert_eq!(delivered.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_video_delivery_requires_throttle_pass() {
        let (notifier, delivered) = recording_notifier();
        let source = FixedSource(FRAME_SIZE);

        notifier.on_next_frame_available(&frame(), 0, &source);
        // Offered again well inside the interval window.
        notifier.on_next_frame_available(&frame(), INTERVAL / 2, &source);
        assert_eq!(delivered.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_throttle_thins_fast_source() {
        let (notifier, delivered) = recording_notifier();
        let source = FixedSource(FRAME_SIZE);

        // Source at twice the recording rate: every other frame lands.
        for i in 0..10 {
            notifier.on_next_frame_available(&frame(), i * INTERVAL / 2, &source);
        }
        assert_eq!(delivered.load(Ordering::SeqCst), 5);
    }

    #[test]
    fn test_allocation_failure_skips_without_rollback() {
        let notifier = CallbackNotifier::new();
        let delivered = Arc::new(AtomicUsize::new(0));
        let seen = delivered.clone();
        let counting = move |_: Nanos, _: MessageFlags, _: FrameBuffer, _: usize| {
            seen.fetch_add(1, Ordering::SeqCst);
        };

        notifier.set_callbacks(
            CameraCallbacks::new()
                .with_timestamped_data(counting.clone())
                .with_allocator(|_, _, _| None),
        );
        notifier.enable_message(MessageFlags::VIDEO_FRAME);
        notifier.enable_video_recording(FPS).unwrap();

        let source = FixedSource(FRAME_SIZE);

        // Throttle accepts, allocation fails, nothing is delivered.
        notifier.on_next_frame_available(&frame(), 0, &source);
        assert_eq!(delivered.load(Ordering::SeqCst), 0);

        // Allocator now works, but the failed frame already advanced
        // the schedule, so a frame inside the window stays dropped.
        notifier.set_callbacks(
            CameraCallbacks::new()
                .with_timestamped_data(counting)
                .with_heap_allocator(),
        );
        notifier.on_next_frame_available(&frame(), INTERVAL / 2, &source);
        assert_eq!(delivered.load(Ordering::SeqCst), 0);

        notifier.on_next_frame_available(&frame(), INTERVAL, &source);
        assert_eq!(delivered.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_undersized_client_buffer_skipped() {
        let notifier = CallbackNotifier::new();
        let delivered = Arc::new(AtomicUsize::new(0));
        let seen = delivered.clone();

        notifier.set_callbacks(
            CameraCallbacks::new()
                .with_timestamped_data(move |_, _, _, _| {
                    seen.fetch_add(1, Ordering::SeqCst);
                })
                .with_allocator(|_, size, _| Some(FrameBuffer::zeroed(size / 2))),
        );
        notifier.enable_message(MessageFlags::VIDEO_FRAME);
        notifier.enable_video_recording(FPS).unwrap();

        notifier.on_next_frame_available(&frame(), 0, &FixedSource(FRAME_SIZE));
        assert_eq!(delivered.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_short_source_frame_skipped() {
        let (notifier, delivered) = recording_notifier();

        let short = vec![0u8; FRAME_SIZE / 2];
        notifier.on_next_frame_available(&short, 0, &FixedSource(FRAME_SIZE));
        assert_eq!(delivered.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_preview_delivery_unthrottled() {
        let notifier = CallbackNotifier::new();
        let previews = Arc::new(AtomicUsize::new(0));
        let seen = previews.clone();

        notifier.set_callbacks(
            CameraCallbacks::new()
                .with_data(move |kind, _, _| {
                    assert_eq!(kind, MessageFlags::PREVIEW_FRAME);
                    seen.fetch_add(1, Ordering::SeqCst);
                })
                .with_heap_allocator(),
        );
        notifier.enable_message(MessageFlags::PREVIEW_FRAME);

        let source = FixedSource(FRAME_SIZE);
        // Back to back, no recording or throttle involved.
        notifier.on_next_frame_available(&frame(), 0, &source);
        notifier.on_next_frame_available(&frame(), 1, &source);
        assert_eq!(previews.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_preview_requires_bit_and_handler() {
        let notifier = CallbackNotifier::new();
        let previews = Arc::new(AtomicUsize::new(0));
        let seen = previews.clone();

        // Handler registered, bit not enabled.
        notifier.set_callbacks(
            CameraCallbacks::new()
                .with_data(move |_, _, _| {
                    seen.fetch_add(1, Ordering::SeqCst);
                })
                .with_heap_allocator(),
        );
        notifier.on_next_frame_available(&frame(), 0, &FixedSource(FRAME_SIZE));
        assert_eq!(previews.load(Ordering::SeqCst), 0);

        // Bit enabled, no handler.
        notifier.set_callbacks(CameraCallbacks::new().with_heap_allocator());
        notifier.enable_message(MessageFlags::PREVIEW_FRAME);
        notifier.on_next_frame_available(&frame(), 1, &FixedSource(FRAME_SIZE));
        assert_eq!(previews.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_device_error_reported_when_enabled() {
        let notifier = CallbackNotifier::new();
        let reported = Arc::new(std::sync::Mutex::new(Vec::new()));
        let sink = reported.clone();

        notifier.set_callbacks(CameraCallbacks::new().with_notify(move |kind, ext1, ext2| {
            sink.lock().unwrap().push((kind, ext1, ext2));
        }));

        // Not enabled yet: dropped.
        notifier.on_device_error(-3);
        assert!(reported.lock().unwrap().is_empty());

        notifier.enable_message(MessageFlags::ERROR);
        notifier.on_device_error(-3);
        assert_eq!(
            reported.lock().unwrap().as_slice(),
            &[(MessageFlags::ERROR, -3, 0)]
        );
    }

    #[test]
    fn test_device_error_without_handler() {
        let notifier = CallbackNotifier::new();
        notifier.enable_message(MessageFlags::ERROR);
        // Nothing registered; must not panic.
        notifier.on_device_error(7);
    }

    #[test]
    fn test_cleanup_restores_fresh_state() {
        let (notifier, delivered) = recording_notifier();
        let source = FixedSource(FRAME_SIZE);
        notifier.on_next_frame_available(&frame(), 0, &source);
        assert_eq!(delivered.load(Ordering::SeqCst), 1);

        notifier.cleanup();

        assert!(notifier.enabled_messages().is_empty());
        assert!(!notifier.is_video_recording_enabled());
        // Far past any throttle window; nothing is registered anymore.
        notifier.on_next_frame_available(&frame(), 10 * INTERVAL, &source);
        assert_eq!(delivered.load(Ordering::SeqCst), 1);

        // Idempotent, also fine on a fresh instance.
        notifier.cleanup();
        CallbackNotifier::new().cleanup();
    }

    #[test]
    fn test_set_callbacks_replaces_whole_group() {
        let (notifier, delivered) = recording_notifier();
        notifier.enable_message(MessageFlags::ERROR);

        let errors = Arc::new(AtomicUsize::new(0));
        let seen = errors.clone();
        // New group: notify only. The old timestamped handler and
        // allocator are gone with the swap.
        notifier.set_callbacks(CameraCallbacks::new().with_notify(move |_, _, _| {
            seen.fetch_add(1, Ordering::SeqCst);
        }));

        notifier.on_next_frame_available(&frame(), 0, &FixedSource(FRAME_SIZE));
        assert_eq!(delivered.load(Ordering::SeqCst), 0);

        notifier.on_device_error(1);
        assert_eq!(errors.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_reenable_recording_resets_throttle() {
        let (notifier, delivered) = recording_notifier();
        let source = FixedSource(FRAME_SIZE);

        notifier.on_next_frame_available(&frame(), 0, &source);
        assert_eq!(delivered.load(Ordering::SeqCst), 1);

        // Re-arm: the next frame lands even though it is inside the
        // previous window.
        notifier.enable_video_recording(FPS).unwrap();
        notifier.on_next_frame_available(&frame(), INTERVAL / 4, &source);
        assert_eq!(delivered.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_release_recording_frame_is_a_drop() {
        let notifier = CallbackNotifier::new();
        notifier.release_recording_frame(FrameBuffer::zeroed(16));
    }

    #[test]
    fn test_handler_may_reenter_notifier() {
        let notifier = Arc::new(CallbackNotifier::new());
        let inner = notifier.clone();
        let observed = Arc::new(AtomicUsize::new(0));
        let seen = observed.clone();

        notifier.set_callbacks(
            CameraCallbacks::new()
                .with_timestamped_data(move |_, _, _, _| {
                    // Runs outside the state lock, so this must not
                    // deadlock.
                    if inner.is_message_enabled(MessageFlags::VIDEO_FRAME) {
                        seen.fetch_add(1, Ordering::SeqCst);
                    }
                })
                .with_heap_allocator(),
        );
        notifier.enable_message(MessageFlags::VIDEO_FRAME);
        notifier.enable_video_recording(FPS).unwrap();

        notifier.on_next_frame_available(&frame(), 0, &FixedSource(FRAME_SIZE));
        assert_eq!(observed.load(Ordering::SeqCst), 1);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Enabling in steps equals enabling the union at once.
            #[test]
            fn prop_enable_steps_match_union(a in any::<u32>(), b in any::<u32>()) {
                let a = MessageFlags::from_bits_truncate(a);
                let b = MessageFlags::from_bits_truncate(b);

                let stepped = CallbackNotifier::new();
                stepped.enable_message(a);
                stepped.enable_message(b);

                let joined = CallbackNotifier::new();
                joined.enable_message(a | b);

                prop_assert_eq!(stepped.enabled_messages(), joined.enabled_messages());
                // Idempotent: repeating changes nothing.
                stepped.enable_message(a);
                prop_assert_eq!(stepped.enabled_messages(), joined.enabled_messages());
            }

            /// Disabling bits disjoint from the base restores the base.
            #[test]
            fn prop_disable_restores_disjoint_base(base in any::<u32>(), extra in any::<u32>()) {
                let base = MessageFlags::from_bits_truncate(base);
                let extra = MessageFlags::from_bits_truncate(extra) - base;

                let notifier = CallbackNotifier::new();
                notifier.enable_message(base);
                notifier.enable_message(extra);
                notifier.disable_message(extra);

                prop_assert_eq!(notifier.enabled_messages(), base);
            }
        }
    }
}
