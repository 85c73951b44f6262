//! Event and frame dispatch to client callbacks.
//!
//! [`CallbackNotifier`] is the hub of the crate: it owns the
//! registered callback group, the enabled message kinds and the video
//! recording state, and routes device frames and errors to the client
//! accordingly. [`FrameThrottle`] implements the frame rate cap used
//! by the video path.

mod notifier;
mod throttle;

pub use notifier::{CallbackNotifier, NotifierError};
pub use throttle::{FrameThrottle, NANOS_PER_SEC};
