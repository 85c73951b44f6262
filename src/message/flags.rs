//! Message-kind bitmask shared between the client and the notifier.

use bitflags::bitflags;

bitflags! {
    /// Camera message kinds a client can subscribe to.
    ///
    /// The bit layout matches the emulator HAL message mask, so a raw
    /// `u32` from the HAL boundary round-trips through
    /// [`MessageFlags::from_bits_truncate`] without renumbering.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct MessageFlags: u32 {
        /// Device or pipeline error notification.
        const ERROR = 0x0001;
        /// Shutter fired.
        const SHUTTER = 0x0002;
        /// Autofocus state change.
        const FOCUS = 0x0004;
        /// Zoom step completed.
        const ZOOM = 0x0008;
        /// Preview frame data.
        const PREVIEW_FRAME = 0x0010;
        /// Timestamped video frame data.
        const VIDEO_FRAME = 0x0020;
        /// Post-capture review frame.
        const POSTVIEW_FRAME = 0x0040;
        /// Unprocessed sensor image.
        const RAW_IMAGE = 0x0080;
        /// Compressed (encoded) image.
        const COMPRESSED_IMAGE = 0x0100;
        /// Raw image ready notification, carries no payload.
        const RAW_IMAGE_NOTIFY = 0x0200;
        /// Detection metadata attached to preview frames.
        const PREVIEW_METADATA = 0x0400;
    }
}

impl Default for MessageFlags {
    fn default() -> Self {
        Self::empty()
    }
}

/// Renders the set bits by symbolic name, joined with `|`.
///
/// This is what enable/disable diagnostics log, e.g.
/// `SHUTTER|VIDEO_FRAME`. An empty set renders as `(none)`.
impl std::fmt::Display for MessageFlags {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return f.write_str("(none)");
        }
        let mut first = true;
        for (name, _) in self.iter_names() {
            if !first {
                f.write_str("|")?;
            }
            f.write_str(name)?;
            first = false;
        }
        Ok(())
    }
}
