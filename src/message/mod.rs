//! Camera message kinds.
//!
//! Clients subscribe to camera events and data streams selectively.
//! Each message kind occupies one bit of a mask, matching the HAL
//! convention of enabling and disabling interest with bitwise masks.

mod flags;

pub use flags::MessageFlags;
