//! Playback driving and preset patterns

pub mod driver;
pub mod patterns;

pub use driver::PlaybackDriver;
pub use patterns::{Pattern, PATTERNS};
