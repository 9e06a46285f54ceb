//! Output formatting utilities

pub mod display;

pub use display::{ColorOutput, FrameRenderer, CLEAR_SCREEN, CURSOR_HOME};
