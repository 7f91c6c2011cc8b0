// Display module - Handles window creation and frame rendering
//
// This module provides:
// - Preview window sized to the scaled image
// - Frame rendering using winit + pixels
// - PNG export of the displayed frame

pub mod window;

pub use window::{run_preview, ViewerWindow};
