// Pixel Magnifier Library
// Core library for real-time pixel-art magnification

// Public modules
pub mod config;
pub mod display;
pub mod filter;
pub mod image;

// Re-export main types for convenience
pub use config::{ExportConfig, MagnifierConfig, ScalingConfig, WindowConfig};
pub use display::{run_preview, ViewerWindow};
pub use filter::{
    Filter, FilterError, FilterKind, Hq2x, Hq4x, Identity, Nearest3x, Nearest4x, OutputFormat,
    Scale2x, Scale3x,
};
pub use image::png_io::{export_image, load_png, save_png, ImageError};
pub use image::{scale_host_image, HostImage, PixelData};
