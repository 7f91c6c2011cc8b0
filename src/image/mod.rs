// Image module - host-side images and the filter adapter
//
// A HostImage is what the rest of the program trades in: a width, a
// height, and pixel data that is either packed RGB or palette-indexed.
// The adapter in scale_host_image decides per filter whether indices can
// ride through untouched or the image has to be materialized to RGB
// first.

pub mod png_io;

use crate::filter::{Filter, FilterError, OutputFormat};

/// Pixel storage for a host image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PixelData {
    /// Row-major packed 24-bit RGB, one `u32` per pixel (alpha in the top
    /// byte where the source had one).
    Rgb(Vec<u32>),
    /// Row-major palette indices plus the palette they refer to.
    Indexed { palette: Vec<u32>, indices: Vec<u8> },
}

/// An image as loaded from or saved to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostImage {
    width: usize,
    height: usize,
    data: PixelData,
}

impl HostImage {
    /// Build an RGB image. `pixels` must hold `width * height` values.
    pub fn new_rgb(width: usize, height: usize, pixels: Vec<u32>) -> HostImage {
        HostImage {
            width,
            height,
            data: PixelData::Rgb(pixels),
        }
    }

    /// Build a palette-indexed image. `indices` must hold
    /// `width * height` values.
    pub fn new_indexed(
        width: usize,
        height: usize,
        palette: Vec<u32>,
        indices: Vec<u8>,
    ) -> HostImage {
        HostImage {
            width,
            height,
            data: PixelData::Indexed { palette, indices },
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn data(&self) -> &PixelData {
        &self.data
    }

    /// Materialize the image as packed RGB pixels.
    ///
    /// Indexed images are resolved through their palette; indices past the
    /// end of the palette wrap around, and an empty palette maps to black.
    pub fn pixels(&self) -> Vec<u32> {
        match &self.data {
            PixelData::Rgb(pixels) => pixels.clone(),
            PixelData::Indexed { palette, indices } => indices
                .iter()
                .map(|&i| {
                    if palette.is_empty() {
                        0
                    } else {
                        palette[i as usize % palette.len()]
                    }
                })
                .collect(),
        }
    }
}

/// Scale a host image with the given filter.
///
/// Factor-1 filters return a clone of the input, whatever its storage.
/// Indexed images keep their palette when the filter copies pixels
/// verbatim (`SameAsInput`); otherwise the image is flattened to RGB
/// before filtering and the result is an RGB image.
///
/// # Arguments
///
/// * `filter` - The magnification filter to apply
/// * `image` - The source image
///
/// # Returns
///
/// The scaled image, or the error the filter reported.
pub fn scale_host_image(filter: &dyn Filter, image: &HostImage) -> Result<HostImage, FilterError> {
    let factor = filter.scale_factor();
    if factor == 1 {
        return Ok(image.clone());
    }

    match (&image.data, filter.output_format()) {
        (PixelData::Indexed { palette, indices }, OutputFormat::SameAsInput) => {
            // Indices survive pixel-copying filters unchanged, so run the
            // filter on the index plane and keep the palette.
            let widened: Vec<u32> = indices.iter().map(|&i| u32::from(i)).collect();
            let scaled = filter.scale(&widened, image.width, image.height)?;
            let narrowed: Vec<u8> = scaled.into_iter().map(|i| i as u8).collect();
            Ok(HostImage::new_indexed(
                image.width * factor,
                image.height * factor,
                palette.clone(),
                narrowed,
            ))
        }
        _ => {
            let rgb = image.pixels();
            let scaled = filter.scale(&rgb, image.width, image.height)?;
            Ok(HostImage::new_rgb(
                image.width * factor,
                image.height * factor,
                scaled,
            ))
        }
    }
}
