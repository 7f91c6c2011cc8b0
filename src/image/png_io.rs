// PNG input and output
//
// Loads 8-bit PNGs into host images and writes scaled results back out.
// Palette-indexed files keep their index plane and palette; everything
// else lands in packed RGB with alpha in the top byte where the source
// had one.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::image::{HostImage, PixelData};

/// Errors that can occur while reading or writing image files
#[derive(Debug)]
pub enum ImageError {
    /// I/O error
    Io(io::Error),

    /// PNG decoding error
    Decoding(png::DecodingError),

    /// PNG encoding error
    Encoding(png::EncodingError),

    /// Image layout this program does not handle
    Unsupported(String),
}

impl std::fmt::Display for ImageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageError::Io(e) => write!(f, "I/O error: {}", e),
            ImageError::Decoding(e) => write!(f, "PNG decoding error: {}", e),
            ImageError::Encoding(e) => write!(f, "PNG encoding error: {}", e),
            ImageError::Unsupported(what) => write!(f, "unsupported image: {}", what),
        }
    }
}

impl std::error::Error for ImageError {}

impl From<io::Error> for ImageError {
    fn from(e: io::Error) -> Self {
        ImageError::Io(e)
    }
}

impl From<png::DecodingError> for ImageError {
    fn from(e: png::DecodingError) -> Self {
        ImageError::Decoding(e)
    }
}

impl From<png::EncodingError> for ImageError {
    fn from(e: png::EncodingError) -> Self {
        ImageError::Encoding(e)
    }
}

/// Bytes per pixel for an 8-bit image of the given color type.
fn bytes_per_pixel(color_type: png::ColorType) -> usize {
    match color_type {
        png::ColorType::Grayscale | png::ColorType::Indexed => 1,
        png::ColorType::GrayscaleAlpha => 2,
        png::ColorType::Rgb => 3,
        png::ColorType::Rgba => 4,
    }
}

/// Load a PNG file into a host image.
///
/// 16-bit channels are reduced to 8 bits; other bit depths below 8 are
/// rejected. Indexed files come back as `PixelData::Indexed` with the
/// palette converted to opaque packed colors.
///
/// # Arguments
///
/// * `path` - Path of the PNG file to read
///
/// # Returns
///
/// Result containing the decoded image or an error
pub fn load_png(path: &Path) -> Result<HostImage, ImageError> {
    let file = fs::File::open(path)?;
    let mut decoder = png::Decoder::new(io::BufReader::new(file));
    decoder.set_transformations(png::Transformations::STRIP_16);

    let mut reader = decoder.read_info()?;
    let info = reader.info();
    let width = info.width as usize;
    let height = info.height as usize;
    let color_type = info.color_type;
    let bit_depth = info.bit_depth;

    if bit_depth != png::BitDepth::Eight {
        return Err(ImageError::Unsupported(format!(
            "bit depth {:?} (only 8-bit files are handled)",
            bit_depth
        )));
    }

    let palette = info.palette.as_ref().map(|p| {
        p.chunks(3)
            .map(|rgb| {
                0xFF00_0000
                    | (u32::from(rgb[0]) << 16)
                    | (u32::from(rgb[1]) << 8)
                    | u32::from(rgb[2])
            })
            .collect::<Vec<u32>>()
    });

    let mut buf = vec![0u8; width * height * bytes_per_pixel(color_type)];
    reader.next_frame(&mut buf)?;

    let image = match color_type {
        png::ColorType::Indexed => {
            let palette = palette.ok_or_else(|| {
                ImageError::Unsupported("indexed PNG without a palette".to_string())
            })?;
            HostImage::new_indexed(width, height, palette, buf)
        }
        png::ColorType::Rgb => {
            let pixels = buf
                .chunks(3)
                .map(|p| (u32::from(p[0]) << 16) | (u32::from(p[1]) << 8) | u32::from(p[2]))
                .collect();
            HostImage::new_rgb(width, height, pixels)
        }
        png::ColorType::Rgba => {
            let pixels = buf
                .chunks(4)
                .map(|p| {
                    (u32::from(p[3]) << 24)
                        | (u32::from(p[0]) << 16)
                        | (u32::from(p[1]) << 8)
                        | u32::from(p[2])
                })
                .collect();
            HostImage::new_rgb(width, height, pixels)
        }
        png::ColorType::Grayscale => {
            let pixels = buf
                .iter()
                .map(|&v| {
                    let v = u32::from(v);
                    (v << 16) | (v << 8) | v
                })
                .collect();
            HostImage::new_rgb(width, height, pixels)
        }
        png::ColorType::GrayscaleAlpha => {
            let pixels = buf
                .chunks(2)
                .map(|p| {
                    let v = u32::from(p[0]);
                    (u32::from(p[1]) << 24) | (v << 16) | (v << 8) | v
                })
                .collect();
            HostImage::new_rgb(width, height, pixels)
        }
    };

    Ok(image)
}

/// Save a host image as a PNG file.
///
/// RGB images are written as 8-bit RGB (alpha is dropped); indexed images
/// are written as indexed PNGs with their palette.
///
/// # Arguments
///
/// * `path` - Path to save the PNG file
/// * `image` - The image to write
///
/// # Returns
///
/// Result indicating success or error
pub fn save_png(path: &Path, image: &HostImage) -> Result<(), ImageError> {
    let file = fs::File::create(path)?;
    let w = io::BufWriter::new(file);

    let mut encoder = png::Encoder::new(w, image.width() as u32, image.height() as u32);
    encoder.set_depth(png::BitDepth::Eight);

    match image.data() {
        PixelData::Rgb(pixels) => {
            encoder.set_color(png::ColorType::Rgb);
            let mut data = Vec::with_capacity(pixels.len() * 3);
            for &pixel in pixels {
                data.push(((pixel >> 16) & 0xFF) as u8); // R
                data.push(((pixel >> 8) & 0xFF) as u8); // G
                data.push((pixel & 0xFF) as u8); // B
            }
            let mut writer = encoder.write_header()?;
            writer.write_image_data(&data)?;
        }
        PixelData::Indexed { palette, indices } => {
            encoder.set_color(png::ColorType::Indexed);
            let mut plte = Vec::with_capacity(palette.len() * 3);
            for &color in palette {
                plte.push(((color >> 16) & 0xFF) as u8);
                plte.push(((color >> 8) & 0xFF) as u8);
                plte.push((color & 0xFF) as u8);
            }
            encoder.set_palette(plte);
            let mut writer = encoder.write_header()?;
            writer.write_image_data(indices)?;
        }
    }

    Ok(())
}

/// Save a scaled image into the export directory
///
/// Creates the directory if needed and names the file with a local
/// timestamp when requested.
///
/// # Arguments
///
/// * `image` - The image to export
/// * `directory` - Directory the file is written into
/// * `include_timestamp` - Whether to append a timestamp to the filename
///
/// # Returns
///
/// Result containing the path of the written file or an error
pub fn export_image(
    image: &HostImage,
    directory: &Path,
    include_timestamp: bool,
) -> Result<PathBuf, ImageError> {
    fs::create_dir_all(directory)?;

    let filename = if include_timestamp {
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        format!("magnified_{}.png", timestamp)
    } else {
        "magnified.png".to_string()
    };
    let file_path = directory.join(filename);

    save_png(&file_path, image)?;

    Ok(file_path)
}
