// Color tables - RGB565 reduction, expansion, and perceptual metric
//
// The HQ filters compare neighbors in a reduced 16-bit color space and
// interpolate on the re-expanded 24-bit values. Both directions go through
// lookup tables built once for the whole process.

use std::sync::OnceLock;

/// Luma tolerance, in the packed-word scale (Y occupies bits 16-23).
pub const Y_TOLERANCE: u32 = 0x30_0000;
/// U chroma tolerance (bits 8-15).
pub const U_TOLERANCE: u32 = 0x0700;
/// V chroma tolerance (bits 0-7).
pub const V_TOLERANCE: u32 = 0x06;

/// Process-wide lookup tables indexed by RGB565 value.
pub struct ColorTables {
    /// RGB565 -> 24-bit RGB, each channel shifted back to 8 bits.
    expand: Vec<u32>,
    /// RGB565 -> packed perceptual triple `(Y << 16) | (U << 8) | V`.
    yuv: Vec<u32>,
}

static TABLES: OnceLock<ColorTables> = OnceLock::new();

/// Get the shared tables, building them on first use.
pub fn tables() -> &'static ColorTables {
    TABLES.get_or_init(ColorTables::build)
}

impl ColorTables {
    fn build() -> Self {
        let mut expand = vec![0u32; 0x10000];
        let mut yuv = vec![0u32; 0x10000];

        for c in 0..0x10000u32 {
            expand[c as usize] = ((c & 0xF800) << 8) | ((c & 0x07E0) << 5) | ((c & 0x001F) << 3);

            let r = (((c >> 11) & 0x1F) << 3) as i32;
            let g = (((c >> 5) & 0x3F) << 2) as i32;
            let b = ((c & 0x001F) << 3) as i32;

            let y = (r + g + b) >> 2;
            let u = 128 + ((r - b) >> 2);
            let v = 128 + ((2 * g - r - b) >> 3);

            yuv[c as usize] = ((y as u32) << 16) | ((u as u32) << 8) | (v as u32);
        }

        ColorTables { expand, yuv }
    }

    /// Expand a reduced color back to 24-bit RGB.
    #[inline]
    pub fn expand(&self, c: u16) -> u32 {
        self.expand[c as usize]
    }

    /// Packed perceptual triple for a reduced color.
    #[inline]
    pub fn yuv(&self, c: u16) -> u32 {
        self.yuv[c as usize]
    }

    /// Whether two reduced colors are visually different.
    ///
    /// Equal colors are never different; otherwise the packed perceptual
    /// triples are compared component-wise against the fixed tolerances.
    /// The predicate is symmetric in its arguments.
    #[inline]
    pub fn different(&self, a: u16, b: u16) -> bool {
        a != b && yuv_different(self.yuv(a), self.yuv(b))
    }
}

/// Truncate a packed 24-bit RGB color to RGB565. Alpha bits are dropped.
#[inline]
pub fn to_rgb565(c: u32) -> u16 {
    (((c >> 8) & 0xF800) | ((c >> 5) & 0x07E0) | ((c >> 3) & 0x001F)) as u16
}

/// Compare two packed perceptual triples against the fixed tolerances.
#[inline]
pub fn yuv_different(a: u32, b: u32) -> bool {
    ((a & 0xFF_0000) as i32 - (b & 0xFF_0000) as i32).unsigned_abs() > Y_TOLERANCE
        || ((a & 0x00_FF00) as i32 - (b & 0x00_FF00) as i32).unsigned_abs() > U_TOLERANCE
        || ((a & 0x00_00FF) as i32 - (b & 0x00_00FF) as i32).unsigned_abs() > V_TOLERANCE
}
