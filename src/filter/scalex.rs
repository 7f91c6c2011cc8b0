// ScaleX filters - edge-directed magnification at 2x and 3x
//
// Classic EPX-style scaling: each output block starts as a copy of the
// center pixel, then corners (and edge midpoints at 3x) snap to a
// neighbor when exactly one diagonal pair of neighbors agrees. All
// comparisons are exact equality on 24-bit RGB; no color blending is
// performed, so every output pixel is one of the input colors.

use crate::filter::{check_scale_args, Filter, FilterError, OutputFormat};

const RGB_MASK: u32 = 0x00FF_FFFF;

/// Fetch the pixel at (x, y), masked to 24-bit RGB.
#[inline]
fn px(src: &[u32], width: usize, x: usize, y: usize) -> u32 {
    src[y * width + x] & RGB_MASK
}

fn scale2x(src: &[u32], width: usize, height: usize) -> Vec<u32> {
    let out_w = width * 2;
    let mut out = vec![0u32; out_w * height * 2];

    for y in 0..height {
        // Border pixels reuse the nearest in-bounds neighbor.
        let ym = y.saturating_sub(1);
        let yp = (y + 1).min(height - 1);
        for x in 0..width {
            let xm = x.saturating_sub(1);
            let xp = (x + 1).min(width - 1);

            let b = px(src, width, x, ym);
            let d = px(src, width, xm, y);
            let e = px(src, width, x, y);
            let f = px(src, width, xp, y);
            let h = px(src, width, x, yp);

            let (mut e0, mut e1, mut e2, mut e3) = (e, e, e, e);
            if b != h && d != f {
                if d == b {
                    e0 = d;
                }
                if b == f {
                    e1 = f;
                }
                if d == h {
                    e2 = d;
                }
                if h == f {
                    e3 = f;
                }
            }

            let base = y * 2 * out_w + x * 2;
            out[base] = e0;
            out[base + 1] = e1;
            out[base + out_w] = e2;
            out[base + out_w + 1] = e3;
        }
    }

    out
}

fn scale3x(src: &[u32], width: usize, height: usize) -> Vec<u32> {
    let out_w = width * 3;
    let mut out = vec![0u32; out_w * height * 3];

    for y in 0..height {
        let ym = y.saturating_sub(1);
        let yp = (y + 1).min(height - 1);
        for x in 0..width {
            let xm = x.saturating_sub(1);
            let xp = (x + 1).min(width - 1);

            let a = px(src, width, xm, ym);
            let b = px(src, width, x, ym);
            let c = px(src, width, xp, ym);
            let d = px(src, width, xm, y);
            let e = px(src, width, x, y);
            let f = px(src, width, xp, y);
            let g = px(src, width, xm, yp);
            let h = px(src, width, x, yp);
            let i = px(src, width, xp, yp);

            let mut cell = [e; 9];
            if b != h && d != f {
                if d == b {
                    cell[0] = d;
                }
                if (d == b && e != c) || (b == f && e != a) {
                    cell[1] = b;
                }
                if b == f {
                    cell[2] = f;
                }
                if (d == b && e != g) || (d == h && e != a) {
                    cell[3] = d;
                }
                if (b == f && e != i) || (h == f && e != c) {
                    cell[5] = f;
                }
                if d == h {
                    cell[6] = d;
                }
                if (d == h && e != i) || (h == f && e != g) {
                    cell[7] = h;
                }
                if h == f {
                    cell[8] = f;
                }
            }

            let base = y * 3 * out_w + x * 3;
            for (k, &value) in cell.iter().enumerate() {
                out[base + (k / 3) * out_w + k % 3] = value;
            }
        }
    }

    out
}

/// 2x edge-directed magnification (EPX / AdvMAME2x).
pub struct Scale2x;

impl Filter for Scale2x {
    fn scale_factor(&self) -> usize {
        2
    }

    fn output_format(&self) -> OutputFormat {
        OutputFormat::Rgb
    }

    fn scale(&self, src: &[u32], width: usize, height: usize) -> Result<Vec<u32>, FilterError> {
        check_scale_args(src, width, height, 2)?;
        Ok(scale2x(src, width, height))
    }
}

/// 3x edge-directed magnification (AdvMAME3x).
pub struct Scale3x;

impl Filter for Scale3x {
    fn scale_factor(&self) -> usize {
        3
    }

    fn output_format(&self) -> OutputFormat {
        OutputFormat::Rgb
    }

    fn scale(&self, src: &[u32], width: usize, height: usize) -> Result<Vec<u32>, FilterError> {
        check_scale_args(src, width, height, 3)?;
        Ok(scale3x(src, width, height))
    }
}
