// Nearest-neighbor filters - block replication at 3x and 4x
//
// Each source pixel becomes a solid factor-by-factor block. Pixels are
// copied as whole u32 values, so alpha channels and palette indices pass
// through untouched; both filters therefore declare SameAsInput.

use crate::filter::{check_scale_args, Filter, FilterError, OutputFormat};

/// Replicate every pixel into a `factor` x `factor` block.
fn replicate(src: &[u32], width: usize, height: usize, factor: usize) -> Vec<u32> {
    let out_w = width * factor;
    let mut out = vec![0u32; out_w * height * factor];

    for y in 0..height {
        let src_row = &src[y * width..(y + 1) * width];
        let top = y * factor;

        // Fill the first output row of the band, then copy it downward.
        let row_start = top * out_w;
        for (x, &pixel) in src_row.iter().enumerate() {
            out[row_start + x * factor..row_start + (x + 1) * factor].fill(pixel);
        }
        for dy in 1..factor {
            let dst_start = (top + dy) * out_w;
            out.copy_within(row_start..row_start + out_w, dst_start);
        }
    }

    out
}

/// 3x nearest-neighbor magnification.
pub struct Nearest3x;

impl Filter for Nearest3x {
    fn scale_factor(&self) -> usize {
        3
    }

    fn output_format(&self) -> OutputFormat {
        OutputFormat::SameAsInput
    }

    fn scale(&self, src: &[u32], width: usize, height: usize) -> Result<Vec<u32>, FilterError> {
        check_scale_args(src, width, height, 3)?;
        Ok(replicate(src, width, height, 3))
    }
}

/// 4x nearest-neighbor magnification.
pub struct Nearest4x;

impl Filter for Nearest4x {
    fn scale_factor(&self) -> usize {
        4
    }

    fn output_format(&self) -> OutputFormat {
        OutputFormat::SameAsInput
    }

    fn scale(&self, src: &[u32], width: usize, height: usize) -> Result<Vec<u32>, FilterError> {
        check_scale_args(src, width, height, 4)?;
        Ok(replicate(src, width, height, 4))
    }
}
