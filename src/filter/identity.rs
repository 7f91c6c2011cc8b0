// Identity filter - pass-through at 1x
//
// Exists so the viewer can show the source image unmodified. It has no
// raw-buffer path of its own; the host-image adapter short-circuits
// factor-1 filters into a plain clone, which keeps palettes and alpha
// intact without a copy through packed RGB.

use crate::filter::{Filter, FilterError, OutputFormat};

/// The 1x pass-through filter.
pub struct Identity;

impl Filter for Identity {
    fn scale_factor(&self) -> usize {
        1
    }

    fn output_format(&self) -> OutputFormat {
        OutputFormat::SameAsInput
    }

    fn scale(&self, _src: &[u32], _width: usize, _height: usize) -> Result<Vec<u32>, FilterError> {
        Err(FilterError::Unsupported)
    }
}
