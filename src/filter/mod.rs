// Filter module - pixel-art magnification filters
//
// Every filter implements the same contract: a fixed integer scale factor,
// a declared output format, and a pure buffer-in/buffer-out scale call.
// Filters hold no mutable state, so one instance can serve any number of
// threads at once.

mod hqx;
mod identity;
mod nearest;
mod scalex;

pub use hqx::{Hq2x, Hq4x};
pub use identity::Identity;
pub use nearest::{Nearest3x, Nearest4x};
pub use scalex::{Scale2x, Scale3x};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Pixel format a filter produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// The output carries whatever the input carried, including alpha or
    /// palette indices. Declared by filters that copy pixels verbatim.
    SameAsInput,
    /// Packed 24-bit RGB; alpha and palette information are lost.
    Rgb,
}

/// Errors from the buffer scaling entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// Width or height is zero.
    InvalidDimensions,
    /// Buffer length does not match `width * height`.
    BufferSizeMismatch { expected: usize, actual: usize },
    /// The output dimensions do not fit in `usize`.
    Overflow,
    /// The filter has no raw-buffer path; use the host-image adapter.
    Unsupported,
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterError::InvalidDimensions => {
                write!(f, "invalid dimensions: width and height must be positive")
            }
            FilterError::BufferSizeMismatch { expected, actual } => {
                write!(
                    f,
                    "buffer size mismatch (expected {} pixels, got {})",
                    expected, actual
                )
            }
            FilterError::Overflow => write!(f, "scaled dimensions overflow usize"),
            FilterError::Unsupported => {
                write!(
                    f,
                    "raw buffer scaling is not supported by this filter; use the host-image adapter"
                )
            }
        }
    }
}

impl std::error::Error for FilterError {}

/// A pixel-art magnification filter.
///
/// `scale` reads a row-major packed-RGB buffer and returns a freshly
/// allocated buffer enlarged by `scale_factor()` in both directions. The
/// input is never mutated and the call has no side effects.
pub trait Filter {
    /// Linear magnification factor, constant per filter.
    fn scale_factor(&self) -> usize;

    /// Format of the buffers this filter produces.
    fn output_format(&self) -> OutputFormat;

    /// Scale a row-major pixel buffer.
    ///
    /// # Arguments
    ///
    /// * `src` - Source pixels, `width * height` packed `u32` values
    /// * `width` - Source width in pixels (must be positive)
    /// * `height` - Source height in pixels (must be positive)
    ///
    /// # Returns
    ///
    /// The scaled buffer of `width * factor * height * factor` pixels, or a
    /// `FilterError` if the preconditions do not hold.
    fn scale(&self, src: &[u32], width: usize, height: usize) -> Result<Vec<u32>, FilterError>;
}

/// Validate the shared `scale` preconditions.
///
/// Checks positive dimensions, the buffer length invariant, and that the
/// output allocation fits in `usize`.
pub(crate) fn check_scale_args(
    src: &[u32],
    width: usize,
    height: usize,
    factor: usize,
) -> Result<(), FilterError> {
    if width == 0 || height == 0 {
        return Err(FilterError::InvalidDimensions);
    }
    let expected = width.checked_mul(height).ok_or(FilterError::Overflow)?;
    if src.len() != expected {
        return Err(FilterError::BufferSizeMismatch {
            expected,
            actual: src.len(),
        });
    }
    expected
        .checked_mul(factor)
        .and_then(|n| n.checked_mul(factor))
        .ok_or(FilterError::Overflow)?;
    Ok(())
}

/// The selectable filters, as stored in the configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    Identity,
    Nearest3x,
    Nearest4x,
    Scale2x,
    Scale3x,
    Hq2x,
    Hq4x,
}

impl FilterKind {
    /// Every selectable filter, in menu order.
    pub fn all() -> [FilterKind; 7] {
        [
            FilterKind::Identity,
            FilterKind::Nearest3x,
            FilterKind::Nearest4x,
            FilterKind::Scale2x,
            FilterKind::Scale3x,
            FilterKind::Hq2x,
            FilterKind::Hq4x,
        ]
    }

    /// The configuration name of this filter.
    pub fn as_str(self) -> &'static str {
        match self {
            FilterKind::Identity => "identity",
            FilterKind::Nearest3x => "nearest3x",
            FilterKind::Nearest4x => "nearest4x",
            FilterKind::Scale2x => "scale2x",
            FilterKind::Scale3x => "scale3x",
            FilterKind::Hq2x => "hq2x",
            FilterKind::Hq4x => "hq4x",
        }
    }

    /// Parse a configuration name.
    pub fn from_name(name: &str) -> Option<FilterKind> {
        FilterKind::all().into_iter().find(|k| k.as_str() == name)
    }

    /// Construct the filter this kind names.
    pub fn create(self) -> Box<dyn Filter> {
        match self {
            FilterKind::Identity => Box::new(Identity),
            FilterKind::Nearest3x => Box::new(Nearest3x),
            FilterKind::Nearest4x => Box::new(Nearest4x),
            FilterKind::Scale2x => Box::new(Scale2x),
            FilterKind::Scale3x => Box::new(Scale3x),
            FilterKind::Hq2x => Box::new(Hq2x),
            FilterKind::Hq4x => Box::new(Hq4x),
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_creates_a_matching_filter() {
        let factors = [1, 3, 4, 2, 3, 2, 4];
        for (kind, factor) in FilterKind::all().into_iter().zip(factors) {
            assert_eq!(kind.create().scale_factor(), factor, "{}", kind);
        }
    }

    #[test]
    fn test_kind_names_round_trip() {
        for kind in FilterKind::all() {
            assert_eq!(FilterKind::from_name(kind.as_str()), Some(kind));
        }
        assert_eq!(FilterKind::from_name("hq3x"), None);
    }

    #[test]
    fn test_output_length_invariant_for_all_filters() {
        let src = vec![0x0012_3456u32; 5 * 4];
        for kind in FilterKind::all() {
            if kind == FilterKind::Identity {
                continue;
            }
            let filter = kind.create();
            let n = filter.scale_factor();
            let out = filter.scale(&src, 5, 4).unwrap();
            assert_eq!(out.len(), 5 * n * 4 * n, "{}", kind);
        }
    }

    #[test]
    fn test_check_scale_args_rejects_overflow() {
        let src: [u32; 0] = [];
        assert!(matches!(
            check_scale_args(&src, usize::MAX, 2, 2),
            Err(FilterError::Overflow)
        ));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let err = FilterError::BufferSizeMismatch {
            expected: 12,
            actual: 10,
        };
        assert_eq!(
            err.to_string(),
            "buffer size mismatch (expected 12 pixels, got 10)"
        );
        assert!(FilterError::Unsupported.to_string().contains("adapter"));
    }
}
