// Hq2x filter - 2x edge-detecting interpolation
//
// Classifies every pixel against its 8 neighbors in the reduced color
// space, then applies the 2x2 recipe for the resulting pattern mask. The
// recipe table below has one row per mask value; rows are grouped into 51
// symmetry classes, which the tests use to cross-check every entry.

use super::CellRule::{self, Diff, Fix};
use super::{scale_with_rules, BlendOp::*};
use crate::filter::{check_scale_args, Filter, FilterError, OutputFormat};

/// 2x edge-detecting interpolation.
pub struct Hq2x;

impl Filter for Hq2x {
    fn scale_factor(&self) -> usize {
        2
    }

    fn output_format(&self) -> OutputFormat {
        OutputFormat::Rgb
    }

    fn scale(&self, src: &[u32], width: usize, height: usize) -> Result<Vec<u32>, FilterError> {
        check_scale_args(src, width, height, 2)?;
        Ok(scale_with_rules::<2, 4>(&HQ2X_RULES, src, width, height))
    }
}

/// Per-pattern recipes for the 2x2 destination block, cells in row-major
/// order (top-left, top-right, bottom-left, bottom-right).
#[rustfmt::skip]
static HQ2X_RULES: [[CellRule; 4]; 256] = [
    [Fix(W211(5, 4, 2)), Fix(W211(5, 2, 6)), Fix(W211(5, 8, 4)), Fix(W211(5, 6, 8))], // 0
    [Fix(W211(5, 4, 2)), Fix(W211(5, 2, 6)), Fix(W211(5, 8, 4)), Fix(W211(5, 6, 8))], // 1
    [Fix(W211(5, 1, 4)), Fix(W211(5, 3, 6)), Fix(W211(5, 8, 4)), Fix(W211(5, 6, 8))], // 2
    [Fix(W31(5, 4)), Fix(W211(5, 3, 6)), Fix(W211(5, 8, 4)), Fix(W211(5, 6, 8))], // 3
    [Fix(W211(5, 4, 2)), Fix(W211(5, 2, 6)), Fix(W211(5, 8, 4)), Fix(W211(5, 6, 8))], // 4
    [Fix(W211(5, 4, 2)), Fix(W211(5, 2, 6)), Fix(W211(5, 8, 4)), Fix(W211(5, 6, 8))], // 5
    [Fix(W211(5, 1, 4)), Fix(W31(5, 6)), Fix(W211(5, 8, 4)), Fix(W211(5, 6, 8))], // 6
    [Fix(W31(5, 4)), Fix(W31(5, 6)), Fix(W211(5, 8, 4)), Fix(W211(5, 6, 8))], // 7
    [Fix(W211(5, 1, 2)), Fix(W211(5, 2, 6)), Fix(W211(5, 7, 8)), Fix(W211(5, 6, 8))], // 8
    [Fix(W31(5, 2)), Fix(W211(5, 2, 6)), Fix(W211(5, 7, 8)), Fix(W211(5, 6, 8))], // 9
    [Diff(4, 2, W31(5, 1), W211(5, 4, 2)), Fix(W211(5, 3, 6)), Fix(W211(5, 7, 8)), Fix(W211(5, 6, 8))], // 10
    [Diff(4, 2, Keep, W211(5, 4, 2)), Fix(W211(5, 3, 6)), Fix(W211(5, 7, 8)), Fix(W211(5, 6, 8))], // 11
    [Fix(W211(5, 1, 2)), Fix(W211(5, 2, 6)), Fix(W211(5, 7, 8)), Fix(W211(5, 6, 8))], // 12
    [Fix(W31(5, 2)), Fix(W211(5, 2, 6)), Fix(W211(5, 7, 8)), Fix(W211(5, 6, 8))], // 13
    [Diff(4, 2, W31(5, 1), W233(5, 4, 2)), Diff(4, 2, W31(5, 6), W521(5, 2, 6)),
     Fix(W211(5, 7, 8)), Fix(W211(5, 6, 8))], // 14
    [Diff(4, 2, Keep, W233(5, 4, 2)), Diff(4, 2, W31(5, 6), W521(5, 2, 6)),
     Fix(W211(5, 7, 8)), Fix(W211(5, 6, 8))], // 15
    [Fix(W211(5, 4, 2)), Fix(W211(5, 3, 2)), Fix(W211(5, 8, 4)), Fix(W211(5, 9, 8))], // 16
    [Fix(W211(5, 4, 2)), Fix(W211(5, 3, 2)), Fix(W211(5, 8, 4)), Fix(W211(5, 9, 8))], // 17
    [Fix(W211(5, 1, 4)), Diff(2, 6, W31(5, 3), W211(5, 2, 6)), Fix(W211(5, 8, 4)), Fix(W211(5, 9, 8))], // 18
    [Diff(2, 6, W31(5, 4), W521(5, 2, 4)), Diff(2, 6, W31(5, 3), W233(5, 2, 6)),
     Fix(W211(5, 8, 4)), Fix(W211(5, 9, 8))], // 19
    [Fix(W211(5, 4, 2)), Fix(W31(5, 2)), Fix(W211(5, 8, 4)), Fix(W211(5, 9, 8))], // 20
    [Fix(W211(5, 4, 2)), Fix(W31(5, 2)), Fix(W211(5, 8, 4)), Fix(W211(5, 9, 8))], // 21
    [Fix(W211(5, 1, 4)), Diff(2, 6, Keep, W211(5, 2, 6)), Fix(W211(5, 8, 4)), Fix(W211(5, 9, 8))], // 22
    [Diff(2, 6, W31(5, 4), W521(5, 2, 4)), Diff(2, 6, Keep, W233(5, 2, 6)),
     Fix(W211(5, 8, 4)), Fix(W211(5, 9, 8))], // 23
    [Fix(W211(5, 1, 2)), Fix(W211(5, 3, 2)), Fix(W211(5, 7, 8)), Fix(W211(5, 9, 8))], // 24
    [Fix(W31(5, 2)), Fix(W211(5, 3, 2)), Fix(W211(5, 7, 8)), Fix(W211(5, 9, 8))], // 25
    [Diff(4, 2, Keep, W211(5, 4, 2)), Diff(2, 6, Keep, W211(5, 2, 6)),
     Fix(W211(5, 7, 8)), Fix(W211(5, 9, 8))], // 26
    [Diff(4, 2, Keep, W211(5, 4, 2)), Fix(W31(5, 3)), Fix(W211(5, 7, 8)), Fix(W211(5, 9, 8))], // 27
    [Fix(W211(5, 1, 2)), Fix(W31(5, 2)), Fix(W211(5, 7, 8)), Fix(W211(5, 9, 8))], // 28
    [Fix(W31(5, 2)), Fix(W31(5, 2)), Fix(W211(5, 7, 8)), Fix(W211(5, 9, 8))], // 29
    [Fix(W31(5, 1)), Diff(2, 6, Keep, W211(5, 2, 6)), Fix(W211(5, 7, 8)), Fix(W211(5, 9, 8))], // 30
    [Diff(4, 2, Keep, W211(5, 4, 2)), Diff(2, 6, Keep, W211(5, 2, 6)),
     Fix(W211(5, 7, 8)), Fix(W211(5, 9, 8))], // 31
    [Fix(W211(5, 4, 2)), Fix(W211(5, 2, 6)), Fix(W211(5, 8, 4)), Fix(W211(5, 6, 8))], // 32
    [Fix(W211(5, 4, 2)), Fix(W211(5, 2, 6)), Fix(W211(5, 8, 4)), Fix(W211(5, 6, 8))], // 33
    [Fix(W211(5, 1, 4)), Fix(W211(5, 3, 6)), Fix(W211(5, 8, 4)), Fix(W211(5, 6, 8))], // 34
    [Fix(W31(5, 4)), Fix(W211(5, 3, 6)), Fix(W211(5, 8, 4)), Fix(W211(5, 6, 8))], // 35
    [Fix(W211(5, 4, 2)), Fix(W211(5, 2, 6)), Fix(W211(5, 8, 4)), Fix(W211(5, 6, 8))], // 36
    [Fix(W211(5, 4, 2)), Fix(W211(5, 2, 6)), Fix(W211(5, 8, 4)), Fix(W211(5, 6, 8))], // 37
    [Fix(W211(5, 1, 4)), Fix(W31(5, 6)), Fix(W211(5, 8, 4)), Fix(W211(5, 6, 8))], // 38
    [Fix(W31(5, 4)), Fix(W31(5, 6)), Fix(W211(5, 8, 4)), Fix(W211(5, 6, 8))], // 39
    [Fix(W211(5, 1, 2)), Fix(W211(5, 2, 6)), Fix(W31(5, 8)), Fix(W211(5, 6, 8))], // 40
    [Fix(W31(5, 2)), Fix(W211(5, 2, 6)), Fix(W31(5, 8)), Fix(W211(5, 6, 8))], // 41
    [Diff(4, 2, W31(5, 1), W233(5, 4, 2)), Fix(W211(5, 3, 6)),
     Diff(4, 2, W31(5, 8), W521(5, 4, 8)), Fix(W211(5, 6, 8))], // 42
    [Diff(4, 2, Keep, W233(5, 4, 2)), Fix(W211(5, 3, 6)),
     Diff(4, 2, W31(5, 8), W521(5, 4, 8)), Fix(W211(5, 6, 8))], // 43
    [Fix(W211(5, 1, 2)), Fix(W211(5, 2, 6)), Fix(W31(5, 8)), Fix(W211(5, 6, 8))], // 44
    [Fix(W31(5, 2)), Fix(W211(5, 2, 6)), Fix(W31(5, 8)), Fix(W211(5, 6, 8))], // 45
    [Diff(4, 2, W31(5, 1), W611(5, 4, 2)), Fix(W31(5, 6)), Fix(W31(5, 8)), Fix(W211(5, 6, 8))], // 46
    [Diff(4, 2, Keep, W1411(5, 4, 2)), Fix(W31(5, 6)), Fix(W31(5, 8)), Fix(W211(5, 6, 8))], // 47
    [Fix(W211(5, 4, 2)), Fix(W211(5, 3, 2)), Fix(W211(5, 8, 4)), Fix(W211(5, 9, 8))], // 48
    [Fix(W211(5, 4, 2)), Fix(W211(5, 3, 2)), Fix(W211(5, 8, 4)), Fix(W211(5, 9, 8))], // 49
    [Fix(W211(5, 1, 4)), Diff(2, 6, W31(5, 3), W211(5, 2, 6)), Fix(W211(5, 8, 4)), Fix(W211(5, 9, 8))], // 50
    [Diff(2, 6, W31(5, 4), W521(5, 2, 4)), Diff(2, 6, W31(5, 3), W233(5, 2, 6)),
     Fix(W211(5, 8, 4)), Fix(W211(5, 9, 8))], // 51
    [Fix(W211(5, 4, 2)), Fix(W31(5, 2)), Fix(W211(5, 8, 4)), Fix(W211(5, 9, 8))], // 52
    [Fix(W211(5, 4, 2)), Fix(W31(5, 2)), Fix(W211(5, 8, 4)), Fix(W211(5, 9, 8))], // 53
    [Fix(W211(5, 1, 4)), Diff(2, 6, Keep, W211(5, 2, 6)), Fix(W211(5, 8, 4)), Fix(W211(5, 9, 8))], // 54
    [Diff(2, 6, W31(5, 4), W521(5, 2, 4)), Diff(2, 6, Keep, W233(5, 2, 6)),
     Fix(W211(5, 8, 4)), Fix(W211(5, 9, 8))], // 55
    [Fix(W211(5, 1, 2)), Fix(W211(5, 3, 2)), Fix(W31(5, 8)), Fix(W211(5, 9, 8))], // 56
    [Fix(W31(5, 2)), Fix(W211(5, 3, 2)), Fix(W31(5, 8)), Fix(W211(5, 9, 8))], // 57
    [Diff(4, 2, W31(5, 1), W611(5, 4, 2)), Diff(2, 6, W31(5, 3), W611(5, 2, 6)),
     Fix(W31(5, 8)), Fix(W211(5, 9, 8))], // 58
    [Diff(4, 2, Keep, W211(5, 4, 2)), Diff(2, 6, W31(5, 3), W611(5, 2, 6)),
     Fix(W31(5, 8)), Fix(W211(5, 9, 8))], // 59
    [Fix(W211(5, 1, 2)), Fix(W31(5, 2)), Fix(W31(5, 8)), Fix(W211(5, 9, 8))], // 60
    [Fix(W31(5, 2)), Fix(W31(5, 2)), Fix(W31(5, 8)), Fix(W211(5, 9, 8))], // 61
    [Fix(W31(5, 1)), Diff(2, 6, Keep, W211(5, 2, 6)), Fix(W31(5, 8)), Fix(W211(5, 9, 8))], // 62
    [Diff(4, 2, Keep, W1411(5, 4, 2)), Diff(2, 6, Keep, W211(5, 2, 6)), Fix(W31(5, 8)), Fix(W211(5, 9, 8))], // 63
    [Fix(W211(5, 4, 2)), Fix(W211(5, 2, 6)), Fix(W211(5, 7, 4)), Fix(W211(5, 9, 6))], // 64
    [Fix(W211(5, 4, 2)), Fix(W211(5, 2, 6)), Fix(W211(5, 7, 4)), Fix(W211(5, 9, 6))], // 65
    [Fix(W211(5, 1, 4)), Fix(W211(5, 3, 6)), Fix(W211(5, 7, 4)), Fix(W211(5, 9, 6))], // 66
    [Fix(W31(5, 4)), Fix(W211(5, 3, 6)), Fix(W211(5, 7, 4)), Fix(W211(5, 9, 6))], // 67
    [Fix(W211(5, 4, 2)), Fix(W211(5, 2, 6)), Fix(W211(5, 7, 4)), Fix(W211(5, 9, 6))], // 68
    [Fix(W211(5, 4, 2)), Fix(W211(5, 2, 6)), Fix(W211(5, 7, 4)), Fix(W211(5, 9, 6))], // 69
    [Fix(W211(5, 1, 4)), Fix(W31(5, 6)), Fix(W211(5, 7, 4)), Fix(W211(5, 9, 6))], // 70
    [Fix(W31(5, 4)), Fix(W31(5, 6)), Fix(W211(5, 7, 4)), Fix(W211(5, 9, 6))], // 71
    [Fix(W211(5, 1, 2)), Fix(W211(5, 2, 6)), Diff(8, 4, W31(5, 7), W211(5, 8, 4)), Fix(W211(5, 9, 6))], // 72
    [Diff(8, 4, W31(5, 2), W521(5, 4, 2)), Fix(W211(5, 2, 6)),
     Diff(8, 4, W31(5, 7), W233(5, 8, 4)), Fix(W211(5, 9, 6))], // 73
    [Diff(4, 2, Keep, W211(5, 4, 2)), Fix(W211(5, 3, 6)),
     Diff(8, 4, Keep, W211(5, 8, 4)), Fix(W211(5, 9, 6))], // 74
    [Diff(4, 2, Keep, W211(5, 4, 2)), Fix(W211(5, 3, 6)), Fix(W31(5, 7)), Fix(W211(5, 9, 6))], // 75
    [Fix(W211(5, 1, 2)), Fix(W211(5, 2, 6)), Diff(8, 4, W31(5, 7), W211(5, 8, 4)), Fix(W211(5, 9, 6))], // 76
    [Diff(8, 4, W31(5, 2), W521(5, 4, 2)), Fix(W211(5, 2, 6)),
     Diff(8, 4, W31(5, 7), W233(5, 8, 4)), Fix(W211(5, 9, 6))], // 77
    [Diff(4, 2, W31(5, 1), W611(5, 4, 2)), Fix(W31(5, 6)),
     Diff(8, 4, W31(5, 7), W611(5, 8, 4)), Fix(W211(5, 9, 6))], // 78
    [Diff(4, 2, Keep, W211(5, 4, 2)), Fix(W31(5, 6)),
     Diff(8, 4, W31(5, 7), W611(5, 8, 4)), Fix(W211(5, 9, 6))], // 79
    [Fix(W211(5, 4, 2)), Fix(W211(5, 3, 2)), Fix(W211(5, 7, 4)), Diff(6, 8, W31(5, 9), W211(5, 6, 8))], // 80
    [Fix(W211(5, 4, 2)), Fix(W211(5, 3, 2)), Fix(W211(5, 7, 4)), Diff(6, 8, W31(5, 9), W211(5, 6, 8))], // 81
    [Fix(W211(5, 1, 4)), Diff(2, 6, Keep, W211(5, 2, 6)),
     Fix(W211(5, 7, 4)), Diff(6, 8, Keep, W211(5, 6, 8))], // 82
    [Fix(W31(5, 4)), Diff(2, 6, W31(5, 3), W611(5, 2, 6)),
     Fix(W211(5, 7, 4)), Diff(6, 8, W31(5, 9), W611(5, 6, 8))], // 83
    [Fix(W211(5, 4, 2)), Diff(6, 8, W31(5, 2), W521(5, 6, 2)),
     Fix(W211(5, 7, 4)), Diff(6, 8, W31(5, 9), W233(5, 6, 8))], // 84
    [Fix(W211(5, 4, 2)), Diff(6, 8, W31(5, 2), W521(5, 6, 2)),
     Fix(W211(5, 7, 4)), Diff(6, 8, W31(5, 9), W233(5, 6, 8))], // 85
    [Fix(W211(5, 1, 4)), Diff(2, 6, Keep, W211(5, 2, 6)), Fix(W211(5, 7, 4)), Fix(W31(5, 9))], // 86
    [Fix(W31(5, 4)), Diff(2, 6, Keep, W211(5, 2, 6)),
     Fix(W211(5, 7, 4)), Diff(6, 8, W31(5, 9), W611(5, 6, 8))], // 87
    [Fix(W211(5, 1, 2)), Fix(W211(5, 3, 2)),
     Diff(8, 4, Keep, W211(5, 8, 4)), Diff(6, 8, Keep, W211(5, 6, 8))], // 88
    [Fix(W31(5, 2)), Fix(W211(5, 3, 2)),
     Diff(8, 4, W31(5, 7), W611(5, 8, 4)), Diff(6, 8, W31(5, 9), W611(5, 6, 8))], // 89
    [Diff(4, 2, W31(5, 1), W611(5, 4, 2)), Diff(2, 6, W31(5, 3), W611(5, 2, 6)),
     Diff(8, 4, W31(5, 7), W611(5, 8, 4)), Diff(6, 8, W31(5, 9), W611(5, 6, 8))], // 90
    [Diff(4, 2, Keep, W211(5, 4, 2)), Diff(2, 6, W31(5, 3), W611(5, 2, 6)),
     Diff(8, 4, W31(5, 7), W611(5, 8, 4)), Diff(6, 8, W31(5, 9), W611(5, 6, 8))], // 91
    [Fix(W211(5, 1, 2)), Fix(W31(5, 2)),
     Diff(8, 4, W31(5, 7), W611(5, 8, 4)), Diff(6, 8, W31(5, 9), W611(5, 6, 8))], // 92
    [Fix(W31(5, 2)), Fix(W31(5, 2)),
     Diff(8, 4, W31(5, 7), W611(5, 8, 4)), Diff(6, 8, W31(5, 9), W611(5, 6, 8))], // 93
    [Diff(4, 2, W31(5, 1), W611(5, 4, 2)), Diff(2, 6, Keep, W211(5, 2, 6)),
     Diff(8, 4, W31(5, 7), W611(5, 8, 4)), Diff(6, 8, W31(5, 9), W611(5, 6, 8))], // 94
    [Diff(4, 2, Keep, W211(5, 4, 2)), Diff(2, 6, Keep, W211(5, 2, 6)), Fix(W31(5, 7)), Fix(W31(5, 9))], // 95
    [Fix(W211(5, 4, 2)), Fix(W211(5, 2, 6)), Fix(W31(5, 4)), Fix(W211(5, 9, 6))], // 96
    [Fix(W211(5, 4, 2)), Fix(W211(5, 2, 6)), Fix(W31(5, 4)), Fix(W211(5, 9, 6))], // 97
    [Fix(W211(5, 1, 4)), Fix(W211(5, 3, 6)), Fix(W31(5, 4)), Fix(W211(5, 9, 6))], // 98
    [Fix(W31(5, 4)), Fix(W211(5, 3, 6)), Fix(W31(5, 4)), Fix(W211(5, 9, 6))], // 99
    [Fix(W211(5, 4, 2)), Fix(W211(5, 2, 6)), Fix(W31(5, 4)), Fix(W211(5, 9, 6))], // 100
    [Fix(W211(5, 4, 2)), Fix(W211(5, 2, 6)), Fix(W31(5, 4)), Fix(W211(5, 9, 6))], // 101
    [Fix(W211(5, 1, 4)), Fix(W31(5, 6)), Fix(W31(5, 4)), Fix(W211(5, 9, 6))], // 102
    [Fix(W31(5, 4)), Fix(W31(5, 6)), Fix(W31(5, 4)), Fix(W211(5, 9, 6))], // 103
    [Fix(W211(5, 1, 2)), Fix(W211(5, 2, 6)), Diff(8, 4, Keep, W211(5, 8, 4)), Fix(W211(5, 9, 6))], // 104
    [Diff(8, 4, W31(5, 2), W521(5, 4, 2)), Fix(W211(5, 2, 6)),
     Diff(8, 4, Keep, W233(5, 8, 4)), Fix(W211(5, 9, 6))], // 105
    [Fix(W31(5, 1)), Fix(W211(5, 3, 6)), Diff(8, 4, Keep, W211(5, 8, 4)), Fix(W211(5, 9, 6))], // 106
    [Diff(4, 2, Keep, W211(5, 4, 2)), Fix(W211(5, 3, 6)),
     Diff(8, 4, Keep, W211(5, 8, 4)), Fix(W211(5, 9, 6))], // 107
    [Fix(W211(5, 1, 2)), Fix(W211(5, 2, 6)), Diff(8, 4, Keep, W211(5, 8, 4)), Fix(W211(5, 9, 6))], // 108
    [Diff(8, 4, W31(5, 2), W521(5, 4, 2)), Fix(W211(5, 2, 6)),
     Diff(8, 4, Keep, W233(5, 8, 4)), Fix(W211(5, 9, 6))], // 109
    [Fix(W31(5, 1)), Fix(W31(5, 6)), Diff(8, 4, Keep, W211(5, 8, 4)), Fix(W211(5, 9, 6))], // 110
    [Diff(4, 2, Keep, W1411(5, 4, 2)), Fix(W31(5, 6)), Diff(8, 4, Keep, W211(5, 8, 4)), Fix(W211(5, 9, 6))], // 111
    [Fix(W211(5, 4, 2)), Fix(W211(5, 3, 2)),
     Diff(6, 8, W31(5, 4), W521(5, 8, 4)), Diff(6, 8, W31(5, 9), W233(5, 6, 8))], // 112
    [Fix(W211(5, 4, 2)), Fix(W211(5, 3, 2)),
     Diff(6, 8, W31(5, 4), W521(5, 8, 4)), Diff(6, 8, W31(5, 9), W233(5, 6, 8))], // 113
    [Fix(W211(5, 1, 4)), Diff(2, 6, W31(5, 3), W611(5, 2, 6)),
     Fix(W31(5, 4)), Diff(6, 8, W31(5, 9), W611(5, 6, 8))], // 114
    [Fix(W31(5, 4)), Diff(2, 6, W31(5, 3), W611(5, 2, 6)),
     Fix(W31(5, 4)), Diff(6, 8, W31(5, 9), W611(5, 6, 8))], // 115
    [Fix(W211(5, 4, 2)), Fix(W31(5, 2)), Fix(W31(5, 4)), Diff(6, 8, W31(5, 9), W611(5, 6, 8))], // 116
    [Fix(W211(5, 4, 2)), Fix(W31(5, 2)), Fix(W31(5, 4)), Diff(6, 8, W31(5, 9), W611(5, 6, 8))], // 117
    [Fix(W211(5, 1, 4)), Diff(2, 6, Keep, W211(5, 2, 6)), Fix(W31(5, 4)), Fix(W31(5, 9))], // 118
    [Diff(2, 6, W31(5, 4), W521(5, 2, 4)), Diff(2, 6, Keep, W233(5, 2, 6)), Fix(W31(5, 4)), Fix(W31(5, 9))], // 119
    [Fix(W211(5, 1, 2)), Fix(W211(5, 3, 2)), Diff(8, 4, Keep, W211(5, 8, 4)), Fix(W31(5, 9))], // 120
    [Fix(W31(5, 2)), Fix(W211(5, 3, 2)),
     Diff(8, 4, Keep, W211(5, 8, 4)), Diff(6, 8, W31(5, 9), W611(5, 6, 8))], // 121
    [Diff(4, 2, W31(5, 1), W611(5, 4, 2)), Diff(2, 6, W31(5, 3), W611(5, 2, 6)),
     Diff(8, 4, Keep, W211(5, 8, 4)), Diff(6, 8, W31(5, 9), W611(5, 6, 8))], // 122
    [Diff(4, 2, Keep, W211(5, 4, 2)), Fix(W31(5, 3)), Diff(8, 4, Keep, W211(5, 8, 4)), Fix(W31(5, 9))], // 123
    [Fix(W211(5, 1, 2)), Fix(W31(5, 2)), Diff(8, 4, Keep, W211(5, 8, 4)), Fix(W31(5, 9))], // 124
    [Diff(8, 4, W31(5, 2), W521(5, 4, 2)), Fix(W31(5, 2)), Diff(8, 4, Keep, W233(5, 8, 4)), Fix(W31(5, 9))], // 125
    [Fix(W31(5, 1)), Diff(2, 6, Keep, W211(5, 2, 6)), Diff(8, 4, Keep, W211(5, 8, 4)), Fix(W31(5, 9))], // 126
    [Diff(4, 2, Keep, W1411(5, 4, 2)), Diff(2, 6, Keep, W211(5, 2, 6)),
     Diff(8, 4, Keep, W211(5, 8, 4)), Fix(W31(5, 9))], // 127
    [Fix(W211(5, 4, 2)), Fix(W211(5, 2, 6)), Fix(W211(5, 8, 4)), Fix(W211(5, 6, 8))], // 128
    [Fix(W211(5, 4, 2)), Fix(W211(5, 2, 6)), Fix(W211(5, 8, 4)), Fix(W211(5, 6, 8))], // 129
    [Fix(W211(5, 1, 4)), Fix(W211(5, 3, 6)), Fix(W211(5, 8, 4)), Fix(W211(5, 6, 8))], // 130
    [Fix(W31(5, 4)), Fix(W211(5, 3, 6)), Fix(W211(5, 8, 4)), Fix(W211(5, 6, 8))], // 131
    [Fix(W211(5, 4, 2)), Fix(W211(5, 2, 6)), Fix(W211(5, 8, 4)), Fix(W211(5, 6, 8))], // 132
    [Fix(W211(5, 4, 2)), Fix(W211(5, 2, 6)), Fix(W211(5, 8, 4)), Fix(W211(5, 6, 8))], // 133
    [Fix(W211(5, 1, 4)), Fix(W31(5, 6)), Fix(W211(5, 8, 4)), Fix(W211(5, 6, 8))], // 134
    [Fix(W31(5, 4)), Fix(W31(5, 6)), Fix(W211(5, 8, 4)), Fix(W211(5, 6, 8))], // 135
    [Fix(W211(5, 1, 2)), Fix(W211(5, 2, 6)), Fix(W211(5, 7, 8)), Fix(W211(5, 6, 8))], // 136
    [Fix(W31(5, 2)), Fix(W211(5, 2, 6)), Fix(W211(5, 7, 8)), Fix(W211(5, 6, 8))], // 137
    [Diff(4, 2, W31(5, 1), W211(5, 4, 2)), Fix(W211(5, 3, 6)), Fix(W211(5, 7, 8)), Fix(W211(5, 6, 8))], // 138
    [Diff(4, 2, Keep, W211(5, 4, 2)), Fix(W211(5, 3, 6)), Fix(W211(5, 7, 8)), Fix(W211(5, 6, 8))], // 139
    [Fix(W211(5, 1, 2)), Fix(W211(5, 2, 6)), Fix(W211(5, 7, 8)), Fix(W211(5, 6, 8))], // 140
    [Fix(W31(5, 2)), Fix(W211(5, 2, 6)), Fix(W211(5, 7, 8)), Fix(W211(5, 6, 8))], // 141
    [Diff(4, 2, W31(5, 1), W233(5, 4, 2)), Diff(4, 2, W31(5, 6), W521(5, 2, 6)),
     Fix(W211(5, 7, 8)), Fix(W211(5, 6, 8))], // 142
    [Diff(4, 2, Keep, W233(5, 4, 2)), Diff(4, 2, W31(5, 6), W521(5, 2, 6)),
     Fix(W211(5, 7, 8)), Fix(W211(5, 6, 8))], // 143
    [Fix(W211(5, 4, 2)), Fix(W211(5, 3, 2)), Fix(W211(5, 8, 4)), Fix(W31(5, 8))], // 144
    [Fix(W211(5, 4, 2)), Fix(W211(5, 3, 2)), Fix(W211(5, 8, 4)), Fix(W31(5, 8))], // 145
    [Fix(W211(5, 1, 4)), Diff(2, 6, W31(5, 3), W233(5, 2, 6)),
     Fix(W211(5, 8, 4)), Diff(2, 6, W31(5, 8), W521(5, 6, 8))], // 146
    [Fix(W31(5, 4)), Diff(2, 6, W31(5, 3), W611(5, 2, 6)), Fix(W211(5, 8, 4)), Fix(W31(5, 8))], // 147
    [Fix(W211(5, 4, 2)), Fix(W31(5, 2)), Fix(W211(5, 8, 4)), Fix(W31(5, 8))], // 148
    [Fix(W211(5, 4, 2)), Fix(W31(5, 2)), Fix(W211(5, 8, 4)), Fix(W31(5, 8))], // 149
    [Fix(W211(5, 1, 4)), Diff(2, 6, Keep, W233(5, 2, 6)),
     Fix(W211(5, 8, 4)), Diff(2, 6, W31(5, 8), W521(5, 6, 8))], // 150
    [Fix(W31(5, 4)), Diff(2, 6, Keep, W1411(5, 2, 6)), Fix(W211(5, 8, 4)), Fix(W31(5, 8))], // 151
    [Fix(W211(5, 1, 2)), Fix(W211(5, 3, 2)), Fix(W211(5, 7, 8)), Fix(W31(5, 8))], // 152
    [Fix(W31(5, 2)), Fix(W211(5, 3, 2)), Fix(W211(5, 7, 8)), Fix(W31(5, 8))], // 153
    [Diff(4, 2, W31(5, 1), W611(5, 4, 2)), Diff(2, 6, W31(5, 3), W611(5, 2, 6)),
     Fix(W211(5, 7, 8)), Fix(W31(5, 8))], // 154
    [Diff(4, 2, Keep, W211(5, 4, 2)), Fix(W31(5, 3)), Fix(W211(5, 7, 8)), Fix(W31(5, 8))], // 155
    [Fix(W211(5, 1, 2)), Fix(W31(5, 2)), Fix(W211(5, 7, 8)), Fix(W31(5, 8))], // 156
    [Fix(W31(5, 2)), Fix(W31(5, 2)), Fix(W211(5, 7, 8)), Fix(W31(5, 8))], // 157
    [Diff(4, 2, W31(5, 1), W611(5, 4, 2)), Diff(2, 6, Keep, W211(5, 2, 6)),
     Fix(W211(5, 7, 8)), Fix(W31(5, 8))], // 158
    [Diff(4, 2, Keep, W211(5, 4, 2)), Diff(2, 6, Keep, W1411(5, 2, 6)), Fix(W211(5, 7, 8)), Fix(W31(5, 8))], // 159
    [Fix(W211(5, 4, 2)), Fix(W211(5, 2, 6)), Fix(W211(5, 8, 4)), Fix(W211(5, 6, 8))], // 160
    [Fix(W211(5, 4, 2)), Fix(W211(5, 2, 6)), Fix(W211(5, 8, 4)), Fix(W211(5, 6, 8))], // 161
    [Fix(W211(5, 1, 4)), Fix(W211(5, 3, 6)), Fix(W211(5, 8, 4)), Fix(W211(5, 6, 8))], // 162
    [Fix(W31(5, 4)), Fix(W211(5, 3, 6)), Fix(W211(5, 8, 4)), Fix(W211(5, 6, 8))], // 163
    [Fix(W211(5, 4, 2)), Fix(W211(5, 2, 6)), Fix(W211(5, 8, 4)), Fix(W211(5, 6, 8))], // 164
    [Fix(W211(5, 4, 2)), Fix(W211(5, 2, 6)), Fix(W211(5, 8, 4)), Fix(W211(5, 6, 8))], // 165
    [Fix(W211(5, 1, 4)), Fix(W31(5, 6)), Fix(W211(5, 8, 4)), Fix(W211(5, 6, 8))], // 166
    [Fix(W31(5, 4)), Fix(W31(5, 6)), Fix(W211(5, 8, 4)), Fix(W211(5, 6, 8))], // 167
    [Fix(W211(5, 1, 2)), Fix(W211(5, 2, 6)), Fix(W31(5, 8)), Fix(W211(5, 6, 8))], // 168
    [Fix(W31(5, 2)), Fix(W211(5, 2, 6)), Fix(W31(5, 8)), Fix(W211(5, 6, 8))], // 169
    [Diff(4, 2, W31(5, 1), W233(5, 4, 2)), Fix(W211(5, 3, 6)),
     Diff(4, 2, W31(5, 8), W521(5, 4, 8)), Fix(W211(5, 6, 8))], // 170
    [Diff(4, 2, Keep, W233(5, 4, 2)), Fix(W211(5, 3, 6)),
     Diff(4, 2, W31(5, 8), W521(5, 4, 8)), Fix(W211(5, 6, 8))], // 171
    [Fix(W211(5, 1, 2)), Fix(W211(5, 2, 6)), Fix(W31(5, 8)), Fix(W211(5, 6, 8))], // 172
    [Fix(W31(5, 2)), Fix(W211(5, 2, 6)), Fix(W31(5, 8)), Fix(W211(5, 6, 8))], // 173
    [Diff(4, 2, W31(5, 1), W611(5, 4, 2)), Fix(W31(5, 6)), Fix(W31(5, 8)), Fix(W211(5, 6, 8))], // 174
    [Diff(4, 2, Keep, W1411(5, 4, 2)), Fix(W31(5, 6)), Fix(W31(5, 8)), Fix(W211(5, 6, 8))], // 175
    [Fix(W211(5, 4, 2)), Fix(W211(5, 3, 2)), Fix(W211(5, 8, 4)), Fix(W31(5, 8))], // 176
    [Fix(W211(5, 4, 2)), Fix(W211(5, 3, 2)), Fix(W211(5, 8, 4)), Fix(W31(5, 8))], // 177
    [Fix(W211(5, 1, 4)), Diff(2, 6, W31(5, 3), W233(5, 2, 6)),
     Fix(W211(5, 8, 4)), Diff(2, 6, W31(5, 8), W521(5, 6, 8))], // 178
    [Fix(W31(5, 4)), Diff(2, 6, W31(5, 3), W611(5, 2, 6)), Fix(W211(5, 8, 4)), Fix(W31(5, 8))], // 179
    [Fix(W211(5, 4, 2)), Fix(W31(5, 2)), Fix(W211(5, 8, 4)), Fix(W31(5, 8))], // 180
    [Fix(W211(5, 4, 2)), Fix(W31(5, 2)), Fix(W211(5, 8, 4)), Fix(W31(5, 8))], // 181
    [Fix(W211(5, 1, 4)), Diff(2, 6, Keep, W233(5, 2, 6)),
     Fix(W211(5, 8, 4)), Diff(2, 6, W31(5, 8), W521(5, 6, 8))], // 182
    [Fix(W31(5, 4)), Diff(2, 6, Keep, W1411(5, 2, 6)), Fix(W211(5, 8, 4)), Fix(W31(5, 8))], // 183
    [Fix(W211(5, 1, 2)), Fix(W211(5, 3, 2)), Fix(W31(5, 8)), Fix(W31(5, 8))], // 184
    [Fix(W31(5, 2)), Fix(W211(5, 3, 2)), Fix(W31(5, 8)), Fix(W31(5, 8))], // 185
    [Diff(4, 2, W31(5, 1), W611(5, 4, 2)), Diff(2, 6, W31(5, 3), W611(5, 2, 6)),
     Fix(W31(5, 8)), Fix(W31(5, 8))], // 186
    [Diff(4, 2, Keep, W233(5, 4, 2)), Fix(W31(5, 3)), Diff(4, 2, W31(5, 8), W521(5, 4, 8)), Fix(W31(5, 8))], // 187
    [Fix(W211(5, 1, 2)), Fix(W31(5, 2)), Fix(W31(5, 8)), Fix(W31(5, 8))], // 188
    [Fix(W31(5, 2)), Fix(W31(5, 2)), Fix(W31(5, 8)), Fix(W31(5, 8))], // 189
    [Fix(W31(5, 1)), Diff(2, 6, Keep, W233(5, 2, 6)), Fix(W31(5, 8)), Diff(2, 6, W31(5, 8), W521(5, 6, 8))], // 190
    [Diff(4, 2, Keep, W1411(5, 4, 2)), Diff(2, 6, Keep, W1411(5, 2, 6)), Fix(W31(5, 8)), Fix(W31(5, 8))], // 191
    [Fix(W211(5, 4, 2)), Fix(W211(5, 2, 6)), Fix(W211(5, 7, 4)), Fix(W31(5, 6))], // 192
    [Fix(W211(5, 4, 2)), Fix(W211(5, 2, 6)), Fix(W211(5, 7, 4)), Fix(W31(5, 6))], // 193
    [Fix(W211(5, 1, 4)), Fix(W211(5, 3, 6)), Fix(W211(5, 7, 4)), Fix(W31(5, 6))], // 194
    [Fix(W31(5, 4)), Fix(W211(5, 3, 6)), Fix(W211(5, 7, 4)), Fix(W31(5, 6))], // 195
    [Fix(W211(5, 4, 2)), Fix(W211(5, 2, 6)), Fix(W211(5, 7, 4)), Fix(W31(5, 6))], // 196
    [Fix(W211(5, 4, 2)), Fix(W211(5, 2, 6)), Fix(W211(5, 7, 4)), Fix(W31(5, 6))], // 197
    [Fix(W211(5, 1, 4)), Fix(W31(5, 6)), Fix(W211(5, 7, 4)), Fix(W31(5, 6))], // 198
    [Fix(W31(5, 4)), Fix(W31(5, 6)), Fix(W211(5, 7, 4)), Fix(W31(5, 6))], // 199
    [Fix(W211(5, 1, 2)), Fix(W211(5, 2, 6)),
     Diff(8, 4, W31(5, 7), W233(5, 8, 4)), Diff(8, 4, W31(5, 6), W521(5, 8, 6))], // 200
    [Fix(W31(5, 2)), Fix(W211(5, 2, 6)), Diff(8, 4, W31(5, 7), W611(5, 8, 4)), Fix(W31(5, 6))], // 201
    [Diff(4, 2, W31(5, 1), W611(5, 4, 2)), Fix(W211(5, 3, 6)),
     Diff(8, 4, W31(5, 7), W611(5, 8, 4)), Fix(W31(5, 6))], // 202
    [Diff(4, 2, Keep, W211(5, 4, 2)), Fix(W211(5, 3, 6)), Fix(W31(5, 7)), Fix(W31(5, 6))], // 203
    [Fix(W211(5, 1, 2)), Fix(W211(5, 2, 6)),
     Diff(8, 4, W31(5, 7), W233(5, 8, 4)), Diff(8, 4, W31(5, 6), W521(5, 8, 6))], // 204
    [Fix(W31(5, 2)), Fix(W211(5, 2, 6)), Diff(8, 4, W31(5, 7), W611(5, 8, 4)), Fix(W31(5, 6))], // 205
    [Diff(4, 2, W31(5, 1), W611(5, 4, 2)), Fix(W31(5, 6)),
     Diff(8, 4, W31(5, 7), W611(5, 8, 4)), Fix(W31(5, 6))], // 206
    [Diff(4, 2, Keep, W233(5, 4, 2)), Diff(4, 2, W31(5, 6), W521(5, 2, 6)), Fix(W31(5, 7)), Fix(W31(5, 6))], // 207
    [Fix(W211(5, 4, 2)), Fix(W211(5, 3, 2)), Fix(W211(5, 7, 4)), Diff(6, 8, Keep, W211(5, 6, 8))], // 208
    [Fix(W211(5, 4, 2)), Fix(W211(5, 3, 2)), Fix(W211(5, 7, 4)), Diff(6, 8, Keep, W211(5, 6, 8))], // 209
    [Fix(W211(5, 1, 4)), Fix(W31(5, 3)), Fix(W211(5, 7, 4)), Diff(6, 8, Keep, W211(5, 6, 8))], // 210
    [Fix(W31(5, 4)), Fix(W31(5, 3)), Fix(W211(5, 7, 4)), Diff(6, 8, Keep, W211(5, 6, 8))], // 211
    [Fix(W211(5, 4, 2)), Diff(6, 8, W31(5, 2), W521(5, 6, 2)),
     Fix(W211(5, 7, 4)), Diff(6, 8, Keep, W233(5, 6, 8))], // 212
    [Fix(W211(5, 4, 2)), Diff(6, 8, W31(5, 2), W521(5, 6, 2)),
     Fix(W211(5, 7, 4)), Diff(6, 8, Keep, W233(5, 6, 8))], // 213
    [Fix(W211(5, 1, 4)), Diff(2, 6, Keep, W211(5, 2, 6)),
     Fix(W211(5, 7, 4)), Diff(6, 8, Keep, W211(5, 6, 8))], // 214
    [Fix(W31(5, 4)), Diff(2, 6, Keep, W1411(5, 2, 6)), Fix(W211(5, 7, 4)), Diff(6, 8, Keep, W211(5, 6, 8))], // 215
    [Fix(W211(5, 1, 2)), Fix(W211(5, 3, 2)), Fix(W31(5, 7)), Diff(6, 8, Keep, W211(5, 6, 8))], // 216
    [Fix(W31(5, 2)), Fix(W211(5, 3, 2)), Fix(W31(5, 7)), Diff(6, 8, Keep, W211(5, 6, 8))], // 217
    [Diff(4, 2, W31(5, 1), W611(5, 4, 2)), Diff(2, 6, W31(5, 3), W611(5, 2, 6)),
     Diff(8, 4, W31(5, 7), W611(5, 8, 4)), Diff(6, 8, Keep, W211(5, 6, 8))], // 218
    [Diff(4, 2, Keep, W211(5, 4, 2)), Fix(W31(5, 3)), Fix(W31(5, 7)), Diff(6, 8, Keep, W211(5, 6, 8))], // 219
    [Fix(W211(5, 1, 2)), Fix(W31(5, 2)),
     Diff(8, 4, W31(5, 7), W611(5, 8, 4)), Diff(6, 8, Keep, W211(5, 6, 8))], // 220
    [Fix(W31(5, 2)), Diff(6, 8, W31(5, 2), W521(5, 6, 2)), Fix(W31(5, 7)), Diff(6, 8, Keep, W233(5, 6, 8))], // 221
    [Fix(W31(5, 1)), Diff(2, 6, Keep, W211(5, 2, 6)), Fix(W31(5, 7)), Diff(6, 8, Keep, W211(5, 6, 8))], // 222
    [Diff(4, 2, Keep, W211(5, 4, 2)), Diff(2, 6, Keep, W1411(5, 2, 6)),
     Fix(W31(5, 7)), Diff(6, 8, Keep, W211(5, 6, 8))], // 223
    [Fix(W211(5, 4, 2)), Fix(W211(5, 2, 6)), Fix(W31(5, 4)), Fix(W31(5, 6))], // 224
    [Fix(W211(5, 4, 2)), Fix(W211(5, 2, 6)), Fix(W31(5, 4)), Fix(W31(5, 6))], // 225
    [Fix(W211(5, 1, 4)), Fix(W211(5, 3, 6)), Fix(W31(5, 4)), Fix(W31(5, 6))], // 226
    [Fix(W31(5, 4)), Fix(W211(5, 3, 6)), Fix(W31(5, 4)), Fix(W31(5, 6))], // 227
    [Fix(W211(5, 4, 2)), Fix(W211(5, 2, 6)), Fix(W31(5, 4)), Fix(W31(5, 6))], // 228
    [Fix(W211(5, 4, 2)), Fix(W211(5, 2, 6)), Fix(W31(5, 4)), Fix(W31(5, 6))], // 229
    [Fix(W211(5, 1, 4)), Fix(W31(5, 6)), Fix(W31(5, 4)), Fix(W31(5, 6))], // 230
    [Fix(W31(5, 4)), Fix(W31(5, 6)), Fix(W31(5, 4)), Fix(W31(5, 6))], // 231
    [Fix(W211(5, 1, 2)), Fix(W211(5, 2, 6)),
     Diff(8, 4, Keep, W233(5, 8, 4)), Diff(8, 4, W31(5, 6), W521(5, 8, 6))], // 232
    [Fix(W31(5, 2)), Fix(W211(5, 2, 6)), Diff(8, 4, Keep, W1411(5, 8, 4)), Fix(W31(5, 6))], // 233
    [Diff(4, 2, W31(5, 1), W611(5, 4, 2)), Fix(W211(5, 3, 6)),
     Diff(8, 4, Keep, W211(5, 8, 4)), Fix(W31(5, 6))], // 234
    [Diff(4, 2, Keep, W211(5, 4, 2)), Fix(W211(5, 3, 6)), Diff(8, 4, Keep, W1411(5, 8, 4)), Fix(W31(5, 6))], // 235
    [Fix(W211(5, 1, 2)), Fix(W211(5, 2, 6)),
     Diff(8, 4, Keep, W233(5, 8, 4)), Diff(8, 4, W31(5, 6), W521(5, 8, 6))], // 236
    [Fix(W31(5, 2)), Fix(W211(5, 2, 6)), Diff(8, 4, Keep, W1411(5, 8, 4)), Fix(W31(5, 6))], // 237
    [Fix(W31(5, 1)), Fix(W31(5, 6)), Diff(8, 4, Keep, W233(5, 8, 4)), Diff(8, 4, W31(5, 6), W521(5, 8, 6))], // 238
    [Diff(4, 2, Keep, W1411(5, 4, 2)), Fix(W31(5, 6)), Diff(8, 4, Keep, W1411(5, 8, 4)), Fix(W31(5, 6))], // 239
    [Fix(W211(5, 4, 2)), Fix(W211(5, 3, 2)),
     Diff(6, 8, W31(5, 4), W521(5, 8, 4)), Diff(6, 8, Keep, W233(5, 6, 8))], // 240
    [Fix(W211(5, 4, 2)), Fix(W211(5, 3, 2)),
     Diff(6, 8, W31(5, 4), W521(5, 8, 4)), Diff(6, 8, Keep, W233(5, 6, 8))], // 241
    [Fix(W211(5, 1, 4)), Diff(2, 6, W31(5, 3), W611(5, 2, 6)),
     Fix(W31(5, 4)), Diff(6, 8, Keep, W211(5, 6, 8))], // 242
    [Fix(W31(5, 4)), Fix(W31(5, 3)), Diff(6, 8, W31(5, 4), W521(5, 8, 4)), Diff(6, 8, Keep, W233(5, 6, 8))], // 243
    [Fix(W211(5, 4, 2)), Fix(W31(5, 2)), Fix(W31(5, 4)), Diff(6, 8, Keep, W1411(5, 6, 8))], // 244
    [Fix(W211(5, 4, 2)), Fix(W31(5, 2)), Fix(W31(5, 4)), Diff(6, 8, Keep, W1411(5, 6, 8))], // 245
    [Fix(W211(5, 1, 4)), Diff(2, 6, Keep, W211(5, 2, 6)), Fix(W31(5, 4)), Diff(6, 8, Keep, W1411(5, 6, 8))], // 246
    [Fix(W31(5, 4)), Diff(2, 6, Keep, W1411(5, 2, 6)), Fix(W31(5, 4)), Diff(6, 8, Keep, W1411(5, 6, 8))], // 247
    [Fix(W211(5, 1, 2)), Fix(W211(5, 3, 2)),
     Diff(8, 4, Keep, W211(5, 8, 4)), Diff(6, 8, Keep, W211(5, 6, 8))], // 248
    [Fix(W31(5, 2)), Fix(W211(5, 3, 2)), Diff(8, 4, Keep, W1411(5, 8, 4)), Diff(6, 8, Keep, W211(5, 6, 8))], // 249
    [Fix(W31(5, 1)), Fix(W31(5, 3)), Diff(8, 4, Keep, W211(5, 8, 4)), Diff(6, 8, Keep, W211(5, 6, 8))], // 250
    [Diff(4, 2, Keep, W211(5, 4, 2)), Fix(W31(5, 3)),
     Diff(8, 4, Keep, W1411(5, 8, 4)), Diff(6, 8, Keep, W211(5, 6, 8))], // 251
    [Fix(W211(5, 1, 2)), Fix(W31(5, 2)), Diff(8, 4, Keep, W211(5, 8, 4)), Diff(6, 8, Keep, W1411(5, 6, 8))], // 252
    [Fix(W31(5, 2)), Fix(W31(5, 2)), Diff(8, 4, Keep, W1411(5, 8, 4)), Diff(6, 8, Keep, W1411(5, 6, 8))], // 253
    [Fix(W31(5, 1)), Diff(2, 6, Keep, W211(5, 2, 6)),
     Diff(8, 4, Keep, W211(5, 8, 4)), Diff(6, 8, Keep, W1411(5, 6, 8))], // 254
    [Diff(4, 2, Keep, W1411(5, 4, 2)), Diff(2, 6, Keep, W1411(5, 2, 6)),
     Diff(8, 4, Keep, W1411(5, 8, 4)), Diff(6, 8, Keep, W1411(5, 6, 8))], // 255
];

#[cfg(test)]
mod tests {
    use super::super::test_support::{derive_table, signature};
    use super::*;

    /// One canonical recipe row per symmetry class of the pattern masks.
    #[rustfmt::skip]
    const HQ2X_CLASSES: [(u8, [CellRule; 4]); 51] = [
        (0, [Fix(W211(5, 4, 2)), Fix(W211(5, 2, 6)), Fix(W211(5, 8, 4)), Fix(W211(5, 6, 8))]),
        (1, [Fix(W211(5, 4, 2)), Fix(W211(5, 2, 6)), Fix(W211(5, 8, 4)), Fix(W211(5, 6, 8))]),
        (2, [Fix(W211(5, 1, 4)), Fix(W211(5, 3, 6)), Fix(W211(5, 8, 4)), Fix(W211(5, 6, 8))]),
        (3, [Fix(W31(5, 4)), Fix(W211(5, 3, 6)), Fix(W211(5, 8, 4)), Fix(W211(5, 6, 8))]),
        (5, [Fix(W211(5, 4, 2)), Fix(W211(5, 2, 6)), Fix(W211(5, 8, 4)), Fix(W211(5, 6, 8))]),
        (7, [Fix(W31(5, 4)), Fix(W31(5, 6)), Fix(W211(5, 8, 4)), Fix(W211(5, 6, 8))]),
        (10, [Diff(4, 2, W31(5, 1), W211(5, 4, 2)), Fix(W211(5, 3, 6)), Fix(W211(5, 7, 8)), Fix(W211(5, 6, 8))]),
        (11, [Diff(4, 2, Keep, W211(5, 4, 2)), Fix(W211(5, 3, 6)), Fix(W211(5, 7, 8)), Fix(W211(5, 6, 8))]),
        (12, [Fix(W211(5, 1, 2)), Fix(W211(5, 2, 6)), Fix(W211(5, 7, 8)), Fix(W211(5, 6, 8))]),
        (13, [Fix(W31(5, 2)), Fix(W211(5, 2, 6)), Fix(W211(5, 7, 8)), Fix(W211(5, 6, 8))]),
        (14,
            [Diff(4, 2, W31(5, 1), W233(5, 4, 2)), Diff(4, 2, W31(5, 6), W521(5, 2, 6)),
             Fix(W211(5, 7, 8)), Fix(W211(5, 6, 8))]),
        (15,
            [Diff(4, 2, Keep, W233(5, 4, 2)), Diff(4, 2, W31(5, 6), W521(5, 2, 6)),
             Fix(W211(5, 7, 8)), Fix(W211(5, 6, 8))]),
        (24, [Fix(W211(5, 1, 2)), Fix(W211(5, 3, 2)), Fix(W211(5, 7, 8)), Fix(W211(5, 9, 8))]),
        (25, [Fix(W31(5, 2)), Fix(W211(5, 3, 2)), Fix(W211(5, 7, 8)), Fix(W211(5, 9, 8))]),
        (26,
            [Diff(4, 2, Keep, W211(5, 4, 2)), Diff(2, 6, Keep, W211(5, 2, 6)),
             Fix(W211(5, 7, 8)), Fix(W211(5, 9, 8))]),
        (27, [Diff(4, 2, Keep, W211(5, 4, 2)), Fix(W31(5, 3)), Fix(W211(5, 7, 8)), Fix(W211(5, 9, 8))]),
        (29, [Fix(W31(5, 2)), Fix(W31(5, 2)), Fix(W211(5, 7, 8)), Fix(W211(5, 9, 8))]),
        (31,
            [Diff(4, 2, Keep, W211(5, 4, 2)), Diff(2, 6, Keep, W211(5, 2, 6)),
             Fix(W211(5, 7, 8)), Fix(W211(5, 9, 8))]),
        (36, [Fix(W211(5, 4, 2)), Fix(W211(5, 2, 6)), Fix(W211(5, 8, 4)), Fix(W211(5, 6, 8))]),
        (37, [Fix(W211(5, 4, 2)), Fix(W211(5, 2, 6)), Fix(W211(5, 8, 4)), Fix(W211(5, 6, 8))]),
        (38, [Fix(W211(5, 1, 4)), Fix(W31(5, 6)), Fix(W211(5, 8, 4)), Fix(W211(5, 6, 8))]),
        (39, [Fix(W31(5, 4)), Fix(W31(5, 6)), Fix(W211(5, 8, 4)), Fix(W211(5, 6, 8))]),
        (46, [Diff(4, 2, W31(5, 1), W611(5, 4, 2)), Fix(W31(5, 6)), Fix(W31(5, 8)), Fix(W211(5, 6, 8))]),
        (47, [Diff(4, 2, Keep, W1411(5, 4, 2)), Fix(W31(5, 6)), Fix(W31(5, 8)), Fix(W211(5, 6, 8))]),
        (49, [Fix(W211(5, 4, 2)), Fix(W211(5, 3, 2)), Fix(W211(5, 8, 4)), Fix(W211(5, 9, 8))]),
        (50, [Fix(W211(5, 1, 4)), Diff(2, 6, W31(5, 3), W211(5, 2, 6)), Fix(W211(5, 8, 4)), Fix(W211(5, 9, 8))]),
        (51,
            [Diff(2, 6, W31(5, 4), W521(5, 2, 4)), Diff(2, 6, W31(5, 3), W233(5, 2, 6)),
             Fix(W211(5, 8, 4)), Fix(W211(5, 9, 8))]),
        (53, [Fix(W211(5, 4, 2)), Fix(W31(5, 2)), Fix(W211(5, 8, 4)), Fix(W211(5, 9, 8))]),
        (54, [Fix(W211(5, 1, 4)), Diff(2, 6, Keep, W211(5, 2, 6)), Fix(W211(5, 8, 4)), Fix(W211(5, 9, 8))]),
        (55,
            [Diff(2, 6, W31(5, 4), W521(5, 2, 4)), Diff(2, 6, Keep, W233(5, 2, 6)),
             Fix(W211(5, 8, 4)), Fix(W211(5, 9, 8))]),
        (57, [Fix(W31(5, 2)), Fix(W211(5, 3, 2)), Fix(W31(5, 8)), Fix(W211(5, 9, 8))]),
        (58,
            [Diff(4, 2, W31(5, 1), W611(5, 4, 2)), Diff(2, 6, W31(5, 3), W611(5, 2, 6)),
             Fix(W31(5, 8)), Fix(W211(5, 9, 8))]),
        (59,
            [Diff(4, 2, Keep, W211(5, 4, 2)), Diff(2, 6, W31(5, 3), W611(5, 2, 6)),
             Fix(W31(5, 8)), Fix(W211(5, 9, 8))]),
        (60, [Fix(W211(5, 1, 2)), Fix(W31(5, 2)), Fix(W31(5, 8)), Fix(W211(5, 9, 8))]),
        (61, [Fix(W31(5, 2)), Fix(W31(5, 2)), Fix(W31(5, 8)), Fix(W211(5, 9, 8))]),
        (62, [Fix(W31(5, 1)), Diff(2, 6, Keep, W211(5, 2, 6)), Fix(W31(5, 8)), Fix(W211(5, 9, 8))]),
        (63,
            [Diff(4, 2, Keep, W1411(5, 4, 2)), Diff(2, 6, Keep, W211(5, 2, 6)),
             Fix(W31(5, 8)), Fix(W211(5, 9, 8))]),
        (90,
            [Diff(4, 2, W31(5, 1), W611(5, 4, 2)), Diff(2, 6, W31(5, 3), W611(5, 2, 6)),
             Diff(8, 4, W31(5, 7), W611(5, 8, 4)), Diff(6, 8, W31(5, 9), W611(5, 6, 8))]),
        (91,
            [Diff(4, 2, Keep, W211(5, 4, 2)), Diff(2, 6, W31(5, 3), W611(5, 2, 6)),
             Diff(8, 4, W31(5, 7), W611(5, 8, 4)), Diff(6, 8, W31(5, 9), W611(5, 6, 8))]),
        (93,
            [Fix(W31(5, 2)), Fix(W31(5, 2)),
             Diff(8, 4, W31(5, 7), W611(5, 8, 4)), Diff(6, 8, W31(5, 9), W611(5, 6, 8))]),
        (95, [Diff(4, 2, Keep, W211(5, 4, 2)), Diff(2, 6, Keep, W211(5, 2, 6)), Fix(W31(5, 7)), Fix(W31(5, 9))]),
        (117, [Fix(W211(5, 4, 2)), Fix(W31(5, 2)), Fix(W31(5, 4)), Diff(6, 8, W31(5, 9), W611(5, 6, 8))]),
        (119,
            [Diff(2, 6, W31(5, 4), W521(5, 2, 4)), Diff(2, 6, Keep, W233(5, 2, 6)),
             Fix(W31(5, 4)), Fix(W31(5, 9))]),
        (126, [Fix(W31(5, 1)), Diff(2, 6, Keep, W211(5, 2, 6)), Diff(8, 4, Keep, W211(5, 8, 4)), Fix(W31(5, 9))]),
        (127,
            [Diff(4, 2, Keep, W1411(5, 4, 2)), Diff(2, 6, Keep, W211(5, 2, 6)),
             Diff(8, 4, Keep, W211(5, 8, 4)), Fix(W31(5, 9))]),
        (165, [Fix(W211(5, 4, 2)), Fix(W211(5, 2, 6)), Fix(W211(5, 8, 4)), Fix(W211(5, 6, 8))]),
        (167, [Fix(W31(5, 4)), Fix(W31(5, 6)), Fix(W211(5, 8, 4)), Fix(W211(5, 6, 8))]),
        (175, [Diff(4, 2, Keep, W1411(5, 4, 2)), Fix(W31(5, 6)), Fix(W31(5, 8)), Fix(W211(5, 6, 8))]),
        (189, [Fix(W31(5, 2)), Fix(W31(5, 2)), Fix(W31(5, 8)), Fix(W31(5, 8))]),
        (191, [Diff(4, 2, Keep, W1411(5, 4, 2)), Diff(2, 6, Keep, W1411(5, 2, 6)), Fix(W31(5, 8)), Fix(W31(5, 8))]),
        (255,
            [Diff(4, 2, Keep, W1411(5, 4, 2)), Diff(2, 6, Keep, W1411(5, 2, 6)),
             Diff(8, 4, Keep, W1411(5, 8, 4)), Diff(6, 8, Keep, W1411(5, 6, 8))]),
    ];

    #[test]
    fn test_rule_table_matches_class_derivation() {
        let derived = derive_table(&HQ2X_CLASSES, 2);
        for p in 0..256 {
            for k in 0..4 {
                assert_eq!(
                    signature(HQ2X_RULES[p][k]),
                    signature(derived[p][k]),
                    "pattern {} cell {}",
                    p,
                    k
                );
            }
        }
    }

    #[test]
    fn test_output_length() {
        let src = vec![0u32; 7 * 5];
        let out = Hq2x.scale(&src, 7, 5).unwrap();
        assert_eq!(out.len(), 14 * 10);
    }

    #[test]
    fn test_uniform_image_stays_uniform() {
        let src = vec![0x0012_3456u32; 4 * 4];
        let out = Hq2x.scale(&src, 4, 4).unwrap();
        // Every sub-pixel is the center color after the 5/6/5 round trip
        assert!(out.iter().all(|&p| p == 0x0010_3450));
    }

    #[test]
    fn test_single_pixel_image_replicates_center() {
        let out = Hq2x.scale(&[0x00FF_FFFF], 1, 1).unwrap();
        assert_eq!(out, vec![0x00F8_FCF8; 4]);
    }

    #[test]
    fn test_isolated_dot_blends_only_its_own_block() {
        // Black dot on white: the dot pixel sees pattern 255, and the
        // secondary checks between its white neighbors all come back equal,
        // so each corner blends center with two orthogonals at 14:1:1.
        let w = 0x00FF_FFFF;
        let src = vec![w, w, w, w, 0, w, w, w, w];
        let out = Hq2x.scale(&src, 3, 3).unwrap();

        let white = 0x00F8_FCF8;
        let blended = 0x001F_1F1F;
        for y in 0..6 {
            for x in 0..6 {
                let expected = if (2..4).contains(&y) && (2..4).contains(&x) {
                    blended
                } else {
                    white
                };
                assert_eq!(out[y * 6 + x], expected, "cell ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_rejects_invalid_input() {
        assert!(matches!(
            Hq2x.scale(&[], 0, 3),
            Err(FilterError::InvalidDimensions)
        ));
        assert!(matches!(
            Hq2x.scale(&[0; 5], 2, 3),
            Err(FilterError::BufferSizeMismatch {
                expected: 6,
                actual: 5
            })
        ));
    }
}
