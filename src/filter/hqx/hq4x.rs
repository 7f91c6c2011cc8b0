// Hq4x filter - 4x edge-detecting interpolation
//
// Same classification as hq2x, with a 4x4 destination block per source
// pixel. Each pattern row lists 16 cell recipes; corner quadrants mirror
// each other under the symmetry maps the tests close over.

use super::CellRule::{self, Diff, Fix};
use super::{scale_with_rules, BlendOp::*};
use crate::filter::{check_scale_args, Filter, FilterError, OutputFormat};

/// 4x edge-detecting interpolation.
pub struct Hq4x;

impl Filter for Hq4x {
    fn scale_factor(&self) -> usize {
        4
    }

    fn output_format(&self) -> OutputFormat {
        OutputFormat::Rgb
    }

    fn scale(&self, src: &[u32], width: usize, height: usize) -> Result<Vec<u32>, FilterError> {
        check_scale_args(src, width, height, 4)?;
        Ok(scale_with_rules::<4, 16>(&HQ4X_RULES, src, width, height))
    }
}

/// Per-pattern recipes for the 4x4 destination block in row-major order.
#[rustfmt::skip]
static HQ4X_RULES: [[CellRule; 16]; 256] = [
    // 0
    [Fix(W211(5, 2, 4)), Fix(W521(5, 2, 4)), Fix(W521(5, 2, 6)), Fix(W211(5, 2, 6)),
     Fix(W521(5, 4, 2)), Fix(W611(5, 4, 2)), Fix(W611(5, 6, 2)), Fix(W521(5, 6, 2)),
     Fix(W521(5, 4, 8)), Fix(W611(5, 4, 8)), Fix(W611(5, 6, 8)), Fix(W521(5, 6, 8)),
     Fix(W211(5, 8, 4)), Fix(W521(5, 8, 4)), Fix(W521(5, 8, 6)), Fix(W211(5, 8, 6))],
    // 1
    [Fix(W211(5, 2, 4)), Fix(W521(5, 2, 4)), Fix(W521(5, 2, 6)), Fix(W211(5, 2, 6)),
     Fix(W521(5, 4, 2)), Fix(W611(5, 4, 2)), Fix(W611(5, 6, 2)), Fix(W521(5, 6, 2)),
     Fix(W521(5, 4, 8)), Fix(W611(5, 4, 8)), Fix(W611(5, 6, 8)), Fix(W521(5, 6, 8)),
     Fix(W211(5, 8, 4)), Fix(W521(5, 8, 4)), Fix(W521(5, 8, 6)), Fix(W211(5, 8, 6))],
    // 2
    [Fix(W53(5, 1)), Fix(W31(5, 1)), Fix(W31(5, 3)), Fix(W53(5, 3)),
     Fix(W521(5, 4, 1)), Fix(W71(5, 1)), Fix(W71(5, 3)), Fix(W521(5, 6, 3)),
     Fix(W521(5, 4, 8)), Fix(W611(5, 4, 8)), Fix(W611(5, 6, 8)), Fix(W521(5, 6, 8)),
     Fix(W211(5, 8, 4)), Fix(W521(5, 8, 4)), Fix(W521(5, 8, 6)), Fix(W211(5, 8, 6))],
    // 3
    [Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(W31(5, 3)), Fix(W53(5, 3)),
     Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(W71(5, 3)), Fix(W521(5, 6, 3)),
     Fix(W521(5, 4, 8)), Fix(W611(5, 4, 8)), Fix(W611(5, 6, 8)), Fix(W521(5, 6, 8)),
     Fix(W211(5, 8, 4)), Fix(W521(5, 8, 4)), Fix(W521(5, 8, 6)), Fix(W211(5, 8, 6))],
    // 4
    [Fix(W211(5, 2, 4)), Fix(W521(5, 2, 4)), Fix(W521(5, 2, 6)), Fix(W211(5, 2, 6)),
     Fix(W521(5, 4, 2)), Fix(W611(5, 4, 2)), Fix(W611(5, 6, 2)), Fix(W521(5, 6, 2)),
     Fix(W521(5, 4, 8)), Fix(W611(5, 4, 8)), Fix(W611(5, 6, 8)), Fix(W521(5, 6, 8)),
     Fix(W211(5, 8, 4)), Fix(W521(5, 8, 4)), Fix(W521(5, 8, 6)), Fix(W211(5, 8, 6))],
    // 5
    [Fix(W211(5, 2, 4)), Fix(W521(5, 2, 4)), Fix(W521(5, 2, 6)), Fix(W211(5, 2, 6)),
     Fix(W521(5, 4, 2)), Fix(W611(5, 4, 2)), Fix(W611(5, 6, 2)), Fix(W521(5, 6, 2)),
     Fix(W521(5, 4, 8)), Fix(W611(5, 4, 8)), Fix(W611(5, 6, 8)), Fix(W521(5, 6, 8)),
     Fix(W211(5, 8, 4)), Fix(W521(5, 8, 4)), Fix(W521(5, 8, 6)), Fix(W211(5, 8, 6))],
    // 6
    [Fix(W53(5, 1)), Fix(W31(5, 1)), Fix(W71(5, 6)), Fix(W53(5, 6)),
     Fix(W521(5, 4, 1)), Fix(W71(5, 1)), Fix(W71(5, 6)), Fix(W53(5, 6)),
     Fix(W521(5, 4, 8)), Fix(W611(5, 4, 8)), Fix(W611(5, 6, 8)), Fix(W521(5, 6, 8)),
     Fix(W211(5, 8, 4)), Fix(W521(5, 8, 4)), Fix(W521(5, 8, 6)), Fix(W211(5, 8, 6))],
    // 7
    [Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(W71(5, 6)), Fix(W53(5, 6)),
     Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(W71(5, 6)), Fix(W53(5, 6)),
     Fix(W521(5, 4, 8)), Fix(W611(5, 4, 8)), Fix(W611(5, 6, 8)), Fix(W521(5, 6, 8)),
     Fix(W211(5, 8, 4)), Fix(W521(5, 8, 4)), Fix(W521(5, 8, 6)), Fix(W211(5, 8, 6))],
    // 8
    [Fix(W53(5, 1)), Fix(W521(5, 2, 1)), Fix(W521(5, 2, 6)), Fix(W211(5, 6, 2)),
     Fix(W31(5, 1)), Fix(W71(5, 1)), Fix(W611(5, 2, 6)), Fix(W521(5, 6, 2)),
     Fix(W31(5, 7)), Fix(W71(5, 7)), Fix(W611(5, 8, 6)), Fix(W521(5, 6, 8)),
     Fix(W53(5, 7)), Fix(W521(5, 8, 7)), Fix(W521(5, 8, 6)), Fix(W211(5, 6, 8))],
    // 9
    [Fix(W53(5, 2)), Fix(W53(5, 2)), Fix(W521(5, 2, 6)), Fix(W211(5, 6, 2)),
     Fix(W71(5, 2)), Fix(W71(5, 2)), Fix(W611(5, 2, 6)), Fix(W521(5, 6, 2)),
     Fix(W31(5, 7)), Fix(W71(5, 7)), Fix(W611(5, 8, 6)), Fix(W521(5, 6, 8)),
     Fix(W53(5, 7)), Fix(W521(5, 8, 7)), Fix(W521(5, 8, 6)), Fix(W211(5, 6, 8))],
    // 10
    [Diff(4, 2, W53(5, 1), W11(2, 4)), Diff(4, 2, W31(5, 1), W11(2, 5)), Fix(W31(5, 3)), Fix(W53(5, 3)),
     Diff(4, 2, W31(5, 1), W11(4, 5)), Diff(4, 2, W71(5, 1), Keep), Fix(W71(5, 3)), Fix(W521(5, 6, 3)),
     Fix(W31(5, 7)), Fix(W71(5, 7)), Fix(W611(5, 6, 8)), Fix(W521(5, 6, 8)),
     Fix(W53(5, 7)), Fix(W521(5, 8, 7)), Fix(W521(5, 8, 6)), Fix(W211(5, 8, 6))],
    // 11
    [Diff(4, 2, Keep, W11(2, 4)), Diff(4, 2, Keep, W11(2, 5)), Fix(W31(5, 3)), Fix(W53(5, 3)),
     Diff(4, 2, Keep, W11(4, 5)), Diff(4, 2, Keep, Keep), Fix(W71(5, 3)), Fix(W521(5, 6, 3)),
     Fix(W31(5, 7)), Fix(W71(5, 7)), Fix(W611(5, 6, 8)), Fix(W521(5, 6, 8)),
     Fix(W53(5, 7)), Fix(W521(5, 8, 7)), Fix(W521(5, 8, 6)), Fix(W211(5, 8, 6))],
    // 12
    [Fix(W53(5, 1)), Fix(W521(5, 2, 1)), Fix(W521(5, 2, 6)), Fix(W211(5, 6, 2)),
     Fix(W31(5, 1)), Fix(W71(5, 1)), Fix(W611(5, 2, 6)), Fix(W521(5, 6, 2)),
     Fix(W31(5, 7)), Fix(W71(5, 7)), Fix(W611(5, 8, 6)), Fix(W521(5, 6, 8)),
     Fix(W53(5, 7)), Fix(W521(5, 8, 7)), Fix(W521(5, 8, 6)), Fix(W211(5, 6, 8))],
    // 13
    [Fix(W53(5, 2)), Fix(W53(5, 2)), Fix(W521(5, 2, 6)), Fix(W211(5, 6, 2)),
     Fix(W71(5, 2)), Fix(W71(5, 2)), Fix(W611(5, 2, 6)), Fix(W521(5, 6, 2)),
     Fix(W31(5, 7)), Fix(W71(5, 7)), Fix(W611(5, 8, 6)), Fix(W521(5, 6, 8)),
     Fix(W53(5, 7)), Fix(W521(5, 8, 7)), Fix(W521(5, 8, 6)), Fix(W211(5, 6, 8))],
    // 14
    [Diff(4, 2, W53(5, 1), W11(2, 4)), Diff(4, 2, W31(5, 1), W53(2, 4)),
     Diff(4, 2, W71(5, 6), W31(2, 5)), Diff(4, 2, W53(5, 6), W31(5, 2)),
     Diff(4, 2, W31(5, 1), W211(4, 5, 2)), Diff(4, 2, W71(5, 1), W611(5, 4, 2)),
     Fix(W71(5, 6)), Fix(W53(5, 6)),
     Fix(W31(5, 7)), Fix(W71(5, 7)),
     Fix(W611(5, 6, 8)), Fix(W521(5, 6, 8)),
     Fix(W53(5, 7)), Fix(W521(5, 8, 7)),
     Fix(W521(5, 8, 6)), Fix(W211(5, 8, 6))],
    // 15
    [Diff(4, 2, Keep, W11(2, 4)), Diff(4, 2, Keep, W53(2, 4)),
     Diff(4, 2, W71(5, 6), W31(2, 5)), Diff(4, 2, W53(5, 6), W31(5, 2)),
     Diff(4, 2, Keep, W211(4, 5, 2)), Diff(4, 2, Keep, W611(5, 4, 2)),
     Fix(W71(5, 6)), Fix(W53(5, 6)),
     Fix(W31(5, 7)), Fix(W71(5, 7)),
     Fix(W611(5, 6, 8)), Fix(W521(5, 6, 8)),
     Fix(W53(5, 7)), Fix(W521(5, 8, 7)),
     Fix(W521(5, 8, 6)), Fix(W211(5, 8, 6))],
    // 16
    [Fix(W211(5, 4, 2)), Fix(W521(5, 2, 4)), Fix(W521(5, 2, 3)), Fix(W53(5, 3)),
     Fix(W521(5, 4, 2)), Fix(W611(5, 2, 4)), Fix(W71(5, 3)), Fix(W31(5, 3)),
     Fix(W521(5, 4, 8)), Fix(W611(5, 8, 4)), Fix(W71(5, 9)), Fix(W31(5, 9)),
     Fix(W211(5, 4, 8)), Fix(W521(5, 8, 4)), Fix(W521(5, 8, 9)), Fix(W53(5, 9))],
    // 17
    [Fix(W211(5, 4, 2)), Fix(W521(5, 2, 4)), Fix(W521(5, 2, 3)), Fix(W53(5, 3)),
     Fix(W521(5, 4, 2)), Fix(W611(5, 2, 4)), Fix(W71(5, 3)), Fix(W31(5, 3)),
     Fix(W521(5, 4, 8)), Fix(W611(5, 8, 4)), Fix(W71(5, 9)), Fix(W31(5, 9)),
     Fix(W211(5, 4, 8)), Fix(W521(5, 8, 4)), Fix(W521(5, 8, 9)), Fix(W53(5, 9))],
    // 18
    [Fix(W53(5, 1)), Fix(W31(5, 1)), Diff(2, 6, W31(5, 3), W11(2, 5)), Diff(2, 6, W53(5, 3), W11(6, 2)),
     Fix(W521(5, 4, 1)), Fix(W71(5, 1)), Diff(2, 6, W71(5, 3), Keep), Diff(2, 6, W31(5, 3), W11(6, 5)),
     Fix(W521(5, 4, 8)), Fix(W611(5, 8, 4)), Fix(W71(5, 9)), Fix(W31(5, 9)),
     Fix(W211(5, 4, 8)), Fix(W521(5, 8, 4)), Fix(W521(5, 8, 9)), Fix(W53(5, 9))],
    // 19
    [Diff(2, 6, W53(5, 4), W31(5, 2)), Diff(2, 6, W71(5, 4), W31(2, 5)),
     Diff(2, 6, W31(5, 3), W53(2, 6)), Diff(2, 6, W53(5, 3), W11(2, 6)),
     Fix(W53(5, 4)), Fix(W71(5, 4)),
     Diff(2, 6, W71(5, 3), W611(5, 6, 2)), Diff(2, 6, W31(5, 3), W211(6, 5, 2)),
     Fix(W521(5, 4, 8)), Fix(W611(5, 4, 8)),
     Fix(W71(5, 9)), Fix(W31(5, 9)),
     Fix(W211(5, 8, 4)), Fix(W521(5, 8, 4)),
     Fix(W521(5, 8, 9)), Fix(W53(5, 9))],
    // 20
    [Fix(W211(5, 4, 2)), Fix(W521(5, 2, 4)), Fix(W53(5, 2)), Fix(W53(5, 2)),
     Fix(W521(5, 4, 2)), Fix(W611(5, 2, 4)), Fix(W71(5, 2)), Fix(W71(5, 2)),
     Fix(W521(5, 4, 8)), Fix(W611(5, 8, 4)), Fix(W71(5, 9)), Fix(W31(5, 9)),
     Fix(W211(5, 4, 8)), Fix(W521(5, 8, 4)), Fix(W521(5, 8, 9)), Fix(W53(5, 9))],
    // 21
    [Fix(W211(5, 4, 2)), Fix(W521(5, 2, 4)), Fix(W53(5, 2)), Fix(W53(5, 2)),
     Fix(W521(5, 4, 2)), Fix(W611(5, 2, 4)), Fix(W71(5, 2)), Fix(W71(5, 2)),
     Fix(W521(5, 4, 8)), Fix(W611(5, 8, 4)), Fix(W71(5, 9)), Fix(W31(5, 9)),
     Fix(W211(5, 4, 8)), Fix(W521(5, 8, 4)), Fix(W521(5, 8, 9)), Fix(W53(5, 9))],
    // 22
    [Fix(W53(5, 1)), Fix(W31(5, 1)), Diff(2, 6, Keep, W11(2, 5)), Diff(2, 6, Keep, W11(6, 2)),
     Fix(W521(5, 4, 1)), Fix(W71(5, 1)), Diff(2, 6, Keep, Keep), Diff(2, 6, Keep, W11(6, 5)),
     Fix(W521(5, 4, 8)), Fix(W611(5, 8, 4)), Fix(W71(5, 9)), Fix(W31(5, 9)),
     Fix(W211(5, 4, 8)), Fix(W521(5, 8, 4)), Fix(W521(5, 8, 9)), Fix(W53(5, 9))],
    // 23
    [Diff(2, 6, W53(5, 4), W31(5, 2)), Diff(2, 6, W71(5, 4), W31(2, 5)),
     Diff(2, 6, Keep, W53(2, 6)), Diff(2, 6, Keep, W11(2, 6)),
     Fix(W53(5, 4)), Fix(W71(5, 4)),
     Diff(2, 6, Keep, W611(5, 6, 2)), Diff(2, 6, Keep, W211(6, 5, 2)),
     Fix(W521(5, 4, 8)), Fix(W611(5, 4, 8)),
     Fix(W71(5, 9)), Fix(W31(5, 9)),
     Fix(W211(5, 8, 4)), Fix(W521(5, 8, 4)),
     Fix(W521(5, 8, 9)), Fix(W53(5, 9))],
    // 24
    [Fix(W53(5, 1)), Fix(W521(5, 2, 1)), Fix(W521(5, 2, 3)), Fix(W53(5, 3)),
     Fix(W31(5, 1)), Fix(W71(5, 1)), Fix(W71(5, 3)), Fix(W31(5, 3)),
     Fix(W31(5, 7)), Fix(W71(5, 7)), Fix(W71(5, 9)), Fix(W31(5, 9)),
     Fix(W53(5, 7)), Fix(W521(5, 8, 7)), Fix(W521(5, 8, 9)), Fix(W53(5, 9))],
    // 25
    [Fix(W53(5, 2)), Fix(W53(5, 2)), Fix(W521(5, 2, 3)), Fix(W53(5, 3)),
     Fix(W71(5, 2)), Fix(W71(5, 2)), Fix(W71(5, 3)), Fix(W31(5, 3)),
     Fix(W31(5, 7)), Fix(W71(5, 7)), Fix(W71(5, 9)), Fix(W31(5, 9)),
     Fix(W53(5, 7)), Fix(W521(5, 8, 7)), Fix(W521(5, 8, 9)), Fix(W53(5, 9))],
    // 26
    [Diff(4, 2, Keep, W11(2, 4)), Diff(4, 2, Keep, W11(2, 5)),
     Diff(2, 6, Keep, W11(2, 5)), Diff(2, 6, Keep, W11(2, 6)),
     Diff(4, 2, Keep, W11(4, 5)), Diff(4, 2, Keep, Keep),
     Diff(2, 6, Keep, Keep), Diff(2, 6, Keep, W11(6, 5)),
     Fix(W31(5, 7)), Fix(W71(5, 7)),
     Fix(W71(5, 9)), Fix(W31(5, 9)),
     Fix(W53(5, 7)), Fix(W521(5, 8, 7)),
     Fix(W521(5, 8, 9)), Fix(W53(5, 9))],
    // 27
    [Diff(4, 2, Keep, W11(2, 4)), Diff(4, 2, Keep, W11(2, 5)), Fix(W31(5, 3)), Fix(W53(5, 3)),
     Diff(4, 2, Keep, W11(4, 5)), Diff(4, 2, Keep, Keep), Fix(W71(5, 3)), Fix(W31(5, 3)),
     Fix(W31(5, 7)), Fix(W71(5, 7)), Fix(W71(5, 9)), Fix(W31(5, 9)),
     Fix(W53(5, 7)), Fix(W521(5, 8, 7)), Fix(W521(5, 8, 9)), Fix(W53(5, 9))],
    // 28
    [Fix(W53(5, 1)), Fix(W521(5, 2, 1)), Fix(W53(5, 2)), Fix(W53(5, 2)),
     Fix(W31(5, 1)), Fix(W71(5, 1)), Fix(W71(5, 2)), Fix(W71(5, 2)),
     Fix(W31(5, 7)), Fix(W71(5, 7)), Fix(W71(5, 9)), Fix(W31(5, 9)),
     Fix(W53(5, 7)), Fix(W521(5, 8, 7)), Fix(W521(5, 8, 9)), Fix(W53(5, 9))],
    // 29
    [Fix(W53(5, 2)), Fix(W53(5, 2)), Fix(W53(5, 2)), Fix(W53(5, 2)),
     Fix(W71(5, 2)), Fix(W71(5, 2)), Fix(W71(5, 2)), Fix(W71(5, 2)),
     Fix(W31(5, 7)), Fix(W71(5, 7)), Fix(W71(5, 9)), Fix(W31(5, 9)),
     Fix(W53(5, 7)), Fix(W521(5, 8, 7)), Fix(W521(5, 8, 9)), Fix(W53(5, 9))],
    // 30
    [Fix(W53(5, 1)), Fix(W31(5, 1)), Diff(2, 6, Keep, W11(2, 5)), Diff(2, 6, Keep, W11(2, 6)),
     Fix(W31(5, 1)), Fix(W71(5, 1)), Diff(2, 6, Keep, Keep), Diff(2, 6, Keep, W11(6, 5)),
     Fix(W31(5, 7)), Fix(W71(5, 7)), Fix(W71(5, 9)), Fix(W31(5, 9)),
     Fix(W53(5, 7)), Fix(W521(5, 8, 7)), Fix(W521(5, 8, 9)), Fix(W53(5, 9))],
    // 31
    [Diff(4, 2, Keep, W11(2, 4)), Diff(4, 2, Keep, W11(2, 5)),
     Diff(2, 6, Keep, W11(2, 5)), Diff(2, 6, Keep, W11(2, 6)),
     Diff(4, 2, Keep, W11(4, 5)), Diff(4, 2, Keep, Keep),
     Diff(2, 6, Keep, Keep), Diff(2, 6, Keep, W11(6, 5)),
     Fix(W31(5, 7)), Fix(W71(5, 7)),
     Fix(W71(5, 9)), Fix(W31(5, 9)),
     Fix(W53(5, 7)), Fix(W521(5, 8, 7)),
     Fix(W521(5, 8, 9)), Fix(W53(5, 9))],
    // 32
    [Fix(W211(5, 2, 4)), Fix(W521(5, 2, 4)), Fix(W521(5, 2, 6)), Fix(W211(5, 2, 6)),
     Fix(W521(5, 4, 2)), Fix(W611(5, 4, 2)), Fix(W611(5, 6, 2)), Fix(W521(5, 6, 2)),
     Fix(W521(5, 4, 8)), Fix(W611(5, 4, 8)), Fix(W611(5, 6, 8)), Fix(W521(5, 6, 8)),
     Fix(W211(5, 8, 4)), Fix(W521(5, 8, 4)), Fix(W521(5, 8, 6)), Fix(W211(5, 8, 6))],
    // 33
    [Fix(W211(5, 2, 4)), Fix(W521(5, 2, 4)), Fix(W521(5, 2, 6)), Fix(W211(5, 2, 6)),
     Fix(W521(5, 4, 2)), Fix(W611(5, 4, 2)), Fix(W611(5, 6, 2)), Fix(W521(5, 6, 2)),
     Fix(W521(5, 4, 8)), Fix(W611(5, 4, 8)), Fix(W611(5, 6, 8)), Fix(W521(5, 6, 8)),
     Fix(W211(5, 8, 4)), Fix(W521(5, 8, 4)), Fix(W521(5, 8, 6)), Fix(W211(5, 8, 6))],
    // 34
    [Fix(W53(5, 1)), Fix(W31(5, 1)), Fix(W31(5, 3)), Fix(W53(5, 3)),
     Fix(W521(5, 4, 1)), Fix(W71(5, 1)), Fix(W71(5, 3)), Fix(W521(5, 6, 3)),
     Fix(W521(5, 4, 8)), Fix(W611(5, 4, 8)), Fix(W611(5, 6, 8)), Fix(W521(5, 6, 8)),
     Fix(W211(5, 8, 4)), Fix(W521(5, 8, 4)), Fix(W521(5, 8, 6)), Fix(W211(5, 8, 6))],
    // 35
    [Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(W31(5, 3)), Fix(W53(5, 3)),
     Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(W71(5, 3)), Fix(W521(5, 6, 3)),
     Fix(W521(5, 4, 8)), Fix(W611(5, 4, 8)), Fix(W611(5, 6, 8)), Fix(W521(5, 6, 8)),
     Fix(W211(5, 8, 4)), Fix(W521(5, 8, 4)), Fix(W521(5, 8, 6)), Fix(W211(5, 8, 6))],
    // 36
    [Fix(W211(5, 2, 4)), Fix(W521(5, 2, 4)), Fix(W521(5, 2, 6)), Fix(W211(5, 2, 6)),
     Fix(W521(5, 4, 2)), Fix(W611(5, 4, 2)), Fix(W611(5, 6, 2)), Fix(W521(5, 6, 2)),
     Fix(W521(5, 4, 8)), Fix(W611(5, 4, 8)), Fix(W611(5, 6, 8)), Fix(W521(5, 6, 8)),
     Fix(W211(5, 8, 4)), Fix(W521(5, 8, 4)), Fix(W521(5, 8, 6)), Fix(W211(5, 8, 6))],
    // 37
    [Fix(W211(5, 2, 4)), Fix(W521(5, 2, 4)), Fix(W521(5, 2, 6)), Fix(W211(5, 2, 6)),
     Fix(W521(5, 4, 2)), Fix(W611(5, 4, 2)), Fix(W611(5, 6, 2)), Fix(W521(5, 6, 2)),
     Fix(W521(5, 4, 8)), Fix(W611(5, 4, 8)), Fix(W611(5, 6, 8)), Fix(W521(5, 6, 8)),
     Fix(W211(5, 8, 4)), Fix(W521(5, 8, 4)), Fix(W521(5, 8, 6)), Fix(W211(5, 8, 6))],
    // 38
    [Fix(W53(5, 1)), Fix(W31(5, 1)), Fix(W71(5, 6)), Fix(W53(5, 6)),
     Fix(W521(5, 4, 1)), Fix(W71(5, 1)), Fix(W71(5, 6)), Fix(W53(5, 6)),
     Fix(W521(5, 4, 8)), Fix(W611(5, 4, 8)), Fix(W611(5, 6, 8)), Fix(W521(5, 6, 8)),
     Fix(W211(5, 8, 4)), Fix(W521(5, 8, 4)), Fix(W521(5, 8, 6)), Fix(W211(5, 8, 6))],
    // 39
    [Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(W71(5, 6)), Fix(W53(5, 6)),
     Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(W71(5, 6)), Fix(W53(5, 6)),
     Fix(W521(5, 4, 8)), Fix(W611(5, 4, 8)), Fix(W611(5, 6, 8)), Fix(W521(5, 6, 8)),
     Fix(W211(5, 8, 4)), Fix(W521(5, 8, 4)), Fix(W521(5, 8, 6)), Fix(W211(5, 8, 6))],
    // 40
    [Fix(W53(5, 1)), Fix(W521(5, 2, 1)), Fix(W521(5, 2, 6)), Fix(W211(5, 6, 2)),
     Fix(W31(5, 1)), Fix(W71(5, 1)), Fix(W611(5, 2, 6)), Fix(W521(5, 6, 2)),
     Fix(W71(5, 8)), Fix(W71(5, 8)), Fix(W611(5, 8, 6)), Fix(W521(5, 6, 8)),
     Fix(W53(5, 8)), Fix(W53(5, 8)), Fix(W521(5, 8, 6)), Fix(W211(5, 6, 8))],
    // 41
    [Fix(W53(5, 2)), Fix(W53(5, 2)), Fix(W521(5, 2, 6)), Fix(W211(5, 6, 2)),
     Fix(W71(5, 2)), Fix(W71(5, 2)), Fix(W611(5, 2, 6)), Fix(W521(5, 6, 2)),
     Fix(W71(5, 8)), Fix(W71(5, 8)), Fix(W611(5, 8, 6)), Fix(W521(5, 6, 8)),
     Fix(W53(5, 8)), Fix(W53(5, 8)), Fix(W521(5, 8, 6)), Fix(W211(5, 6, 8))],
    // 42
    [Diff(4, 2, W53(5, 1), W11(4, 2)), Diff(4, 2, W31(5, 1), W211(2, 5, 4)),
     Fix(W31(5, 3)), Fix(W53(5, 3)),
     Diff(4, 2, W31(5, 1), W53(4, 2)), Diff(4, 2, W71(5, 1), W611(5, 2, 4)),
     Fix(W71(5, 3)), Fix(W521(5, 6, 3)),
     Diff(4, 2, W71(5, 8), W31(4, 5)), Fix(W71(5, 8)),
     Fix(W611(5, 8, 6)), Fix(W521(5, 6, 8)),
     Diff(4, 2, W53(5, 8), W31(5, 4)), Fix(W53(5, 8)),
     Fix(W521(5, 8, 6)), Fix(W211(5, 6, 8))],
    // 43
    [Diff(4, 2, Keep, W11(4, 2)), Diff(4, 2, Keep, W211(2, 5, 4)), Fix(W31(5, 3)), Fix(W53(5, 3)),
     Diff(4, 2, Keep, W53(4, 2)), Diff(4, 2, Keep, W611(5, 2, 4)), Fix(W71(5, 3)), Fix(W521(5, 6, 3)),
     Diff(4, 2, W71(5, 8), W31(4, 5)), Fix(W71(5, 8)), Fix(W611(5, 8, 6)), Fix(W521(5, 6, 8)),
     Diff(4, 2, W53(5, 8), W31(5, 4)), Fix(W53(5, 8)), Fix(W521(5, 8, 6)), Fix(W211(5, 6, 8))],
    // 44
    [Fix(W53(5, 1)), Fix(W521(5, 2, 1)), Fix(W521(5, 2, 6)), Fix(W211(5, 6, 2)),
     Fix(W31(5, 1)), Fix(W71(5, 1)), Fix(W611(5, 2, 6)), Fix(W521(5, 6, 2)),
     Fix(W71(5, 8)), Fix(W71(5, 8)), Fix(W611(5, 8, 6)), Fix(W521(5, 6, 8)),
     Fix(W53(5, 8)), Fix(W53(5, 8)), Fix(W521(5, 8, 6)), Fix(W211(5, 6, 8))],
    // 45
    [Fix(W53(5, 2)), Fix(W53(5, 2)), Fix(W521(5, 2, 6)), Fix(W211(5, 6, 2)),
     Fix(W71(5, 2)), Fix(W71(5, 2)), Fix(W611(5, 2, 6)), Fix(W521(5, 6, 2)),
     Fix(W71(5, 8)), Fix(W71(5, 8)), Fix(W611(5, 8, 6)), Fix(W521(5, 6, 8)),
     Fix(W53(5, 8)), Fix(W53(5, 8)), Fix(W521(5, 8, 6)), Fix(W211(5, 6, 8))],
    // 46
    [Diff(4, 2, W53(5, 1), W211(5, 2, 4)), Diff(4, 2, W31(5, 1), W31(5, 2)), Fix(W71(5, 6)), Fix(W53(5, 6)),
     Diff(4, 2, W31(5, 1), W31(5, 4)), Diff(4, 2, W71(5, 1), Keep), Fix(W71(5, 6)), Fix(W53(5, 6)),
     Fix(W71(5, 8)), Fix(W71(5, 8)), Fix(W611(5, 6, 8)), Fix(W521(5, 6, 8)),
     Fix(W53(5, 8)), Fix(W53(5, 8)), Fix(W521(5, 8, 6)), Fix(W211(5, 8, 6))],
    // 47
    [Diff(4, 2, Keep, W211(5, 2, 4)), Fix(Keep), Fix(W71(5, 6)), Fix(W53(5, 6)),
     Fix(Keep), Fix(Keep), Fix(W71(5, 6)), Fix(W53(5, 6)),
     Fix(W71(5, 8)), Fix(W71(5, 8)), Fix(W611(5, 6, 8)), Fix(W521(5, 6, 8)),
     Fix(W53(5, 8)), Fix(W53(5, 8)), Fix(W521(5, 8, 6)), Fix(W211(5, 8, 6))],
    // 48
    [Fix(W211(5, 4, 2)), Fix(W521(5, 2, 4)), Fix(W521(5, 2, 3)), Fix(W53(5, 3)),
     Fix(W521(5, 4, 2)), Fix(W611(5, 2, 4)), Fix(W71(5, 3)), Fix(W31(5, 3)),
     Fix(W521(5, 4, 8)), Fix(W611(5, 8, 4)), Fix(W71(5, 9)), Fix(W31(5, 9)),
     Fix(W211(5, 4, 8)), Fix(W521(5, 8, 4)), Fix(W521(5, 8, 9)), Fix(W53(5, 9))],
    // 49
    [Fix(W211(5, 4, 2)), Fix(W521(5, 2, 4)), Fix(W521(5, 2, 3)), Fix(W53(5, 3)),
     Fix(W521(5, 4, 2)), Fix(W611(5, 2, 4)), Fix(W71(5, 3)), Fix(W31(5, 3)),
     Fix(W521(5, 4, 8)), Fix(W611(5, 8, 4)), Fix(W71(5, 9)), Fix(W31(5, 9)),
     Fix(W211(5, 4, 8)), Fix(W521(5, 8, 4)), Fix(W521(5, 8, 9)), Fix(W53(5, 9))],
    // 50
    [Fix(W53(5, 1)), Fix(W31(5, 1)), Diff(2, 6, W31(5, 3), W11(2, 5)), Diff(2, 6, W53(5, 3), W11(6, 2)),
     Fix(W521(5, 4, 1)), Fix(W71(5, 1)), Diff(2, 6, W71(5, 3), Keep), Diff(2, 6, W31(5, 3), W11(6, 5)),
     Fix(W521(5, 4, 8)), Fix(W611(5, 8, 4)), Fix(W71(5, 9)), Fix(W31(5, 9)),
     Fix(W211(5, 4, 8)), Fix(W521(5, 8, 4)), Fix(W521(5, 8, 9)), Fix(W53(5, 9))],
    // 51
    [Diff(2, 6, W53(5, 4), W31(5, 2)), Diff(2, 6, W71(5, 4), W31(2, 5)),
     Diff(2, 6, W31(5, 3), W53(2, 6)), Diff(2, 6, W53(5, 3), W11(2, 6)),
     Fix(W53(5, 4)), Fix(W71(5, 4)),
     Diff(2, 6, W71(5, 3), W611(5, 6, 2)), Diff(2, 6, W31(5, 3), W211(6, 5, 2)),
     Fix(W521(5, 4, 8)), Fix(W611(5, 4, 8)),
     Fix(W71(5, 9)), Fix(W31(5, 9)),
     Fix(W211(5, 8, 4)), Fix(W521(5, 8, 4)),
     Fix(W521(5, 8, 9)), Fix(W53(5, 9))],
    // 52
    [Fix(W211(5, 4, 2)), Fix(W521(5, 2, 4)), Fix(W53(5, 2)), Fix(W53(5, 2)),
     Fix(W521(5, 4, 2)), Fix(W611(5, 2, 4)), Fix(W71(5, 2)), Fix(W71(5, 2)),
     Fix(W521(5, 4, 8)), Fix(W611(5, 8, 4)), Fix(W71(5, 9)), Fix(W31(5, 9)),
     Fix(W211(5, 4, 8)), Fix(W521(5, 8, 4)), Fix(W521(5, 8, 9)), Fix(W53(5, 9))],
    // 53
    [Fix(W211(5, 4, 2)), Fix(W521(5, 2, 4)), Fix(W53(5, 2)), Fix(W53(5, 2)),
     Fix(W521(5, 4, 2)), Fix(W611(5, 2, 4)), Fix(W71(5, 2)), Fix(W71(5, 2)),
     Fix(W521(5, 4, 8)), Fix(W611(5, 8, 4)), Fix(W71(5, 9)), Fix(W31(5, 9)),
     Fix(W211(5, 4, 8)), Fix(W521(5, 8, 4)), Fix(W521(5, 8, 9)), Fix(W53(5, 9))],
    // 54
    [Fix(W53(5, 1)), Fix(W31(5, 1)), Diff(2, 6, Keep, W11(2, 5)), Diff(2, 6, Keep, W11(6, 2)),
     Fix(W521(5, 4, 1)), Fix(W71(5, 1)), Diff(2, 6, Keep, Keep), Diff(2, 6, Keep, W11(6, 5)),
     Fix(W521(5, 4, 8)), Fix(W611(5, 8, 4)), Fix(W71(5, 9)), Fix(W31(5, 9)),
     Fix(W211(5, 4, 8)), Fix(W521(5, 8, 4)), Fix(W521(5, 8, 9)), Fix(W53(5, 9))],
    // 55
    [Diff(2, 6, W53(5, 4), W31(5, 2)), Diff(2, 6, W71(5, 4), W31(2, 5)),
     Diff(2, 6, Keep, W53(2, 6)), Diff(2, 6, Keep, W11(2, 6)),
     Fix(W53(5, 4)), Fix(W71(5, 4)),
     Diff(2, 6, Keep, W611(5, 6, 2)), Diff(2, 6, Keep, W211(6, 5, 2)),
     Fix(W521(5, 4, 8)), Fix(W611(5, 4, 8)),
     Fix(W71(5, 9)), Fix(W31(5, 9)),
     Fix(W211(5, 8, 4)), Fix(W521(5, 8, 4)),
     Fix(W521(5, 8, 9)), Fix(W53(5, 9))],
    // 56
    [Fix(W53(5, 1)), Fix(W521(5, 2, 1)), Fix(W521(5, 2, 3)), Fix(W53(5, 3)),
     Fix(W31(5, 1)), Fix(W71(5, 1)), Fix(W71(5, 3)), Fix(W31(5, 3)),
     Fix(W71(5, 8)), Fix(W71(5, 8)), Fix(W71(5, 9)), Fix(W31(5, 9)),
     Fix(W53(5, 8)), Fix(W53(5, 8)), Fix(W521(5, 8, 9)), Fix(W53(5, 9))],
    // 57
    [Fix(W53(5, 2)), Fix(W53(5, 2)), Fix(W521(5, 2, 3)), Fix(W53(5, 3)),
     Fix(W71(5, 2)), Fix(W71(5, 2)), Fix(W71(5, 3)), Fix(W31(5, 3)),
     Fix(W71(5, 8)), Fix(W71(5, 8)), Fix(W71(5, 9)), Fix(W31(5, 9)),
     Fix(W53(5, 8)), Fix(W53(5, 8)), Fix(W521(5, 8, 9)), Fix(W53(5, 9))],
    // 58
    [Diff(4, 2, W53(5, 1), W211(5, 2, 4)), Diff(4, 2, W31(5, 1), W31(5, 2)),
     Diff(2, 6, W31(5, 3), W31(5, 2)), Diff(2, 6, W53(5, 3), W211(5, 2, 6)),
     Diff(4, 2, W31(5, 1), W31(5, 4)), Diff(4, 2, W71(5, 1), Keep),
     Diff(2, 6, W71(5, 3), Keep), Diff(2, 6, W31(5, 3), W31(5, 6)),
     Fix(W71(5, 8)), Fix(W71(5, 8)),
     Fix(W71(5, 9)), Fix(W31(5, 9)),
     Fix(W53(5, 8)), Fix(W53(5, 8)),
     Fix(W521(5, 8, 9)), Fix(W53(5, 9))],
    // 59
    [Diff(4, 2, Keep, W11(2, 4)), Diff(4, 2, Keep, W11(2, 5)),
     Diff(2, 6, W31(5, 3), W31(5, 2)), Diff(2, 6, W53(5, 3), W211(5, 2, 6)),
     Diff(4, 2, Keep, W11(4, 5)), Diff(4, 2, Keep, Keep),
     Diff(2, 6, W71(5, 3), Keep), Diff(2, 6, W31(5, 3), W31(5, 6)),
     Fix(W71(5, 8)), Fix(W71(5, 8)),
     Fix(W71(5, 9)), Fix(W31(5, 9)),
     Fix(W53(5, 8)), Fix(W53(5, 8)),
     Fix(W521(5, 8, 9)), Fix(W53(5, 9))],
    // 60
    [Fix(W53(5, 1)), Fix(W521(5, 2, 1)), Fix(W53(5, 2)), Fix(W53(5, 2)),
     Fix(W31(5, 1)), Fix(W71(5, 1)), Fix(W71(5, 2)), Fix(W71(5, 2)),
     Fix(W71(5, 8)), Fix(W71(5, 8)), Fix(W71(5, 9)), Fix(W31(5, 9)),
     Fix(W53(5, 8)), Fix(W53(5, 8)), Fix(W521(5, 8, 9)), Fix(W53(5, 9))],
    // 61
    [Fix(W53(5, 2)), Fix(W53(5, 2)), Fix(W53(5, 2)), Fix(W53(5, 2)),
     Fix(W71(5, 2)), Fix(W71(5, 2)), Fix(W71(5, 2)), Fix(W71(5, 2)),
     Fix(W71(5, 8)), Fix(W71(5, 8)), Fix(W71(5, 9)), Fix(W31(5, 9)),
     Fix(W53(5, 8)), Fix(W53(5, 8)), Fix(W521(5, 8, 9)), Fix(W53(5, 9))],
    // 62
    [Fix(W53(5, 1)), Fix(W31(5, 1)), Diff(2, 6, Keep, W11(2, 5)), Diff(2, 6, Keep, W11(2, 6)),
     Fix(W31(5, 1)), Fix(W71(5, 1)), Diff(2, 6, Keep, Keep), Diff(2, 6, Keep, W11(6, 5)),
     Fix(W71(5, 8)), Fix(W71(5, 8)), Fix(W71(5, 9)), Fix(W31(5, 9)),
     Fix(W53(5, 8)), Fix(W53(5, 8)), Fix(W521(5, 8, 9)), Fix(W53(5, 9))],
    // 63
    [Diff(4, 2, Keep, W211(5, 2, 4)), Fix(Keep), Diff(2, 6, Keep, W11(2, 5)), Diff(2, 6, Keep, W11(2, 6)),
     Fix(Keep), Fix(Keep), Diff(2, 6, Keep, Keep), Diff(2, 6, Keep, W11(6, 5)),
     Fix(W71(5, 8)), Fix(W71(5, 8)), Fix(W71(5, 9)), Fix(W31(5, 9)),
     Fix(W53(5, 8)), Fix(W53(5, 8)), Fix(W521(5, 8, 9)), Fix(W53(5, 9))],
    // 64
    [Fix(W211(5, 2, 4)), Fix(W521(5, 2, 4)), Fix(W521(5, 2, 6)), Fix(W211(5, 2, 6)),
     Fix(W521(5, 4, 2)), Fix(W611(5, 4, 2)), Fix(W611(5, 6, 2)), Fix(W521(5, 6, 2)),
     Fix(W521(5, 4, 7)), Fix(W71(5, 7)), Fix(W71(5, 9)), Fix(W521(5, 6, 9)),
     Fix(W53(5, 7)), Fix(W31(5, 7)), Fix(W31(5, 9)), Fix(W53(5, 9))],
    // 65
    [Fix(W211(5, 2, 4)), Fix(W521(5, 2, 4)), Fix(W521(5, 2, 6)), Fix(W211(5, 2, 6)),
     Fix(W521(5, 4, 2)), Fix(W611(5, 4, 2)), Fix(W611(5, 6, 2)), Fix(W521(5, 6, 2)),
     Fix(W521(5, 4, 7)), Fix(W71(5, 7)), Fix(W71(5, 9)), Fix(W521(5, 6, 9)),
     Fix(W53(5, 7)), Fix(W31(5, 7)), Fix(W31(5, 9)), Fix(W53(5, 9))],
    // 66
    [Fix(W53(5, 1)), Fix(W31(5, 1)), Fix(W31(5, 3)), Fix(W53(5, 3)),
     Fix(W521(5, 4, 1)), Fix(W71(5, 1)), Fix(W71(5, 3)), Fix(W521(5, 6, 3)),
     Fix(W521(5, 4, 7)), Fix(W71(5, 7)), Fix(W71(5, 9)), Fix(W521(5, 6, 9)),
     Fix(W53(5, 7)), Fix(W31(5, 7)), Fix(W31(5, 9)), Fix(W53(5, 9))],
    // 67
    [Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(W31(5, 3)), Fix(W53(5, 3)),
     Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(W71(5, 3)), Fix(W521(5, 6, 3)),
     Fix(W521(5, 4, 7)), Fix(W71(5, 7)), Fix(W71(5, 9)), Fix(W521(5, 6, 9)),
     Fix(W53(5, 7)), Fix(W31(5, 7)), Fix(W31(5, 9)), Fix(W53(5, 9))],
    // 68
    [Fix(W211(5, 2, 4)), Fix(W521(5, 2, 4)), Fix(W521(5, 2, 6)), Fix(W211(5, 2, 6)),
     Fix(W521(5, 4, 2)), Fix(W611(5, 4, 2)), Fix(W611(5, 6, 2)), Fix(W521(5, 6, 2)),
     Fix(W521(5, 4, 7)), Fix(W71(5, 7)), Fix(W71(5, 9)), Fix(W521(5, 6, 9)),
     Fix(W53(5, 7)), Fix(W31(5, 7)), Fix(W31(5, 9)), Fix(W53(5, 9))],
    // 69
    [Fix(W211(5, 2, 4)), Fix(W521(5, 2, 4)), Fix(W521(5, 2, 6)), Fix(W211(5, 2, 6)),
     Fix(W521(5, 4, 2)), Fix(W611(5, 4, 2)), Fix(W611(5, 6, 2)), Fix(W521(5, 6, 2)),
     Fix(W521(5, 4, 7)), Fix(W71(5, 7)), Fix(W71(5, 9)), Fix(W521(5, 6, 9)),
     Fix(W53(5, 7)), Fix(W31(5, 7)), Fix(W31(5, 9)), Fix(W53(5, 9))],
    // 70
    [Fix(W53(5, 1)), Fix(W31(5, 1)), Fix(W71(5, 6)), Fix(W53(5, 6)),
     Fix(W521(5, 4, 1)), Fix(W71(5, 1)), Fix(W71(5, 6)), Fix(W53(5, 6)),
     Fix(W521(5, 4, 7)), Fix(W71(5, 7)), Fix(W71(5, 9)), Fix(W521(5, 6, 9)),
     Fix(W53(5, 7)), Fix(W31(5, 7)), Fix(W31(5, 9)), Fix(W53(5, 9))],
    // 71
    [Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(W71(5, 6)), Fix(W53(5, 6)),
     Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(W71(5, 6)), Fix(W53(5, 6)),
     Fix(W521(5, 4, 7)), Fix(W71(5, 7)), Fix(W71(5, 9)), Fix(W521(5, 6, 9)),
     Fix(W53(5, 7)), Fix(W31(5, 7)), Fix(W31(5, 9)), Fix(W53(5, 9))],
    // 72
    [Fix(W53(5, 1)), Fix(W521(5, 2, 1)), Fix(W521(5, 2, 6)), Fix(W211(5, 6, 2)),
     Fix(W31(5, 1)), Fix(W71(5, 1)), Fix(W611(5, 2, 6)), Fix(W521(5, 6, 2)),
     Diff(8, 4, W31(5, 7), W11(4, 5)), Diff(8, 4, W71(5, 7), Keep), Fix(W71(5, 9)), Fix(W521(5, 6, 9)),
     Diff(8, 4, W53(5, 7), W11(4, 8)), Diff(8, 4, W31(5, 7), W11(8, 5)), Fix(W31(5, 9)), Fix(W53(5, 9))],
    // 73
    [Diff(8, 4, W53(5, 2), W31(5, 4)), Fix(W53(5, 2)),
     Fix(W521(5, 2, 6)), Fix(W211(5, 6, 2)),
     Diff(8, 4, W71(5, 2), W31(4, 5)), Fix(W71(5, 2)),
     Fix(W611(5, 2, 6)), Fix(W521(5, 6, 2)),
     Diff(8, 4, W31(5, 7), W53(4, 8)), Diff(8, 4, W71(5, 7), W611(5, 8, 4)),
     Fix(W71(5, 9)), Fix(W521(5, 6, 9)),
     Diff(8, 4, W53(5, 7), W11(4, 8)), Diff(8, 4, W31(5, 7), W211(8, 5, 4)),
     Fix(W31(5, 9)), Fix(W53(5, 9))],
    // 74
    [Diff(4, 2, Keep, W11(4, 2)), Diff(4, 2, Keep, W11(2, 5)), Fix(W31(5, 3)), Fix(W53(5, 3)),
     Diff(4, 2, Keep, W11(4, 5)), Diff(4, 2, Keep, Keep), Fix(W71(5, 3)), Fix(W521(5, 6, 3)),
     Diff(8, 4, Keep, W11(4, 5)), Diff(8, 4, Keep, Keep), Fix(W71(5, 9)), Fix(W521(5, 6, 9)),
     Diff(8, 4, Keep, W11(4, 8)), Diff(8, 4, Keep, W11(8, 5)), Fix(W31(5, 9)), Fix(W53(5, 9))],
    // 75
    [Diff(4, 2, Keep, W11(4, 2)), Diff(4, 2, Keep, W11(2, 5)), Fix(W31(5, 3)), Fix(W53(5, 3)),
     Diff(4, 2, Keep, W11(4, 5)), Diff(4, 2, Keep, Keep), Fix(W71(5, 3)), Fix(W521(5, 6, 3)),
     Fix(W31(5, 7)), Fix(W71(5, 7)), Fix(W71(5, 9)), Fix(W521(5, 6, 9)),
     Fix(W53(5, 7)), Fix(W31(5, 7)), Fix(W31(5, 9)), Fix(W53(5, 9))],
    // 76
    [Fix(W53(5, 1)), Fix(W521(5, 2, 1)), Fix(W521(5, 2, 6)), Fix(W211(5, 6, 2)),
     Fix(W31(5, 1)), Fix(W71(5, 1)), Fix(W611(5, 2, 6)), Fix(W521(5, 6, 2)),
     Diff(8, 4, W31(5, 7), W11(4, 5)), Diff(8, 4, W71(5, 7), Keep), Fix(W71(5, 9)), Fix(W521(5, 6, 9)),
     Diff(8, 4, W53(5, 7), W11(4, 8)), Diff(8, 4, W31(5, 7), W11(8, 5)), Fix(W31(5, 9)), Fix(W53(5, 9))],
    // 77
    [Diff(8, 4, W53(5, 2), W31(5, 4)), Fix(W53(5, 2)),
     Fix(W521(5, 2, 6)), Fix(W211(5, 6, 2)),
     Diff(8, 4, W71(5, 2), W31(4, 5)), Fix(W71(5, 2)),
     Fix(W611(5, 2, 6)), Fix(W521(5, 6, 2)),
     Diff(8, 4, W31(5, 7), W53(4, 8)), Diff(8, 4, W71(5, 7), W611(5, 8, 4)),
     Fix(W71(5, 9)), Fix(W521(5, 6, 9)),
     Diff(8, 4, W53(5, 7), W11(4, 8)), Diff(8, 4, W31(5, 7), W211(8, 5, 4)),
     Fix(W31(5, 9)), Fix(W53(5, 9))],
    // 78
    [Diff(4, 2, W53(5, 1), W211(5, 4, 2)), Diff(4, 2, W31(5, 1), W31(5, 2)), Fix(W71(5, 6)), Fix(W53(5, 6)),
     Diff(4, 2, W31(5, 1), W31(5, 4)), Diff(4, 2, W71(5, 1), Keep), Fix(W71(5, 6)), Fix(W53(5, 6)),
     Diff(8, 4, W31(5, 7), W31(5, 4)), Diff(8, 4, W71(5, 7), Keep), Fix(W71(5, 9)), Fix(W521(5, 6, 9)),
     Diff(8, 4, W53(5, 7), W211(5, 4, 8)), Diff(8, 4, W31(5, 7), W31(5, 8)), Fix(W31(5, 9)), Fix(W53(5, 9))],
    // 79
    [Diff(4, 2, Keep, W11(4, 2)), Diff(4, 2, Keep, W11(2, 5)), Fix(W71(5, 6)), Fix(W53(5, 6)),
     Diff(4, 2, Keep, W11(4, 5)), Diff(4, 2, Keep, Keep), Fix(W71(5, 6)), Fix(W53(5, 6)),
     Diff(8, 4, W31(5, 7), W31(5, 4)), Diff(8, 4, W71(5, 7), Keep), Fix(W71(5, 9)), Fix(W521(5, 6, 9)),
     Diff(8, 4, W53(5, 7), W211(5, 4, 8)), Diff(8, 4, W31(5, 7), W31(5, 8)), Fix(W31(5, 9)), Fix(W53(5, 9))],
    // 80
    [Fix(W211(5, 2, 4)), Fix(W521(5, 2, 4)), Fix(W521(5, 2, 3)), Fix(W53(5, 3)),
     Fix(W521(5, 4, 2)), Fix(W611(5, 4, 2)), Fix(W71(5, 3)), Fix(W31(5, 3)),
     Fix(W521(5, 4, 7)), Fix(W71(5, 7)), Diff(6, 8, W71(5, 9), Keep), Diff(6, 8, W31(5, 9), W11(6, 5)),
     Fix(W53(5, 7)), Fix(W31(5, 7)), Diff(6, 8, W31(5, 9), W11(8, 5)), Diff(6, 8, W53(5, 9), W11(8, 6))],
    // 81
    [Fix(W211(5, 2, 4)), Fix(W521(5, 2, 4)), Fix(W521(5, 2, 3)), Fix(W53(5, 3)),
     Fix(W521(5, 4, 2)), Fix(W611(5, 4, 2)), Fix(W71(5, 3)), Fix(W31(5, 3)),
     Fix(W521(5, 4, 7)), Fix(W71(5, 7)), Diff(6, 8, W71(5, 9), Keep), Diff(6, 8, W31(5, 9), W11(6, 5)),
     Fix(W53(5, 7)), Fix(W31(5, 7)), Diff(6, 8, W31(5, 9), W11(8, 5)), Diff(6, 8, W53(5, 9), W11(8, 6))],
    // 82
    [Fix(W53(5, 1)), Fix(W31(5, 1)), Diff(2, 6, Keep, W11(2, 5)), Diff(2, 6, Keep, W11(6, 2)),
     Fix(W521(5, 4, 1)), Fix(W71(5, 1)), Diff(2, 6, Keep, Keep), Diff(2, 6, Keep, W11(6, 5)),
     Fix(W521(5, 4, 7)), Fix(W71(5, 7)), Diff(6, 8, Keep, Keep), Diff(6, 8, Keep, W11(6, 5)),
     Fix(W53(5, 7)), Fix(W31(5, 7)), Diff(6, 8, Keep, W11(8, 5)), Diff(6, 8, Keep, W11(6, 8))],
    // 83
    [Fix(W53(5, 4)), Fix(W71(5, 4)), Diff(2, 6, W31(5, 3), W31(5, 2)), Diff(2, 6, W53(5, 3), W211(5, 6, 2)),
     Fix(W53(5, 4)), Fix(W71(5, 4)), Diff(2, 6, W71(5, 3), Keep), Diff(2, 6, W31(5, 3), W31(5, 6)),
     Fix(W521(5, 4, 7)), Fix(W71(5, 7)), Diff(6, 8, W71(5, 9), Keep), Diff(6, 8, W31(5, 9), W31(5, 6)),
     Fix(W53(5, 7)), Fix(W31(5, 7)), Diff(6, 8, W31(5, 9), W31(5, 8)), Diff(6, 8, W53(5, 9), W211(5, 6, 8))],
    // 84
    [Fix(W211(5, 4, 2)), Fix(W521(5, 2, 4)),
     Fix(W53(5, 2)), Diff(6, 8, W53(5, 2), W31(5, 6)),
     Fix(W521(5, 4, 2)), Fix(W611(5, 2, 4)),
     Fix(W71(5, 2)), Diff(6, 8, W71(5, 2), W31(6, 5)),
     Fix(W521(5, 4, 7)), Fix(W71(5, 7)),
     Diff(6, 8, W71(5, 9), W611(5, 8, 6)), Diff(6, 8, W31(5, 9), W53(6, 8)),
     Fix(W53(5, 7)), Fix(W31(5, 7)),
     Diff(6, 8, W31(5, 9), W211(8, 5, 6)), Diff(6, 8, W53(5, 9), W11(6, 8))],
    // 85
    [Fix(W211(5, 4, 2)), Fix(W521(5, 2, 4)),
     Fix(W53(5, 2)), Diff(6, 8, W53(5, 2), W31(5, 6)),
     Fix(W521(5, 4, 2)), Fix(W611(5, 2, 4)),
     Fix(W71(5, 2)), Diff(6, 8, W71(5, 2), W31(6, 5)),
     Fix(W521(5, 4, 7)), Fix(W71(5, 7)),
     Diff(6, 8, W71(5, 9), W611(5, 8, 6)), Diff(6, 8, W31(5, 9), W53(6, 8)),
     Fix(W53(5, 7)), Fix(W31(5, 7)),
     Diff(6, 8, W31(5, 9), W211(8, 5, 6)), Diff(6, 8, W53(5, 9), W11(6, 8))],
    // 86
    [Fix(W53(5, 1)), Fix(W31(5, 1)), Diff(2, 6, Keep, W11(2, 5)), Diff(2, 6, Keep, W11(6, 2)),
     Fix(W521(5, 4, 1)), Fix(W71(5, 1)), Diff(2, 6, Keep, Keep), Diff(2, 6, Keep, W11(6, 5)),
     Fix(W521(5, 4, 7)), Fix(W71(5, 7)), Fix(W71(5, 9)), Fix(W31(5, 9)),
     Fix(W53(5, 7)), Fix(W31(5, 7)), Fix(W31(5, 9)), Fix(W53(5, 9))],
    // 87
    [Fix(W53(5, 4)), Fix(W71(5, 4)), Diff(2, 6, Keep, W11(2, 5)), Diff(2, 6, Keep, W11(6, 2)),
     Fix(W53(5, 4)), Fix(W71(5, 4)), Diff(2, 6, Keep, Keep), Diff(2, 6, Keep, W11(6, 5)),
     Fix(W521(5, 4, 7)), Fix(W71(5, 7)), Diff(6, 8, W71(5, 9), Keep), Diff(6, 8, W31(5, 9), W31(5, 6)),
     Fix(W53(5, 7)), Fix(W31(5, 7)), Diff(6, 8, W31(5, 9), W31(5, 8)), Diff(6, 8, W53(5, 9), W211(5, 6, 8))],
    // 88
    [Fix(W53(5, 1)), Fix(W521(5, 2, 1)),
     Fix(W521(5, 2, 3)), Fix(W53(5, 3)),
     Fix(W31(5, 1)), Fix(W71(5, 1)),
     Fix(W71(5, 3)), Fix(W31(5, 3)),
     Diff(8, 4, Keep, W11(4, 5)), Diff(8, 4, Keep, Keep),
     Diff(6, 8, Keep, Keep), Diff(6, 8, Keep, W11(6, 5)),
     Diff(8, 4, Keep, W11(8, 4)), Diff(8, 4, Keep, W11(8, 5)),
     Diff(6, 8, Keep, W11(8, 5)), Diff(6, 8, Keep, W11(8, 6))],
    // 89
    [Fix(W53(5, 2)), Fix(W53(5, 2)),
     Fix(W521(5, 2, 3)), Fix(W53(5, 3)),
     Fix(W71(5, 2)), Fix(W71(5, 2)),
     Fix(W71(5, 3)), Fix(W31(5, 3)),
     Diff(8, 4, W31(5, 7), W31(5, 4)), Diff(8, 4, W71(5, 7), Keep),
     Diff(6, 8, W71(5, 9), Keep), Diff(6, 8, W31(5, 9), W31(5, 6)),
     Diff(8, 4, W53(5, 7), W211(5, 8, 4)), Diff(8, 4, W31(5, 7), W31(5, 8)),
     Diff(6, 8, W31(5, 9), W31(5, 8)), Diff(6, 8, W53(5, 9), W211(5, 8, 6))],
    // 90
    [Diff(4, 2, W53(5, 1), W211(5, 2, 4)), Diff(4, 2, W31(5, 1), W31(5, 2)),
     Diff(2, 6, W31(5, 3), W31(5, 2)), Diff(2, 6, W53(5, 3), W211(5, 2, 6)),
     Diff(4, 2, W31(5, 1), W31(5, 4)), Diff(4, 2, W71(5, 1), Keep),
     Diff(2, 6, W71(5, 3), Keep), Diff(2, 6, W31(5, 3), W31(5, 6)),
     Diff(8, 4, W31(5, 7), W31(5, 4)), Diff(8, 4, W71(5, 7), Keep),
     Diff(6, 8, W71(5, 9), Keep), Diff(6, 8, W31(5, 9), W31(5, 6)),
     Diff(8, 4, W53(5, 7), W211(5, 8, 4)), Diff(8, 4, W31(5, 7), W31(5, 8)),
     Diff(6, 8, W31(5, 9), W31(5, 8)), Diff(6, 8, W53(5, 9), W211(5, 8, 6))],
    // 91
    [Diff(4, 2, Keep, W11(2, 4)), Diff(4, 2, Keep, W11(2, 5)),
     Diff(2, 6, W31(5, 3), W31(5, 2)), Diff(2, 6, W53(5, 3), W211(5, 2, 6)),
     Diff(4, 2, Keep, W11(4, 5)), Diff(4, 2, Keep, Keep),
     Diff(2, 6, W71(5, 3), Keep), Diff(2, 6, W31(5, 3), W31(5, 6)),
     Diff(8, 4, W31(5, 7), W31(5, 4)), Diff(8, 4, W71(5, 7), Keep),
     Diff(6, 8, W71(5, 9), Keep), Diff(6, 8, W31(5, 9), W31(5, 6)),
     Diff(8, 4, W53(5, 7), W211(5, 8, 4)), Diff(8, 4, W31(5, 7), W31(5, 8)),
     Diff(6, 8, W31(5, 9), W31(5, 8)), Diff(6, 8, W53(5, 9), W211(5, 8, 6))],
    // 92
    [Fix(W53(5, 1)), Fix(W521(5, 2, 1)),
     Fix(W53(5, 2)), Fix(W53(5, 2)),
     Fix(W31(5, 1)), Fix(W71(5, 1)),
     Fix(W71(5, 2)), Fix(W71(5, 2)),
     Diff(8, 4, W31(5, 7), W31(5, 4)), Diff(8, 4, W71(5, 7), Keep),
     Diff(6, 8, W71(5, 9), Keep), Diff(6, 8, W31(5, 9), W31(5, 6)),
     Diff(8, 4, W53(5, 7), W211(5, 8, 4)), Diff(8, 4, W31(5, 7), W31(5, 8)),
     Diff(6, 8, W31(5, 9), W31(5, 8)), Diff(6, 8, W53(5, 9), W211(5, 8, 6))],
    // 93
    [Fix(W53(5, 2)), Fix(W53(5, 2)),
     Fix(W53(5, 2)), Fix(W53(5, 2)),
     Fix(W71(5, 2)), Fix(W71(5, 2)),
     Fix(W71(5, 2)), Fix(W71(5, 2)),
     Diff(8, 4, W31(5, 7), W31(5, 4)), Diff(8, 4, W71(5, 7), Keep),
     Diff(6, 8, W71(5, 9), Keep), Diff(6, 8, W31(5, 9), W31(5, 6)),
     Diff(8, 4, W53(5, 7), W211(5, 8, 4)), Diff(8, 4, W31(5, 7), W31(5, 8)),
     Diff(6, 8, W31(5, 9), W31(5, 8)), Diff(6, 8, W53(5, 9), W211(5, 8, 6))],
    // 94
    [Diff(4, 2, W53(5, 1), W211(5, 4, 2)), Diff(4, 2, W31(5, 1), W31(5, 2)),
     Diff(2, 6, Keep, W11(2, 5)), Diff(2, 6, Keep, W11(6, 2)),
     Diff(4, 2, W31(5, 1), W31(5, 4)), Diff(4, 2, W71(5, 1), Keep),
     Diff(2, 6, Keep, Keep), Diff(2, 6, Keep, W11(6, 5)),
     Diff(8, 4, W31(5, 7), W31(5, 4)), Diff(8, 4, W71(5, 7), Keep),
     Diff(6, 8, W71(5, 9), Keep), Diff(6, 8, W31(5, 9), W31(5, 6)),
     Diff(8, 4, W53(5, 7), W211(5, 4, 8)), Diff(8, 4, W31(5, 7), W31(5, 8)),
     Diff(6, 8, W31(5, 9), W31(5, 8)), Diff(6, 8, W53(5, 9), W211(5, 6, 8))],
    // 95
    [Diff(4, 2, Keep, W11(2, 4)), Diff(4, 2, Keep, W11(2, 5)),
     Diff(2, 6, Keep, W11(2, 5)), Diff(2, 6, Keep, W11(2, 6)),
     Diff(4, 2, Keep, W11(4, 5)), Diff(4, 2, Keep, Keep),
     Diff(2, 6, Keep, Keep), Diff(2, 6, Keep, W11(6, 5)),
     Fix(W31(5, 7)), Fix(W71(5, 7)),
     Fix(W71(5, 9)), Fix(W31(5, 9)),
     Fix(W53(5, 7)), Fix(W31(5, 7)),
     Fix(W31(5, 9)), Fix(W53(5, 9))],
    // 96
    [Fix(W211(5, 2, 4)), Fix(W521(5, 2, 4)), Fix(W521(5, 2, 6)), Fix(W211(5, 2, 6)),
     Fix(W521(5, 4, 2)), Fix(W611(5, 4, 2)), Fix(W611(5, 6, 2)), Fix(W521(5, 6, 2)),
     Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(W71(5, 9)), Fix(W521(5, 6, 9)),
     Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(W31(5, 9)), Fix(W53(5, 9))],
    // 97
    [Fix(W211(5, 2, 4)), Fix(W521(5, 2, 4)), Fix(W521(5, 2, 6)), Fix(W211(5, 2, 6)),
     Fix(W521(5, 4, 2)), Fix(W611(5, 4, 2)), Fix(W611(5, 6, 2)), Fix(W521(5, 6, 2)),
     Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(W71(5, 9)), Fix(W521(5, 6, 9)),
     Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(W31(5, 9)), Fix(W53(5, 9))],
    // 98
    [Fix(W53(5, 1)), Fix(W31(5, 1)), Fix(W31(5, 3)), Fix(W53(5, 3)),
     Fix(W521(5, 4, 1)), Fix(W71(5, 1)), Fix(W71(5, 3)), Fix(W521(5, 6, 3)),
     Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(W71(5, 9)), Fix(W521(5, 6, 9)),
     Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(W31(5, 9)), Fix(W53(5, 9))],
    // 99
    [Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(W31(5, 3)), Fix(W53(5, 3)),
     Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(W71(5, 3)), Fix(W521(5, 6, 3)),
     Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(W71(5, 9)), Fix(W521(5, 6, 9)),
     Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(W31(5, 9)), Fix(W53(5, 9))],
    // 100
    [Fix(W211(5, 2, 4)), Fix(W521(5, 2, 4)), Fix(W521(5, 2, 6)), Fix(W211(5, 2, 6)),
     Fix(W521(5, 4, 2)), Fix(W611(5, 4, 2)), Fix(W611(5, 6, 2)), Fix(W521(5, 6, 2)),
     Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(W71(5, 9)), Fix(W521(5, 6, 9)),
     Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(W31(5, 9)), Fix(W53(5, 9))],
    // 101
    [Fix(W211(5, 2, 4)), Fix(W521(5, 2, 4)), Fix(W521(5, 2, 6)), Fix(W211(5, 2, 6)),
     Fix(W521(5, 4, 2)), Fix(W611(5, 4, 2)), Fix(W611(5, 6, 2)), Fix(W521(5, 6, 2)),
     Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(W71(5, 9)), Fix(W521(5, 6, 9)),
     Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(W31(5, 9)), Fix(W53(5, 9))],
    // 102
    [Fix(W53(5, 1)), Fix(W31(5, 1)), Fix(W71(5, 6)), Fix(W53(5, 6)),
     Fix(W521(5, 4, 1)), Fix(W71(5, 1)), Fix(W71(5, 6)), Fix(W53(5, 6)),
     Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(W71(5, 9)), Fix(W521(5, 6, 9)),
     Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(W31(5, 9)), Fix(W53(5, 9))],
    // 103
    [Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(W71(5, 6)), Fix(W53(5, 6)),
     Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(W71(5, 6)), Fix(W53(5, 6)),
     Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(W71(5, 9)), Fix(W521(5, 6, 9)),
     Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(W31(5, 9)), Fix(W53(5, 9))],
    // 104
    [Fix(W53(5, 1)), Fix(W521(5, 2, 1)), Fix(W521(5, 2, 6)), Fix(W211(5, 6, 2)),
     Fix(W31(5, 1)), Fix(W71(5, 1)), Fix(W611(5, 2, 6)), Fix(W521(5, 6, 2)),
     Diff(8, 4, Keep, W11(4, 5)), Diff(8, 4, Keep, Keep), Fix(W71(5, 9)), Fix(W521(5, 6, 9)),
     Diff(8, 4, Keep, W11(4, 8)), Diff(8, 4, Keep, W11(8, 5)), Fix(W31(5, 9)), Fix(W53(5, 9))],
    // 105
    [Diff(8, 4, W53(5, 2), W31(5, 4)), Fix(W53(5, 2)), Fix(W521(5, 2, 6)), Fix(W211(5, 6, 2)),
     Diff(8, 4, W71(5, 2), W31(4, 5)), Fix(W71(5, 2)), Fix(W611(5, 2, 6)), Fix(W521(5, 6, 2)),
     Diff(8, 4, Keep, W53(4, 8)), Diff(8, 4, Keep, W611(5, 8, 4)), Fix(W71(5, 9)), Fix(W521(5, 6, 9)),
     Diff(8, 4, Keep, W11(4, 8)), Diff(8, 4, Keep, W211(8, 5, 4)), Fix(W31(5, 9)), Fix(W53(5, 9))],
    // 106
    [Fix(W53(5, 1)), Fix(W31(5, 1)), Fix(W31(5, 3)), Fix(W53(5, 3)),
     Fix(W31(5, 1)), Fix(W71(5, 1)), Fix(W71(5, 3)), Fix(W521(5, 6, 3)),
     Diff(8, 4, Keep, W11(4, 5)), Diff(8, 4, Keep, Keep), Fix(W71(5, 9)), Fix(W521(5, 6, 9)),
     Diff(8, 4, Keep, W11(4, 8)), Diff(8, 4, Keep, W11(8, 5)), Fix(W31(5, 9)), Fix(W53(5, 9))],
    // 107
    [Diff(4, 2, Keep, W11(4, 2)), Diff(4, 2, Keep, W11(2, 5)), Fix(W31(5, 3)), Fix(W53(5, 3)),
     Diff(4, 2, Keep, W11(4, 5)), Diff(4, 2, Keep, Keep), Fix(W71(5, 3)), Fix(W521(5, 6, 3)),
     Diff(8, 4, Keep, W11(4, 5)), Diff(8, 4, Keep, Keep), Fix(W71(5, 9)), Fix(W521(5, 6, 9)),
     Diff(8, 4, Keep, W11(4, 8)), Diff(8, 4, Keep, W11(8, 5)), Fix(W31(5, 9)), Fix(W53(5, 9))],
    // 108
    [Fix(W53(5, 1)), Fix(W521(5, 2, 1)), Fix(W521(5, 2, 6)), Fix(W211(5, 6, 2)),
     Fix(W31(5, 1)), Fix(W71(5, 1)), Fix(W611(5, 2, 6)), Fix(W521(5, 6, 2)),
     Diff(8, 4, Keep, W11(4, 5)), Diff(8, 4, Keep, Keep), Fix(W71(5, 9)), Fix(W521(5, 6, 9)),
     Diff(8, 4, Keep, W11(4, 8)), Diff(8, 4, Keep, W11(8, 5)), Fix(W31(5, 9)), Fix(W53(5, 9))],
    // 109
    [Diff(8, 4, W53(5, 2), W31(5, 4)), Fix(W53(5, 2)), Fix(W521(5, 2, 6)), Fix(W211(5, 6, 2)),
     Diff(8, 4, W71(5, 2), W31(4, 5)), Fix(W71(5, 2)), Fix(W611(5, 2, 6)), Fix(W521(5, 6, 2)),
     Diff(8, 4, Keep, W53(4, 8)), Diff(8, 4, Keep, W611(5, 8, 4)), Fix(W71(5, 9)), Fix(W521(5, 6, 9)),
     Diff(8, 4, Keep, W11(4, 8)), Diff(8, 4, Keep, W211(8, 5, 4)), Fix(W31(5, 9)), Fix(W53(5, 9))],
    // 110
    [Fix(W53(5, 1)), Fix(W31(5, 1)), Fix(W71(5, 6)), Fix(W53(5, 6)),
     Fix(W31(5, 1)), Fix(W71(5, 1)), Fix(W71(5, 6)), Fix(W53(5, 6)),
     Diff(8, 4, Keep, W11(4, 5)), Diff(8, 4, Keep, Keep), Fix(W71(5, 9)), Fix(W521(5, 6, 9)),
     Diff(8, 4, Keep, W11(4, 8)), Diff(8, 4, Keep, W11(8, 5)), Fix(W31(5, 9)), Fix(W53(5, 9))],
    // 111
    [Diff(4, 2, Keep, W211(5, 4, 2)), Fix(Keep), Fix(W71(5, 6)), Fix(W53(5, 6)),
     Fix(Keep), Fix(Keep), Fix(W71(5, 6)), Fix(W53(5, 6)),
     Diff(8, 4, Keep, W11(4, 5)), Diff(8, 4, Keep, Keep), Fix(W71(5, 9)), Fix(W521(5, 6, 9)),
     Diff(8, 4, Keep, W11(4, 8)), Diff(8, 4, Keep, W11(8, 5)), Fix(W31(5, 9)), Fix(W53(5, 9))],
    // 112
    [Fix(W211(5, 2, 4)), Fix(W521(5, 2, 4)),
     Fix(W521(5, 2, 3)), Fix(W53(5, 3)),
     Fix(W521(5, 4, 2)), Fix(W611(5, 4, 2)),
     Fix(W71(5, 3)), Fix(W31(5, 3)),
     Fix(W53(5, 4)), Fix(W71(5, 4)),
     Diff(6, 8, W71(5, 9), W611(5, 6, 8)), Diff(6, 8, W31(5, 9), W211(6, 5, 8)),
     Diff(6, 8, W53(5, 4), W31(5, 8)), Diff(6, 8, W71(5, 4), W31(8, 5)),
     Diff(6, 8, W31(5, 9), W53(8, 6)), Diff(6, 8, W53(5, 9), W11(8, 6))],
    // 113
    [Fix(W211(5, 2, 4)), Fix(W521(5, 2, 4)),
     Fix(W521(5, 2, 3)), Fix(W53(5, 3)),
     Fix(W521(5, 4, 2)), Fix(W611(5, 4, 2)),
     Fix(W71(5, 3)), Fix(W31(5, 3)),
     Fix(W53(5, 4)), Fix(W71(5, 4)),
     Diff(6, 8, W71(5, 9), W611(5, 6, 8)), Diff(6, 8, W31(5, 9), W211(6, 5, 8)),
     Diff(6, 8, W53(5, 4), W31(5, 8)), Diff(6, 8, W71(5, 4), W31(8, 5)),
     Diff(6, 8, W31(5, 9), W53(8, 6)), Diff(6, 8, W53(5, 9), W11(8, 6))],
    // 114
    [Fix(W53(5, 1)), Fix(W31(5, 1)), Diff(2, 6, W31(5, 3), W31(5, 2)), Diff(2, 6, W53(5, 3), W211(5, 6, 2)),
     Fix(W521(5, 4, 1)), Fix(W71(5, 1)), Diff(2, 6, W71(5, 3), Keep), Diff(2, 6, W31(5, 3), W31(5, 6)),
     Fix(W53(5, 4)), Fix(W71(5, 4)), Diff(6, 8, W71(5, 9), Keep), Diff(6, 8, W31(5, 9), W31(5, 6)),
     Fix(W53(5, 4)), Fix(W71(5, 4)), Diff(6, 8, W31(5, 9), W31(5, 8)), Diff(6, 8, W53(5, 9), W211(5, 6, 8))],
    // 115
    [Fix(W53(5, 4)), Fix(W71(5, 4)), Diff(2, 6, W31(5, 3), W31(5, 2)), Diff(2, 6, W53(5, 3), W211(5, 6, 2)),
     Fix(W53(5, 4)), Fix(W71(5, 4)), Diff(2, 6, W71(5, 3), Keep), Diff(2, 6, W31(5, 3), W31(5, 6)),
     Fix(W53(5, 4)), Fix(W71(5, 4)), Diff(6, 8, W71(5, 9), Keep), Diff(6, 8, W31(5, 9), W31(5, 6)),
     Fix(W53(5, 4)), Fix(W71(5, 4)), Diff(6, 8, W31(5, 9), W31(5, 8)), Diff(6, 8, W53(5, 9), W211(5, 6, 8))],
    // 116
    [Fix(W211(5, 2, 4)), Fix(W521(5, 2, 4)), Fix(W53(5, 2)), Fix(W53(5, 2)),
     Fix(W521(5, 4, 2)), Fix(W611(5, 4, 2)), Fix(W71(5, 2)), Fix(W71(5, 2)),
     Fix(W53(5, 4)), Fix(W71(5, 4)), Diff(6, 8, W71(5, 9), Keep), Diff(6, 8, W31(5, 9), W31(5, 6)),
     Fix(W53(5, 4)), Fix(W71(5, 4)), Diff(6, 8, W31(5, 9), W31(5, 8)), Diff(6, 8, W53(5, 9), W211(5, 8, 6))],
    // 117
    [Fix(W211(5, 2, 4)), Fix(W521(5, 2, 4)), Fix(W53(5, 2)), Fix(W53(5, 2)),
     Fix(W521(5, 4, 2)), Fix(W611(5, 4, 2)), Fix(W71(5, 2)), Fix(W71(5, 2)),
     Fix(W53(5, 4)), Fix(W71(5, 4)), Diff(6, 8, W71(5, 9), Keep), Diff(6, 8, W31(5, 9), W31(5, 6)),
     Fix(W53(5, 4)), Fix(W71(5, 4)), Diff(6, 8, W31(5, 9), W31(5, 8)), Diff(6, 8, W53(5, 9), W211(5, 8, 6))],
    // 118
    [Fix(W53(5, 1)), Fix(W31(5, 1)), Diff(2, 6, Keep, W11(2, 5)), Diff(2, 6, Keep, W11(6, 2)),
     Fix(W521(5, 4, 1)), Fix(W71(5, 1)), Diff(2, 6, Keep, Keep), Diff(2, 6, Keep, W11(6, 5)),
     Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(W71(5, 9)), Fix(W31(5, 9)),
     Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(W31(5, 9)), Fix(W53(5, 9))],
    // 119
    [Diff(2, 6, W53(5, 4), W31(5, 2)), Diff(2, 6, W71(5, 4), W31(2, 5)),
     Diff(2, 6, Keep, W53(2, 6)), Diff(2, 6, Keep, W11(2, 6)),
     Fix(W53(5, 4)), Fix(W71(5, 4)),
     Diff(2, 6, Keep, W611(5, 6, 2)), Diff(2, 6, Keep, W211(6, 5, 2)),
     Fix(W53(5, 4)), Fix(W71(5, 4)),
     Fix(W71(5, 9)), Fix(W31(5, 9)),
     Fix(W53(5, 4)), Fix(W71(5, 4)),
     Fix(W31(5, 9)), Fix(W53(5, 9))],
    // 120
    [Fix(W53(5, 1)), Fix(W521(5, 2, 1)), Fix(W521(5, 2, 3)), Fix(W53(5, 3)),
     Fix(W31(5, 1)), Fix(W71(5, 1)), Fix(W71(5, 3)), Fix(W31(5, 3)),
     Diff(8, 4, Keep, W11(4, 5)), Diff(8, 4, Keep, Keep), Fix(W71(5, 9)), Fix(W31(5, 9)),
     Diff(8, 4, Keep, W11(8, 4)), Diff(8, 4, Keep, W11(8, 5)), Fix(W31(5, 9)), Fix(W53(5, 9))],
    // 121
    [Fix(W53(5, 2)), Fix(W53(5, 2)),
     Fix(W521(5, 2, 3)), Fix(W53(5, 3)),
     Fix(W71(5, 2)), Fix(W71(5, 2)),
     Fix(W71(5, 3)), Fix(W31(5, 3)),
     Diff(8, 4, Keep, W11(4, 5)), Diff(8, 4, Keep, Keep),
     Diff(6, 8, W71(5, 9), Keep), Diff(6, 8, W31(5, 9), W31(5, 6)),
     Diff(8, 4, Keep, W11(8, 4)), Diff(8, 4, Keep, W11(8, 5)),
     Diff(6, 8, W31(5, 9), W31(5, 8)), Diff(6, 8, W53(5, 9), W211(5, 8, 6))],
    // 122
    [Diff(4, 2, W53(5, 1), W211(5, 4, 2)), Diff(4, 2, W31(5, 1), W31(5, 2)),
     Diff(2, 6, W31(5, 3), W31(5, 2)), Diff(2, 6, W53(5, 3), W211(5, 6, 2)),
     Diff(4, 2, W31(5, 1), W31(5, 4)), Diff(4, 2, W71(5, 1), Keep),
     Diff(2, 6, W71(5, 3), Keep), Diff(2, 6, W31(5, 3), W31(5, 6)),
     Diff(8, 4, Keep, W11(4, 5)), Diff(8, 4, Keep, Keep),
     Diff(6, 8, W71(5, 9), Keep), Diff(6, 8, W31(5, 9), W31(5, 6)),
     Diff(8, 4, Keep, W11(4, 8)), Diff(8, 4, Keep, W11(8, 5)),
     Diff(6, 8, W31(5, 9), W31(5, 8)), Diff(6, 8, W53(5, 9), W211(5, 6, 8))],
    // 123
    [Diff(4, 2, Keep, W11(4, 2)), Diff(4, 2, Keep, W11(2, 5)), Fix(W31(5, 3)), Fix(W53(5, 3)),
     Diff(4, 2, Keep, W11(4, 5)), Diff(4, 2, Keep, Keep), Fix(W71(5, 3)), Fix(W31(5, 3)),
     Diff(8, 4, Keep, W11(4, 5)), Diff(8, 4, Keep, Keep), Fix(W71(5, 9)), Fix(W31(5, 9)),
     Diff(8, 4, Keep, W11(4, 8)), Diff(8, 4, Keep, W11(8, 5)), Fix(W31(5, 9)), Fix(W53(5, 9))],
    // 124
    [Fix(W53(5, 1)), Fix(W521(5, 2, 1)), Fix(W53(5, 2)), Fix(W53(5, 2)),
     Fix(W31(5, 1)), Fix(W71(5, 1)), Fix(W71(5, 2)), Fix(W71(5, 2)),
     Diff(8, 4, Keep, W11(4, 5)), Diff(8, 4, Keep, Keep), Fix(W71(5, 9)), Fix(W31(5, 9)),
     Diff(8, 4, Keep, W11(8, 4)), Diff(8, 4, Keep, W11(8, 5)), Fix(W31(5, 9)), Fix(W53(5, 9))],
    // 125
    [Diff(8, 4, W53(5, 2), W31(5, 4)), Fix(W53(5, 2)), Fix(W53(5, 2)), Fix(W53(5, 2)),
     Diff(8, 4, W71(5, 2), W31(4, 5)), Fix(W71(5, 2)), Fix(W71(5, 2)), Fix(W71(5, 2)),
     Diff(8, 4, Keep, W53(4, 8)), Diff(8, 4, Keep, W611(5, 8, 4)), Fix(W71(5, 9)), Fix(W31(5, 9)),
     Diff(8, 4, Keep, W11(4, 8)), Diff(8, 4, Keep, W211(8, 5, 4)), Fix(W31(5, 9)), Fix(W53(5, 9))],
    // 126
    [Fix(W53(5, 1)), Fix(W31(5, 1)), Diff(2, 6, Keep, W11(2, 5)), Diff(2, 6, Keep, W11(2, 6)),
     Fix(W31(5, 1)), Fix(W71(5, 1)), Diff(2, 6, Keep, Keep), Diff(2, 6, Keep, W11(6, 5)),
     Diff(8, 4, Keep, W11(4, 5)), Diff(8, 4, Keep, Keep), Fix(W71(5, 9)), Fix(W31(5, 9)),
     Diff(8, 4, Keep, W11(8, 4)), Diff(8, 4, Keep, W11(8, 5)), Fix(W31(5, 9)), Fix(W53(5, 9))],
    // 127
    [Diff(4, 2, Keep, W211(5, 2, 4)), Fix(Keep), Diff(2, 6, Keep, W11(2, 5)), Diff(2, 6, Keep, W11(2, 6)),
     Fix(Keep), Fix(Keep), Diff(2, 6, Keep, Keep), Diff(2, 6, Keep, W11(6, 5)),
     Diff(8, 4, Keep, W11(4, 5)), Diff(8, 4, Keep, Keep), Fix(W71(5, 9)), Fix(W31(5, 9)),
     Diff(8, 4, Keep, W11(8, 4)), Diff(8, 4, Keep, W11(8, 5)), Fix(W31(5, 9)), Fix(W53(5, 9))],
    // 128
    [Fix(W211(5, 2, 4)), Fix(W521(5, 2, 4)), Fix(W521(5, 2, 6)), Fix(W211(5, 2, 6)),
     Fix(W521(5, 4, 2)), Fix(W611(5, 4, 2)), Fix(W611(5, 6, 2)), Fix(W521(5, 6, 2)),
     Fix(W521(5, 4, 8)), Fix(W611(5, 4, 8)), Fix(W611(5, 6, 8)), Fix(W521(5, 6, 8)),
     Fix(W211(5, 8, 4)), Fix(W521(5, 8, 4)), Fix(W521(5, 8, 6)), Fix(W211(5, 8, 6))],
    // 129
    [Fix(W211(5, 2, 4)), Fix(W521(5, 2, 4)), Fix(W521(5, 2, 6)), Fix(W211(5, 2, 6)),
     Fix(W521(5, 4, 2)), Fix(W611(5, 4, 2)), Fix(W611(5, 6, 2)), Fix(W521(5, 6, 2)),
     Fix(W521(5, 4, 8)), Fix(W611(5, 4, 8)), Fix(W611(5, 6, 8)), Fix(W521(5, 6, 8)),
     Fix(W211(5, 8, 4)), Fix(W521(5, 8, 4)), Fix(W521(5, 8, 6)), Fix(W211(5, 8, 6))],
    // 130
    [Fix(W53(5, 1)), Fix(W31(5, 1)), Fix(W31(5, 3)), Fix(W53(5, 3)),
     Fix(W521(5, 4, 1)), Fix(W71(5, 1)), Fix(W71(5, 3)), Fix(W521(5, 6, 3)),
     Fix(W521(5, 4, 8)), Fix(W611(5, 4, 8)), Fix(W611(5, 6, 8)), Fix(W521(5, 6, 8)),
     Fix(W211(5, 8, 4)), Fix(W521(5, 8, 4)), Fix(W521(5, 8, 6)), Fix(W211(5, 8, 6))],
    // 131
    [Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(W31(5, 3)), Fix(W53(5, 3)),
     Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(W71(5, 3)), Fix(W521(5, 6, 3)),
     Fix(W521(5, 4, 8)), Fix(W611(5, 4, 8)), Fix(W611(5, 6, 8)), Fix(W521(5, 6, 8)),
     Fix(W211(5, 8, 4)), Fix(W521(5, 8, 4)), Fix(W521(5, 8, 6)), Fix(W211(5, 8, 6))],
    // 132
    [Fix(W211(5, 2, 4)), Fix(W521(5, 2, 4)), Fix(W521(5, 2, 6)), Fix(W211(5, 2, 6)),
     Fix(W521(5, 4, 2)), Fix(W611(5, 4, 2)), Fix(W611(5, 6, 2)), Fix(W521(5, 6, 2)),
     Fix(W521(5, 4, 8)), Fix(W611(5, 4, 8)), Fix(W611(5, 6, 8)), Fix(W521(5, 6, 8)),
     Fix(W211(5, 8, 4)), Fix(W521(5, 8, 4)), Fix(W521(5, 8, 6)), Fix(W211(5, 8, 6))],
    // 133
    [Fix(W211(5, 2, 4)), Fix(W521(5, 2, 4)), Fix(W521(5, 2, 6)), Fix(W211(5, 2, 6)),
     Fix(W521(5, 4, 2)), Fix(W611(5, 4, 2)), Fix(W611(5, 6, 2)), Fix(W521(5, 6, 2)),
     Fix(W521(5, 4, 8)), Fix(W611(5, 4, 8)), Fix(W611(5, 6, 8)), Fix(W521(5, 6, 8)),
     Fix(W211(5, 8, 4)), Fix(W521(5, 8, 4)), Fix(W521(5, 8, 6)), Fix(W211(5, 8, 6))],
    // 134
    [Fix(W53(5, 1)), Fix(W31(5, 1)), Fix(W71(5, 6)), Fix(W53(5, 6)),
     Fix(W521(5, 4, 1)), Fix(W71(5, 1)), Fix(W71(5, 6)), Fix(W53(5, 6)),
     Fix(W521(5, 4, 8)), Fix(W611(5, 4, 8)), Fix(W611(5, 6, 8)), Fix(W521(5, 6, 8)),
     Fix(W211(5, 8, 4)), Fix(W521(5, 8, 4)), Fix(W521(5, 8, 6)), Fix(W211(5, 8, 6))],
    // 135
    [Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(W71(5, 6)), Fix(W53(5, 6)),
     Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(W71(5, 6)), Fix(W53(5, 6)),
     Fix(W521(5, 4, 8)), Fix(W611(5, 4, 8)), Fix(W611(5, 6, 8)), Fix(W521(5, 6, 8)),
     Fix(W211(5, 8, 4)), Fix(W521(5, 8, 4)), Fix(W521(5, 8, 6)), Fix(W211(5, 8, 6))],
    // 136
    [Fix(W53(5, 1)), Fix(W521(5, 2, 1)), Fix(W521(5, 2, 6)), Fix(W211(5, 6, 2)),
     Fix(W31(5, 1)), Fix(W71(5, 1)), Fix(W611(5, 2, 6)), Fix(W521(5, 6, 2)),
     Fix(W31(5, 7)), Fix(W71(5, 7)), Fix(W611(5, 8, 6)), Fix(W521(5, 6, 8)),
     Fix(W53(5, 7)), Fix(W521(5, 8, 7)), Fix(W521(5, 8, 6)), Fix(W211(5, 6, 8))],
    // 137
    [Fix(W53(5, 2)), Fix(W53(5, 2)), Fix(W521(5, 2, 6)), Fix(W211(5, 6, 2)),
     Fix(W71(5, 2)), Fix(W71(5, 2)), Fix(W611(5, 2, 6)), Fix(W521(5, 6, 2)),
     Fix(W31(5, 7)), Fix(W71(5, 7)), Fix(W611(5, 8, 6)), Fix(W521(5, 6, 8)),
     Fix(W53(5, 7)), Fix(W521(5, 8, 7)), Fix(W521(5, 8, 6)), Fix(W211(5, 6, 8))],
    // 138
    [Diff(4, 2, W53(5, 1), W11(2, 4)), Diff(4, 2, W31(5, 1), W11(2, 5)), Fix(W31(5, 3)), Fix(W53(5, 3)),
     Diff(4, 2, W31(5, 1), W11(4, 5)), Diff(4, 2, W71(5, 1), Keep), Fix(W71(5, 3)), Fix(W521(5, 6, 3)),
     Fix(W31(5, 7)), Fix(W71(5, 7)), Fix(W611(5, 6, 8)), Fix(W521(5, 6, 8)),
     Fix(W53(5, 7)), Fix(W521(5, 8, 7)), Fix(W521(5, 8, 6)), Fix(W211(5, 8, 6))],
    // 139
    [Diff(4, 2, Keep, W11(2, 4)), Diff(4, 2, Keep, W11(2, 5)), Fix(W31(5, 3)), Fix(W53(5, 3)),
     Diff(4, 2, Keep, W11(4, 5)), Diff(4, 2, Keep, Keep), Fix(W71(5, 3)), Fix(W521(5, 6, 3)),
     Fix(W31(5, 7)), Fix(W71(5, 7)), Fix(W611(5, 6, 8)), Fix(W521(5, 6, 8)),
     Fix(W53(5, 7)), Fix(W521(5, 8, 7)), Fix(W521(5, 8, 6)), Fix(W211(5, 8, 6))],
    // 140
    [Fix(W53(5, 1)), Fix(W521(5, 2, 1)), Fix(W521(5, 2, 6)), Fix(W211(5, 6, 2)),
     Fix(W31(5, 1)), Fix(W71(5, 1)), Fix(W611(5, 2, 6)), Fix(W521(5, 6, 2)),
     Fix(W31(5, 7)), Fix(W71(5, 7)), Fix(W611(5, 8, 6)), Fix(W521(5, 6, 8)),
     Fix(W53(5, 7)), Fix(W521(5, 8, 7)), Fix(W521(5, 8, 6)), Fix(W211(5, 6, 8))],
    // 141
    [Fix(W53(5, 2)), Fix(W53(5, 2)), Fix(W521(5, 2, 6)), Fix(W211(5, 6, 2)),
     Fix(W71(5, 2)), Fix(W71(5, 2)), Fix(W611(5, 2, 6)), Fix(W521(5, 6, 2)),
     Fix(W31(5, 7)), Fix(W71(5, 7)), Fix(W611(5, 8, 6)), Fix(W521(5, 6, 8)),
     Fix(W53(5, 7)), Fix(W521(5, 8, 7)), Fix(W521(5, 8, 6)), Fix(W211(5, 6, 8))],
    // 142
    [Diff(4, 2, W53(5, 1), W11(2, 4)), Diff(4, 2, W31(5, 1), W53(2, 4)),
     Diff(4, 2, W71(5, 6), W31(2, 5)), Diff(4, 2, W53(5, 6), W31(5, 2)),
     Diff(4, 2, W31(5, 1), W211(4, 5, 2)), Diff(4, 2, W71(5, 1), W611(5, 4, 2)),
     Fix(W71(5, 6)), Fix(W53(5, 6)),
     Fix(W31(5, 7)), Fix(W71(5, 7)),
     Fix(W611(5, 6, 8)), Fix(W521(5, 6, 8)),
     Fix(W53(5, 7)), Fix(W521(5, 8, 7)),
     Fix(W521(5, 8, 6)), Fix(W211(5, 8, 6))],
    // 143
    [Diff(4, 2, Keep, W11(2, 4)), Diff(4, 2, Keep, W53(2, 4)),
     Diff(4, 2, W71(5, 6), W31(2, 5)), Diff(4, 2, W53(5, 6), W31(5, 2)),
     Diff(4, 2, Keep, W211(4, 5, 2)), Diff(4, 2, Keep, W611(5, 4, 2)),
     Fix(W71(5, 6)), Fix(W53(5, 6)),
     Fix(W31(5, 7)), Fix(W71(5, 7)),
     Fix(W611(5, 6, 8)), Fix(W521(5, 6, 8)),
     Fix(W53(5, 7)), Fix(W521(5, 8, 7)),
     Fix(W521(5, 8, 6)), Fix(W211(5, 8, 6))],
    // 144
    [Fix(W211(5, 4, 2)), Fix(W521(5, 2, 4)), Fix(W521(5, 2, 3)), Fix(W53(5, 3)),
     Fix(W521(5, 4, 2)), Fix(W611(5, 2, 4)), Fix(W71(5, 3)), Fix(W31(5, 3)),
     Fix(W521(5, 4, 8)), Fix(W611(5, 8, 4)), Fix(W71(5, 8)), Fix(W71(5, 8)),
     Fix(W211(5, 4, 8)), Fix(W521(5, 8, 4)), Fix(W53(5, 8)), Fix(W53(5, 8))],
    // 145
    [Fix(W211(5, 4, 2)), Fix(W521(5, 2, 4)), Fix(W521(5, 2, 3)), Fix(W53(5, 3)),
     Fix(W521(5, 4, 2)), Fix(W611(5, 2, 4)), Fix(W71(5, 3)), Fix(W31(5, 3)),
     Fix(W521(5, 4, 8)), Fix(W611(5, 8, 4)), Fix(W71(5, 8)), Fix(W71(5, 8)),
     Fix(W211(5, 4, 8)), Fix(W521(5, 8, 4)), Fix(W53(5, 8)), Fix(W53(5, 8))],
    // 146
    [Fix(W53(5, 1)), Fix(W31(5, 1)),
     Diff(2, 6, W31(5, 3), W211(2, 5, 6)), Diff(2, 6, W53(5, 3), W11(6, 2)),
     Fix(W521(5, 4, 1)), Fix(W71(5, 1)),
     Diff(2, 6, W71(5, 3), W611(5, 2, 6)), Diff(2, 6, W31(5, 3), W53(6, 2)),
     Fix(W521(5, 4, 8)), Fix(W611(5, 8, 4)),
     Fix(W71(5, 8)), Diff(2, 6, W71(5, 8), W31(6, 5)),
     Fix(W211(5, 4, 8)), Fix(W521(5, 8, 4)),
     Fix(W53(5, 8)), Diff(2, 6, W53(5, 8), W31(5, 6))],
    // 147
    [Fix(W53(5, 4)), Fix(W71(5, 4)), Diff(2, 6, W31(5, 3), W31(5, 2)), Diff(2, 6, W53(5, 3), W211(5, 6, 2)),
     Fix(W53(5, 4)), Fix(W71(5, 4)), Diff(2, 6, W71(5, 3), Keep), Diff(2, 6, W31(5, 3), W31(5, 6)),
     Fix(W521(5, 4, 8)), Fix(W611(5, 8, 4)), Fix(W71(5, 8)), Fix(W71(5, 8)),
     Fix(W211(5, 4, 8)), Fix(W521(5, 8, 4)), Fix(W53(5, 8)), Fix(W53(5, 8))],
    // 148
    [Fix(W211(5, 4, 2)), Fix(W521(5, 2, 4)), Fix(W53(5, 2)), Fix(W53(5, 2)),
     Fix(W521(5, 4, 2)), Fix(W611(5, 2, 4)), Fix(W71(5, 2)), Fix(W71(5, 2)),
     Fix(W521(5, 4, 8)), Fix(W611(5, 8, 4)), Fix(W71(5, 8)), Fix(W71(5, 8)),
     Fix(W211(5, 4, 8)), Fix(W521(5, 8, 4)), Fix(W53(5, 8)), Fix(W53(5, 8))],
    // 149
    [Fix(W211(5, 4, 2)), Fix(W521(5, 2, 4)), Fix(W53(5, 2)), Fix(W53(5, 2)),
     Fix(W521(5, 4, 2)), Fix(W611(5, 2, 4)), Fix(W71(5, 2)), Fix(W71(5, 2)),
     Fix(W521(5, 4, 8)), Fix(W611(5, 8, 4)), Fix(W71(5, 8)), Fix(W71(5, 8)),
     Fix(W211(5, 4, 8)), Fix(W521(5, 8, 4)), Fix(W53(5, 8)), Fix(W53(5, 8))],
    // 150
    [Fix(W53(5, 1)), Fix(W31(5, 1)), Diff(2, 6, Keep, W211(2, 5, 6)), Diff(2, 6, Keep, W11(6, 2)),
     Fix(W521(5, 4, 1)), Fix(W71(5, 1)), Diff(2, 6, Keep, W611(5, 2, 6)), Diff(2, 6, Keep, W53(6, 2)),
     Fix(W521(5, 4, 8)), Fix(W611(5, 8, 4)), Fix(W71(5, 8)), Diff(2, 6, W71(5, 8), W31(6, 5)),
     Fix(W211(5, 4, 8)), Fix(W521(5, 8, 4)), Fix(W53(5, 8)), Diff(2, 6, W53(5, 8), W31(5, 6))],
    // 151
    [Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(Keep), Diff(2, 6, Keep, W211(5, 6, 2)),
     Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(Keep), Fix(Keep),
     Fix(W521(5, 4, 8)), Fix(W611(5, 8, 4)), Fix(W71(5, 8)), Fix(W71(5, 8)),
     Fix(W211(5, 4, 8)), Fix(W521(5, 8, 4)), Fix(W53(5, 8)), Fix(W53(5, 8))],
    // 152
    [Fix(W53(5, 1)), Fix(W521(5, 2, 1)), Fix(W521(5, 2, 3)), Fix(W53(5, 3)),
     Fix(W31(5, 1)), Fix(W71(5, 1)), Fix(W71(5, 3)), Fix(W31(5, 3)),
     Fix(W31(5, 7)), Fix(W71(5, 7)), Fix(W71(5, 8)), Fix(W71(5, 8)),
     Fix(W53(5, 7)), Fix(W521(5, 8, 7)), Fix(W53(5, 8)), Fix(W53(5, 8))],
    // 153
    [Fix(W53(5, 2)), Fix(W53(5, 2)), Fix(W521(5, 2, 3)), Fix(W53(5, 3)),
     Fix(W71(5, 2)), Fix(W71(5, 2)), Fix(W71(5, 3)), Fix(W31(5, 3)),
     Fix(W31(5, 7)), Fix(W71(5, 7)), Fix(W71(5, 8)), Fix(W71(5, 8)),
     Fix(W53(5, 7)), Fix(W521(5, 8, 7)), Fix(W53(5, 8)), Fix(W53(5, 8))],
    // 154
    [Diff(4, 2, W53(5, 1), W211(5, 2, 4)), Diff(4, 2, W31(5, 1), W31(5, 2)),
     Diff(2, 6, W31(5, 3), W31(5, 2)), Diff(2, 6, W53(5, 3), W211(5, 2, 6)),
     Diff(4, 2, W31(5, 1), W31(5, 4)), Diff(4, 2, W71(5, 1), Keep),
     Diff(2, 6, W71(5, 3), Keep), Diff(2, 6, W31(5, 3), W31(5, 6)),
     Fix(W31(5, 7)), Fix(W71(5, 7)),
     Fix(W71(5, 8)), Fix(W71(5, 8)),
     Fix(W53(5, 7)), Fix(W521(5, 8, 7)),
     Fix(W53(5, 8)), Fix(W53(5, 8))],
    // 155
    [Diff(4, 2, Keep, W11(2, 4)), Diff(4, 2, Keep, W11(2, 5)), Fix(W31(5, 3)), Fix(W53(5, 3)),
     Diff(4, 2, Keep, W11(4, 5)), Diff(4, 2, Keep, Keep), Fix(W71(5, 3)), Fix(W31(5, 3)),
     Fix(W31(5, 7)), Fix(W71(5, 7)), Fix(W71(5, 8)), Fix(W71(5, 8)),
     Fix(W53(5, 7)), Fix(W521(5, 8, 7)), Fix(W53(5, 8)), Fix(W53(5, 8))],
    // 156
    [Fix(W53(5, 1)), Fix(W521(5, 2, 1)), Fix(W53(5, 2)), Fix(W53(5, 2)),
     Fix(W31(5, 1)), Fix(W71(5, 1)), Fix(W71(5, 2)), Fix(W71(5, 2)),
     Fix(W31(5, 7)), Fix(W71(5, 7)), Fix(W71(5, 8)), Fix(W71(5, 8)),
     Fix(W53(5, 7)), Fix(W521(5, 8, 7)), Fix(W53(5, 8)), Fix(W53(5, 8))],
    // 157
    [Fix(W53(5, 2)), Fix(W53(5, 2)), Fix(W53(5, 2)), Fix(W53(5, 2)),
     Fix(W71(5, 2)), Fix(W71(5, 2)), Fix(W71(5, 2)), Fix(W71(5, 2)),
     Fix(W31(5, 7)), Fix(W71(5, 7)), Fix(W71(5, 8)), Fix(W71(5, 8)),
     Fix(W53(5, 7)), Fix(W521(5, 8, 7)), Fix(W53(5, 8)), Fix(W53(5, 8))],
    // 158
    [Diff(4, 2, W53(5, 1), W211(5, 2, 4)), Diff(4, 2, W31(5, 1), W31(5, 2)),
     Diff(2, 6, Keep, W11(2, 5)), Diff(2, 6, Keep, W11(2, 6)),
     Diff(4, 2, W31(5, 1), W31(5, 4)), Diff(4, 2, W71(5, 1), Keep),
     Diff(2, 6, Keep, Keep), Diff(2, 6, Keep, W11(6, 5)),
     Fix(W31(5, 7)), Fix(W71(5, 7)),
     Fix(W71(5, 8)), Fix(W71(5, 8)),
     Fix(W53(5, 7)), Fix(W521(5, 8, 7)),
     Fix(W53(5, 8)), Fix(W53(5, 8))],
    // 159
    [Diff(4, 2, Keep, W11(2, 4)), Diff(4, 2, Keep, W11(2, 5)), Fix(Keep), Diff(2, 6, Keep, W211(5, 2, 6)),
     Diff(4, 2, Keep, W11(4, 5)), Diff(4, 2, Keep, Keep), Fix(Keep), Fix(Keep),
     Fix(W31(5, 7)), Fix(W71(5, 7)), Fix(W71(5, 8)), Fix(W71(5, 8)),
     Fix(W53(5, 7)), Fix(W521(5, 8, 7)), Fix(W53(5, 8)), Fix(W53(5, 8))],
    // 160
    [Fix(W211(5, 2, 4)), Fix(W521(5, 2, 4)), Fix(W521(5, 2, 6)), Fix(W211(5, 2, 6)),
     Fix(W521(5, 4, 2)), Fix(W611(5, 4, 2)), Fix(W611(5, 6, 2)), Fix(W521(5, 6, 2)),
     Fix(W521(5, 4, 8)), Fix(W611(5, 4, 8)), Fix(W611(5, 6, 8)), Fix(W521(5, 6, 8)),
     Fix(W211(5, 8, 4)), Fix(W521(5, 8, 4)), Fix(W521(5, 8, 6)), Fix(W211(5, 8, 6))],
    // 161
    [Fix(W211(5, 2, 4)), Fix(W521(5, 2, 4)), Fix(W521(5, 2, 6)), Fix(W211(5, 2, 6)),
     Fix(W521(5, 4, 2)), Fix(W611(5, 4, 2)), Fix(W611(5, 6, 2)), Fix(W521(5, 6, 2)),
     Fix(W521(5, 4, 8)), Fix(W611(5, 4, 8)), Fix(W611(5, 6, 8)), Fix(W521(5, 6, 8)),
     Fix(W211(5, 8, 4)), Fix(W521(5, 8, 4)), Fix(W521(5, 8, 6)), Fix(W211(5, 8, 6))],
    // 162
    [Fix(W53(5, 1)), Fix(W31(5, 1)), Fix(W31(5, 3)), Fix(W53(5, 3)),
     Fix(W521(5, 4, 1)), Fix(W71(5, 1)), Fix(W71(5, 3)), Fix(W521(5, 6, 3)),
     Fix(W521(5, 4, 8)), Fix(W611(5, 4, 8)), Fix(W611(5, 6, 8)), Fix(W521(5, 6, 8)),
     Fix(W211(5, 8, 4)), Fix(W521(5, 8, 4)), Fix(W521(5, 8, 6)), Fix(W211(5, 8, 6))],
    // 163
    [Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(W31(5, 3)), Fix(W53(5, 3)),
     Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(W71(5, 3)), Fix(W521(5, 6, 3)),
     Fix(W521(5, 4, 8)), Fix(W611(5, 4, 8)), Fix(W611(5, 6, 8)), Fix(W521(5, 6, 8)),
     Fix(W211(5, 8, 4)), Fix(W521(5, 8, 4)), Fix(W521(5, 8, 6)), Fix(W211(5, 8, 6))],
    // 164
    [Fix(W211(5, 2, 4)), Fix(W521(5, 2, 4)), Fix(W521(5, 2, 6)), Fix(W211(5, 2, 6)),
     Fix(W521(5, 4, 2)), Fix(W611(5, 4, 2)), Fix(W611(5, 6, 2)), Fix(W521(5, 6, 2)),
     Fix(W521(5, 4, 8)), Fix(W611(5, 4, 8)), Fix(W611(5, 6, 8)), Fix(W521(5, 6, 8)),
     Fix(W211(5, 8, 4)), Fix(W521(5, 8, 4)), Fix(W521(5, 8, 6)), Fix(W211(5, 8, 6))],
    // 165
    [Fix(W211(5, 2, 4)), Fix(W521(5, 2, 4)), Fix(W521(5, 2, 6)), Fix(W211(5, 2, 6)),
     Fix(W521(5, 4, 2)), Fix(W611(5, 4, 2)), Fix(W611(5, 6, 2)), Fix(W521(5, 6, 2)),
     Fix(W521(5, 4, 8)), Fix(W611(5, 4, 8)), Fix(W611(5, 6, 8)), Fix(W521(5, 6, 8)),
     Fix(W211(5, 8, 4)), Fix(W521(5, 8, 4)), Fix(W521(5, 8, 6)), Fix(W211(5, 8, 6))],
    // 166
    [Fix(W53(5, 1)), Fix(W31(5, 1)), Fix(W71(5, 6)), Fix(W53(5, 6)),
     Fix(W521(5, 4, 1)), Fix(W71(5, 1)), Fix(W71(5, 6)), Fix(W53(5, 6)),
     Fix(W521(5, 4, 8)), Fix(W611(5, 4, 8)), Fix(W611(5, 6, 8)), Fix(W521(5, 6, 8)),
     Fix(W211(5, 8, 4)), Fix(W521(5, 8, 4)), Fix(W521(5, 8, 6)), Fix(W211(5, 8, 6))],
    // 167
    [Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(W71(5, 6)), Fix(W53(5, 6)),
     Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(W71(5, 6)), Fix(W53(5, 6)),
     Fix(W521(5, 4, 8)), Fix(W611(5, 4, 8)), Fix(W611(5, 6, 8)), Fix(W521(5, 6, 8)),
     Fix(W211(5, 8, 4)), Fix(W521(5, 8, 4)), Fix(W521(5, 8, 6)), Fix(W211(5, 8, 6))],
    // 168
    [Fix(W53(5, 1)), Fix(W521(5, 2, 1)), Fix(W521(5, 2, 6)), Fix(W211(5, 6, 2)),
     Fix(W31(5, 1)), Fix(W71(5, 1)), Fix(W611(5, 2, 6)), Fix(W521(5, 6, 2)),
     Fix(W71(5, 8)), Fix(W71(5, 8)), Fix(W611(5, 8, 6)), Fix(W521(5, 6, 8)),
     Fix(W53(5, 8)), Fix(W53(5, 8)), Fix(W521(5, 8, 6)), Fix(W211(5, 6, 8))],
    // 169
    [Fix(W53(5, 2)), Fix(W53(5, 2)), Fix(W521(5, 2, 6)), Fix(W211(5, 6, 2)),
     Fix(W71(5, 2)), Fix(W71(5, 2)), Fix(W611(5, 2, 6)), Fix(W521(5, 6, 2)),
     Fix(W71(5, 8)), Fix(W71(5, 8)), Fix(W611(5, 8, 6)), Fix(W521(5, 6, 8)),
     Fix(W53(5, 8)), Fix(W53(5, 8)), Fix(W521(5, 8, 6)), Fix(W211(5, 6, 8))],
    // 170
    [Diff(4, 2, W53(5, 1), W11(4, 2)), Diff(4, 2, W31(5, 1), W211(2, 5, 4)),
     Fix(W31(5, 3)), Fix(W53(5, 3)),
     Diff(4, 2, W31(5, 1), W53(4, 2)), Diff(4, 2, W71(5, 1), W611(5, 2, 4)),
     Fix(W71(5, 3)), Fix(W521(5, 6, 3)),
     Diff(4, 2, W71(5, 8), W31(4, 5)), Fix(W71(5, 8)),
     Fix(W611(5, 8, 6)), Fix(W521(5, 6, 8)),
     Diff(4, 2, W53(5, 8), W31(5, 4)), Fix(W53(5, 8)),
     Fix(W521(5, 8, 6)), Fix(W211(5, 6, 8))],
    // 171
    [Diff(4, 2, Keep, W11(4, 2)), Diff(4, 2, Keep, W211(2, 5, 4)), Fix(W31(5, 3)), Fix(W53(5, 3)),
     Diff(4, 2, Keep, W53(4, 2)), Diff(4, 2, Keep, W611(5, 2, 4)), Fix(W71(5, 3)), Fix(W521(5, 6, 3)),
     Diff(4, 2, W71(5, 8), W31(4, 5)), Fix(W71(5, 8)), Fix(W611(5, 8, 6)), Fix(W521(5, 6, 8)),
     Diff(4, 2, W53(5, 8), W31(5, 4)), Fix(W53(5, 8)), Fix(W521(5, 8, 6)), Fix(W211(5, 6, 8))],
    // 172
    [Fix(W53(5, 1)), Fix(W521(5, 2, 1)), Fix(W521(5, 2, 6)), Fix(W211(5, 6, 2)),
     Fix(W31(5, 1)), Fix(W71(5, 1)), Fix(W611(5, 2, 6)), Fix(W521(5, 6, 2)),
     Fix(W71(5, 8)), Fix(W71(5, 8)), Fix(W611(5, 8, 6)), Fix(W521(5, 6, 8)),
     Fix(W53(5, 8)), Fix(W53(5, 8)), Fix(W521(5, 8, 6)), Fix(W211(5, 6, 8))],
    // 173
    [Fix(W53(5, 2)), Fix(W53(5, 2)), Fix(W521(5, 2, 6)), Fix(W211(5, 6, 2)),
     Fix(W71(5, 2)), Fix(W71(5, 2)), Fix(W611(5, 2, 6)), Fix(W521(5, 6, 2)),
     Fix(W71(5, 8)), Fix(W71(5, 8)), Fix(W611(5, 8, 6)), Fix(W521(5, 6, 8)),
     Fix(W53(5, 8)), Fix(W53(5, 8)), Fix(W521(5, 8, 6)), Fix(W211(5, 6, 8))],
    // 174
    [Diff(4, 2, W53(5, 1), W211(5, 2, 4)), Diff(4, 2, W31(5, 1), W31(5, 2)), Fix(W71(5, 6)), Fix(W53(5, 6)),
     Diff(4, 2, W31(5, 1), W31(5, 4)), Diff(4, 2, W71(5, 1), Keep), Fix(W71(5, 6)), Fix(W53(5, 6)),
     Fix(W71(5, 8)), Fix(W71(5, 8)), Fix(W611(5, 6, 8)), Fix(W521(5, 6, 8)),
     Fix(W53(5, 8)), Fix(W53(5, 8)), Fix(W521(5, 8, 6)), Fix(W211(5, 8, 6))],
    // 175
    [Diff(4, 2, Keep, W211(5, 2, 4)), Fix(Keep), Fix(W71(5, 6)), Fix(W53(5, 6)),
     Fix(Keep), Fix(Keep), Fix(W71(5, 6)), Fix(W53(5, 6)),
     Fix(W71(5, 8)), Fix(W71(5, 8)), Fix(W611(5, 6, 8)), Fix(W521(5, 6, 8)),
     Fix(W53(5, 8)), Fix(W53(5, 8)), Fix(W521(5, 8, 6)), Fix(W211(5, 8, 6))],
    // 176
    [Fix(W211(5, 4, 2)), Fix(W521(5, 2, 4)), Fix(W521(5, 2, 3)), Fix(W53(5, 3)),
     Fix(W521(5, 4, 2)), Fix(W611(5, 2, 4)), Fix(W71(5, 3)), Fix(W31(5, 3)),
     Fix(W521(5, 4, 8)), Fix(W611(5, 8, 4)), Fix(W71(5, 8)), Fix(W71(5, 8)),
     Fix(W211(5, 4, 8)), Fix(W521(5, 8, 4)), Fix(W53(5, 8)), Fix(W53(5, 8))],
    // 177
    [Fix(W211(5, 4, 2)), Fix(W521(5, 2, 4)), Fix(W521(5, 2, 3)), Fix(W53(5, 3)),
     Fix(W521(5, 4, 2)), Fix(W611(5, 2, 4)), Fix(W71(5, 3)), Fix(W31(5, 3)),
     Fix(W521(5, 4, 8)), Fix(W611(5, 8, 4)), Fix(W71(5, 8)), Fix(W71(5, 8)),
     Fix(W211(5, 4, 8)), Fix(W521(5, 8, 4)), Fix(W53(5, 8)), Fix(W53(5, 8))],
    // 178
    [Fix(W53(5, 1)), Fix(W31(5, 1)),
     Diff(2, 6, W31(5, 3), W211(2, 5, 6)), Diff(2, 6, W53(5, 3), W11(6, 2)),
     Fix(W521(5, 4, 1)), Fix(W71(5, 1)),
     Diff(2, 6, W71(5, 3), W611(5, 2, 6)), Diff(2, 6, W31(5, 3), W53(6, 2)),
     Fix(W521(5, 4, 8)), Fix(W611(5, 8, 4)),
     Fix(W71(5, 8)), Diff(2, 6, W71(5, 8), W31(6, 5)),
     Fix(W211(5, 4, 8)), Fix(W521(5, 8, 4)),
     Fix(W53(5, 8)), Diff(2, 6, W53(5, 8), W31(5, 6))],
    // 179
    [Fix(W53(5, 4)), Fix(W71(5, 4)), Diff(2, 6, W31(5, 3), W31(5, 2)), Diff(2, 6, W53(5, 3), W211(5, 6, 2)),
     Fix(W53(5, 4)), Fix(W71(5, 4)), Diff(2, 6, W71(5, 3), Keep), Diff(2, 6, W31(5, 3), W31(5, 6)),
     Fix(W521(5, 4, 8)), Fix(W611(5, 8, 4)), Fix(W71(5, 8)), Fix(W71(5, 8)),
     Fix(W211(5, 4, 8)), Fix(W521(5, 8, 4)), Fix(W53(5, 8)), Fix(W53(5, 8))],
    // 180
    [Fix(W211(5, 4, 2)), Fix(W521(5, 2, 4)), Fix(W53(5, 2)), Fix(W53(5, 2)),
     Fix(W521(5, 4, 2)), Fix(W611(5, 2, 4)), Fix(W71(5, 2)), Fix(W71(5, 2)),
     Fix(W521(5, 4, 8)), Fix(W611(5, 8, 4)), Fix(W71(5, 8)), Fix(W71(5, 8)),
     Fix(W211(5, 4, 8)), Fix(W521(5, 8, 4)), Fix(W53(5, 8)), Fix(W53(5, 8))],
    // 181
    [Fix(W211(5, 4, 2)), Fix(W521(5, 2, 4)), Fix(W53(5, 2)), Fix(W53(5, 2)),
     Fix(W521(5, 4, 2)), Fix(W611(5, 2, 4)), Fix(W71(5, 2)), Fix(W71(5, 2)),
     Fix(W521(5, 4, 8)), Fix(W611(5, 8, 4)), Fix(W71(5, 8)), Fix(W71(5, 8)),
     Fix(W211(5, 4, 8)), Fix(W521(5, 8, 4)), Fix(W53(5, 8)), Fix(W53(5, 8))],
    // 182
    [Fix(W53(5, 1)), Fix(W31(5, 1)), Diff(2, 6, Keep, W211(2, 5, 6)), Diff(2, 6, Keep, W11(6, 2)),
     Fix(W521(5, 4, 1)), Fix(W71(5, 1)), Diff(2, 6, Keep, W611(5, 2, 6)), Diff(2, 6, Keep, W53(6, 2)),
     Fix(W521(5, 4, 8)), Fix(W611(5, 8, 4)), Fix(W71(5, 8)), Diff(2, 6, W71(5, 8), W31(6, 5)),
     Fix(W211(5, 4, 8)), Fix(W521(5, 8, 4)), Fix(W53(5, 8)), Diff(2, 6, W53(5, 8), W31(5, 6))],
    // 183
    [Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(Keep), Diff(2, 6, Keep, W211(5, 6, 2)),
     Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(Keep), Fix(Keep),
     Fix(W521(5, 4, 8)), Fix(W611(5, 8, 4)), Fix(W71(5, 8)), Fix(W71(5, 8)),
     Fix(W211(5, 4, 8)), Fix(W521(5, 8, 4)), Fix(W53(5, 8)), Fix(W53(5, 8))],
    // 184
    [Fix(W53(5, 1)), Fix(W521(5, 2, 1)), Fix(W521(5, 2, 3)), Fix(W53(5, 3)),
     Fix(W31(5, 1)), Fix(W71(5, 1)), Fix(W71(5, 3)), Fix(W31(5, 3)),
     Fix(W71(5, 8)), Fix(W71(5, 8)), Fix(W71(5, 8)), Fix(W71(5, 8)),
     Fix(W53(5, 8)), Fix(W53(5, 8)), Fix(W53(5, 8)), Fix(W53(5, 8))],
    // 185
    [Fix(W53(5, 2)), Fix(W53(5, 2)), Fix(W521(5, 2, 3)), Fix(W53(5, 3)),
     Fix(W71(5, 2)), Fix(W71(5, 2)), Fix(W71(5, 3)), Fix(W31(5, 3)),
     Fix(W71(5, 8)), Fix(W71(5, 8)), Fix(W71(5, 8)), Fix(W71(5, 8)),
     Fix(W53(5, 8)), Fix(W53(5, 8)), Fix(W53(5, 8)), Fix(W53(5, 8))],
    // 186
    [Diff(4, 2, W53(5, 1), W211(5, 2, 4)), Diff(4, 2, W31(5, 1), W31(5, 2)),
     Diff(2, 6, W31(5, 3), W31(5, 2)), Diff(2, 6, W53(5, 3), W211(5, 2, 6)),
     Diff(4, 2, W31(5, 1), W31(5, 4)), Diff(4, 2, W71(5, 1), Keep),
     Diff(2, 6, W71(5, 3), Keep), Diff(2, 6, W31(5, 3), W31(5, 6)),
     Fix(W71(5, 8)), Fix(W71(5, 8)),
     Fix(W71(5, 8)), Fix(W71(5, 8)),
     Fix(W53(5, 8)), Fix(W53(5, 8)),
     Fix(W53(5, 8)), Fix(W53(5, 8))],
    // 187
    [Diff(4, 2, Keep, W11(4, 2)), Diff(4, 2, Keep, W211(2, 5, 4)), Fix(W31(5, 3)), Fix(W53(5, 3)),
     Diff(4, 2, Keep, W53(4, 2)), Diff(4, 2, Keep, W611(5, 2, 4)), Fix(W71(5, 3)), Fix(W31(5, 3)),
     Diff(4, 2, W71(5, 8), W31(4, 5)), Fix(W71(5, 8)), Fix(W71(5, 8)), Fix(W71(5, 8)),
     Diff(4, 2, W53(5, 8), W31(5, 4)), Fix(W53(5, 8)), Fix(W53(5, 8)), Fix(W53(5, 8))],
    // 188
    [Fix(W53(5, 1)), Fix(W521(5, 2, 1)), Fix(W53(5, 2)), Fix(W53(5, 2)),
     Fix(W31(5, 1)), Fix(W71(5, 1)), Fix(W71(5, 2)), Fix(W71(5, 2)),
     Fix(W71(5, 8)), Fix(W71(5, 8)), Fix(W71(5, 8)), Fix(W71(5, 8)),
     Fix(W53(5, 8)), Fix(W53(5, 8)), Fix(W53(5, 8)), Fix(W53(5, 8))],
    // 189
    [Fix(W53(5, 2)), Fix(W53(5, 2)), Fix(W53(5, 2)), Fix(W53(5, 2)),
     Fix(W71(5, 2)), Fix(W71(5, 2)), Fix(W71(5, 2)), Fix(W71(5, 2)),
     Fix(W71(5, 8)), Fix(W71(5, 8)), Fix(W71(5, 8)), Fix(W71(5, 8)),
     Fix(W53(5, 8)), Fix(W53(5, 8)), Fix(W53(5, 8)), Fix(W53(5, 8))],
    // 190
    [Fix(W53(5, 1)), Fix(W31(5, 1)), Diff(2, 6, Keep, W211(2, 5, 6)), Diff(2, 6, Keep, W11(6, 2)),
     Fix(W31(5, 1)), Fix(W71(5, 1)), Diff(2, 6, Keep, W611(5, 2, 6)), Diff(2, 6, Keep, W53(6, 2)),
     Fix(W71(5, 8)), Fix(W71(5, 8)), Fix(W71(5, 8)), Diff(2, 6, W71(5, 8), W31(6, 5)),
     Fix(W53(5, 8)), Fix(W53(5, 8)), Fix(W53(5, 8)), Diff(2, 6, W53(5, 8), W31(5, 6))],
    // 191
    [Diff(4, 2, Keep, W211(5, 2, 4)), Fix(Keep), Fix(Keep), Diff(2, 6, Keep, W211(5, 2, 6)),
     Fix(Keep), Fix(Keep), Fix(Keep), Fix(Keep),
     Fix(W71(5, 8)), Fix(W71(5, 8)), Fix(W71(5, 8)), Fix(W71(5, 8)),
     Fix(W53(5, 8)), Fix(W53(5, 8)), Fix(W53(5, 8)), Fix(W53(5, 8))],
    // 192
    [Fix(W211(5, 2, 4)), Fix(W521(5, 2, 4)), Fix(W521(5, 2, 6)), Fix(W211(5, 2, 6)),
     Fix(W521(5, 4, 2)), Fix(W611(5, 4, 2)), Fix(W611(5, 6, 2)), Fix(W521(5, 6, 2)),
     Fix(W521(5, 4, 7)), Fix(W71(5, 7)), Fix(W71(5, 6)), Fix(W53(5, 6)),
     Fix(W53(5, 7)), Fix(W31(5, 7)), Fix(W71(5, 6)), Fix(W53(5, 6))],
    // 193
    [Fix(W211(5, 2, 4)), Fix(W521(5, 2, 4)), Fix(W521(5, 2, 6)), Fix(W211(5, 2, 6)),
     Fix(W521(5, 4, 2)), Fix(W611(5, 4, 2)), Fix(W611(5, 6, 2)), Fix(W521(5, 6, 2)),
     Fix(W521(5, 4, 7)), Fix(W71(5, 7)), Fix(W71(5, 6)), Fix(W53(5, 6)),
     Fix(W53(5, 7)), Fix(W31(5, 7)), Fix(W71(5, 6)), Fix(W53(5, 6))],
    // 194
    [Fix(W53(5, 1)), Fix(W31(5, 1)), Fix(W31(5, 3)), Fix(W53(5, 3)),
     Fix(W521(5, 4, 1)), Fix(W71(5, 1)), Fix(W71(5, 3)), Fix(W521(5, 6, 3)),
     Fix(W521(5, 4, 7)), Fix(W71(5, 7)), Fix(W71(5, 6)), Fix(W53(5, 6)),
     Fix(W53(5, 7)), Fix(W31(5, 7)), Fix(W71(5, 6)), Fix(W53(5, 6))],
    // 195
    [Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(W31(5, 3)), Fix(W53(5, 3)),
     Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(W71(5, 3)), Fix(W521(5, 6, 3)),
     Fix(W521(5, 4, 7)), Fix(W71(5, 7)), Fix(W71(5, 6)), Fix(W53(5, 6)),
     Fix(W53(5, 7)), Fix(W31(5, 7)), Fix(W71(5, 6)), Fix(W53(5, 6))],
    // 196
    [Fix(W211(5, 2, 4)), Fix(W521(5, 2, 4)), Fix(W521(5, 2, 6)), Fix(W211(5, 2, 6)),
     Fix(W521(5, 4, 2)), Fix(W611(5, 4, 2)), Fix(W611(5, 6, 2)), Fix(W521(5, 6, 2)),
     Fix(W521(5, 4, 7)), Fix(W71(5, 7)), Fix(W71(5, 6)), Fix(W53(5, 6)),
     Fix(W53(5, 7)), Fix(W31(5, 7)), Fix(W71(5, 6)), Fix(W53(5, 6))],
    // 197
    [Fix(W211(5, 2, 4)), Fix(W521(5, 2, 4)), Fix(W521(5, 2, 6)), Fix(W211(5, 2, 6)),
     Fix(W521(5, 4, 2)), Fix(W611(5, 4, 2)), Fix(W611(5, 6, 2)), Fix(W521(5, 6, 2)),
     Fix(W521(5, 4, 7)), Fix(W71(5, 7)), Fix(W71(5, 6)), Fix(W53(5, 6)),
     Fix(W53(5, 7)), Fix(W31(5, 7)), Fix(W71(5, 6)), Fix(W53(5, 6))],
    // 198
    [Fix(W53(5, 1)), Fix(W31(5, 1)), Fix(W71(5, 6)), Fix(W53(5, 6)),
     Fix(W521(5, 4, 1)), Fix(W71(5, 1)), Fix(W71(5, 6)), Fix(W53(5, 6)),
     Fix(W521(5, 4, 7)), Fix(W71(5, 7)), Fix(W71(5, 6)), Fix(W53(5, 6)),
     Fix(W53(5, 7)), Fix(W31(5, 7)), Fix(W71(5, 6)), Fix(W53(5, 6))],
    // 199
    [Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(W71(5, 6)), Fix(W53(5, 6)),
     Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(W71(5, 6)), Fix(W53(5, 6)),
     Fix(W521(5, 4, 7)), Fix(W71(5, 7)), Fix(W71(5, 6)), Fix(W53(5, 6)),
     Fix(W53(5, 7)), Fix(W31(5, 7)), Fix(W71(5, 6)), Fix(W53(5, 6))],
    // 200
    [Fix(W53(5, 1)), Fix(W521(5, 2, 1)),
     Fix(W521(5, 2, 6)), Fix(W211(5, 2, 6)),
     Fix(W31(5, 1)), Fix(W71(5, 1)),
     Fix(W611(5, 6, 2)), Fix(W521(5, 6, 2)),
     Diff(8, 4, W31(5, 7), W211(4, 5, 8)), Diff(8, 4, W71(5, 7), W611(5, 4, 8)),
     Fix(W71(5, 6)), Fix(W53(5, 6)),
     Diff(8, 4, W53(5, 7), W11(8, 4)), Diff(8, 4, W31(5, 7), W53(8, 4)),
     Diff(8, 4, W71(5, 6), W31(8, 5)), Diff(8, 4, W53(5, 6), W31(5, 8))],
    // 201
    [Fix(W53(5, 2)), Fix(W53(5, 2)), Fix(W521(5, 2, 6)), Fix(W211(5, 6, 2)),
     Fix(W71(5, 2)), Fix(W71(5, 2)), Fix(W611(5, 2, 6)), Fix(W521(5, 6, 2)),
     Diff(8, 4, W31(5, 7), W31(5, 4)), Diff(8, 4, W71(5, 7), Keep), Fix(W71(5, 6)), Fix(W53(5, 6)),
     Diff(8, 4, W53(5, 7), W211(5, 4, 8)), Diff(8, 4, W31(5, 7), W31(5, 8)), Fix(W71(5, 6)), Fix(W53(5, 6))],
    // 202
    [Diff(4, 2, W53(5, 1), W211(5, 4, 2)), Diff(4, 2, W31(5, 1), W31(5, 2)), Fix(W31(5, 3)), Fix(W53(5, 3)),
     Diff(4, 2, W31(5, 1), W31(5, 4)), Diff(4, 2, W71(5, 1), Keep), Fix(W71(5, 3)), Fix(W521(5, 6, 3)),
     Diff(8, 4, W31(5, 7), W31(5, 4)), Diff(8, 4, W71(5, 7), Keep), Fix(W71(5, 6)), Fix(W53(5, 6)),
     Diff(8, 4, W53(5, 7), W211(5, 4, 8)), Diff(8, 4, W31(5, 7), W31(5, 8)), Fix(W71(5, 6)), Fix(W53(5, 6))],
    // 203
    [Diff(4, 2, Keep, W11(4, 2)), Diff(4, 2, Keep, W11(2, 5)), Fix(W31(5, 3)), Fix(W53(5, 3)),
     Diff(4, 2, Keep, W11(4, 5)), Diff(4, 2, Keep, Keep), Fix(W71(5, 3)), Fix(W521(5, 6, 3)),
     Fix(W31(5, 7)), Fix(W71(5, 7)), Fix(W71(5, 6)), Fix(W53(5, 6)),
     Fix(W53(5, 7)), Fix(W31(5, 7)), Fix(W71(5, 6)), Fix(W53(5, 6))],
    // 204
    [Fix(W53(5, 1)), Fix(W521(5, 2, 1)),
     Fix(W521(5, 2, 6)), Fix(W211(5, 2, 6)),
     Fix(W31(5, 1)), Fix(W71(5, 1)),
     Fix(W611(5, 6, 2)), Fix(W521(5, 6, 2)),
     Diff(8, 4, W31(5, 7), W211(4, 5, 8)), Diff(8, 4, W71(5, 7), W611(5, 4, 8)),
     Fix(W71(5, 6)), Fix(W53(5, 6)),
     Diff(8, 4, W53(5, 7), W11(8, 4)), Diff(8, 4, W31(5, 7), W53(8, 4)),
     Diff(8, 4, W71(5, 6), W31(8, 5)), Diff(8, 4, W53(5, 6), W31(5, 8))],
    // 205
    [Fix(W53(5, 2)), Fix(W53(5, 2)), Fix(W521(5, 2, 6)), Fix(W211(5, 6, 2)),
     Fix(W71(5, 2)), Fix(W71(5, 2)), Fix(W611(5, 2, 6)), Fix(W521(5, 6, 2)),
     Diff(8, 4, W31(5, 7), W31(5, 4)), Diff(8, 4, W71(5, 7), Keep), Fix(W71(5, 6)), Fix(W53(5, 6)),
     Diff(8, 4, W53(5, 7), W211(5, 4, 8)), Diff(8, 4, W31(5, 7), W31(5, 8)), Fix(W71(5, 6)), Fix(W53(5, 6))],
    // 206
    [Diff(4, 2, W53(5, 1), W211(5, 4, 2)), Diff(4, 2, W31(5, 1), W31(5, 2)), Fix(W71(5, 6)), Fix(W53(5, 6)),
     Diff(4, 2, W31(5, 1), W31(5, 4)), Diff(4, 2, W71(5, 1), Keep), Fix(W71(5, 6)), Fix(W53(5, 6)),
     Diff(8, 4, W31(5, 7), W31(5, 4)), Diff(8, 4, W71(5, 7), Keep), Fix(W71(5, 6)), Fix(W53(5, 6)),
     Diff(8, 4, W53(5, 7), W211(5, 4, 8)), Diff(8, 4, W31(5, 7), W31(5, 8)), Fix(W71(5, 6)), Fix(W53(5, 6))],
    // 207
    [Diff(4, 2, Keep, W11(2, 4)), Diff(4, 2, Keep, W53(2, 4)),
     Diff(4, 2, W71(5, 6), W31(2, 5)), Diff(4, 2, W53(5, 6), W31(5, 2)),
     Diff(4, 2, Keep, W211(4, 5, 2)), Diff(4, 2, Keep, W611(5, 4, 2)),
     Fix(W71(5, 6)), Fix(W53(5, 6)),
     Fix(W31(5, 7)), Fix(W71(5, 7)),
     Fix(W71(5, 6)), Fix(W53(5, 6)),
     Fix(W53(5, 7)), Fix(W31(5, 7)),
     Fix(W71(5, 6)), Fix(W53(5, 6))],
    // 208
    [Fix(W211(5, 2, 4)), Fix(W521(5, 2, 4)), Fix(W521(5, 2, 3)), Fix(W53(5, 3)),
     Fix(W521(5, 4, 2)), Fix(W611(5, 4, 2)), Fix(W71(5, 3)), Fix(W31(5, 3)),
     Fix(W521(5, 4, 7)), Fix(W71(5, 7)), Diff(6, 8, Keep, Keep), Diff(6, 8, Keep, W11(6, 5)),
     Fix(W53(5, 7)), Fix(W31(5, 7)), Diff(6, 8, Keep, W11(8, 5)), Diff(6, 8, Keep, W11(8, 6))],
    // 209
    [Fix(W211(5, 2, 4)), Fix(W521(5, 2, 4)), Fix(W521(5, 2, 3)), Fix(W53(5, 3)),
     Fix(W521(5, 4, 2)), Fix(W611(5, 4, 2)), Fix(W71(5, 3)), Fix(W31(5, 3)),
     Fix(W521(5, 4, 7)), Fix(W71(5, 7)), Diff(6, 8, Keep, Keep), Diff(6, 8, Keep, W11(6, 5)),
     Fix(W53(5, 7)), Fix(W31(5, 7)), Diff(6, 8, Keep, W11(8, 5)), Diff(6, 8, Keep, W11(8, 6))],
    // 210
    [Fix(W53(5, 1)), Fix(W31(5, 1)), Fix(W31(5, 3)), Fix(W53(5, 3)),
     Fix(W521(5, 4, 1)), Fix(W71(5, 1)), Fix(W71(5, 3)), Fix(W31(5, 3)),
     Fix(W521(5, 4, 7)), Fix(W71(5, 7)), Diff(6, 8, Keep, Keep), Diff(6, 8, Keep, W11(6, 5)),
     Fix(W53(5, 7)), Fix(W31(5, 7)), Diff(6, 8, Keep, W11(8, 5)), Diff(6, 8, Keep, W11(6, 8))],
    // 211
    [Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(W31(5, 3)), Fix(W53(5, 3)),
     Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(W71(5, 3)), Fix(W31(5, 3)),
     Fix(W521(5, 4, 7)), Fix(W71(5, 7)), Diff(6, 8, Keep, Keep), Diff(6, 8, Keep, W11(6, 5)),
     Fix(W53(5, 7)), Fix(W31(5, 7)), Diff(6, 8, Keep, W11(8, 5)), Diff(6, 8, Keep, W11(6, 8))],
    // 212
    [Fix(W211(5, 4, 2)), Fix(W521(5, 2, 4)), Fix(W53(5, 2)), Diff(6, 8, W53(5, 2), W31(5, 6)),
     Fix(W521(5, 4, 2)), Fix(W611(5, 2, 4)), Fix(W71(5, 2)), Diff(6, 8, W71(5, 2), W31(6, 5)),
     Fix(W521(5, 4, 7)), Fix(W71(5, 7)), Diff(6, 8, Keep, W611(5, 8, 6)), Diff(6, 8, Keep, W53(6, 8)),
     Fix(W53(5, 7)), Fix(W31(5, 7)), Diff(6, 8, Keep, W211(8, 5, 6)), Diff(6, 8, Keep, W11(6, 8))],
    // 213
    [Fix(W211(5, 4, 2)), Fix(W521(5, 2, 4)), Fix(W53(5, 2)), Diff(6, 8, W53(5, 2), W31(5, 6)),
     Fix(W521(5, 4, 2)), Fix(W611(5, 2, 4)), Fix(W71(5, 2)), Diff(6, 8, W71(5, 2), W31(6, 5)),
     Fix(W521(5, 4, 7)), Fix(W71(5, 7)), Diff(6, 8, Keep, W611(5, 8, 6)), Diff(6, 8, Keep, W53(6, 8)),
     Fix(W53(5, 7)), Fix(W31(5, 7)), Diff(6, 8, Keep, W211(8, 5, 6)), Diff(6, 8, Keep, W11(6, 8))],
    // 214
    [Fix(W53(5, 1)), Fix(W31(5, 1)), Diff(2, 6, Keep, W11(2, 5)), Diff(2, 6, Keep, W11(6, 2)),
     Fix(W521(5, 4, 1)), Fix(W71(5, 1)), Diff(2, 6, Keep, Keep), Diff(2, 6, Keep, W11(6, 5)),
     Fix(W521(5, 4, 7)), Fix(W71(5, 7)), Diff(6, 8, Keep, Keep), Diff(6, 8, Keep, W11(6, 5)),
     Fix(W53(5, 7)), Fix(W31(5, 7)), Diff(6, 8, Keep, W11(8, 5)), Diff(6, 8, Keep, W11(6, 8))],
    // 215
    [Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(Keep), Diff(2, 6, Keep, W211(5, 6, 2)),
     Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(Keep), Fix(Keep),
     Fix(W521(5, 4, 7)), Fix(W71(5, 7)), Diff(6, 8, Keep, Keep), Diff(6, 8, Keep, W11(6, 5)),
     Fix(W53(5, 7)), Fix(W31(5, 7)), Diff(6, 8, Keep, W11(8, 5)), Diff(6, 8, Keep, W11(6, 8))],
    // 216
    [Fix(W53(5, 1)), Fix(W521(5, 2, 1)), Fix(W521(5, 2, 3)), Fix(W53(5, 3)),
     Fix(W31(5, 1)), Fix(W71(5, 1)), Fix(W71(5, 3)), Fix(W31(5, 3)),
     Fix(W31(5, 7)), Fix(W71(5, 7)), Diff(6, 8, Keep, Keep), Diff(6, 8, Keep, W11(6, 5)),
     Fix(W53(5, 7)), Fix(W31(5, 7)), Diff(6, 8, Keep, W11(8, 5)), Diff(6, 8, Keep, W11(8, 6))],
    // 217
    [Fix(W53(5, 2)), Fix(W53(5, 2)), Fix(W521(5, 2, 3)), Fix(W53(5, 3)),
     Fix(W71(5, 2)), Fix(W71(5, 2)), Fix(W71(5, 3)), Fix(W31(5, 3)),
     Fix(W31(5, 7)), Fix(W71(5, 7)), Diff(6, 8, Keep, Keep), Diff(6, 8, Keep, W11(6, 5)),
     Fix(W53(5, 7)), Fix(W31(5, 7)), Diff(6, 8, Keep, W11(8, 5)), Diff(6, 8, Keep, W11(8, 6))],
    // 218
    [Diff(4, 2, W53(5, 1), W211(5, 2, 4)), Diff(4, 2, W31(5, 1), W31(5, 2)),
     Diff(2, 6, W31(5, 3), W31(5, 2)), Diff(2, 6, W53(5, 3), W211(5, 2, 6)),
     Diff(4, 2, W31(5, 1), W31(5, 4)), Diff(4, 2, W71(5, 1), Keep),
     Diff(2, 6, W71(5, 3), Keep), Diff(2, 6, W31(5, 3), W31(5, 6)),
     Diff(8, 4, W31(5, 7), W31(5, 4)), Diff(8, 4, W71(5, 7), Keep),
     Diff(6, 8, Keep, Keep), Diff(6, 8, Keep, W11(6, 5)),
     Diff(8, 4, W53(5, 7), W211(5, 8, 4)), Diff(8, 4, W31(5, 7), W31(5, 8)),
     Diff(6, 8, Keep, W11(8, 5)), Diff(6, 8, Keep, W11(8, 6))],
    // 219
    [Diff(4, 2, Keep, W11(4, 2)), Diff(4, 2, Keep, W11(2, 5)), Fix(W31(5, 3)), Fix(W53(5, 3)),
     Diff(4, 2, Keep, W11(4, 5)), Diff(4, 2, Keep, Keep), Fix(W71(5, 3)), Fix(W31(5, 3)),
     Fix(W31(5, 7)), Fix(W71(5, 7)), Diff(6, 8, Keep, Keep), Diff(6, 8, Keep, W11(6, 5)),
     Fix(W53(5, 7)), Fix(W31(5, 7)), Diff(6, 8, Keep, W11(8, 5)), Diff(6, 8, Keep, W11(6, 8))],
    // 220
    [Fix(W53(5, 1)), Fix(W521(5, 2, 1)),
     Fix(W53(5, 2)), Fix(W53(5, 2)),
     Fix(W31(5, 1)), Fix(W71(5, 1)),
     Fix(W71(5, 2)), Fix(W71(5, 2)),
     Diff(8, 4, W31(5, 7), W31(5, 4)), Diff(8, 4, W71(5, 7), Keep),
     Diff(6, 8, Keep, Keep), Diff(6, 8, Keep, W11(6, 5)),
     Diff(8, 4, W53(5, 7), W211(5, 8, 4)), Diff(8, 4, W31(5, 7), W31(5, 8)),
     Diff(6, 8, Keep, W11(8, 5)), Diff(6, 8, Keep, W11(8, 6))],
    // 221
    [Fix(W53(5, 2)), Fix(W53(5, 2)), Fix(W53(5, 2)), Diff(6, 8, W53(5, 2), W31(5, 6)),
     Fix(W71(5, 2)), Fix(W71(5, 2)), Fix(W71(5, 2)), Diff(6, 8, W71(5, 2), W31(6, 5)),
     Fix(W31(5, 7)), Fix(W71(5, 7)), Diff(6, 8, Keep, W611(5, 8, 6)), Diff(6, 8, Keep, W53(6, 8)),
     Fix(W53(5, 7)), Fix(W31(5, 7)), Diff(6, 8, Keep, W211(8, 5, 6)), Diff(6, 8, Keep, W11(6, 8))],
    // 222
    [Fix(W53(5, 1)), Fix(W31(5, 1)), Diff(2, 6, Keep, W11(2, 5)), Diff(2, 6, Keep, W11(6, 2)),
     Fix(W31(5, 1)), Fix(W71(5, 1)), Diff(2, 6, Keep, Keep), Diff(2, 6, Keep, W11(6, 5)),
     Fix(W31(5, 7)), Fix(W71(5, 7)), Diff(6, 8, Keep, Keep), Diff(6, 8, Keep, W11(6, 5)),
     Fix(W53(5, 7)), Fix(W31(5, 7)), Diff(6, 8, Keep, W11(8, 5)), Diff(6, 8, Keep, W11(6, 8))],
    // 223
    [Diff(4, 2, Keep, W11(4, 2)), Diff(4, 2, Keep, W11(2, 5)), Fix(Keep), Diff(2, 6, Keep, W211(5, 6, 2)),
     Diff(4, 2, Keep, W11(4, 5)), Diff(4, 2, Keep, Keep), Fix(Keep), Fix(Keep),
     Fix(W31(5, 7)), Fix(W71(5, 7)), Diff(6, 8, Keep, Keep), Diff(6, 8, Keep, W11(6, 5)),
     Fix(W53(5, 7)), Fix(W31(5, 7)), Diff(6, 8, Keep, W11(8, 5)), Diff(6, 8, Keep, W11(6, 8))],
    // 224
    [Fix(W211(5, 2, 4)), Fix(W521(5, 2, 4)), Fix(W521(5, 2, 6)), Fix(W211(5, 2, 6)),
     Fix(W521(5, 4, 2)), Fix(W611(5, 4, 2)), Fix(W611(5, 6, 2)), Fix(W521(5, 6, 2)),
     Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(W71(5, 6)), Fix(W53(5, 6)),
     Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(W71(5, 6)), Fix(W53(5, 6))],
    // 225
    [Fix(W211(5, 2, 4)), Fix(W521(5, 2, 4)), Fix(W521(5, 2, 6)), Fix(W211(5, 2, 6)),
     Fix(W521(5, 4, 2)), Fix(W611(5, 4, 2)), Fix(W611(5, 6, 2)), Fix(W521(5, 6, 2)),
     Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(W71(5, 6)), Fix(W53(5, 6)),
     Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(W71(5, 6)), Fix(W53(5, 6))],
    // 226
    [Fix(W53(5, 1)), Fix(W31(5, 1)), Fix(W31(5, 3)), Fix(W53(5, 3)),
     Fix(W521(5, 4, 1)), Fix(W71(5, 1)), Fix(W71(5, 3)), Fix(W521(5, 6, 3)),
     Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(W71(5, 6)), Fix(W53(5, 6)),
     Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(W71(5, 6)), Fix(W53(5, 6))],
    // 227
    [Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(W31(5, 3)), Fix(W53(5, 3)),
     Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(W71(5, 3)), Fix(W521(5, 6, 3)),
     Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(W71(5, 6)), Fix(W53(5, 6)),
     Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(W71(5, 6)), Fix(W53(5, 6))],
    // 228
    [Fix(W211(5, 2, 4)), Fix(W521(5, 2, 4)), Fix(W521(5, 2, 6)), Fix(W211(5, 2, 6)),
     Fix(W521(5, 4, 2)), Fix(W611(5, 4, 2)), Fix(W611(5, 6, 2)), Fix(W521(5, 6, 2)),
     Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(W71(5, 6)), Fix(W53(5, 6)),
     Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(W71(5, 6)), Fix(W53(5, 6))],
    // 229
    [Fix(W211(5, 2, 4)), Fix(W521(5, 2, 4)), Fix(W521(5, 2, 6)), Fix(W211(5, 2, 6)),
     Fix(W521(5, 4, 2)), Fix(W611(5, 4, 2)), Fix(W611(5, 6, 2)), Fix(W521(5, 6, 2)),
     Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(W71(5, 6)), Fix(W53(5, 6)),
     Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(W71(5, 6)), Fix(W53(5, 6))],
    // 230
    [Fix(W53(5, 1)), Fix(W31(5, 1)), Fix(W71(5, 6)), Fix(W53(5, 6)),
     Fix(W521(5, 4, 1)), Fix(W71(5, 1)), Fix(W71(5, 6)), Fix(W53(5, 6)),
     Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(W71(5, 6)), Fix(W53(5, 6)),
     Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(W71(5, 6)), Fix(W53(5, 6))],
    // 231
    [Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(W71(5, 6)), Fix(W53(5, 6)),
     Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(W71(5, 6)), Fix(W53(5, 6)),
     Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(W71(5, 6)), Fix(W53(5, 6)),
     Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(W71(5, 6)), Fix(W53(5, 6))],
    // 232
    [Fix(W53(5, 1)), Fix(W521(5, 2, 1)),
     Fix(W521(5, 2, 6)), Fix(W211(5, 2, 6)),
     Fix(W31(5, 1)), Fix(W71(5, 1)),
     Fix(W611(5, 6, 2)), Fix(W521(5, 6, 2)),
     Diff(8, 4, Keep, W211(4, 5, 8)), Diff(8, 4, Keep, W611(5, 4, 8)),
     Fix(W71(5, 6)), Fix(W53(5, 6)),
     Diff(8, 4, Keep, W11(8, 4)), Diff(8, 4, Keep, W53(8, 4)),
     Diff(8, 4, W71(5, 6), W31(8, 5)), Diff(8, 4, W53(5, 6), W31(5, 8))],
    // 233
    [Fix(W53(5, 2)), Fix(W53(5, 2)), Fix(W521(5, 2, 6)), Fix(W211(5, 6, 2)),
     Fix(W71(5, 2)), Fix(W71(5, 2)), Fix(W611(5, 2, 6)), Fix(W521(5, 6, 2)),
     Fix(Keep), Fix(Keep), Fix(W71(5, 6)), Fix(W53(5, 6)),
     Diff(8, 4, Keep, W211(5, 4, 8)), Fix(Keep), Fix(W71(5, 6)), Fix(W53(5, 6))],
    // 234
    [Diff(4, 2, W53(5, 1), W211(5, 4, 2)), Diff(4, 2, W31(5, 1), W31(5, 2)), Fix(W31(5, 3)), Fix(W53(5, 3)),
     Diff(4, 2, W31(5, 1), W31(5, 4)), Diff(4, 2, W71(5, 1), Keep), Fix(W71(5, 3)), Fix(W521(5, 6, 3)),
     Diff(8, 4, Keep, W11(4, 5)), Diff(8, 4, Keep, Keep), Fix(W71(5, 6)), Fix(W53(5, 6)),
     Diff(8, 4, Keep, W11(4, 8)), Diff(8, 4, Keep, W11(8, 5)), Fix(W71(5, 6)), Fix(W53(5, 6))],
    // 235
    [Diff(4, 2, Keep, W11(4, 2)), Diff(4, 2, Keep, W11(2, 5)), Fix(W31(5, 3)), Fix(W53(5, 3)),
     Diff(4, 2, Keep, W11(4, 5)), Diff(4, 2, Keep, Keep), Fix(W71(5, 3)), Fix(W521(5, 6, 3)),
     Fix(Keep), Fix(Keep), Fix(W71(5, 6)), Fix(W53(5, 6)),
     Diff(8, 4, Keep, W211(5, 4, 8)), Fix(Keep), Fix(W71(5, 6)), Fix(W53(5, 6))],
    // 236
    [Fix(W53(5, 1)), Fix(W521(5, 2, 1)),
     Fix(W521(5, 2, 6)), Fix(W211(5, 2, 6)),
     Fix(W31(5, 1)), Fix(W71(5, 1)),
     Fix(W611(5, 6, 2)), Fix(W521(5, 6, 2)),
     Diff(8, 4, Keep, W211(4, 5, 8)), Diff(8, 4, Keep, W611(5, 4, 8)),
     Fix(W71(5, 6)), Fix(W53(5, 6)),
     Diff(8, 4, Keep, W11(8, 4)), Diff(8, 4, Keep, W53(8, 4)),
     Diff(8, 4, W71(5, 6), W31(8, 5)), Diff(8, 4, W53(5, 6), W31(5, 8))],
    // 237
    [Fix(W53(5, 2)), Fix(W53(5, 2)), Fix(W521(5, 2, 6)), Fix(W211(5, 6, 2)),
     Fix(W71(5, 2)), Fix(W71(5, 2)), Fix(W611(5, 2, 6)), Fix(W521(5, 6, 2)),
     Fix(Keep), Fix(Keep), Fix(W71(5, 6)), Fix(W53(5, 6)),
     Diff(8, 4, Keep, W211(5, 4, 8)), Fix(Keep), Fix(W71(5, 6)), Fix(W53(5, 6))],
    // 238
    [Fix(W53(5, 1)), Fix(W31(5, 1)),
     Fix(W71(5, 6)), Fix(W53(5, 6)),
     Fix(W31(5, 1)), Fix(W71(5, 1)),
     Fix(W71(5, 6)), Fix(W53(5, 6)),
     Diff(8, 4, Keep, W211(4, 5, 8)), Diff(8, 4, Keep, W611(5, 4, 8)),
     Fix(W71(5, 6)), Fix(W53(5, 6)),
     Diff(8, 4, Keep, W11(8, 4)), Diff(8, 4, Keep, W53(8, 4)),
     Diff(8, 4, W71(5, 6), W31(8, 5)), Diff(8, 4, W53(5, 6), W31(5, 8))],
    // 239
    [Diff(4, 2, Keep, W211(5, 4, 2)), Fix(Keep), Fix(W71(5, 6)), Fix(W53(5, 6)),
     Fix(Keep), Fix(Keep), Fix(W71(5, 6)), Fix(W53(5, 6)),
     Fix(Keep), Fix(Keep), Fix(W71(5, 6)), Fix(W53(5, 6)),
     Diff(8, 4, Keep, W211(5, 4, 8)), Fix(Keep), Fix(W71(5, 6)), Fix(W53(5, 6))],
    // 240
    [Fix(W211(5, 2, 4)), Fix(W521(5, 2, 4)),
     Fix(W521(5, 2, 3)), Fix(W53(5, 3)),
     Fix(W521(5, 4, 2)), Fix(W611(5, 4, 2)),
     Fix(W71(5, 3)), Fix(W31(5, 3)),
     Fix(W53(5, 4)), Fix(W71(5, 4)),
     Diff(6, 8, Keep, W611(5, 6, 8)), Diff(6, 8, Keep, W211(6, 5, 8)),
     Diff(6, 8, W53(5, 4), W31(5, 8)), Diff(6, 8, W71(5, 4), W31(8, 5)),
     Diff(6, 8, Keep, W53(8, 6)), Diff(6, 8, Keep, W11(8, 6))],
    // 241
    [Fix(W211(5, 2, 4)), Fix(W521(5, 2, 4)),
     Fix(W521(5, 2, 3)), Fix(W53(5, 3)),
     Fix(W521(5, 4, 2)), Fix(W611(5, 4, 2)),
     Fix(W71(5, 3)), Fix(W31(5, 3)),
     Fix(W53(5, 4)), Fix(W71(5, 4)),
     Diff(6, 8, Keep, W611(5, 6, 8)), Diff(6, 8, Keep, W211(6, 5, 8)),
     Diff(6, 8, W53(5, 4), W31(5, 8)), Diff(6, 8, W71(5, 4), W31(8, 5)),
     Diff(6, 8, Keep, W53(8, 6)), Diff(6, 8, Keep, W11(8, 6))],
    // 242
    [Fix(W53(5, 1)), Fix(W31(5, 1)), Diff(2, 6, W31(5, 3), W31(5, 2)), Diff(2, 6, W53(5, 3), W211(5, 6, 2)),
     Fix(W521(5, 4, 1)), Fix(W71(5, 1)), Diff(2, 6, W71(5, 3), Keep), Diff(2, 6, W31(5, 3), W31(5, 6)),
     Fix(W53(5, 4)), Fix(W71(5, 4)), Diff(6, 8, Keep, Keep), Diff(6, 8, Keep, W11(6, 5)),
     Fix(W53(5, 4)), Fix(W71(5, 4)), Diff(6, 8, Keep, W11(8, 5)), Diff(6, 8, Keep, W11(6, 8))],
    // 243
    [Fix(W53(5, 4)), Fix(W71(5, 4)),
     Fix(W31(5, 3)), Fix(W53(5, 3)),
     Fix(W53(5, 4)), Fix(W71(5, 4)),
     Fix(W71(5, 3)), Fix(W31(5, 3)),
     Fix(W53(5, 4)), Fix(W71(5, 4)),
     Diff(6, 8, Keep, W611(5, 6, 8)), Diff(6, 8, Keep, W211(6, 5, 8)),
     Diff(6, 8, W53(5, 4), W31(5, 8)), Diff(6, 8, W71(5, 4), W31(8, 5)),
     Diff(6, 8, Keep, W53(8, 6)), Diff(6, 8, Keep, W11(8, 6))],
    // 244
    [Fix(W211(5, 2, 4)), Fix(W521(5, 2, 4)), Fix(W53(5, 2)), Fix(W53(5, 2)),
     Fix(W521(5, 4, 2)), Fix(W611(5, 4, 2)), Fix(W71(5, 2)), Fix(W71(5, 2)),
     Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(Keep), Fix(Keep),
     Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(Keep), Diff(6, 8, Keep, W211(5, 8, 6))],
    // 245
    [Fix(W211(5, 2, 4)), Fix(W521(5, 2, 4)), Fix(W53(5, 2)), Fix(W53(5, 2)),
     Fix(W521(5, 4, 2)), Fix(W611(5, 4, 2)), Fix(W71(5, 2)), Fix(W71(5, 2)),
     Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(Keep), Fix(Keep),
     Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(Keep), Diff(6, 8, Keep, W211(5, 8, 6))],
    // 246
    [Fix(W53(5, 1)), Fix(W31(5, 1)), Diff(2, 6, Keep, W11(2, 5)), Diff(2, 6, Keep, W11(6, 2)),
     Fix(W521(5, 4, 1)), Fix(W71(5, 1)), Diff(2, 6, Keep, Keep), Diff(2, 6, Keep, W11(6, 5)),
     Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(Keep), Fix(Keep),
     Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(Keep), Diff(6, 8, Keep, W211(5, 6, 8))],
    // 247
    [Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(Keep), Diff(2, 6, Keep, W211(5, 6, 2)),
     Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(Keep), Fix(Keep),
     Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(Keep), Fix(Keep),
     Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(Keep), Diff(6, 8, Keep, W211(5, 6, 8))],
    // 248
    [Fix(W53(5, 1)), Fix(W521(5, 2, 1)),
     Fix(W521(5, 2, 3)), Fix(W53(5, 3)),
     Fix(W31(5, 1)), Fix(W71(5, 1)),
     Fix(W71(5, 3)), Fix(W31(5, 3)),
     Diff(8, 4, Keep, W11(4, 5)), Diff(8, 4, Keep, Keep),
     Diff(6, 8, Keep, Keep), Diff(6, 8, Keep, W11(6, 5)),
     Diff(8, 4, Keep, W11(8, 4)), Diff(8, 4, Keep, W11(8, 5)),
     Diff(6, 8, Keep, W11(8, 5)), Diff(6, 8, Keep, W11(8, 6))],
    // 249
    [Fix(W53(5, 2)), Fix(W53(5, 2)), Fix(W521(5, 2, 3)), Fix(W53(5, 3)),
     Fix(W71(5, 2)), Fix(W71(5, 2)), Fix(W71(5, 3)), Fix(W31(5, 3)),
     Fix(Keep), Fix(Keep), Diff(6, 8, Keep, Keep), Diff(6, 8, Keep, W11(6, 5)),
     Diff(8, 4, Keep, W211(5, 8, 4)), Fix(Keep), Diff(6, 8, Keep, W11(8, 5)), Diff(6, 8, Keep, W11(8, 6))],
    // 250
    [Fix(W53(5, 1)), Fix(W31(5, 1)),
     Fix(W31(5, 3)), Fix(W53(5, 3)),
     Fix(W31(5, 1)), Fix(W71(5, 1)),
     Fix(W71(5, 3)), Fix(W31(5, 3)),
     Diff(8, 4, Keep, W11(4, 5)), Diff(8, 4, Keep, Keep),
     Diff(6, 8, Keep, Keep), Diff(6, 8, Keep, W11(6, 5)),
     Diff(8, 4, Keep, W11(8, 4)), Diff(8, 4, Keep, W11(8, 5)),
     Diff(6, 8, Keep, W11(8, 5)), Diff(6, 8, Keep, W11(8, 6))],
    // 251
    [Diff(4, 2, Keep, W11(4, 2)), Diff(4, 2, Keep, W11(2, 5)), Fix(W31(5, 3)), Fix(W53(5, 3)),
     Diff(4, 2, Keep, W11(4, 5)), Diff(4, 2, Keep, Keep), Fix(W71(5, 3)), Fix(W31(5, 3)),
     Fix(Keep), Fix(Keep), Diff(6, 8, Keep, Keep), Diff(6, 8, Keep, W11(6, 5)),
     Diff(8, 4, Keep, W211(5, 4, 8)), Fix(Keep), Diff(6, 8, Keep, W11(8, 5)), Diff(6, 8, Keep, W11(6, 8))],
    // 252
    [Fix(W53(5, 1)), Fix(W521(5, 2, 1)), Fix(W53(5, 2)), Fix(W53(5, 2)),
     Fix(W31(5, 1)), Fix(W71(5, 1)), Fix(W71(5, 2)), Fix(W71(5, 2)),
     Diff(8, 4, Keep, W11(4, 5)), Diff(8, 4, Keep, Keep), Fix(Keep), Fix(Keep),
     Diff(8, 4, Keep, W11(8, 4)), Diff(8, 4, Keep, W11(8, 5)), Fix(Keep), Diff(6, 8, Keep, W211(5, 8, 6))],
    // 253
    [Fix(W53(5, 2)), Fix(W53(5, 2)), Fix(W53(5, 2)), Fix(W53(5, 2)),
     Fix(W71(5, 2)), Fix(W71(5, 2)), Fix(W71(5, 2)), Fix(W71(5, 2)),
     Fix(Keep), Fix(Keep), Fix(Keep), Fix(Keep),
     Diff(8, 4, Keep, W211(5, 8, 4)), Fix(Keep), Fix(Keep), Diff(6, 8, Keep, W211(5, 8, 6))],
    // 254
    [Fix(W53(5, 1)), Fix(W31(5, 1)), Diff(2, 6, Keep, W11(2, 5)), Diff(2, 6, Keep, W11(2, 6)),
     Fix(W31(5, 1)), Fix(W71(5, 1)), Diff(2, 6, Keep, Keep), Diff(2, 6, Keep, W11(6, 5)),
     Diff(8, 4, Keep, W11(4, 5)), Diff(8, 4, Keep, Keep), Fix(Keep), Fix(Keep),
     Diff(8, 4, Keep, W11(8, 4)), Diff(8, 4, Keep, W11(8, 5)), Fix(Keep), Diff(6, 8, Keep, W211(5, 8, 6))],
    // 255
    [Diff(4, 2, Keep, W211(5, 2, 4)), Fix(Keep), Fix(Keep), Diff(2, 6, Keep, W211(5, 2, 6)),
     Fix(Keep), Fix(Keep), Fix(Keep), Fix(Keep),
     Fix(Keep), Fix(Keep), Fix(Keep), Fix(Keep),
     Diff(8, 4, Keep, W211(5, 8, 4)), Fix(Keep), Fix(Keep), Diff(6, 8, Keep, W211(5, 8, 6))],
];

#[cfg(test)]
mod tests {
    use super::super::test_support::{derive_table, signature};
    use super::*;

    /// One canonical recipe row per symmetry class of the pattern masks.
    #[rustfmt::skip]
    const HQ4X_CLASSES: [(u8, [CellRule; 16]); 51] = [
        (0,
            [Fix(W211(5, 2, 4)), Fix(W521(5, 2, 4)), Fix(W521(5, 2, 6)), Fix(W211(5, 2, 6)),
             Fix(W521(5, 4, 2)), Fix(W611(5, 4, 2)), Fix(W611(5, 6, 2)), Fix(W521(5, 6, 2)),
             Fix(W521(5, 4, 8)), Fix(W611(5, 4, 8)), Fix(W611(5, 6, 8)), Fix(W521(5, 6, 8)),
             Fix(W211(5, 8, 4)), Fix(W521(5, 8, 4)), Fix(W521(5, 8, 6)), Fix(W211(5, 8, 6))]),
        (1,
            [Fix(W211(5, 2, 4)), Fix(W521(5, 2, 4)), Fix(W521(5, 2, 6)), Fix(W211(5, 2, 6)),
             Fix(W521(5, 4, 2)), Fix(W611(5, 4, 2)), Fix(W611(5, 6, 2)), Fix(W521(5, 6, 2)),
             Fix(W521(5, 4, 8)), Fix(W611(5, 4, 8)), Fix(W611(5, 6, 8)), Fix(W521(5, 6, 8)),
             Fix(W211(5, 8, 4)), Fix(W521(5, 8, 4)), Fix(W521(5, 8, 6)), Fix(W211(5, 8, 6))]),
        (2,
            [Fix(W53(5, 1)), Fix(W31(5, 1)), Fix(W31(5, 3)), Fix(W53(5, 3)),
             Fix(W521(5, 4, 1)), Fix(W71(5, 1)), Fix(W71(5, 3)), Fix(W521(5, 6, 3)),
             Fix(W521(5, 4, 8)), Fix(W611(5, 4, 8)), Fix(W611(5, 6, 8)), Fix(W521(5, 6, 8)),
             Fix(W211(5, 8, 4)), Fix(W521(5, 8, 4)), Fix(W521(5, 8, 6)), Fix(W211(5, 8, 6))]),
        (3,
            [Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(W31(5, 3)), Fix(W53(5, 3)),
             Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(W71(5, 3)), Fix(W521(5, 6, 3)),
             Fix(W521(5, 4, 8)), Fix(W611(5, 4, 8)), Fix(W611(5, 6, 8)), Fix(W521(5, 6, 8)),
             Fix(W211(5, 8, 4)), Fix(W521(5, 8, 4)), Fix(W521(5, 8, 6)), Fix(W211(5, 8, 6))]),
        (5,
            [Fix(W211(5, 2, 4)), Fix(W521(5, 2, 4)), Fix(W521(5, 2, 6)), Fix(W211(5, 2, 6)),
             Fix(W521(5, 4, 2)), Fix(W611(5, 4, 2)), Fix(W611(5, 6, 2)), Fix(W521(5, 6, 2)),
             Fix(W521(5, 4, 8)), Fix(W611(5, 4, 8)), Fix(W611(5, 6, 8)), Fix(W521(5, 6, 8)),
             Fix(W211(5, 8, 4)), Fix(W521(5, 8, 4)), Fix(W521(5, 8, 6)), Fix(W211(5, 8, 6))]),
        (7,
            [Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(W71(5, 6)), Fix(W53(5, 6)),
             Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(W71(5, 6)), Fix(W53(5, 6)),
             Fix(W521(5, 4, 8)), Fix(W611(5, 4, 8)), Fix(W611(5, 6, 8)), Fix(W521(5, 6, 8)),
             Fix(W211(5, 8, 4)), Fix(W521(5, 8, 4)), Fix(W521(5, 8, 6)), Fix(W211(5, 8, 6))]),
        (10,
            [Diff(4, 2, W53(5, 1), W11(2, 4)), Diff(4, 2, W31(5, 1), W11(2, 5)), Fix(W31(5, 3)), Fix(W53(5, 3)),
             Diff(4, 2, W31(5, 1), W11(4, 5)), Diff(4, 2, W71(5, 1), Keep), Fix(W71(5, 3)), Fix(W521(5, 6, 3)),
             Fix(W31(5, 7)), Fix(W71(5, 7)), Fix(W611(5, 6, 8)), Fix(W521(5, 6, 8)),
             Fix(W53(5, 7)), Fix(W521(5, 8, 7)), Fix(W521(5, 8, 6)), Fix(W211(5, 8, 6))]),
        (11,
            [Diff(4, 2, Keep, W11(2, 4)), Diff(4, 2, Keep, W11(2, 5)), Fix(W31(5, 3)), Fix(W53(5, 3)),
             Diff(4, 2, Keep, W11(4, 5)), Diff(4, 2, Keep, Keep), Fix(W71(5, 3)), Fix(W521(5, 6, 3)),
             Fix(W31(5, 7)), Fix(W71(5, 7)), Fix(W611(5, 6, 8)), Fix(W521(5, 6, 8)),
             Fix(W53(5, 7)), Fix(W521(5, 8, 7)), Fix(W521(5, 8, 6)), Fix(W211(5, 8, 6))]),
        (12,
            [Fix(W53(5, 1)), Fix(W521(5, 2, 1)), Fix(W521(5, 2, 6)), Fix(W211(5, 6, 2)),
             Fix(W31(5, 1)), Fix(W71(5, 1)), Fix(W611(5, 2, 6)), Fix(W521(5, 6, 2)),
             Fix(W31(5, 7)), Fix(W71(5, 7)), Fix(W611(5, 8, 6)), Fix(W521(5, 6, 8)),
             Fix(W53(5, 7)), Fix(W521(5, 8, 7)), Fix(W521(5, 8, 6)), Fix(W211(5, 6, 8))]),
        (13,
            [Fix(W53(5, 2)), Fix(W53(5, 2)), Fix(W521(5, 2, 6)), Fix(W211(5, 6, 2)),
             Fix(W71(5, 2)), Fix(W71(5, 2)), Fix(W611(5, 2, 6)), Fix(W521(5, 6, 2)),
             Fix(W31(5, 7)), Fix(W71(5, 7)), Fix(W611(5, 8, 6)), Fix(W521(5, 6, 8)),
             Fix(W53(5, 7)), Fix(W521(5, 8, 7)), Fix(W521(5, 8, 6)), Fix(W211(5, 6, 8))]),
        (14,
            [Diff(4, 2, W53(5, 1), W11(2, 4)), Diff(4, 2, W31(5, 1), W53(2, 4)),
             Diff(4, 2, W71(5, 6), W31(2, 5)), Diff(4, 2, W53(5, 6), W31(5, 2)),
             Diff(4, 2, W31(5, 1), W211(4, 5, 2)), Diff(4, 2, W71(5, 1), W611(5, 4, 2)),
             Fix(W71(5, 6)), Fix(W53(5, 6)),
             Fix(W31(5, 7)), Fix(W71(5, 7)),
             Fix(W611(5, 6, 8)), Fix(W521(5, 6, 8)),
             Fix(W53(5, 7)), Fix(W521(5, 8, 7)),
             Fix(W521(5, 8, 6)), Fix(W211(5, 8, 6))]),
        (15,
            [Diff(4, 2, Keep, W11(2, 4)), Diff(4, 2, Keep, W53(2, 4)),
             Diff(4, 2, W71(5, 6), W31(2, 5)), Diff(4, 2, W53(5, 6), W31(5, 2)),
             Diff(4, 2, Keep, W211(4, 5, 2)), Diff(4, 2, Keep, W611(5, 4, 2)),
             Fix(W71(5, 6)), Fix(W53(5, 6)),
             Fix(W31(5, 7)), Fix(W71(5, 7)),
             Fix(W611(5, 6, 8)), Fix(W521(5, 6, 8)),
             Fix(W53(5, 7)), Fix(W521(5, 8, 7)),
             Fix(W521(5, 8, 6)), Fix(W211(5, 8, 6))]),
        (24,
            [Fix(W53(5, 1)), Fix(W521(5, 2, 1)), Fix(W521(5, 2, 3)), Fix(W53(5, 3)),
             Fix(W31(5, 1)), Fix(W71(5, 1)), Fix(W71(5, 3)), Fix(W31(5, 3)),
             Fix(W31(5, 7)), Fix(W71(5, 7)), Fix(W71(5, 9)), Fix(W31(5, 9)),
             Fix(W53(5, 7)), Fix(W521(5, 8, 7)), Fix(W521(5, 8, 9)), Fix(W53(5, 9))]),
        (25,
            [Fix(W53(5, 2)), Fix(W53(5, 2)), Fix(W521(5, 2, 3)), Fix(W53(5, 3)),
             Fix(W71(5, 2)), Fix(W71(5, 2)), Fix(W71(5, 3)), Fix(W31(5, 3)),
             Fix(W31(5, 7)), Fix(W71(5, 7)), Fix(W71(5, 9)), Fix(W31(5, 9)),
             Fix(W53(5, 7)), Fix(W521(5, 8, 7)), Fix(W521(5, 8, 9)), Fix(W53(5, 9))]),
        (26,
            [Diff(4, 2, Keep, W11(2, 4)), Diff(4, 2, Keep, W11(2, 5)),
             Diff(2, 6, Keep, W11(2, 5)), Diff(2, 6, Keep, W11(2, 6)),
             Diff(4, 2, Keep, W11(4, 5)), Diff(4, 2, Keep, Keep),
             Diff(2, 6, Keep, Keep), Diff(2, 6, Keep, W11(6, 5)),
             Fix(W31(5, 7)), Fix(W71(5, 7)),
             Fix(W71(5, 9)), Fix(W31(5, 9)),
             Fix(W53(5, 7)), Fix(W521(5, 8, 7)),
             Fix(W521(5, 8, 9)), Fix(W53(5, 9))]),
        (27,
            [Diff(4, 2, Keep, W11(2, 4)), Diff(4, 2, Keep, W11(2, 5)), Fix(W31(5, 3)), Fix(W53(5, 3)),
             Diff(4, 2, Keep, W11(4, 5)), Diff(4, 2, Keep, Keep), Fix(W71(5, 3)), Fix(W31(5, 3)),
             Fix(W31(5, 7)), Fix(W71(5, 7)), Fix(W71(5, 9)), Fix(W31(5, 9)),
             Fix(W53(5, 7)), Fix(W521(5, 8, 7)), Fix(W521(5, 8, 9)), Fix(W53(5, 9))]),
        (29,
            [Fix(W53(5, 2)), Fix(W53(5, 2)), Fix(W53(5, 2)), Fix(W53(5, 2)),
             Fix(W71(5, 2)), Fix(W71(5, 2)), Fix(W71(5, 2)), Fix(W71(5, 2)),
             Fix(W31(5, 7)), Fix(W71(5, 7)), Fix(W71(5, 9)), Fix(W31(5, 9)),
             Fix(W53(5, 7)), Fix(W521(5, 8, 7)), Fix(W521(5, 8, 9)), Fix(W53(5, 9))]),
        (31,
            [Diff(4, 2, Keep, W11(2, 4)), Diff(4, 2, Keep, W11(2, 5)),
             Diff(2, 6, Keep, W11(2, 5)), Diff(2, 6, Keep, W11(2, 6)),
             Diff(4, 2, Keep, W11(4, 5)), Diff(4, 2, Keep, Keep),
             Diff(2, 6, Keep, Keep), Diff(2, 6, Keep, W11(6, 5)),
             Fix(W31(5, 7)), Fix(W71(5, 7)),
             Fix(W71(5, 9)), Fix(W31(5, 9)),
             Fix(W53(5, 7)), Fix(W521(5, 8, 7)),
             Fix(W521(5, 8, 9)), Fix(W53(5, 9))]),
        (36,
            [Fix(W211(5, 2, 4)), Fix(W521(5, 2, 4)), Fix(W521(5, 2, 6)), Fix(W211(5, 2, 6)),
             Fix(W521(5, 4, 2)), Fix(W611(5, 4, 2)), Fix(W611(5, 6, 2)), Fix(W521(5, 6, 2)),
             Fix(W521(5, 4, 8)), Fix(W611(5, 4, 8)), Fix(W611(5, 6, 8)), Fix(W521(5, 6, 8)),
             Fix(W211(5, 8, 4)), Fix(W521(5, 8, 4)), Fix(W521(5, 8, 6)), Fix(W211(5, 8, 6))]),
        (37,
            [Fix(W211(5, 2, 4)), Fix(W521(5, 2, 4)), Fix(W521(5, 2, 6)), Fix(W211(5, 2, 6)),
             Fix(W521(5, 4, 2)), Fix(W611(5, 4, 2)), Fix(W611(5, 6, 2)), Fix(W521(5, 6, 2)),
             Fix(W521(5, 4, 8)), Fix(W611(5, 4, 8)), Fix(W611(5, 6, 8)), Fix(W521(5, 6, 8)),
             Fix(W211(5, 8, 4)), Fix(W521(5, 8, 4)), Fix(W521(5, 8, 6)), Fix(W211(5, 8, 6))]),
        (38,
            [Fix(W53(5, 1)), Fix(W31(5, 1)), Fix(W71(5, 6)), Fix(W53(5, 6)),
             Fix(W521(5, 4, 1)), Fix(W71(5, 1)), Fix(W71(5, 6)), Fix(W53(5, 6)),
             Fix(W521(5, 4, 8)), Fix(W611(5, 4, 8)), Fix(W611(5, 6, 8)), Fix(W521(5, 6, 8)),
             Fix(W211(5, 8, 4)), Fix(W521(5, 8, 4)), Fix(W521(5, 8, 6)), Fix(W211(5, 8, 6))]),
        (39,
            [Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(W71(5, 6)), Fix(W53(5, 6)),
             Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(W71(5, 6)), Fix(W53(5, 6)),
             Fix(W521(5, 4, 8)), Fix(W611(5, 4, 8)), Fix(W611(5, 6, 8)), Fix(W521(5, 6, 8)),
             Fix(W211(5, 8, 4)), Fix(W521(5, 8, 4)), Fix(W521(5, 8, 6)), Fix(W211(5, 8, 6))]),
        (46,
            [Diff(4, 2, W53(5, 1), W211(5, 2, 4)), Diff(4, 2, W31(5, 1), W31(5, 2)),
             Fix(W71(5, 6)), Fix(W53(5, 6)),
             Diff(4, 2, W31(5, 1), W31(5, 4)), Diff(4, 2, W71(5, 1), Keep),
             Fix(W71(5, 6)), Fix(W53(5, 6)),
             Fix(W71(5, 8)), Fix(W71(5, 8)),
             Fix(W611(5, 6, 8)), Fix(W521(5, 6, 8)),
             Fix(W53(5, 8)), Fix(W53(5, 8)),
             Fix(W521(5, 8, 6)), Fix(W211(5, 8, 6))]),
        (47,
            [Diff(4, 2, Keep, W211(5, 2, 4)), Fix(Keep), Fix(W71(5, 6)), Fix(W53(5, 6)),
             Fix(Keep), Fix(Keep), Fix(W71(5, 6)), Fix(W53(5, 6)),
             Fix(W71(5, 8)), Fix(W71(5, 8)), Fix(W611(5, 6, 8)), Fix(W521(5, 6, 8)),
             Fix(W53(5, 8)), Fix(W53(5, 8)), Fix(W521(5, 8, 6)), Fix(W211(5, 8, 6))]),
        (49,
            [Fix(W211(5, 4, 2)), Fix(W521(5, 2, 4)), Fix(W521(5, 2, 3)), Fix(W53(5, 3)),
             Fix(W521(5, 4, 2)), Fix(W611(5, 2, 4)), Fix(W71(5, 3)), Fix(W31(5, 3)),
             Fix(W521(5, 4, 8)), Fix(W611(5, 8, 4)), Fix(W71(5, 9)), Fix(W31(5, 9)),
             Fix(W211(5, 4, 8)), Fix(W521(5, 8, 4)), Fix(W521(5, 8, 9)), Fix(W53(5, 9))]),
        (50,
            [Fix(W53(5, 1)), Fix(W31(5, 1)), Diff(2, 6, W31(5, 3), W11(2, 5)), Diff(2, 6, W53(5, 3), W11(6, 2)),
             Fix(W521(5, 4, 1)), Fix(W71(5, 1)), Diff(2, 6, W71(5, 3), Keep), Diff(2, 6, W31(5, 3), W11(6, 5)),
             Fix(W521(5, 4, 8)), Fix(W611(5, 8, 4)), Fix(W71(5, 9)), Fix(W31(5, 9)),
             Fix(W211(5, 4, 8)), Fix(W521(5, 8, 4)), Fix(W521(5, 8, 9)), Fix(W53(5, 9))]),
        (51,
            [Diff(2, 6, W53(5, 4), W31(5, 2)), Diff(2, 6, W71(5, 4), W31(2, 5)),
             Diff(2, 6, W31(5, 3), W53(2, 6)), Diff(2, 6, W53(5, 3), W11(2, 6)),
             Fix(W53(5, 4)), Fix(W71(5, 4)),
             Diff(2, 6, W71(5, 3), W611(5, 6, 2)), Diff(2, 6, W31(5, 3), W211(6, 5, 2)),
             Fix(W521(5, 4, 8)), Fix(W611(5, 4, 8)),
             Fix(W71(5, 9)), Fix(W31(5, 9)),
             Fix(W211(5, 8, 4)), Fix(W521(5, 8, 4)),
             Fix(W521(5, 8, 9)), Fix(W53(5, 9))]),
        (53,
            [Fix(W211(5, 4, 2)), Fix(W521(5, 2, 4)), Fix(W53(5, 2)), Fix(W53(5, 2)),
             Fix(W521(5, 4, 2)), Fix(W611(5, 2, 4)), Fix(W71(5, 2)), Fix(W71(5, 2)),
             Fix(W521(5, 4, 8)), Fix(W611(5, 8, 4)), Fix(W71(5, 9)), Fix(W31(5, 9)),
             Fix(W211(5, 4, 8)), Fix(W521(5, 8, 4)), Fix(W521(5, 8, 9)), Fix(W53(5, 9))]),
        (54,
            [Fix(W53(5, 1)), Fix(W31(5, 1)), Diff(2, 6, Keep, W11(2, 5)), Diff(2, 6, Keep, W11(6, 2)),
             Fix(W521(5, 4, 1)), Fix(W71(5, 1)), Diff(2, 6, Keep, Keep), Diff(2, 6, Keep, W11(6, 5)),
             Fix(W521(5, 4, 8)), Fix(W611(5, 8, 4)), Fix(W71(5, 9)), Fix(W31(5, 9)),
             Fix(W211(5, 4, 8)), Fix(W521(5, 8, 4)), Fix(W521(5, 8, 9)), Fix(W53(5, 9))]),
        (55,
            [Diff(2, 6, W53(5, 4), W31(5, 2)), Diff(2, 6, W71(5, 4), W31(2, 5)),
             Diff(2, 6, Keep, W53(2, 6)), Diff(2, 6, Keep, W11(2, 6)),
             Fix(W53(5, 4)), Fix(W71(5, 4)),
             Diff(2, 6, Keep, W611(5, 6, 2)), Diff(2, 6, Keep, W211(6, 5, 2)),
             Fix(W521(5, 4, 8)), Fix(W611(5, 4, 8)),
             Fix(W71(5, 9)), Fix(W31(5, 9)),
             Fix(W211(5, 8, 4)), Fix(W521(5, 8, 4)),
             Fix(W521(5, 8, 9)), Fix(W53(5, 9))]),
        (57,
            [Fix(W53(5, 2)), Fix(W53(5, 2)), Fix(W521(5, 2, 3)), Fix(W53(5, 3)),
             Fix(W71(5, 2)), Fix(W71(5, 2)), Fix(W71(5, 3)), Fix(W31(5, 3)),
             Fix(W71(5, 8)), Fix(W71(5, 8)), Fix(W71(5, 9)), Fix(W31(5, 9)),
             Fix(W53(5, 8)), Fix(W53(5, 8)), Fix(W521(5, 8, 9)), Fix(W53(5, 9))]),
        (58,
            [Diff(4, 2, W53(5, 1), W211(5, 2, 4)), Diff(4, 2, W31(5, 1), W31(5, 2)),
             Diff(2, 6, W31(5, 3), W31(5, 2)), Diff(2, 6, W53(5, 3), W211(5, 2, 6)),
             Diff(4, 2, W31(5, 1), W31(5, 4)), Diff(4, 2, W71(5, 1), Keep),
             Diff(2, 6, W71(5, 3), Keep), Diff(2, 6, W31(5, 3), W31(5, 6)),
             Fix(W71(5, 8)), Fix(W71(5, 8)),
             Fix(W71(5, 9)), Fix(W31(5, 9)),
             Fix(W53(5, 8)), Fix(W53(5, 8)),
             Fix(W521(5, 8, 9)), Fix(W53(5, 9))]),
        (59,
            [Diff(4, 2, Keep, W11(2, 4)), Diff(4, 2, Keep, W11(2, 5)),
             Diff(2, 6, W31(5, 3), W31(5, 2)), Diff(2, 6, W53(5, 3), W211(5, 2, 6)),
             Diff(4, 2, Keep, W11(4, 5)), Diff(4, 2, Keep, Keep),
             Diff(2, 6, W71(5, 3), Keep), Diff(2, 6, W31(5, 3), W31(5, 6)),
             Fix(W71(5, 8)), Fix(W71(5, 8)),
             Fix(W71(5, 9)), Fix(W31(5, 9)),
             Fix(W53(5, 8)), Fix(W53(5, 8)),
             Fix(W521(5, 8, 9)), Fix(W53(5, 9))]),
        (60,
            [Fix(W53(5, 1)), Fix(W521(5, 2, 1)), Fix(W53(5, 2)), Fix(W53(5, 2)),
             Fix(W31(5, 1)), Fix(W71(5, 1)), Fix(W71(5, 2)), Fix(W71(5, 2)),
             Fix(W71(5, 8)), Fix(W71(5, 8)), Fix(W71(5, 9)), Fix(W31(5, 9)),
             Fix(W53(5, 8)), Fix(W53(5, 8)), Fix(W521(5, 8, 9)), Fix(W53(5, 9))]),
        (61,
            [Fix(W53(5, 2)), Fix(W53(5, 2)), Fix(W53(5, 2)), Fix(W53(5, 2)),
             Fix(W71(5, 2)), Fix(W71(5, 2)), Fix(W71(5, 2)), Fix(W71(5, 2)),
             Fix(W71(5, 8)), Fix(W71(5, 8)), Fix(W71(5, 9)), Fix(W31(5, 9)),
             Fix(W53(5, 8)), Fix(W53(5, 8)), Fix(W521(5, 8, 9)), Fix(W53(5, 9))]),
        (62,
            [Fix(W53(5, 1)), Fix(W31(5, 1)), Diff(2, 6, Keep, W11(2, 5)), Diff(2, 6, Keep, W11(2, 6)),
             Fix(W31(5, 1)), Fix(W71(5, 1)), Diff(2, 6, Keep, Keep), Diff(2, 6, Keep, W11(6, 5)),
             Fix(W71(5, 8)), Fix(W71(5, 8)), Fix(W71(5, 9)), Fix(W31(5, 9)),
             Fix(W53(5, 8)), Fix(W53(5, 8)), Fix(W521(5, 8, 9)), Fix(W53(5, 9))]),
        (63,
            [Diff(4, 2, Keep, W211(5, 2, 4)), Fix(Keep), Diff(2, 6, Keep, W11(2, 5)), Diff(2, 6, Keep, W11(2, 6)),
             Fix(Keep), Fix(Keep), Diff(2, 6, Keep, Keep), Diff(2, 6, Keep, W11(6, 5)),
             Fix(W71(5, 8)), Fix(W71(5, 8)), Fix(W71(5, 9)), Fix(W31(5, 9)),
             Fix(W53(5, 8)), Fix(W53(5, 8)), Fix(W521(5, 8, 9)), Fix(W53(5, 9))]),
        (90,
            [Diff(4, 2, W53(5, 1), W211(5, 2, 4)), Diff(4, 2, W31(5, 1), W31(5, 2)),
             Diff(2, 6, W31(5, 3), W31(5, 2)), Diff(2, 6, W53(5, 3), W211(5, 2, 6)),
             Diff(4, 2, W31(5, 1), W31(5, 4)), Diff(4, 2, W71(5, 1), Keep),
             Diff(2, 6, W71(5, 3), Keep), Diff(2, 6, W31(5, 3), W31(5, 6)),
             Diff(8, 4, W31(5, 7), W31(5, 4)), Diff(8, 4, W71(5, 7), Keep),
             Diff(6, 8, W71(5, 9), Keep), Diff(6, 8, W31(5, 9), W31(5, 6)),
             Diff(8, 4, W53(5, 7), W211(5, 8, 4)), Diff(8, 4, W31(5, 7), W31(5, 8)),
             Diff(6, 8, W31(5, 9), W31(5, 8)), Diff(6, 8, W53(5, 9), W211(5, 8, 6))]),
        (91,
            [Diff(4, 2, Keep, W11(2, 4)), Diff(4, 2, Keep, W11(2, 5)),
             Diff(2, 6, W31(5, 3), W31(5, 2)), Diff(2, 6, W53(5, 3), W211(5, 2, 6)),
             Diff(4, 2, Keep, W11(4, 5)), Diff(4, 2, Keep, Keep),
             Diff(2, 6, W71(5, 3), Keep), Diff(2, 6, W31(5, 3), W31(5, 6)),
             Diff(8, 4, W31(5, 7), W31(5, 4)), Diff(8, 4, W71(5, 7), Keep),
             Diff(6, 8, W71(5, 9), Keep), Diff(6, 8, W31(5, 9), W31(5, 6)),
             Diff(8, 4, W53(5, 7), W211(5, 8, 4)), Diff(8, 4, W31(5, 7), W31(5, 8)),
             Diff(6, 8, W31(5, 9), W31(5, 8)), Diff(6, 8, W53(5, 9), W211(5, 8, 6))]),
        (93,
            [Fix(W53(5, 2)), Fix(W53(5, 2)),
             Fix(W53(5, 2)), Fix(W53(5, 2)),
             Fix(W71(5, 2)), Fix(W71(5, 2)),
             Fix(W71(5, 2)), Fix(W71(5, 2)),
             Diff(8, 4, W31(5, 7), W31(5, 4)), Diff(8, 4, W71(5, 7), Keep),
             Diff(6, 8, W71(5, 9), Keep), Diff(6, 8, W31(5, 9), W31(5, 6)),
             Diff(8, 4, W53(5, 7), W211(5, 8, 4)), Diff(8, 4, W31(5, 7), W31(5, 8)),
             Diff(6, 8, W31(5, 9), W31(5, 8)), Diff(6, 8, W53(5, 9), W211(5, 8, 6))]),
        (95,
            [Diff(4, 2, Keep, W11(2, 4)), Diff(4, 2, Keep, W11(2, 5)),
             Diff(2, 6, Keep, W11(2, 5)), Diff(2, 6, Keep, W11(2, 6)),
             Diff(4, 2, Keep, W11(4, 5)), Diff(4, 2, Keep, Keep),
             Diff(2, 6, Keep, Keep), Diff(2, 6, Keep, W11(6, 5)),
             Fix(W31(5, 7)), Fix(W71(5, 7)),
             Fix(W71(5, 9)), Fix(W31(5, 9)),
             Fix(W53(5, 7)), Fix(W31(5, 7)),
             Fix(W31(5, 9)), Fix(W53(5, 9))]),
        (117,
            [Fix(W211(5, 2, 4)), Fix(W521(5, 2, 4)),
             Fix(W53(5, 2)), Fix(W53(5, 2)),
             Fix(W521(5, 4, 2)), Fix(W611(5, 4, 2)),
             Fix(W71(5, 2)), Fix(W71(5, 2)),
             Fix(W53(5, 4)), Fix(W71(5, 4)),
             Diff(6, 8, W71(5, 9), Keep), Diff(6, 8, W31(5, 9), W31(5, 6)),
             Fix(W53(5, 4)), Fix(W71(5, 4)),
             Diff(6, 8, W31(5, 9), W31(5, 8)), Diff(6, 8, W53(5, 9), W211(5, 8, 6))]),
        (119,
            [Diff(2, 6, W53(5, 4), W31(5, 2)), Diff(2, 6, W71(5, 4), W31(2, 5)),
             Diff(2, 6, Keep, W53(2, 6)), Diff(2, 6, Keep, W11(2, 6)),
             Fix(W53(5, 4)), Fix(W71(5, 4)),
             Diff(2, 6, Keep, W611(5, 6, 2)), Diff(2, 6, Keep, W211(6, 5, 2)),
             Fix(W53(5, 4)), Fix(W71(5, 4)),
             Fix(W71(5, 9)), Fix(W31(5, 9)),
             Fix(W53(5, 4)), Fix(W71(5, 4)),
             Fix(W31(5, 9)), Fix(W53(5, 9))]),
        (126,
            [Fix(W53(5, 1)), Fix(W31(5, 1)), Diff(2, 6, Keep, W11(2, 5)), Diff(2, 6, Keep, W11(2, 6)),
             Fix(W31(5, 1)), Fix(W71(5, 1)), Diff(2, 6, Keep, Keep), Diff(2, 6, Keep, W11(6, 5)),
             Diff(8, 4, Keep, W11(4, 5)), Diff(8, 4, Keep, Keep), Fix(W71(5, 9)), Fix(W31(5, 9)),
             Diff(8, 4, Keep, W11(8, 4)), Diff(8, 4, Keep, W11(8, 5)), Fix(W31(5, 9)), Fix(W53(5, 9))]),
        (127,
            [Diff(4, 2, Keep, W211(5, 2, 4)), Fix(Keep), Diff(2, 6, Keep, W11(2, 5)), Diff(2, 6, Keep, W11(2, 6)),
             Fix(Keep), Fix(Keep), Diff(2, 6, Keep, Keep), Diff(2, 6, Keep, W11(6, 5)),
             Diff(8, 4, Keep, W11(4, 5)), Diff(8, 4, Keep, Keep), Fix(W71(5, 9)), Fix(W31(5, 9)),
             Diff(8, 4, Keep, W11(8, 4)), Diff(8, 4, Keep, W11(8, 5)), Fix(W31(5, 9)), Fix(W53(5, 9))]),
        (165,
            [Fix(W211(5, 2, 4)), Fix(W521(5, 2, 4)), Fix(W521(5, 2, 6)), Fix(W211(5, 2, 6)),
             Fix(W521(5, 4, 2)), Fix(W611(5, 4, 2)), Fix(W611(5, 6, 2)), Fix(W521(5, 6, 2)),
             Fix(W521(5, 4, 8)), Fix(W611(5, 4, 8)), Fix(W611(5, 6, 8)), Fix(W521(5, 6, 8)),
             Fix(W211(5, 8, 4)), Fix(W521(5, 8, 4)), Fix(W521(5, 8, 6)), Fix(W211(5, 8, 6))]),
        (167,
            [Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(W71(5, 6)), Fix(W53(5, 6)),
             Fix(W53(5, 4)), Fix(W71(5, 4)), Fix(W71(5, 6)), Fix(W53(5, 6)),
             Fix(W521(5, 4, 8)), Fix(W611(5, 4, 8)), Fix(W611(5, 6, 8)), Fix(W521(5, 6, 8)),
             Fix(W211(5, 8, 4)), Fix(W521(5, 8, 4)), Fix(W521(5, 8, 6)), Fix(W211(5, 8, 6))]),
        (175,
            [Diff(4, 2, Keep, W211(5, 2, 4)), Fix(Keep), Fix(W71(5, 6)), Fix(W53(5, 6)),
             Fix(Keep), Fix(Keep), Fix(W71(5, 6)), Fix(W53(5, 6)),
             Fix(W71(5, 8)), Fix(W71(5, 8)), Fix(W611(5, 6, 8)), Fix(W521(5, 6, 8)),
             Fix(W53(5, 8)), Fix(W53(5, 8)), Fix(W521(5, 8, 6)), Fix(W211(5, 8, 6))]),
        (189,
            [Fix(W53(5, 2)), Fix(W53(5, 2)), Fix(W53(5, 2)), Fix(W53(5, 2)),
             Fix(W71(5, 2)), Fix(W71(5, 2)), Fix(W71(5, 2)), Fix(W71(5, 2)),
             Fix(W71(5, 8)), Fix(W71(5, 8)), Fix(W71(5, 8)), Fix(W71(5, 8)),
             Fix(W53(5, 8)), Fix(W53(5, 8)), Fix(W53(5, 8)), Fix(W53(5, 8))]),
        (191,
            [Diff(4, 2, Keep, W211(5, 2, 4)), Fix(Keep), Fix(Keep), Diff(2, 6, Keep, W211(5, 2, 6)),
             Fix(Keep), Fix(Keep), Fix(Keep), Fix(Keep),
             Fix(W71(5, 8)), Fix(W71(5, 8)), Fix(W71(5, 8)), Fix(W71(5, 8)),
             Fix(W53(5, 8)), Fix(W53(5, 8)), Fix(W53(5, 8)), Fix(W53(5, 8))]),
        (255,
            [Diff(4, 2, Keep, W211(5, 2, 4)), Fix(Keep), Fix(Keep), Diff(2, 6, Keep, W211(5, 2, 6)),
             Fix(Keep), Fix(Keep), Fix(Keep), Fix(Keep),
             Fix(Keep), Fix(Keep), Fix(Keep), Fix(Keep),
             Diff(8, 4, Keep, W211(5, 8, 4)), Fix(Keep), Fix(Keep), Diff(6, 8, Keep, W211(5, 8, 6))]),
    ];

    #[test]
    fn test_rule_table_matches_class_derivation() {
        let derived = derive_table(&HQ4X_CLASSES, 4);
        for p in 0..256 {
            for k in 0..16 {
                assert_eq!(
                    signature(HQ4X_RULES[p][k]),
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
        let src = vec![0u32; 6 * 3];
        let out = Hq4x.scale(&src, 6, 3).unwrap();
        assert_eq!(out.len(), 24 * 12);
    }

    #[test]
    fn test_uniform_image_round_trips_through_rgb565() {
        // 0x123456 truncated to 5/6/5 and re-expanded is 0x103450
        let src = vec![0x0012_3456u32; 4 * 4];
        let out = Hq4x.scale(&src, 4, 4).unwrap();
        assert_eq!(out.len(), 16 * 16);
        assert!(out.iter().all(|&p| p == 0x0010_3450));
    }

    #[test]
    fn test_two_tone_edge_keeps_far_columns_pure() {
        // Left half white, right half black. Pixels a full column away from
        // the edge see pattern 0 and must come out unblended.
        let w = 0x00FF_FFFF;
        let src = vec![w, w, 0, 0, w, w, 0, 0, w, w, 0, 0, w, w, 0, 0];
        let out = Hq4x.scale(&src, 4, 4).unwrap();

        for y in 0..16 {
            for x in 0..4 {
                assert_eq!(out[y * 16 + x], 0x00F8_FCF8, "white side ({}, {})", x, y);
            }
            for x in 12..16 {
                assert_eq!(out[y * 16 + x], 0, "black side ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_rejects_invalid_input() {
        assert!(matches!(
            Hq4x.scale(&[0; 4], 4, 0),
            Err(FilterError::InvalidDimensions)
        ));
        assert!(matches!(
            Hq4x.scale(&[0; 10], 3, 3),
            Err(FilterError::BufferSizeMismatch {
                expected: 9,
                actual: 10
            })
        ));
    }
}
