// HQ filter family - edge-detecting interpolation (hq2x, hq4x)
//
// The HQ filters classify each source pixel against its 8 neighbors in a
// reduced color space, then look up a per-sub-pixel blend recipe for the
// resulting pattern mask. The 256-entry recipe tables live with their
// filters; this module holds the shared machinery: the neighbor window,
// the pattern classifier, and the rule interpreter.

mod hq2x;
mod hq4x;
mod interp;
mod tables;

pub use hq2x::Hq2x;
pub use hq4x::Hq4x;

use tables::{tables, to_rgb565, yuv_different, ColorTables};

/// A fixed-weight blend of sampled window colors.
///
/// Arguments are window indices (1-9, raster order, 5 = center). The
/// variant name carries the weights, e.g. `W521(5, 2, 4)` blends
/// `(5*w5 + 2*w2 + w4) >> 3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlendOp {
    /// Keep the center color unchanged.
    Keep,
    W31(u8, u8),
    W211(u8, u8, u8),
    W71(u8, u8),
    W11(u8, u8),
    W521(u8, u8, u8),
    W611(u8, u8, u8),
    W53(u8, u8),
    W233(u8, u8, u8),
    W1411(u8, u8, u8),
}

/// Recipe for one destination sub-pixel.
///
/// Most cells are a fixed blend. Cells on an ambiguous diagonal carry a
/// secondary difference test between two non-adjacent neighbors and pick
/// one of two blends from its outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CellRule {
    Fix(BlendOp),
    Diff(u8, u8, BlendOp, BlendOp),
}

impl BlendOp {
    /// Evaluate against the expanded window colors.
    #[inline]
    fn apply(self, c: &[u32; 10]) -> u32 {
        match self {
            BlendOp::Keep => c[5],
            BlendOp::W31(a, b) => interp::mix3_1(c[a as usize], c[b as usize]),
            BlendOp::W211(a, b, d) => interp::mix2_1_1(c[a as usize], c[b as usize], c[d as usize]),
            BlendOp::W71(a, b) => interp::mix7_1(c[a as usize], c[b as usize]),
            BlendOp::W11(a, b) => interp::mix1_1(c[a as usize], c[b as usize]),
            BlendOp::W521(a, b, d) => interp::mix5_2_1(c[a as usize], c[b as usize], c[d as usize]),
            BlendOp::W611(a, b, d) => interp::mix6_1_1(c[a as usize], c[b as usize], c[d as usize]),
            BlendOp::W53(a, b) => interp::mix5_3(c[a as usize], c[b as usize]),
            BlendOp::W233(a, b, d) => interp::mix2_3_3(c[a as usize], c[b as usize], c[d as usize]),
            BlendOp::W1411(a, b, d) => {
                interp::mix14_1_1(c[a as usize], c[b as usize], c[d as usize])
            }
        }
    }
}

impl CellRule {
    /// Resolve the recipe for one sub-pixel.
    #[inline]
    fn resolve(self, t: &ColorTables, w: &[u16; 10], c: &[u32; 10]) -> u32 {
        match self {
            CellRule::Fix(op) => op.apply(c),
            CellRule::Diff(a, b, edge, smooth) => {
                if t.different(w[a as usize], w[b as usize]) {
                    edge.apply(c)
                } else {
                    smooth.apply(c)
                }
            }
        }
    }
}

/// Run an HQ kernel over the whole source buffer.
///
/// `FACTOR` is the linear magnification, `CELLS` must be `FACTOR * FACTOR`.
/// Preconditions (positive dimensions, matching buffer length) are checked
/// by the calling filter.
fn scale_with_rules<const FACTOR: usize, const CELLS: usize>(
    rules: &[[CellRule; CELLS]; 256],
    src: &[u32],
    width: usize,
    height: usize,
) -> Vec<u32> {
    debug_assert_eq!(FACTOR * FACTOR, CELLS);

    let t = tables();
    let out_w = width * FACTOR;
    let mut out = vec![0u32; out_w * height * FACTOR];

    let mut w = [0u16; 10];
    let mut c = [0u32; 10];

    for y in 0..height {
        // Off-image rows fall back to the center row (offset 0), which is
        // the nearest in-bounds neighbor along the same column.
        let prev = if y > 0 { -(width as isize) } else { 0 };
        let next = if y < height - 1 { width as isize } else { 0 };

        for x in 0..width {
            let curr = (y * width + x) as isize;

            w[2] = to_rgb565(src[(curr + prev) as usize]);
            w[5] = to_rgb565(src[curr as usize]);
            w[8] = to_rgb565(src[(curr + next) as usize]);

            if x > 0 {
                w[1] = to_rgb565(src[(curr + prev - 1) as usize]);
                w[4] = to_rgb565(src[(curr - 1) as usize]);
                w[7] = to_rgb565(src[(curr + next - 1) as usize]);
            } else {
                w[1] = w[2];
                w[4] = w[5];
                w[7] = w[8];
            }

            if x < width - 1 {
                w[3] = to_rgb565(src[(curr + prev + 1) as usize]);
                w[6] = to_rgb565(src[(curr + 1) as usize]);
                w[9] = to_rgb565(src[(curr + next + 1) as usize]);
            } else {
                w[3] = w[2];
                w[6] = w[5];
                w[9] = w[8];
            }

            for k in 1..10 {
                c[k] = t.expand(w[k]);
            }

            let mut pattern = 0usize;
            let mut flag = 1usize;
            let yuv5 = t.yuv(w[5]);
            for k in [1, 2, 3, 4, 6, 7, 8, 9] {
                if w[k] != w[5] && yuv_different(yuv5, t.yuv(w[k])) {
                    pattern |= flag;
                }
                flag <<= 1;
            }

            let cell_rules = &rules[pattern];
            let base = y * FACTOR * out_w + x * FACTOR;
            for (k, rule) in cell_rules.iter().enumerate() {
                out[base + (k / FACTOR) * out_w + (k % FACTOR)] = rule.resolve(t, &w, &c);
            }
        }
    }

    out
}

#[cfg(test)]
mod test_support {
    // Shared helpers for the rule-table validation tests.
    //
    // The shipped 256-row tables are checked by regenerating every row from
    // one canonical row per symmetry class: rotating or mirroring the
    // neighbor grid permutes both the pattern bits and the destination
    // cells, so each class representative determines its whole orbit.

    use super::{BlendOp, CellRule};

    /// Neighbor index permutation for a 90-degree clockwise rotation.
    pub const ROTATE: [u8; 10] = [0, 3, 6, 9, 2, 5, 8, 1, 4, 7];
    /// Neighbor index permutation for a left-right mirror.
    pub const MIRROR: [u8; 10] = [0, 3, 2, 1, 6, 5, 4, 9, 8, 7];

    /// Pattern bit for each neighbor index.
    const BIT: [u8; 10] = [0, 1, 2, 4, 8, 0, 16, 32, 64, 128];

    /// Apply a neighbor permutation to a pattern mask.
    pub fn map_pattern(pattern: u8, map: &[u8; 10]) -> u8 {
        let mut out = 0;
        for k in [1usize, 2, 3, 4, 6, 7, 8, 9] {
            if pattern & BIT[k] != 0 {
                out |= BIT[map[k] as usize];
            }
        }
        out
    }

    fn map_blend(op: BlendOp, map: &[u8; 10]) -> BlendOp {
        let m = |i: u8| map[i as usize];
        match op {
            BlendOp::Keep => BlendOp::Keep,
            BlendOp::W31(a, b) => BlendOp::W31(m(a), m(b)),
            BlendOp::W211(a, b, c) => BlendOp::W211(m(a), m(b), m(c)),
            BlendOp::W71(a, b) => BlendOp::W71(m(a), m(b)),
            BlendOp::W11(a, b) => BlendOp::W11(m(a), m(b)),
            BlendOp::W521(a, b, c) => BlendOp::W521(m(a), m(b), m(c)),
            BlendOp::W611(a, b, c) => BlendOp::W611(m(a), m(b), m(c)),
            BlendOp::W53(a, b) => BlendOp::W53(m(a), m(b)),
            BlendOp::W233(a, b, c) => BlendOp::W233(m(a), m(b), m(c)),
            BlendOp::W1411(a, b, c) => BlendOp::W1411(m(a), m(b), m(c)),
        }
    }

    pub fn map_cell(cell: CellRule, map: &[u8; 10]) -> CellRule {
        match cell {
            CellRule::Fix(op) => CellRule::Fix(map_blend(op, map)),
            CellRule::Diff(a, b, edge, smooth) => CellRule::Diff(
                map[a as usize],
                map[b as usize],
                map_blend(edge, map),
                map_blend(smooth, map),
            ),
        }
    }

    /// Destination-cell permutation of a rotation: source cell (r, c) of an
    /// N-by-N block lands at (c, N-1-r).
    pub fn rotate_cells<const CELLS: usize>(body: &[CellRule; CELLS], n: usize) -> [CellRule; CELLS] {
        let mut out = [CellRule::Fix(BlendOp::Keep); CELLS];
        for r in 0..n {
            for c in 0..n {
                out[c * n + (n - 1 - r)] = map_cell(body[r * n + c], &ROTATE);
            }
        }
        out
    }

    /// Destination-cell permutation of a mirror: (r, c) lands at (r, N-1-c).
    pub fn mirror_cells<const CELLS: usize>(body: &[CellRule; CELLS], n: usize) -> [CellRule; CELLS] {
        let mut out = [CellRule::Fix(BlendOp::Keep); CELLS];
        for r in 0..n {
            for c in 0..n {
                out[r * n + (n - 1 - c)] = map_cell(body[r * n + c], &MIRROR);
            }
        }
        out
    }

    /// Probe window: distinct colors per index so that blend argument
    /// mistakes cannot cancel out.
    pub const PROBE_A: [u32; 10] = [
        0, 0x101010, 0x202020, 0x313131, 0x404040, 0x555555, 0x616161, 0x707070, 0x818181,
        0x909090,
    ];
    pub const PROBE_B: [u32; 10] = [
        0, 0x0B162C, 0x12253F, 0x1E3A62, 0x294F85, 0x3764A8, 0x4279CB, 0x4E8EEE, 0x59A3F1,
        0x64B8F4,
    ];

    /// Behavioral signature of a cell: the secondary pair (order-normalized,
    /// the predicate is symmetric) plus both branches evaluated on both
    /// probe windows. Two cells with equal signatures scale identically.
    pub fn signature(cell: CellRule) -> (Option<(u8, u8)>, [u32; 4]) {
        match cell {
            CellRule::Fix(op) => {
                let a = op.apply(&PROBE_A);
                let b = op.apply(&PROBE_B);
                (None, [a, b, a, b])
            }
            CellRule::Diff(a, b, edge, smooth) => {
                let pair = if a <= b { (a, b) } else { (b, a) };
                (
                    Some(pair),
                    [
                        edge.apply(&PROBE_A),
                        edge.apply(&PROBE_B),
                        smooth.apply(&PROBE_A),
                        smooth.apply(&PROBE_B),
                    ],
                )
            }
        }
    }

    /// Regenerate all 256 rows from class representatives by closing over
    /// rotation and mirror, verifying agreement wherever orbits overlap.
    pub fn derive_table<const CELLS: usize>(
        classes: &[(u8, [CellRule; CELLS])],
        n: usize,
    ) -> [[CellRule; CELLS]; 256] {
        let mut derived: [Option<[CellRule; CELLS]>; 256] = [None; 256];
        for &(pattern, body) in classes {
            derived[pattern as usize] = Some(body);
        }

        loop {
            let mut changed = false;
            for p in 0..256u16 {
                let Some(body) = derived[p as usize] else {
                    continue;
                };
                let transforms = [
                    (map_pattern(p as u8, &ROTATE), rotate_cells(&body, n)),
                    (map_pattern(p as u8, &MIRROR), mirror_cells(&body, n)),
                ];
                for (tp, tbody) in transforms {
                    match derived[tp as usize] {
                        None => {
                            derived[tp as usize] = Some(tbody);
                            changed = true;
                        }
                        Some(existing) => {
                            for k in 0..CELLS {
                                assert_eq!(
                                    signature(existing[k]),
                                    signature(tbody[k]),
                                    "symmetry conflict at pattern {} cell {}",
                                    tp,
                                    k
                                );
                            }
                        }
                    }
                }
            }
            if !changed {
                break;
            }
        }

        let mut out = [[CellRule::Fix(BlendOp::Keep); CELLS]; 256];
        for p in 0..256 {
            out[p] = derived[p].unwrap_or_else(|| panic!("pattern {} not reachable from any class", p));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::{map_pattern, MIRROR, ROTATE};
    use super::*;

    #[test]
    fn test_pattern_maps_are_involutions_or_cycles() {
        for p in 0..=255u8 {
            // Four rotations come back around
            let r4 = map_pattern(
                map_pattern(map_pattern(map_pattern(p, &ROTATE), &ROTATE), &ROTATE),
                &ROTATE,
            );
            assert_eq!(r4, p);
            // Mirror twice is the identity
            assert_eq!(map_pattern(map_pattern(p, &MIRROR), &MIRROR), p);
        }
    }

    #[test]
    fn test_keep_resolves_to_center() {
        let t = tables();
        let w = [0u16; 10];
        let mut c = [0u32; 10];
        c[5] = 0x0012_3456;
        assert_eq!(CellRule::Fix(BlendOp::Keep).resolve(t, &w, &c), 0x0012_3456);
    }

    #[test]
    fn test_diff_cell_picks_branch_by_predicate() {
        let t = tables();
        let mut w = [0u16; 10];
        let mut c = [0u32; 10];
        // Window indices 4 and 2: black vs white is an edge, black vs black is not
        w[4] = 0x0000;
        c[5] = 0x0040_4040;
        c[2] = 0x0080_8080;
        let rule = CellRule::Diff(4, 2, BlendOp::Keep, BlendOp::W11(5, 2));
        w[2] = 0xFFFF;
        assert_eq!(rule.resolve(t, &w, &c), c[5]);
        w[2] = 0x0000;
        assert_eq!(rule.resolve(t, &w, &c), 0x0060_6060);
    }
}
