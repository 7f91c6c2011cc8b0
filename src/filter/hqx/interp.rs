// Blend operators - fixed-weight color mixing for the HQ filters
//
// Each operator blends 24-bit RGB colors with small integer weights
// normalized by a power-of-two shift. The red/blue pair and the green
// channel are computed in separate lanes of one u32 so that carries from
// one channel can never bleed into another.

/// Red and blue lanes (bits 16-23 and 0-7).
const RB_MASK: u32 = 0x00FF_00FF;
/// Green lane (bits 8-15).
const G_MASK: u32 = 0x0000_FF00;

/// Weight 3:1.
#[inline]
pub fn mix3_1(a: u32, b: u32) -> u32 {
    if a == b {
        return a;
    }
    ((((a & RB_MASK) * 3 + (b & RB_MASK)) >> 2) & RB_MASK)
        | ((((a & G_MASK) * 3 + (b & G_MASK)) >> 2) & G_MASK)
}

/// Weight 2:1:1.
#[inline]
pub fn mix2_1_1(a: u32, b: u32, c: u32) -> u32 {
    ((((a & RB_MASK) * 2 + (b & RB_MASK) + (c & RB_MASK)) >> 2) & RB_MASK)
        | ((((a & G_MASK) * 2 + (b & G_MASK) + (c & G_MASK)) >> 2) & G_MASK)
}

/// Weight 7:1.
#[inline]
pub fn mix7_1(a: u32, b: u32) -> u32 {
    ((((a & RB_MASK) * 7 + (b & RB_MASK)) >> 3) & RB_MASK)
        | ((((a & G_MASK) * 7 + (b & G_MASK)) >> 3) & G_MASK)
}

/// Weight 1:1.
#[inline]
pub fn mix1_1(a: u32, b: u32) -> u32 {
    ((((a & RB_MASK) + (b & RB_MASK)) >> 1) & RB_MASK)
        | ((((a & G_MASK) + (b & G_MASK)) >> 1) & G_MASK)
}

/// Weight 5:2:1.
#[inline]
pub fn mix5_2_1(a: u32, b: u32, c: u32) -> u32 {
    ((((a & RB_MASK) * 5 + (b & RB_MASK) * 2 + (c & RB_MASK)) >> 3) & RB_MASK)
        | ((((a & G_MASK) * 5 + (b & G_MASK) * 2 + (c & G_MASK)) >> 3) & G_MASK)
}

/// Weight 6:1:1.
#[inline]
pub fn mix6_1_1(a: u32, b: u32, c: u32) -> u32 {
    ((((a & RB_MASK) * 6 + (b & RB_MASK) + (c & RB_MASK)) >> 3) & RB_MASK)
        | ((((a & G_MASK) * 6 + (b & G_MASK) + (c & G_MASK)) >> 3) & G_MASK)
}

/// Weight 5:3.
#[inline]
pub fn mix5_3(a: u32, b: u32) -> u32 {
    ((((a & RB_MASK) * 5 + (b & RB_MASK) * 3) >> 3) & RB_MASK)
        | ((((a & G_MASK) * 5 + (b & G_MASK) * 3) >> 3) & G_MASK)
}

/// Weight 2:3:3.
#[inline]
pub fn mix2_3_3(a: u32, b: u32, c: u32) -> u32 {
    ((((a & RB_MASK) * 2 + (b & RB_MASK) * 3 + (c & RB_MASK) * 3) >> 3) & RB_MASK)
        | ((((a & G_MASK) * 2 + (b & G_MASK) * 3 + (c & G_MASK) * 3) >> 3) & G_MASK)
}

/// Weight 14:1:1.
#[inline]
pub fn mix14_1_1(a: u32, b: u32, c: u32) -> u32 {
    ((((a & RB_MASK) * 14 + (b & RB_MASK) + (c & RB_MASK)) >> 4) & RB_MASK)
        | ((((a & G_MASK) * 14 + (b & G_MASK) + (c & G_MASK)) >> 4) & G_MASK)
}
