//! High/low word views of a double.

use super::{hi_word, lo_word, stride, with_hi_lo};

/// Splits `x` into its high and low 32-bit words.
#[inline(always)]
pub fn to_words(x: f64) -> (u32, u32) {
    (hi_word(x), lo_word(x))
}

/// Writes the high word to `out[offset]` and the low word to
/// `out[offset + stride]`.
///
/// # Panics
///
/// Panics if either slot falls outside `out` or `stride` is zero.
#[inline(always)]
pub fn to_words_assign(x: f64, out: &mut [u32], stride: isize, offset: usize) -> &mut [u32] {
    let (hi_slot, lo_slot) = match stride::pair(out.len(), stride, offset) {
        Ok(slots) => slots,
        Err(err) => panic!("{err}"),
    };
    out[hi_slot] = hi_word(x);
    out[lo_slot] = lo_word(x);
    out
}

/// Reassembles a double from its high and low words.
#[inline(always)]
pub fn from_words(high: u32, low: u32) -> f64 {
    with_hi_lo(high, low)
}
