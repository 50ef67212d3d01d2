//! Integral/fractional decomposition.
//!
//! The integral part is produced by clearing the significand bits that sit
//! below the binary point, so it is always exact and `x - integral` is exact
//! too. Negative inputs are decomposed through `-x`, which gives both parts
//! the sign of `x` (signed zeros included).

use super::constants::{
    ALL_ONES, FLOAT64_EXPONENT_BIAS, FLOAT64_HIGH_WORD_EXPONENT_MASK,
    FLOAT64_HIGH_WORD_SIGNIFICAND_MASK, FLOAT64_NUM_HIGH_WORD_SIGNIFICAND_BITS, PINF,
};
use super::stride::{self, StrideError};
use super::{classify::isnan, words};

/// Returns `(integral, fractional)`, both carrying the sign of `x`.
#[inline(always)]
pub fn modf(x: f64) -> (f64, f64) {
    if x < 1.0 {
        if x < 0.0 {
            let (int, frac) = modf(-x);
            return (-int, -frac);
        }
        if x == 0.0 {
            // +-0 -> (+-0, +-0)
            return (x, x);
        }
        return (0.0, x);
    }
    if isnan(x) {
        return (f64::NAN, f64::NAN);
    }
    if x == PINF {
        return (PINF, 0.0);
    }

    let mut ws = [0u32; 2];
    words::to_words_assign(x, &mut ws, 1, 0);
    let [mut high, mut low] = ws;

    let exp = ((high & FLOAT64_HIGH_WORD_EXPONENT_MASK) >> FLOAT64_NUM_HIGH_WORD_SIGNIFICAND_BITS)
        as i32
        - FLOAT64_EXPONENT_BIAS;

    // |x| < 2^20: every fractional bit of the high word is below bit 20 - exp.
    if exp < FLOAT64_NUM_HIGH_WORD_SIGNIFICAND_BITS as i32 {
        let i = FLOAT64_HIGH_WORD_SIGNIFICAND_MASK >> exp as u32;
        if ((high & i) | low) == 0 {
            return (x, 0.0);
        }
        high &= !i;
        let int = words::from_words(high, 0);
        return (int, x - int);
    }

    if exp > 51 {
        return (x, 0.0);
    }

    let i = ALL_ONES >> (exp as u32 - FLOAT64_NUM_HIGH_WORD_SIGNIFICAND_BITS);
    if (low & i) == 0 {
        return (x, 0.0);
    }
    low &= !i;
    let int = words::from_words(high, low);
    (int, x - int)
}

/// Writes the integral part to `out[offset]` and the fractional part to
/// `out[offset + stride]`, returning `out`.
///
/// # Panics
///
/// Panics if either slot falls outside `out` or `stride` is zero.
#[inline(always)]
pub fn modf_assign(x: f64, out: &mut [f64], stride: isize, offset: usize) -> &mut [f64] {
    match try_modf_assign(x, out, stride, offset) {
        Ok(out) => out,
        Err(err) => panic!("{err}"),
    }
}

/// Fallible form of [`modf_assign`]. `out` is left untouched on error.
#[inline]
pub fn try_modf_assign(
    x: f64,
    out: &mut [f64],
    stride: isize,
    offset: usize,
) -> Result<&mut [f64], StrideError> {
    let (int_slot, frac_slot) = stride::pair(out.len(), stride, offset)?;
    let (int, frac) = modf(x);
    out[int_slot] = int;
    out[frac_slot] = frac;
    Ok(out)
}

#[inline(always)]
pub fn modf_into(x: f64, integral: &mut f64, fractional: &mut f64) {
    (*integral, *fractional) = modf(x);
}
