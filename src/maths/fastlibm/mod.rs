#![allow(clippy::unusual_byte_groupings)]

mod classify;
mod constants;
mod modf;
mod stride;
mod words;

pub use classify::{is_negative_zero, is_positive_zero, isnan, signbit};
pub use constants::{
    ALL_ONES, FLOAT64_EXPONENT_BIAS, FLOAT64_HIGH_WORD_EXPONENT_MASK,
    FLOAT64_HIGH_WORD_SIGNIFICAND_MASK, FLOAT64_NUM_HIGH_WORD_SIGNIFICAND_BITS, NINF, PINF,
};
pub use modf::{modf, modf_assign, modf_into, try_modf_assign};
pub use stride::{StrideError, slot};
pub use words::{from_words, to_words, to_words_assign};

// ========= bit helpers =========

#[inline(always)]
fn f64_from_bits(u: u64) -> f64 {
    f64::from_bits(u)
}
#[inline(always)]
fn f64_to_bits(x: f64) -> u64 {
    x.to_bits()
}

#[inline(always)]
fn hi_word(x: f64) -> u32 {
    (f64_to_bits(x) >> 32) as u32
}
#[inline(always)]
fn lo_word(x: f64) -> u32 {
    (f64_to_bits(x) & 0xffff_ffffu64) as u32
}
#[inline(always)]
fn with_hi_lo(hi: u32, lo: u32) -> f64 {
    f64_from_bits(((hi as u64) << 32) | (lo as u64))
}
