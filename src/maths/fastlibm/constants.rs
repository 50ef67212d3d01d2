//! binary64 layout constants.
//!
//! The high word of a double holds the sign bit, the 11 exponent bits and the
//! top 20 significand bits; the low word holds the remaining 32 significand
//! bits.

/// Positive infinity.
pub const PINF: f64 = f64::INFINITY;

/// Negative infinity.
pub const NINF: f64 = f64::NEG_INFINITY;

/// Exponent bias of binary64.
pub const FLOAT64_EXPONENT_BIAS: i32 = 1023;

/// Exponent field of the high word: `0 11111111111 00000000000000000000`.
pub const FLOAT64_HIGH_WORD_EXPONENT_MASK: u32 = 0x7ff0_0000;

/// Significand bits of the high word: `0 00000000000 11111111111111111111`.
pub const FLOAT64_HIGH_WORD_SIGNIFICAND_MASK: u32 = 0x000f_ffff;

/// Number of significand bits stored in the high word.
pub const FLOAT64_NUM_HIGH_WORD_SIGNIFICAND_BITS: u32 = 20;

pub const ALL_ONES: u32 = 0xffff_ffff;
