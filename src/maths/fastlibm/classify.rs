use super::f64_to_bits;

#[inline(always)]
pub fn isnan(x: f64) -> bool {
    let u = f64_to_bits(x);
    (u & 0x7ff0_0000_0000_0000u64) == 0x7ff0_0000_0000_0000u64
        && (u & 0x000f_ffff_ffff_ffffu64) != 0
}

#[inline(always)]
pub fn signbit(x: f64) -> bool {
    (f64_to_bits(x) >> 63) != 0
}

#[inline(always)]
pub fn is_positive_zero(x: f64) -> bool {
    f64_to_bits(x) == 0
}

#[inline(always)]
pub fn is_negative_zero(x: f64) -> bool {
    f64_to_bits(x) == 0x8000_0000_0000_0000u64
}
