//! Strided output addressing.
//!
//! Element `k` of a strided view lives at `offset + k * stride`. Negative
//! strides walk the buffer backwards from `offset`.

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrideError {
    #[error("output index {index} out of bounds for buffer of length {len}")]
    OutOfBounds { index: isize, len: usize },
    #[error("output index overflows isize (offset {offset}, stride {stride})")]
    Overflow { offset: usize, stride: isize },
    #[error("zero stride aliases both output slots")]
    ZeroStride,
}

/// Index of element `k` in a strided view over a buffer of length `len`.
#[inline]
pub fn slot(len: usize, stride: isize, offset: usize, k: usize) -> Result<usize, StrideError> {
    let overflow = StrideError::Overflow { offset, stride };
    let base = isize::try_from(offset).map_err(|_| overflow)?;
    let step = isize::try_from(k)
        .ok()
        .and_then(|k| k.checked_mul(stride))
        .ok_or(overflow)?;
    let index = base.checked_add(step).ok_or(overflow)?;
    match usize::try_from(index) {
        Ok(i) if i < len => Ok(i),
        _ => Err(StrideError::OutOfBounds { index, len }),
    }
}

/// Indices of the two output slots, rejecting layouts where they alias.
#[inline]
pub(crate) fn pair(len: usize, stride: isize, offset: usize) -> Result<(usize, usize), StrideError> {
    let slots = if stride == 0 {
        Err(StrideError::ZeroStride)
    } else {
        slot(len, stride, offset, 0).and_then(|a| Ok((a, slot(len, stride, offset, 1)?)))
    };
    if let Err(err) = &slots {
        log::debug!("rejecting strided output (len {len}, stride {stride}, offset {offset}): {err}");
    }
    slots
}
