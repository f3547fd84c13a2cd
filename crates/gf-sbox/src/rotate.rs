//! Bit rotation within an 8-bit register.

/// Rotates `value` left by `shift` bits, wrapping bits past bit 7 into the low end.
///
/// # Panics
///
/// Panics if `shift` is outside `1..=7`. The formula shifts right by `8 - shift`,
/// which is not a rotation for those amounts; use [`checked_rotl8`] when the
/// shift comes from untrusted input.
#[inline]
pub fn rotl8(value: u8, shift: u32) -> u8 {
    assert!(
        (1..8).contains(&shift),
        "rotation shift must be in 1..=7, got {shift}"
    );
    let wide = u16::from(value);
    (((wide << shift) & 0xff) | (wide >> (8 - shift))) as u8
}

/// Rotates `value` left by `shift` bits, returning `None` when `shift` is not in `1..=7`.
#[inline]
pub fn checked_rotl8(value: u8, shift: u32) -> Option<u8> {
    (1..8).contains(&shift).then(|| rotl8(value, shift))
}
