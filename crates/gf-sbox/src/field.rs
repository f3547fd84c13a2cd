//! Arithmetic in GF(2^8) under a caller-supplied modulus polynomial.
//!
//! The modulus is a 9-bit value with bit 8 set (for example `0x11b` for
//! `x^8 + x^4 + x^3 + x + 1`). Multiplication and inversion accept any `u16`
//! and never fail; [`validate_modulus`] is the only place the modulus is
//! checked for defining a field.

use crate::error::SboxError;

/// The Rijndael field polynomial `x^8 + x^4 + x^3 + x + 1`.
pub const AES_MODULUS: u16 = 0x11b;

/// The polynomial `x^8 + x^4 + x^3 + x^2 + 1`, used by the command-line defaults.
pub const DEFAULT_MODULUS: u16 = 0x11d;

/// Multiplies `a` and `b` in GF(2^8) reduced by `modulus`.
///
/// Carry-less shift-and-add over the eight bits of `b`, reducing `a` whenever a
/// shift carries into bit 8.
pub fn gf_mul(a: u8, b: u8, modulus: u16) -> u8 {
    let mut a = u16::from(a);
    let mut b = b;
    let mut product = 0u16;
    for _ in 0..8 {
        if b & 1 != 0 {
            product ^= a;
        }
        a <<= 1;
        if a & 0x100 != 0 {
            a ^= modulus;
        }
        b >>= 1;
    }
    (product & 0xff) as u8
}

/// Raises `base` to `exp` in GF(2^8) by square-and-multiply.
pub fn gf_pow(base: u8, exp: u32, modulus: u16) -> u8 {
    let mut result = 1u8;
    let mut square = base;
    let mut exp = exp;
    while exp != 0 {
        if exp & 1 != 0 {
            result = gf_mul(result, square, modulus);
        }
        square = gf_mul(square, square, modulus);
        exp >>= 1;
    }
    result
}

/// Finds the multiplicative inverse of `value` by exhaustive search.
///
/// Returns `None` for zero, and for any element without an inverse when
/// `modulus` is reducible.
pub fn gf_inverse(value: u8, modulus: u16) -> Option<u8> {
    if value == 0 {
        return None;
    }
    (1..=255u8).find(|&candidate| gf_mul(value, candidate, modulus) == 1)
}

/// Checks that `modulus` defines GF(2^8): degree exactly 8 and every nonzero
/// element invertible.
pub fn validate_modulus(modulus: u16) -> Result<(), SboxError> {
    if modulus & 0x100 == 0 || modulus > 0x1ff {
        return Err(SboxError::NotDegreeEight { modulus });
    }
    match (1..=255u8).find(|&element| gf_inverse(element, modulus).is_none()) {
        Some(element) => Err(SboxError::Reducible { modulus, element }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn mul_matches_fips_197_examples() {
        assert_eq!(gf_mul(0x57, 0x83, AES_MODULUS), 0xc1);
        assert_eq!(gf_mul(0x57, 0x13, AES_MODULUS), 0xfe);
        assert_eq!(gf_mul(0x57, 0x02, AES_MODULUS), 0xae);
        assert_eq!(gf_mul(0x80, 0x02, AES_MODULUS), 0x1b);
        assert_eq!(gf_mul(0x80, 0x02, DEFAULT_MODULUS), 0x1d);
    }

    #[test]
    fn zero_absorbs_and_one_is_identity() {
        for modulus in [AES_MODULUS, DEFAULT_MODULUS] {
            for x in 0..=255u8 {
                assert_eq!(gf_mul(x, 0, modulus), 0);
                assert_eq!(gf_mul(0, x, modulus), 0);
                assert_eq!(gf_mul(x, 1, modulus), x);
                assert_eq!(gf_mul(1, x, modulus), x);
            }
        }
    }

    #[test]
    fn mul_is_commutative() {
        for a in 0..=255u8 {
            for b in 0..=255u8 {
                assert_eq!(gf_mul(a, b, AES_MODULUS), gf_mul(b, a, AES_MODULUS));
            }
        }
    }

    #[test]
    fn mul_is_associative_and_distributive() {
        let mut rng = ChaCha20Rng::from_seed([21u8; 32]);
        for _ in 0..2048 {
            let (a, b, c): (u8, u8, u8) = (rng.gen(), rng.gen(), rng.gen());
            for modulus in [AES_MODULUS, DEFAULT_MODULUS] {
                let left = gf_mul(gf_mul(a, b, modulus), c, modulus);
                let right = gf_mul(a, gf_mul(b, c, modulus), modulus);
                assert_eq!(left, right);
                assert_eq!(
                    gf_mul(a, b ^ c, modulus),
                    gf_mul(a, b, modulus) ^ gf_mul(a, c, modulus)
                );
            }
        }
    }

    #[test]
    fn inverse_multiplies_to_one() {
        for modulus in [AES_MODULUS, DEFAULT_MODULUS] {
            for x in 1..=255u8 {
                let inv = gf_inverse(x, modulus).expect("valid field");
                assert_eq!(gf_mul(x, inv, modulus), 1);
            }
        }
    }

    #[test]
    fn inverse_matches_fermat_power() {
        for x in 1..=255u8 {
            assert_eq!(gf_inverse(x, AES_MODULUS), Some(gf_pow(x, 254, AES_MODULUS)));
        }
    }

    #[test]
    fn inverse_of_zero_is_none() {
        assert_eq!(gf_inverse(0, AES_MODULUS), None);
        assert_eq!(gf_inverse(0x53, AES_MODULUS), Some(0xca));
        assert_eq!(gf_inverse(1, 0x100), Some(1));
        assert_eq!(gf_inverse(2, 0x100), None);
    }

    #[test]
    fn pow_basics() {
        assert_eq!(gf_pow(0x57, 0, AES_MODULUS), 1);
        assert_eq!(gf_pow(0, 0, AES_MODULUS), 1);
        assert_eq!(gf_pow(0x57, 1, AES_MODULUS), 0x57);
        assert_eq!(gf_pow(0x03, 255, AES_MODULUS), 1);
        assert_eq!(gf_pow(0x02, 8, AES_MODULUS), 0x1b);
    }

    #[test]
    fn validate_accepts_irreducible_moduli() {
        assert_eq!(validate_modulus(AES_MODULUS), Ok(()));
        assert_eq!(validate_modulus(DEFAULT_MODULUS), Ok(()));
    }

    #[test]
    fn validate_rejects_wrong_degree() {
        assert_eq!(
            validate_modulus(0x1b),
            Err(SboxError::NotDegreeEight { modulus: 0x1b })
        );
        assert_eq!(
            validate_modulus(0x31b),
            Err(SboxError::NotDegreeEight { modulus: 0x31b })
        );
    }

    #[test]
    fn validate_reports_first_element_without_inverse() {
        assert_eq!(
            validate_modulus(0x100),
            Err(SboxError::Reducible {
                modulus: 0x100,
                element: 2
            })
        );
        assert_eq!(
            validate_modulus(0x101),
            Err(SboxError::Reducible {
                modulus: 0x101,
                element: 3
            })
        );
    }
}
