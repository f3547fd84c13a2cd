//! Substitution boxes over GF(2^8) for an arbitrary modulus polynomial.
//!
//! This crate builds an S-box and its inverse the way Rijndael does:
//! - Multiplication and brute-force inversion in GF(2^8).
//! - The affine step `x ^ rotl(x, 1) ^ rotl(x, 2) ^ rotl(x, 3) ^ rotl(x, 4)`.
//! - An additive constant XORed into every entry.
//!
//! The implementation aims for clarity and exactness rather than speed; it is
//! not constant-time.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod error;
mod field;
mod rotate;
mod sbox;

pub use crate::error::SboxError;
pub use crate::field::{
    gf_inverse, gf_mul, gf_pow, validate_modulus, AES_MODULUS, DEFAULT_MODULUS,
};
pub use crate::rotate::{checked_rotl8, rotl8};
pub use crate::sbox::{affine, generate, generate_unchecked, SboxPair, AES_CONSTANT};
