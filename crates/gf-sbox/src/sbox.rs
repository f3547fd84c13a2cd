//! S-box generation: field inversion followed by the AES-style affine step.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_big_array::BigArray;

use crate::error::SboxError;
use crate::field::{gf_inverse, validate_modulus};
use crate::rotate::rotl8;

/// Additive constant of the Rijndael S-box.
pub const AES_CONSTANT: u8 = 0x63;

/// A forward substitution table together with its inverse.
///
/// Built once per `(modulus, constant)` pair and never mutated. Pairs from
/// [`generate`] always satisfy `inverse[forward[i]] == i`; pairs from
/// [`generate_unchecked`] or [`SboxPair::from_bytes`] should be checked with
/// [`SboxPair::verify`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SboxPair {
    #[serde(with = "BigArray")]
    forward: [u8; 256],
    #[serde(with = "BigArray")]
    inverse: [u8; 256],
    modulus: u16,
    constant: u8,
}

impl SboxPair {
    /// The forward table, indexed by input byte.
    pub fn forward(&self) -> &[u8; 256] {
        &self.forward
    }

    /// The inverse table, indexed by output byte.
    pub fn inverse(&self) -> &[u8; 256] {
        &self.inverse
    }

    /// Modulus polynomial the tables were built with.
    pub fn modulus(&self) -> u16 {
        self.modulus
    }

    /// Additive constant the tables were built with.
    pub fn constant(&self) -> u8 {
        self.constant
    }

    /// Looks up `input` in the forward table.
    #[inline]
    pub fn substitute(&self, input: u8) -> u8 {
        self.forward[input as usize]
    }

    /// Looks up `output` in the inverse table.
    #[inline]
    pub fn invert(&self, output: u8) -> u8 {
        self.inverse[output as usize]
    }

    /// Checks that the inverse table undoes the forward table for every byte.
    pub fn verify(&self) -> Result<(), SboxError> {
        for input in 0..=255u8 {
            let output = self.substitute(input);
            let found = self.invert(output);
            if found != input {
                return Err(SboxError::RoundTripMismatch {
                    input,
                    output,
                    found,
                });
            }
        }
        Ok(())
    }

    /// Serializes the pair with `bincode`.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Deserializes a pair with `bincode`. The tables are not verified.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}

/// XORs `value` with its left rotations by one through four bits.
#[inline]
pub fn affine(value: u8) -> u8 {
    value ^ rotl8(value, 1) ^ rotl8(value, 2) ^ rotl8(value, 3) ^ rotl8(value, 4)
}

fn sbox_entry(input: u8, modulus: u16, constant: u8) -> u8 {
    match gf_inverse(input, modulus) {
        Some(inv) => affine(inv) ^ constant,
        // zero, or no inverse under a reducible modulus
        None => constant,
    }
}

/// Builds the S-box and its inverse after checking that `modulus` defines GF(2^8).
///
/// Every write into the inverse table is tracked, so a collision is reported
/// instead of silently overwriting an earlier entry.
pub fn generate(modulus: u16, constant: u8) -> Result<SboxPair, SboxError> {
    validate_modulus(modulus)?;
    debug!("generating s-box for modulus {modulus:#05x}, constant {constant:#04x}");
    let pair = fill(modulus, constant)?;
    debug!("s-box for modulus {modulus:#05x} complete");
    Ok(pair)
}

/// Builds the S-box and its inverse without validating `modulus`.
///
/// For a reducible modulus the forward table contains duplicates, later inputs
/// overwrite earlier ones in the inverse table, and untouched inverse slots stay
/// zero. The result is returned as-is; a warning is logged when it does not
/// round-trip.
pub fn generate_unchecked(modulus: u16, constant: u8) -> SboxPair {
    let mut forward = [0u8; 256];
    let mut inverse = [0u8; 256];
    for input in 0..=255u8 {
        let output = sbox_entry(input, modulus, constant);
        forward[input as usize] = output;
        inverse[output as usize] = input;
    }
    let pair = SboxPair {
        forward,
        inverse,
        modulus,
        constant,
    };
    if let Err(err) = pair.verify() {
        warn!("s-box for modulus {modulus:#05x} is not a permutation: {err}");
    }
    pair
}

fn fill(modulus: u16, constant: u8) -> Result<SboxPair, SboxError> {
    let mut forward = [0u8; 256];
    let mut inverse = [0u8; 256];
    let mut claimed: [Option<u8>; 256] = [None; 256];
    for input in 0..=255u8 {
        let output = sbox_entry(input, modulus, constant);
        let slot = &mut claimed[output as usize];
        if let Some(first) = *slot {
            return Err(SboxError::DuplicateOutput {
                output,
                first,
                second: input,
            });
        }
        *slot = Some(input);
        forward[input as usize] = output;
        inverse[output as usize] = input;
    }
    Ok(SboxPair {
        forward,
        inverse,
        modulus,
        constant,
    })
}
