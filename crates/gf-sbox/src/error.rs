//! Error type shared by field validation and table generation.

use thiserror::Error;

/// Failures detected while validating a modulus or building an S-box.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum SboxError {
    /// The modulus does not encode a degree-8 polynomial (bit 8 set, nothing above it).
    #[error("modulus {modulus:#05x} is not a degree-8 polynomial")]
    NotDegreeEight {
        /// Rejected modulus.
        modulus: u16,
    },
    /// Some nonzero element has no multiplicative inverse, so the modulus is reducible.
    #[error("modulus {modulus:#05x} is reducible: {element:#04x} has no inverse")]
    Reducible {
        /// Rejected modulus.
        modulus: u16,
        /// First element found without an inverse.
        element: u8,
    },
    /// Two inputs mapped to the same output byte.
    #[error("inputs {first:#04x} and {second:#04x} both map to {output:#04x}")]
    DuplicateOutput {
        /// Output byte written twice.
        output: u8,
        /// Input that claimed the slot first.
        first: u8,
        /// Input that collided with it.
        second: u8,
    },
    /// The inverse table does not undo the forward table.
    #[error("inverse table maps {output:#04x} to {found:#04x}, expected {input:#04x}")]
    RoundTripMismatch {
        /// Forward input.
        input: u8,
        /// Forward output.
        output: u8,
        /// Value stored at `inverse[output]`.
        found: u8,
    },
}
