//! Demonstrates generating the Rijndael S-box and checking a few entries.

use gf_sbox::{generate, AES_CONSTANT, AES_MODULUS};

fn main() {
    let pair = generate(AES_MODULUS, AES_CONSTANT).expect("the AES modulus is irreducible");

    assert_eq!(pair.substitute(0x00), 0x63);
    assert_eq!(pair.substitute(0x01), 0x7c);
    assert_eq!(pair.substitute(0xff), 0x16);
    for x in [0x00u8, 0x53, 0xff] {
        assert_eq!(pair.invert(pair.substitute(x)), x);
    }

    println!("example succeeded; s-box matches FIPS-197");
}
