#![no_main]
#[macro_use] extern crate libfuzzer_sys;
extern crate curve25519_limbs;
extern crate num_bigint;

use curve25519_limbs::constants::modulus;
use curve25519_limbs::encoding::{from_bytes, to_bytes};
use num_bigint::BigUint;

/// Check that decoding 32 bytes and encoding them again yields the least
/// residue of the low 255 bits.
fuzz_target!(|data: &[u8]| {
    if data.len() != 32 {
        return;
    }
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(data);

    let encoded = to_bytes(&from_bytes(&bytes)).unwrap();

    bytes[31] &= 0x7f;
    let expected = BigUint::from_bytes_le(&bytes) % modulus().value();
    assert_eq!(BigUint::from_bytes_le(&encoded), expected);
});
