#![no_main]
#[macro_use] extern crate libfuzzer_sys;
extern crate curve25519_limbs;

use curve25519_limbs::constants::modulus;
use curve25519_limbs::{normalize, reduce_canonical, LimbSet};

/// Check that normalizing six arbitrary 64-bit limbs keeps the value
/// modulo p, and that reducing the result gives the least residue.
fuzz_target!(|data: &[u8]| {
    if data.len() != 48 {
        return;
    }
    let mut limbs = [0u64; 6];
    for (limb, chunk) in limbs.iter_mut().zip(data.chunks_exact(8)) {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(chunk);
        *limb = u64::from_le_bytes(bytes);
    }
    let x = LimbSet::transient(limbs);
    let m = modulus();
    let p = m.value();

    let y = normalize(&x, &m).unwrap();
    assert!(y.is_canonical());
    assert_eq!(y.value() % &p, x.value() % &p);

    let r = reduce_canonical(&x, &m).unwrap();
    assert_eq!(r.value(), x.value() % &p);
    assert_eq!(normalize(&y, &m).unwrap(), y);
});
