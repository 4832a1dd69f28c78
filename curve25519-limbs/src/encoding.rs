// -*- mode: rust; -*-
//
// This file is part of curve25519-limbs.
// See LICENSE for licensing information.

//! The 32-byte little-endian encoding of field elements.

use crate::constants::modulus;
use crate::errors::LimbError;
use crate::limbs::{LimbSet, LOW_51_BIT_MASK};
use crate::normalize::reduce_canonical;
use crate::utils::load8;

/// Load a canonical limb set from the low 255 bits of a 256-bit input.
///
/// # Warning
///
/// This function does not check that the input used the canonical
/// representative.  It masks the high bit, but it will happily decode
/// 2^255 - 18 to limbs worth 2^255 - 18, which is 1 modulo p.  Applications
/// that require a canonical encoding of every field element should decode,
/// re-encode with [`to_bytes`], and check that the input was canonical.
#[rustfmt::skip]
pub fn from_bytes(bytes: &[u8; 32]) -> LimbSet {
    LimbSet::canonical(
        // load bits [  0, 64), no shift
        [  load8(&bytes[ 0..])        & LOW_51_BIT_MASK
        // load bits [ 48,112), shift to [ 51,112)
        , (load8(&bytes[ 6..]) >>  3) & LOW_51_BIT_MASK
        // load bits [ 96,160), shift to [102,160)
        , (load8(&bytes[12..]) >>  6) & LOW_51_BIT_MASK
        // load bits [152,216), shift to [153,216)
        , (load8(&bytes[19..]) >>  1) & LOW_51_BIT_MASK
        // load bits [192,256), shift to [204,255)
        , (load8(&bytes[24..]) >> 12) & LOW_51_BIT_MASK
        ])
}

/// Serialize a five- or six-limb set to 32 bytes.  The value is fully
/// reduced modulo p first, so the encoding is canonical.
#[rustfmt::skip]
pub fn to_bytes(x: &LimbSet) -> Result<[u8; 32], LimbError> {
    let reduced = reduce_canonical(x, &modulus())?;
    let limbs = reduced.limbs();

    // Now arrange the bits of the limbs.
    let mut s = [0u8; 32];
    s[ 0] =   limbs[0]                           as u8;
    s[ 1] =  (limbs[0] >>  8)                    as u8;
    s[ 2] =  (limbs[0] >> 16)                    as u8;
    s[ 3] =  (limbs[0] >> 24)                    as u8;
    s[ 4] =  (limbs[0] >> 32)                    as u8;
    s[ 5] =  (limbs[0] >> 40)                    as u8;
    s[ 6] = ((limbs[0] >> 48) | (limbs[1] << 3)) as u8;
    s[ 7] =  (limbs[1] >>  5)                    as u8;
    s[ 8] =  (limbs[1] >> 13)                    as u8;
    s[ 9] =  (limbs[1] >> 21)                    as u8;
    s[10] =  (limbs[1] >> 29)                    as u8;
    s[11] =  (limbs[1] >> 37)                    as u8;
    s[12] = ((limbs[1] >> 45) | (limbs[2] << 6)) as u8;
    s[13] =  (limbs[2] >>  2)                    as u8;
    s[14] =  (limbs[2] >> 10)                    as u8;
    s[15] =  (limbs[2] >> 18)                    as u8;
    s[16] =  (limbs[2] >> 26)                    as u8;
    s[17] =  (limbs[2] >> 34)                    as u8;
    s[18] =  (limbs[2] >> 42)                    as u8;
    s[19] = ((limbs[2] >> 50) | (limbs[3] << 1)) as u8;
    s[20] =  (limbs[3] >>  7)                    as u8;
    s[21] =  (limbs[3] >> 15)                    as u8;
    s[22] =  (limbs[3] >> 23)                    as u8;
    s[23] =  (limbs[3] >> 31)                    as u8;
    s[24] =  (limbs[3] >> 39)                    as u8;
    s[25] = ((limbs[3] >> 47) | (limbs[4] << 4)) as u8;
    s[26] =  (limbs[4] >>  4)                    as u8;
    s[27] =  (limbs[4] >> 12)                    as u8;
    s[28] =  (limbs[4] >> 20)                    as u8;
    s[29] =  (limbs[4] >> 28)                    as u8;
    s[30] =  (limbs[4] >> 36)                    as u8;
    s[31] =  (limbs[4] >> 44)                    as u8;

    // High bit should be zero.
    debug_assert!((s[31] & 0b1000_0000u8) == 0u8);

    Ok(s)
}
