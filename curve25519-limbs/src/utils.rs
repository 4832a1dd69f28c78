// -*- mode: rust; -*-
//
// This file is part of curve25519-limbs.
// See LICENSE for licensing information.

//! Miscellaneous common utility functions.

/// Convert an array of (at least) eight bytes into a u64.
#[inline]
#[rustfmt::skip]
pub fn load8(input: &[u8]) -> u64 {
       (input[0] as u64)
    | ((input[1] as u64) << 8)
    | ((input[2] as u64) << 16)
    | ((input[3] as u64) << 24)
    | ((input[4] as u64) << 32)
    | ((input[5] as u64) << 40)
    | ((input[6] as u64) << 48)
    | ((input[7] as u64) << 56)
}
