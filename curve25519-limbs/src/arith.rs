// -*- mode: rust; -*-
//
// This file is part of curve25519-limbs.
// See LICENSE for licensing information.

//! Limb-wise addition and subtraction.
//!
//! These never carry: the outputs are five-limb sets whose limbs may exceed
//! 51 bits, exactly the kind of input [`normalize`] exists for.

use crate::constants::{modulus, TWO_MODULUS_BIAS};
use crate::errors::{LimbError, RangeError};
use crate::limbs::{LimbSet, CANONICAL_LIMBS};
use crate::normalize::normalize;

/// Limb-wise sum of two five-limb sets.  The value of the result is exactly
/// `a.value() + b.value()`.
///
/// # Errors
///
/// * [`ShapeError`](crate::errors::ShapeError) unless both sides hold five
///   limbs.
/// * [`RangeError::LimbOverflow`] if a limb sum does not fit in 64 bits.
pub fn add(a: &LimbSet, b: &LimbSet) -> Result<LimbSet, LimbError> {
    let a = a.check_five_limbs()?;
    let b = b.check_five_limbs()?;

    let mut output = [0u64; CANONICAL_LIMBS];
    for (index, out) in output.iter_mut().enumerate() {
        *out = a[index]
            .checked_add(b[index])
            .ok_or(RangeError::LimbOverflow { index })?;
    }
    Ok(LimbSet::canonical(output))
}

/// Limb-wise difference \\(a + 2p - b\\), congruent to \\(a - b\\) modulo
/// \\(p\\).
///
/// `b` is normalized first, so every limb of the \\(2p\\) bias dominates the
/// matching limb of `b` and no limb can underflow.
///
/// # Errors
///
/// Same as [`add`].
pub fn sub(a: &LimbSet, b: &LimbSet) -> Result<LimbSet, LimbError> {
    let a = a.check_five_limbs()?;
    b.check_five_limbs()?;
    let b = normalize(b, &modulus())?;
    let b = b.limbs();

    let mut output = [0u64; CANONICAL_LIMBS];
    for (index, out) in output.iter_mut().enumerate() {
        let biased = a[index]
            .checked_add(TWO_MODULUS_BIAS[index])
            .ok_or(RangeError::LimbOverflow { index })?;
        *out = biased - b[index];
    }
    Ok(LimbSet::canonical(output))
}

/// Limb-wise negation, \\(2p - a\\).
pub fn negate(a: &LimbSet) -> Result<LimbSet, LimbError> {
    sub(&LimbSet::ZERO, a)
}
