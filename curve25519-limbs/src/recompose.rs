// -*- mode: rust; -*-
//
// This file is part of curve25519-limbs.
// See LICENSE for licensing information.

//! Recombination of limbs into an integer.

use num_bigint::BigUint;

use crate::errors::LimbError;
use crate::limbs::LimbSet;

/// Compute \\(\sum\_i \mathrm{limbs}[i] \cdot 2\^{51 i}\\) for a canonical or
/// transient limb set.
///
/// This is the inverse of [`decompose`](crate::decompose::decompose) and the
/// oracle the round-trip checks compare against; it does not look at the
/// width bounds, so it also recombines unnormalized limb sets.
///
/// # Errors
///
/// [`ShapeError::UnsupportedLimbCount`](crate::errors::ShapeError) if `x`
/// does not hold 5 or 6 limbs.
pub fn recompose(x: &LimbSet) -> Result<BigUint, LimbError> {
    x.check_field_shape()?;
    Ok(x.value())
}
