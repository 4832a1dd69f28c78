// -*- mode: rust; -*-
//
// This file is part of curve25519-limbs.
// See LICENSE for licensing information.

//! Positional decomposition of an integer into radix-\\(2\^{51}\\) limbs.

use num_bigint::BigUint;
use tracing::debug;

use crate::errors::{LimbError, RangeError, ShapeError};
use crate::limbs::{
    check_schedule, LimbSet, CANONICAL_LIMBS, CANONICAL_WIDTHS, LIMB_BITS, TRANSIENT_LIMBS,
};

/// Split `n` into limbs under the width schedule `widths`.
///
/// Limb \\(i\\) is `(n >> 51 i) & (2^widths[i] - 1)`.  Extraction by shift
/// and mask bounds every limb on its own, so the result always validates
/// and no carry correction is needed.
///
/// # Errors
///
/// * [`ShapeError`] if the schedule does not hold 5 or 6 widths, or a width
///   is invalid (see [`LimbSet::new`]).
/// * [`RangeError::TooWide`] if \\(n \geq 2\^{\sum \mathrm{widths}}\\).
pub fn decompose(n: &BigUint, widths: &[u32]) -> Result<LimbSet, LimbError> {
    if widths.len() != CANONICAL_LIMBS && widths.len() != TRANSIENT_LIMBS {
        debug!(count = widths.len(), "rejecting width schedule");
        return Err(ShapeError::UnsupportedLimbCount(widths.len()).into());
    }
    check_schedule(widths)?;

    let capacity: u64 = widths.iter().map(|&w| u64::from(w)).sum();
    let bits = n.bits();
    if bits > capacity {
        debug!(bits, capacity, "integer does not fit the width schedule");
        return Err(RangeError::TooWide { bits, capacity }.into());
    }

    let mut limbs = [0u64; TRANSIENT_LIMBS];
    for (i, (limb, &width)) in limbs.iter_mut().zip(widths).enumerate() {
        let shifted = n >> (LIMB_BITS as usize * i);
        let low = shifted.iter_u64_digits().next().unwrap_or(0);
        *limb = low & ((1u64 << width) - 1);
    }

    LimbSet::new(&limbs[..widths.len()], widths)
}

/// Split `n` into five 51-bit limbs.  Shorthand for
/// `decompose(n, &CANONICAL_WIDTHS)`.
pub fn decompose_canonical(n: &BigUint) -> Result<LimbSet, LimbError> {
    decompose(n, &CANONICAL_WIDTHS)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::limbs::{LOW_51_BIT_MASK, TRANSIENT_WIDTHS};
    use num_traits::{One, Zero};

    fn pow2(k: u32) -> BigUint {
        BigUint::one() << k
    }

    #[test]
    fn two_to_the_256_minus_38_in_six_limbs() {
        let n = pow2(256) - 38u32;
        let x = decompose(&n, &TRANSIENT_WIDTHS).unwrap();
        assert_eq!(
            x.limbs(),
            &[
                0x7FFFFFFFFFFDA,
                0x7FFFFFFFFFFFF,
                0x7FFFFFFFFFFFF,
                0x7FFFFFFFFFFFF,
                0x7FFFFFFFFFFFF,
                0x1
            ]
        );
        assert!(x.validate());
        assert_eq!(x.value(), n);
    }

    #[test]
    fn zero_is_all_zero_limbs() {
        for widths in [&CANONICAL_WIDTHS[..], &TRANSIENT_WIDTHS[..], &[51, 51, 51, 51, 3][..]] {
            let x = decompose(&BigUint::zero(), widths).unwrap();
            assert!(x.limbs().iter().all(|&l| l == 0));
            assert!(x.value().is_zero());
        }
    }

    #[test]
    fn two_to_the_255_minus_one_fills_every_limb() {
        let n = pow2(255) - 1u32;
        let x = decompose_canonical(&n).unwrap();
        assert!(x.validate());
        let top: BigUint = (&n >> 204u32) & BigUint::from(LOW_51_BIT_MASK);
        assert_eq!(BigUint::from(x.limbs()[4]), top);
        assert_eq!(x.limbs(), &[LOW_51_BIT_MASK; 5]);
    }

    #[test]
    fn modulus_decomposes_to_its_constant() {
        let p = pow2(255) - 19u32;
        let x = decompose_canonical(&p).unwrap();
        assert_eq!(x, crate::constants::modulus());
    }

    #[test]
    fn too_wide_is_a_range_error() {
        assert_eq!(
            decompose_canonical(&pow2(255)).unwrap_err(),
            LimbError::Range(RangeError::TooWide { bits: 256, capacity: 255 })
        );
        // Fits once the transient limb is available.
        assert!(decompose(&pow2(255), &TRANSIENT_WIDTHS).is_ok());
        assert_eq!(
            decompose(&pow2(306), &TRANSIENT_WIDTHS).unwrap_err(),
            LimbError::Range(RangeError::TooWide { bits: 307, capacity: 306 })
        );
    }

    #[test]
    fn narrow_top_width_bounds_the_range() {
        let widths = [51, 51, 51, 51, 8];
        let max = pow2(212) - 1u32;
        let x = decompose(&max, &widths).unwrap();
        assert_eq!(x.limbs()[4], 0xff);
        assert_eq!(x.value(), max);
        assert!(matches!(
            decompose(&pow2(212), &widths),
            Err(LimbError::Range(_))
        ));
    }

    #[test]
    fn unsupported_schedules_are_shape_errors() {
        assert_eq!(
            decompose(&BigUint::one(), &[51; 4]).unwrap_err(),
            LimbError::Shape(ShapeError::UnsupportedLimbCount(4))
        );
        assert_eq!(
            decompose(&BigUint::one(), &[51; 7]).unwrap_err(),
            LimbError::Shape(ShapeError::UnsupportedLimbCount(7))
        );
        assert_eq!(
            decompose(&BigUint::one(), &[51, 51, 51, 40, 51]).unwrap_err(),
            LimbError::Shape(ShapeError::InvalidWidth { index: 3, width: 40 })
        );
    }
}
