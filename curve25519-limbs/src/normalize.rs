// -*- mode: rust; -*-
//
// This file is part of curve25519-limbs.
// See LICENSE for licensing information.

//! Carry propagation and reduction modulo \\(p = 2\^{255} - c\\).
//!
//! Limb-wise arithmetic lets limbs grow past 51 bits.  [`normalize`] moves
//! the excess of every limb into the next one and folds whatever spills past
//! bit 255 back into the low limb through \\(2\^{255} \equiv c \pmod p\\)
//! (\\(c = 19\\) for Curve25519).  The result is a canonical limb set whose
//! value is below \\(2\^{255}\\) but not necessarily below \\(p\\);
//! [`reduce_canonical`] additionally subtracts \\(p\\) once when needed.

use tracing::{debug, trace};

use crate::errors::{LimbError, ShapeError};
use crate::limbs::{LimbSet, CANONICAL_LIMBS, LIMB_BITS, LOW_51_BIT_MASK, TRANSIENT_LIMBS};

/// The most carry passes [`normalize`] makes on any five- or six-limb input.
///
/// After the first pass the transient limb is below \\(2\^{65}\\), so the
/// first fold adds less than \\(2\^{116}\\) to the low limb.  The second pass
/// then carries at most one unit of \\(2\^{255}\\), whose fold cannot carry
/// out again: the third pass always ends with an empty transient limb.
pub const MAX_PASSES: usize = 3;

/// Read `c` off a modulus of the form \\(2\^{255} - c\\), `0 < c < 2^51`.
pub(crate) fn fold_constant(modulus: &LimbSet) -> Result<u64, ShapeError> {
    let limbs = modulus
        .check_five_limbs()
        .map_err(|_| ShapeError::UnsupportedModulus)?;

    let low = limbs[0];
    let high_limbs_full = limbs[1..].iter().all(|&l| l == LOW_51_BIT_MASK);
    if !high_limbs_full || low == 0 || low > LOW_51_BIT_MASK {
        debug!(?modulus, "modulus is not pseudo-Mersenne");
        return Err(ShapeError::UnsupportedModulus);
    }

    Ok((1u64 << LIMB_BITS) - low)
}

/// Propagate carries through `input` and fold the overflow past bit 255
/// until every limb fits in 51 bits.  Returns the limbs and the number of
/// passes it took.
fn carry_and_fold(input: &[u64], c: u64) -> ([u64; CANONICAL_LIMBS], usize) {
    let mask = u128::from(LOW_51_BIT_MASK);

    // Wide accumulators: the top limb may hold a full u64 plus the carry out
    // of limb 4, and c times that still fits in 128 bits.
    let mut acc = [0u128; TRANSIENT_LIMBS];
    for (a, &limb) in acc.iter_mut().zip(input) {
        *a = u128::from(limb);
    }

    let mut passes = 0;
    loop {
        passes += 1;
        for i in 0..CANONICAL_LIMBS {
            let overflow = acc[i] >> LIMB_BITS;
            acc[i] &= mask;
            acc[i + 1] += overflow;
        }

        let top = acc[TRANSIENT_LIMBS - 1];
        if top == 0 {
            break;
        }
        trace!(pass = passes, top = %top, "folding overflow past 2^255");
        acc[TRANSIENT_LIMBS - 1] = 0;
        acc[0] += top * u128::from(c);
    }
    debug_assert!(passes <= MAX_PASSES);

    (
        [
            acc[0] as u64,
            acc[1] as u64,
            acc[2] as u64,
            acc[3] as u64,
            acc[4] as u64,
        ],
        passes,
    )
}

/// Normalize `x` so that every limb fits in 51 bits, reducing modulo
/// `modulus` whenever the value overflows \\(2\^{255}\\).
///
/// `x` may be in canonical (5 limbs) or transient (6 limbs) form, with
/// limbs of any size.  The result is a new canonical limb set with
///
/// * `result.is_canonical()`,
/// * `result.value() ≡ x.value() (mod p)`,
/// * `result.value() < 2^255`.
///
/// Normalizing a canonical limb set returns it unchanged.
///
/// # Errors
///
/// [`ShapeError`] if `x` does not hold 5 or 6 limbs, or `modulus` is not a
/// five-limb constant of the form \\(2\^{255} - c\\) with \\(0 < c < 2\^{51}\\).
pub fn normalize(x: &LimbSet, modulus: &LimbSet) -> Result<LimbSet, LimbError> {
    x.check_field_shape().map_err(|e| {
        debug!(count = x.limb_count(), "cannot normalize");
        e
    })?;
    let c = fold_constant(modulus)?;

    let (limbs, passes) = carry_and_fold(x.limbs(), c);
    trace!(passes, "normalized limb set");
    Ok(LimbSet::canonical(limbs))
}

/// Reduce `x` to the unique canonical limb set whose value is the least
/// non-negative residue of `x.value()` modulo `modulus`.
///
/// # Errors
///
/// Same as [`normalize`].
pub fn reduce_canonical(x: &LimbSet, modulus: &LimbSet) -> Result<LimbSet, LimbError> {
    x.check_field_shape()?;
    let c = fold_constant(modulus)?;

    // This reduces to the range [0,2^255), but we need [0,2^255-c).
    let (mut limbs, _) = carry_and_fold(x.limbs(), c);

    // Let h = limbs[0] + limbs[1]*2^51 + ... + limbs[4]*2^204.
    //
    // Write h = pq + r with 0 <= r < p.  We want to compute r = h mod p.
    //
    // Since h < 2^255, q = 0 or 1, with q = 0 when h < p and q = 1 when h >= p.
    //
    // Notice that h >= p <==> h + c >= p + c <==> h + c >= 2^255.
    // Therefore q can be computed as the carry bit of h + c.
    let mut q = (limbs[0] + c) >> LIMB_BITS;
    q = (limbs[1] + q) >> LIMB_BITS;
    q = (limbs[2] + q) >> LIMB_BITS;
    q = (limbs[3] + q) >> LIMB_BITS;
    q = (limbs[4] + q) >> LIMB_BITS;

    // Now we can compute r as r = h - pq = r - (2^255-c)q = r + cq - 2^255q
    limbs[0] += c * q;

    // Now carry the result to compute r + cq ...
    limbs[1] += limbs[0] >> LIMB_BITS;
    limbs[0] &= LOW_51_BIT_MASK;
    limbs[2] += limbs[1] >> LIMB_BITS;
    limbs[1] &= LOW_51_BIT_MASK;
    limbs[3] += limbs[2] >> LIMB_BITS;
    limbs[2] &= LOW_51_BIT_MASK;
    limbs[4] += limbs[3] >> LIMB_BITS;
    limbs[3] &= LOW_51_BIT_MASK;
    // ... but instead of carrying (limbs[4] >> 51) = 2^255q
    // into another limb, discard it, subtracting the value
    limbs[4] &= LOW_51_BIT_MASK;

    Ok(LimbSet::canonical(limbs))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::constants::{modulus, two_modulus, MODULUS_LIMBS};
    use num_bigint::BigUint;
    use num_traits::One;

    fn p() -> BigUint {
        (BigUint::one() << 255u32) - 19u32
    }

    #[test]
    fn fold_constant_of_p_is_19() {
        assert_eq!(fold_constant(&modulus()), Ok(19));
        assert_eq!(fold_constant(&LimbSet::canonical([LOW_51_BIT_MASK; 5])), Ok(1));
    }

    #[test]
    fn non_pseudo_mersenne_moduli_are_rejected() {
        for m in [
            LimbSet::ONE,
            LimbSet::ZERO,
            two_modulus(),
            LimbSet::canonical([0, LOW_51_BIT_MASK, LOW_51_BIT_MASK, LOW_51_BIT_MASK, LOW_51_BIT_MASK]),
            LimbSet::canonical([1 << 51, LOW_51_BIT_MASK, LOW_51_BIT_MASK, LOW_51_BIT_MASK, LOW_51_BIT_MASK]),
        ] {
            assert_eq!(
                normalize(&LimbSet::ONE, &m),
                Err(LimbError::Shape(ShapeError::UnsupportedModulus))
            );
        }
    }

    #[test]
    fn unsupported_limb_counts_are_rejected() {
        let x = LimbSet::new(&[1, 2, 3, 4], &[51; 4]).unwrap();
        assert_eq!(
            normalize(&x, &modulus()),
            Err(LimbError::Shape(ShapeError::UnsupportedLimbCount(4)))
        );
        assert_eq!(
            reduce_canonical(&x, &modulus()),
            Err(LimbError::Shape(ShapeError::UnsupportedLimbCount(4)))
        );
    }

    #[test]
    fn canonical_input_is_unchanged() {
        let x = LimbSet::canonical([1, 2, 3, 4, 5]);
        assert_eq!(normalize(&x, &modulus()).unwrap(), x);
        assert_eq!(normalize(&modulus(), &modulus()).unwrap(), modulus());
    }

    #[test]
    fn carries_move_up_one_limb() {
        let x = LimbSet::canonical([1 << 51, (1 << 52) + 3, 0, 0, 0]);
        let y = normalize(&x, &modulus()).unwrap();
        assert_eq!(y.limbs(), &[0, 4, 2, 0, 0]);
    }

    #[test]
    fn transient_two_p_folds_to_p() {
        let y = normalize(&two_modulus(), &modulus()).unwrap();
        assert_eq!(y.limbs(), &MODULUS_LIMBS);
        assert_eq!(reduce_canonical(&two_modulus(), &modulus()).unwrap(), LimbSet::ZERO);
    }

    #[test]
    fn reference_52_bit_top_limb_folds_to_p() {
        let x = LimbSet::canonical([
            0x7FFFFFFFFFFDA,
            0x7FFFFFFFFFFFF,
            0x7FFFFFFFFFFFF,
            0x7FFFFFFFFFFFF,
            0xFFFFFFFFFFFFF,
        ]);
        let y = normalize(&x, &modulus()).unwrap();
        assert!(y.is_canonical());
        assert_eq!(y, modulus());
    }

    #[test]
    fn widest_input_terminates_within_bound() {
        let x = LimbSet::transient([u64::MAX; 6]);
        let (limbs, passes) = carry_and_fold(x.limbs(), 19);
        assert!(passes <= MAX_PASSES);

        let y = LimbSet::canonical(limbs);
        assert!(y.is_canonical());
        assert_eq!(y.value() % p(), x.value() % p());
        assert_eq!(normalize(&x, &modulus()).unwrap(), y);
    }

    #[test]
    fn single_top_unit_takes_two_passes() {
        let x = LimbSet::transient([0, 0, 0, 0, 0, 1]);
        let (limbs, passes) = carry_and_fold(x.limbs(), 19);
        assert_eq!(passes, 2);
        assert_eq!(limbs, [19, 0, 0, 0, 0]);
    }

    #[test]
    fn normalize_is_idempotent() {
        let x = LimbSet::transient([u64::MAX, 7, u64::MAX >> 3, 0, 1 << 60, 12345]);
        let once = normalize(&x, &modulus()).unwrap();
        let twice = normalize(&once, &modulus()).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn reduce_canonical_subtracts_p_once() {
        let p_plus_one = LimbSet::canonical([
            0x7FFFFFFFFFFEE,
            0x7FFFFFFFFFFFF,
            0x7FFFFFFFFFFFF,
            0x7FFFFFFFFFFFF,
            0x7FFFFFFFFFFFF,
        ]);
        assert_eq!(reduce_canonical(&p_plus_one, &modulus()).unwrap(), LimbSet::ONE);

        // 2^255 - 1 = p + 18.
        let top = LimbSet::canonical([LOW_51_BIT_MASK; 5]);
        let r = reduce_canonical(&top, &modulus()).unwrap();
        assert_eq!(r.limbs(), &[18, 0, 0, 0, 0]);

        assert_eq!(reduce_canonical(&modulus(), &modulus()).unwrap(), LimbSet::ZERO);

        let below = LimbSet::canonical([0x7FFFFFFFFFFEC, 0x7FFFFFFFFFFFF, 0x7FFFFFFFFFFFF, 0x7FFFFFFFFFFFF, 0x7FFFFFFFFFFFF]);
        assert_eq!(reduce_canonical(&below, &modulus()).unwrap(), below);
    }

    #[test]
    fn reduce_canonical_matches_bigint_remainder() {
        let x = LimbSet::transient([u64::MAX; 6]);
        let r = reduce_canonical(&x, &modulus()).unwrap();
        assert_eq!(r.value(), x.value() % p());
        assert!(r.value() < p());
    }

    #[test]
    fn other_pseudo_mersenne_modulus() {
        // 2^255 - 1
        let m = LimbSet::canonical([LOW_51_BIT_MASK; 5]);
        let m_value = m.value();
        let x = LimbSet::transient([u64::MAX, 0, u64::MAX, 0, u64::MAX, u64::MAX]);
        let y = normalize(&x, &m).unwrap();
        assert!(y.is_canonical());
        assert_eq!(y.value() % &m_value, x.value() % &m_value);
        assert_eq!(reduce_canonical(&x, &m).unwrap().value(), x.value() % &m_value);
    }
}
