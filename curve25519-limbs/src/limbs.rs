// -*- mode: rust; -*-
//
// This file is part of curve25519-limbs.
// See LICENSE for licensing information.

//! Radix-\\(2\^{51}\\) limb sets.
//!
//! A [`LimbSet`] is a short sequence of `u64` limbs, least-significant
//! first, together with a bit-width bound for every limb.  Limb \\(i\\)
//! always sits at bit position \\(51 i\\), so the value of a limb set is
//! $$
//! \sum\_i \mathrm{limbs}[i] \cdot 2\^{51 i}
//! $$
//! regardless of whether the limbs respect their bounds.  A limb set whose
//! limbs all respect their bounds is *normalized*; anything else has to go
//! through [`normalize`](crate::normalize::normalize) before downstream
//! arithmetic may consume it.

use core::fmt;

use num_bigint::BigUint;
use num_traits::Zero;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use crate::constants;
use crate::errors::{LimbError, ShapeError};
use crate::normalize::reduce_canonical;

/// Bit width of a full radix-\\(2\^{51}\\) limb.
pub const LIMB_BITS: u32 = 51;

/// Mask selecting the low 51 bits of a limb.
pub const LOW_51_BIT_MASK: u64 = (1u64 << LIMB_BITS) - 1;

/// Number of limbs of a canonical field element.
pub const CANONICAL_LIMBS: usize = 5;

/// Number of limbs of the transient form, which carries one extra limb
/// worth \\(2\^{255}\\) per unit.
pub const TRANSIENT_LIMBS: usize = 6;

/// Width schedule of a canonical field element.
pub const CANONICAL_WIDTHS: [u32; CANONICAL_LIMBS] = [LIMB_BITS; CANONICAL_LIMBS];

/// Width schedule of the transient form.
pub const TRANSIENT_WIDTHS: [u32; TRANSIENT_LIMBS] = [LIMB_BITS; TRANSIENT_LIMBS];

/// A fixed-size ordered sequence of limbs with a per-limb width bound.
///
/// Every width lies in `1..=51` and every width below the top limb is
/// exactly 51, so the positional meaning of the limbs never changes.  The
/// slots past `limb_count()` are always zero, which keeps the derived
/// equality structural: two limb sets are `==` iff they hold the same limbs
/// under the same schedule.  Use [`ConstantTimeEq`] to compare values
/// modulo \\(p\\) instead.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct LimbSet {
    limbs: [u64; TRANSIENT_LIMBS],
    widths: [u32; TRANSIENT_LIMBS],
    len: usize,
}

impl LimbSet {
    /// Build a limb set from `limbs` under the bit-width schedule `widths`.
    ///
    /// The limbs are not required to respect their bounds; use
    /// [`validate`](LimbSet::validate) to check them.
    pub fn new(limbs: &[u64], widths: &[u32]) -> Result<LimbSet, LimbError> {
        if limbs.len() != widths.len() {
            return Err(ShapeError::LengthMismatch {
                limbs: limbs.len(),
                widths: widths.len(),
            }
            .into());
        }
        check_schedule(widths)?;

        let mut output = LimbSet::zero_with_len(limbs.len());
        output.limbs[..limbs.len()].copy_from_slice(limbs);
        output.widths[..widths.len()].copy_from_slice(widths);
        Ok(output)
    }

    /// Build a five-limb set under the canonical schedule.
    pub const fn canonical(limbs: [u64; CANONICAL_LIMBS]) -> LimbSet {
        LimbSet {
            limbs: [limbs[0], limbs[1], limbs[2], limbs[3], limbs[4], 0],
            widths: [LIMB_BITS, LIMB_BITS, LIMB_BITS, LIMB_BITS, LIMB_BITS, 0],
            len: CANONICAL_LIMBS,
        }
    }

    /// Build a six-limb set under the transient schedule.
    pub const fn transient(limbs: [u64; TRANSIENT_LIMBS]) -> LimbSet {
        LimbSet {
            limbs,
            widths: TRANSIENT_WIDTHS,
            len: TRANSIENT_LIMBS,
        }
    }

    /// The canonical representation of zero.
    pub const ZERO: LimbSet = LimbSet::canonical([0, 0, 0, 0, 0]);

    /// The canonical representation of one.
    pub const ONE: LimbSet = LimbSet::canonical([1, 0, 0, 0, 0]);

    const fn zero_with_len(len: usize) -> LimbSet {
        LimbSet {
            limbs: [0; TRANSIENT_LIMBS],
            widths: [0; TRANSIENT_LIMBS],
            len,
        }
    }

    /// The limbs, least-significant first.
    pub fn limbs(&self) -> &[u64] {
        &self.limbs[..self.len]
    }

    /// The bit-width bound of every limb.
    pub fn widths(&self) -> &[u32] {
        &self.widths[..self.len]
    }

    /// Number of limbs held.
    pub fn limb_count(&self) -> usize {
        self.len
    }

    /// Total number of bits the width schedule covers.
    pub fn capacity(&self) -> u64 {
        self.widths().iter().map(|&w| u64::from(w)).sum()
    }

    /// Returns `true` iff every limb is below \\(2\^{\mathrm{width}}\\).
    pub fn validate(&self) -> bool {
        self.limbs()
            .iter()
            .zip(self.widths())
            .all(|(&limb, &width)| limb >> width == 0)
    }

    /// Returns `true` iff this is a validated five-limb set under the
    /// canonical schedule, i.e. something downstream arithmetic may consume.
    pub fn is_canonical(&self) -> bool {
        self.widths() == CANONICAL_WIDTHS && self.validate()
    }

    /// The integer \\(\sum\_i \mathrm{limbs}[i] \cdot 2\^{51 i}\\).
    ///
    /// Six limbs of at most 64 bits each span fewer than 320 bits, which a
    /// `BigUint` always holds.
    pub fn value(&self) -> BigUint {
        self.limbs()
            .iter()
            .rev()
            .fold(BigUint::zero(), |acc, &limb| (acc << LIMB_BITS) + limb)
    }

    /// Fail unless this is the canonical or the transient form.
    pub(crate) fn check_field_shape(&self) -> Result<(), ShapeError> {
        match self.len {
            CANONICAL_LIMBS | TRANSIENT_LIMBS => Ok(()),
            n => Err(ShapeError::UnsupportedLimbCount(n)),
        }
    }

    /// Fail unless this holds exactly five limbs.
    pub(crate) fn check_five_limbs(&self) -> Result<[u64; CANONICAL_LIMBS], ShapeError> {
        if self.len != CANONICAL_LIMBS {
            return Err(ShapeError::UnsupportedLimbCount(self.len));
        }
        let l = &self.limbs;
        Ok([l[0], l[1], l[2], l[3], l[4]])
    }
}

/// Check a width schedule: one to six widths, each in `1..=51`, and all but
/// the top one exactly 51.
pub(crate) fn check_schedule(widths: &[u32]) -> Result<(), ShapeError> {
    if widths.is_empty() || widths.len() > TRANSIENT_LIMBS {
        return Err(ShapeError::UnsupportedLength(widths.len()));
    }
    let top = widths.len() - 1;
    for (index, &width) in widths.iter().enumerate() {
        let in_range = (1..=LIMB_BITS).contains(&width);
        if !in_range || (index < top && width != LIMB_BITS) {
            return Err(ShapeError::InvalidWidth { index, width });
        }
    }
    Ok(())
}

impl Default for LimbSet {
    fn default() -> LimbSet {
        LimbSet::ZERO
    }
}

impl fmt::Debug for LimbSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LimbSet {{ limbs: {:?}, widths: {:?} }}",
            self.limbs(),
            self.widths()
        )
    }
}

/// One line per limb, least-significant first, in hexadecimal.
impl fmt::Display for LimbSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, limb) in self.limbs().iter().enumerate() {
            writeln!(f, "limb[{}] = 0x{:013x}", i, limb)?;
        }
        Ok(())
    }
}

impl ConstantTimeEq for LimbSet {
    /// Test equality modulo \\(p\\).  Since the internal representation is
    /// not canonical, both sides are fully reduced before the limbs are
    /// compared.  A side that is not a five- or six-limb set is never equal
    /// to anything.
    fn ct_eq(&self, other: &LimbSet) -> Choice {
        let p = constants::modulus();
        match (reduce_canonical(self, &p), reduce_canonical(other, &p)) {
            (Ok(a), Ok(b)) => a.limbs[..].ct_eq(&b.limbs[..]),
            _ => Choice::from(0u8),
        }
    }
}

impl ConditionallySelectable for LimbSet {
    fn conditional_select(a: &LimbSet, b: &LimbSet, choice: Choice) -> LimbSet {
        let mut output = LimbSet::zero_with_len(0);
        for i in 0..TRANSIENT_LIMBS {
            output.limbs[i] = u64::conditional_select(&a.limbs[i], &b.limbs[i], choice);
            output.widths[i] = u32::conditional_select(&a.widths[i], &b.widths[i], choice);
        }
        output.len = u64::conditional_select(&(a.len as u64), &(b.len as u64), choice) as usize;
        output
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for LimbSet {
    fn zeroize(&mut self) {
        self.limbs.zeroize();
    }
}
