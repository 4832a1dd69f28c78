// -*- mode: rust; -*-
//
// This file is part of curve25519-limbs.
// See LICENSE for licensing information.

//! Errors which may occur when building, decomposing or normalizing limb sets.

use thiserror::Error;

/// The limbs or their width schedule do not have a shape this crate can
/// work with.  These are always programmer errors.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Error)]
pub enum ShapeError {
    /// The limb sequence and the width schedule have different lengths.
    #[error("{limbs} limbs were given with a schedule of {widths} widths")]
    LengthMismatch {
        /// Number of limbs handed to the constructor.
        limbs: usize,
        /// Number of widths handed to the constructor.
        widths: usize,
    },
    /// A limb set must hold between one and six limbs.
    #[error("a limb set cannot hold {0} limbs")]
    UnsupportedLength(usize),
    /// The operation only accepts the canonical (5) or transient (6) form.
    #[error("expected 5 or 6 limbs, found {0}")]
    UnsupportedLimbCount(usize),
    /// A width is zero or wider than a radix-2^51 limb, or a limb below the
    /// top one is narrower than 51 bits.
    #[error("limb {index} cannot have a width of {width} bits")]
    InvalidWidth {
        /// Position of the offending width.
        index: usize,
        /// The offending width.
        width: u32,
    },
    /// The modulus is not a five-limb constant of the form 2^255 - c.
    #[error("modulus is not of the form 2^255 - c with 0 < c < 2^51")]
    UnsupportedModulus,
}

/// A value does not fit the representation it was handed to.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Error)]
pub enum RangeError {
    /// An integer is too wide for the requested width schedule.
    #[error("a {bits}-bit integer does not fit a {capacity}-bit limb schedule")]
    TooWide {
        /// Bit length of the integer.
        bits: u64,
        /// Total width of the schedule.
        capacity: u64,
    },
    /// A limb-wise sum overflowed its 64-bit limb.
    #[error("limb {index} overflowed 64 bits")]
    LimbOverflow {
        /// Position of the limb that overflowed.
        index: usize,
    },
}

/// Errors which may occur while working with limb sets.
///
/// This error may arise due to:
///
/// * Being given limbs and widths whose shape is unsupported, see
///   [`ShapeError`].
///
/// * Being given an integer or limb sum that does not fit, see
///   [`RangeError`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Error)]
pub enum LimbError {
    /// See [`ShapeError`].
    #[error(transparent)]
    Shape(#[from] ShapeError),
    /// See [`RangeError`].
    #[error(transparent)]
    Range(#[from] RangeError),
}
