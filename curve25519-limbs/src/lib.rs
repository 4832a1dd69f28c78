// -*- mode: rust; -*-
//
// This file is part of curve25519-limbs.
// See LICENSE for licensing information.

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

//------------------------------------------------------------------------
// curve25519-limbs public modules
//------------------------------------------------------------------------

// Limb sets and their width schedules
pub mod limbs;

// Integer -> limbs
pub mod decompose;

// Carry propagation and reduction mod p = 2^255 - 19
pub mod normalize;

// Limbs -> integer
pub mod recompose;

// Limb forms of p and 2p
pub mod constants;

// Limb-wise add/sub/negate
pub mod arith;

// 32-byte little-endian encoding
pub mod encoding;

// Error types
pub mod errors;

//------------------------------------------------------------------------
// curve25519-limbs internal modules
//------------------------------------------------------------------------

pub(crate) mod utils;

pub use crate::decompose::{decompose, decompose_canonical};
pub use crate::errors::{LimbError, RangeError, ShapeError};
pub use crate::limbs::LimbSet;
pub use crate::normalize::{normalize, reduce_canonical};
pub use crate::recompose::recompose;
