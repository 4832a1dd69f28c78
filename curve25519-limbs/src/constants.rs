// -*- mode: rust; -*-
//
// This file is part of curve25519-limbs.
// See LICENSE for licensing information.

//! Limb representations of the field constants, such as the modulus
//! \\(p = 2\^{255} - 19\\) and its double.
//!
//! The raw limb arrays are compile-time constants.  The [`registry`] pairs
//! each of them with its integer value; it is built once, on first use, and
//! only ever read afterwards.

use std::sync::OnceLock;

use num_bigint::BigUint;
use tracing::trace;

use crate::limbs::LimbSet;

/// The limbs of \\(p = 2\^{255} - 19\\).
pub const MODULUS_LIMBS: [u64; 5] = [
    0x7FFFFFFFFFFED,
    0x7FFFFFFFFFFFF,
    0x7FFFFFFFFFFFF,
    0x7FFFFFFFFFFFF,
    0x7FFFFFFFFFFFF,
];

/// The limbs of \\(2p = 2\^{256} - 38\\) in transient form.
///
/// Note that the low limb is `0x7FFFFFFFFFFDA`, not the `0x7FFFFFFFFFFED`
/// of \\(p\\) itself.
pub const TWO_MODULUS_LIMBS: [u64; 6] = [
    0x7FFFFFFFFFFDA,
    0x7FFFFFFFFFFFF,
    0x7FFFFFFFFFFFF,
    0x7FFFFFFFFFFFF,
    0x7FFFFFFFFFFFF,
    0x1,
];

/// \\(2p\\) spread over five limbs of at most 52 bits, each one at least
/// as large as any 51-bit limb.  Added before a limb-wise subtraction so that
/// no limb underflows.
pub const TWO_MODULUS_BIAS: [u64; 5] = [
    0xFFFFFFFFFFFDA,
    0xFFFFFFFFFFFFE,
    0xFFFFFFFFFFFFE,
    0xFFFFFFFFFFFFE,
    0xFFFFFFFFFFFFE,
];

/// A named, immutable limb set together with its integer value.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldConstant {
    name: &'static str,
    limbs: LimbSet,
    value: BigUint,
}

impl FieldConstant {
    fn new(name: &'static str, limbs: LimbSet) -> FieldConstant {
        FieldConstant {
            name,
            value: limbs.value(),
            limbs,
        }
    }

    /// The name of this constant.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The limbs of this constant.
    pub fn limbs(&self) -> &LimbSet {
        &self.limbs
    }

    /// The integer this constant represents.
    pub fn value(&self) -> &BigUint {
        &self.value
    }
}

/// The process-wide set of field constants.
#[derive(Debug)]
pub struct FieldConstants {
    modulus: FieldConstant,
    two_modulus: FieldConstant,
}

impl FieldConstants {
    /// \\(p = 2\^{255} - 19\\), in canonical form.
    pub fn modulus(&self) -> &FieldConstant {
        &self.modulus
    }

    /// \\(2p = 2\^{256} - 38\\), in transient form.
    pub fn two_modulus(&self) -> &FieldConstant {
        &self.two_modulus
    }

    /// Look a constant up by name.
    pub fn get(&self, name: &str) -> Option<&FieldConstant> {
        [&self.modulus, &self.two_modulus]
            .into_iter()
            .find(|c| c.name == name)
    }
}

/// The field constant registry, built on first use.
pub fn registry() -> &'static FieldConstants {
    static REGISTRY: OnceLock<FieldConstants> = OnceLock::new();

    REGISTRY.get_or_init(|| {
        trace!("building field constant registry");
        FieldConstants {
            modulus: FieldConstant::new("p", LimbSet::canonical(MODULUS_LIMBS)),
            two_modulus: FieldConstant::new("2p", LimbSet::transient(TWO_MODULUS_LIMBS)),
        }
    })
}

/// The canonical five-limb decomposition of \\(p = 2\^{255} - 19\\).
pub fn modulus() -> LimbSet {
    *registry().modulus.limbs()
}

/// The six-limb decomposition of \\(2p = 2\^{256} - 38\\).
pub fn two_modulus() -> LimbSet {
    *registry().two_modulus.limbs()
}
