//! # revm-precompile
//!
//! alt_bn128 `ecAdd` and `ecMul` precompiled contracts backed by [`bn254`].
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(feature = "std"), no_std)]

#[macro_use]
#[cfg(not(feature = "std"))]
extern crate alloc as std;

pub mod bn128;
pub mod interface;
pub mod utilities;

pub use alloy_primitives::{Address, Bytes};
pub use interface::*;

use once_cell::race::OnceBox;
use std::{boxed::Box, vec::Vec};

/// Set of precompiles active at a hardfork.
#[derive(Clone, Default, Debug)]
pub struct Precompiles {
    /// Precompiles, at most one per address.
    inner: Vec<PrecompileWithAddress>,
}

impl Precompiles {
    /// Returns the precompiles for the given hardfork.
    pub fn new(spec_id: PrecompileSpecId) -> &'static Self {
        match spec_id {
            PrecompileSpecId::BYZANTIUM => Self::byzantium(),
            PrecompileSpecId::ISTANBUL => Self::istanbul(),
        }
    }

    /// Returns precompiles for Byzantium.
    pub fn byzantium() -> &'static Self {
        static INSTANCE: OnceBox<Precompiles> = OnceBox::new();
        INSTANCE.get_or_init(|| {
            let mut precompiles = Precompiles::default();
            precompiles.extend([
                // EIP-196: Precompiled contracts for addition and scalar multiplication on
                // the elliptic curve alt_bn128.
                bn128::add::BYZANTIUM,
                bn128::mul::BYZANTIUM,
            ]);
            Box::new(precompiles)
        })
    }

    /// Returns precompiles for Istanbul.
    pub fn istanbul() -> &'static Self {
        static INSTANCE: OnceBox<Precompiles> = OnceBox::new();
        INSTANCE.get_or_init(|| {
            let mut precompiles = Self::byzantium().clone();
            precompiles.extend([
                // EIP-1108: Reduce alt_bn128 precompile gas costs.
                bn128::add::ISTANBUL,
                bn128::mul::ISTANBUL,
            ]);
            Box::new(precompiles)
        })
    }

    /// Returns the precompiles for the latest hardfork.
    pub fn latest() -> &'static Self {
        Self::istanbul()
    }

    /// Is the given address a precompile.
    #[inline]
    pub fn contains(&self, address: &Address) -> bool {
        self.get(address).is_some()
    }

    /// Returns the precompile for the given address.
    #[inline]
    pub fn get(&self, address: &Address) -> Option<&PrecompileFn> {
        self.inner
            .iter()
            .find(|p| p.address() == address)
            .map(PrecompileWithAddress::precompile)
    }

    /// Is the precompiles list empty.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of precompiles.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Extends the precompiles with the given precompiles.
    ///
    /// Other precompiles with overwrite existing precompiles.
    #[inline]
    pub fn extend(&mut self, other: impl IntoIterator<Item = PrecompileWithAddress>) {
        for precompile in other {
            match self.inner.iter_mut().find(|p| p.0 == precompile.0) {
                Some(existing) => *existing = precompile,
                None => self.inner.push(precompile),
            }
        }
    }
}

/// Precompile paired with the address it is installed at.
#[derive(Clone, Debug)]
pub struct PrecompileWithAddress(pub Address, pub PrecompileFn);

impl From<(Address, PrecompileFn)> for PrecompileWithAddress {
    fn from(value: (Address, PrecompileFn)) -> Self {
        PrecompileWithAddress(value.0, value.1)
    }
}

impl From<PrecompileWithAddress> for (Address, PrecompileFn) {
    fn from(value: PrecompileWithAddress) -> Self {
        (value.0, value.1)
    }
}

impl PrecompileWithAddress {
    /// Returns reference of address.
    #[inline]
    pub fn address(&self) -> &Address {
        &self.0
    }

    /// Returns reference of precompile.
    #[inline]
    pub fn precompile(&self) -> &PrecompileFn {
        &self.1
    }
}

/// Hardforks that changed the alt_bn128 precompiles.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum PrecompileSpecId {
    /// [EIP-196](https://eips.ethereum.org/EIPS/eip-196) introduced `ecAdd` and `ecMul`.
    BYZANTIUM,
    /// [EIP-1108](https://eips.ethereum.org/EIPS/eip-1108) repriced them.
    ISTANBUL,
}

/// Const function for making an address by concatenating the bytes from two given numbers.
///
/// Note that 32 + 128 = 160 = 20 bytes (the length of an address).
///
/// This function is used as a convenience for specifying the addresses of the various precompiles.
#[inline]
pub const fn u64_to_address(x: u64) -> Address {
    let x = x.to_be_bytes();
    Address::new([
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, x[0], x[1], x[2], x[3], x[4], x[5], x[6], x[7],
    ])
}
