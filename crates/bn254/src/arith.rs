//! Montgomery modular arithmetic over a fixed odd modulus.
//!
//! Values handed to [`ModArith::add`], [`ModArith::sub`], [`ModArith::mul`] and
//! [`ModArith::inv`] must already be in Montgomery form and reduced below the modulus.
//! Use [`ModArith::to_mont`] and [`ModArith::from_mont`] at the edges of a computation.
use crate::constants::FIELD_MODULUS;
use alloy_primitives::U256;
use once_cell::race::OnceBox;
use std::boxed::Box;

/// Modular arithmetic context bound to a single modulus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModArith {
    /// The modulus. Must be odd and below `2^255`.
    modulus: U256,
    /// `R^2 mod modulus` where `R = 2^256`.
    r_squared: U256,
    /// `-modulus^-1 mod 2^64`.
    inv: u64,
}

impl ModArith {
    /// Creates a new context for the given odd modulus.
    pub fn new(modulus: U256) -> Self {
        debug_assert!(modulus.bit(0), "modulus must be odd");
        debug_assert!(!modulus.bit(255), "modulus must be below 2^255");

        // R mod m == (2^256 - m) mod m
        let r = modulus.wrapping_neg().reduce_mod(modulus);
        let r_squared = r.mul_mod(r, modulus);

        // Newton iteration doubles the number of correct low bits on every step.
        let m0 = modulus.as_limbs()[0];
        let mut inv = 1u64;
        for _ in 0..6 {
            inv = inv.wrapping_mul(2u64.wrapping_sub(m0.wrapping_mul(inv)));
        }

        Self {
            modulus,
            r_squared,
            inv: inv.wrapping_neg(),
        }
    }

    /// Converts `x` into Montgomery form. `x` is reduced first.
    #[inline]
    pub fn to_mont(&self, x: U256) -> U256 {
        let x = if x >= self.modulus {
            x.reduce_mod(self.modulus)
        } else {
            x
        };
        self.mul(x, self.r_squared)
    }

    /// Converts `x` out of Montgomery form.
    #[inline]
    pub fn from_mont(&self, x: U256) -> U256 {
        self.mul(x, U256::from(1))
    }

    /// Modular addition.
    #[inline]
    pub fn add(&self, x: U256, y: U256) -> U256 {
        // Cannot overflow, both operands are below 2^255.
        let s = x.wrapping_add(y);
        if s >= self.modulus {
            s.wrapping_sub(self.modulus)
        } else {
            s
        }
    }

    /// Modular subtraction.
    #[inline]
    pub fn sub(&self, x: U256, y: U256) -> U256 {
        if x >= y {
            x.wrapping_sub(y)
        } else {
            x.wrapping_add(self.modulus).wrapping_sub(y)
        }
    }

    /// Modular negation.
    #[inline]
    pub fn neg(&self, x: U256) -> U256 {
        self.sub(U256::ZERO, x)
    }

    /// Montgomery multiplication: `x * y * R^-1 mod m`.
    #[inline]
    pub fn mul(&self, x: U256, y: U256) -> U256 {
        x.mul_redc(y, self.modulus, self.inv)
    }

    /// Modular inverse of a Montgomery form value, returned in Montgomery form.
    ///
    /// The inverse of zero is zero.
    pub fn inv(&self, x: U256) -> U256 {
        match self.from_mont(x).inv_mod(self.modulus) {
            Some(inv) => self.to_mont(inv),
            None => U256::ZERO,
        }
    }
}

/// Returns the shared arithmetic context for the BN254 base field.
pub fn bn254_arith() -> &'static ModArith {
    static INSTANCE: OnceBox<ModArith> = OnceBox::new();
    INSTANCE.get_or_init(|| Box::new(ModArith::new(FIELD_MODULUS)))
}
