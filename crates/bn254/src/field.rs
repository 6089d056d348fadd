//! Extension fields of the BN254 base field.
//!
//! [`FqExt<N>`] is an element of `Fp[w] / (m(w))` for a fixed monic polynomial `m` of degree `N`.
//! Two instances are used:
//!
//! - [`Fq2`]: `m(i) = i^2 + 1`, the field G2 coordinates live in.
//! - [`Fq12`]: `m(w) = w^12 - 18 w^6 + 82`, the field twisted G2 points and pairing values live in.
//!
//! Coefficients are kept in Montgomery form internally. [`FqExt::new`] and [`FqExt::coeffs`]
//! take and return plain residues.
use crate::{
    arith::{bn254_arith, ModArith},
    constants::{FQ12_MODULUS_COEFFS, FQ2_MODULUS_COEFFS},
};
use alloy_primitives::U256;
use core::{
    fmt,
    ops::{Add, Div, Mul, Neg, Sub},
};
use std::vec::Vec;

/// Minimal set of field operations the generic point code is written against.
pub trait FieldElement:
    Copy
    + Eq
    + fmt::Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Additive identity.
    fn zero() -> Self;

    /// Multiplicative identity.
    fn one() -> Self;

    /// Embeds a small integer.
    fn from_u64(value: u64) -> Self;

    /// Returns `true` if this is the additive identity.
    fn is_zero(&self) -> bool;

    /// Raises `self` to the power `exp`.
    fn pow(self, exp: u64) -> Self {
        let mut result = Self::one();
        for i in (0..u64::BITS - exp.leading_zeros()).rev() {
            result = result * result;
            if (exp >> i) & 1 == 1 {
                result = result * self;
            }
        }
        result
    }
}

/// Defining polynomial of an extension field.
pub trait ExtensionModulus {
    /// Coefficients `m_0 .. m_{N-1}` of the monic modulus `w^N + m_{N-1} w^{N-1} + ... + m_0`.
    const MODULUS_COEFFS: &'static [i64];
}

/// Element of a degree `N` extension of the BN254 base field.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FqExt<const N: usize> {
    /// Montgomery form coefficients, lowest degree first.
    coeffs: [U256; N],
}

/// Quadratic extension `Fp[i] / (i^2 + 1)`.
pub type Fq2 = FqExt<2>;

/// Degree 12 extension `Fp[w] / (w^12 - 18 w^6 + 82)`.
pub type Fq12 = FqExt<12>;

impl ExtensionModulus for Fq2 {
    const MODULUS_COEFFS: &'static [i64] = &FQ2_MODULUS_COEFFS;
}

impl ExtensionModulus for Fq12 {
    const MODULUS_COEFFS: &'static [i64] = &FQ12_MODULUS_COEFFS;
}

impl<const N: usize> FqExt<N> {
    /// Creates an element from plain (non-Montgomery) coefficients, lowest degree first.
    ///
    /// Coefficients are reduced modulo the field modulus.
    pub fn new(coeffs: [U256; N]) -> Self {
        let s = bn254_arith();
        Self {
            coeffs: coeffs.map(|c| s.to_mont(c)),
        }
    }

    /// Creates an element whose constant coefficient is `value` and all others are zero.
    pub fn from_base(value: U256) -> Self {
        let mut coeffs = [U256::ZERO; N];
        if N > 0 {
            coeffs[0] = value;
        }
        Self::new(coeffs)
    }

    /// Returns the plain (non-Montgomery) coefficients, lowest degree first.
    pub fn coeffs(&self) -> [U256; N] {
        let s = bn254_arith();
        self.coeffs.map(|c| s.from_mont(c))
    }

    /// Returns the multiplicative inverse. The inverse of zero is zero.
    pub fn inverse(self) -> Self
    where
        Self: ExtensionModulus,
    {
        let s = bn254_arith();
        let one = s.to_mont(U256::from(1));

        // Extended Euclid on polynomials, keeping `lm * self == low` and `hm * self == high`
        // modulo the defining polynomial.
        let mut lm = vec![U256::ZERO; N + 1];
        lm[0] = one;
        let mut hm = vec![U256::ZERO; N + 1];
        let mut low: Vec<U256> = self.coeffs.iter().copied().chain([U256::ZERO]).collect();
        let mut high: Vec<U256> = Self::modulus_mont(s).into_iter().chain([one]).collect();

        while degree(&low) > 0 {
            let r = poly_quotient(s, &high, &low);
            let mut nm = hm;
            let mut new = high;
            for i in 0..=N {
                for j in 0..=N - i {
                    nm[i + j] = s.sub(nm[i + j], s.mul(lm[i], r[j]));
                    new[i + j] = s.sub(new[i + j], s.mul(low[i], r[j]));
                }
            }
            hm = core::mem::replace(&mut lm, nm);
            high = core::mem::replace(&mut low, new);
        }

        let scale = s.inv(low[0]);
        let mut coeffs = [U256::ZERO; N];
        for (c, l) in coeffs.iter_mut().zip(lm) {
            *c = s.mul(l, scale);
        }
        Self { coeffs }
    }

    /// Modulus coefficients in Montgomery form.
    fn modulus_mont(s: &ModArith) -> Vec<U256>
    where
        Self: ExtensionModulus,
    {
        Self::MODULUS_COEFFS
            .iter()
            .map(|&m| {
                let abs = s.to_mont(U256::from(m.unsigned_abs()));
                if m < 0 {
                    s.neg(abs)
                } else {
                    abs
                }
            })
            .collect()
    }
}

/// Degree of a polynomial. The zero polynomial has degree zero.
fn degree(p: &[U256]) -> usize {
    p.iter().rposition(|c| !c.is_zero()).unwrap_or(0)
}

/// Quotient of the polynomial division `a / b`, padded to the length of `a`.
fn poly_quotient(s: &ModArith, a: &[U256], b: &[U256]) -> Vec<U256> {
    let (deg_a, deg_b) = (degree(a), degree(b));
    let mut rem = a.to_vec();
    let mut out = vec![U256::ZERO; a.len()];
    if deg_a < deg_b {
        return out;
    }
    let lead_inv = s.inv(b[deg_b]);
    for i in (0..=deg_a - deg_b).rev() {
        let q = s.mul(rem[deg_b + i], lead_inv);
        out[i] = q;
        for c in 0..=deg_b {
            rem[c + i] = s.sub(rem[c + i], s.mul(b[c], q));
        }
    }
    out
}

impl<const N: usize> fmt::Debug for FqExt<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fq{}", N)?;
        f.debug_list().entries(self.coeffs().iter()).finish()
    }
}

impl<const N: usize> Default for FqExt<N> {
    fn default() -> Self {
        Self {
            coeffs: [U256::ZERO; N],
        }
    }
}

impl<const N: usize> Add for FqExt<N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let s = bn254_arith();
        let mut coeffs = self.coeffs;
        for (c, r) in coeffs.iter_mut().zip(rhs.coeffs) {
            *c = s.add(*c, r);
        }
        Self { coeffs }
    }
}

impl<const N: usize> Sub for FqExt<N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        let s = bn254_arith();
        let mut coeffs = self.coeffs;
        for (c, r) in coeffs.iter_mut().zip(rhs.coeffs) {
            *c = s.sub(*c, r);
        }
        Self { coeffs }
    }
}

impl<const N: usize> Neg for FqExt<N> {
    type Output = Self;

    fn neg(self) -> Self {
        let s = bn254_arith();
        Self {
            coeffs: self.coeffs.map(|c| s.neg(c)),
        }
    }
}

impl<const N: usize> Mul for FqExt<N>
where
    Self: ExtensionModulus,
{
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let s = bn254_arith();
        let mut prod = vec![U256::ZERO; 2 * N - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            if a.is_zero() {
                continue;
            }
            for (j, b) in rhs.coeffs.iter().enumerate() {
                prod[i + j] = s.add(prod[i + j], s.mul(*a, *b));
            }
        }

        // w^N == -(m_0 + m_1 w + ... + m_{N-1} w^{N-1})
        let modulus = Self::modulus_mont(s);
        for i in (N..2 * N - 1).rev() {
            let top = prod[i];
            if top.is_zero() {
                continue;
            }
            for (j, m) in modulus.iter().enumerate() {
                if !m.is_zero() {
                    prod[i - N + j] = s.sub(prod[i - N + j], s.mul(top, *m));
                }
            }
        }

        let mut coeffs = [U256::ZERO; N];
        coeffs.copy_from_slice(&prod[..N]);
        Self { coeffs }
    }
}

impl<const N: usize> Div for FqExt<N>
where
    Self: ExtensionModulus,
{
    type Output = Self;

    #[allow(clippy::suspicious_arithmetic_impl)]
    fn div(self, rhs: Self) -> Self {
        self * rhs.inverse()
    }
}

impl<const N: usize> FieldElement for FqExt<N>
where
    Self: ExtensionModulus,
{
    fn zero() -> Self {
        Self::default()
    }

    fn one() -> Self {
        Self::from_u64(1)
    }

    fn from_u64(value: u64) -> Self {
        Self::from_base(U256::from(value))
    }

    fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|c| c.is_zero())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::FIELD_MODULUS;

    fn u(v: u64) -> U256 {
        U256::from(v)
    }

    fn sample_fq12() -> Fq12 {
        Fq12::new(core::array::from_fn(|i| u(3 * i as u64 + 1)))
    }

    #[test]
    fn fq2_i_squared_is_minus_one() {
        let i = Fq2::new([u(0), u(1)]);
        assert_eq!(i * i, -Fq2::one());
    }

    #[test]
    fn fq12_reduction_matches_modulus() {
        let mut coeffs = [U256::ZERO; 12];
        coeffs[1] = u(1);
        let w = Fq12::new(coeffs);
        // w^12 == 18 w^6 - 82
        let mut expected = [U256::ZERO; 12];
        expected[0] = FIELD_MODULUS - u(82);
        expected[6] = u(18);
        assert_eq!(w.pow(12), Fq12::new(expected));
    }

    #[test]
    fn fq2_inverse() {
        let x = Fq2::new([u(5), u(7)]);
        assert_eq!(x * x.inverse(), Fq2::one());
        assert_eq!(x / x, Fq2::one());
    }

    #[test]
    fn fq12_inverse() {
        let x = sample_fq12();
        assert_eq!(x * x.inverse(), Fq12::one());
        let y = Fq12::from_u64(42);
        assert_eq!((x * y) / y, x);
    }

    #[test]
    fn division_by_zero_is_zero() {
        assert_eq!(Fq2::new([u(1), u(2)]) / Fq2::zero(), Fq2::zero());
        assert_eq!(sample_fq12() / Fq12::zero(), Fq12::zero());
    }

    #[test]
    fn coeffs_round_trip_and_reduce() {
        let x = Fq2::new([FIELD_MODULUS + u(3), u(4)]);
        assert_eq!(x.coeffs(), [u(3), u(4)]);
    }

    #[test]
    fn arithmetic_identities() {
        let x = sample_fq12();
        assert_eq!(x + Fq12::zero(), x);
        assert_eq!(x - x, Fq12::zero());
        assert_eq!(x + (-x), Fq12::zero());
        assert_eq!(x * Fq12::one(), x);
        assert_eq!(x.pow(0), Fq12::one());
        assert_eq!(x.pow(3), x * x * x);
        assert_eq!(x * Fq12::from_u64(2), x + x);
        assert!(Fq12::zero().is_zero());
        assert!(!x.is_zero());
    }
}
