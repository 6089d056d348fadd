//! G1 arithmetic over the BN254 base field.
//!
//! Points cross the public boundary in affine form ([`Point`]) with plain coordinates.
//! Internally the group law runs on projective coordinates in Montgomery form using the
//! complete formulas of [Renes, Costello and Batina](https://eprint.iacr.org/2015/1060),
//! specialized for curves with `a = 0`.
use crate::{
    arith::{bn254_arith, ModArith},
    constants::{CURVE_B, CURVE_B3, FIELD_MODULUS, FQ_LEN, G1_GENERATOR_X, G1_GENERATOR_Y, G1_LEN},
};
use alloy_primitives::U256;

/// Affine G1 point with plain (non-Montgomery) coordinates.
///
/// `(0, 0)` is the point at infinity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    /// x coordinate
    pub x: U256,
    /// y coordinate
    pub y: U256,
}

impl Point {
    /// The point at infinity.
    pub const INFINITY: Self = Self::new(U256::ZERO, U256::ZERO);

    /// The G1 generator `(1, 2)`.
    pub const GENERATOR: Self = Self::new(G1_GENERATOR_X, G1_GENERATOR_Y);

    /// Creates a point from its affine coordinates. No curve check is done.
    pub const fn new(x: U256, y: U256) -> Self {
        Self { x, y }
    }

    /// Returns `true` if this is the infinity sentinel `(0, 0)`.
    #[inline]
    pub fn is_at_infinity(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }

    /// Decodes `x | y` as two 32-byte big-endian integers.
    pub fn from_be_bytes(input: &[u8; G1_LEN]) -> Self {
        Self::new(
            U256::from_be_slice(&input[..FQ_LEN]),
            U256::from_be_slice(&input[FQ_LEN..]),
        )
    }

    /// Encodes the point as `x | y`, two 32-byte big-endian integers.
    pub fn to_be_bytes(&self) -> [u8; G1_LEN] {
        let mut out = [0u8; G1_LEN];
        out[..FQ_LEN].copy_from_slice(&self.x.to_be_bytes::<FQ_LEN>());
        out[FQ_LEN..].copy_from_slice(&self.y.to_be_bytes::<FQ_LEN>());
        out
    }
}

/// Projective point `(x, y, z)` representing `(x / z, y / z)`, coordinates in Montgomery form.
///
/// `(0, 0, 0)` is the infinity sentinel recognized by the group law short-circuits.
/// `(0, 1, 0)` is the neutral element of the complete formulas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ProjPoint {
    pub(crate) x: U256,
    pub(crate) y: U256,
    pub(crate) z: U256,
}

impl ProjPoint {
    pub(crate) const INFINITY: Self = Self::new(U256::ZERO, U256::ZERO, U256::ZERO);

    pub(crate) const fn new(x: U256, y: U256, z: U256) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub(crate) fn is_at_infinity(&self) -> bool {
        self.x.is_zero() && self.y.is_zero() && self.z.is_zero()
    }
}

/// Returns whether `pt` is a valid G1 element.
///
/// Infinity is always valid. Any other point must have canonical coordinates (below the field
/// modulus) and satisfy `y^2 == x^3 + 3`.
pub fn validate(pt: &Point) -> bool {
    if pt.is_at_infinity() {
        return true;
    }
    if pt.x >= FIELD_MODULUS || pt.y >= FIELD_MODULUS {
        return false;
    }

    let s = bn254_arith();
    let xm = s.to_mont(pt.x);
    let ym = s.to_mont(pt.y);
    let y2 = s.mul(ym, ym);
    let x2 = s.mul(xm, xm);
    let x3 = s.mul(x2, xm);
    let b = s.to_mont(U256::from(CURVE_B));
    y2 == s.add(x3, b)
}

/// Converts a projective point back to affine, staying in Montgomery form.
///
/// `z == 0` yields `(0, 0)` since the inverse of zero is zero.
fn from_proj(s: &ModArith, p: &ProjPoint) -> (U256, U256) {
    let z_inv = s.inv(p.z);
    (s.mul(p.x, z_inv), s.mul(p.y, z_inv))
}

/// Complete projective addition for `a = 0`, algorithm 1 of eprint 2015/1060 with the `a` terms
/// dropped.
///
/// If either operand is the `(0, 0, 0)` sentinel the result is `(0, 0, 0)`. This is only sound for
/// callers that never feed the sentinel next to a genuine point.
pub(crate) fn point_addition_a0(
    s: &ModArith,
    p1: &ProjPoint,
    p2: &ProjPoint,
    b3: U256,
) -> ProjPoint {
    if p1.is_at_infinity() || p2.is_at_infinity() {
        return ProjPoint::INFINITY;
    }

    let ProjPoint {
        x: x1,
        y: y1,
        z: z1,
    } = *p1;
    let ProjPoint {
        x: x2,
        y: y2,
        z: z2,
    } = *p2;

    let mut t0 = s.mul(x1, x2);
    let mut t1 = s.mul(y1, y2);
    let t2 = s.mul(z1, z2);
    let mut t3 = s.add(x1, y1);
    let mut t4 = s.add(x2, y2);
    t3 = s.mul(t3, t4);
    t4 = s.add(t0, t1);
    t3 = s.sub(t3, t4);
    t4 = s.add(x1, z1);
    let mut t5 = s.add(x2, z2);
    t4 = s.mul(t4, t5);
    t5 = s.add(t0, t2);
    t4 = s.sub(t4, t5);
    t5 = s.add(y1, z1);
    let mut x3 = s.add(y2, z2);
    t5 = s.mul(t5, x3);
    x3 = s.add(t1, t2);
    t5 = s.sub(t5, x3);
    x3 = s.mul(b3, t2);
    let mut z3 = s.add(t1, x3);
    x3 = s.sub(t1, x3);
    let mut y3 = s.mul(x3, z3);
    t1 = s.add(t0, t0);
    t1 = s.add(t1, t0);
    t4 = s.mul(b3, t4);
    t0 = s.mul(t1, t4);
    y3 = s.add(y3, t0);
    t0 = s.mul(t5, t4);
    x3 = s.mul(t3, x3);
    x3 = s.sub(x3, t0);
    t0 = s.mul(t3, t1);
    z3 = s.mul(t5, z3);
    z3 = s.add(z3, t0);

    ProjPoint::new(x3, y3, z3)
}

/// Projective doubling for `a = 0`, algorithm 3 of eprint 2015/1060 with the `a` terms dropped.
pub(crate) fn point_doubling_a0(s: &ModArith, p: &ProjPoint, b3: U256) -> ProjPoint {
    if p.is_at_infinity() {
        return ProjPoint::INFINITY;
    }

    let ProjPoint { x, y, z } = *p;

    let mut t0 = s.mul(x, x);
    let t1 = s.mul(y, y);
    let mut t2 = s.mul(z, z);
    let mut t3 = s.mul(x, y);
    t3 = s.add(t3, t3);
    let mut z3 = s.mul(x, z);
    z3 = s.add(z3, z3);
    let mut y3 = s.mul(b3, t2);
    let mut x3 = s.sub(t1, y3);
    y3 = s.add(t1, y3);
    y3 = s.mul(x3, y3);
    x3 = s.mul(t3, x3);
    z3 = s.mul(b3, z3);
    t3 = z3;
    z3 = s.add(t0, t0);
    t0 = s.add(z3, t0);
    t0 = s.mul(t0, t3);
    y3 = s.add(y3, t0);
    t2 = s.mul(y, z);
    t2 = s.add(t2, t2);
    t0 = s.mul(t2, t3);
    x3 = s.sub(x3, t0);
    z3 = s.mul(t2, t1);
    z3 = s.add(z3, z3);
    z3 = s.add(z3, z3);

    ProjPoint::new(x3, y3, z3)
}

/// Addition of two affine points for `a = 0`, algorithm 2 of eprint 2015/1060 with
/// `z1 == z2 == 1`.
///
/// There is no infinity short-circuit: `(0, 0)` operands are treated as literal coordinates.
pub(crate) fn point_addition_mixed_a0(
    s: &ModArith,
    x1: U256,
    y1: U256,
    x2: U256,
    y2: U256,
    b3: U256,
) -> ProjPoint {
    let mut t0 = s.mul(x1, x2);
    let mut t1 = s.mul(y1, y2);
    let mut t3 = s.add(x2, y2);
    let mut t4 = s.add(x1, y1);
    t3 = s.mul(t3, t4);
    t4 = s.add(t0, t1);
    t3 = s.sub(t3, t4);
    t4 = s.add(x2, x1);
    let t5 = s.add(y2, y1);
    let mut x3 = s.sub(t1, b3);
    let mut z3 = s.add(t1, b3);
    let mut y3 = s.mul(x3, z3);
    t1 = s.add(t0, t0);
    t1 = s.add(t1, t0);
    t4 = s.mul(b3, t4);
    t0 = s.mul(t1, t4);
    y3 = s.add(y3, t0);
    t0 = s.mul(t5, t4);
    x3 = s.mul(t3, x3);
    x3 = s.sub(x3, t0);
    t0 = s.mul(t3, t1);
    z3 = s.mul(t5, z3);
    z3 = s.add(z3, t0);

    ProjPoint::new(x3, y3, z3)
}

/// Adds two affine G1 points.
///
/// Inputs are expected to be valid, see [`validate`].
pub fn add(pt1: &Point, pt2: &Point) -> Point {
    if pt1.is_at_infinity() {
        return *pt2;
    }
    if pt2.is_at_infinity() {
        return *pt1;
    }

    let s = bn254_arith();
    let b3 = s.to_mont(U256::from(CURVE_B3));

    let sum = point_addition_mixed_a0(
        s,
        s.to_mont(pt1.x),
        s.to_mont(pt1.y),
        s.to_mont(pt2.x),
        s.to_mont(pt2.y),
        b3,
    );
    let (x, y) = from_proj(s, &sum);

    Point::new(s.from_mont(x), s.from_mont(y))
}

/// Multiplies an affine G1 point by a 256-bit scalar.
///
/// Scans all 256 bits from the most significant one. Leading zero bits are skipped until the
/// first set bit is seen.
pub fn mul(pt: &Point, c: U256) -> Point {
    if pt.is_at_infinity() || c.is_zero() {
        return Point::INFINITY;
    }

    let s = bn254_arith();
    let one = s.to_mont(U256::from(1));
    let b3 = s.to_mont(U256::from(CURVE_B3));

    // r0 is the neutral element (0, 1, 0), r1 - r0 == pt throughout.
    let mut r0 = ProjPoint::new(U256::ZERO, one, U256::ZERO);
    let mut r1 = ProjPoint::new(s.to_mont(pt.x), s.to_mont(pt.y), one);

    let mut first_significant_met = false;

    for i in (0..256).rev() {
        if c.bit(i) {
            r0 = point_addition_a0(s, &r0, &r1, b3);
            r1 = point_doubling_a0(s, &r1, b3);
            first_significant_met = true;
        } else if first_significant_met {
            r1 = point_addition_a0(s, &r0, &r1, b3);
            r0 = point_doubling_a0(s, &r0, b3);
        }
    }

    let (x, y) = from_proj(s, &r0);

    Point::new(s.from_mont(x), s.from_mont(y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::CURVE_ORDER;
    use alloy_primitives::uint;
    use ark_bn254::{Fr, G1Affine};
    use ark_ec::{AffineRepr, CurveGroup};
    use ark_ff::{BigInteger, PrimeField};
    use rand::{rngs::StdRng, RngCore, SeedableRng};
    use rstest::rstest;

    const G2X: U256 =
        uint!(0x030644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd3_U256);
    const G2Y: U256 =
        uint!(0x15ed738c0e0a7c92e7845f96b2ae9c0a68a6a449e3538fc7ff3ebf7a5a18a2c4_U256);

    fn neg(p: &Point) -> Point {
        Point::new(p.x, FIELD_MODULUS - p.y)
    }

    fn reference_mul(k: U256) -> Point {
        let fr = Fr::from_be_bytes_mod_order(&k.to_be_bytes::<32>());
        let p = (G1Affine::generator().into_group() * fr).into_affine();
        if p.infinity {
            return Point::INFINITY;
        }
        Point::new(
            U256::from_be_slice(&p.x.into_bigint().to_bytes_be()),
            U256::from_be_slice(&p.y.into_bigint().to_bytes_be()),
        )
    }

    fn to_affine(p: &ProjPoint) -> Point {
        let s = bn254_arith();
        let (x, y) = from_proj(s, p);
        Point::new(s.from_mont(x), s.from_mont(y))
    }

    fn to_proj(p: &Point) -> ProjPoint {
        let s = bn254_arith();
        ProjPoint::new(s.to_mont(p.x), s.to_mont(p.y), s.to_mont(U256::from(1)))
    }

    #[test]
    fn validate_generator_and_infinity() {
        assert!(validate(&Point::GENERATOR));
        assert!(validate(&Point::INFINITY));
        assert!(validate(&Point::new(G2X, G2Y)));
    }

    #[test]
    fn validate_rejects_perturbed_point() {
        let p = Point::new(G2X, G2Y + U256::from(1));
        assert!(!validate(&p));
        assert!(!validate(&Point::new(U256::from(1), U256::from(3))));
        assert!(!validate(&Point::new(U256::ZERO, U256::from(1))));
    }

    #[test]
    fn validate_rejects_non_canonical_coordinates() {
        let p = Point::new(U256::from(1) + FIELD_MODULUS, U256::from(2));
        assert!(!validate(&p));
        let p = Point::new(U256::from(1), U256::from(2) + FIELD_MODULUS);
        assert!(!validate(&p));
    }

    #[test]
    fn add_doubles_generator() {
        assert_eq!(
            add(&Point::GENERATOR, &Point::GENERATOR),
            Point::new(G2X, G2Y)
        );
    }

    #[test]
    fn add_identity() {
        let p = Point::new(G2X, G2Y);
        assert_eq!(add(&p, &Point::INFINITY), p);
        assert_eq!(add(&Point::INFINITY, &p), p);
        assert_eq!(add(&Point::INFINITY, &Point::INFINITY), Point::INFINITY);
    }

    #[test]
    fn add_inverse_is_infinity() {
        let p = Point::new(G2X, G2Y);
        assert_eq!(add(&p, &neg(&p)), Point::INFINITY);
    }

    #[test]
    fn add_is_commutative() {
        let p = Point::GENERATOR;
        let q = reference_mul(U256::from(12345));
        assert_eq!(add(&p, &q), add(&q, &p));
        assert_eq!(add(&p, &q), reference_mul(U256::from(12346)));
    }

    #[test]
    fn doubling_matches_complete_addition() {
        let s = bn254_arith();
        let b3 = s.to_mont(U256::from(CURVE_B3));
        for k in [1u64, 2, 7, 1_000_003] {
            let p = to_proj(&reference_mul(U256::from(k)));
            let doubled = to_affine(&point_doubling_a0(s, &p, b3));
            let added = to_affine(&point_addition_a0(s, &p, &p, b3));
            assert_eq!(doubled, added);
            assert_eq!(doubled, reference_mul(U256::from(2 * k)));
        }
    }

    #[test]
    fn complete_formulas_handle_neutral_element() {
        let s = bn254_arith();
        let b3 = s.to_mont(U256::from(CURVE_B3));
        let neutral = ProjPoint::new(U256::ZERO, s.to_mont(U256::from(1)), U256::ZERO);
        let p = to_proj(&Point::GENERATOR);

        assert_eq!(
            to_affine(&point_addition_a0(s, &neutral, &p, b3)),
            Point::GENERATOR
        );
        assert_eq!(
            to_affine(&point_addition_a0(s, &p, &neutral, b3)),
            Point::GENERATOR
        );
        assert_eq!(point_doubling_a0(s, &neutral, b3).z, U256::ZERO);
    }

    #[test]
    fn sentinel_short_circuits_to_sentinel() {
        let s = bn254_arith();
        let b3 = s.to_mont(U256::from(CURVE_B3));
        let p = to_proj(&Point::GENERATOR);

        assert_eq!(
            point_addition_a0(s, &ProjPoint::INFINITY, &p, b3),
            ProjPoint::INFINITY
        );
        assert_eq!(
            point_addition_a0(s, &p, &ProjPoint::INFINITY, b3),
            ProjPoint::INFINITY
        );
        assert_eq!(
            point_doubling_a0(s, &ProjPoint::INFINITY, b3),
            ProjPoint::INFINITY
        );
    }

    #[test]
    fn mixed_addition_matches_projective_addition() {
        let s = bn254_arith();
        let b3 = s.to_mont(U256::from(CURVE_B3));
        let p = reference_mul(U256::from(5));
        let q = reference_mul(U256::from(11));
        let mixed = point_addition_mixed_a0(
            s,
            s.to_mont(p.x),
            s.to_mont(p.y),
            s.to_mont(q.x),
            s.to_mont(q.y),
            b3,
        );
        let full = point_addition_a0(s, &to_proj(&p), &to_proj(&q), b3);
        assert_eq!(to_affine(&mixed), to_affine(&full));
        assert_eq!(to_affine(&mixed), reference_mul(U256::from(16)));
    }

    #[test]
    fn mul_by_zero_and_infinity() {
        assert_eq!(mul(&Point::GENERATOR, U256::ZERO), Point::INFINITY);
        assert_eq!(mul(&Point::INFINITY, U256::from(5)), Point::INFINITY);
        assert_eq!(mul(&Point::INFINITY, U256::MAX), Point::INFINITY);
    }

    #[test]
    fn mul_matches_repeated_addition() {
        let mut acc = Point::INFINITY;
        for k in 1..=20u64 {
            acc = add(&acc, &Point::GENERATOR);
            assert_eq!(mul(&Point::GENERATOR, U256::from(k)), acc, "k = {k}");
        }
    }

    #[rstest]
    #[case::order(CURVE_ORDER, Point::INFINITY)]
    #[case::order_plus_one(CURVE_ORDER + U256::from(1), Point::GENERATOR)]
    #[case::order_minus_one(CURVE_ORDER - U256::from(1), neg(&Point::GENERATOR))]
    #[case::two_order(CURVE_ORDER + CURVE_ORDER, Point::INFINITY)]
    fn mul_around_group_order(#[case] k: U256, #[case] expected: Point) {
        assert_eq!(mul(&Point::GENERATOR, k), expected);
    }

    #[test]
    fn mul_matches_reference_for_random_scalars() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..16 {
            let mut bytes = [0u8; 32];
            rng.fill_bytes(&mut bytes);
            let k = U256::from_be_bytes(bytes);
            assert_eq!(mul(&Point::GENERATOR, k), reference_mul(k), "k = {k:#x}");
        }
    }

    #[test]
    fn mul_of_non_generator_point() {
        let p = reference_mul(U256::from(3));
        let k = uint!(0x11138ce750fa15c2_U256);
        assert_eq!(mul(&p, k), reference_mul(U256::from(3) * k));
    }

    #[test]
    fn bytes_round_trip() {
        for p in [Point::INFINITY, Point::GENERATOR, Point::new(G2X, G2Y)] {
            assert_eq!(Point::from_be_bytes(&p.to_be_bytes()), p);
        }
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..16 {
            let mut bytes = [0u8; 32];
            rng.fill_bytes(&mut bytes);
            let k = U256::from_be_bytes(bytes);
            let p = mul(&Point::GENERATOR, k);
            assert!(validate(&p), "k = {k:#x}");
            assert_eq!(Point::from_be_bytes(&p.to_be_bytes()), p, "k = {k:#x}");
        }
        let encoded = Point::GENERATOR.to_be_bytes();
        assert_eq!(encoded[31], 1);
        assert_eq!(encoded[63], 2);
    }
}
