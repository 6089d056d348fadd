//! Affine point arithmetic over extension fields.
//!
//! The same textbook formulas serve G2 points over [`Fq2`](crate::Fq2) and twisted points over
//! [`Fq12`](crate::Fq12). The identity is represented by `(0, 0)`.
use crate::field::FieldElement;
use alloy_primitives::U256;

/// Affine point with coordinates in an extension field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointExt<F> {
    /// x coordinate
    pub x: F,
    /// y coordinate
    pub y: F,
}

impl<F: FieldElement> PointExt<F> {
    /// Creates a point from its affine coordinates. No curve check is done.
    pub const fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// The identity `(0, 0)`.
    pub fn identity() -> Self {
        Self::new(F::zero(), F::zero())
    }

    /// Returns `true` if both coordinates are zero.
    pub fn is_identity(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }

    /// Returns `true` if the point satisfies `y^2 == x^3 + b`.
    pub fn is_on_curve(&self, b: F) -> bool {
        self.y.pow(2) == self.x.pow(3) + b
    }
}

/// Doubles a point: `λ = 3x² / 2y`, `x' = λ² - 2x`, `y' = -λx' + λx - y`.
pub fn point_double<F: FieldElement>(p: &PointExt<F>) -> PointExt<F> {
    let lambda = (p.x.pow(2) * F::from_u64(3)) / (p.y * F::from_u64(2));
    let new_x = lambda.pow(2) - p.x * F::from_u64(2);
    let new_y = -lambda * new_x + lambda * p.x - p.y;

    PointExt::new(new_x, new_y)
}

/// Adds two points.
///
/// Equal points are doubled. Points sharing an x coordinate but not a y coordinate sum to the
/// identity. Identity operands are not special-cased.
pub fn point_add<F: FieldElement>(p1: &PointExt<F>, p2: &PointExt<F>) -> PointExt<F> {
    if p1 == p2 {
        return point_double(p1);
    }
    if p1.x == p2.x {
        return PointExt::identity();
    }

    let lambda = (p2.y - p1.y) / (p2.x - p1.x);
    let new_x = lambda.pow(2) - p1.x - p2.x;
    let new_y = -lambda * new_x + lambda * p2.x - p2.y;

    PointExt::new(new_x, new_y)
}

/// Multiplies a point by an integer using recursive double-and-add.
pub fn point_multiply<F: FieldElement>(pt: &PointExt<F>, n: U256) -> PointExt<F> {
    if n.is_zero() {
        PointExt::identity()
    } else if n == U256::from(1) {
        *pt
    } else if !n.bit(0) {
        point_multiply(&point_double(pt), n >> 1)
    } else {
        point_add(&point_multiply(&point_double(pt), n >> 1), pt)
    }
}
