//! Miller loop line function.
use crate::{ext::PointExt, field::FieldElement};

/// Evaluates the line through `p1` and `p2` at `t`.
///
/// Uses the secant through two points with distinct x, the tangent when `p1 == p2`, and
/// the vertical line `x = p1.x` otherwise. Neither `p1` nor `p2` may be the identity.
pub fn line_func<F: FieldElement>(p1: &PointExt<F>, p2: &PointExt<F>, t: &PointExt<F>) -> F {
    if p1.x != p2.x {
        let m = (p2.y - p1.y) / (p2.x - p1.x);
        (t.x - p1.x) * m - (t.y - p1.y)
    } else if p1.y == p2.y {
        tangent(p1, t)
    } else {
        t.x - p1.x
    }
}

/// Same as [`line_func`] but the secant slope is computed as
/// `(p2.y - p1.y) / (p2.x - p1.y)`.
///
/// This reproduces the slope used by existing callers of this primitive. It does not give a
/// line through `p1` and `p2` and differs from [`line_func`] whenever `p1.x != p2.x`. The
/// tangent and vertical branches are identical.
pub fn line_func_legacy<F: FieldElement>(
    p1: &PointExt<F>,
    p2: &PointExt<F>,
    t: &PointExt<F>,
) -> F {
    if p1.x != p2.x {
        let m = (p2.y - p1.y) / (p2.x - p1.y);
        (t.x - p1.x) * m - (t.y - p1.y)
    } else if p1.y == p2.y {
        tangent(p1, t)
    } else {
        t.x - p1.x
    }
}

/// Tangent at `p` evaluated at `t`, slope `3x² / 2y`.
fn tangent<F: FieldElement>(p: &PointExt<F>, t: &PointExt<F>) -> F {
    let m = (p.x.pow(2) * F::from_u64(3)) / (p.y * F::from_u64(2));
    (t.x - p.x) * m - (t.y - p.y)
}
