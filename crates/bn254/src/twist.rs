//! Maps from G2 and G1 into points over [`Fq12`].
//!
//! G2 lives on the sextic twist `y^2 = x^3 + 3 / (9 + i)` over [`Fq2`]. [`twist`] carries it onto
//! `y^2 = x^3 + 3` over [`Fq12`], where G1 points can be embedded with [`cast_to_fq12`]. Both
//! share a curve there, which is what the line function needs.
use crate::{
    constants::{
        CURVE_B, G2_GENERATOR_X_IM, G2_GENERATOR_X_RE, G2_GENERATOR_Y_IM, G2_GENERATOR_Y_RE,
        TWIST_XI,
    },
    ext::PointExt,
    field::{FieldElement, Fq12, Fq2},
    g1::Point,
};
use alloy_primitives::U256;
use once_cell::race::OnceBox;
use std::boxed::Box;

/// `w`, the generator of [`Fq12`] over the base field.
pub fn omega() -> &'static Fq12 {
    static OMEGA: OnceBox<Fq12> = OnceBox::new();
    OMEGA.get_or_init(|| {
        let mut coeffs = [U256::ZERO; 12];
        coeffs[1] = U256::from(1);
        Box::new(Fq12::new(coeffs))
    })
}

/// The G2 generator.
pub fn g2_generator() -> PointExt<Fq2> {
    PointExt::new(
        Fq2::new([G2_GENERATOR_X_RE, G2_GENERATOR_X_IM]),
        Fq2::new([G2_GENERATOR_Y_RE, G2_GENERATOR_Y_IM]),
    )
}

/// `b / ξ`, the constant term of the twisted curve.
pub fn twist_b() -> Fq2 {
    let xi = Fq2::new([U256::from(TWIST_XI[0]), U256::from(TWIST_XI[1])]);
    Fq2::from_u64(CURVE_B) / xi
}

/// Maps `a + b·i` into `Fp[X] / (X^2 - 18X + 82)` and then into [`Fq12`] through `X = w^6`.
///
/// `i = X - 9`, so the image is `(a - 9b) + b·w^6`.
fn fq2_to_fq12(c: &Fq2) -> Fq12 {
    let [a, b] = c.coeffs();
    let mut coeffs = [U256::ZERO; 12];
    coeffs[0] = a;
    coeffs[6] = b;
    Fq12::new(coeffs) - Fq12::from_base(b) * Fq12::from_u64(TWIST_XI[0])
}

/// Maps a G2 point onto the curve `y^2 = x^3 + 3` over [`Fq12`].
///
/// The x coordinate is scaled by `w^2` and the y coordinate by `w^3`. The identity maps to the
/// identity.
pub fn twist(pt: &PointExt<Fq2>) -> PointExt<Fq12> {
    if pt.is_identity() {
        return PointExt::identity();
    }

    let w = *omega();
    let nx = fq2_to_fq12(&pt.x);
    let ny = fq2_to_fq12(&pt.y);

    PointExt::new(nx * w.pow(2), ny * w.pow(3))
}

/// Embeds a G1 point into [`Fq12`] by placing each coordinate in the constant slot.
pub fn cast_to_fq12(pt: &Point) -> PointExt<Fq12> {
    PointExt::new(Fq12::from_base(pt.x), Fq12::from_base(pt.y))
}
