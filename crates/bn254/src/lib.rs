//! # revm-bn254
//!
//! Arithmetic on the BN254 (alt_bn128) curve `y^2 = x^3 + 3`.
//!
//! - [`g1`]: G1 points with Montgomery field arithmetic and complete projective formulas, as
//!   used by the `ecAdd` and `ecMul` precompiles.
//! - [`field`], [`ext`], [`twist`] and [`line`]: extension fields, generic affine point
//!   operations over them, the sextic twist into [`Fq12`] and the Miller loop line function.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(feature = "std"), no_std)]

#[macro_use]
#[cfg(not(feature = "std"))]
extern crate alloc as std;

pub mod arith;
pub mod constants;
pub mod ext;
pub mod field;
pub mod g1;
pub mod line;
pub mod twist;

pub use arith::{bn254_arith, ModArith};
pub use ext::{point_add, point_double, point_multiply, PointExt};
pub use field::{FieldElement, Fq12, Fq2, FqExt};
pub use g1::{add, mul, validate, Point};
pub use line::{line_func, line_func_legacy};
pub use twist::{cast_to_fq12, twist};
