//! Constants for the BN254 curve and its encodings.
use alloy_primitives::{uint, U256};

/// Field element length
pub const FQ_LEN: usize = 32;

/// Scalar length
pub const SCALAR_LEN: usize = 32;

/// G1 point length (x, y coordinates)
pub const G1_LEN: usize = 2 * FQ_LEN;

/// Base field modulus `p`.
pub const FIELD_MODULUS: U256 =
    uint!(0x30644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd47_U256);

/// Order `r` of the G1 group.
pub const CURVE_ORDER: U256 =
    uint!(0x30644e72e131a029b85045b68181585d2833e84879b9709143e1f593f0000001_U256);

/// Coefficient `b` of `y^2 = x^3 + b`.
pub const CURVE_B: u64 = 3;

/// `3 * b`, used by the complete addition formulas for `a = 0` curves.
pub const CURVE_B3: u64 = 3 * CURVE_B;

/// x coordinate of the G1 generator.
pub const G1_GENERATOR_X: U256 = uint!(1_U256);

/// y coordinate of the G1 generator.
pub const G1_GENERATOR_Y: U256 = uint!(2_U256);

/// Non-leading coefficients of the `Fq12` modulus `w^12 - 18 w^6 + 82`.
pub const FQ12_MODULUS_COEFFS: [i64; 12] = [82, 0, 0, 0, 0, 0, -18, 0, 0, 0, 0, 0];

/// Non-leading coefficients of the `Fq2` modulus `i^2 + 1`.
pub const FQ2_MODULUS_COEFFS: [i64; 2] = [1, 0];

/// Real part of the x coordinate of the G2 generator.
pub const G2_GENERATOR_X_RE: U256 =
    uint!(0x1800deef121f1e76426a00665e5c4479674322d4f75edadd46debd5cd992f6ed_U256);

/// Imaginary part of the x coordinate of the G2 generator.
pub const G2_GENERATOR_X_IM: U256 =
    uint!(0x198e9393920d483a7260bfb731fb5d25f1aa493335a9e71297e485b7aef312c2_U256);

/// Real part of the y coordinate of the G2 generator.
pub const G2_GENERATOR_Y_RE: U256 =
    uint!(0x12c85ea5db8c6deb4aab71808dcb408fe3d1e7690c43d37b4ce6cc0166fa7daa_U256);

/// Imaginary part of the y coordinate of the G2 generator.
pub const G2_GENERATOR_Y_IM: U256 =
    uint!(0x090689d0585ff075ec9e99ad690c3395bc4b313370b38ef355acdadcd122975b_U256);

/// `ξ = 9 + i`, the non-residue defining the sextic twist `y^2 = x^3 + b / ξ`.
pub const TWIST_XI: [u64; 2] = [9, 1];
