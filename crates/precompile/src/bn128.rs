//! alt_bn128 `ecAdd` and `ecMul` precompiles ([EIP-196](https://eips.ethereum.org/EIPS/eip-196)).
use crate::{
    utilities::right_pad, Address, PrecompileError, PrecompileOutput, PrecompileResult,
    PrecompileWithAddress,
};
use alloy_primitives::{Bytes, U256};
use bn254::{
    constants::{G1_LEN, SCALAR_LEN},
    g1, validate, Point,
};
use tracing::trace;

/// Tracing target for precompile rejections.
const TARGET: &str = "precompile::bn128";

/// `ecAdd` precompile.
pub mod add {
    use super::*;

    /// Precompile address.
    pub const ADDRESS: Address = crate::u64_to_address(6);

    /// Gas cost of `ecAdd` since Istanbul ([EIP-1108](https://eips.ethereum.org/EIPS/eip-1108)).
    pub const ISTANBUL_ADD_GAS_COST: u64 = 150;

    /// `ecAdd` with the Istanbul gas schedule.
    pub const ISTANBUL: PrecompileWithAddress =
        PrecompileWithAddress(ADDRESS, |input, gas_limit| {
            run_add(input, ISTANBUL_ADD_GAS_COST, gas_limit)
        });

    /// Gas cost of `ecAdd` from Byzantium until Istanbul.
    pub const BYZANTIUM_ADD_GAS_COST: u64 = 500;

    /// `ecAdd` with the Byzantium gas schedule.
    pub const BYZANTIUM: PrecompileWithAddress =
        PrecompileWithAddress(ADDRESS, |input, gas_limit| {
            run_add(input, BYZANTIUM_ADD_GAS_COST, gas_limit)
        });
}

/// `ecMul` precompile.
pub mod mul {
    use super::*;

    /// Precompile address.
    pub const ADDRESS: Address = crate::u64_to_address(7);

    /// Gas cost of `ecMul` since Istanbul ([EIP-1108](https://eips.ethereum.org/EIPS/eip-1108)).
    pub const ISTANBUL_MUL_GAS_COST: u64 = 6_000;

    /// `ecMul` with the Istanbul gas schedule.
    pub const ISTANBUL: PrecompileWithAddress =
        PrecompileWithAddress(ADDRESS, |input, gas_limit| {
            run_mul(input, ISTANBUL_MUL_GAS_COST, gas_limit)
        });

    /// Gas cost of `ecMul` from Byzantium until Istanbul.
    pub const BYZANTIUM_MUL_GAS_COST: u64 = 40_000;

    /// `ecMul` with the Byzantium gas schedule.
    pub const BYZANTIUM: PrecompileWithAddress =
        PrecompileWithAddress(ADDRESS, |input, gas_limit| {
            run_mul(input, BYZANTIUM_MUL_GAS_COST, gas_limit)
        });
}

/// Input length for the add operation.
/// `ADD` takes two uncompressed G1 points (64 bytes each).
pub const ADD_INPUT_LEN: usize = 2 * G1_LEN;

/// Input length for the multiplication operation.
/// `MUL` takes an uncompressed G1 point (64 bytes) and a scalar (32 bytes). The input is padded
/// to the same 128 byte frame as `ADD` and the trailing 32 bytes are ignored.
pub const MUL_INPUT_LEN: usize = 2 * G1_LEN;

/// Reads a G1 point from the first 64 bytes of `input`.
///
/// Returns `None` if the input is shorter than 64 bytes or the point is not valid.
#[inline]
pub fn read_point(input: &[u8]) -> Option<Point> {
    let point = Point::from_be_bytes(input.first_chunk::<G1_LEN>()?);
    validate(&point).then_some(point)
}

/// Adds the two points encoded in `input` and writes the encoded sum to `output`.
///
/// The input is zero-padded or truncated to [`ADD_INPUT_LEN`] bytes. Returns `false` if either
/// point is invalid, in which case `output` is left untouched.
pub fn bn254_add_precompile(input: &[u8], output: &mut [u8; G1_LEN]) -> bool {
    let input = right_pad::<ADD_INPUT_LEN>(input);

    let (Some(p1), Some(p2)) = (read_point(&input[..]), read_point(&input[G1_LEN..])) else {
        return false;
    };

    *output = g1::add(&p1, &p2).to_be_bytes();
    true
}

/// Multiplies the point encoded in `input` by the scalar following it and writes the encoded
/// product to `output`.
///
/// The input is zero-padded or truncated to [`MUL_INPUT_LEN`] bytes. Returns `false` if the
/// point is invalid, in which case `output` is left untouched. The scalar is not reduced.
pub fn bn254_mul_precompile(input: &[u8], output: &mut [u8; G1_LEN]) -> bool {
    let input = right_pad::<MUL_INPUT_LEN>(input);

    let Some(p) = read_point(&input[..]) else {
        return false;
    };
    let c = U256::from_be_slice(&input[G1_LEN..G1_LEN + SCALAR_LEN]);

    *output = g1::mul(&p, c).to_be_bytes();
    true
}

/// Fails with [`PrecompileError::OutOfGas`] if `gas_cost` exceeds `gas_limit`.
#[inline]
fn check_gas(precompile: &str, gas_cost: u64, gas_limit: u64) -> Result<(), PrecompileError> {
    if gas_cost > gas_limit {
        trace!(target: TARGET, precompile, gas_cost, gas_limit, "out of gas");
        return Err(PrecompileError::OutOfGas);
    }
    Ok(())
}

/// Runs `ecAdd`, charging `gas_cost`.
pub fn run_add(input: &[u8], gas_cost: u64, gas_limit: u64) -> PrecompileResult {
    check_gas("ecAdd", gas_cost, gas_limit)?;

    let mut output = [0u8; G1_LEN];
    if !bn254_add_precompile(input, &mut output) {
        trace!(target: TARGET, input_len = input.len(), "ecAdd invalid point");
        return Err(PrecompileError::Bn128AffineGFailedToCreate);
    }

    Ok(PrecompileOutput::new(
        gas_cost,
        Bytes::copy_from_slice(&output),
    ))
}

/// Runs `ecMul`, charging `gas_cost`.
pub fn run_mul(input: &[u8], gas_cost: u64, gas_limit: u64) -> PrecompileResult {
    check_gas("ecMul", gas_cost, gas_limit)?;

    let mut output = [0u8; G1_LEN];
    if !bn254_mul_precompile(input, &mut output) {
        trace!(target: TARGET, input_len = input.len(), "ecMul invalid point");
        return Err(PrecompileError::Bn128AffineGFailedToCreate);
    }

    Ok(PrecompileOutput::new(
        gas_cost,
        Bytes::copy_from_slice(&output),
    ))
}
