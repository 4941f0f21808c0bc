// SPDX-License-Identifier: MIT
// Constant-product swap pricing

use soroban_sdk::Env;
use crate::constants::BPS_DENOMINATOR;
use crate::error::MathError;
use crate::wide::{checked_add, mul_div, require_non_negative};

/// Input amount that actually prices the trade once the pool fee is taken.
///
/// `effective = amount_in * (10_000 - fee_bps) / 10_000`
pub fn apply_fee(env: &Env, amount_in: i128, fee_bps: u32) -> Result<i128, MathError> {
    let fee = fee_bps as i128;
    if fee > BPS_DENOMINATOR {
        return Err(MathError::Overflow);
    }
    if fee == 0 {
        require_non_negative(amount_in)?;
        return Ok(amount_in);
    }
    mul_div(env, amount_in, BPS_DENOMINATOR - fee, BPS_DENOMINATOR)
}

/// Output of an exact-input constant-product swap.
///
/// `out = effective_in * reserve_out / (reserve_in + effective_in)`, rounded
/// down. Rounding the output down is what keeps
/// `(reserve_in + amount_in) * (reserve_out - out) >= reserve_in * reserve_out`.
///
/// Returns 0 when either reserve is empty; callers treat that as a pool
/// without liquidity.
pub fn get_amount_out(
    env: &Env,
    amount_in: i128,
    reserve_in: i128,
    reserve_out: i128,
    fee_bps: u32,
) -> Result<i128, MathError> {
    require_non_negative(reserve_in)?;
    require_non_negative(reserve_out)?;

    let effective_in = apply_fee(env, amount_in, fee_bps)?;
    if effective_in == 0 || reserve_in == 0 || reserve_out == 0 {
        return Ok(0);
    }

    let denominator = checked_add(reserve_in, effective_in)?;
    mul_div(env, effective_in, reserve_out, denominator)
}

/// Reserves after a swap: input side grows by the full `amount_in` (fee
/// included), output side shrinks by `amount_out`.
pub fn reserves_after_swap(
    reserve_in: i128,
    reserve_out: i128,
    amount_in: i128,
    amount_out: i128,
) -> Result<(i128, i128), MathError> {
    let new_in = checked_add(reserve_in, amount_in)?;
    let new_out = crate::wide::checked_sub(reserve_out, amount_out)?;
    Ok((new_in, new_out))
}
