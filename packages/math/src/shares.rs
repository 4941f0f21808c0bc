// SPDX-License-Identifier: MIT
// Liquidity share accounting

use soroban_sdk::Env;
use crate::error::MathError;
use crate::wide::{mul_div, sqrt_product};

/// Shares minted for the first deposit into an empty pool.
///
/// `isqrt(amount_a * amount_b)`: the same rule for every bootstrap deposit,
/// so the first depositor cannot pick an arbitrary share price.
pub fn initial_shares(env: &Env, amount_a: i128, amount_b: i128) -> Result<i128, MathError> {
    sqrt_product(env, amount_a, amount_b)
}

/// Shares minted for a deposit into a funded pool.
///
/// `total * min(amount_a / reserve_a, amount_b / reserve_b)`, each ratio
/// evaluated as a floor `mul_div`. The larger-proportioned side is not
/// refunded.
pub fn proportional_shares(
    env: &Env,
    amount_a: i128,
    amount_b: i128,
    reserve_a: i128,
    reserve_b: i128,
    total_shares: i128,
) -> Result<i128, MathError> {
    let by_a = mul_div(env, amount_a, total_shares, reserve_a)?;
    let by_b = mul_div(env, amount_b, total_shares, reserve_b)?;
    Ok(by_a.min(by_b))
}

/// Shares for any deposit: bootstrap when nothing is outstanding,
/// proportional otherwise.
pub fn shares_for_deposit(
    env: &Env,
    amount_a: i128,
    amount_b: i128,
    reserve_a: i128,
    reserve_b: i128,
    total_shares: i128,
) -> Result<i128, MathError> {
    if total_shares == 0 {
        initial_shares(env, amount_a, amount_b)
    } else {
        proportional_shares(env, amount_a, amount_b, reserve_a, reserve_b, total_shares)
    }
}

/// Reserve amounts redeemed by burning `shares` (rounded down, in the pool's
/// favour).
pub fn amounts_for_shares(
    env: &Env,
    shares: i128,
    reserve_a: i128,
    reserve_b: i128,
    total_shares: i128,
) -> Result<(i128, i128), MathError> {
    let amount_a = mul_div(env, shares, reserve_a, total_shares)?;
    let amount_b = mul_div(env, shares, reserve_b, total_shares)?;
    Ok((amount_a, amount_b))
}
