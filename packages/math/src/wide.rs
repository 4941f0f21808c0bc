// SPDX-License-Identifier: MIT
// Checked amount arithmetic with 256-bit intermediates

use soroban_sdk::{Env, U256};
use crate::error::MathError;

/// Reject negative amounts; every ledger quantity is unsigned in meaning.
#[inline]
pub fn require_non_negative(x: i128) -> Result<u128, MathError> {
    if x < 0 {
        return Err(MathError::NegativeInput);
    }
    Ok(x as u128)
}

#[inline]
pub fn u128_to_i128(x: u128) -> Result<i128, MathError> {
    if x > i128::MAX as u128 {
        return Err(MathError::Overflow);
    }
    Ok(x as i128)
}

#[inline]
pub fn checked_add(a: i128, b: i128) -> Result<i128, MathError> {
    a.checked_add(b).ok_or(MathError::Overflow)
}

/// Subtraction that refuses to produce a negative amount
#[inline]
pub fn checked_sub(a: i128, b: i128) -> Result<i128, MathError> {
    match a.checked_sub(b) {
        Some(r) if r >= 0 => Ok(r),
        _ => Err(MathError::Underflow),
    }
}

/// Calculates `floor(a * b / denominator)` without intermediate overflow.
///
/// The product is formed in 256 bits; only the quotient has to fit in
/// `i128`.
pub fn mul_div(env: &Env, a: i128, b: i128, denominator: i128) -> Result<i128, MathError> {
    let a = require_non_negative(a)?;
    let b = require_non_negative(b)?;
    let den = require_non_negative(denominator)?;
    if den == 0 {
        return Err(MathError::DivisionByZero);
    }

    let product = U256::from_u128(env, a).mul(&U256::from_u128(env, b));
    let quotient = product.div(&U256::from_u128(env, den));

    let q = quotient.to_u128().ok_or(MathError::Overflow)?;
    u128_to_i128(q)
}

/// Full-width product of two amounts (e.g. the pool invariant `k`)
pub fn wide_product(env: &Env, a: i128, b: i128) -> Result<U256, MathError> {
    let a = require_non_negative(a)?;
    let b = require_non_negative(b)?;
    Ok(U256::from_u128(env, a).mul(&U256::from_u128(env, b)))
}

/// Integer square root of `a * b`, rounded down.
///
/// Newton iteration over the 256-bit product, starting from
/// `max(a, b)` which is always `>= sqrt(a * b)` so the sequence decreases
/// monotonically to the floor root.
pub fn sqrt_product(env: &Env, a: i128, b: i128) -> Result<i128, MathError> {
    let n = wide_product(env, a, b)?;
    if a == 0 || b == 0 {
        return Ok(0);
    }

    let mut x: u128 = (a.max(b)) as u128;
    loop {
        let q = n
            .div(&U256::from_u128(env, x))
            .to_u128()
            .ok_or(MathError::Overflow)?;
        // x < 2^127 and q <= x, so the sum stays below 2^128
        let y = (x + q) / 2;
        if y >= x {
            break;
        }
        x = y;
    }
    u128_to_i128(x)
}
