// SPDX-License-Identifier: MIT
// Math error type

/// Failure of a checked arithmetic step.
///
/// Contracts convert this into their own `#[contracterror]` enum so the
/// code surfaced to callers stays contract-specific.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MathError {
    /// Result exceeds `i128::MAX`
    Overflow,
    /// Result would go below zero
    Underflow,
    /// Denominator was zero
    DivisionByZero,
    /// An input amount was negative
    NegativeInput,
}
