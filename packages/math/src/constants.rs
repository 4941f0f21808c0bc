// SPDX-License-Identifier: MIT
// MintSwap math constants
//
// Grouped by functionality; all amounts are raw token units.

// ============================================================
// FEE CONSTANTS
// ============================================================

/// Basis-point denominator (100% = 10_000 bps)
pub const BPS_DENOMINATOR: i128 = 10_000;

/// Maximum swap fee a pool may be configured with (10%)
pub const MAX_FEE_BPS: u32 = 1_000;

// ============================================================
// AMOUNT CONSTANTS
// ============================================================

/// Smallest output a swap may pay (anything below is dust)
pub const MIN_OUTPUT_AMOUNT: i128 = 1;
