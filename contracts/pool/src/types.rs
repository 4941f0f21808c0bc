// Pool Types

use soroban_sdk::{contracttype, Address};

// ============================================================
// POOL CONFIGURATION
// ============================================================

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolConfig {
    /// Token side of the pair
    pub asset_a: Address,
    /// Native-currency side (the native asset contract address)
    pub asset_b: Address,
    /// Swap fee in basis points (0 = fee-less)
    pub fee_bps: u32,
}

// ============================================================
// POOL STATE
// ============================================================

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PoolStatus {
    /// No liquidity has ever been added
    Uninitialized,
    /// Funded; terminal
    Active,
}

/// Reserves, share supply and status, always written together
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolState {
    pub reserve_a: i128,
    pub reserve_b: i128,
    pub total_shares: i128,
    pub status: PoolStatus,
}

impl Default for PoolState {
    fn default() -> Self {
        Self {
            reserve_a: 0,
            reserve_b: 0,
            total_shares: 0,
            status: PoolStatus::Uninitialized,
        }
    }
}

// ============================================================
// SWAP RESULT
// ============================================================

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapResult {
    pub amount_in: i128,
    pub amount_out: i128,
    /// Reserves after the swap
    pub reserve_a: i128,
    pub reserve_b: i128,
}

// ============================================================
// STORAGE KEYS
// ============================================================

#[contracttype]
pub enum DataKey {
    Initialized,
    Config,
    State,
    /// Share balance per provider
    Shares(Address),
}
