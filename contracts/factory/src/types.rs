//! Factory type definitions

use soroban_sdk::{contracttype, Address, BytesN, String};

// ============================================================
// FACTORY CONFIG
// ============================================================

/// Factory configuration
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FactoryConfig {
    pub admin: Address,
    /// Code deployed by `create_token`
    pub token_wasm_hash: BytesN<32>,
    /// Code deployed by `create_pool`
    pub pool_wasm_hash: BytesN<32>,
}

// ============================================================
// TOKEN RECORD
// ============================================================

/// One entry of the append-only creation log
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenRecord {
    /// Position in the log (allocation order)
    pub index: u32,
    pub asset: Address,
    /// Owner holding mint rights on the asset
    pub creator: Address,
    pub name: String,
    pub symbol: String,
    /// Supply requested at creation; the asset itself starts at zero and
    /// the owner mints
    pub initial_supply: i128,
}

// ============================================================
// POOL RECORD
// ============================================================

/// Registered pool, assets sorted (asset0 < asset1)
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolRecord {
    pub asset0: Address,
    pub asset1: Address,
    pub pool: Address,
}

// ============================================================
// TOKEN MINT POLICY
// ============================================================

/// Wire-compatible mirror of `mintswap_token::MintPolicy`, passed to the
/// token's `initialize` on deployment
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MintPolicy {
    AdminOnly,
    Open,
}

// ============================================================
// STORAGE KEYS
// ============================================================

#[contracttype]
pub enum DataKey {
    /// Factory config
    Config,
    /// Initialization flag
    Initialized,
    /// Number of tokens created
    TokenCount,
    /// Token record by log index
    TokenByIndex(u32),
    /// Token addresses created for an owner
    CreatorTokens(Address),
    /// Pool address by sorted (asset0, asset1)
    Pool(Address, Address),
    /// All registered pools
    PoolList,
}
