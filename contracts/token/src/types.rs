//! Token type definitions

use soroban_sdk::{contracttype, Address, String};

// ============================================================
// METADATA
// ============================================================

/// Immutable token description, fixed at initialization
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
}

// ============================================================
// MINT POLICY
// ============================================================

/// Who may call `mint`
/// - AdminOnly: factory-created tokens, only the owner mints
/// - Open: faucet-style sample token, anyone mints
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
#[derive(Clone)]
pub struct AllowanceKey {
    pub owner: Address,
    pub spender: Address,
}

#[contracttype]
pub enum DataKey {
    /// Initialization flag
    Initialized,
    /// Mint authority
    Admin,
    /// Mint policy
    MintPolicy,
    /// Name / symbol / decimals
    Metadata,
    /// Total minted supply
    TotalSupply,
    /// Balance by holder
    Balance(Address),
    /// Allowance by (owner, spender)
    Allowance(AllowanceKey),
}
