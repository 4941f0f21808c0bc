// Token storage module for MintSwap

use soroban_sdk::{Address, Env};

use crate::error::TokenError;
use crate::types::{AllowanceKey, DataKey, MintPolicy, TokenMetadata};

// ============================================================
// TTL CONFIGURATION
// ============================================================

/// Persistent storage lifetime in ledgers (~1 year at 5s/ledger)
const PERSISTENT_LIFETIME: u32 = 6_307_200;
/// Bump when remaining TTL drops below this
const PERSISTENT_THRESHOLD: u32 = 6_307_200 - 17_280;

/// Instance storage lifetime (~30 days)
const INSTANCE_LIFETIME: u32 = 518_400;
const INSTANCE_THRESHOLD: u32 = INSTANCE_LIFETIME - 17_280;

fn extend_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_THRESHOLD, PERSISTENT_LIFETIME);
}

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_THRESHOLD, INSTANCE_LIFETIME);
}

// ============================================================
// INITIALIZATION
// ============================================================

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Initialized)
}

pub fn set_initialized(env: &Env) {
    env.storage().instance().set(&DataKey::Initialized, &true);
}

// ============================================================
// ADMIN / POLICY / METADATA
// ============================================================

pub fn write_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn read_admin(env: &Env) -> Result<Address, TokenError> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(TokenError::NotInitialized)
}

pub fn write_mint_policy(env: &Env, policy: MintPolicy) {
    env.storage().instance().set(&DataKey::MintPolicy, &policy);
}

pub fn read_mint_policy(env: &Env) -> Result<MintPolicy, TokenError> {
    env.storage()
        .instance()
        .get(&DataKey::MintPolicy)
        .ok_or(TokenError::NotInitialized)
}

pub fn write_metadata(env: &Env, metadata: &TokenMetadata) {
    env.storage().instance().set(&DataKey::Metadata, metadata);
}

pub fn read_metadata(env: &Env) -> Result<TokenMetadata, TokenError> {
    env.storage()
        .instance()
        .get(&DataKey::Metadata)
        .ok_or(TokenError::NotInitialized)
}

// ============================================================
// SUPPLY
// ============================================================

pub fn read_total_supply(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

pub fn write_total_supply(env: &Env, supply: i128) {
    env.storage().instance().set(&DataKey::TotalSupply, &supply);
}

// ============================================================
// BALANCES
// ============================================================

pub fn read_balance(env: &Env, id: &Address) -> i128 {
    let key = DataKey::Balance(id.clone());
    match env.storage().persistent().get::<DataKey, i128>(&key) {
        Some(balance) => {
            extend_ttl(env, &key);
            balance
        }
        None => 0,
    }
}

pub fn write_balance(env: &Env, id: &Address, amount: i128) {
    let key = DataKey::Balance(id.clone());
    env.storage().persistent().set(&key, &amount);
    extend_ttl(env, &key);
}

// ============================================================
// ALLOWANCES
// ============================================================

fn allowance_key(owner: &Address, spender: &Address) -> DataKey {
    DataKey::Allowance(AllowanceKey {
        owner: owner.clone(),
        spender: spender.clone(),
    })
}

pub fn read_allowance(env: &Env, owner: &Address, spender: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&allowance_key(owner, spender))
        .unwrap_or(0)
}

pub fn write_allowance(env: &Env, owner: &Address, spender: &Address, amount: i128) {
    let key = allowance_key(owner, spender);
    if amount == 0 {
        env.storage().persistent().remove(&key);
        return;
    }
    env.storage().persistent().set(&key, &amount);
    extend_ttl(env, &key);
}
