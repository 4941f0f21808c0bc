// Pool storage module for MintSwap

use soroban_sdk::{Address, Env};

use crate::error::PoolError;
use crate::types::{DataKey, PoolConfig, PoolState};

// ============================================================
// TTL CONFIGURATION
// ============================================================

/// Persistent storage lifetime in ledgers (~1 year at 5s/ledger)
const PERSISTENT_LIFETIME: u32 = 6_307_200;
const PERSISTENT_THRESHOLD: u32 = PERSISTENT_LIFETIME - 17_280;

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
// CONFIG
// ============================================================

pub fn write_pool_config(env: &Env, config: &PoolConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn read_pool_config(env: &Env) -> Result<PoolConfig, PoolError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(PoolError::NotInitialized)
}

// ============================================================
// STATE
// ============================================================

/// Current reserves and share supply (zeroed before the first deposit)
pub fn read_pool_state(env: &Env) -> PoolState {
    env.storage()
        .instance()
        .get(&DataKey::State)
        .unwrap_or_default()
}

pub fn write_pool_state(env: &Env, state: &PoolState) {
    env.storage().instance().set(&DataKey::State, state);
}

// ============================================================
// SHARES
// ============================================================

pub fn read_shares(env: &Env, owner: &Address) -> i128 {
    let key = DataKey::Shares(owner.clone());
    match env.storage().persistent().get::<DataKey, i128>(&key) {
        Some(shares) => {
            extend_ttl(env, &key);
            shares
        }
        None => 0,
    }
}

pub fn write_shares(env: &Env, owner: &Address, shares: i128) {
    let key = DataKey::Shares(owner.clone());
    if shares == 0 {
        env.storage().persistent().remove(&key);
        return;
    }
    env.storage().persistent().set(&key, &shares);
    extend_ttl(env, &key);
}
