// Factory storage module for MintSwap

use soroban_sdk::{Address, Env, Vec};

use crate::error::FactoryError;
use crate::types::{DataKey, FactoryConfig, PoolRecord, TokenRecord};

// ============================================================
// TTL CONFIGURATION
// ============================================================

/// Persistent storage lifetime in ledgers (~1 year at 5s/ledger)
const PERSISTENT_LIFETIME: u32 = 6_307_200;
const PERSISTENT_BUMP: u32 = 6_307_200;

fn extend_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_BUMP, PERSISTENT_LIFETIME);
}

// ============================================================
// INITIALIZATION
// ============================================================

pub fn is_initialized(env: &Env) -> bool {
    env.storage().persistent().has(&DataKey::Initialized)
}

pub fn set_initialized(env: &Env) {
    env.storage().persistent().set(&DataKey::Initialized, &true);
    extend_ttl(env, &DataKey::Initialized);
}

// ============================================================
// CONFIG
// ============================================================

pub fn write_config(env: &Env, config: &FactoryConfig) {
    env.storage().persistent().set(&DataKey::Config, config);
    extend_ttl(env, &DataKey::Config);
}

pub fn read_config(env: &Env) -> Result<FactoryConfig, FactoryError> {
    let key = DataKey::Config;
    let config = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(FactoryError::NotInitialized)?;
    extend_ttl(env, &key);
    Ok(config)
}

// ============================================================
// TOKEN LOG
// ============================================================

pub fn read_token_count(env: &Env) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::TokenCount)
        .unwrap_or(0)
}

/// Append a record at the next index and return that index
pub fn append_token_record(env: &Env, record: &TokenRecord) -> u32 {
    let index = read_token_count(env);

    let key = DataKey::TokenByIndex(index);
    env.storage().persistent().set(&key, record);
    extend_ttl(env, &key);

    env.storage().persistent().set(&DataKey::TokenCount, &(index + 1));
    extend_ttl(env, &DataKey::TokenCount);

    let creator_key = DataKey::CreatorTokens(record.creator.clone());
    let mut owned: Vec<Address> = env
        .storage()
        .persistent()
        .get(&creator_key)
        .unwrap_or(Vec::new(env));
    owned.push_back(record.asset.clone());
    env.storage().persistent().set(&creator_key, &owned);
    extend_ttl(env, &creator_key);

    index
}

pub fn read_token_record(env: &Env, index: u32) -> Option<TokenRecord> {
    env.storage().persistent().get(&DataKey::TokenByIndex(index))
}

pub fn read_creator_tokens(env: &Env, creator: &Address) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::CreatorTokens(creator.clone()))
        .unwrap_or(Vec::new(env))
}

// ============================================================
// POOL REGISTRY
// ============================================================

/// Canonical pair key (sorted assets)
pub fn sort_assets(asset_a: &Address, asset_b: &Address) -> (Address, Address) {
    if asset_a < asset_b {
        (asset_a.clone(), asset_b.clone())
    } else {
        (asset_b.clone(), asset_a.clone())
    }
}

pub fn pool_exists(env: &Env, asset_a: &Address, asset_b: &Address) -> bool {
    let (a0, a1) = sort_assets(asset_a, asset_b);
    env.storage().persistent().has(&DataKey::Pool(a0, a1))
}

pub fn read_pool(env: &Env, asset_a: &Address, asset_b: &Address) -> Option<Address> {
    let (a0, a1) = sort_assets(asset_a, asset_b);
    env.storage().persistent().get(&DataKey::Pool(a0, a1))
}

pub fn write_pool(env: &Env, asset_a: &Address, asset_b: &Address, pool: &Address) {
    let (a0, a1) = sort_assets(asset_a, asset_b);

    let key = DataKey::Pool(a0.clone(), a1.clone());
    env.storage().persistent().set(&key, pool);
    extend_ttl(env, &key);

    let mut list = read_pool_list(env);
    list.push_back(PoolRecord {
        asset0: a0,
        asset1: a1,
        pool: pool.clone(),
    });
    env.storage().persistent().set(&DataKey::PoolList, &list);
    extend_ttl(env, &DataKey::PoolList);
}

pub fn read_pool_list(env: &Env) -> Vec<PoolRecord> {
    env.storage()
        .persistent()
        .get(&DataKey::PoolList)
        .unwrap_or(Vec::new(env))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::MintswapFactory;
    use soroban_sdk::{testutils::Address as _, String};

    fn record(env: &Env, creator: &Address, symbol: &str) -> TokenRecord {
        TokenRecord {
            index: 0,
            asset: Address::generate(env),
            creator: creator.clone(),
            name: String::from_str(env, "Foo"),
            symbol: String::from_str(env, symbol),
            initial_supply: 0,
        }
    }

    #[test]
    fn test_token_log_is_append_only() {
        let env = Env::default();
        let factory_id = env.register(MintswapFactory, ());
        let alice = Address::generate(&env);
        let bob = Address::generate(&env);

        env.as_contract(&factory_id, || {
            let first = record(&env, &alice, "FOO");
            let second = record(&env, &bob, "BAR");
            let third = record(&env, &alice, "FOO");

            assert_eq!(append_token_record(&env, &first), 0);
            assert_eq!(append_token_record(&env, &second), 1);
            assert_eq!(append_token_record(&env, &third), 2);

            assert_eq!(read_token_count(&env), 3);
            assert_eq!(read_token_record(&env, 1).unwrap().asset, second.asset);
            assert!(read_token_record(&env, 3).is_none());

            let owned = read_creator_tokens(&env, &alice);
            assert_eq!(owned.len(), 2);
            assert_eq!(owned.get(0).unwrap(), first.asset);
            assert_eq!(owned.get(1).unwrap(), third.asset);
        });
    }

    #[test]
    fn test_pool_key_is_order_insensitive() {
        let env = Env::default();
        let factory_id = env.register(MintswapFactory, ());
        let asset_a = Address::generate(&env);
        let asset_b = Address::generate(&env);
        let pool = Address::generate(&env);

        env.as_contract(&factory_id, || {
            write_pool(&env, &asset_a, &asset_b, &pool);

            assert!(pool_exists(&env, &asset_b, &asset_a));
            assert_eq!(read_pool(&env, &asset_b, &asset_a), Some(pool.clone()));
            assert_eq!(read_pool_list(&env).len(), 1);
        });
    }
}
