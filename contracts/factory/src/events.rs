//! Factory events

use soroban_sdk::{Address, BytesN, Env, String, Symbol};

/// Emitted when factory is initialized
pub fn emit_initialized(env: &Env, admin: &Address) {
    env.events().publish(
        (Symbol::new(env, "FactoryInit"),),
        (admin.clone(),),
    );
}

/// Emitted when a new asset is deployed; carries the address for indexers
pub fn emit_token_created(
    env: &Env,
    index: u32,
    asset: &Address,
    creator: &Address,
    name: &String,
    symbol: &String,
    initial_supply: i128,
) {
    env.events().publish(
        (Symbol::new(env, "TokenCreated"), creator.clone()),
        (index, asset.clone(), name.clone(), symbol.clone(), initial_supply),
    );
}

/// Emitted when a pool is added to the registry
pub fn emit_pool_registered(env: &Env, asset0: &Address, asset1: &Address, pool: &Address) {
    env.events().publish(
        (Symbol::new(env, "PoolRegistered"),),
        (asset0.clone(), asset1.clone(), pool.clone()),
    );
}

/// Emitted when admin is changed
pub fn emit_admin_updated(env: &Env, old_admin: &Address, new_admin: &Address) {
    env.events().publish(
        (Symbol::new(env, "AdminUpdated"),),
        (old_admin.clone(), new_admin.clone()),
    );
}

/// Emitted when a deployable code hash is replaced (`kind` is "token" or "pool")
pub fn emit_wasm_hash_updated(env: &Env, kind: &str, new_hash: &BytesN<32>) {
    env.events().publish(
        (Symbol::new(env, "WasmHashUpdated"), Symbol::new(env, kind)),
        (new_hash.clone(),),
    );
}
