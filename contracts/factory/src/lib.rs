#![no_std]

//! # MintSwap Factory
//!
//! Asset creation and pool registry.
//!
//! ## Responsibilities:
//! 1. Deploy new fungible assets (one fresh address per call)
//! 2. Keep the append-only creation log
//! 3. Map asset pairs to pools (order-insensitive, no duplicates)
//! 4. Deploy pools from the configured pool code

use soroban_sdk::{
    contract, contractimpl, log, vec, xdr::ToXdr, Address, BytesN, Env, IntoVal, String,
    Symbol, Vec,
};

use mintswap_math::MAX_FEE_BPS;

mod error;
mod events;
mod storage;
mod types;

pub use error::{FactoryError, FactoryErrorMsg};
use events::*;
use storage::*;
pub use types::*;

// ============================================================
// CONSTANTS
// ============================================================

/// Decimals of every factory-created asset
pub const TOKEN_DECIMALS: u32 = 18;

/// Name / symbol length bounds (bytes)
pub const MAX_NAME_LEN: u32 = 32;
pub const MAX_SYMBOL_LEN: u32 = 12;

// ============================================================
// CONTRACT
// ============================================================

#[contract]
pub struct MintswapFactory;

#[contractimpl]
impl MintswapFactory {
    // ========================================================
    // INITIALIZATION
    // ========================================================

    /// Initialize factory
    ///
    /// # Arguments
    /// * `admin` - Registry admin
    /// * `token_wasm_hash` - Uploaded `MintswapToken` code
    /// * `pool_wasm_hash` - Uploaded `MintswapPool` code
    pub fn initialize(
        env: Env,
        admin: Address,
        token_wasm_hash: BytesN<32>,
        pool_wasm_hash: BytesN<32>,
    ) -> Result<(), FactoryError> {
        admin.require_auth();

        if is_initialized(&env) {
            return Err(FactoryError::AlreadyInitialized);
        }

        let config = FactoryConfig {
            admin: admin.clone(),
            token_wasm_hash,
            pool_wasm_hash,
        };
        write_config(&env, &config);
        set_initialized(&env);

        emit_initialized(&env, &admin);

        Ok(())
    }

    // ========================================================
    // ASSET FACTORY
    // ========================================================

    /// Deploy a new asset owned by `owner`
    ///
    /// The asset starts with zero supply and `owner` as its only minter.
    /// Identical parameters still yield a fresh asset: the deployment salt
    /// comes from the creation counter.
    ///
    /// # Returns
    /// Address of the new asset
    pub fn create_token(
        env: Env,
        owner: Address,
        name: String,
        symbol: String,
        initial_supply: i128,
    ) -> Result<Address, FactoryError> {
        owner.require_auth();

        let config = read_config(&env)?;

        if name.len() == 0 || name.len() > MAX_NAME_LEN {
            return Err(FactoryError::InvalidParameters);
        }
        if symbol.len() == 0 || symbol.len() > MAX_SYMBOL_LEN {
            return Err(FactoryError::InvalidParameters);
        }
        if initial_supply < 0 {
            return Err(FactoryError::InvalidParameters);
        }

        let index = read_token_count(&env);
        let asset = Self::deploy_token(&env, &config, index);

        let _: () = env.invoke_contract(
            &asset,
            &Symbol::new(&env, "initialize"),
            vec![
                &env,
                owner.clone().into_val(&env),
                TOKEN_DECIMALS.into_val(&env),
                name.clone().into_val(&env),
                symbol.clone().into_val(&env),
                0i128.into_val(&env),
                MintPolicy::AdminOnly.into_val(&env),
            ],
        );

        let record = TokenRecord {
            index,
            asset: asset.clone(),
            creator: owner.clone(),
            name: name.clone(),
            symbol: symbol.clone(),
            initial_supply,
        };
        append_token_record(&env, &record);

        log!(&env, "create_token", index, asset, owner);
        emit_token_created(&env, index, &asset, &owner, &name, &symbol, initial_supply);

        Ok(asset)
    }

    // ========================================================
    // POOL REGISTRY
    // ========================================================

    /// Register an already deployed pool for a pair (admin)
    pub fn register_pool(
        env: Env,
        asset_a: Address,
        asset_b: Address,
        pool: Address,
    ) -> Result<(), FactoryError> {
        let config = read_config(&env)?;
        config.admin.require_auth();

        Self::register(&env, &asset_a, &asset_b, &pool)
    }

    /// Deploy, initialize and register a pool (admin)
    ///
    /// `asset_b` is passed to the pool as its native side.
    pub fn create_pool(
        env: Env,
        asset_a: Address,
        asset_b: Address,
        fee_bps: u32,
    ) -> Result<Address, FactoryError> {
        let config = read_config(&env)?;
        config.admin.require_auth();

        if asset_a == asset_b {
            return Err(FactoryError::InvalidPair);
        }
        if fee_bps > MAX_FEE_BPS {
            return Err(FactoryError::InvalidFee);
        }
        if pool_exists(&env, &asset_a, &asset_b) {
            return Err(FactoryError::PoolAlreadyExists);
        }

        let pool = Self::deploy_pool(&env, &config, &asset_a, &asset_b);

        let _: () = env.invoke_contract(
            &pool,
            &Symbol::new(&env, "initialize"),
            vec![
                &env,
                asset_a.clone().into_val(&env),
                asset_b.clone().into_val(&env),
                fee_bps.into_val(&env),
            ],
        );

        Self::register(&env, &asset_a, &asset_b, &pool)?;

        Ok(pool)
    }

    // ========================================================
    // READ FUNCTIONS
    // ========================================================

    pub fn get_config(env: Env) -> Result<FactoryConfig, FactoryError> {
        read_config(&env)
    }

    /// Number of assets created so far
    pub fn get_token_count(env: Env) -> u32 {
        read_token_count(&env)
    }

    /// Creation record at `index` (allocation order)
    pub fn get_token(env: Env, index: u32) -> Result<TokenRecord, FactoryError> {
        read_token_record(&env, index).ok_or(FactoryError::TokenNotFound)
    }

    /// Full creation log, oldest first
    pub fn get_all_tokens(env: Env) -> Vec<TokenRecord> {
        let mut tokens = Vec::new(&env);
        for index in 0..read_token_count(&env) {
            if let Some(record) = read_token_record(&env, index) {
                tokens.push_back(record);
            }
        }
        tokens
    }

    /// Assets created for `creator`, oldest first
    pub fn get_tokens_by_creator(env: Env, creator: Address) -> Vec<Address> {
        read_creator_tokens(&env, &creator)
    }

    /// Pool for a pair, in either order
    pub fn get_pool(env: Env, asset_a: Address, asset_b: Address) -> Option<Address> {
        read_pool(&env, &asset_a, &asset_b)
    }

    pub fn is_pool_registered(env: Env, asset_a: Address, asset_b: Address) -> bool {
        pool_exists(&env, &asset_a, &asset_b)
    }

    pub fn get_all_pools(env: Env) -> Vec<PoolRecord> {
        read_pool_list(&env)
    }

    pub fn get_pool_count(env: Env) -> u32 {
        read_pool_list(&env).len()
    }

    // ========================================================
    // ADMIN FUNCTIONS
    // ========================================================

    /// Transfer admin role to new address
    /// Both old and new admin must authorize
    pub fn set_admin(env: Env, new_admin: Address) -> Result<(), FactoryError> {
        let mut config = read_config(&env)?;
        config.admin.require_auth();
        new_admin.require_auth();

        emit_admin_updated(&env, &config.admin, &new_admin);

        config.admin = new_admin;
        write_config(&env, &config);
        Ok(())
    }

    /// Update asset code for future `create_token` calls
    pub fn set_token_wasm_hash(env: Env, new_hash: BytesN<32>) -> Result<(), FactoryError> {
        let mut config = read_config(&env)?;
        config.admin.require_auth();

        emit_wasm_hash_updated(&env, "token", &new_hash);

        config.token_wasm_hash = new_hash;
        write_config(&env, &config);
        Ok(())
    }

    /// Update pool code for future `create_pool` calls
    pub fn set_pool_wasm_hash(env: Env, new_hash: BytesN<32>) -> Result<(), FactoryError> {
        let mut config = read_config(&env)?;
        config.admin.require_auth();

        emit_wasm_hash_updated(&env, "pool", &new_hash);

        config.pool_wasm_hash = new_hash;
        write_config(&env, &config);
        Ok(())
    }

    // ========================================================
    // INTERNAL HELPERS
    // ========================================================

    fn register(
        env: &Env,
        asset_a: &Address,
        asset_b: &Address,
        pool: &Address,
    ) -> Result<(), FactoryError> {
        if asset_a == asset_b {
            return Err(FactoryError::InvalidPair);
        }
        if pool_exists(env, asset_a, asset_b) {
            return Err(FactoryError::PoolAlreadyExists);
        }

        write_pool(env, asset_a, asset_b, pool);

        let (asset0, asset1) = sort_assets(asset_a, asset_b);
        log!(env, "register_pool", asset0, asset1, pool.clone());
        emit_pool_registered(env, &asset0, &asset1, pool);

        Ok(())
    }

    fn deploy_token(env: &Env, config: &FactoryConfig, index: u32) -> Address {
        // Salt from the allocation counter, never from the content
        let salt = env.crypto().sha256(&index.to_xdr(env));

        env.deployer()
            .with_current_contract(salt)
            .deploy_v2(config.token_wasm_hash.clone(), ())
    }

    fn deploy_pool(
        env: &Env,
        config: &FactoryConfig,
        asset_a: &Address,
        asset_b: &Address,
    ) -> Address {
        // One pool per pair: salt from the sorted pair
        let (asset0, asset1) = sort_assets(asset_a, asset_b);
        let mut salt_data = asset0.to_xdr(env);
        salt_data.append(&asset1.to_xdr(env));
        let salt = env.crypto().sha256(&salt_data);

        env.deployer()
            .with_current_contract(salt)
            .deploy_v2(config.pool_wasm_hash.clone(), ())
    }
}
