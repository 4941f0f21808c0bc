#![allow(dead_code)]

use soroban_sdk::{
    testutils::Address as _,
    token::{StellarAssetClient, TokenClient},
    Address, Env, String,
};
use mintswap_pool::{MintswapPool, MintswapPoolClient};
use mintswap_token::{MintPolicy, MintswapToken, MintswapTokenClient};

// Test constants
pub const NO_FEE: u32 = 0;
pub const DEFAULT_FEE_BPS: u32 = 30; // 0.30%

/// Pool plus the two assets it trades
pub struct PoolSetup<'a> {
    pub pool: MintswapPoolClient<'a>,
    /// Factory-style token (asset_a)
    pub token: MintswapTokenClient<'a>,
    pub token_admin: Address,
    /// Native-currency stand-in (asset_b)
    pub native: TokenClient<'a>,
    pub native_admin: StellarAssetClient<'a>,
}

impl<'a> PoolSetup<'a> {
    pub fn token_id(&self) -> Address {
        self.token.address.clone()
    }

    pub fn native_id(&self) -> Address {
        self.native.address.clone()
    }

    /// Give `who` both assets and approve the pool for the token side
    pub fn fund(&self, who: &Address, token_amount: i128, native_amount: i128) {
        if token_amount > 0 {
            self.token.mint(&self.token_admin, who, &token_amount);
        }
        if native_amount > 0 {
            self.native_admin.mint(who, &native_amount);
        }
        let allowance = self.token.allowance(who, &self.pool.address);
        self.token
            .approve(who, &self.pool.address, &(allowance + token_amount));
    }

    /// Fund `who` and deposit both amounts
    pub fn deposit(&self, who: &Address, token_amount: i128, native_amount: i128) -> i128 {
        self.fund(who, token_amount, native_amount);
        self.pool.add_liquidity(
            who,
            &self.token_id(),
            &self.native_id(),
            &token_amount,
            &native_amount,
        )
    }

    /// Pool's actual holdings of (token, native)
    pub fn held(&self) -> (i128, i128) {
        (
            self.token.balance(&self.pool.address),
            self.native.balance(&self.pool.address),
        )
    }
}

/// Unfunded pool over a fresh token and native asset
pub fn setup_pool(env: &Env, fee_bps: u32) -> PoolSetup<'_> {
    let token_admin = Address::generate(env);
    let token_id = env.register(MintswapToken, ());
    let token = MintswapTokenClient::new(env, &token_id);
    token.initialize(
        &token_admin,
        &18,
        &String::from_str(env, "Foo"),
        &String::from_str(env, "FOO"),
        &0,
        &MintPolicy::AdminOnly,
    );

    let native_id = env
        .register_stellar_asset_contract_v2(Address::generate(env))
        .address();

    let pool_id = env.register(MintswapPool, ());
    let pool = MintswapPoolClient::new(env, &pool_id);
    pool.initialize(&token_id, &native_id, &fee_bps);

    PoolSetup {
        pool,
        token,
        token_admin,
        native: TokenClient::new(env, &native_id),
        native_admin: StellarAssetClient::new(env, &native_id),
    }
}

/// Pool seeded with a first deposit from a fresh provider
pub fn setup_funded_pool(
    env: &Env,
    fee_bps: u32,
    token_amount: i128,
    native_amount: i128,
) -> (PoolSetup<'_>, Address) {
    let setup = setup_pool(env, fee_bps);
    let provider = Address::generate(env);
    setup.deposit(&provider, token_amount, native_amount);
    (setup, provider)
}
