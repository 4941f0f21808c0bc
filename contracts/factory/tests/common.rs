#![allow(dead_code)]

use soroban_sdk::{testutils::Address as _, Address, BytesN, Env, String};
use mintswap_factory::{MintswapFactory, MintswapFactoryClient};

/// Factory with placeholder code hashes; deployment paths are covered by
/// `test_deploy.rs` under the `wasm-tests` feature
pub fn setup_factory(env: &Env) -> (MintswapFactoryClient<'_>, Address) {
    let admin = Address::generate(env);
    let factory_id = env.register(MintswapFactory, ());
    let client = MintswapFactoryClient::new(env, &factory_id);
    let token_wasm_hash = BytesN::from_array(env, &[0u8; 32]);
    let pool_wasm_hash = BytesN::from_array(env, &[1u8; 32]);
    client.initialize(&admin, &token_wasm_hash, &pool_wasm_hash);
    (client, admin)
}

pub fn create_asset(env: &Env) -> Address {
    let admin = Address::generate(env);
    let asset = env.register_stellar_asset_contract_v2(admin);
    asset.address()
}

pub fn name(env: &Env, value: &str) -> String {
    String::from_str(env, value)
}
