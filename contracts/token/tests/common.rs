#![allow(dead_code)]

use soroban_sdk::{testutils::Address as _, Address, Env, String};
use mintswap_token::{MintPolicy, MintswapToken, MintswapTokenClient};

// Test constants
pub const DECIMALS: u32 = 18;
pub const ONE: i128 = 1_000_000_000_000_000_000; // 1 token at 18 decimals

/// Deploy a token with the given supply and mint policy
pub fn setup_token(
    env: &Env,
    initial_supply: i128,
    policy: MintPolicy,
) -> (MintswapTokenClient<'_>, Address) {
    let admin = Address::generate(env);
    let token_id = env.register(MintswapToken, ());
    let client = MintswapTokenClient::new(env, &token_id);

    client.initialize(
        &admin,
        &DECIMALS,
        &String::from_str(env, "Sample Token"),
        &String::from_str(env, "STK"),
        &initial_supply,
        &policy,
    );

    (client, admin)
}

/// Factory-style token: zero supply, owner-only minting
pub fn setup_custom_token(env: &Env) -> (MintswapTokenClient<'_>, Address) {
    setup_token(env, 0, MintPolicy::AdminOnly)
}

/// Sum of the balances of `holders`
pub fn sum_balances(client: &MintswapTokenClient<'_>, holders: &[Address]) -> i128 {
    holders.iter().map(|h| client.balance(h)).sum()
}
