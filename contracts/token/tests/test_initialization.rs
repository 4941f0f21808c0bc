mod common;

use soroban_sdk::{
    testutils::{Address as _, Events},
    Address, Env, IntoVal, String, Symbol, TryFromVal, Val, Vec,
};
use mintswap_token::{MintPolicy, MintswapToken, MintswapTokenClient, TokenError};

#[test]
fn test_initialization_sample_token() {
    let env = Env::default();
    env.mock_all_auths();

    let supply = 1_000_000 * common::ONE;
    let (client, admin) = common::setup_token(&env, supply, MintPolicy::Open);

    assert_eq!(client.total_supply(), supply);
    assert_eq!(client.balance(&admin), supply);
    assert_eq!(client.name(), String::from_str(&env, "Sample Token"));
    assert_eq!(client.symbol(), String::from_str(&env, "STK"));
    assert_eq!(client.decimals(), common::DECIMALS);
    assert_eq!(client.admin(), admin);
    assert_eq!(client.mint_policy(), MintPolicy::Open);
}

#[test]
fn test_initialization_custom_token_zero_supply() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, admin) = common::setup_custom_token(&env);

    assert_eq!(client.total_supply(), 0);
    assert_eq!(client.balance(&admin), 0);
    assert_eq!(client.mint_policy(), MintPolicy::AdminOnly);
}

#[test]
fn test_initial_supply_emits_mint() {
    let env = Env::default();
    env.mock_all_auths();

    let supply = 1_000 * common::ONE;
    let (client, admin) = common::setup_token(&env, supply, MintPolicy::AdminOnly);

    // Replaying mint/transfer events alone must account for the initial supply
    let (contract, topics, data) = env.events().all().last().unwrap();
    let expected: Vec<Val> =
        (Symbol::new(&env, "mint"), admin.clone(), admin.clone()).into_val(&env);
    assert_eq!(contract, client.address);
    assert_eq!(topics, expected);
    assert_eq!(i128::try_from_val(&env, &data).unwrap(), supply);
}

#[test]
fn test_double_initialization() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, admin) = common::setup_custom_token(&env);

    let result = client.try_initialize(
        &admin,
        &18,
        &String::from_str(&env, "Again"),
        &String::from_str(&env, "AGN"),
        &0,
        &MintPolicy::AdminOnly,
    );
    assert_eq!(result, Err(Ok(TokenError::AlreadyInitialized)));
}

#[test]
fn test_initialization_rejects_empty_name() {
    let env = Env::default();
    env.mock_all_auths();

    let token_id = env.register(MintswapToken, ());
    let client = MintswapTokenClient::new(&env, &token_id);
    let admin = Address::generate(&env);

    let result = client.try_initialize(
        &admin,
        &18,
        &String::from_str(&env, ""),
        &String::from_str(&env, "FOO"),
        &0,
        &MintPolicy::AdminOnly,
    );
    assert_eq!(result, Err(Ok(TokenError::InvalidParameters)));
}

#[test]
fn test_initialization_rejects_empty_symbol() {
    let env = Env::default();
    env.mock_all_auths();

    let token_id = env.register(MintswapToken, ());
    let client = MintswapTokenClient::new(&env, &token_id);
    let admin = Address::generate(&env);

    let result = client.try_initialize(
        &admin,
        &18,
        &String::from_str(&env, "Foo"),
        &String::from_str(&env, ""),
        &0,
        &MintPolicy::AdminOnly,
    );
    assert_eq!(result, Err(Ok(TokenError::InvalidParameters)));
}

#[test]
fn test_initialization_rejects_negative_supply() {
    let env = Env::default();
    env.mock_all_auths();

    let token_id = env.register(MintswapToken, ());
    let client = MintswapTokenClient::new(&env, &token_id);
    let admin = Address::generate(&env);

    let result = client.try_initialize(
        &admin,
        &18,
        &String::from_str(&env, "Foo"),
        &String::from_str(&env, "FOO"),
        &-1,
        &MintPolicy::AdminOnly,
    );
    assert_eq!(result, Err(Ok(TokenError::InvalidParameters)));
}

#[test]
fn test_initialization_rejects_large_decimals() {
    let env = Env::default();
    env.mock_all_auths();

    let token_id = env.register(MintswapToken, ());
    let client = MintswapTokenClient::new(&env, &token_id);
    let admin = Address::generate(&env);

    let result = client.try_initialize(
        &admin,
        &19,
        &String::from_str(&env, "Foo"),
        &String::from_str(&env, "FOO"),
        &0,
        &MintPolicy::AdminOnly,
    );
    assert_eq!(result, Err(Ok(TokenError::InvalidParameters)));
}

#[test]
fn test_queries_before_initialization() {
    let env = Env::default();

    let token_id = env.register(MintswapToken, ());
    let client = MintswapTokenClient::new(&env, &token_id);
    let holder = Address::generate(&env);

    assert_eq!(client.total_supply(), 0);
    assert_eq!(client.balance(&holder), 0);
    assert_eq!(client.try_decimals(), Err(Ok(TokenError::NotInitialized)));
}
