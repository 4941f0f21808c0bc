// Pool events module for MintSwap

use soroban_sdk::{Address, Env, Symbol};

/// Emitted when the pool is configured
/// Topics: ("PoolInit",)
/// Data: (asset_a, asset_b, fee_bps)
pub fn emit_initialized(env: &Env, asset_a: &Address, asset_b: &Address, fee_bps: u32) {
    env.events().publish(
        (Symbol::new(env, "PoolInit"),),
        (asset_a.clone(), asset_b.clone(), fee_bps),
    );
}

/// Emitted once, on the first deposit
/// Topics: ("PoolActive",)
/// Data: (reserve_a, reserve_b, total_shares)
pub fn emit_activated(env: &Env, reserve_a: i128, reserve_b: i128, total_shares: i128) {
    env.events().publish(
        (Symbol::new(env, "PoolActive"),),
        (reserve_a, reserve_b, total_shares),
    );
}

/// Topics: ("AddLiquidity", provider)
/// Data: (token_amount, native_amount, shares)
pub fn emit_add_liquidity(
    env: &Env,
    provider: &Address,
    token_amount: i128,
    native_amount: i128,
    shares: i128,
) {
    env.events().publish(
        (Symbol::new(env, "AddLiquidity"), provider.clone()),
        (token_amount, native_amount, shares),
    );
}

/// Topics: ("RemoveLiquidity", provider)
/// Data: (shares, amount_a, amount_b)
pub fn emit_remove_liquidity(
    env: &Env,
    provider: &Address,
    shares: i128,
    amount_a: i128,
    amount_b: i128,
) {
    env.events().publish(
        (Symbol::new(env, "RemoveLiquidity"), provider.clone()),
        (shares, amount_a, amount_b),
    );
}

/// Topics: ("Swap", sender)
/// Data: (from_asset, to_asset, amount_in, amount_out)
pub fn emit_swap(
    env: &Env,
    sender: &Address,
    from_asset: &Address,
    to_asset: &Address,
    amount_in: i128,
    amount_out: i128,
) {
    env.events().publish(
        (Symbol::new(env, "Swap"), sender.clone()),
        (from_asset.clone(), to_asset.clone(), amount_in, amount_out),
    );
}
