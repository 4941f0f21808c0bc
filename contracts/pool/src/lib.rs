#![no_std]

//! # MintSwap Pool
//!
//! Constant-product pool pairing one token with the native currency.
//!
//! The pool is `Uninitialized` until the first deposit fixes the price;
//! from then on it is `Active`. Reserves, share supply and status live in one
//! `PoolState` entry so they always change together. Every state write happens
//! before the outgoing transfers, and a failed transfer aborts the whole
//! invocation.

use soroban_sdk::{contract, contractimpl, log, token, Address, Env};

use mintswap_math::{
    amounts_for_shares, checked_add, checked_sub, get_amount_out, reserves_after_swap,
    shares_for_deposit, MAX_FEE_BPS, MIN_OUTPUT_AMOUNT,
};

mod error;
mod events;
mod storage;
pub mod types;

pub use error::{PoolError, PoolErrorMsg};
use events::*;
use storage::*;
pub use types::{PoolConfig, PoolState, PoolStatus, SwapResult};

#[contract]
pub struct MintswapPool;

#[contractimpl]
impl MintswapPool {
    // ========================================================
    // INITIALIZATION
    // ========================================================

    /// Initialize pool
    ///
    /// # Arguments
    /// * `asset_a` - Token side
    /// * `asset_b` - Native-currency side; deposits and swaps must name
    ///   exactly this address
    /// * `fee_bps` - Swap fee, at most `MAX_FEE_BPS`
    pub fn initialize(
        env: Env,
        asset_a: Address,
        asset_b: Address,
        fee_bps: u32,
    ) -> Result<(), PoolError> {
        if is_initialized(&env) {
            return Err(PoolError::AlreadyInitialized);
        }
        if asset_a == asset_b {
            return Err(PoolError::InvalidPair);
        }
        if fee_bps > MAX_FEE_BPS {
            return Err(PoolError::InvalidFee);
        }

        let config = PoolConfig {
            asset_a: asset_a.clone(),
            asset_b: asset_b.clone(),
            fee_bps,
        };
        write_pool_config(&env, &config);
        write_pool_state(&env, &PoolState::default());
        set_initialized(&env);
        extend_instance_ttl(&env);

        emit_initialized(&env, &asset_a, &asset_b, fee_bps);

        Ok(())
    }

    // ========================================================
    // LIQUIDITY FUNCTIONS
    // ========================================================

    /// Deposit both sides and mint shares
    ///
    /// The token side is pulled with `transfer_from`, so the provider must
    /// have approved the pool for `token_amount`. The native side moves with a
    /// plain transfer authorized by the provider.
    ///
    /// # Returns
    /// Shares minted
    pub fn add_liquidity(
        env: Env,
        provider: Address,
        token_asset: Address,
        native_asset: Address,
        token_amount: i128,
        native_amount: i128,
    ) -> Result<i128, PoolError> {
        provider.require_auth();

        let config = read_pool_config(&env)?;
        if token_asset != config.asset_a || native_asset != config.asset_b {
            return Err(PoolError::InvalidPair);
        }
        check_positive(token_amount)?;
        check_positive(native_amount)?;

        let pool_addr = env.current_contract_address();
        let token_client = token::Client::new(&env, &config.asset_a);
        let native_client = token::Client::new(&env, &config.asset_b);

        check_can_pull(&token_client, &provider, &pool_addr, token_amount)?;
        if native_client.balance(&provider) < native_amount {
            return Err(PoolError::InsufficientBalance);
        }

        let mut state = read_pool_state(&env);
        let shares = shares_for_deposit(
            &env,
            token_amount,
            native_amount,
            state.reserve_a,
            state.reserve_b,
            state.total_shares,
        )?;
        if shares == 0 {
            return Err(PoolError::ZeroAmount);
        }

        let first_deposit = state.status == PoolStatus::Uninitialized;
        state.reserve_a = checked_add(state.reserve_a, token_amount)?;
        state.reserve_b = checked_add(state.reserve_b, native_amount)?;
        state.total_shares = checked_add(state.total_shares, shares)?;
        state.status = PoolStatus::Active;

        let provider_shares = checked_add(read_shares(&env, &provider), shares)?;

        write_pool_state(&env, &state);
        write_shares(&env, &provider, provider_shares);
        extend_instance_ttl(&env);

        token_client.transfer_from(&pool_addr, &provider, &pool_addr, &token_amount);
        native_client.transfer(&provider, &pool_addr, &native_amount);

        log!(
            &env,
            "add_liquidity",
            provider,
            shares,
            state.reserve_a,
            state.reserve_b
        );
        if first_deposit {
            emit_activated(&env, state.reserve_a, state.reserve_b, state.total_shares);
        }
        emit_add_liquidity(&env, &provider, token_amount, native_amount, shares);

        Ok(shares)
    }

    /// Burn shares and withdraw the matching slice of both reserves
    ///
    /// The last outstanding share can never be burned, so an active pool
    /// keeps non-zero reserves.
    ///
    /// # Returns
    /// (amount_a, amount_b) paid out
    pub fn remove_liquidity(
        env: Env,
        provider: Address,
        shares: i128,
    ) -> Result<(i128, i128), PoolError> {
        provider.require_auth();

        let config = read_pool_config(&env)?;
        check_positive(shares)?;

        let held = read_shares(&env, &provider);
        if held < shares {
            return Err(PoolError::InsufficientShares);
        }

        let mut state = read_pool_state(&env);
        if shares >= state.total_shares {
            return Err(PoolError::InsufficientLiquidity);
        }

        let (amount_a, amount_b) = amounts_for_shares(
            &env,
            shares,
            state.reserve_a,
            state.reserve_b,
            state.total_shares,
        )?;

        state.reserve_a = checked_sub(state.reserve_a, amount_a)?;
        state.reserve_b = checked_sub(state.reserve_b, amount_b)?;
        state.total_shares = checked_sub(state.total_shares, shares)?;

        write_pool_state(&env, &state);
        write_shares(&env, &provider, held - shares);
        extend_instance_ttl(&env);

        let pool_addr = env.current_contract_address();
        if amount_a > 0 {
            token::Client::new(&env, &config.asset_a).transfer(&pool_addr, &provider, &amount_a);
        }
        if amount_b > 0 {
            token::Client::new(&env, &config.asset_b).transfer(&pool_addr, &provider, &amount_b);
        }

        log!(&env, "remove_liquidity", provider, shares, amount_a, amount_b);
        emit_remove_liquidity(&env, &provider, shares, amount_a, amount_b);

        Ok((amount_a, amount_b))
    }

    // ========================================================
    // SWAP FUNCTION
    // ========================================================

    /// Exact-input swap
    ///
    /// # Arguments
    /// * `sender` - Pays `amount_in`, receives the output
    /// * `from_asset` / `to_asset` - The pool's two assets, in trade direction
    /// * `amount_in` - Input including fee
    /// * `min_amount_out` - Slippage bound (0 disables it)
    pub fn swap(
        env: Env,
        sender: Address,
        from_asset: Address,
        to_asset: Address,
        amount_in: i128,
        min_amount_out: i128,
    ) -> Result<SwapResult, PoolError> {
        sender.require_auth();

        if min_amount_out < 0 {
            return Err(PoolError::NegativeAmount);
        }

        let config = read_pool_config(&env)?;
        let mut state = read_pool_state(&env);
        let (a_to_b, amount_out) =
            price_swap(&env, &config, &state, &from_asset, &to_asset, amount_in)?;
        if amount_out < min_amount_out {
            return Err(PoolError::InsufficientOutput);
        }

        let pool_addr = env.current_contract_address();
        let in_client = token::Client::new(&env, &from_asset);
        // The token side goes through the allowance; native is a direct transfer
        if a_to_b {
            check_can_pull(&in_client, &sender, &pool_addr, amount_in)?;
        } else if in_client.balance(&sender) < amount_in {
            return Err(PoolError::InsufficientBalance);
        }

        if a_to_b {
            let (new_a, new_b) =
                reserves_after_swap(state.reserve_a, state.reserve_b, amount_in, amount_out)?;
            state.reserve_a = new_a;
            state.reserve_b = new_b;
        } else {
            let (new_b, new_a) =
                reserves_after_swap(state.reserve_b, state.reserve_a, amount_in, amount_out)?;
            state.reserve_a = new_a;
            state.reserve_b = new_b;
        }

        write_pool_state(&env, &state);
        extend_instance_ttl(&env);

        if a_to_b {
            in_client.transfer_from(&pool_addr, &sender, &pool_addr, &amount_in);
        } else {
            in_client.transfer(&sender, &pool_addr, &amount_in);
        }
        token::Client::new(&env, &to_asset).transfer(&pool_addr, &sender, &amount_out);

        log!(&env, "swap", sender, amount_in, amount_out);
        emit_swap(&env, &sender, &from_asset, &to_asset, amount_in, amount_out);

        Ok(SwapResult {
            amount_in,
            amount_out,
            reserve_a: state.reserve_a,
            reserve_b: state.reserve_b,
        })
    }

    // ========================================================
    // VIEW FUNCTIONS
    // ========================================================

    /// Output `swap` would pay right now, with the same failure modes
    pub fn quote_swap(
        env: Env,
        from_asset: Address,
        to_asset: Address,
        amount_in: i128,
    ) -> Result<i128, PoolError> {
        let config = read_pool_config(&env)?;
        let state = read_pool_state(&env);
        let (_, amount_out) =
            price_swap(&env, &config, &state, &from_asset, &to_asset, amount_in)?;
        Ok(amount_out)
    }

    /// (reserve_a, reserve_b)
    pub fn get_reserves(env: Env) -> (i128, i128) {
        let state = read_pool_state(&env);
        (state.reserve_a, state.reserve_b)
    }

    pub fn get_pool_state(env: Env) -> PoolState {
        read_pool_state(&env)
    }

    pub fn get_pool_config(env: Env) -> Result<PoolConfig, PoolError> {
        read_pool_config(&env)
    }

    pub fn share_balance(env: Env, owner: Address) -> i128 {
        read_shares(&env, &owner)
    }

    pub fn total_shares(env: Env) -> i128 {
        read_pool_state(&env).total_shares
    }

    pub fn get_status(env: Env) -> PoolStatus {
        read_pool_state(&env).status
    }

    pub fn is_initialized(env: Env) -> bool {
        is_initialized(&env)
    }
}

// ========================================================
// HELPER FUNCTIONS
// ========================================================

#[inline]
fn check_positive(amount: i128) -> Result<(), PoolError> {
    if amount < 0 {
        return Err(PoolError::NegativeAmount);
    }
    if amount == 0 {
        return Err(PoolError::ZeroAmount);
    }
    Ok(())
}

/// Allowance then balance, so a failed pull surfaces as a typed error
fn check_can_pull(
    client: &token::Client,
    owner: &Address,
    spender: &Address,
    amount: i128,
) -> Result<(), PoolError> {
    if client.allowance(owner, spender) < amount {
        return Err(PoolError::InsufficientAllowance);
    }
    if client.balance(owner) < amount {
        return Err(PoolError::InsufficientBalance);
    }
    Ok(())
}

/// Resolve direction and price a swap against `state`
///
/// Returns (a_to_b, amount_out).
fn price_swap(
    env: &Env,
    config: &PoolConfig,
    state: &PoolState,
    from_asset: &Address,
    to_asset: &Address,
    amount_in: i128,
) -> Result<(bool, i128), PoolError> {
    let a_to_b = if *from_asset == config.asset_a && *to_asset == config.asset_b {
        true
    } else if *from_asset == config.asset_b && *to_asset == config.asset_a {
        false
    } else {
        return Err(PoolError::InvalidPair);
    };
    check_positive(amount_in)?;

    let (reserve_in, reserve_out) = if a_to_b {
        (state.reserve_a, state.reserve_b)
    } else {
        (state.reserve_b, state.reserve_a)
    };
    if reserve_in == 0 || reserve_out == 0 {
        return Err(PoolError::InsufficientLiquidity);
    }

    let amount_out = get_amount_out(env, amount_in, reserve_in, reserve_out, config.fee_bps)?;
    if amount_out >= reserve_out {
        return Err(PoolError::InsufficientLiquidity);
    }
    if amount_out < MIN_OUTPUT_AMOUNT {
        return Err(PoolError::InsufficientOutput);
    }

    Ok((a_to_b, amount_out))
}
