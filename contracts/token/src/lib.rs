#![no_std]

//! # MintSwap Token
//!
//! Fungible balance ledger with a mint capability.
//!
//! ## Responsibilities:
//! 1. Balances and total supply (`sum(balances) == total_supply`)
//! 2. Allowances for transfer-on-behalf
//! 3. Mint rights (admin-only or open faucet)
//!
//! `transfer`, `transfer_from`, `balance`, `allowance` and `decimals` keep
//! the argument order of the Soroban token interface so pools can drive this
//! contract through `soroban_sdk::token::Client`.
//!
//! `approve` replaces the previous allowance. A spender watching the mempool
//! can spend the old allowance before the new one lands; callers that lower
//! an allowance should set it to zero first.

use soroban_sdk::{contract, contractimpl, log, Address, Env, String};

mod error;
mod events;
mod storage;
mod types;

pub use error::{TokenError, TokenErrorMsg};
use events::*;
use storage::*;
pub use types::*;

// ============================================================
// CONSTANTS
// ============================================================

/// Largest supported decimals (matches 18-decimal EVM-style amounts)
pub const MAX_DECIMALS: u32 = 18;

// ============================================================
// CONTRACT
// ============================================================

#[contract]
pub struct MintswapToken;

#[contractimpl]
impl MintswapToken {
    // ========================================================
    // INITIALIZATION
    // ========================================================

    /// Initialize token
    ///
    /// # Arguments
    /// * `admin` - Mint authority; receives `initial_supply`
    /// * `decimal` - Fixed-point scale of amounts
    /// * `name` / `symbol` - Display metadata, must be non-empty
    /// * `initial_supply` - Pre-minted supply (0 for factory tokens)
    /// * `mint_policy` - Who may mint afterwards
    pub fn initialize(
        env: Env,
        admin: Address,
        decimal: u32,
        name: String,
        symbol: String,
        initial_supply: i128,
        mint_policy: MintPolicy,
    ) -> Result<(), TokenError> {
        if is_initialized(&env) {
            return Err(TokenError::AlreadyInitialized);
        }

        if name.len() == 0 || symbol.len() == 0 || decimal > MAX_DECIMALS {
            return Err(TokenError::InvalidParameters);
        }
        if initial_supply < 0 {
            return Err(TokenError::InvalidParameters);
        }

        write_admin(&env, &admin);
        write_mint_policy(&env, mint_policy);
        write_metadata(
            &env,
            &TokenMetadata {
                name,
                symbol,
                decimals: decimal,
            },
        );
        write_total_supply(&env, initial_supply);
        if initial_supply > 0 {
            write_balance(&env, &admin, initial_supply);
        }
        set_initialized(&env);
        extend_instance_ttl(&env);

        emit_initialized(&env, &admin, initial_supply);
        if initial_supply > 0 {
            emit_mint(&env, &admin, &admin, initial_supply);
        }

        Ok(())
    }

    // ========================================================
    // WRITE FUNCTIONS
    // ========================================================

    /// Mint `amount` new units to `to`
    pub fn mint(env: Env, minter: Address, to: Address, amount: i128) -> Result<(), TokenError> {
        minter.require_auth();
        check_non_negative(amount)?;

        let admin = read_admin(&env)?;
        if read_mint_policy(&env)? == MintPolicy::AdminOnly && minter != admin {
            return Err(TokenError::Unauthorized);
        }

        let supply = read_total_supply(&env)
            .checked_add(amount)
            .ok_or(TokenError::Overflow)?;
        // Cannot overflow: a balance never exceeds the total supply
        let balance = read_balance(&env, &to) + amount;

        write_total_supply(&env, supply);
        write_balance(&env, &to, balance);
        extend_instance_ttl(&env);

        log!(&env, "mint", to, amount, supply);
        emit_mint(&env, &minter, &to, amount);

        Ok(())
    }

    /// Move `amount` from `from` to `to`
    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), TokenError> {
        from.require_auth();
        check_non_negative(amount)?;
        extend_instance_ttl(&env);

        move_balance(&env, &from, &to, amount)?;
        emit_transfer(&env, &from, &to, amount);

        Ok(())
    }

    /// Set `spender`'s allowance over `owner`'s balance (replaces, not adds)
    pub fn approve(
        env: Env,
        owner: Address,
        spender: Address,
        amount: i128,
    ) -> Result<(), TokenError> {
        owner.require_auth();
        check_non_negative(amount)?;
        extend_instance_ttl(&env);

        write_allowance(&env, &owner, &spender, amount);
        emit_approve(&env, &owner, &spender, amount);

        Ok(())
    }

    /// Move `amount` from `from` to `to` on `spender`'s allowance
    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), TokenError> {
        spender.require_auth();
        check_non_negative(amount)?;
        extend_instance_ttl(&env);

        let allowance = read_allowance(&env, &from, &spender);
        if allowance < amount {
            return Err(TokenError::InsufficientAllowance);
        }

        // Allowance is consumed only after the balance move succeeds
        move_balance(&env, &from, &to, amount)?;
        write_allowance(&env, &from, &spender, allowance - amount);

        emit_transfer(&env, &from, &to, amount);

        Ok(())
    }

    // ========================================================
    // ADMIN FUNCTIONS
    // ========================================================

    /// Transfer mint authority
    pub fn set_admin(env: Env, new_admin: Address) -> Result<(), TokenError> {
        let admin = read_admin(&env)?;
        admin.require_auth();

        write_admin(&env, &new_admin);
        extend_instance_ttl(&env);

        emit_set_admin(&env, &admin, &new_admin);
        Ok(())
    }

    // ========================================================
    // READ FUNCTIONS
    // ========================================================

    pub fn balance(env: Env, id: Address) -> i128 {
        read_balance(&env, &id)
    }

    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        read_allowance(&env, &from, &spender)
    }

    pub fn total_supply(env: Env) -> i128 {
        read_total_supply(&env)
    }

    pub fn decimals(env: Env) -> Result<u32, TokenError> {
        Ok(read_metadata(&env)?.decimals)
    }

    pub fn name(env: Env) -> Result<String, TokenError> {
        Ok(read_metadata(&env)?.name)
    }

    pub fn symbol(env: Env) -> Result<String, TokenError> {
        Ok(read_metadata(&env)?.symbol)
    }

    pub fn admin(env: Env) -> Result<Address, TokenError> {
        read_admin(&env)
    }

    pub fn mint_policy(env: Env) -> Result<MintPolicy, TokenError> {
        read_mint_policy(&env)
    }
}

// ========================================================
// HELPER FUNCTIONS
// ========================================================

#[inline]
fn check_non_negative(amount: i128) -> Result<(), TokenError> {
    if amount < 0 {
        return Err(TokenError::NegativeAmount);
    }
    Ok(())
}

/// Debit `from` and credit `to`; nothing is written unless both sides succeed
fn move_balance(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), TokenError> {
    let from_balance = read_balance(env, from);
    if from_balance < amount {
        return Err(TokenError::InsufficientBalance);
    }
    if from == to {
        return Ok(());
    }

    let to_balance = read_balance(env, to)
        .checked_add(amount)
        .ok_or(TokenError::Overflow)?;

    write_balance(env, from, from_balance - amount);
    write_balance(env, to, to_balance);
    Ok(())
}
