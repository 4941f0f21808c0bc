//! Token events
//!
//! Topic layout follows the Soroban token interface: the event name first,
//! then the addresses involved; the amount is the data.

use soroban_sdk::{Address, Env, Symbol};

/// Emitted when the token is initialized
pub fn emit_initialized(env: &Env, admin: &Address, initial_supply: i128) {
    env.events().publish(
        (Symbol::new(env, "initialized"), admin.clone()),
        initial_supply,
    );
}

/// Emitted when new supply is minted
pub fn emit_mint(env: &Env, minter: &Address, to: &Address, amount: i128) {
    env.events().publish(
        (Symbol::new(env, "mint"), minter.clone(), to.clone()),
        amount,
    );
}

/// Emitted on every balance move (`transfer` and `transfer_from`)
pub fn emit_transfer(env: &Env, from: &Address, to: &Address, amount: i128) {
    env.events().publish(
        (Symbol::new(env, "transfer"), from.clone(), to.clone()),
        amount,
    );
}

/// Emitted when an allowance is set
pub fn emit_approve(env: &Env, owner: &Address, spender: &Address, amount: i128) {
    env.events().publish(
        (Symbol::new(env, "approve"), owner.clone(), spender.clone()),
        amount,
    );
}

/// Emitted when the mint authority changes
pub fn emit_set_admin(env: &Env, old_admin: &Address, new_admin: &Address) {
    env.events().publish(
        (Symbol::new(env, "set_admin"), old_admin.clone()),
        new_admin.clone(),
    );
}
