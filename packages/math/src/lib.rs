// MintSwap Math Package
//
// Checked amount arithmetic, constant-product pricing and share math shared
// by the pool contract.

#![no_std]

pub mod constants;
pub mod error;
pub mod shares;
pub mod swap;
pub mod wide;

pub use constants::*;
pub use error::MathError;

pub use wide::{
    checked_add,
    checked_sub,
    mul_div,
    require_non_negative,
    sqrt_product,
    wide_product,
};

pub use swap::{apply_fee, get_amount_out, reserves_after_swap};

pub use shares::{amounts_for_shares, initial_shares, proportional_shares, shares_for_deposit};
