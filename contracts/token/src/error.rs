// Token error module for MintSwap

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TokenError {
    // Initialization errors (1-99)
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidParameters = 3,

    // Authorization errors (100-199)
    Unauthorized = 100,

    // Balance errors (200-299)
    InsufficientBalance = 200,
    InsufficientAllowance = 201,
    NegativeAmount = 202,

    // Math errors (300-399)
    Overflow = 300,
}

/// Human-readable error messages for debugging
pub struct TokenErrorMsg;

impl TokenErrorMsg {
    pub const ALREADY_INITIALIZED: &'static str = "Token: already initialized";
    pub const NOT_INITIALIZED: &'static str = "Token: not initialized";
    pub const INVALID_PARAMETERS: &'static str =
        "Token: name and symbol must be non-empty, decimals <= 18";
    pub const UNAUTHORIZED: &'static str = "Token: caller has no mint rights";
    pub const INSUFFICIENT_BALANCE: &'static str = "Token: transfer amount exceeds balance";
    pub const INSUFFICIENT_ALLOWANCE: &'static str = "Token: transfer amount exceeds allowance";
    pub const NEGATIVE_AMOUNT: &'static str = "Token: amount must not be negative";
    pub const OVERFLOW: &'static str = "Token: total supply overflow";
}
