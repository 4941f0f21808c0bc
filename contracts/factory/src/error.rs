// Factory error module for MintSwap

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum FactoryError {
    // Initialization errors (1-9)
    AlreadyInitialized = 1,
    NotInitialized = 2,

    // Token creation errors (10-19)
    InvalidParameters = 10,
    TokenNotFound = 11,

    // Pool registry errors (20-29)
    InvalidPair = 20,
    InvalidFee = 21,
    PoolAlreadyExists = 22,
}

/// Human-readable error messages for debugging
pub struct FactoryErrorMsg;

impl FactoryErrorMsg {
    // Initialization
    pub const ALREADY_INITIALIZED: &'static str = "Factory: already initialized";
    pub const NOT_INITIALIZED: &'static str = "Factory: not initialized";

    // Token creation
    pub const INVALID_PARAMETERS: &'static str =
        "Factory: name/symbol empty or too long, or negative supply";
    pub const TOKEN_NOT_FOUND: &'static str = "Factory: no token at this index";

    // Pool registry
    pub const INVALID_PAIR: &'static str = "Factory: pool assets must be different";
    pub const INVALID_FEE: &'static str = "Factory: pool fee above maximum";
    pub const POOL_EXISTS: &'static str = "Factory: pool already registered for this pair";
}
