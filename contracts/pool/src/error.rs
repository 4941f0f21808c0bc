// Pool error module for MintSwap

use mintswap_math::MathError;
use soroban_sdk::contracterror;

// ============================================================
// CONTRACT ERRORS
// ============================================================

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum PoolError {
    // Initialization errors (100-199)
    /// Pool has already been initialized
    AlreadyInitialized = 100,
    /// Pool has not been initialized
    NotInitialized = 101,

    // Configuration errors (200-299)
    /// Fee above `MAX_FEE_BPS`
    InvalidFee = 200,
    /// Assets are identical or do not match this pool
    InvalidPair = 201,

    // Amount errors (300-399)
    /// Amount (or minted shares) is zero
    ZeroAmount = 300,
    /// Amount is negative
    NegativeAmount = 301,
    /// Caller holds less than the amount
    InsufficientBalance = 302,
    /// Pool may not pull this much on the caller's behalf
    InsufficientAllowance = 303,

    // Liquidity errors (400-499)
    /// Empty reserve, or the operation would drain one
    InsufficientLiquidity = 400,
    /// Caller holds fewer shares than requested
    InsufficientShares = 401,

    // Swap errors (500-599)
    /// Output rounds to zero or is below the caller's minimum
    InsufficientOutput = 500,

    // Math errors (700-799)
    DivisionByZero = 700,
    Overflow = 701,
    Underflow = 702,
}

// ============================================================
// ERROR MESSAGES
// ============================================================

pub struct PoolErrorMsg;

impl PoolErrorMsg {
    pub const ALREADY_INITIALIZED: &'static str = "pool already initialized";
    pub const NOT_INITIALIZED: &'static str = "pool not initialized";
    pub const INVALID_FEE: &'static str = "invalid fee: above maximum bps";
    pub const INVALID_PAIR: &'static str = "assets do not match this pool";
    pub const ZERO_AMOUNT: &'static str = "amount must be positive";
    pub const NEGATIVE_AMOUNT: &'static str = "amount is negative";
    pub const INSUFFICIENT_BALANCE: &'static str = "insufficient balance";
    pub const INSUFFICIENT_ALLOWANCE: &'static str = "insufficient allowance for pool";
    pub const INSUFFICIENT_LIQUIDITY: &'static str = "insufficient liquidity in pool";
    pub const INSUFFICIENT_SHARES: &'static str = "insufficient shares";
    pub const INSUFFICIENT_OUTPUT: &'static str = "output below minimum";
}

// ============================================================
// ERROR CONVERSION
// ============================================================

impl From<MathError> for PoolError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::Overflow => PoolError::Overflow,
            MathError::Underflow => PoolError::Underflow,
            MathError::DivisionByZero => PoolError::DivisionByZero,
            MathError::NegativeInput => PoolError::NegativeAmount,
        }
    }
}
