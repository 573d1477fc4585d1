//! centralizes all error messages

use std::fmt::{self, Display, Formatter};

pub mod asserts {
    pub const PREDECESSOR_MUST_BE_OWNER: &str = "contract call is only allowed by the owner";
    pub const CONTRACT_ALREADY_INITIALIZED: &str = "contract is already initialized";
    pub const CONTRACT_NOT_INITIALIZED: &str = "contract should be initialized before usage";
    pub const ZERO_AMOUNT: &str = "amount must not be zero";
    pub const INVALID_CONFIG: &str = "config is invalid";
}

pub mod fungible_token {
    pub const INSUFFICIENT_BALANCE: &str = "account balance is insufficient to fulfill request";

    pub const INSUFFICIENT_ALLOWANCE: &str = "insufficient allowance";
}

pub mod access_gate {
    pub const RESTRICTED_TRANSFER: &str =
        "transfer amount exceeds the limit for receivers that are not whitelisted";
}

pub mod fee_switch {
    pub const FEE_EXEMPT_SWAP_PAIR: &str = "fee exempt accounts cannot be registered as swap pairs";
}

pub mod maturity {
    pub const NOT_YET_MATURED: &str = "maturity window has not elapsed yet";
}

pub mod staking_pools {
    pub const POOL_DOES_NOT_EXIST: &str = "staking pool does not exist";

    pub const POOL_ALREADY_INITIALIZED: &str = "staking pool is already initialized";

    pub const STAKING_WINDOW_CLOSED: &str = "staking is not allowed after the pool has matured";

    pub const NOTHING_TO_CLAIM: &str = "nothing to claim";
}

pub mod time_lock_vault {
    pub const LOCK_DOES_NOT_EXIST: &str = "lock does not exist";

    pub const LOCK_ALREADY_UNLOCKED: &str = "lock has already been unlocked";

    pub const UNSUPPORTED_TOKEN: &str = "token is not supported by the vault";
}

/// Failures are returned before any state is written, i.e., a failed call leaves the contract
/// state unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    RestrictedTransfer,
    NotOwner,
    AlreadyInitialized,
    InsufficientAllowance,
    InsufficientBalance,
    NotYetMatured,
    WindowClosed,
    NothingToClaim,
    ZeroAmount,
    PoolNotFound,
    LockNotFound,
    LockConsumed,
    UnsupportedToken,
    InvalidConfig,
    FeeExemptSwapPair,
}

impl Error {
    pub fn message(&self) -> &'static str {
        match self {
            Error::RestrictedTransfer => access_gate::RESTRICTED_TRANSFER,
            Error::NotOwner => asserts::PREDECESSOR_MUST_BE_OWNER,
            Error::AlreadyInitialized => staking_pools::POOL_ALREADY_INITIALIZED,
            Error::InsufficientAllowance => fungible_token::INSUFFICIENT_ALLOWANCE,
            Error::InsufficientBalance => fungible_token::INSUFFICIENT_BALANCE,
            Error::NotYetMatured => maturity::NOT_YET_MATURED,
            Error::WindowClosed => staking_pools::STAKING_WINDOW_CLOSED,
            Error::NothingToClaim => staking_pools::NOTHING_TO_CLAIM,
            Error::ZeroAmount => asserts::ZERO_AMOUNT,
            Error::PoolNotFound => staking_pools::POOL_DOES_NOT_EXIST,
            Error::LockNotFound => time_lock_vault::LOCK_DOES_NOT_EXIST,
            Error::LockConsumed => time_lock_vault::LOCK_ALREADY_UNLOCKED,
            Error::FeeExemptSwapPair => fee_switch::FEE_EXEMPT_SWAP_PAIR,
            Error::UnsupportedToken => time_lock_vault::UNSUPPORTED_TOKEN,
            Error::InvalidConfig => asserts::INVALID_CONFIG,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for Error {}
