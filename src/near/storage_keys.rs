//! This module is used to centralize NEAR SDK Collection IDs to ensure duplicates are not defined
//!
//! Each NEAR SDK persistent collection must be defined with a unique ID, which is used to store the
//! collection in the TRIE. Each of the IDs defined below should only be referenced once within the
//! project.

pub const BALANCES_KEY_PREFIX: [u8; 1] = [0];
pub const ALLOWANCES_KEY_PREFIX: [u8; 1] = [1];
pub const WHITELIST_KEY_PREFIX: [u8; 1] = [2];
pub const SWAP_PAIRS_KEY_PREFIX: [u8; 1] = [3];
pub const STAKING_POOLS_KEY_PREFIX: [u8; 1] = [4];
pub const STAKES_KEY_PREFIX: [u8; 1] = [5];
pub const LOCKS_KEY_PREFIX: [u8; 1] = [6];
pub const LOCK_INDEXES_KEY_PREFIX: [u8; 1] = [7];
pub const LOCK_NONCES_KEY_PREFIX: [u8; 1] = [8];
pub const FEE_EXEMPT_KEY_PREFIX: [u8; 1] = [9];
