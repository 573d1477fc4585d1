pub mod storage_keys;

use crate::errors::Error;
use near_sdk::env;
use std::fmt::Debug;

/// NEAR block timestamps are in nanoseconds
pub const NANOS_PER_SECOND: u64 = 1_000_000_000;

/// wrapper around `near_sdk::env::log()` which supports structured logging
pub fn log<T: Debug>(event: T) {
    env::log(format!("{:#?}", event).as_bytes());
}

/// Unwraps the result value. Errors abort the contract call, which reverts all state changes made
/// by the transaction.
///
/// ## Panics
/// with the error message if the result is an error
pub fn assert_ok<T>(result: Result<T, Error>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{}", err),
    }
}
