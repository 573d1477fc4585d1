use crate::domain::Seconds;
use crate::interface;
use crate::near::NANOS_PER_SECOND;
use near_sdk::{
    borsh::{self, BorshDeserialize, BorshSerialize},
    env,
};
use std::fmt::{self, Display, Formatter};
use std::ops::Add;

/// Unix time in whole seconds
#[derive(
    BorshSerialize,
    BorshDeserialize,
    Debug,
    Clone,
    Copy,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    Default,
)]
pub struct Timestamp(pub u64);

impl Timestamp {
    /// current block time truncated to seconds
    ///
    /// ## Panics
    /// if NEAR runtime context is not available
    pub fn from_env() -> Self {
        Self(env::block_timestamp() / NANOS_PER_SECOND)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for Timestamp {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<Timestamp> for u64 {
    fn from(value: Timestamp) -> Self {
        value.0
    }
}

impl From<interface::Timestamp> for Timestamp {
    fn from(value: interface::Timestamp) -> Self {
        Self(value.value())
    }
}

/// saturates at `u64::MAX`, i.e., a lock or pool that would mature beyond the end of time never
/// matures
impl Add<Seconds> for Timestamp {
    type Output = Self;

    fn add(self, rhs: Seconds) -> Self::Output {
        Timestamp(self.0.saturating_add(rhs.value()))
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
