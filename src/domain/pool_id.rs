use crate::interface;
use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};
use std::fmt::{self, Display, Formatter};

/// staking pools are stored in a vector - the pool ID is the pool's index
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
    Default,
    Hash,
)]
pub struct PoolId(pub u64);

impl PoolId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for PoolId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<interface::PoolId> for PoolId {
    fn from(value: interface::PoolId) -> Self {
        Self(value.value())
    }
}

impl Display for PoolId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
