use crate::interface;
use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};
use std::fmt::{self, Display, Formatter};

/// locks are stored in a vector - the lock index is assigned sequentially across all owners
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
pub struct LockIdx(pub u64);

impl LockIdx {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for LockIdx {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<interface::LockIdx> for LockIdx {
    fn from(value: interface::LockIdx) -> Self {
        Self(value.value())
    }
}

impl Display for LockIdx {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
