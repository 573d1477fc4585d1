mod config;
mod lock_data;
mod staking_pool_info;

pub use config::Config;
pub use lock_data::LockData;
pub use staking_pool_info::StakingPoolInfo;

use crate::domain;
use near_sdk::{
    json_types::{U128, U64},
    serde::{Deserialize, Serialize},
};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct TokenAmount(pub U128);

impl From<domain::TokenAmount> for TokenAmount {
    fn from(value: domain::TokenAmount) -> Self {
        Self(value.0.into())
    }
}

impl From<u128> for TokenAmount {
    fn from(value: u128) -> Self {
        Self(value.into())
    }
}

impl TokenAmount {
    pub fn value(&self) -> u128 {
        self.0 .0
    }
}

impl Default for TokenAmount {
    fn default() -> Self {
        Self(U128(0))
    }
}

/// unix time in seconds
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct Timestamp(pub U64);

impl From<domain::Timestamp> for Timestamp {
    fn from(value: domain::Timestamp) -> Self {
        Self(value.0.into())
    }
}

impl From<u64> for Timestamp {
    fn from(value: u64) -> Self {
        Self(value.into())
    }
}

impl Timestamp {
    pub fn value(&self) -> u64 {
        self.0 .0
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct Seconds(pub U64);

impl From<domain::Seconds> for Seconds {
    fn from(value: domain::Seconds) -> Self {
        Self(value.0.into())
    }
}

impl From<u64> for Seconds {
    fn from(value: u64) -> Self {
        Self(value.into())
    }
}

impl Seconds {
    pub fn value(&self) -> u64 {
        self.0 .0
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct PoolId(pub U64);

impl From<domain::PoolId> for PoolId {
    fn from(value: domain::PoolId) -> Self {
        Self(value.0.into())
    }
}

impl From<u64> for PoolId {
    fn from(value: u64) -> Self {
        Self(value.into())
    }
}

impl PoolId {
    pub fn value(&self) -> u64 {
        self.0 .0
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct LockIdx(pub U64);

impl From<domain::LockIdx> for LockIdx {
    fn from(value: domain::LockIdx) -> Self {
        Self(value.0.into())
    }
}

impl From<u64> for LockIdx {
    fn from(value: u64) -> Self {
        Self(value.into())
    }
}

impl LockIdx {
    pub fn value(&self) -> u64 {
        self.0 .0
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct BlockHeight(pub U64);

impl From<domain::BlockHeight> for BlockHeight {
    fn from(value: domain::BlockHeight) -> Self {
        Self(value.0.into())
    }
}

impl BlockHeight {
    pub fn value(&self) -> u64 {
        self.0 .0
    }
}
