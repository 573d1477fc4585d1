use near_sdk::{
    borsh::{self, BorshDeserialize, BorshSerialize},
    env,
};

#[derive(
    BorshSerialize, BorshDeserialize, Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Default,
)]
pub struct BlockHeight(pub u64);

impl BlockHeight {
    pub fn from_env() -> Self {
        Self(env::block_index())
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for BlockHeight {
    fn from(value: u64) -> Self {
        Self(value)
    }
}
