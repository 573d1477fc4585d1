use crate::interface;
use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};

#[derive(
    BorshSerialize, BorshDeserialize, Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Default,
)]
pub struct Seconds(pub u64);

impl Seconds {
    pub const DAY: Seconds = Seconds(86_400);

    pub fn days(days: u64) -> Self {
        Self(Self::DAY.0 * days)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for Seconds {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<interface::Seconds> for Seconds {
    fn from(value: interface::Seconds) -> Self {
        Self(value.value())
    }
}
