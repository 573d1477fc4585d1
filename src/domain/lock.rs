use crate::{
    domain::{Seconds, Timestamp, TokenAmount},
    interface,
};
use near_sdk::{
    borsh::{self, BorshDeserialize, BorshSerialize},
    AccountId,
};

/// Tokens held by the vault until `start_time + duration`. Locks are never deleted - once unlocked
/// the lock is marked consumed.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq)]
pub struct Lock {
    token: AccountId,
    owner_id: AccountId,
    amount: TokenAmount,
    start_time: Timestamp,
    duration: Seconds,
    consumed: bool,
}

impl Lock {
    pub fn new(
        token: &str,
        owner_id: &str,
        amount: TokenAmount,
        start_time: Timestamp,
        duration: Seconds,
    ) -> Self {
        Self {
            token: token.to_string(),
            owner_id: owner_id.to_string(),
            amount,
            start_time,
            duration,
            consumed: false,
        }
    }

    pub fn owner_id(&self) -> &str {
        &self.owner_id
    }

    pub fn amount(&self) -> TokenAmount {
        self.amount
    }

    pub fn consumed(&self) -> bool {
        self.consumed
    }

    pub fn matures_at(&self) -> Timestamp {
        self.start_time + self.duration
    }

    pub fn is_claimable(&self, now: Timestamp) -> bool {
        now >= self.matures_at()
    }

    pub(crate) fn consume(&mut self) {
        self.consumed = true;
    }
}

impl From<Lock> for interface::LockData {
    fn from(lock: Lock) -> Self {
        Self {
            matures_at: lock.matures_at().into(),
            token: lock.token,
            owner_id: lock.owner_id,
            amount: lock.amount.into(),
            start_time: lock.start_time.into(),
            duration: lock.duration.into(),
            consumed: lock.consumed,
        }
    }
}
