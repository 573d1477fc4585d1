use crate::interface::{LockData, LockIdx, Seconds, Timestamp, TokenAmount};
use near_sdk::json_types::{ValidAccountId, U64};

/// Vault that holds tokens until `start_time + duration`.
///
/// Locks are indexed sequentially. Each owner's locks can also be looked up by the owner's nonce,
/// i.e., the owner's first lock is nonce 0, the second is nonce 1, etc.
pub trait TimeLockVault {
    /// Locks tokens on behalf of the owner. The tokens are transferred from the predecessor account
    /// through the allowance granted to the vault's custody account, i.e., `vault.<contract>`.
    ///
    /// ## Panics
    /// - if the token is not this contract's token
    /// - if amount is zero
    /// - if the vault custody account allowance or the predecessor balance is insufficient
    fn lock(
        &mut self,
        token: ValidAccountId,
        amount: TokenAmount,
        start_time: Timestamp,
        duration: Seconds,
        owner_id: ValidAccountId,
    ) -> LockIdx;

    fn get_lock_idx(&self, owner_id: ValidAccountId, nonce: U64) -> Option<LockIdx>;

    /// returns the nonce that will be assigned to the owner's next lock
    fn lock_nonce(&self, owner_id: ValidAccountId) -> U64;

    fn lock_data(&self, idx: LockIdx) -> Option<LockData>;

    /// ## Panics
    /// if the lock does not exist
    fn is_claimable(&self, idx: LockIdx) -> bool;

    /// Transfers the locked tokens back to the lock owner.
    ///
    /// ## Panics
    /// - if the lock does not exist
    /// - if the predecessor account is not the lock owner
    /// - if the lock has already been unlocked
    /// - if the lock has not matured yet
    fn unlock(&mut self, idx: LockIdx) -> TokenAmount;
}

pub mod events {

    #[derive(Debug)]
    pub struct Locked<'a> {
        pub idx: u64,
        pub owner_id: &'a str,
        pub nonce: u64,
        pub amount: u128,
        pub matures_at: u64,
    }

    #[derive(Debug)]
    pub struct Unlocked<'a> {
        pub idx: u64,
        pub owner_id: &'a str,
        pub amount: u128,
    }
}
