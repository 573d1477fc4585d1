use crate::{
    config::Config,
    core::Hash,
    domain::{Ledger, Lock, LockIdx, Seconds, Timestamp, TokenAmount},
    errors::Error,
    interface::time_lock_vault::events::{Locked, Unlocked},
    near::{
        self,
        storage_keys::{LOCKS_KEY_PREFIX, LOCK_INDEXES_KEY_PREFIX, LOCK_NONCES_KEY_PREFIX},
    },
};
use near_sdk::{
    borsh::{self, BorshDeserialize, BorshSerialize},
    collections::{LookupMap, Vector},
    env,
};

/// Holds token deposits in the vault's custody account until they mature.
///
/// Lock indexes are assigned sequentially across all owners. Each owner also has a per owner
/// nonce sequence, which maps to the lock index: `(owner, nonce) -> lock index`.
#[derive(BorshSerialize, BorshDeserialize)]
pub struct TimeLockVault {
    locks: Vector<Lock>,
    lock_indexes: LookupMap<(Hash, u64), LockIdx>,
    /// next nonce per owner
    nonces: LookupMap<Hash, u64>,
}

impl TimeLockVault {
    /// custody account ID for the vault
    pub fn vault_account_id() -> String {
        format!("vault.{}", env::current_account_id())
    }

    /// registers the vault's custody account with the ledger
    pub fn new(ledger: &mut Ledger) -> Self {
        ledger.register_custody_account(&Self::vault_account_id());
        Self {
            locks: Vector::new(LOCKS_KEY_PREFIX.to_vec()),
            lock_indexes: LookupMap::new(LOCK_INDEXES_KEY_PREFIX.to_vec()),
            nonces: LookupMap::new(LOCK_NONCES_KEY_PREFIX.to_vec()),
        }
    }

    /// Locks `amount` on behalf of `owner_id`. The tokens are pulled from the depositor's balance
    /// through the allowance granted to the vault's custody account.
    ///
    /// Only this contract's own token can be locked.
    ///
    /// ## Errors
    /// - [`Error::UnsupportedToken`]
    /// - [`Error::ZeroAmount`]
    /// - any error returned by [`Ledger::transfer_from`]
    #[allow(clippy::too_many_arguments)]
    pub fn lock(
        &mut self,
        ledger: &mut Ledger,
        config: &Config,
        depositor_id: &str,
        token: &str,
        amount: TokenAmount,
        start_time: Timestamp,
        duration: Seconds,
        owner_id: &str,
    ) -> Result<LockIdx, Error> {
        if token != env::current_account_id() {
            return Err(Error::UnsupportedToken);
        }
        if amount.is_zero() {
            return Err(Error::ZeroAmount);
        }
        let vault_account_id = Self::vault_account_id();
        ledger.transfer_from(config, &vault_account_id, depositor_id, &vault_account_id, amount)?;

        let lock = Lock::new(token, owner_id, amount, start_time, duration);
        let idx = LockIdx(self.locks.len());
        self.locks.push(&lock);

        let owner = Hash::from(owner_id);
        let nonce = self.nonce(owner_id);
        self.lock_indexes.insert(&(owner, nonce), &idx);
        self.nonces.insert(&owner, &(nonce + 1));

        near::log(Locked {
            idx: idx.value(),
            owner_id,
            nonce,
            amount: amount.value(),
            matures_at: lock.matures_at().value(),
        });
        Ok(idx)
    }

    /// Releases the lock back to its owner.
    ///
    /// ## Errors
    /// - [`Error::LockNotFound`]
    /// - [`Error::NotOwner`] if the caller is not the lock owner
    /// - [`Error::LockConsumed`] if the lock has already been unlocked
    /// - [`Error::NotYetMatured`]
    /// - any error returned by [`Ledger::transfer`]
    pub fn unlock(
        &mut self,
        ledger: &mut Ledger,
        config: &Config,
        caller_id: &str,
        idx: LockIdx,
        now: Timestamp,
    ) -> Result<TokenAmount, Error> {
        let mut lock = self.lock_data(idx).ok_or(Error::LockNotFound)?;
        if lock.owner_id() != caller_id {
            return Err(Error::NotOwner);
        }
        if lock.consumed() {
            return Err(Error::LockConsumed);
        }
        if !lock.is_claimable(now) {
            return Err(Error::NotYetMatured);
        }
        ledger.transfer(config, &Self::vault_account_id(), caller_id, lock.amount())?;

        lock.consume();
        self.locks.replace(idx.value(), &lock);
        near::log(Unlocked {
            idx: idx.value(),
            owner_id: caller_id,
            amount: lock.amount().value(),
        });
        Ok(lock.amount())
    }

    pub fn lock_data(&self, idx: LockIdx) -> Option<Lock> {
        self.locks.get(idx.value())
    }

    /// ## Errors
    /// [`Error::LockNotFound`]
    pub fn is_claimable(&self, idx: LockIdx, now: Timestamp) -> Result<bool, Error> {
        self.lock_data(idx)
            .map(|lock| lock.is_claimable(now))
            .ok_or(Error::LockNotFound)
    }

    pub fn lock_idx(&self, owner_id: &str, nonce: u64) -> Option<LockIdx> {
        self.lock_indexes.get(&(Hash::from(owner_id), nonce))
    }

    /// the nonce that will be assigned to the owner's next lock
    pub fn nonce(&self, owner_id: &str) -> u64 {
        self.nonces.get(&Hash::from(owner_id)).unwrap_or(0)
    }

    pub fn count(&self) -> u64 {
        self.locks.len()
    }
}
