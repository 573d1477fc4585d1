use crate::{
    config::Config,
    core::Hash,
    domain::{Ledger, Payout, PoolId, StakingPool, Timestamp, TokenAmount},
    errors::Error,
    interface::staking_pools::events::{Claimed, PoolCreated, PoolInitialized, Staked},
    near::{
        self,
        storage_keys::{STAKES_KEY_PREFIX, STAKING_POOLS_KEY_PREFIX},
    },
};
use near_sdk::{
    borsh::{self, BorshDeserialize, BorshSerialize},
    collections::{LookupMap, Vector},
    env,
};

/// Staking pool factory and per pool stake accounting.
///
/// Each pool owns a custody account on the ledger. Tokens are pulled into custody through the
/// owner's allowance granted to the pool's custody account, and released from custody by plain
/// ledger transfers.
#[derive(BorshSerialize, BorshDeserialize)]
pub struct StakingPools {
    pools: Vector<StakingPool>,
    /// (pool, staker) -> staked principal
    stakes: LookupMap<(PoolId, Hash), TokenAmount>,
}

impl Default for StakingPools {
    fn default() -> Self {
        Self {
            pools: Vector::new(STAKING_POOLS_KEY_PREFIX.to_vec()),
            stakes: LookupMap::new(STAKES_KEY_PREFIX.to_vec()),
        }
    }
}

impl StakingPools {
    /// custody account ID for the pool
    pub fn pool_account_id(pool_id: PoolId) -> String {
        format!("pool-{}.{}", pool_id, env::current_account_id())
    }

    /// Creates a new pool owned by `owner_id`. The pool accepts stakes until it matures, i.e., for
    /// [`Config::staking_maturity`] after creation.
    ///
    /// The pool's custody account is whitelisted, which enables stakes above the restricted
    /// transfer threshold.
    pub fn create(
        &mut self,
        ledger: &mut Ledger,
        config: &Config,
        owner_id: &str,
        now: Timestamp,
    ) -> PoolId {
        let pool_id = PoolId(self.pools.len());
        let account_id = Self::pool_account_id(pool_id);
        let pool = StakingPool::new(
            pool_id,
            owner_id,
            &account_id,
            now,
            now + config.staking_maturity(),
        );
        self.pools.push(&pool);
        ledger.register_custody_account(&account_id);

        near::log(PoolCreated {
            pool_id: pool_id.value(),
            owner_id,
            account_id: &account_id,
            matures_at: pool.matures_at().value(),
        });
        pool_id
    }

    pub fn count(&self) -> u64 {
        self.pools.len()
    }

    pub fn get(&self, pool_id: PoolId) -> Option<StakingPool> {
        self.pools.get(pool_id.value())
    }

    /// ## Errors
    /// [`Error::PoolNotFound`]
    pub fn staked_amount(&self, pool_id: PoolId, account_id: &str) -> Result<TokenAmount, Error> {
        self.pool(pool_id)?;
        Ok(self.staked(pool_id, &Hash::from(account_id)))
    }

    /// Funds the pool's reward reserve from the pool owner's balance. The owner must have approved
    /// the pool's custody account to spend at least `reserve`.
    ///
    /// ## Errors
    /// - [`Error::PoolNotFound`]
    /// - [`Error::NotOwner`] if the caller is not the pool owner
    /// - [`Error::AlreadyInitialized`] if the pool has already been initialized
    /// - [`Error::ZeroAmount`]
    /// - any error returned by [`Ledger::transfer_from`]
    pub fn initialize(
        &mut self,
        ledger: &mut Ledger,
        config: &Config,
        pool_id: PoolId,
        caller_id: &str,
        reserve: TokenAmount,
    ) -> Result<(), Error> {
        let mut pool = self.pool(pool_id)?;
        if pool.owner_id() != caller_id {
            return Err(Error::NotOwner);
        }
        if pool.initialized() {
            return Err(Error::AlreadyInitialized);
        }
        if reserve.is_zero() {
            return Err(Error::ZeroAmount);
        }
        ledger.transfer_from(config, pool.account_id(), caller_id, pool.account_id(), reserve)?;

        pool.fund_reserve(reserve);
        self.pools.replace(pool_id.value(), &pool);
        near::log(PoolInitialized {
            pool_id: pool_id.value(),
            reserve: reserve.value(),
        });
        Ok(())
    }

    /// Stakes are pulled from the staker's balance through the allowance granted to the pool's
    /// custody account. Repeated stakes accumulate.
    ///
    /// Returns the staker's total staked principal.
    ///
    /// ## Errors
    /// - [`Error::PoolNotFound`]
    /// - [`Error::ZeroAmount`]
    /// - [`Error::NothingToClaim`] if the pool holds nothing - there would be no reward to share
    /// - [`Error::WindowClosed`] if the pool has matured
    /// - any error returned by [`Ledger::transfer_from`]
    pub fn stake(
        &mut self,
        ledger: &mut Ledger,
        config: &Config,
        pool_id: PoolId,
        staker_id: &str,
        amount: TokenAmount,
        now: Timestamp,
    ) -> Result<TokenAmount, Error> {
        let mut pool = self.pool(pool_id)?;
        if amount.is_zero() {
            return Err(Error::ZeroAmount);
        }
        if pool.is_empty() {
            return Err(Error::NothingToClaim);
        }
        if pool.is_matured(now) {
            return Err(Error::WindowClosed);
        }
        ledger.transfer_from(config, pool.account_id(), staker_id, pool.account_id(), amount)?;

        let staker = Hash::from(staker_id);
        let staked = self.staked(pool_id, &staker) + amount;
        self.stakes.insert(&(pool_id, staker), &staked);
        pool.add_stake(amount);
        self.pools.replace(pool_id.value(), &pool);

        near::log(Staked {
            pool_id: pool_id.value(),
            account_id: staker_id,
            amount: amount.value(),
            staked: staked.value(),
        });
        Ok(staked)
    }

    /// Pays out the staker's principal plus a pro-rata share of the remaining reserve. The stake is
    /// removed once claimed.
    ///
    /// ## Errors
    /// - [`Error::PoolNotFound`]
    /// - [`Error::NotYetMatured`] if the pool has not matured yet
    /// - [`Error::NothingToClaim`] if the staker has no stake in the pool
    /// - any error returned by [`Ledger::transfer`]
    pub fn claim(
        &mut self,
        ledger: &mut Ledger,
        config: &Config,
        pool_id: PoolId,
        staker_id: &str,
        now: Timestamp,
    ) -> Result<Payout, Error> {
        let mut pool = self.pool(pool_id)?;
        if !pool.is_matured(now) {
            return Err(Error::NotYetMatured);
        }
        let staker = Hash::from(staker_id);
        let principal = self.staked(pool_id, &staker);
        if principal.is_zero() || pool.total_staked().is_zero() {
            return Err(Error::NothingToClaim);
        }

        let payout = pool.payout(principal);
        ledger.transfer(config, pool.account_id(), staker_id, payout.total())?;

        pool.apply_payout(payout);
        self.pools.replace(pool_id.value(), &pool);
        self.stakes.remove(&(pool_id, staker));

        near::log(Claimed {
            pool_id: pool_id.value(),
            account_id: staker_id,
            principal: payout.principal.value(),
            reward: payout.reward.value(),
        });
        Ok(payout)
    }

    fn pool(&self, pool_id: PoolId) -> Result<StakingPool, Error> {
        self.get(pool_id).ok_or(Error::PoolNotFound)
    }

    fn staked(&self, pool_id: PoolId, staker: &Hash) -> TokenAmount {
        self.stakes.get(&(pool_id, *staker)).unwrap_or_default()
    }
}
