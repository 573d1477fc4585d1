use crate::{
    core::mul_div,
    domain::{PoolId, Timestamp, TokenAmount},
    interface,
};
use near_sdk::{
    borsh::{self, BorshDeserialize, BorshSerialize},
    AccountId,
};

/// Staking pool lifecycle: uninitialized -> open for staking -> matured
///
/// Stakers are paid their principal plus a pro-rata share of the reserve once the pool has matured.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq)]
pub struct StakingPool {
    id: PoolId,
    owner_id: AccountId,
    /// custody account on the ledger that holds the reserve and the staked principal
    account_id: AccountId,
    created_at: Timestamp,
    matures_at: Timestamp,
    reserve: TokenAmount,
    total_staked: TokenAmount,
    initialized: bool,
}

impl StakingPool {
    pub fn new(
        id: PoolId,
        owner_id: &str,
        account_id: &str,
        created_at: Timestamp,
        matures_at: Timestamp,
    ) -> Self {
        Self {
            id,
            owner_id: owner_id.to_string(),
            account_id: account_id.to_string(),
            created_at,
            matures_at,
            reserve: TokenAmount::ZERO,
            total_staked: TokenAmount::ZERO,
            initialized: false,
        }
    }

    pub fn id(&self) -> PoolId {
        self.id
    }

    pub fn owner_id(&self) -> &str {
        &self.owner_id
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    pub fn matures_at(&self) -> Timestamp {
        self.matures_at
    }

    /// remaining reward reserve
    pub fn reserve(&self) -> TokenAmount {
        self.reserve
    }

    pub fn total_staked(&self) -> TokenAmount {
        self.total_staked
    }

    pub fn initialized(&self) -> bool {
        self.initialized
    }

    pub fn is_matured(&self, now: Timestamp) -> bool {
        now >= self.matures_at
    }

    /// nothing has been contributed to the pool, or everything has been claimed
    pub fn is_empty(&self) -> bool {
        self.total_staked.is_zero() && self.reserve.is_zero()
    }

    pub(crate) fn fund_reserve(&mut self, reserve: TokenAmount) {
        self.reserve = reserve;
        self.initialized = true;
    }

    pub(crate) fn add_stake(&mut self, amount: TokenAmount) {
        self.total_staked += amount;
    }

    /// `reward = principal * reserve / total_staked` - rounded down
    ///
    /// ## Panics
    /// if nothing is staked
    pub fn payout(&self, principal: TokenAmount) -> Payout {
        let reward = mul_div(
            principal.value(),
            self.reserve.value(),
            self.total_staked.value(),
        );
        Payout {
            principal,
            reward: reward.into(),
        }
    }

    /// Both the total staked and the reserve shrink by the claimed share, which keeps the
    /// remaining stakers' share of the reserve the same. The last claimer drains the reserve.
    pub(crate) fn apply_payout(&mut self, payout: Payout) {
        self.total_staked -= payout.principal;
        self.reserve -= payout.reward;
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Payout {
    pub principal: TokenAmount,
    pub reward: TokenAmount,
}

impl Payout {
    pub fn total(&self) -> TokenAmount {
        self.principal + self.reward
    }
}

impl From<StakingPool> for interface::StakingPoolInfo {
    fn from(pool: StakingPool) -> Self {
        Self {
            id: pool.id.into(),
            owner_id: pool.owner_id,
            account_id: pool.account_id,
            created_at: pool.created_at.into(),
            matures_at: pool.matures_at.into(),
            reserve: pool.reserve.into(),
            total_staked: pool.total_staked.into(),
            initialized: pool.initialized,
        }
    }
}
