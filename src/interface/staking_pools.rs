use crate::interface::{PoolId, StakingPoolInfo, TokenAmount};
use near_sdk::json_types::{ValidAccountId, U64};

/// Staking pools pay stakers their principal plus a pro-rata share of a reward reserve, which is
/// funded by the pool owner.
///
/// Pool lifecycle:
/// 1. any account can create a pool, which it then owns
/// 2. the pool owner initializes the pool by funding the reward reserve
/// 3. accounts stake tokens until the pool matures
/// 4. once the pool has matured, stakers claim `principal + principal * reserve / total_staked`
///
/// Tokens are pulled into the pool through allowances, i.e., before funding or staking, the
/// account must approve the pool's custody account (see [`StakingPoolInfo::account_id`]) to spend
/// the amount.
pub trait StakingPools {
    /// creates a new staking pool owned by the predecessor account
    fn create_staking_pool(&mut self) -> PoolId;

    fn staking_pool_count(&self) -> U64;

    fn staking_pool(&self, pool_id: PoolId) -> Option<StakingPoolInfo>;

    /// Funds the pool's reward reserve from the owner's balance. Can only be called once.
    ///
    /// ## Panics
    /// - if the pool does not exist
    /// - if the predecessor account is not the pool owner
    /// - if the pool is already initialized
    /// - if the reserve is zero
    /// - if the pool custody account allowance or the owner balance is insufficient
    fn initialize(&mut self, pool_id: PoolId, reserve: TokenAmount);

    /// Stakes tokens from the predecessor account into the pool. Stakes accumulate.
    ///
    /// Returns the account's total staked amount in the pool.
    ///
    /// ## Panics
    /// - if the pool does not exist
    /// - if amount is zero
    /// - if the pool has nothing to distribute, i.e., it has not been funded or it has been drained
    /// - if the pool has matured
    /// - if the pool custody account allowance or the predecessor balance is insufficient
    fn stake_token(&mut self, pool_id: PoolId, amount: TokenAmount) -> TokenAmount;

    /// Transfers the predecessor account's principal plus its share of the reward reserve.
    ///
    /// Returns the amount that was transferred.
    ///
    /// ## Panics
    /// - if the pool does not exist
    /// - if the pool has not matured yet
    /// - if the predecessor account has nothing staked in the pool
    fn claim_token(&mut self, pool_id: PoolId) -> TokenAmount;

    /// ## Panics
    /// if the pool does not exist
    fn get_staked_amount(&self, pool_id: PoolId, account_id: ValidAccountId) -> TokenAmount;

    /// ## Panics
    /// if the pool does not exist
    fn get_total_staked_token(&self, pool_id: PoolId) -> TokenAmount;

    /// returns the pool's remaining reward reserve
    ///
    /// ## Panics
    /// if the pool does not exist
    fn get_staking_contract_token(&self, pool_id: PoolId) -> TokenAmount;
}

pub mod events {

    #[derive(Debug)]
    pub struct PoolCreated<'a> {
        pub pool_id: u64,
        pub owner_id: &'a str,
        pub account_id: &'a str,
        pub matures_at: u64,
    }

    #[derive(Debug)]
    pub struct PoolInitialized {
        pub pool_id: u64,
        pub reserve: u128,
    }

    #[derive(Debug)]
    pub struct Staked<'a> {
        pub pool_id: u64,
        pub account_id: &'a str,
        pub amount: u128,
        /// total staked by the account
        pub staked: u128,
    }

    #[derive(Debug)]
    pub struct Claimed<'a> {
        pub pool_id: u64,
        pub account_id: &'a str,
        pub principal: u128,
        pub reward: u128,
    }
}
