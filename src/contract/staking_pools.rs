//required in order for near_bindgen macro to work outside of lib.rs
use crate::*;
use crate::{
    domain::{self, Timestamp},
    errors::Error,
    interface::{PoolId, StakingPoolInfo, StakingPools, TokenAmount},
    near::assert_ok,
};
use near_sdk::{
    env,
    json_types::{ValidAccountId, U64},
    near_bindgen,
};

#[near_bindgen]
impl StakingPools for TokenContract {
    fn create_staking_pool(&mut self) -> PoolId {
        self.staking_pools
            .create(
                &mut self.ledger,
                &self.config,
                &env::predecessor_account_id(),
                Timestamp::from_env(),
            )
            .into()
    }

    fn staking_pool_count(&self) -> U64 {
        self.staking_pools.count().into()
    }

    fn staking_pool(&self, pool_id: PoolId) -> Option<StakingPoolInfo> {
        self.staking_pools.get(pool_id.into()).map(Into::into)
    }

    fn initialize(&mut self, pool_id: PoolId, reserve: TokenAmount) {
        assert_ok(self.staking_pools.initialize(
            &mut self.ledger,
            &self.config,
            pool_id.into(),
            &env::predecessor_account_id(),
            reserve.into(),
        ));
    }

    fn stake_token(&mut self, pool_id: PoolId, amount: TokenAmount) -> TokenAmount {
        assert_ok(self.staking_pools.stake(
            &mut self.ledger,
            &self.config,
            pool_id.into(),
            &env::predecessor_account_id(),
            amount.into(),
            Timestamp::from_env(),
        ))
        .into()
    }

    fn claim_token(&mut self, pool_id: PoolId) -> TokenAmount {
        let payout = assert_ok(self.staking_pools.claim(
            &mut self.ledger,
            &self.config,
            pool_id.into(),
            &env::predecessor_account_id(),
            Timestamp::from_env(),
        ));
        payout.total().into()
    }

    fn get_staked_amount(&self, pool_id: PoolId, account_id: ValidAccountId) -> TokenAmount {
        assert_ok(
            self.staking_pools
                .staked_amount(pool_id.into(), account_id.as_ref()),
        )
        .into()
    }

    fn get_total_staked_token(&self, pool_id: PoolId) -> TokenAmount {
        self.registered_staking_pool(pool_id).total_staked().into()
    }

    fn get_staking_contract_token(&self, pool_id: PoolId) -> TokenAmount {
        self.registered_staking_pool(pool_id).reserve().into()
    }
}

impl TokenContract {
    /// ## Panics
    /// if the pool does not exist
    fn registered_staking_pool(&self, pool_id: PoolId) -> domain::StakingPool {
        assert_ok(
            self.staking_pools
                .get(pool_id.into())
                .ok_or(Error::PoolNotFound),
        )
    }
}
