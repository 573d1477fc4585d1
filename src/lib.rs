pub mod config;
pub mod contract;
pub mod core;
pub mod domain;
pub mod errors;
pub mod interface;
pub mod near;

#[cfg(test)]
pub(crate) mod test_utils;

pub use contract::settings::ContractSettings;

use crate::{
    config::Config,
    domain::{BlockHeight, Ledger, StakingPools, TimeLockVault},
    errors::asserts::{CONTRACT_ALREADY_INITIALIZED, CONTRACT_NOT_INITIALIZED},
    near::assert_ok,
};
use near_sdk::{
    borsh::{self, BorshDeserialize, BorshSerialize},
    env, near_bindgen, wee_alloc, AccountId,
};

#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[near_bindgen]
#[derive(BorshDeserialize, BorshSerialize)]
pub struct TokenContract {
    owner_id: AccountId,

    config: Config,
    /// when the config was last changed
    /// the block info can be looked up via its block index: https://docs.near.org/docs/api/rpc#block
    config_change_block_height: BlockHeight,

    /// token balances and allowances - the access gate and fee switch wrap the ledger's transfer path
    ledger: Ledger,
    staking_pools: StakingPools,
    vault: TimeLockVault,
}

impl Default for TokenContract {
    fn default() -> Self {
        panic!("{}", CONTRACT_NOT_INITIALIZED)
    }
}

#[near_bindgen]
impl TokenContract {
    /// Mints the entire token supply to the owner, who is whitelisted. If the owner is not
    /// specified, then the predecessor account is the owner.
    ///
    /// ## Panics
    /// - if the contract is already initialized
    /// - if the config is invalid
    #[init]
    pub fn new(settings: ContractSettings) -> Self {
        assert!(!env::state_exists(), CONTRACT_ALREADY_INITIALIZED);

        let owner_id: AccountId = settings
            .owner_id
            .map_or_else(env::predecessor_account_id, |account_id| account_id.into());

        let mut config = Config::default();
        if let Some(config_change) = settings.config {
            assert_ok(config.merge(config_change));
        }

        let mut ledger = Ledger::new(&owner_id, settings.total_supply.into());
        let vault = TimeLockVault::new(&mut ledger);

        Self {
            owner_id,
            config,
            config_change_block_height: BlockHeight::from_env(),
            ledger,
            staking_pools: StakingPools::default(),
            vault,
        }
    }
}
