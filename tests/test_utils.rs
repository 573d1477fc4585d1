#![allow(dead_code)]

extern crate oysterpack_near_launch_token;

use near_sdk::{json_types::ValidAccountId, testing_env, MockedBlockchain, VMContext};
use oysterpack_near_launch_token::{ContractSettings, TokenContract};
use std::convert::TryFrom;

pub const NANOS_PER_SECOND: u64 = 1_000_000_000;
pub const DAY: u64 = 86_400;

pub const CONTRACT_ACCOUNT_ID: &str = "launch-token.near";
pub const OWNER_ACCOUNT_ID: &str = "owner.near";
pub const TOTAL_SUPPLY: u128 = 1_000_000_000;

pub fn account(account_id: &str) -> ValidAccountId {
    ValidAccountId::try_from(account_id).unwrap()
}

pub fn new_context(predecessor_account_id: &str) -> VMContext {
    VMContext {
        current_account_id: CONTRACT_ACCOUNT_ID.to_string(),
        signer_account_id: predecessor_account_id.to_string(),
        signer_account_pk: vec![0, 1, 2],
        predecessor_account_id: predecessor_account_id.to_string(),
        input: vec![],
        epoch_height: 0,
        block_index: 0,
        block_timestamp: 0,
        account_balance: 0,
        account_locked_balance: 0,
        storage_usage: 10u64.pow(6),
        attached_deposit: 0,
        prepaid_gas: 10u64.pow(18),
        random_seed: vec![0, 1, 2],
        is_view: false,
        output_data_receivers: vec![],
    }
}

/// Simulates the blockchain for the contract: every call is made on behalf of the predecessor
/// account at the current block time.
pub struct TestContext {
    context: VMContext,
    pub contract: TokenContract,
}

impl TestContext {
    /// deploys the contract with the default settings - the entire supply is minted to
    /// [`OWNER_ACCOUNT_ID`]
    pub fn new() -> Self {
        let context = new_context(OWNER_ACCOUNT_ID);
        testing_env!(context.clone());
        let contract = TokenContract::new(ContractSettings {
            total_supply: TOTAL_SUPPLY.into(),
            owner_id: None,
            config: None,
        });
        Self { context, contract }
    }

    /// makes the next contract calls on behalf of the account
    pub fn as_account(&mut self, account_id: &str) -> &mut TokenContract {
        self.context.predecessor_account_id = account_id.to_string();
        self.context.signer_account_id = account_id.to_string();
        testing_env!(self.context.clone());
        &mut self.contract
    }

    /// current block time in seconds
    pub fn now(&self) -> u64 {
        self.context.block_timestamp / NANOS_PER_SECOND
    }

    pub fn set_block_time(&mut self, seconds: u64) {
        self.context.block_timestamp = seconds * NANOS_PER_SECOND;
        self.context.block_index += 1;
        testing_env!(self.context.clone());
    }

    pub fn advance_time(&mut self, seconds: u64) {
        self.set_block_time(self.now() + seconds);
    }
}
