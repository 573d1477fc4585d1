use crate::{near::NANOS_PER_SECOND, ContractSettings, TokenContract};
use near_sdk::{testing_env, AccountId, MockedBlockchain, VMContext};

pub const CONTRACT_ACCOUNT_ID: &str = "launch-token.near";
pub const OWNER_ACCOUNT_ID: &str = "owner.near";
pub const TOTAL_SUPPLY: u128 = 1_000_000_000;

pub fn to_account_id(id: &str) -> AccountId {
    id.to_string()
}

pub fn new_context(predecessor_account_id: &str) -> VMContext {
    VMContext {
        current_account_id: to_account_id(CONTRACT_ACCOUNT_ID),
        signer_account_id: to_account_id(predecessor_account_id),
        signer_account_pk: vec![0, 1, 2],
        predecessor_account_id: to_account_id(predecessor_account_id),
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

pub fn default_contract_settings() -> ContractSettings {
    ContractSettings {
        total_supply: TOTAL_SUPPLY.into(),
        owner_id: None,
        config: None,
    }
}

/// contract deployed by [`OWNER_ACCOUNT_ID`] with the default settings
pub struct TestContext {
    pub context: VMContext,
    pub contract: TokenContract,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_settings(default_contract_settings())
    }

    pub fn with_settings(settings: ContractSettings) -> Self {
        let context = new_context(OWNER_ACCOUNT_ID);
        testing_env!(context.clone());
        let contract = TokenContract::new(settings);
        Self { context, contract }
    }

    pub fn set_predecessor(&mut self, account_id: &str) {
        self.context.predecessor_account_id = to_account_id(account_id);
        self.context.signer_account_id = to_account_id(account_id);
        testing_env!(self.context.clone());
    }

    /// block time in seconds
    pub fn set_block_time(&mut self, seconds: u64) {
        self.context.block_timestamp = seconds * NANOS_PER_SECOND;
        self.context.block_index += 1;
        testing_env!(self.context.clone());
    }

    pub fn advance_time(&mut self, seconds: u64) {
        let now = self.context.block_timestamp / NANOS_PER_SECOND;
        self.set_block_time(now + seconds);
    }
}
