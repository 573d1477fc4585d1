pub mod access_gate;
pub mod contract_owner;
pub mod fungible_token;
pub mod settings;
pub mod staking_pools;
pub mod time_lock_vault;

use crate::{errors::asserts::PREDECESSOR_MUST_BE_OWNER, TokenContract};
use near_sdk::env;

impl TokenContract {
    fn assert_predecessor_is_owner(&self) {
        assert_eq!(
            env::predecessor_account_id(),
            self.owner_id,
            "{}",
            PREDECESSOR_MUST_BE_OWNER
        );
    }
}
