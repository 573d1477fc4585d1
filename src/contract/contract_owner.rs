//required in order for near_bindgen macro to work outside of lib.rs
use crate::*;
use crate::{
    domain::BlockHeight,
    interface::{
        self,
        contract_owner::events::{
            ConfigChanged, FeeRecipientChanged, OwnershipTransferred, SwapPairRegistered,
        },
        ContractOwner,
    },
    near::{assert_ok, log},
};
use near_sdk::{json_types::ValidAccountId, near_bindgen, AccountId};
use std::mem;

#[near_bindgen]
impl ContractOwner for TokenContract {
    fn owner_id(&self) -> AccountId {
        self.owner_id.clone()
    }

    fn transfer_ownership(&mut self, new_owner: ValidAccountId) {
        self.assert_predecessor_is_owner();
        let previous_owner = mem::replace(&mut self.owner_id, new_owner.into());
        self.ledger.access_gate_mut().whitelist(&self.owner_id);

        log(OwnershipTransferred {
            from: &previous_owner,
            to: &self.owner_id,
        });
    }

    fn config(&self) -> interface::Config {
        self.config.into()
    }

    fn config_change_block_height(&self) -> interface::BlockHeight {
        self.config_change_block_height.into()
    }

    fn update_config(&mut self, config: interface::Config) {
        self.assert_predecessor_is_owner();
        assert_ok(self.config.merge(config));
        self.config_change_block_height = BlockHeight::from_env();

        log(ConfigChanged {
            config: &self.config,
        });
    }

    fn set_fee_to(&mut self, account_id: ValidAccountId) {
        self.assert_predecessor_is_owner();
        self.ledger.fee_switch_mut().set_fee_to(account_id.as_ref());

        log(FeeRecipientChanged {
            fee_to: account_id.as_ref(),
        });
    }

    fn fee_to(&self) -> Option<AccountId> {
        self.ledger.fee_switch().fee_to().cloned()
    }

    fn set_swap_pair(&mut self, account_id: ValidAccountId) {
        self.assert_predecessor_is_owner();
        if assert_ok(
            self.ledger
                .fee_switch_mut()
                .register_swap_pair(account_id.as_ref()),
        ) {
            log(SwapPairRegistered {
                account_id: account_id.as_ref(),
            });
        }
    }

    fn is_swap_pair(&self, account_id: ValidAccountId) -> bool {
        self.ledger.fee_switch().is_swap_pair(account_id.as_ref())
    }
}
