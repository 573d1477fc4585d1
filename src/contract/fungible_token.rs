//required in order for near_bindgen macro to work outside of lib.rs
use crate::*;
use crate::{
    interface::{FungibleToken, TokenAmount},
    near::assert_ok,
};
use near_sdk::{env, json_types::ValidAccountId, near_bindgen};

#[near_bindgen]
impl FungibleToken for TokenContract {
    fn total_supply(&self) -> TokenAmount {
        self.ledger.total_supply().into()
    }

    fn balance_of(&self, account_id: ValidAccountId) -> TokenAmount {
        self.ledger.balance_of(account_id.as_ref()).into()
    }

    fn allowance(&self, owner_id: ValidAccountId, spender_id: ValidAccountId) -> TokenAmount {
        self.ledger
            .allowance(owner_id.as_ref(), spender_id.as_ref())
            .into()
    }

    fn transfer(&mut self, receiver_id: ValidAccountId, amount: TokenAmount) {
        assert_ok(self.ledger.transfer(
            &self.config,
            &env::predecessor_account_id(),
            receiver_id.as_ref(),
            amount.into(),
        ));
    }

    fn approve(&mut self, spender_id: ValidAccountId, amount: TokenAmount) {
        self.ledger.approve(
            &env::predecessor_account_id(),
            spender_id.as_ref(),
            amount.into(),
        );
    }

    fn transfer_from(
        &mut self,
        owner_id: ValidAccountId,
        receiver_id: ValidAccountId,
        amount: TokenAmount,
    ) {
        assert_ok(self.ledger.transfer_from(
            &self.config,
            &env::predecessor_account_id(),
            owner_id.as_ref(),
            receiver_id.as_ref(),
            amount.into(),
        ));
    }
}
