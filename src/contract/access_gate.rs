//required in order for near_bindgen macro to work outside of lib.rs
use crate::*;
use crate::{
    interface::{
        access_gate::events::{TransferRestrictionLifted, Whitelisted},
        AccessGate,
    },
    near::log,
};
use near_sdk::{json_types::ValidAccountId, near_bindgen};

#[near_bindgen]
impl AccessGate for TokenContract {
    fn set_whitelist(&mut self, account_id: ValidAccountId) {
        self.assert_predecessor_is_owner();
        if self.ledger.access_gate_mut().whitelist(account_id.as_ref()) {
            log(Whitelisted {
                account_id: account_id.as_ref(),
            });
        }
    }

    fn is_whitelist(&self, account_id: ValidAccountId) -> bool {
        self.ledger.access_gate().is_whitelisted(account_id.as_ref())
    }

    fn lift_transfer_restriction(&mut self) {
        self.assert_predecessor_is_owner();
        if self.ledger.access_gate().is_restricted() {
            self.ledger.access_gate_mut().lift_restriction();
            log(TransferRestrictionLifted);
        }
    }

    fn transfer_restriction_active(&self) -> bool {
        self.ledger.access_gate().is_restricted()
    }
}
