use crate::{
    core::Hash, domain::TokenAmount, errors::Error, near::storage_keys::WHITELIST_KEY_PREFIX,
};
use near_sdk::{
    borsh::{self, BorshDeserialize, BorshSerialize},
    collections::LookupMap,
};

/// Guards the ledger transfer path during the restricted launch phase:
/// - whitelisted receivers can receive any amount
/// - receivers that are not whitelisted can only receive transfers up to the threshold
///
/// Whitelist membership only grows. Once the restriction is lifted, every transfer passes the gate.
#[derive(BorshSerialize, BorshDeserialize)]
pub struct AccessGate {
    whitelist: LookupMap<Hash, bool>,
    restricted: bool,
}

impl AccessGate {
    /// the owner is whitelisted at issuance
    pub fn new(owner_id: &str) -> Self {
        let mut gate = Self {
            whitelist: LookupMap::new(WHITELIST_KEY_PREFIX.to_vec()),
            restricted: true,
        };
        gate.whitelist(owner_id);
        gate
    }

    pub fn is_whitelisted(&self, account_id: &str) -> bool {
        self.whitelist.contains_key(&Hash::from(account_id))
    }

    /// returns true if the account was newly added
    pub fn whitelist(&mut self, account_id: &str) -> bool {
        self.whitelist
            .insert(&Hash::from(account_id), &true)
            .is_none()
    }

    pub fn is_restricted(&self) -> bool {
        self.restricted
    }

    /// ends the restricted launch phase
    pub fn lift_restriction(&mut self) {
        self.restricted = false;
    }

    /// ## Errors
    /// [`Error::RestrictedTransfer`] if the receiver is not whitelisted and the amount is greater
    /// than the threshold while the launch phase is restricted
    pub fn check(
        &self,
        threshold: TokenAmount,
        receiver_id: &str,
        amount: TokenAmount,
    ) -> Result<(), Error> {
        if self.restricted && amount > threshold && !self.is_whitelisted(receiver_id) {
            return Err(Error::RestrictedTransfer);
        }
        Ok(())
    }
}
