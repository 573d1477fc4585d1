use crate::{
    core::{mul_div, Hash},
    domain::TokenAmount,
    errors::Error,
    near::storage_keys::{FEE_EXEMPT_KEY_PREFIX, SWAP_PAIRS_KEY_PREFIX},
};
use near_sdk::{
    borsh::{self, BorshDeserialize, BorshSerialize},
    collections::LookupMap,
    AccountId,
};

/// basis points denominator
const BPS: u128 = 10_000;

/// Skims a fee from transfers that go through a registered swap pair, i.e., buys from and sells to
/// the pair. Wallet to wallet transfers are never charged.
///
/// The fee switch is off until a fee recipient is set. Fee exempt accounts are never charged,
/// whichever side of the transfer they are on.
#[derive(BorshSerialize, BorshDeserialize)]
pub struct FeeSwitch {
    fee_to: Option<AccountId>,
    swap_pairs: LookupMap<Hash, bool>,
    exempt: LookupMap<Hash, bool>,
}

impl Default for FeeSwitch {
    fn default() -> Self {
        Self {
            fee_to: None,
            swap_pairs: LookupMap::new(SWAP_PAIRS_KEY_PREFIX.to_vec()),
            exempt: LookupMap::new(FEE_EXEMPT_KEY_PREFIX.to_vec()),
        }
    }
}

impl FeeSwitch {
    pub fn fee_to(&self) -> Option<&AccountId> {
        self.fee_to.as_ref()
    }

    pub fn set_fee_to(&mut self, account_id: &str) {
        self.fee_to = Some(account_id.to_string());
    }

    pub fn is_swap_pair(&self, account_id: &str) -> bool {
        self.swap_pairs.contains_key(&Hash::from(account_id))
    }

    /// returns true if the pair was newly registered
    ///
    /// ## Errors
    /// - FeeExemptSwapPair - if the account is fee exempt
    pub fn register_swap_pair(&mut self, account_id: &str) -> Result<bool, Error> {
        if self.is_exempt(account_id) {
            return Err(Error::FeeExemptSwapPair);
        }
        Ok(self
            .swap_pairs
            .insert(&Hash::from(account_id), &true)
            .is_none())
    }

    pub fn is_exempt(&self, account_id: &str) -> bool {
        self.exempt.contains_key(&Hash::from(account_id))
    }

    /// custody accounts are exempt - what goes into custody must come back out in full
    pub fn exempt(&mut self, account_id: &str) {
        self.exempt.insert(&Hash::from(account_id), &true);
    }

    /// returns the fee that is charged on the transfer - rounded down
    pub fn fee(
        &self,
        fee_bps: u16,
        sender_id: &str,
        receiver_id: &str,
        amount: TokenAmount,
    ) -> TokenAmount {
        if self.fee_to.is_none() || fee_bps == 0 {
            return TokenAmount::ZERO;
        }
        if self.is_exempt(sender_id) || self.is_exempt(receiver_id) {
            return TokenAmount::ZERO;
        }
        if !self.is_swap_pair(sender_id) && !self.is_swap_pair(receiver_id) {
            return TokenAmount::ZERO;
        }
        mul_div(amount.value(), fee_bps as u128, BPS).into()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test_utils::new_context;
    use near_sdk::{testing_env, MockedBlockchain};

    #[test]
    fn no_fee_until_fee_recipient_is_set() {
        testing_env!(new_context("owner.near"));
        let mut fee_switch = FeeSwitch::default();
        fee_switch.register_swap_pair("pair.near").unwrap();
        assert_eq!(
            fee_switch.fee(500, "pair.near", "alice.near", TokenAmount(1000)),
            TokenAmount::ZERO
        );
    }

    #[test]
    fn swap_transfers_are_charged() {
        testing_env!(new_context("owner.near"));
        let mut fee_switch = FeeSwitch::default();
        fee_switch.set_fee_to("treasury.near");
        assert!(fee_switch.register_swap_pair("pair.near").unwrap());
        assert!(!fee_switch.register_swap_pair("pair.near").unwrap());

        // buy
        assert_eq!(
            fee_switch.fee(500, "pair.near", "alice.near", TokenAmount(2_000_000)),
            TokenAmount(100_000)
        );
        // sell
        assert_eq!(
            fee_switch.fee(500, "alice.near", "pair.near", TokenAmount(1999)),
            TokenAmount(99)
        );
        // wallet to wallet
        assert_eq!(
            fee_switch.fee(500, "alice.near", "bob.near", TokenAmount(2_000_000)),
            TokenAmount::ZERO
        );
    }

    #[test]
    fn fee_exempt_accounts_are_never_charged() {
        testing_env!(new_context("owner.near"));
        let mut fee_switch = FeeSwitch::default();
        fee_switch.set_fee_to("treasury.near");
        fee_switch.register_swap_pair("pair.near").unwrap();
        fee_switch.exempt("vault.near");

        assert!(fee_switch.is_exempt("vault.near"));
        assert!(!fee_switch.is_exempt("pair.near"));
        assert_eq!(
            fee_switch.fee(500, "pair.near", "vault.near", TokenAmount(1000)),
            TokenAmount::ZERO
        );
        assert_eq!(
            fee_switch.fee(500, "vault.near", "pair.near", TokenAmount(1000)),
            TokenAmount::ZERO
        );
    }

    #[test]
    fn fee_exempt_account_cannot_be_registered_as_swap_pair() {
        testing_env!(new_context("owner.near"));
        let mut fee_switch = FeeSwitch::default();
        fee_switch.exempt("vault.near");
        assert_eq!(
            fee_switch.register_swap_pair("vault.near"),
            Err(Error::FeeExemptSwapPair)
        );
        assert!(!fee_switch.is_swap_pair("vault.near"));
    }
}
