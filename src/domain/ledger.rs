use crate::{
    config::Config,
    core::Hash,
    domain::{AccessGate, FeeSwitch, TokenAmount},
    errors::Error,
    interface::fungible_token::events::{Approval, FeeCharged, Transfer},
    near::{
        self,
        storage_keys::{ALLOWANCES_KEY_PREFIX, BALANCES_KEY_PREFIX},
    },
};
use near_sdk::{
    borsh::{self, BorshDeserialize, BorshSerialize},
    collections::LookupMap,
};

/// Fixed supply token ledger. The entire supply is minted to the issuer at construction and is
/// never minted or burned afterwards, i.e., the sum of all account balances always equals the
/// total supply.
///
/// All token movement goes through [`Ledger::transfer`] which enforces the [`AccessGate`] and
/// applies the [`FeeSwitch`].
#[derive(BorshSerialize, BorshDeserialize)]
pub struct Ledger {
    total_supply: TokenAmount,
    balances: LookupMap<Hash, TokenAmount>,
    /// (owner, spender) -> allowance
    allowances: LookupMap<(Hash, Hash), TokenAmount>,
    access_gate: AccessGate,
    fee_switch: FeeSwitch,
}

impl Ledger {
    pub fn new(issuer_id: &str, total_supply: TokenAmount) -> Self {
        let mut ledger = Self {
            total_supply,
            balances: LookupMap::new(BALANCES_KEY_PREFIX.to_vec()),
            allowances: LookupMap::new(ALLOWANCES_KEY_PREFIX.to_vec()),
            access_gate: AccessGate::new(issuer_id),
            fee_switch: FeeSwitch::default(),
        };
        ledger.set_balance(&Hash::from(issuer_id), total_supply);
        ledger
    }

    pub fn total_supply(&self) -> TokenAmount {
        self.total_supply
    }

    pub fn balance_of(&self, account_id: &str) -> TokenAmount {
        self.balance(&Hash::from(account_id))
    }

    pub fn allowance(&self, owner_id: &str, spender_id: &str) -> TokenAmount {
        self.allowances
            .get(&(Hash::from(owner_id), Hash::from(spender_id)))
            .unwrap_or_default()
    }

    /// overwrites the current allowance - setting the allowance to zero revokes it
    pub fn approve(&mut self, owner_id: &str, spender_id: &str, amount: TokenAmount) {
        let key = (Hash::from(owner_id), Hash::from(spender_id));
        if amount.is_zero() {
            self.allowances.remove(&key);
        } else {
            self.allowances.insert(&key, &amount);
        }
        near::log(Approval {
            owner_id,
            spender_id,
            amount: amount.value(),
        });
    }

    /// ## Errors
    /// - [`Error::ZeroAmount`]
    /// - [`Error::InsufficientBalance`] if the sender balance is less than the amount
    /// - [`Error::RestrictedTransfer`] if the access gate rejects the receiver
    pub fn transfer(
        &mut self,
        config: &Config,
        sender_id: &str,
        receiver_id: &str,
        amount: TokenAmount,
    ) -> Result<(), Error> {
        if amount.is_zero() {
            return Err(Error::ZeroAmount);
        }
        let sender = Hash::from(sender_id);
        let sender_balance = self.balance(&sender);
        if sender_balance < amount {
            return Err(Error::InsufficientBalance);
        }
        self.access_gate
            .check(config.restricted_transfer_threshold(), receiver_id, amount)?;

        let fee = self
            .fee_switch
            .fee(config.swap_fee_bps(), sender_id, receiver_id, amount);

        self.set_balance(&sender, sender_balance - amount);
        self.credit(&Hash::from(receiver_id), amount - fee);
        near::log(Transfer {
            sender_id,
            receiver_id,
            amount: amount.value(),
        });

        if !fee.is_zero() {
            if let Some(fee_to) = self.fee_switch.fee_to().cloned() {
                self.credit(&Hash::from(fee_to.as_str()), fee);
                near::log(FeeCharged {
                    sender_id,
                    receiver_id,
                    fee_to: &fee_to,
                    fee: fee.value(),
                });
            }
        }

        Ok(())
    }

    /// spends the owner's tokens on behalf of the owner
    ///
    /// ## Errors
    /// - [`Error::ZeroAmount`]
    /// - [`Error::InsufficientAllowance`] if the spender's allowance is less than the amount
    /// - any error returned by [`Ledger::transfer`]
    pub fn transfer_from(
        &mut self,
        config: &Config,
        spender_id: &str,
        owner_id: &str,
        receiver_id: &str,
        amount: TokenAmount,
    ) -> Result<(), Error> {
        if amount.is_zero() {
            return Err(Error::ZeroAmount);
        }
        let allowance = self.allowance(owner_id, spender_id);
        if allowance < amount {
            return Err(Error::InsufficientAllowance);
        }
        self.transfer(config, owner_id, receiver_id, amount)?;

        let key = (Hash::from(owner_id), Hash::from(spender_id));
        let remaining = allowance - amount;
        if remaining.is_zero() {
            self.allowances.remove(&key);
        } else {
            self.allowances.insert(&key, &remaining);
        }
        Ok(())
    }

    pub fn access_gate(&self) -> &AccessGate {
        &self.access_gate
    }

    pub fn access_gate_mut(&mut self) -> &mut AccessGate {
        &mut self.access_gate
    }

    pub fn fee_switch(&self) -> &FeeSwitch {
        &self.fee_switch
    }

    pub fn fee_switch_mut(&mut self) -> &mut FeeSwitch {
        &mut self.fee_switch
    }

    /// Custody accounts hold tokens on behalf of stakers and lockers. They are whitelisted, which
    /// enables deposits above the restricted transfer threshold, and fee exempt, which ensures
    /// payouts are always backed by what was deposited.
    pub fn register_custody_account(&mut self, account_id: &str) {
        self.access_gate.whitelist(account_id);
        self.fee_switch.exempt(account_id);
    }

    fn balance(&self, account: &Hash) -> TokenAmount {
        self.balances.get(account).unwrap_or_default()
    }

    fn credit(&mut self, account: &Hash, amount: TokenAmount) {
        let balance = self.balance(account);
        self.set_balance(account, balance + amount);
    }

    /// zero balances are not stored
    fn set_balance(&mut self, account: &Hash, balance: TokenAmount) {
        if balance.is_zero() {
            self.balances.remove(account);
        } else {
            self.balances.insert(account, &balance);
        }
    }
}
