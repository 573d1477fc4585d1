use crate::interface::{BlockHeight, Config};
use near_sdk::{json_types::ValidAccountId, AccountId};

pub trait ContractOwner {
    fn owner_id(&self) -> AccountId;

    /// The new owner is whitelisted.
    ///
    /// ## Panics
    /// if the predecessor account is not the owner account
    fn transfer_ownership(&mut self, new_owner: ValidAccountId);

    fn config(&self) -> Config;

    /// returns the block height when the config was last changed
    fn config_change_block_height(&self) -> BlockHeight;

    /// applies the config fields that are set
    ///
    /// ## Panics
    /// - if the predecessor account is not the owner account
    /// - if the swap fee is above 10_000 bps
    fn update_config(&mut self, config: Config);

    /// Sets the account that receives swap fees. Swap fees are not charged until the fee recipient
    /// is set.
    ///
    /// ## Panics
    /// if the predecessor account is not the owner account
    fn set_fee_to(&mut self, account_id: ValidAccountId);

    fn fee_to(&self) -> Option<AccountId>;

    /// Registers a swap pair account - transfers from and to the pair are charged the swap fee.
    ///
    /// ## Panics
    /// if the predecessor account is not the owner account
    fn set_swap_pair(&mut self, account_id: ValidAccountId);

    fn is_swap_pair(&self, account_id: ValidAccountId) -> bool;
}

pub mod events {

    #[derive(Debug)]
    pub struct OwnershipTransferred<'a> {
        pub from: &'a str,
        pub to: &'a str,
    }

    #[derive(Debug)]
    pub struct ConfigChanged<'a> {
        pub config: &'a crate::config::Config,
    }

    #[derive(Debug)]
    pub struct FeeRecipientChanged<'a> {
        pub fee_to: &'a str,
    }

    #[derive(Debug)]
    pub struct SwapPairRegistered<'a> {
        pub account_id: &'a str,
    }
}
