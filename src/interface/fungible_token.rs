use crate::interface::TokenAmount;
use near_sdk::json_types::ValidAccountId;

/// Fixed supply fungible token with an allowance table, modeled after
/// [NEP-21](https://github.com/near/NEPs/issues/21).
///
/// All transfers pass through the launch access gate, i.e., while transfers are restricted,
/// receivers that are not whitelisted can only receive up to the restricted transfer threshold per
/// transfer.
pub trait FungibleToken {
    /// Returns total supply, which is fixed at issuance
    fn total_supply(&self) -> TokenAmount;

    /// Returns the token balance for the account - zero for unknown accounts
    fn balance_of(&self, account_id: ValidAccountId) -> TokenAmount;

    /// Returns how much the spender is allowed to transfer on behalf of the owner
    fn allowance(&self, owner_id: ValidAccountId, spender_id: ValidAccountId) -> TokenAmount;

    /// Transfers tokens from the predecessor account to the receiver.
    ///
    /// If either side of the transfer is a registered swap pair and a fee recipient is set, then a
    /// swap fee is deducted from the amount the receiver is credited.
    ///
    /// ## Panics
    /// - if amount is zero
    /// - if the predecessor balance is insufficient
    /// - if the receiver is not whitelisted and the amount is above the restricted transfer
    ///   threshold while transfers are restricted
    fn transfer(&mut self, receiver_id: ValidAccountId, amount: TokenAmount);

    /// Sets the allowance that the spender is allowed to transfer on behalf of the predecessor
    /// account. The allowance is overwritten, i.e., it is not incremented.
    fn approve(&mut self, spender_id: ValidAccountId, amount: TokenAmount);

    /// Transfers tokens on behalf of the owner. The predecessor account is the spender.
    ///
    /// ## Panics
    /// - if the predecessor's allowance is insufficient
    /// - for the same reasons as [`FungibleToken::transfer`]
    fn transfer_from(
        &mut self,
        owner_id: ValidAccountId,
        receiver_id: ValidAccountId,
        amount: TokenAmount,
    );
}

pub mod events {

    #[derive(Debug)]
    pub struct Transfer<'a> {
        pub sender_id: &'a str,
        pub receiver_id: &'a str,
        pub amount: u128,
    }

    #[derive(Debug)]
    pub struct Approval<'a> {
        pub owner_id: &'a str,
        pub spender_id: &'a str,
        pub amount: u128,
    }

    #[derive(Debug)]
    pub struct FeeCharged<'a> {
        pub sender_id: &'a str,
        pub receiver_id: &'a str,
        pub fee_to: &'a str,
        pub fee: u128,
    }
}
