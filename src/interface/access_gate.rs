use near_sdk::json_types::ValidAccountId;

/// Launch phase access control.
///
/// While transfers are restricted, only whitelisted accounts can receive transfers above the
/// restricted transfer threshold. The contract owner is whitelisted at issuance.
pub trait AccessGate {
    /// Adds the account to the whitelist. Accounts cannot be removed from the whitelist.
    ///
    /// ## Panics
    /// if the predecessor account is not the owner account
    fn set_whitelist(&mut self, account_id: ValidAccountId);

    fn is_whitelist(&self, account_id: ValidAccountId) -> bool;

    /// Ends the restricted launch phase - from then on transfers of any amount are allowed to any
    /// account.
    ///
    /// ## Panics
    /// if the predecessor account is not the owner account
    fn lift_transfer_restriction(&mut self);

    fn transfer_restriction_active(&self) -> bool;
}

pub mod events {

    #[derive(Debug)]
    pub struct Whitelisted<'a> {
        pub account_id: &'a str,
    }

    #[derive(Debug)]
    pub struct TransferRestrictionLifted;
}
