//required in order for near_bindgen macro to work outside of lib.rs
use crate::*;
use crate::{
    domain::Timestamp,
    interface::{self, LockData, LockIdx, Seconds, TimeLockVault, TokenAmount},
    near::assert_ok,
};
use near_sdk::{
    env,
    json_types::{ValidAccountId, U64},
    near_bindgen,
};

#[near_bindgen]
impl TimeLockVault for TokenContract {
    fn lock(
        &mut self,
        token: ValidAccountId,
        amount: TokenAmount,
        start_time: interface::Timestamp,
        duration: Seconds,
        owner_id: ValidAccountId,
    ) -> LockIdx {
        assert_ok(self.vault.lock(
            &mut self.ledger,
            &self.config,
            &env::predecessor_account_id(),
            token.as_ref(),
            amount.into(),
            start_time.into(),
            duration.into(),
            owner_id.as_ref(),
        ))
        .into()
    }

    fn get_lock_idx(&self, owner_id: ValidAccountId, nonce: U64) -> Option<LockIdx> {
        self.vault
            .lock_idx(owner_id.as_ref(), nonce.into())
            .map(Into::into)
    }

    fn lock_nonce(&self, owner_id: ValidAccountId) -> U64 {
        self.vault.nonce(owner_id.as_ref()).into()
    }

    fn lock_data(&self, idx: LockIdx) -> Option<LockData> {
        self.vault.lock_data(idx.into()).map(Into::into)
    }

    fn is_claimable(&self, idx: LockIdx) -> bool {
        assert_ok(self.vault.is_claimable(idx.into(), Timestamp::from_env()))
    }

    fn unlock(&mut self, idx: LockIdx) -> TokenAmount {
        assert_ok(self.vault.unlock(
            &mut self.ledger,
            &self.config,
            &env::predecessor_account_id(),
            idx.into(),
            Timestamp::from_env(),
        ))
        .into()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{interface::FungibleToken, test_utils::*};
    use std::convert::TryFrom;

    fn account(account_id: &str) -> ValidAccountId {
        ValidAccountId::try_from(account_id).unwrap()
    }

    fn vault_account() -> ValidAccountId {
        account(&format!("vault.{}", CONTRACT_ACCOUNT_ID))
    }

    const DAY: u64 = 86_400;

    /// the owner locks 1000 tokens for alice starting at T=1000 for a day
    fn lock_for_alice(ctx: &mut TestContext) -> LockIdx {
        ctx.set_predecessor(OWNER_ACCOUNT_ID);
        ctx.contract.approve(vault_account(), 1000.into());
        ctx.contract.lock(
            account(CONTRACT_ACCOUNT_ID),
            1000.into(),
            1000.into(),
            DAY.into(),
            account("alice.near"),
        )
    }

    #[test]
    fn lock_and_unlock() {
        let mut ctx = TestContext::new();
        ctx.set_block_time(1000);
        let idx = lock_for_alice(&mut ctx);
        assert_eq!(idx.value(), 0);
        assert_eq!(
            ctx.contract.get_lock_idx(account("alice.near"), 0.into()),
            Some(idx)
        );
        assert_eq!(ctx.contract.lock_nonce(account("alice.near")).0, 1);
        assert_eq!(ctx.contract.balance_of(vault_account()), 1000.into());

        let lock = ctx.contract.lock_data(idx).unwrap();
        assert_eq!(lock.owner_id, "alice.near");
        assert_eq!(lock.matures_at.value(), 1000 + DAY);
        assert!(!lock.consumed);

        assert!(!ctx.contract.is_claimable(idx));
        ctx.set_block_time(1000 + DAY);
        assert!(ctx.contract.is_claimable(idx));

        ctx.set_predecessor("alice.near");
        assert_eq!(ctx.contract.unlock(idx), 1000.into());
        assert_eq!(ctx.contract.balance_of(account("alice.near")), 1000.into());
        assert!(ctx.contract.lock_data(idx).unwrap().consumed);
    }

    #[test]
    #[should_panic(expected = "maturity window has not elapsed yet")]
    fn unlock_before_maturity() {
        let mut ctx = TestContext::new();
        ctx.set_block_time(1000);
        let idx = lock_for_alice(&mut ctx);
        ctx.set_block_time(1000 + DAY - 1);
        ctx.set_predecessor("alice.near");
        ctx.contract.unlock(idx);
    }

    #[test]
    #[should_panic(expected = "lock has already been unlocked")]
    fn unlock_twice() {
        let mut ctx = TestContext::new();
        let idx = lock_for_alice(&mut ctx);
        ctx.set_block_time(1000 + DAY);
        ctx.set_predecessor("alice.near");
        ctx.contract.unlock(idx);
        ctx.contract.unlock(idx);
    }

    #[test]
    #[should_panic(expected = "contract call is only allowed by the owner")]
    fn unlock_by_non_owner() {
        let mut ctx = TestContext::new();
        let idx = lock_for_alice(&mut ctx);
        ctx.set_block_time(1000 + DAY);
        ctx.set_predecessor("bob.near");
        ctx.contract.unlock(idx);
    }

    #[test]
    #[should_panic(expected = "token is not supported by the vault")]
    fn lock_unsupported_token() {
        let mut ctx = TestContext::new();
        ctx.contract.approve(vault_account(), 1000.into());
        ctx.contract.lock(
            account("usdt.near"),
            1000.into(),
            0.into(),
            DAY.into(),
            account("alice.near"),
        );
    }

    #[test]
    #[should_panic(expected = "lock does not exist")]
    fn is_claimable_for_unknown_lock() {
        let ctx = TestContext::new();
        ctx.contract.is_claimable(0.into());
    }
}
