mod test_utils;

use oysterpack_near_launch_token::interface::{
    AccessGate, ContractOwner, FungibleToken, LockIdx, TimeLockVault,
};
use test_utils::*;

fn vault_account() -> String {
    format!("vault.{}", CONTRACT_ACCOUNT_ID)
}

/// the owner locks tokens on behalf of alice
fn lock_for_alice(ctx: &mut TestContext, amount: u128, start_time: u64, duration: u64) -> LockIdx {
    let contract = ctx.as_account(OWNER_ACCOUNT_ID);
    contract.approve(account(&vault_account()), amount.into());
    contract.lock(
        account(CONTRACT_ACCOUNT_ID),
        amount.into(),
        start_time.into(),
        duration.into(),
        account("alice.near"),
    )
}

#[test]
fn lock_for_one_day() {
    let mut ctx = TestContext::new();
    let t = 1_700_000_000;
    ctx.set_block_time(t);
    let idx = lock_for_alice(&mut ctx, 1_000, t, DAY);

    assert!(!ctx.contract.is_claimable(idx));
    ctx.set_block_time(t + DAY - 1);
    assert!(!ctx.contract.is_claimable(idx));
    ctx.set_block_time(t + DAY);
    assert!(ctx.contract.is_claimable(idx));

    let alice = ctx.as_account("alice.near");
    assert_eq!(alice.unlock(idx), 1_000.into());
    assert_eq!(alice.balance_of(account("alice.near")), 1_000.into());
    assert_eq!(alice.balance_of(account(&vault_account())), 0.into());
}

#[test]
fn locks_are_indexed_per_owner_nonce() {
    let mut ctx = TestContext::new();
    let first = lock_for_alice(&mut ctx, 100, 0, DAY);
    let second = lock_for_alice(&mut ctx, 200, 0, 2 * DAY);

    assert_eq!(
        ctx.contract.get_lock_idx(account("alice.near"), 0.into()),
        Some(first)
    );
    assert_eq!(
        ctx.contract.get_lock_idx(account("alice.near"), 1.into()),
        Some(second)
    );
    assert_eq!(
        ctx.contract.get_lock_idx(account("alice.near"), 2.into()),
        None
    );
    assert_eq!(ctx.contract.lock_nonce(account("alice.near")).0, 2);
    assert_eq!(ctx.contract.lock_nonce(account("bob.near")).0, 0);

    let lock = ctx.contract.lock_data(second).unwrap();
    assert_eq!(lock.amount, 200.into());
    assert_eq!(lock.duration.value(), 2 * DAY);
    assert_eq!(lock.token, CONTRACT_ACCOUNT_ID);

    // locks mature independently
    ctx.set_block_time(DAY);
    let alice = ctx.as_account("alice.near");
    assert_eq!(alice.unlock(first), 100.into());
    assert!(!alice.is_claimable(second));
}

#[test]
#[should_panic(expected = "maturity window has not elapsed yet")]
fn unlock_one_second_early() {
    let mut ctx = TestContext::new();
    let idx = lock_for_alice(&mut ctx, 1_000, 1_000, DAY);
    ctx.set_block_time(1_000 + DAY - 1);
    ctx.as_account("alice.near").unlock(idx);
}

#[test]
#[should_panic(expected = "lock has already been unlocked")]
fn unlock_twice() {
    let mut ctx = TestContext::new();
    let idx = lock_for_alice(&mut ctx, 1_000, 0, DAY);
    ctx.set_block_time(DAY);
    ctx.as_account("alice.near").unlock(idx);
    ctx.as_account("alice.near").unlock(idx);
}

#[test]
#[should_panic(expected = "insufficient allowance")]
fn lock_without_allowance() {
    let mut ctx = TestContext::new();
    ctx.as_account(OWNER_ACCOUNT_ID).lock(
        account(CONTRACT_ACCOUNT_ID),
        1_000.into(),
        0.into(),
        DAY.into(),
        account("alice.near"),
    );
}

#[test]
#[should_panic(
    expected = "transfer amount exceeds the limit for receivers that are not whitelisted"
)]
fn unlock_above_threshold_without_whitelisting() {
    let mut ctx = TestContext::new();
    let idx = lock_for_alice(&mut ctx, 2_000_000, 0, DAY);
    ctx.set_block_time(DAY);
    ctx.as_account("alice.near").unlock(idx);
}

#[test]
fn unlock_above_threshold_after_whitelisting() {
    let mut ctx = TestContext::new();
    let idx = lock_for_alice(&mut ctx, 2_000_000, 0, DAY);
    ctx.set_block_time(DAY);

    ctx.as_account(OWNER_ACCOUNT_ID)
        .set_whitelist(account("alice.near"));
    let alice = ctx.as_account("alice.near");
    assert_eq!(alice.unlock(idx), 2_000_000.into());
    assert_eq!(alice.balance_of(account("alice.near")), 2_000_000.into());
    assert!(alice.lock_data(idx).unwrap().consumed);
}

#[test]
fn swap_pair_unlocks_in_full() {
    let mut ctx = TestContext::new();
    let contract = ctx.as_account(OWNER_ACCOUNT_ID);
    contract.set_fee_to(account("treasury.near"));
    contract.set_swap_pair(account("alice.near"));
    let idx = lock_for_alice(&mut ctx, 1_000, 0, DAY);
    assert_eq!(
        ctx.contract.balance_of(account(&vault_account())),
        1_000.into()
    );

    ctx.set_block_time(DAY);
    let alice = ctx.as_account("alice.near");
    assert_eq!(alice.unlock(idx), 1_000.into());
    assert_eq!(alice.balance_of(account("alice.near")), 1_000.into());
    assert_eq!(alice.balance_of(account("treasury.near")), 0.into());
}

#[test]
#[should_panic(expected = "fee exempt accounts cannot be registered as swap pairs")]
fn vault_custody_account_cannot_be_a_swap_pair() {
    let mut ctx = TestContext::new();
    ctx.as_account(OWNER_ACCOUNT_ID)
        .set_swap_pair(account(&vault_account()));
}
