//! Integration tests for the wallet store mutation contract
//!
//! Covers the generate -> faucet -> send lifecycle and every validation
//! failure mode of the mock send path.

mod common;

use baint_wallet::error::WalletError;
use baint_wallet::storage::{Token, TxKind};
use common::TestEnvironment;

fn assert_hex_id(value: &str, hex_len: usize) {
    let body = value
        .strip_prefix("0x")
        .expect("identifier must be 0x-prefixed");
    assert_eq!(body.len(), hex_len);
    assert!(body
        .chars()
        .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
}

#[test]
fn test_generate_wallet_initializes_empty_state() -> anyhow::Result<()> {
    let mut env = TestEnvironment::new()?;

    assert!(env.store.generate_wallet(true)?);

    let state = env.store.state();
    assert_hex_id(state.address.as_deref().expect("address set"), 40);
    assert_hex_id(state.private_key.as_deref().expect("private key set"), 64);
    assert_eq!(state.balances.mim, 0.0);
    assert_eq!(state.balances.baint, 0.0);
    assert!(state.transactions.is_empty());
    Ok(())
}

#[test]
fn test_generate_declined_is_a_noop() -> anyhow::Result<()> {
    let mut env = TestEnvironment::new()?;

    assert!(!env.store.generate_wallet(false)?);
    assert!(env.store.address().is_none());
    assert!(env.store.state().private_key.is_none());

    // Nothing was persisted either
    let reopened = env.reopen()?;
    assert!(reopened.address().is_none());
    Ok(())
}

#[test]
fn test_generate_replaces_identity_and_clears_history() -> anyhow::Result<()> {
    let mut env = TestEnvironment::funded(500.0)?;
    env.store.transfer(Token::Mim, "0xabc123", 100.0)?;

    let old_address = env.store.address().map(str::to_string);
    assert!(env.store.generate_wallet(true)?);

    let state = env.store.state();
    assert_ne!(state.address, old_address);
    assert_eq!(state.balances.mim, 0.0);
    assert_eq!(state.balances.baint, 0.0);
    assert!(state.transactions.is_empty());
    Ok(())
}

#[test]
fn test_faucet_credits_each_token() -> anyhow::Result<()> {
    let mut env = TestEnvironment::new()?;
    env.store.generate_wallet(true)?;

    assert_eq!(env.store.fund_from_faucet(Token::Mim, 500.0)?, 500.0);
    assert_eq!(env.store.fund_from_faucet(Token::Baint, 200.0)?, 200.0);

    let balances = env.store.balances();
    assert_eq!(balances.mim, 500.0);
    assert_eq!(balances.baint, 200.0);

    // Credits accumulate
    env.store.fund_from_faucet(Token::Mim, 500.0)?;
    assert_eq!(env.store.balances().mim, 1000.0);
    Ok(())
}

#[test]
fn test_faucet_requires_wallet() -> anyhow::Result<()> {
    let mut env = TestEnvironment::new()?;

    let err = env.store.fund_from_faucet(Token::Mim, 500.0).unwrap_err();
    assert!(matches!(err, WalletError::NoWallet));
    Ok(())
}

#[test]
fn test_transfer_debits_and_records() -> anyhow::Result<()> {
    let mut env = TestEnvironment::funded(500.0)?;

    let record = env.store.transfer(Token::Mim, "0xabc123", 100.0)?;
    assert_eq!(record.kind, TxKind::MockSend);
    assert_eq!(record.token, Token::Mim);
    assert_eq!(record.recipient, "0xabc123");
    assert_eq!(record.amount, 100.0);

    assert_eq!(env.store.balances().mim, 400.0);
    assert_eq!(env.store.transactions().len(), 1);
    assert_eq!(env.store.transactions().last(), Some(&record));
    Ok(())
}

#[test]
fn test_transfer_insufficient_balance_leaves_state_untouched() -> anyhow::Result<()> {
    let mut env = TestEnvironment::funded(50.0)?;

    let err = env.store.transfer(Token::Mim, "0xabc123", 100.0).unwrap_err();
    assert!(matches!(err, WalletError::InsufficientBalance { .. }));

    assert_eq!(env.store.balances().mim, 50.0);
    assert!(env.store.transactions().is_empty());
    Ok(())
}

#[test]
fn test_transfer_requires_wallet_before_other_checks() -> anyhow::Result<()> {
    let mut env = TestEnvironment::new()?;

    // Even with arguments that would also fail validation, the missing
    // wallet is reported first
    let err = env
        .store
        .transfer(Token::Mim, "not-an-address", -5.0)
        .unwrap_err();
    assert!(matches!(err, WalletError::NoWallet));
    Ok(())
}

#[test]
fn test_transfer_validation_order() -> anyhow::Result<()> {
    let mut env = TestEnvironment::funded(500.0)?;

    // Recipient is checked before amount
    let err = env.store.transfer(Token::Mim, "abc", -5.0).unwrap_err();
    assert!(matches!(err, WalletError::InvalidRecipient(_)));

    let err = env.store.transfer(Token::Mim, "", 10.0).unwrap_err();
    assert!(matches!(err, WalletError::InvalidRecipient(_)));

    let err = env.store.transfer(Token::Mim, "0xabc", 0.0).unwrap_err();
    assert!(matches!(err, WalletError::InvalidAmount(_)));

    let err = env
        .store
        .transfer(Token::Mim, "0xabc", f64::NAN)
        .unwrap_err();
    assert!(matches!(err, WalletError::InvalidAmount(_)));

    // None of the failures mutated anything
    assert_eq!(env.store.balances().mim, 500.0);
    assert!(env.store.transactions().is_empty());
    Ok(())
}

#[test]
fn test_transfer_rounds_to_six_decimals() -> anyhow::Result<()> {
    let mut env = TestEnvironment::funded(1.0)?;

    let record = env.store.transfer(Token::Mim, "0xabc", 0.1234567)?;
    assert_eq!(record.amount, 0.123457);
    assert_eq!(env.store.balances().mim, 0.876543);
    Ok(())
}

#[test]
fn test_transaction_ids_are_monotonic() -> anyhow::Result<()> {
    let mut env = TestEnvironment::funded(500.0)?;

    let a = env.store.transfer(Token::Mim, "0xaaa", 1.0)?;
    let b = env.store.transfer(Token::Mim, "0xbbb", 1.0)?;
    let c = env.store.transfer(Token::Mim, "0xccc", 1.0)?;
    assert!(a.id < b.id);
    assert!(b.id < c.id);
    Ok(())
}

#[test]
fn test_set_balances_overrides_and_skips_invalid() -> anyhow::Result<()> {
    let mut env = TestEnvironment::funded(500.0)?;
    env.store.fund_from_faucet(Token::Baint, 200.0)?;

    // Only the named token changes
    let balances = env.store.set_balances(Some(12.5), None)?;
    assert_eq!(balances.mim, 12.5);
    assert_eq!(balances.baint, 200.0);

    // Non-finite and negative values leave that token alone
    let balances = env.store.set_balances(Some(f64::NAN), Some(7.0))?;
    assert_eq!(balances.mim, 12.5);
    assert_eq!(balances.baint, 7.0);

    let balances = env.store.set_balances(Some(-3.0), None)?;
    assert_eq!(balances.mim, 12.5);
    Ok(())
}

#[test]
fn test_set_balances_requires_wallet() -> anyhow::Result<()> {
    let mut env = TestEnvironment::new()?;

    let err = env.store.set_balances(Some(10.0), Some(10.0)).unwrap_err();
    assert!(matches!(err, WalletError::NoWallet));
    Ok(())
}

#[test]
fn test_preview_validates_without_mutating() -> anyhow::Result<()> {
    let mut env = TestEnvironment::funded(500.0)?;

    let preview = env.store.preview_transfer(Token::Mim, "0xabc", 100.0)?;
    assert_eq!(preview.recipient, "0xabc");
    assert_eq!(preview.amount, 100.0);

    assert!(env
        .store
        .preview_transfer(Token::Mim, "abc", 100.0)
        .is_err());
    assert!(env
        .store
        .preview_transfer(Token::Mim, "0xabc", 0.0)
        .is_err());

    // Preview never touches balances or the log
    assert_eq!(env.store.balances().mim, 500.0);
    assert!(env.store.transactions().is_empty());
    Ok(())
}

#[test]
fn test_preview_works_without_wallet() -> anyhow::Result<()> {
    let env = TestEnvironment::new()?;

    // Preview only checks recipient and amount, not wallet presence
    let preview = env.store.preview_transfer(Token::Baint, "0xdef", 5.0)?;
    assert_eq!(preview.token, Token::Baint);
    Ok(())
}

#[test]
fn test_balances_never_go_negative() -> anyhow::Result<()> {
    let mut env = TestEnvironment::funded(10.0)?;

    for _ in 0..5 {
        let _ = env.store.transfer(Token::Mim, "0xabc", 4.0);
        let _ = env.store.transfer(Token::Baint, "0xabc", 4.0);
        assert!(env.store.balances().mim >= 0.0);
        assert!(env.store.balances().baint >= 0.0);
    }

    // 10 - 4 - 4 leaves 2, the third send of 4 was rejected
    assert_eq!(env.store.balances().mim, 2.0);
    assert_eq!(env.store.transactions().len(), 2);
    Ok(())
}
