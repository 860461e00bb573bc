//! Mock send operations
//!
//! Validation, execution, and read-only preview of mock transfers. Checks run
//! in a fixed order (wallet, recipient, amount, balance); the first failure
//! wins and the state is untouched unless every check passes.

use chrono::Utc;
use serde::Serialize;

use crate::error::WalletError;
use crate::storage::{Token, TransactionRecord, TxKind, WalletState};

/// A validated transfer that has not been executed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransferPreview {
    pub token: Token,
    pub recipient: String,
    pub amount: f64,
}

/// Validate recipient and amount without touching wallet state.
pub fn preview_transfer(
    token: Token,
    recipient: &str,
    amount: f64,
) -> Result<TransferPreview, WalletError> {
    validate_recipient(recipient)?;
    validate_amount(amount)?;

    Ok(TransferPreview {
        token,
        recipient: recipient.to_string(),
        amount: round6(amount),
    })
}

/// Execute a mock send against the in-memory state.
///
/// Debits the token balance and appends the record; the caller persists.
pub fn execute_transfer(
    state: &mut WalletState,
    token: Token,
    recipient: &str,
    amount: f64,
) -> Result<TransactionRecord, WalletError> {
    if state.address.is_none() {
        return Err(WalletError::NoWallet);
    }
    validate_recipient(recipient)?;
    validate_amount(amount)?;

    let amount = round6(amount);
    let available = state.balances.get(token);
    if available < amount {
        return Err(WalletError::InsufficientBalance {
            token,
            available,
            requested: amount,
        });
    }

    state.balances.set(token, round6(available - amount));

    let record = TransactionRecord {
        id: next_tx_id(state),
        kind: TxKind::MockSend,
        token,
        recipient: recipient.to_string(),
        amount,
        timestamp: Utc::now(),
    };
    state.transactions.push(record.clone());
    Ok(record)
}

fn validate_recipient(recipient: &str) -> Result<(), WalletError> {
    if recipient.is_empty() || !recipient.starts_with("0x") {
        return Err(WalletError::InvalidRecipient(recipient.to_string()));
    }
    Ok(())
}

fn validate_amount(amount: f64) -> Result<(), WalletError> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(WalletError::InvalidAmount(amount.to_string()));
    }
    Ok(())
}

/// Round to the 6 fractional digits kept for token amounts.
fn round6(value: f64) -> f64 {
    (value * 1_000_000.0).round() / 1_000_000.0
}

/// Millisecond timestamp, bumped past the last record so ids stay strictly
/// increasing even for sends within the same millisecond.
fn next_tx_id(state: &WalletState) -> i64 {
    let now = Utc::now().timestamp_millis();
    match state.transactions.last() {
        Some(last) if last.id >= now => last.id + 1,
        _ => now,
    }
}
