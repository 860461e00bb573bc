//! Balance operations
//!
//! Faucet credits and the manual balance override used by the settings page.

use crate::error::WalletError;
use crate::storage::{Token, WalletState};

/// Credit a token balance without any corresponding debit.
///
/// Returns the updated balance. The amount is trusted to be positive; faucets
/// have no upper bound.
pub fn faucet_credit(
    state: &mut WalletState,
    token: Token,
    amount: f64,
) -> Result<f64, WalletError> {
    if state.address.is_none() {
        return Err(WalletError::NoWallet);
    }
    let updated = state.balances.get(token) + amount;
    state.balances.set(token, updated);
    Ok(updated)
}

/// Overwrite balances directly.
///
/// Each token is applied independently: a missing, non-finite, or negative
/// value leaves that token's balance as it was instead of failing the call.
pub fn override_balances(
    state: &mut WalletState,
    mim: Option<f64>,
    baint: Option<f64>,
) -> Result<(), WalletError> {
    if state.address.is_none() {
        return Err(WalletError::NoWallet);
    }
    if let Some(value) = mim.filter(valid_override) {
        state.balances.mim = value;
    }
    if let Some(value) = baint.filter(valid_override) {
        state.balances.baint = value;
    }
    Ok(())
}

fn valid_override(value: &f64) -> bool {
    value.is_finite() && *value >= 0.0
}
