//! Wallet Store - Orchestration Layer
//!
//! Owns the wallet state and its mutation contract, delegating validation and
//! state arithmetic to the operation modules. Every mutating operation
//! persists before returning, so no in-memory-only state survives a call
//! boundary.

use crate::error::WalletError;
use crate::storage::{
    Balances, KeyManager, Storage, Theme, Token, TransactionRecord, WalletState,
};
use crate::wallet::transfer_ops::TransferPreview;
use crate::wallet::{balance_ops, transfer_ops};

/// Owner of the wallet state.
///
/// The display preference lives next to the wallet state, not inside it,
/// because it has its own persistence lifecycle: a reset clears the wallet
/// but keeps the theme.
pub struct WalletStore {
    storage: Storage,
    state: WalletState,
    theme: Theme,
}

impl WalletStore {
    // ============================================================================
    // Constructor
    // ============================================================================

    /// Open the store, recovering persisted state.
    ///
    /// A missing or corrupt record is equivalent to first use and loads as
    /// the default state; real storage failures propagate.
    pub fn open(storage: Storage) -> Result<Self, WalletError> {
        let state = storage.load_state()?;
        let theme = storage.load_theme()?;
        Ok(Self {
            storage,
            state,
            theme,
        })
    }

    // ============================================================================
    // Read projection
    // ============================================================================

    pub fn state(&self) -> &WalletState {
        &self.state
    }

    pub fn address(&self) -> Option<&str> {
        self.state.address.as_deref()
    }

    pub fn balances(&self) -> Balances {
        self.state.balances
    }

    pub fn transactions(&self) -> &[TransactionRecord] {
        &self.state.transactions
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    // ============================================================================
    // Identity lifecycle
    // ============================================================================

    /// Generate a fresh demo identity, wiping balances and history.
    ///
    /// The confirmation gate is supplied by the caller (the front end owns
    /// the dialog); declining is a no-op and nothing is persisted.
    pub fn generate_wallet(&mut self, confirmed: bool) -> Result<bool, WalletError> {
        if !confirmed {
            log::info!("Wallet generation declined");
            return Ok(false);
        }

        let keys = KeyManager::generate();
        log::info!("Generated demo wallet {}", keys.address);

        self.state = WalletState {
            address: Some(keys.address),
            private_key: Some(keys.private_key),
            ..WalletState::default()
        };
        self.storage.save_state(&self.state)?;
        Ok(true)
    }

    /// Wipe the wallet back to first use.
    ///
    /// Clears the persisted state file and persists a fresh default. The
    /// display preference keeps its own file and survives.
    pub fn reset(&mut self, confirmed: bool) -> Result<bool, WalletError> {
        if !confirmed {
            log::info!("Wallet reset declined");
            return Ok(false);
        }

        log::warn!("Resetting demo wallet");
        self.storage.clear_state()?;
        self.state = WalletState::default();
        self.storage.save_state(&self.state)?;
        Ok(true)
    }

    // ============================================================================
    // Balances & transfers
    // ============================================================================

    /// Credit free test funds to a token balance.
    pub fn fund_from_faucet(&mut self, token: Token, amount: f64) -> Result<f64, WalletError> {
        let updated = balance_ops::faucet_credit(&mut self.state, token, amount)?;
        self.storage.save_state(&self.state)?;
        log::info!("Faucet: +{} {}", amount, token.ticker());
        Ok(updated)
    }

    /// Record a mock send, debiting the balance and appending to the log.
    pub fn transfer(
        &mut self,
        token: Token,
        recipient: &str,
        amount: f64,
    ) -> Result<TransactionRecord, WalletError> {
        let record = transfer_ops::execute_transfer(&mut self.state, token, recipient, amount)?;
        self.storage.save_state(&self.state)?;
        log::info!(
            "Mock send: {} {} -> {}",
            record.amount,
            token.ticker(),
            record.recipient
        );
        Ok(record)
    }

    /// Validate a send for display without touching state.
    pub fn preview_transfer(
        &self,
        token: Token,
        recipient: &str,
        amount: f64,
    ) -> Result<TransferPreview, WalletError> {
        transfer_ops::preview_transfer(token, recipient, amount)
    }

    /// Manual balance override from the settings page.
    pub fn set_balances(
        &mut self,
        mim: Option<f64>,
        baint: Option<f64>,
    ) -> Result<Balances, WalletError> {
        balance_ops::override_balances(&mut self.state, mim, baint)?;
        self.storage.save_state(&self.state)?;
        Ok(self.state.balances)
    }

    // ============================================================================
    // Display preference
    // ============================================================================

    /// Flip the light/dark preference and persist it under its own key.
    pub fn toggle_theme(&mut self) -> Result<Theme, WalletError> {
        self.theme = self.theme.toggled();
        self.storage.save_theme(self.theme)?;
        Ok(self.theme)
    }
}
