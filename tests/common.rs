//! Common test utilities for wallet store integration tests
//!
//! Provides a store backed by a temp directory that cleans up on drop, plus
//! helpers to reopen the same directory as a fresh session would.

use tempfile::TempDir;

use baint_wallet::storage::{Storage, Token};
use baint_wallet::wallet::WalletStore;

/// Test environment with automatic cleanup
pub struct TestEnvironment {
    pub temp_dir: TempDir,
    pub store: WalletStore,
}

impl TestEnvironment {
    pub fn new() -> anyhow::Result<Self> {
        let temp_dir = TempDir::new()?;
        let storage = Storage::new_with_base_dir(temp_dir.path().to_path_buf());
        let store = WalletStore::open(storage)?;
        Ok(Self { temp_dir, store })
    }

    /// Environment with a generated wallet and a funded mim balance.
    pub fn funded(mim: f64) -> anyhow::Result<Self> {
        let mut env = Self::new()?;
        env.store.generate_wallet(true)?;
        env.store.fund_from_faucet(Token::Mim, mim)?;
        Ok(env)
    }

    /// Open a second store over the same directory, as a new session would.
    pub fn reopen(&self) -> anyhow::Result<WalletStore> {
        let storage = Storage::new_with_base_dir(self.temp_dir.path().to_path_buf());
        Ok(WalletStore::open(storage)?)
    }
}
