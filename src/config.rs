//! Wallet service configuration from environment variables
//!
//! Controls where wallet state is persisted on disk.

use std::env;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct WalletConfig {
    /// Base directory for persisted wallet state
    pub data_dir: PathBuf,
}

impl WalletConfig {
    /// Load configuration from environment variables
    ///
    /// Environment variables:
    /// - `WALLET_DATA_DIR`: base directory for wallet state (default "./wallet-data")
    pub fn from_env() -> Self {
        let data_dir = match env::var("WALLET_DATA_DIR") {
            Ok(dir) if !dir.is_empty() => {
                log::info!("Wallet data directory: {}", dir);
                PathBuf::from(dir)
            }
            _ => {
                log::info!("Wallet data directory: ./wallet-data (default)");
                PathBuf::from("./wallet-data")
            }
        };

        Self { data_dir }
    }
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./wallet-data"),
        }
    }
}
