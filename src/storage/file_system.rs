use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use super::models::{Theme, WalletState};
use crate::error::StorageError;

const STATE_FILE: &str = "state.json";
const THEME_FILE: &str = "theme";

#[derive(Clone)]
pub struct Storage {
    base_path: PathBuf,
}

impl Storage {
    /// Create a new storage instance with the default base directory ("./wallet-data")
    pub fn new() -> Self {
        Self {
            base_path: PathBuf::from("./wallet-data"),
        }
    }

    /// Create storage with custom base directory (for testing)
    pub fn new_with_base_dir(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    /// Get the base directory path for wallet storage
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_path
    }

    fn state_path(&self) -> PathBuf {
        self.base_path.join(STATE_FILE)
    }

    fn theme_path(&self) -> PathBuf {
        self.base_path.join(THEME_FILE)
    }

    /// Save the wallet state to disk
    pub fn save_state(&self, state: &WalletState) -> Result<(), StorageError> {
        fs::create_dir_all(&self.base_path)?;
        let json = serde_json::to_string_pretty(state)?;
        fs::write(self.state_path(), json)?;
        Ok(())
    }

    /// Load the wallet state from disk.
    ///
    /// A missing or unparseable file yields the default state, so a fresh or
    /// damaged install behaves like first use.
    pub fn load_state(&self) -> Result<WalletState, StorageError> {
        let path = self.state_path();
        if !path.exists() {
            return Ok(WalletState::default());
        }
        let contents = fs::read_to_string(path)?;
        match serde_json::from_str(&contents) {
            Ok(state) => Ok(state),
            Err(e) => {
                log::warn!("Discarding corrupt wallet state: {}", e);
                Ok(WalletState::default())
            }
        }
    }

    /// Remove the persisted wallet state. A missing file is not an error.
    pub fn clear_state(&self) -> Result<(), StorageError> {
        match fs::remove_file(self.state_path()) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Save the display preference to its own file
    pub fn save_theme(&self, theme: Theme) -> Result<(), StorageError> {
        fs::create_dir_all(&self.base_path)?;
        fs::write(self.theme_path(), theme.as_str())?;
        Ok(())
    }

    /// Load the display preference, defaulting to light
    pub fn load_theme(&self) -> Result<Theme, StorageError> {
        let path = self.theme_path();
        if !path.exists() {
            return Ok(Theme::default());
        }
        let contents = fs::read_to_string(path)?;
        Ok(Theme::parse(&contents).unwrap_or_else(|| {
            log::warn!(
                "Unknown theme value {:?}, defaulting to light",
                contents.trim()
            );
            Theme::default()
        }))
    }
}
