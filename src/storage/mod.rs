//! Storage and persistence layer
//!
//! - File system operations
//! - Identity generation
//! - Data models

mod file_system;
mod keys;
mod models;

pub use file_system::Storage;
pub use keys::{KeyManager, WalletKeys};
pub use models::{Balances, Theme, Token, TransactionRecord, TxKind, WalletState};
