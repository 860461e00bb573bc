//! Data models for wallet storage

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Token symbols supported by the demo wallet. The set is fixed; there is no
/// dynamic token registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Token {
    Mim,
    Baint,
}

impl Token {
    /// Display ticker shown in the front end and in log lines.
    pub fn ticker(&self) -> &'static str {
        match self {
            Token::Mim => "$MIMUSD",
            Token::Baint => "$BAINT",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Mim => write!(f, "mim"),
            Token::Baint => write!(f, "baint"),
        }
    }
}

/// Per-token balances. Both entries always exist, defaulting to zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Balances {
    #[serde(default)]
    pub mim: f64,
    #[serde(default)]
    pub baint: f64,
}

impl Balances {
    pub fn get(&self, token: Token) -> f64 {
        match token {
            Token::Mim => self.mim,
            Token::Baint => self.baint,
        }
    }

    pub fn set(&mut self, token: Token, amount: f64) {
        match token {
            Token::Mim => self.mim = amount,
            Token::Baint => self.baint = amount,
        }
    }
}

/// Kind tag on a transaction record. Only mock sends exist today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TxKind {
    MockSend,
}

/// A recorded mock transfer. Immutable once appended to the log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub id: i64,
    pub kind: TxKind,
    pub token: Token,
    pub recipient: String,
    pub amount: f64,
    pub timestamp: DateTime<Utc>,
}

/// Persisted wallet state.
///
/// `address` and `private_key` are either both set or both absent: generation
/// assigns them together and only a reset clears them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WalletState {
    pub address: Option<String>,
    pub private_key: Option<String>,
    #[serde(default)]
    pub balances: Balances,
    #[serde(default)]
    pub transactions: Vec<TransactionRecord>,
}

/// Light/dark display preference.
///
/// Persisted under its own file so a wallet reset leaves it untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}
