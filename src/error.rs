use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::storage::Token;

#[derive(Error, Debug)]
pub enum WalletError {
    #[error("No wallet generated yet")]
    NoWallet,

    #[error("Invalid recipient address: {0:?}")]
    InvalidRecipient(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Insufficient {token} balance: have {available}, need {requested}")]
    InsufficientBalance {
        token: Token,
        available: f64,
        requested: f64,
    },

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl IntoResponse for WalletError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            WalletError::NoWallet => (StatusCode::NOT_FOUND, self.to_string()),
            WalletError::InvalidRecipient(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            WalletError::InvalidAmount(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            WalletError::InsufficientBalance { .. } => (StatusCode::BAD_REQUEST, self.to_string()),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
