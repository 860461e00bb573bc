use serde::{Deserialize, Serialize};

use crate::storage::{Balances, Theme, Token, TransactionRecord};

#[derive(Debug, Deserialize)]
pub struct GenerateWalletRequest {
    pub confirmed: bool,
}

#[derive(Debug, Serialize)]
pub struct GenerateWalletResponse {
    pub generated: bool,
    pub address: Option<String>,
    pub private_key: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FaucetRequest {
    pub token: Token,
    pub amount: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct FaucetResponse {
    pub token: Token,
    pub credited: f64,
    pub balance: f64,
}

#[derive(Debug, Deserialize)]
pub struct SendRequest {
    pub token: Token,
    pub recipient: String,
    pub amount: f64,
}

#[derive(Debug, Serialize)]
pub struct SendResponse {
    pub transaction: TransactionRecord,
    pub balances: Balances,
}

#[derive(Debug, Deserialize)]
pub struct SetBalancesRequest {
    pub mim: Option<f64>,
    pub baint: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct BalancesResponse {
    pub balances: Balances,
}

#[derive(Debug, Deserialize)]
pub struct ResetRequest {
    pub confirmed: bool,
}

#[derive(Debug, Serialize)]
pub struct ResetResponse {
    pub reset: bool,
}

#[derive(Debug, Serialize)]
pub struct ThemeResponse {
    pub theme: Theme,
}

#[derive(Debug, Serialize)]
pub struct WalletStateResponse {
    pub address: Option<String>,
    pub balances: Balances,
    pub transactions: Vec<TransactionRecord>,
    pub theme: Theme,
}
