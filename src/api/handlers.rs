use axum::{extract::State, Json};
use std::sync::MutexGuard;

use crate::error::WalletError;
use crate::storage::Token;
use crate::wallet::transfer_ops::TransferPreview;
use crate::wallet::WalletStore;

use super::server::SharedStore;
use super::types::{
    BalancesResponse, FaucetRequest, FaucetResponse, GenerateWalletRequest,
    GenerateWalletResponse, ResetRequest, ResetResponse, SendRequest, SendResponse,
    SetBalancesRequest, ThemeResponse, WalletStateResponse,
};

fn lock_store(store: &SharedStore) -> Result<MutexGuard<'_, WalletStore>, WalletError> {
    store
        .lock()
        .map_err(|_| WalletError::Internal("wallet store lock poisoned".to_string()))
}

/// Faucet credit per token when the request does not name an amount.
fn default_faucet_amount(token: Token) -> f64 {
    match token {
        Token::Mim => 500.0,
        Token::Baint => 200.0,
    }
}

pub async fn get_state_handler(
    State(store): State<SharedStore>,
) -> Result<Json<WalletStateResponse>, WalletError> {
    let store = lock_store(&store)?;
    let state = store.state();

    Ok(Json(WalletStateResponse {
        address: state.address.clone(),
        balances: state.balances,
        transactions: state.transactions.clone(),
        theme: store.theme(),
    }))
}

pub async fn generate_wallet_handler(
    State(store): State<SharedStore>,
    Json(req): Json<GenerateWalletRequest>,
) -> Result<Json<GenerateWalletResponse>, WalletError> {
    let mut store = lock_store(&store)?;
    let generated = store.generate_wallet(req.confirmed)?;
    let state = store.state();

    Ok(Json(GenerateWalletResponse {
        generated,
        address: state.address.clone(),
        private_key: state.private_key.clone(),
    }))
}

pub async fn faucet_handler(
    State(store): State<SharedStore>,
    Json(req): Json<FaucetRequest>,
) -> Result<Json<FaucetResponse>, WalletError> {
    let amount = req.amount.unwrap_or_else(|| default_faucet_amount(req.token));

    let mut store = lock_store(&store)?;
    let balance = store.fund_from_faucet(req.token, amount)?;

    Ok(Json(FaucetResponse {
        token: req.token,
        credited: amount,
        balance,
    }))
}

pub async fn send_handler(
    State(store): State<SharedStore>,
    Json(req): Json<SendRequest>,
) -> Result<Json<SendResponse>, WalletError> {
    let mut store = lock_store(&store)?;
    let transaction = store.transfer(req.token, &req.recipient, req.amount)?;

    Ok(Json(SendResponse {
        transaction,
        balances: store.balances(),
    }))
}

pub async fn preview_handler(
    State(store): State<SharedStore>,
    Json(req): Json<SendRequest>,
) -> Result<Json<TransferPreview>, WalletError> {
    let store = lock_store(&store)?;
    let preview = store.preview_transfer(req.token, &req.recipient, req.amount)?;
    Ok(Json(preview))
}

pub async fn set_balances_handler(
    State(store): State<SharedStore>,
    Json(req): Json<SetBalancesRequest>,
) -> Result<Json<BalancesResponse>, WalletError> {
    let mut store = lock_store(&store)?;
    let balances = store.set_balances(req.mim, req.baint)?;
    Ok(Json(BalancesResponse { balances }))
}

pub async fn toggle_theme_handler(
    State(store): State<SharedStore>,
) -> Result<Json<ThemeResponse>, WalletError> {
    let mut store = lock_store(&store)?;
    let theme = store.toggle_theme()?;
    Ok(Json(ThemeResponse { theme }))
}

pub async fn reset_handler(
    State(store): State<SharedStore>,
    Json(req): Json<ResetRequest>,
) -> Result<Json<ResetResponse>, WalletError> {
    let mut store = lock_store(&store)?;
    let reset = store.reset(req.confirmed)?;
    Ok(Json(ResetResponse { reset }))
}
