//! Wallet balance and transaction history endpoints

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use seedsage_session::SessionPhase;

use crate::dto::{ApiError, BalanceResponse, TransactionDto, TransactionsResponse};
use crate::AppState;

/// Create wallet routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/balance", get(get_balance))
        .route("/transactions", get(get_transactions))
}

/// GET /wallet/balance - Spendable and locked balance from the snapshot
pub async fn get_balance(
    State(state): State<AppState>,
) -> Result<Json<BalanceResponse>, (StatusCode, Json<ApiError>)> {
    match state.reconciler().phase().await {
        SessionPhase::Ready(snapshot) => Ok(Json(BalanceResponse::from(&snapshot.balance))),
        _ => Err((
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ApiError::not_connected()),
        )),
    }
}

/// GET /wallet/transactions - Recent transactions from the snapshot
pub async fn get_transactions(
    State(state): State<AppState>,
) -> Result<Json<TransactionsResponse>, (StatusCode, Json<ApiError>)> {
    match state.reconciler().phase().await {
        SessionPhase::Ready(snapshot) => {
            let transactions: Vec<TransactionDto> =
                snapshot.transactions.iter().map(TransactionDto::from).collect();
            let count = transactions.len();
            Ok(Json(TransactionsResponse {
                transactions,
                count,
            }))
        }
        _ => Err((
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ApiError::not_connected()),
        )),
    }
}
