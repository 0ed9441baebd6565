//! Explanation-context endpoint for the AI assistant

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};

use seedsage_session::{explain_context, ExplainContext, SessionPhase};

use crate::dto::{ApiError, ExplainRequest};
use crate::AppState;

/// Create assistant routes
pub fn router() -> Router<AppState> {
    Router::new().route("/context", post(build_context))
}

/// POST /assistant/context - Build the explanation context for one
/// transaction out of the current snapshot
pub async fn build_context(
    State(state): State<AppState>,
    Json(request): Json<ExplainRequest>,
) -> Result<Json<ExplainContext>, (StatusCode, Json<ApiError>)> {
    let snapshot = match state.reconciler().phase().await {
        SessionPhase::Ready(snapshot) => snapshot,
        _ => {
            return Err((
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ApiError::not_connected()),
            ))
        }
    };

    let transaction = match &request.tx_id {
        Some(tx_id) => snapshot
            .transactions
            .iter()
            .find(|tx| tx.tx_id.as_str() == tx_id.as_str()),
        None => snapshot.last_transaction(),
    }
    .ok_or_else(|| {
        (
            StatusCode::NOT_FOUND,
            Json(ApiError::not_found("Transaction not in current snapshot")),
        )
    })?;

    let context = explain_context(&snapshot, transaction, request.intent, request.message);
    Ok(Json(context))
}
