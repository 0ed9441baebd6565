//! Badge claim endpoint

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};

use seedsage_core::ClaimError;
use seedsage_session::ClaimOutcome;

use crate::dto::{ApiError, ClaimResponse};
use crate::AppState;

/// Create badge routes
pub fn router() -> Router<AppState> {
    Router::new().route("/claim", post(claim))
}

/// POST /badge/claim - Submit the badge contract call through the signer
pub async fn claim(
    State(state): State<AppState>,
) -> Result<Json<ClaimResponse>, (StatusCode, Json<ApiError>)> {
    match state.badge().claim().await {
        Ok(ClaimOutcome::Submitted { tx_id }) => Ok(Json(ClaimResponse {
            submitted: true,
            cancelled: false,
            tx_id: Some(tx_id.to_string()),
        })),
        Ok(ClaimOutcome::Cancelled) => Ok(Json(ClaimResponse {
            submitted: false,
            cancelled: true,
            tx_id: None,
        })),
        Err(ClaimError::NotConnected) => Err((
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ApiError::not_connected()),
        )),
        Err(ClaimError::SigningFailed { message }) => Err((
            StatusCode::BAD_GATEWAY,
            Json(ApiError::new("signing_failed", message)),
        )),
    }
}
