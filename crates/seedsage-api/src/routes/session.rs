//! Session lifecycle endpoints

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};

use crate::dto::SessionResponse;
use crate::AppState;

/// Create session routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_session))
        .route("/resolve", post(resolve))
        .route("/refresh", post(refresh))
        .route("/disconnect", post(disconnect))
}

/// GET /session - Current session phase
pub async fn get_session(State(state): State<AppState>) -> Json<SessionResponse> {
    let phase = state.reconciler().phase().await;
    Json(SessionResponse::from(&phase))
}

/// POST /session/resolve - Reconcile provider state into a session phase
pub async fn resolve(State(state): State<AppState>) -> Json<SessionResponse> {
    let phase = state.reconciler().resolve_identity().await;
    Json(SessionResponse::from(&phase))
}

/// POST /session/refresh - Re-fetch chain data for the current address
pub async fn refresh(State(state): State<AppState>) -> Json<SessionResponse> {
    let phase = state.reconciler().refresh().await;
    Json(SessionResponse::from(&phase))
}

/// POST /session/disconnect - Sign out and clear session state
pub async fn disconnect(State(state): State<AppState>) -> Json<SessionResponse> {
    state.reconciler().disconnect().await;
    let phase = state.reconciler().phase().await;
    Json(SessionResponse::from(&phase))
}
