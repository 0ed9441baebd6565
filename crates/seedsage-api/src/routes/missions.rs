//! Mission status endpoints

use axum::{extract::State, routing::get, Json, Router};

use seedsage_missions::{default_statuses, progress};
use seedsage_session::SessionPhase;

use crate::dto::{MissionDto, MissionsResponse};
use crate::AppState;

/// Create mission routes
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_missions))
}

/// GET /missions - Mission statuses with aggregate progress
///
/// Signed-out sessions still get the mission list, all incomplete, so the
/// frontend can render the onboarding checklist before a wallet connects.
pub async fn get_missions(State(state): State<AppState>) -> Json<MissionsResponse> {
    let statuses = match state.reconciler().phase().await {
        SessionPhase::Ready(snapshot) => snapshot.missions,
        _ => default_statuses(),
    };

    let summary = progress(&statuses);
    let missions: Vec<MissionDto> = statuses.iter().map(MissionDto::from).collect();

    Json(MissionsResponse {
        missions,
        completed: summary.completed,
        total: summary.total,
        progress: summary.ratio,
        all_complete: summary.all_complete,
    })
}
