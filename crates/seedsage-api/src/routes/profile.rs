//! User profile endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use seedsage_session::UserProfile;

use crate::dto::{ApiError, ProfileRequest, ProfileResponse};
use crate::AppState;

/// Create profile routes
pub fn router() -> Router<AppState> {
    Router::new().route("/:user_id", get(get_profile).put(put_profile))
}

/// GET /profile/:user_id - Look up a stored profile
pub async fn get_profile(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<ProfileResponse>, (StatusCode, Json<ApiError>)> {
    match state.profiles().profile(&user_id).await {
        Some(profile) => Ok(Json(ProfileResponse::from(profile))),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(ApiError::not_found("No profile for that user")),
        )),
    }
}

/// PUT /profile/:user_id - Create or update a profile
pub async fn put_profile(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(request): Json<ProfileRequest>,
) -> Result<Json<ProfileResponse>, (StatusCode, Json<ApiError>)> {
    let profile = UserProfile {
        username: request.username,
    };

    if state.profiles().save_profile(&user_id, profile.clone()).await {
        Ok(Json(ProfileResponse::from(profile)))
    } else {
        Err((
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ApiError::new("profile_unavailable", "Profile store rejected the write")),
        ))
    }
}
