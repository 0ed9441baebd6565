//! API route handlers

pub mod assistant;
pub mod badge;
pub mod health;
pub mod missions;
pub mod profile;
pub mod session;
pub mod wallet;

use axum::{routing::get, Router};

use crate::AppState;

/// Create the API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/session", session::router())
        .nest("/wallet", wallet::router())
        .nest("/missions", missions::router())
        .nest("/badge", badge::router())
        .nest("/profile", profile::router())
        .nest("/assistant", assistant::router())
        .with_state(state)
}
