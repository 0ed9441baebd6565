//! Seedsage-api: HTTP API layer for SeedSage
//!
//! Provides a RESTful API for a frontend to interact with the session
//! reconciler, mission evaluator, badge claim, and profile store.

pub mod dto;
pub mod routes;
pub mod server;
pub mod state;

pub use server::*;
pub use state::AppState;
