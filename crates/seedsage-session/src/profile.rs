//! Profile datastore seam
//!
//! Profiles are a convenience feature: a backend failure disables the
//! feature, it never fails the dashboard. The trait therefore surfaces
//! `Option`/`bool` rather than errors; implementations log the cause.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

/// Stored per-user profile data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,
}

/// Key-value profile store keyed by user id
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// `None` covers both "no profile" and a backend failure
    async fn profile(&self, user_id: &str) -> Option<UserProfile>;

    /// Upsert; `false` on backend failure
    async fn save_profile(&self, user_id: &str, profile: UserProfile) -> bool;
}

/// In-memory store, used by tests and single-process deployments
#[derive(Default)]
pub struct InMemoryProfileStore {
    entries: RwLock<HashMap<String, UserProfile>>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn profile(&self, user_id: &str) -> Option<UserProfile> {
        self.entries.read().await.get(user_id).cloned()
    }

    async fn save_profile(&self, user_id: &str, profile: UserProfile) -> bool {
        self.entries
            .write()
            .await
            .insert(user_id.to_string(), profile);
        true
    }
}
