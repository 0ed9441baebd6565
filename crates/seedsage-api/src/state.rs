//! Application state shared across API handlers

use std::sync::Arc;

use hiro_client::LedgerClient;
use seedsage_core::AppConfig;
use seedsage_session::{
    BadgeClaim, ContractSigner, InMemoryProfileStore, ProfileStore, Reconciler, SessionProvider,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    reconciler: Reconciler,
    badge: BadgeClaim,
    profiles: Arc<dyn ProfileStore>,
}

impl AppState {
    pub fn new(reconciler: Reconciler, badge: BadgeClaim, profiles: Arc<dyn ProfileStore>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                reconciler,
                badge,
                profiles,
            }),
        }
    }

    /// Wire the default HTTP ledger client and in-memory profile store from
    /// config; the wallet-session provider and contract signer stay injected
    /// since they wrap the embedding host's wallet SDK.
    pub fn from_config(
        config: &AppConfig,
        provider: Arc<dyn SessionProvider>,
        signer: Arc<dyn ContractSigner>,
    ) -> Self {
        let ledger = Arc::new(LedgerClient::new(config.ledger.clone()));
        let reconciler = Reconciler::new(provider, ledger);
        let badge = BadgeClaim::new(reconciler.clone(), signer, config.badge.clone());
        Self::new(reconciler, badge, Arc::new(InMemoryProfileStore::new()))
    }

    pub fn reconciler(&self) -> &Reconciler {
        &self.inner.reconciler
    }

    pub fn badge(&self) -> &BadgeClaim {
        &self.inner.badge
    }

    pub fn profiles(&self) -> &Arc<dyn ProfileStore> {
        &self.inner.profiles
    }
}
