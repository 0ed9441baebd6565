//! Session reconciliation: ambient wallet session -> consistent snapshot
//!
//! All session and fetch state lives in one `SessionPhase` value behind a
//! single lock, replaced wholesale on every transition. Transitions:
//!
//! ```text
//! SignedOut ──resolve──▶ Connecting ──handshake ok──▶ Resolving ──▶ Ready
//!     ▲                      │ handshake fails            │ fetch fails
//!     │                      ▼                            ▼
//!     └──disconnect──── Failed ◀──────────────────────────┘
//! ```
//!
//! `Failed` is signed-out-equivalent: no identity, default mission
//! statuses, just a displayable reason. A prior snapshot is never kept
//! silently stale across a failed refresh.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::RwLock;

use seedsage_core::{Balance, Identity, LedgerError, StxAddress, Transaction};
use seedsage_missions::MissionStatus;

use crate::ledger::LedgerQuery;
use crate::provider::{SessionProvider, SessionState};

/// A consistent, atomically published view of a connected wallet
#[derive(Debug, Clone, PartialEq)]
pub struct WalletSnapshot {
    pub identity: Identity,
    pub balance: Balance,
    /// Most-recent-first, as returned by the ledger
    pub transactions: Vec<Transaction>,
    pub missions: Vec<MissionStatus>,
}

impl WalletSnapshot {
    /// Most recent transaction, used as context for explanations
    pub fn last_transaction(&self) -> Option<&Transaction> {
        self.transactions.first()
    }
}

/// The single session state machine
#[derive(Debug, Clone, PartialEq)]
pub enum SessionPhase {
    SignedOut,
    /// A sign-in handshake is being completed
    Connecting,
    /// Signed in; balance and history fetch in flight
    Resolving { address: StxAddress },
    Ready(WalletSnapshot),
    /// Signed-out-equivalent, with a reason the surface can show
    Failed { reason: String },
}

impl SessionPhase {
    /// The resolved identity, if any
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Ready(snapshot) => Some(&snapshot.identity),
            _ => None,
        }
    }

    /// True for the states that present as "not connected"
    pub fn is_signed_out(&self) -> bool {
        matches!(self, Self::SignedOut | Self::Failed { .. })
    }
}

/// Resolves the ambient wallet session into snapshots.
///
/// Cheap to clone; all clones share the same state cell.
#[derive(Clone)]
pub struct Reconciler {
    inner: Arc<Inner>,
}

struct Inner {
    provider: Arc<dyn SessionProvider>,
    ledger: Arc<dyn LedgerQuery>,
    phase: RwLock<SessionPhase>,
    /// Bumped on every identity transition. A completing fetch whose
    /// captured epoch no longer matches is discarded, so a stale result
    /// can never overwrite a newer session (last-completed-wins within
    /// one identity, stale-never-wins across identities).
    ///
    /// Only ever written while `phase`'s write lock is held, so a reader
    /// holding the phase lock always observes a consistent (phase, epoch)
    /// pair and the stale check in `commit_if_current` is atomic with the
    /// phase write.
    epoch: AtomicU64,
}

impl Reconciler {
    pub fn new(provider: Arc<dyn SessionProvider>, ledger: Arc<dyn LedgerQuery>) -> Self {
        Self {
            inner: Arc::new(Inner {
                provider,
                ledger,
                phase: RwLock::new(SessionPhase::SignedOut),
                epoch: AtomicU64::new(0),
            }),
        }
    }

    /// Current phase snapshot
    pub async fn phase(&self) -> SessionPhase {
        self.inner.phase.read().await.clone()
    }

    /// Inspect the ambient session and resolve it to a stable phase.
    ///
    /// A signed-in session that exposes no usable address is invalid: the
    /// ambient session is cleared and the phase becomes `SignedOut` rather
    /// than presenting a skeleton that can never resolve.
    pub async fn resolve_identity(&self) -> SessionPhase {
        match self.inner.provider.state().await {
            SessionState::NoSession => {
                self.transition(SessionPhase::SignedOut).await;
            }
            SessionState::SignInPending => {
                self.transition(SessionPhase::Connecting).await;
                match self.inner.provider.complete_pending_sign_in().await {
                    Ok(()) => self.resolve_signed_in().await,
                    Err(e) => {
                        tracing::warn!(error = %e, "Pending sign-in failed, clearing session");
                        self.inner.provider.sign_out().await;
                        self.transition(SessionPhase::Failed {
                            reason: e.to_string(),
                        })
                        .await;
                    }
                }
            }
            SessionState::SignedIn => self.resolve_signed_in().await,
        }

        self.phase().await
    }

    /// Re-fetch the snapshot for the currently resolved identity.
    /// No-op when no identity is resolved.
    pub async fn refresh(&self) -> SessionPhase {
        // Address and epoch are captured under one read lock; epoch bumps
        // happen under the write lock, so the pair cannot straddle an
        // identity transition
        let target = {
            let phase = self.inner.phase.read().await;
            let address = match &*phase {
                SessionPhase::Ready(snapshot) => Some(snapshot.identity.address.clone()),
                SessionPhase::Resolving { address } => Some(address.clone()),
                _ => None,
            };
            address.map(|address| (address, self.inner.epoch.load(Ordering::SeqCst)))
        };

        match target {
            Some((address, epoch)) => {
                self.fetch_and_commit(address, epoch).await;
            }
            None => tracing::debug!("Refresh ignored, no resolved identity"),
        }

        self.phase().await
    }

    /// Clear the ambient session and the snapshot
    pub async fn disconnect(&self) {
        self.inner.provider.sign_out().await;
        self.transition(SessionPhase::SignedOut).await;
    }

    async fn resolve_signed_in(&self) {
        let addresses = self.inner.provider.load_addresses().await;

        match addresses.preferred().cloned() {
            Some(address) => {
                let epoch = self
                    .transition(SessionPhase::Resolving {
                        address: address.clone(),
                    })
                    .await;
                self.fetch_and_commit(address, epoch).await;
            }
            None => {
                tracing::warn!("Signed-in session exposes no address, forcing sign-out");
                self.inner.provider.sign_out().await;
                self.transition(SessionPhase::SignedOut).await;
            }
        }
    }

    /// Run the snapshot fetch and commit the result, unless the session
    /// moved on while the fetch was in flight
    async fn fetch_and_commit(&self, address: StxAddress, epoch: u64) {
        let result = self.fetch_snapshot(&address).await;

        let phase = match result {
            Ok(snapshot) => SessionPhase::Ready(snapshot),
            Err(e) => {
                tracing::warn!(address = %address, error = %e, "Snapshot fetch failed");
                SessionPhase::Failed {
                    reason: e.to_string(),
                }
            }
        };

        // Relevance is validated at completion time, not start time
        if !self.commit_if_current(epoch, phase).await {
            tracing::debug!(address = %address, "Discarding stale snapshot fetch");
        }
    }

    /// Both reads must succeed for a snapshot to exist; a valid balance is
    /// never mixed with missing history
    async fn fetch_snapshot(&self, address: &StxAddress) -> Result<WalletSnapshot, LedgerError> {
        let (network, balance) = self.inner.ledger.detect_network(address).await?;
        let transactions = self
            .inner
            .ledger
            .recent_transactions(address, network)
            .await?;
        let missions = seedsage_missions::evaluate(&transactions, address);

        Ok(WalletSnapshot {
            identity: Identity {
                address: address.clone(),
                network,
            },
            balance,
            transactions,
            missions,
        })
    }

    /// Replace the phase and bump the epoch in one critical section.
    /// Returns the new epoch for fetches started by this transition.
    async fn transition(&self, phase: SessionPhase) -> u64 {
        let mut lock = self.inner.phase.write().await;
        let epoch = self.inner.epoch.fetch_add(1, Ordering::SeqCst) + 1;
        *lock = phase;
        epoch
    }

    /// Write the phase only if the epoch still matches, with the check and
    /// the write under the same lock. Returns whether the commit happened.
    async fn commit_if_current(&self, epoch: u64, phase: SessionPhase) -> bool {
        let mut lock = self.inner.phase.write().await;
        if self.inner.epoch.load(Ordering::SeqCst) != epoch {
            return false;
        }
        *lock = phase;
        true
    }
}
