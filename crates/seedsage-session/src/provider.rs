//! Injected seam over the ambient wallet-connect session
//!
//! The wallet SDK exposes a global session object; the reconciler only ever
//! talks to it through this trait so tests can drive every session state
//! without a real wallet.

use async_trait::async_trait;

use seedsage_core::{SessionError, StxAddress};

/// Observable state of the ambient wallet session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Nothing pending, not signed in
    NoSession,
    /// A sign-in handshake is pending and must be completed before the
    /// session can be used
    SignInPending,
    SignedIn,
}

/// Addresses a signed-in session exposes, at most one per network
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkAddresses {
    pub testnet: Option<StxAddress>,
    pub mainnet: Option<StxAddress>,
}

impl NetworkAddresses {
    /// The address the session resolves to: testnet preferred over mainnet,
    /// matching the network-detection precedence
    pub fn preferred(&self) -> Option<&StxAddress> {
        self.testnet.as_ref().or(self.mainnet.as_ref())
    }
}

/// Seam over the wallet-connect session SDK
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// Current ambient session state
    async fn state(&self) -> SessionState;

    /// Complete a pending sign-in handshake
    async fn complete_pending_sign_in(&self) -> Result<(), SessionError>;

    /// Addresses of the signed-in account, per network
    async fn load_addresses(&self) -> NetworkAddresses;

    /// Clear the ambient session
    async fn sign_out(&self);
}
