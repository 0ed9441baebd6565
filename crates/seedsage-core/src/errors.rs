//! Error types for SeedSage

use thiserror::Error;

/// Core errors that can occur in SeedSage
#[derive(Debug, Error)]
pub enum Error {
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),

    #[error("Claim error: {0}")]
    Claim(#[from] ClaimError),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Wallet-session resolution errors.
///
/// These never surface as a crash: the reconciler resolves each of them to
/// a signed-out-equivalent state after clearing the ambient session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Pending sign-in handshake failed: {reason}")]
    SignInFailed { reason: String },

    #[error("Signed-in session exposes no usable address")]
    NoUsableAddress,
}

/// Ledger-query service errors
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Ledger endpoint unreachable: {url}")]
    Unreachable { url: String },

    #[error("Ledger returned status {status} for {url}")]
    UpstreamStatus { status: u16, url: String },

    #[error("Failed to parse ledger response: {message}")]
    MalformedPayload { message: String },

    #[error("Request timed out after {seconds}s")]
    Timeout { seconds: u64 },

    #[error("Unable to detect network for address {address}")]
    NetworkUndetected { address: String },
}

/// Badge-claim errors. User cancellation is not an error; it is a distinct
/// `ClaimOutcome` variant in the session crate.
#[derive(Debug, Error)]
pub enum ClaimError {
    #[error("No connected wallet to claim with")]
    NotConnected,

    #[error("Signing or broadcast failed: {message}")]
    SigningFailed { message: String },
}

/// Result type alias for SeedSage operations
pub type Result<T> = std::result::Result<T, Error>;
