//! seedsage-session: Wallet-session reconciliation for the SeedSage dashboard
//!
//! The reconciler turns the ambient wallet-connect session into a single
//! consistent snapshot (identity, balance, transactions, mission statuses)
//! or a well-defined signed-out state on any failure. Every external
//! collaborator — the wallet SDK, the ledger-query service, the contract
//! signing flow, the profile datastore — sits behind an injected trait so
//! the core is testable without any of them.

pub mod claim;
pub mod explain;
pub mod ledger;
pub mod profile;
pub mod provider;
pub mod reconciler;

pub use claim::{BadgeClaim, ClaimOutcome, ContractCallRequest, ContractSigner};
pub use explain::{explain_context, ExplainContext, Intent, LastTx};
pub use ledger::LedgerQuery;
pub use profile::{InMemoryProfileStore, ProfileStore, UserProfile};
pub use provider::{NetworkAddresses, SessionProvider, SessionState};
pub use reconciler::{Reconciler, SessionPhase, WalletSnapshot};
