//! seedsage-missions: Onboarding missions verified against on-chain activity
//!
//! A mission is a static definition paired with a pure predicate over
//! `(transaction list, user address)`. Evaluation is deterministic, total,
//! and side-effect free: the same transaction list always yields the same
//! statuses, in definition order, and malformed records never complete a
//! mission. Completion is recomputed from the raw list on every evaluation;
//! nothing is stored incrementally.

use serde::{Deserialize, Serialize};

use seedsage_core::{StxAddress, Transaction, TxKind, TxStatus};

/// A mission verification predicate
pub type MissionPredicate = fn(&[Transaction], &StxAddress) -> bool;

/// Static mission definition
pub struct MissionDef {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Point reward granted on completion
    pub reward: u32,
    pub verify: MissionPredicate,
}

/// A mission's static metadata paired with its derived completion flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionStatus {
    pub id: String,
    pub title: String,
    pub description: String,
    pub reward: u32,
    pub completed: bool,
}

/// Aggregate mission progress
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MissionProgress {
    pub completed: usize,
    pub total: usize,
    /// completed / total, 0.0 when there are no missions
    pub ratio: f64,
    /// An empty mission set is never "fully complete"
    pub all_complete: bool,
}

/// The fixed, ordered onboarding mission set
pub const MISSIONS: &[MissionDef] = &[
    MissionDef {
        id: "first-transaction",
        title: "First Transaction",
        description: "Send at least 0.000001 test STX to any other address.",
        reward: 50,
        verify: outbound_transfer,
    },
    MissionDef {
        id: "use-a-contract",
        title: "Use a Contract",
        description: "Interact with any smart contract on the testnet.",
        reward: 50,
        verify: contract_interaction,
    },
    MissionDef {
        id: "receive-tokens",
        title: "Receive Tokens",
        description: "Receive some testnet STX from the faucet or a friend.",
        reward: 25,
        verify: inbound_transfer,
    },
];

/// Evaluate every mission predicate against a transaction list.
///
/// Output preserves definition order so presentation is stable across
/// evaluations. An empty list completes nothing.
pub fn evaluate(transactions: &[Transaction], address: &StxAddress) -> Vec<MissionStatus> {
    MISSIONS
        .iter()
        .map(|def| MissionStatus {
            id: def.id.to_string(),
            title: def.title.to_string(),
            description: def.description.to_string(),
            reward: def.reward,
            completed: (def.verify)(transactions, address),
        })
        .collect()
}

/// Mission statuses for a signed-out session: nothing completed
pub fn default_statuses() -> Vec<MissionStatus> {
    MISSIONS
        .iter()
        .map(|def| MissionStatus {
            id: def.id.to_string(),
            title: def.title.to_string(),
            description: def.description.to_string(),
            reward: def.reward,
            completed: false,
        })
        .collect()
}

/// Derive aggregate progress from evaluated statuses
pub fn progress(statuses: &[MissionStatus]) -> MissionProgress {
    let total = statuses.len();
    let completed = statuses.iter().filter(|s| s.completed).count();
    MissionProgress {
        completed,
        total,
        ratio: if total == 0 {
            0.0
        } else {
            completed as f64 / total as f64
        },
        all_complete: total > 0 && completed == total,
    }
}

/// A successful token transfer sent by the user to someone else.
/// Self-transfers (sender == recipient) do not count.
fn outbound_transfer(transactions: &[Transaction], address: &StxAddress) -> bool {
    transactions.iter().any(|tx| {
        tx.status == TxStatus::Success
            && tx.sender == *address
            && match &tx.kind {
                TxKind::TokenTransfer { recipient, .. } => recipient != address,
                TxKind::ContractCall { .. }
                | TxKind::ContractDeploy { .. }
                | TxKind::Unrecognized => false,
            }
    })
}

/// A successful contract call sent by the user
fn contract_interaction(transactions: &[Transaction], address: &StxAddress) -> bool {
    transactions.iter().any(|tx| {
        tx.status == TxStatus::Success
            && tx.sender == *address
            && match &tx.kind {
                TxKind::ContractCall { .. } => true,
                TxKind::TokenTransfer { .. }
                | TxKind::ContractDeploy { .. }
                | TxKind::Unrecognized => false,
            }
    })
}

/// A successful token transfer received by the user from someone else.
/// Self-transfers do not count here either.
fn inbound_transfer(transactions: &[Transaction], address: &StxAddress) -> bool {
    transactions.iter().any(|tx| {
        tx.status == TxStatus::Success
            && tx.sender != *address
            && match &tx.kind {
                TxKind::TokenTransfer { recipient, .. } => recipient == address,
                TxKind::ContractCall { .. }
                | TxKind::ContractDeploy { .. }
                | TxKind::Unrecognized => false,
            }
    })
}
