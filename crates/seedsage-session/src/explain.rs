//! Context assembly for the AI explanation service
//!
//! The explanation service is an external collaborator; the core's only
//! obligation is producing its context object correctly from a resolved
//! snapshot and a selected transaction. Amounts are normalized from
//! micro-STX integers to whole-unit decimal strings with exact integer
//! arithmetic, never floats.

use serde::{Deserialize, Serialize};

use seedsage_core::{format_stx, MicroStx, Network, Transaction, TxKind};

use crate::reconciler::WalletSnapshot;

/// What the user is asking the assistant to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    ExplainTx,
    AskQuestion,
    GenerateMissions,
    SafetyCheck,
}

/// The selected transaction, flattened for the prompt template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastTx {
    pub txid: String,
    pub from: String,
    /// Recipient for transfers, contract id for calls and deploys
    pub to: String,
    /// Whole-STX decimal string, "0" for non-transfers
    pub amount: String,
    /// Whole-STX decimal string
    pub fee: String,
    pub memo: String,
}

/// Structured context handed to the explanation service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplainContext {
    pub address: String,
    pub network: Network,
    /// Whole-STX decimal string, straight from the snapshot balance
    pub balance_before: String,
    /// Best-effort estimate only: spendable minus (amount + fee). Ignores
    /// mempool state and concurrent transactions, and may be negative.
    pub balance_after: String,
    pub last_tx: LastTx,
    pub intent: Intent,
    pub message: String,
}

/// Build the explanation context for one transaction out of a snapshot
pub fn explain_context(
    snapshot: &WalletSnapshot,
    transaction: &Transaction,
    intent: Intent,
    message: impl Into<String>,
) -> ExplainContext {
    // Unparseable amounts count as zero in the estimate; the snapshot
    // balance itself is still reported verbatim
    let balance_before = micro_i128(&snapshot.balance.spendable);
    let fee = micro_i128(&transaction.fee);

    let (to, amount, memo) = match &transaction.kind {
        TxKind::TokenTransfer {
            recipient,
            amount,
            memo,
        } => (
            recipient.to_string(),
            micro_i128(amount),
            memo.clone().unwrap_or_default(),
        ),
        TxKind::ContractCall { contract_id, .. } => (contract_id.clone(), 0, String::new()),
        TxKind::ContractDeploy { contract_id } => (contract_id.clone(), 0, String::new()),
        TxKind::Unrecognized => ("N/A".to_string(), 0, String::new()),
    };

    ExplainContext {
        address: snapshot.identity.address.to_string(),
        network: snapshot.identity.network,
        balance_before: format_stx(balance_before),
        balance_after: format_stx(balance_before.saturating_sub(amount.saturating_add(fee))),
        last_tx: LastTx {
            txid: transaction.tx_id.to_string(),
            from: transaction.sender.to_string(),
            to,
            amount: format_stx(amount),
            fee: format_stx(fee),
            memo,
        },
        intent,
        message: message.into(),
    }
}

/// Micro-STX string to i128 for the estimate: unparseable counts as zero,
/// values past i128 range clamp instead of wrapping
fn micro_i128(value: &MicroStx) -> i128 {
    match value.as_u128() {
        Some(v) => i128::try_from(v).unwrap_or(i128::MAX),
        None => 0,
    }
}
