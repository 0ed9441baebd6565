//! Data Transfer Objects for API requests and responses

use serde::{Deserialize, Serialize};

use seedsage_core::{Balance, Transaction, TxKind, TxStatus};
use seedsage_missions::MissionStatus;
use seedsage_session::{SessionPhase, UserProfile};

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Generic API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("internal_error", message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new("not_found", message)
    }

    pub fn not_connected() -> Self {
        Self::new("not_connected", "No wallet connected")
    }
}

/// Session status strings used on the wire
pub mod session_status {
    pub const SIGNED_OUT: &str = "signed_out";
    pub const CONNECTING: &str = "connecting";
    pub const RESOLVING: &str = "resolving";
    pub const READY: &str = "ready";
    pub const FAILED: &str = "failed";
}

/// Current session phase for the frontend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub status: String,
    pub address: Option<String>,
    pub network: Option<String>,
    /// Present only for the failed phase
    pub reason: Option<String>,
}

impl From<&SessionPhase> for SessionResponse {
    fn from(phase: &SessionPhase) -> Self {
        match phase {
            SessionPhase::SignedOut => Self {
                status: session_status::SIGNED_OUT.to_string(),
                address: None,
                network: None,
                reason: None,
            },
            SessionPhase::Connecting => Self {
                status: session_status::CONNECTING.to_string(),
                address: None,
                network: None,
                reason: None,
            },
            SessionPhase::Resolving { address } => Self {
                status: session_status::RESOLVING.to_string(),
                address: Some(address.to_string()),
                network: None,
                reason: None,
            },
            SessionPhase::Ready(snapshot) => Self {
                status: session_status::READY.to_string(),
                address: Some(snapshot.identity.address.to_string()),
                network: Some(snapshot.identity.network.to_string()),
                reason: None,
            },
            SessionPhase::Failed { reason } => Self {
                status: session_status::FAILED.to_string(),
                address: None,
                network: None,
                reason: Some(reason.clone()),
            },
        }
    }
}

/// Wallet balance response: micro-STX integer strings plus whole-STX
/// display strings (absent when the upstream value is not a plain integer)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceResponse {
    pub spendable: String,
    pub locked: String,
    pub spendable_stx: Option<String>,
    pub locked_stx: Option<String>,
}

impl From<&Balance> for BalanceResponse {
    fn from(balance: &Balance) -> Self {
        Self {
            spendable: balance.spendable.to_string(),
            locked: balance.locked.to_string(),
            spendable_stx: balance.spendable.to_stx_string(),
            locked_stx: balance.locked.to_stx_string(),
        }
    }
}

/// One transaction record, flattened for display
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionDto {
    pub tx_id: String,
    pub status: String,
    pub kind: String,
    pub sender: String,
    pub fee: String,
    pub timestamp: Option<u64>,
    pub recipient: Option<String>,
    pub amount: Option<String>,
    pub memo: Option<String>,
    pub contract_id: Option<String>,
    pub function_name: Option<String>,
}

impl From<&Transaction> for TransactionDto {
    fn from(tx: &Transaction) -> Self {
        let status = match tx.status {
            TxStatus::Pending => "pending",
            TxStatus::Success => "success",
            TxStatus::Failed => "failed",
        };

        let mut dto = Self {
            tx_id: tx.tx_id.to_string(),
            status: status.to_string(),
            kind: String::new(),
            sender: tx.sender.to_string(),
            fee: tx.fee.to_string(),
            timestamp: tx.timestamp,
            recipient: None,
            amount: None,
            memo: None,
            contract_id: None,
            function_name: None,
        };

        match &tx.kind {
            TxKind::TokenTransfer {
                recipient,
                amount,
                memo,
            } => {
                dto.kind = "token_transfer".to_string();
                dto.recipient = Some(recipient.to_string());
                dto.amount = Some(amount.to_string());
                dto.memo = memo.clone();
            }
            TxKind::ContractCall {
                contract_id,
                function_name,
            } => {
                dto.kind = "contract_call".to_string();
                dto.contract_id = Some(contract_id.clone());
                dto.function_name = Some(function_name.clone());
            }
            TxKind::ContractDeploy { contract_id } => {
                dto.kind = "smart_contract_deploy".to_string();
                dto.contract_id = Some(contract_id.clone());
            }
            TxKind::Unrecognized => {
                dto.kind = "unrecognized".to_string();
            }
        }

        dto
    }
}

/// Transaction history response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionsResponse {
    pub transactions: Vec<TransactionDto>,
    pub count: usize,
}

/// One mission with its derived completion flag
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissionDto {
    pub id: String,
    pub title: String,
    pub description: String,
    pub reward: u32,
    pub completed: bool,
}

impl From<&MissionStatus> for MissionDto {
    fn from(status: &MissionStatus) -> Self {
        Self {
            id: status.id.clone(),
            title: status.title.clone(),
            description: status.description.clone(),
            reward: status.reward,
            completed: status.completed,
        }
    }
}

/// Mission statuses plus aggregate progress
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissionsResponse {
    pub missions: Vec<MissionDto>,
    pub completed: usize,
    pub total: usize,
    pub progress: f64,
    pub all_complete: bool,
}

/// Badge claim response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimResponse {
    pub submitted: bool,
    pub cancelled: bool,
    pub tx_id: Option<String>,
}

/// Profile upsert request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileRequest {
    pub username: String,
}

/// Stored profile response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub username: String,
}

impl From<UserProfile> for ProfileResponse {
    fn from(profile: UserProfile) -> Self {
        Self {
            username: profile.username,
        }
    }
}

/// Explanation-context request for a transaction in the current snapshot.
/// Without a `tx_id` the most recent transaction is explained.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplainRequest {
    #[serde(default)]
    pub tx_id: Option<String>,
    pub intent: seedsage_session::Intent,
    #[serde(default)]
    pub message: String,
}
