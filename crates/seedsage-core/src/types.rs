//! Core type definitions for SeedSage

use serde::{Deserialize, Serialize};
use std::fmt;

/// Transaction ID (32 bytes, hex-encoded, usually `0x`-prefixed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TxId(pub String);

impl TxId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stacks principal address (c32-encoded)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StxAddress(pub String);

impl StxAddress {
    pub fn new(addr: impl Into<String>) -> Self {
        Self(addr.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if this is a mainnet address
    pub fn is_mainnet(&self) -> bool {
        self.0.starts_with("SP") || self.0.starts_with("SM")
    }

    /// Check if this is a testnet address
    pub fn is_testnet(&self) -> bool {
        self.0.starts_with("ST") || self.0.starts_with("SN")
    }
}

impl fmt::Display for StxAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Network type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    Testnet,
}

impl Network {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Testnet => "testnet",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Micro-STX amount carried as an integer string (1 STX = 1_000_000 µSTX).
///
/// The ledger reports balances and amounts as decimal integer strings; they
/// are kept as opaque strings end to end and only parsed where arithmetic
/// is genuinely needed, so arbitrarily large values survive round trips.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MicroStx(pub String);

impl MicroStx {
    pub fn new(amount: impl Into<String>) -> Self {
        Self(amount.into())
    }

    pub fn zero() -> Self {
        Self("0".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse into a u128, `None` if the string is not a plain decimal integer
    pub fn as_u128(&self) -> Option<u128> {
        self.0.parse().ok()
    }

    /// Render as a whole-STX decimal string (exact, no floating point)
    pub fn to_stx_string(&self) -> Option<String> {
        self.as_u128().map(|v| format_stx(v as i128))
    }
}

impl fmt::Display for MicroStx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Format a signed micro-STX amount as a whole-STX decimal string.
///
/// Exact integer division, trailing zeros trimmed: `1_500_000` -> "1.5",
/// `-2_000_003` -> "-2.000003", `0` -> "0".
pub fn format_stx(micro: i128) -> String {
    let negative = micro < 0;
    let abs = micro.unsigned_abs();
    let whole = abs / constants::MICROSTX_PER_STX as u128;
    let frac = abs % constants::MICROSTX_PER_STX as u128;

    let mut out = String::new();
    if negative && (whole != 0 || frac != 0) {
        out.push('-');
    }
    out.push_str(&whole.to_string());

    if frac != 0 {
        let digits = format!("{:06}", frac);
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }
    out
}

/// Balance snapshot for an address: a point-in-time read of spendable and
/// locked amounts. Values are external facts and are never derived locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    pub spendable: MicroStx,
    pub locked: MicroStx,
}

/// The active account: address plus the single network it lives on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub address: StxAddress,
    pub network: Network,
}

/// Transaction status as reported by the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxStatus {
    Pending,
    Success,
    Failed,
}

/// Kind-specific transaction payload.
///
/// `Unrecognized` absorbs records whose declared kind is unknown or whose
/// kind-specific fields are missing, so downstream predicate evaluation
/// stays total instead of erroring on malformed upstream data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TxKind {
    TokenTransfer {
        recipient: StxAddress,
        amount: MicroStx,
        memo: Option<String>,
    },
    ContractCall {
        contract_id: String,
        function_name: String,
    },
    ContractDeploy {
        contract_id: String,
    },
    Unrecognized,
}

/// An immutable historical transaction record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub tx_id: TxId,
    pub status: TxStatus,
    pub sender: StxAddress,
    pub fee: MicroStx,
    /// Burn-block timestamp (seconds), absent for mempool transactions
    pub timestamp: Option<u64>,
    #[serde(flatten)]
    pub kind: TxKind,
}

/// Constants
pub mod constants {
    /// 1 STX in micro-STX
    pub const MICROSTX_PER_STX: u64 = 1_000_000;

    /// Transaction-history page size used for mission verification.
    /// Missions only need existence of a qualifying transaction, so a
    /// bounded recent page is a documented approximation of full history.
    pub const DEFAULT_TX_PAGE_LIMIT: u32 = 50;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_network_detection() {
        let mainnet = StxAddress::new("SP2J6ZY48GV1EZ5V2V5RB9MP66SW86PYKKNRV9EJ7");
        assert!(mainnet.is_mainnet());
        assert!(!mainnet.is_testnet());

        let testnet = StxAddress::new("ST1PQEEMQ3ZGQ0B1P9P22A2VTK2C9404090ET002P");
        assert!(testnet.is_testnet());
        assert!(!testnet.is_mainnet());
    }

    #[test]
    fn test_network_display() {
        assert_eq!(Network::Mainnet.as_str(), "mainnet");
        assert_eq!(Network::Testnet.as_str(), "testnet");
    }

    #[test]
    fn test_microstx_parse() {
        assert_eq!(MicroStx::new("1500000").as_u128(), Some(1_500_000));
        assert_eq!(MicroStx::new("0x10").as_u128(), None);
        assert_eq!(MicroStx::new("-5").as_u128(), None);
    }

    #[test]
    fn test_format_stx() {
        assert_eq!(format_stx(0), "0");
        assert_eq!(format_stx(1_500_000), "1.5");
        assert_eq!(format_stx(2_000_003), "2.000003");
        assert_eq!(format_stx(-1_100_000), "-1.1");
        assert_eq!(format_stx(999), "0.000999");
    }

    #[test]
    fn test_tx_kind_serde_tag() {
        let kind = TxKind::TokenTransfer {
            recipient: StxAddress::new("ST2X"),
            amount: MicroStx::new("100"),
            memo: None,
        };
        let json = serde_json::to_value(&kind).unwrap();
        assert_eq!(json["kind"], "token_transfer");
    }
}
