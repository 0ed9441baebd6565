//! Lenient parsing of ledger-query API payloads into domain types
//!
//! The upstream API is treated as untrusted: any record whose declared kind
//! is unknown, or whose kind-specific fields are missing, converts to
//! `TxKind::Unrecognized` instead of failing the whole page. Mission
//! predicates then simply never match it.

use seedsage_core::{Balance, MicroStx, StxAddress, Transaction, TxId, TxKind, TxStatus};
use serde_json::Value;

/// Parse a `/balances` response into a balance snapshot
pub(crate) fn parse_balance(json: &Value) -> Option<Balance> {
    let stx = json.get("stx")?;
    let spendable = stx["balance"].as_str()?.to_string();
    // Older API versions omit `locked`; treat as zero rather than malformed
    let locked = stx["locked"].as_str().unwrap_or("0").to_string();

    Some(Balance {
        spendable: MicroStx::new(spendable),
        locked: MicroStx::new(locked),
    })
}

/// Parse one transaction record. Returns `None` only when the base fields
/// shared by every kind (id, status, sender) are absent.
pub(crate) fn parse_transaction(item: &Value) -> Option<Transaction> {
    let tx_id = item["tx_id"].as_str()?;
    let status = parse_status(item["tx_status"].as_str()?);
    let sender = item["sender_address"].as_str()?;
    let fee = item["fee_rate"].as_str().unwrap_or("0");
    let timestamp = item["burn_block_time"].as_u64();

    Some(Transaction {
        tx_id: TxId::new(tx_id),
        status,
        sender: StxAddress::new(sender),
        fee: MicroStx::new(fee),
        timestamp,
        kind: parse_kind(item),
    })
}

fn parse_status(status: &str) -> TxStatus {
    match status {
        "success" => TxStatus::Success,
        "pending" => TxStatus::Pending,
        // abort_by_response, abort_by_post_condition, dropped_* and any
        // future failure string all count as failed
        _ => TxStatus::Failed,
    }
}

fn parse_kind(item: &Value) -> TxKind {
    match item["tx_type"].as_str() {
        Some("token_transfer") => {
            let transfer = &item["token_transfer"];
            match (
                transfer["recipient_address"].as_str(),
                transfer["amount"].as_str(),
            ) {
                (Some(recipient), Some(amount)) => TxKind::TokenTransfer {
                    recipient: StxAddress::new(recipient),
                    amount: MicroStx::new(amount),
                    memo: transfer["memo"].as_str().and_then(decode_memo),
                },
                _ => TxKind::Unrecognized,
            }
        }
        Some("contract_call") => {
            let call = &item["contract_call"];
            match (call["contract_id"].as_str(), call["function_name"].as_str()) {
                (Some(contract_id), Some(function_name)) => TxKind::ContractCall {
                    contract_id: contract_id.to_string(),
                    function_name: function_name.to_string(),
                },
                _ => TxKind::Unrecognized,
            }
        }
        Some("smart_contract") => match item["smart_contract"]["contract_id"].as_str() {
            Some(contract_id) => TxKind::ContractDeploy {
                contract_id: contract_id.to_string(),
            },
            None => TxKind::Unrecognized,
        },
        _ => TxKind::Unrecognized,
    }
}

/// Decode a hex-encoded transfer memo (`0x`-prefixed, zero-padded UTF-8).
/// Returns `None` for empty or non-UTF-8 memos.
fn decode_memo(raw: &str) -> Option<String> {
    let hex_str = raw.strip_prefix("0x").unwrap_or(raw);
    let bytes = hex::decode(hex_str).ok()?;

    // The ledger pads memos with trailing NULs to a fixed width
    let end = bytes.iter().rposition(|&b| b != 0).map_or(0, |p| p + 1);
    let text = std::str::from_utf8(&bytes[..end]).ok()?;

    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
