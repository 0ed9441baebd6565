//! Configuration types for SeedSage

use serde::{Deserialize, Serialize};

/// Ledger-query service endpoints, one base URL per network
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Testnet API base URL
    pub testnet_url: String,

    /// Mainnet API base URL
    pub mainnet_url: String,

    /// Transaction-history page size
    #[serde(default = "default_tx_page_limit")]
    pub tx_page_limit: u32,
}

fn default_tx_page_limit() -> u32 {
    crate::constants::DEFAULT_TX_PAGE_LIMIT
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            testnet_url: "https://api.testnet.hiro.so".to_string(),
            mainnet_url: "https://api.hiro.so".to_string(),
            tx_page_limit: default_tx_page_limit(),
        }
    }
}

/// On-chain badge contract coordinates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BadgeConfig {
    /// Principal that deployed the badge contract
    pub contract_address: String,

    /// Contract name
    pub contract_name: String,

    /// Public function invoked by the claim
    #[serde(default = "default_claim_function")]
    pub function_name: String,

    /// Fixed UTF-8 memo argument passed to the claim call
    #[serde(default = "default_claim_memo")]
    pub claim_memo: String,
}

fn default_claim_function() -> String {
    "claim".to_string()
}

fn default_claim_memo() -> String {
    "Claiming my SeedSage badge!".to_string()
}

impl Default for BadgeConfig {
    fn default() -> Self {
        Self {
            contract_address: "ST1PQEEMQ3ZGQ0B1P9P22A2VTK2C9404090ET002P".to_string(),
            contract_name: "seedsage-badge".to_string(),
            function_name: default_claim_function(),
            claim_memo: default_claim_memo(),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Ledger-query endpoints
    #[serde(default)]
    pub ledger: LedgerConfig,

    /// Badge contract settings
    #[serde(default)]
    pub badge: BadgeConfig,

    /// API server port
    #[serde(default = "default_api_port")]
    pub api_port: u16,
}

fn default_api_port() -> u16 {
    18432
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ledger: LedgerConfig::default(),
            badge: BadgeConfig::default(),
            api_port: default_api_port(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.ledger.testnet_url, "https://api.testnet.hiro.so");
        assert_eq!(config.ledger.mainnet_url, "https://api.hiro.so");
        assert_eq!(config.ledger.tx_page_limit, 50);
        assert_eq!(config.badge.contract_name, "seedsage-badge");
        assert_eq!(config.badge.function_name, "claim");
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.ledger.testnet_url, config.ledger.testnet_url);
        assert_eq!(parsed.badge.claim_memo, config.badge.claim_memo);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let parsed: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.ledger.tx_page_limit, 50);
        assert_eq!(parsed.badge.claim_memo, "Claiming my SeedSage badge!");
    }
}
