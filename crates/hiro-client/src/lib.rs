//! hiro-client: Client for the Hiro ledger-query API
//!
//! Provides the two reads the dashboard core needs — account balance and
//! recent transaction history — plus network detection by probing the
//! testnet and mainnet endpoints for a given address.

pub mod models;

use seedsage_core::{Balance, LedgerConfig, LedgerError, Network, StxAddress, Transaction};

/// Default timeout for ledger API calls.
/// Long enough for a slow public endpoint, short enough to avoid perpetual
/// loading states in the consuming dashboard.
const LEDGER_REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(15);

/// Result type for ledger client operations
pub type Result<T> = std::result::Result<T, LedgerError>;

/// High-level ledger-query client
#[derive(Clone)]
pub struct LedgerClient {
    http: reqwest::Client,
    config: LedgerConfig,
}

impl LedgerClient {
    /// Create a new client for the configured endpoints
    pub fn new(config: LedgerConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Get the current endpoint configuration
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// API base URL for a network
    pub fn base_url(&self, network: Network) -> &str {
        match network {
            Network::Testnet => &self.config.testnet_url,
            Network::Mainnet => &self.config.mainnet_url,
        }
    }

    /// Get the STX balance (spendable + locked) for an address on a network
    pub async fn account_balance(
        &self,
        address: &StxAddress,
        network: Network,
    ) -> Result<Balance> {
        let url = format!(
            "{}/extended/v1/address/{}/balances",
            self.base_url(network),
            address
        );
        let json = self.get_json(&url).await?;
        models::parse_balance(&json).ok_or_else(|| LedgerError::MalformedPayload {
            message: format!("balance response missing stx fields for {}", address),
        })
    }

    /// Get recent transactions for an address (most recent first).
    ///
    /// Items that fail to convert cleanly are kept with an `Unrecognized`
    /// kind rather than failing the page; items missing even the base
    /// fields (id, status, sender) are dropped with a warning.
    pub async fn recent_transactions(
        &self,
        address: &StxAddress,
        network: Network,
        limit: u32,
    ) -> Result<Vec<Transaction>> {
        let url = format!(
            "{}/extended/v1/address/{}/transactions?limit={}",
            self.base_url(network),
            address,
            limit
        );
        let json = self.get_json(&url).await?;

        let items = json["results"]
            .as_array()
            .ok_or_else(|| LedgerError::MalformedPayload {
                message: "transaction history response missing results array".to_string(),
            })?;

        let mut transactions = Vec::with_capacity(items.len());
        for item in items {
            match models::parse_transaction(item) {
                Some(tx) => transactions.push(tx),
                None => {
                    tracing::warn!(address = %address, "Dropping transaction record with missing base fields");
                }
            }
        }

        Ok(transactions)
    }

    /// Detect which network an address lives on by probing balance endpoints.
    ///
    /// Deterministic precedence: testnet is probed first and wins if it
    /// answers; mainnet is only consulted after a testnet failure. Returns
    /// the detected network together with the balance read the probe
    /// already paid for.
    pub async fn detect_network(&self, address: &StxAddress) -> Result<(Network, Balance)> {
        for network in [Network::Testnet, Network::Mainnet] {
            match self.account_balance(address, network).await {
                Ok(balance) => return Ok((network, balance)),
                Err(e) => {
                    tracing::debug!(address = %address, network = %network, error = %e, "Network probe miss");
                }
            }
        }

        Err(LedgerError::NetworkUndetected {
            address: address.to_string(),
        })
    }

    /// Issue a GET and parse the JSON body, mapping transport and status
    /// failures into the ledger error taxonomy
    async fn get_json(&self, url: &str) -> Result<serde_json::Value> {
        let response = self
            .http
            .get(url)
            .timeout(LEDGER_REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LedgerError::Timeout {
                        seconds: LEDGER_REQUEST_TIMEOUT.as_secs(),
                    }
                } else {
                    LedgerError::Unreachable {
                        url: url.to_string(),
                    }
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LedgerError::UpstreamStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response
            .json()
            .await
            .map_err(|e| LedgerError::MalformedPayload {
                message: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_selection() {
        let client = LedgerClient::new(LedgerConfig::default());
        assert_eq!(client.base_url(Network::Testnet), "https://api.testnet.hiro.so");
        assert_eq!(client.base_url(Network::Mainnet), "https://api.hiro.so");
    }

    #[test]
    fn test_default_page_limit_in_config() {
        let client = LedgerClient::new(LedgerConfig::default());
        assert_eq!(client.config().tx_page_limit, 50);
    }
}
