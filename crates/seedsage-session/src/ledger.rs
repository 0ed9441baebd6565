//! Injected seam over the ledger-query service

use async_trait::async_trait;

use hiro_client::LedgerClient;
use seedsage_core::{Balance, LedgerError, Network, StxAddress, Transaction};

/// The two reads the reconciler needs from the ledger-query service.
///
/// `detect_network` doubles as the balance read: the probe that identifies
/// the network already returns the account balance for it.
#[async_trait]
pub trait LedgerQuery: Send + Sync {
    async fn detect_network(
        &self,
        address: &StxAddress,
    ) -> Result<(Network, Balance), LedgerError>;

    /// Recent transaction history, bounded to the implementation's page size
    async fn recent_transactions(
        &self,
        address: &StxAddress,
        network: Network,
    ) -> Result<Vec<Transaction>, LedgerError>;
}

#[async_trait]
impl LedgerQuery for LedgerClient {
    async fn detect_network(
        &self,
        address: &StxAddress,
    ) -> Result<(Network, Balance), LedgerError> {
        LedgerClient::detect_network(self, address).await
    }

    async fn recent_transactions(
        &self,
        address: &StxAddress,
        network: Network,
    ) -> Result<Vec<Transaction>, LedgerError> {
        let limit = self.config().tx_page_limit;
        LedgerClient::recent_transactions(self, address, network, limit).await
    }
}
