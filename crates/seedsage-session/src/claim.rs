//! On-chain badge claim
//!
//! A single interactive contract call through the wallet's signing flow.
//! User cancellation is an expected outcome, not an error. After a
//! successful submission the new transaction will not be visible in the
//! history read until the ledger indexes it, so one refresh is scheduled
//! after a delay instead of treating immediate non-appearance as failure.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use seedsage_core::{BadgeConfig, ClaimError, Network, TxId};

use crate::reconciler::{Reconciler, SessionPhase};

/// How long to wait before the post-claim refresh
pub const CLAIM_REFRESH_DELAY: Duration = Duration::from_secs(5);

/// Terminal outcomes of the signing flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClaimOutcome {
    Submitted { tx_id: TxId },
    Cancelled,
}

/// A contract call handed to the wallet for interactive signing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractCallRequest {
    pub network: Network,
    pub contract_address: String,
    pub contract_name: String,
    pub function_name: String,
    /// UTF-8 string argument passed to the function
    pub memo_arg: String,
}

/// Seam over the wallet-connect interactive contract-call flow
#[async_trait]
pub trait ContractSigner: Send + Sync {
    async fn open_contract_call(
        &self,
        request: ContractCallRequest,
    ) -> Result<ClaimOutcome, ClaimError>;
}

/// Submits the badge claim for the currently connected wallet
#[derive(Clone)]
pub struct BadgeClaim {
    reconciler: Reconciler,
    signer: Arc<dyn ContractSigner>,
    config: BadgeConfig,
    refresh_delay: Duration,
}

impl BadgeClaim {
    pub fn new(reconciler: Reconciler, signer: Arc<dyn ContractSigner>, config: BadgeConfig) -> Self {
        Self {
            reconciler,
            signer,
            config,
            refresh_delay: CLAIM_REFRESH_DELAY,
        }
    }

    /// Override the post-submission refresh delay (tests)
    pub fn with_refresh_delay(mut self, delay: Duration) -> Self {
        self.refresh_delay = delay;
        self
    }

    /// Submit the claim call. Requires a resolved session; schedules exactly
    /// one delayed refresh when the transaction is submitted.
    pub async fn claim(&self) -> Result<ClaimOutcome, ClaimError> {
        let network = match self.reconciler.phase().await {
            SessionPhase::Ready(snapshot) => snapshot.identity.network,
            _ => return Err(ClaimError::NotConnected),
        };

        let request = ContractCallRequest {
            network,
            contract_address: self.config.contract_address.clone(),
            contract_name: self.config.contract_name.clone(),
            function_name: self.config.function_name.clone(),
            memo_arg: self.config.claim_memo.clone(),
        };

        let outcome = self.signer.open_contract_call(request).await?;

        match &outcome {
            ClaimOutcome::Submitted { tx_id } => {
                tracing::info!(tx_id = %tx_id, "Badge claim submitted, scheduling refresh");
                let reconciler = self.reconciler.clone();
                let delay = self.refresh_delay;
                tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    reconciler.refresh().await;
                });
            }
            ClaimOutcome::Cancelled => {
                tracing::debug!("Badge claim cancelled by user");
            }
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_equality() {
        assert_eq!(
            ClaimOutcome::Submitted {
                tx_id: TxId::new("0xabc")
            },
            ClaimOutcome::Submitted {
                tx_id: TxId::new("0xabc")
            }
        );
        assert_ne!(
            ClaimOutcome::Cancelled,
            ClaimOutcome::Submitted {
                tx_id: TxId::new("0xabc")
            }
        );
    }

    #[test]
    fn test_request_built_from_config_defaults() {
        let config = BadgeConfig::default();
        let request = ContractCallRequest {
            network: Network::Testnet,
            contract_address: config.contract_address.clone(),
            contract_name: config.contract_name.clone(),
            function_name: config.function_name.clone(),
            memo_arg: config.claim_memo.clone(),
        };
        assert_eq!(request.contract_name, "seedsage-badge");
        assert_eq!(request.function_name, "claim");
        assert_eq!(request.memo_arg, "Claiming my SeedSage badge!");
    }
}
