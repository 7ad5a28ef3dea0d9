//! Bounded-retry transaction submission with gas escalation
//!
//! One invocation makes at most `max_retries` sequential attempts. Each
//! attempt races the confirmation wait against a fixed deadline; a failed or
//! timed-out attempt escalates the offered gas price before the next try.

use super::fee::FeeEscalator;
use crate::chain::ChainClient;
use crate::config::MinterConfig;
use crate::error::{MintError, MintResult};

use ethers::types::{Address, TxHash, U256};
use std::time::{Duration, Instant};
use tokio::time::{sleep, timeout};
use tracing::{error, info, warn};

/// Submits a single mint call with retry, timeout, and fee escalation
pub struct TransactionSubmitter<C: ChainClient> {
    client: C,
    escalator: FeeEscalator,
    config: MinterConfig,
}

impl<C: ChainClient> TransactionSubmitter<C> {
    /// Create a submitter over a chain client
    pub fn new(client: C, config: MinterConfig) -> Self {
        let escalator = FeeEscalator::new(
            config.initial_fee_bump_percent,
            config.escalation_percent,
        );
        Self {
            client,
            escalator,
            config,
        }
    }

    /// Submit one mint call to `target` and wait for its confirmation.
    ///
    /// Returns the confirmed transaction hash, or the terminal error for the
    /// run: `FeeUnavailable` if no estimate could be fetched (no attempts are
    /// made), `RetriesExhausted` once every attempt has failed, or a
    /// construction-phase error. Per-attempt failures never escape the loop
    /// on their own; the last one is carried inside `RetriesExhausted`.
    pub async fn mint(&self, target: Address) -> MintResult<TxHash> {
        info!("Starting mint for contract {:?}", target);
        let target_label = format!("{:?}", target);
        let started = Instant::now();

        // A missing fee estimate means the node is non-functional; there is
        // nothing useful to retry.
        let base_fee = self.client.estimate_fee().await?;
        let mut gas_price = self.escalator.initial_fee(base_fee);

        let max_attempts = self.config.max_retries;
        let mut last_error: Option<MintError> = None;

        for attempt in 1..=max_attempts {
            info!(
                "Minting attempt {}/{} at gas price {}",
                attempt, max_attempts, gas_price
            );
            crate::metrics::record_mint_attempt(&target_label);

            match self.run_attempt(target, gas_price).await {
                Ok(tx_hash) => {
                    info!(
                        "Mint confirmed: {:?} (attempt {}/{})",
                        tx_hash, attempt, max_attempts
                    );
                    crate::metrics::record_mint_success(&target_label);
                    crate::metrics::record_mint_latency(started.elapsed().as_secs_f64());
                    return Ok(tx_hash);
                }
                Err(e) => {
                    match &e {
                        MintError::Reverted { tx_hash } => {
                            warn!("Transaction {:?} reverted, retrying", tx_hash)
                        }
                        other => error!("Mint attempt {} failed: {}", attempt, other),
                    }
                    crate::metrics::record_mint_failure(e.reason());
                    last_error = Some(e);
                }
            }

            gas_price = self.escalator.escalate(gas_price);
            if attempt < max_attempts {
                sleep(Duration::from_millis(self.config.retry_delay_ms)).await;
            }
        }

        error!(
            "All {} mint attempts failed for contract {:?}",
            max_attempts, target
        );
        crate::metrics::record_mint_failure("retries_exhausted");

        Err(MintError::RetriesExhausted {
            attempts: max_attempts,
            last_error: Box::new(
                last_error.unwrap_or_else(|| MintError::Submission("Unknown error".to_string())),
            ),
        })
    }

    /// One submit-and-confirm attempt at a fixed gas price
    async fn run_attempt(&self, target: Address, gas_price: U256) -> MintResult<TxHash> {
        let pending = self.client.submit_mint(target, gas_price).await?;
        info!("Transaction sent: {:?}", pending.tx_hash);

        // First-to-settle race; on deadline the confirmation future is
        // dropped, which cancels the underlying wait.
        let deadline = Duration::from_millis(self.config.confirmation_timeout_ms);
        let confirmation = timeout(deadline, self.client.await_confirmation(pending))
            .await
            .map_err(|_| MintError::Timeout {
                operation: "transaction confirmation".to_string(),
            })??;

        if confirmation.status_ok {
            Ok(confirmation.tx_hash)
        } else {
            Err(MintError::Reverted {
                tx_hash: confirmation.tx_hash,
            })
        }
    }
}
