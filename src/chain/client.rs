//! Client capability consumed by the submission loop

use async_trait::async_trait;
use ethers::types::{Address, TxHash, U256};

#[cfg(test)]
use mockall::automock;

use crate::error::MintResult;

/// A submitted call awaiting confirmation
#[derive(Debug, Clone)]
pub struct PendingMint {
    pub tx_hash: TxHash,
}

/// Network acknowledgment that a transaction was included
#[derive(Debug, Clone)]
pub struct Confirmation {
    pub tx_hash: TxHash,
    /// Execution status reported by the receipt
    pub status_ok: bool,
}

/// Capability to sign and submit a mint call, wait for its inclusion, and
/// fetch a fee estimate. Validity of the underlying credential and endpoint
/// is the implementation's responsibility.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ChainClient: Send + Sync {
    /// Fetch the node's current gas price estimate
    async fn estimate_fee(&self) -> MintResult<U256>;

    /// Submit a mint call to the target contract at the given gas price
    async fn submit_mint(&self, target: Address, gas_price: U256) -> MintResult<PendingMint>;

    /// Wait until the submitted call is included and its status is known.
    /// May wait indefinitely; callers bound it with their own deadline.
    async fn await_confirmation(&self, pending: PendingMint) -> MintResult<Confirmation>;
}
