//! Mint submission module with gas escalation and bounded retry

mod fee;
mod submitter;

pub use fee::FeeEscalator;
pub use submitter::TransactionSubmitter;

use crate::chain::EthereumClient;
use crate::config::{Settings, TargetSelector};
use crate::error::MintResult;
use ethers::types::TxHash;

/// Caller-facing mint operation over the configured target set
pub struct Minter {
    settings: Settings,
}

impl Minter {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Submit one mint to the selected contract and wait for its confirmation.
    ///
    /// The selector picks one of the contract addresses from configuration;
    /// credential and endpoint validity are the chain client's concern.
    pub async fn mint(
        &self,
        selector: TargetSelector,
        private_key: &str,
        rpc_url: &str,
    ) -> MintResult<TxHash> {
        let target = self.settings.resolve_target(selector)?;
        let client = EthereumClient::new(rpc_url, private_key, self.settings.chain.clone())?;
        let submitter = TransactionSubmitter::new(client, self.settings.minter.clone());
        submitter.mint(target).await
    }
}
