//! Ethers-backed chain client for EVM chains

use super::client::{ChainClient, Confirmation, PendingMint};
use crate::config::ChainConfig;
use crate::error::{MintError, MintResult};

use async_trait::async_trait;
use ethers::prelude::*;
use ethers::providers::{Http, Provider};
use ethers::signers::{LocalWallet, Signer};
use ethers::types::transaction::eip2718::TypedTransaction;
use std::time::Duration;
use tracing::debug;

/// The mint call takes no arguments; calldata is the 4-byte selector alone
const MINT_FUNCTION_SIGNATURE: &str = "safeMint()";

/// Chain client backed by an HTTP JSON-RPC provider and a local signing key
pub struct EthereumClient {
    provider: Provider<Http>,
    wallet: LocalWallet,
    config: ChainConfig,
}

impl EthereumClient {
    /// Create a client bound to an RPC endpoint and signing credential
    pub fn new(rpc_url: &str, private_key: &str, config: ChainConfig) -> MintResult<Self> {
        let provider = Provider::<Http>::try_from(rpc_url)
            .map_err(|e| {
                MintError::ChainConnection(format!("Invalid RPC endpoint {}: {}", rpc_url, e))
            })?
            .interval(Duration::from_millis(100));

        let wallet = private_key
            .parse::<LocalWallet>()
            .map_err(|e| MintError::Wallet(format!("Invalid private key: {}", e)))?
            .with_chain_id(config.chain_id);

        Ok(Self {
            provider,
            wallet,
            config,
        })
    }

    /// Wallet address used for signing
    pub fn wallet_address(&self) -> Address {
        self.wallet.address()
    }

    fn mint_calldata() -> Bytes {
        Bytes::from(ethers::utils::id(MINT_FUNCTION_SIGNATURE).to_vec())
    }
}

#[async_trait]
impl ChainClient for EthereumClient {
    async fn estimate_fee(&self) -> MintResult<U256> {
        self.provider
            .get_gas_price()
            .await
            .map_err(|e| MintError::FeeUnavailable(e.to_string()))
    }

    async fn submit_mint(&self, target: Address, gas_price: U256) -> MintResult<PendingMint> {
        let from = self.wallet.address();

        let nonce = self
            .provider
            .get_transaction_count(from, None)
            .await
            .map_err(|e| MintError::Submission(format!("Failed to fetch nonce: {}", e)))?;

        let tx = TransactionRequest::new()
            .from(from)
            .to(target)
            .data(Self::mint_calldata())
            .nonce(nonce)
            .gas_price(gas_price)
            .chain_id(self.config.chain_id);
        let mut tx: TypedTransaction = tx.into();

        // Buffer the estimated gas limit so near-boundary executions don't
        // run out of gas
        let estimated = self
            .provider
            .estimate_gas(&tx, None)
            .await
            .map_err(|e| MintError::GasEstimation(e.to_string()))?;
        let buffer = estimated * self.config.gas_limit_buffer_percent / 100;
        tx.set_gas(estimated + buffer);

        let signature = self
            .wallet
            .sign_transaction(&tx)
            .await
            .map_err(|e| MintError::Wallet(format!("Failed to sign transaction: {}", e)))?;
        let raw = tx.rlp_signed(&signature);

        let pending = self
            .provider
            .send_raw_transaction(raw)
            .await
            .map_err(|e| MintError::Submission(e.to_string()))?;

        let tx_hash = pending.tx_hash();
        debug!("Raw transaction accepted by node: {:?}", tx_hash);

        Ok(PendingMint { tx_hash })
    }

    async fn await_confirmation(&self, pending: PendingMint) -> MintResult<Confirmation> {
        let poll_interval = Duration::from_millis(self.config.receipt_poll_interval_ms);

        loop {
            let receipt = self
                .provider
                .get_transaction_receipt(pending.tx_hash)
                .await
                .map_err(|e| MintError::ChainConnection(e.to_string()))?;

            if let Some(receipt) = receipt {
                return Ok(Confirmation {
                    tx_hash: pending.tx_hash,
                    status_ok: receipt.status == Some(U64::one()),
                });
            }

            tokio::time::sleep(poll_interval).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mint_calldata_is_the_four_byte_selector() {
        let data = EthereumClient::mint_calldata();
        assert_eq!(data.len(), 4);
        assert_eq!(
            data.to_vec(),
            ethers::utils::id("safeMint()").to_vec()
        );
    }
}
