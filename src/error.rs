//! Error types for the mint submitter

use ethers::types::TxHash;
use thiserror::Error;

/// Main error type for mint operations
#[derive(Error, Debug)]
pub enum MintError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Chain connection error: {0}")]
    ChainConnection(String),

    #[error("Wallet error: {0}")]
    Wallet(String),

    #[error("Fee estimate unavailable: {0}")]
    FeeUnavailable(String),

    #[error("Gas estimation error: {0}")]
    GasEstimation(String),

    #[error("Transaction submission failed: {0}")]
    Submission(String),

    #[error("Transaction {tx_hash:?} reverted")]
    Reverted { tx_hash: TxHash },

    #[error("Timeout waiting for {operation}")]
    Timeout { operation: String },

    #[error("All {attempts} mint attempts exhausted")]
    RetriesExhausted {
        attempts: u32,
        #[source]
        last_error: Box<MintError>,
    },

    #[error("No contract address configured for target {0}")]
    UnknownTarget(String),
}

impl MintError {
    /// Short label for the failure class, used for metrics dimensions
    pub fn reason(&self) -> &'static str {
        match self {
            MintError::Config(_) => "config",
            MintError::ChainConnection(_) => "chain_connection",
            MintError::Wallet(_) => "wallet",
            MintError::FeeUnavailable(_) => "fee_unavailable",
            MintError::GasEstimation(_) => "gas_estimation",
            MintError::Submission(_) => "submission",
            MintError::Reverted { .. } => "reverted",
            MintError::Timeout { .. } => "timeout",
            MintError::RetriesExhausted { .. } => "retries_exhausted",
            MintError::UnknownTarget(_) => "unknown_target",
        }
    }
}

/// Result type for mint operations
pub type MintResult<T> = Result<T, MintError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exhausted_error_keeps_last_attempt_as_source() {
        use std::error::Error;

        let err = MintError::RetriesExhausted {
            attempts: 3,
            last_error: Box::new(MintError::Timeout {
                operation: "transaction confirmation".to_string(),
            }),
        };

        assert_eq!(err.to_string(), "All 3 mint attempts exhausted");
        let source = err.source().expect("source should be set");
        assert_eq!(
            source.to_string(),
            "Timeout waiting for transaction confirmation"
        );
    }
}
