//! NFT mint submitter for EVM chains
//!
//! Submits a single `safeMint()` call to a configured contract, waits for
//! confirmation under a per-attempt deadline, and retries with an escalating
//! gas price up to a fixed bound. One logical write per invocation; the run
//! ends with exactly one terminal outcome.
//!
//! ```no_run
//! use nft_minter::{Minter, Settings, TargetSelector};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let settings = Settings::load()?;
//! let minter = Minter::new(settings);
//!
//! let tx_hash = minter
//!     .mint(TargetSelector::Primary, "0xabc...", "https://rpc.example.com")
//!     .await?;
//! println!("minted: {:?}", tx_hash);
//! # Ok(())
//! # }
//! ```

pub mod chain;
pub mod config;
pub mod error;
pub mod metrics;
pub mod tx;

pub use chain::{ChainClient, Confirmation, EthereumClient, PendingMint};
pub use config::{ChainConfig, MinterConfig, Settings, TargetSelector};
pub use error::{MintError, MintResult};
pub use tx::{FeeEscalator, Minter, TransactionSubmitter};

/// Initialize logging for binaries and integration tests
pub fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,nft_minter=debug,hyper=warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_thread_ids(true))
        .init();
}
