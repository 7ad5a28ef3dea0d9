//! Chain module - the client capability consumed by the submission loop
//!
//! This module provides:
//! - The `ChainClient` trait: fee estimation, call submission, confirmation
//! - An ethers-backed implementation for EVM chains

pub mod client;
pub mod ethereum;

pub use client::{ChainClient, Confirmation, PendingMint};
pub use ethereum::EthereumClient;

#[cfg(test)]
pub use client::MockChainClient;
