//! Prometheus metrics for mint submissions
//!
//! Registered against the process-global default registry so an embedding
//! binary can expose them however it serves metrics; this crate does not
//! open a listener itself.

use lazy_static::lazy_static;
use prometheus::{
    register_counter_vec, register_histogram_vec, CounterVec, HistogramVec,
};

lazy_static! {
    pub static ref MINT_ATTEMPTS: CounterVec = register_counter_vec!(
        "nft_minter_attempts_total",
        "Total mint submission attempts",
        &["target"]
    )
    .unwrap();

    pub static ref MINT_SUCCEEDED: CounterVec = register_counter_vec!(
        "nft_minter_succeeded_total",
        "Total mints confirmed successfully",
        &["target"]
    )
    .unwrap();

    pub static ref MINT_FAILED: CounterVec = register_counter_vec!(
        "nft_minter_failed_total",
        "Total failed mint attempts by reason",
        &["reason"]
    )
    .unwrap();

    pub static ref MINT_LATENCY: HistogramVec = register_histogram_vec!(
        "nft_minter_latency_seconds",
        "End-to-end latency of successful mint runs",
        &[],
        vec![0.5, 1.0, 2.5, 5.0, 10.0, 30.0, 60.0, 120.0, 300.0]
    )
    .unwrap();
}

// Helper functions to record metrics

pub fn record_mint_attempt(target: &str) {
    MINT_ATTEMPTS.with_label_values(&[target]).inc();
}

pub fn record_mint_success(target: &str) {
    MINT_SUCCEEDED.with_label_values(&[target]).inc();
}

pub fn record_mint_failure(reason: &str) {
    MINT_FAILED.with_label_values(&[reason]).inc();
}

pub fn record_mint_latency(latency_secs: f64) {
    MINT_LATENCY.with_label_values(&[]).observe(latency_secs);
}
