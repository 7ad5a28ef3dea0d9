//! Configuration management for the mint submitter
//!
//! Loads configuration from TOML files with environment variable substitution.
//! Contract addresses and retry tuning live here rather than as constants in
//! the submission logic.

use anyhow::{Context, Result};
use ethers::types::Address;
use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};

use crate::error::{MintError, MintResult};

/// Root configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub minter: MinterConfig,
    pub chain: ChainConfig,
    /// Known mint targets, keyed by selector
    pub targets: HashMap<TargetSelector, String>,
}

/// Retry and timeout tuning for the submission loop
#[derive(Debug, Clone, Deserialize)]
pub struct MinterConfig {
    /// Maximum submission attempts per run
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    /// Per-attempt confirmation deadline
    #[serde(default = "default_confirmation_timeout_ms")]
    pub confirmation_timeout_ms: u64,
    /// Pause between attempts
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
    /// First offered gas price as a percentage of the node's estimate
    #[serde(default = "default_initial_fee_bump_percent")]
    pub initial_fee_bump_percent: u64,
    /// Gas price scaling applied after each failed attempt
    #[serde(default = "default_escalation_percent")]
    pub escalation_percent: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChainConfig {
    pub chain_id: u64,
    /// Receipt poll cadence while waiting for confirmation
    #[serde(default = "default_receipt_poll_interval_ms")]
    pub receipt_poll_interval_ms: u64,
    /// Buffer percentage added to the estimated gas limit
    #[serde(default = "default_gas_limit_buffer_percent")]
    pub gas_limit_buffer_percent: u64,
}

/// Selector for the fixed set of known mint contracts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetSelector {
    Primary,
    Secondary,
    Tertiary,
}

impl TargetSelector {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetSelector::Primary => "primary",
            TargetSelector::Secondary => "secondary",
            TargetSelector::Tertiary => "tertiary",
        }
    }
}

fn default_max_retries() -> u32 {
    3
}
fn default_confirmation_timeout_ms() -> u64 {
    60_000
}
fn default_retry_delay_ms() -> u64 {
    5_000
}
fn default_initial_fee_bump_percent() -> u64 {
    125
}
fn default_escalation_percent() -> u64 {
    110
}
fn default_receipt_poll_interval_ms() -> u64 {
    1_000
}
fn default_gas_limit_buffer_percent() -> u64 {
    20
}

impl Settings {
    /// Load settings from configuration files
    pub fn load() -> Result<Self> {
        let config_path = env::var("MINTER_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("config/default.toml"));

        Self::load_from(&config_path)
    }

    /// Load settings from a specific file
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config_str = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        // Substitute environment variables
        let config_str = substitute_env_vars(&config_str);

        let settings: Settings =
            toml::from_str(&config_str).with_context(|| "Failed to parse configuration")?;

        settings.validate()?;

        Ok(settings)
    }

    /// Validate configuration
    fn validate(&self) -> Result<()> {
        if self.targets.is_empty() {
            anyhow::bail!("At least one mint target must be configured");
        }

        for (selector, address) in &self.targets {
            address.parse::<Address>().with_context(|| {
                format!("Invalid contract address for target {:?}: {}", selector, address)
            })?;
        }

        if self.minter.max_retries == 0 {
            anyhow::bail!("max_retries must be at least 1");
        }

        // Percentages below 100 would make the offered fee shrink per attempt
        if self.minter.initial_fee_bump_percent < 100 || self.minter.escalation_percent < 100 {
            anyhow::bail!("Fee percentages must be at least 100");
        }

        Ok(())
    }

    /// Resolve a target selector to its configured contract address
    pub fn resolve_target(&self, selector: TargetSelector) -> MintResult<Address> {
        let raw = self
            .targets
            .get(&selector)
            .ok_or_else(|| MintError::UnknownTarget(selector.as_str().to_string()))?;

        raw.parse::<Address>()
            .map_err(|e| MintError::Config(format!("Invalid address for {}: {}", selector.as_str(), e)))
    }
}

/// Substitute environment variables in the format ${VAR_NAME}
fn substitute_env_vars(input: &str) -> String {
    let mut result = input.to_string();
    let re = regex::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();

    for cap in re.captures_iter(input) {
        let var_name = &cap[1];
        let var_value = env::var(var_name).unwrap_or_default();
        result = result.replace(&cap[0], &var_value);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn sample_config() -> &'static str {
        r#"
            [minter]
            max_retries = 3

            [chain]
            chain_id = 1

            [targets]
            primary = "0x6B3f185C4c9246c52acE736CA23170801D636c8E"
            secondary = "0x28e50a3632961da179b2afca4675714ea22e7bb7"
            tertiary = "0xdaF34a049EfAa3cc9ad4635D8A710Fae819aca5c"
        "#
    }

    #[test]
    fn test_env_var_substitution() {
        env::set_var("MINTER_TEST_VAR", "test_value");
        let input = "url = \"https://rpc.example.com/${MINTER_TEST_VAR}\"";
        let result = substitute_env_vars(input);
        assert_eq!(result, "url = \"https://rpc.example.com/test_value\"");
    }

    #[test]
    fn test_load_from_file_with_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(sample_config().as_bytes()).unwrap();

        let settings = Settings::load_from(file.path()).unwrap();
        assert_eq!(settings.minter.max_retries, 3);
        assert_eq!(settings.minter.confirmation_timeout_ms, 60_000);
        assert_eq!(settings.minter.retry_delay_ms, 5_000);
        assert_eq!(settings.minter.initial_fee_bump_percent, 125);
        assert_eq!(settings.minter.escalation_percent, 110);
        assert_eq!(settings.chain.chain_id, 1);
        assert_eq!(settings.targets.len(), 3);
    }

    #[test]
    fn test_resolve_target() {
        let settings: Settings = toml::from_str(sample_config()).unwrap();

        let primary = settings.resolve_target(TargetSelector::Primary).unwrap();
        let expected: Address = "0x6B3f185C4c9246c52acE736CA23170801D636c8E"
            .parse()
            .unwrap();
        assert_eq!(primary, expected);
    }

    #[test]
    fn test_rejects_invalid_address() {
        let toml_str = r#"
            [minter]
            [chain]
            chain_id = 1
            [targets]
            primary = "not-an-address"
        "#;
        let settings: Settings = toml::from_str(toml_str).unwrap();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_rejects_shrinking_fee_percent() {
        let toml_str = r#"
            [minter]
            escalation_percent = 90
            [chain]
            chain_id = 1
            [targets]
            primary = "0x6B3f185C4c9246c52acE736CA23170801D636c8E"
        "#;
        let settings: Settings = toml::from_str(toml_str).unwrap();
        assert!(settings.validate().is_err());
    }
}
