//! Configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all settings.
//! Configuration is loaded from a TOML file; `STARKNET_RPC_URL` overrides the
//! configured RPC endpoint.
//!
//! # Example
//!
//! ```no_run
//! use ark_approvals::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::Deserialize;

use super::approvals::{ApprovalsConfig, MarketplaceConfig};
use super::logging::LoggingConfig;
use super::network::NetworkConfig;
use crate::application::approval::ApprovalSettings;
use crate::error::{ConfigError, Result};
use crate::port::BlockId;

/// Environment variable overriding `network.rpc_url`.
pub const RPC_URL_ENV: &str = "STARKNET_RPC_URL";

/// Main configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Starknet endpoint, chain and read block.
    #[serde(default)]
    pub network: NetworkConfig,

    /// Marketplace contract addresses.
    #[serde(default)]
    pub marketplace: MarketplaceConfig,

    /// Approval policies.
    #[serde(default)]
    pub approvals: ApprovalsConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// Loads `.env` if present, then applies environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::parse_toml_with_env(content, |key| std::env::var(key).ok())
    }

    /// Parse configuration, resolving overrides through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    pub fn parse_toml_with_env<F>(content: &str, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;

        if let Some(rpc_url) = lookup(RPC_URL_ENV).filter(|v| !v.trim().is_empty()) {
            config.network.rpc_url = rpc_url;
        }

        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    fn validate(&self) -> Result<()> {
        if self.network.rpc_url.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "rpc_url" }.into());
        }
        let url = url::Url::parse(&self.network.rpc_url).map_err(|e| {
            ConfigError::InvalidValue {
                field: "rpc_url",
                reason: e.to_string(),
            }
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidValue {
                field: "rpc_url",
                reason: format!("unsupported scheme '{}'", url.scheme()),
            }
            .into());
        }

        // Spender and chain id checks live with the settings constructor.
        self.approval_settings().map(|_| ())
    }

    /// Build validated checker settings from this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] if no executor address is set,
    /// and any error from [`ApprovalSettings::new`].
    pub fn approval_settings(&self) -> Result<ApprovalSettings> {
        let spender = self
            .marketplace
            .executor_address
            .ok_or(ConfigError::MissingField {
                field: "executor_address",
            })?;

        Ok(ApprovalSettings::new(self.network.chain_id.clone(), spender)?
            .with_block(BlockId::Tag(self.network.block))
            .with_fungible_policy(self.approvals.fungible_policy)
            .with_spender_match(self.approvals.spender_match)
            .with_verify_standard(self.approvals.verify_standard))
    }

    /// Initialize logging based on configuration.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::approval::{FungibleApprovalPolicy, SpenderMatch};
    use crate::domain::ContractAddress;
    use crate::error::Error;
    use crate::infrastructure::config::logging::LogFormat;
    use crate::port::BlockTag;

    const FULL: &str = r#"
        [network]
        rpc_url = "https://starknet-sepolia.example.org/rpc/v0_7"
        chain_id = "SN_SEPOLIA"
        block = "pending"

        [marketplace]
        executor_address = "0x02"

        [approvals]
        fungible_policy = "skip_when_sufficient"
        spender_match = "exact"
        verify_standard = true

        [logging]
        level = "debug"
        format = "json"
    "#;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn parses_every_section() {
        let config = Config::parse_toml_with_env(FULL, no_env).unwrap();
        assert!(config.network.is_testnet());
        assert_eq!(config.network.block, BlockTag::Pending);
        assert_eq!(
            config.marketplace.executor_address,
            Some(ContractAddress::from(2u64))
        );
        assert_eq!(config.logging.format, LogFormat::Json);

        let settings = config.approval_settings().unwrap();
        assert_eq!(
            settings.fungible_policy,
            FungibleApprovalPolicy::SkipWhenSufficient
        );
        assert_eq!(settings.spender_match, SpenderMatch::Exact);
        assert!(settings.verify_standard);
        assert_eq!(settings.block, BlockId::Tag(BlockTag::Pending));
        assert_eq!(settings.context.chain_id, "SN_SEPOLIA");
    }

    #[test]
    fn minimal_config_uses_parity_defaults() {
        let toml = r#"
            [network]
            rpc_url = "http://localhost:5050"

            [marketplace]
            executor_address = "0x2"
        "#;
        let config = Config::parse_toml_with_env(toml, no_env).unwrap();
        assert!(config.network.is_mainnet());
        assert_eq!(config.logging.level, "info");

        let settings = config.approval_settings().unwrap();
        assert_eq!(settings.fungible_policy, FungibleApprovalPolicy::Always);
        assert_eq!(settings.spender_match, SpenderMatch::Any);
    }

    #[test]
    fn env_overrides_rpc_url() {
        let toml = r#"
            [marketplace]
            executor_address = "0x2"
        "#;
        let config = Config::parse_toml_with_env(toml, |key| {
            (key == RPC_URL_ENV).then(|| "https://rpc.example.org".to_string())
        })
        .unwrap();
        assert_eq!(config.network.rpc_url, "https://rpc.example.org");
    }

    #[test]
    fn missing_rpc_url_is_rejected() {
        let toml = r#"
            [marketplace]
            executor_address = "0x2"
        "#;
        let err = Config::parse_toml_with_env(toml, no_env).unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::MissingField { field: "rpc_url" })
        ));
    }

    #[test]
    fn non_http_rpc_url_is_rejected() {
        let toml = r#"
            [network]
            rpc_url = "wss://rpc.example.org"

            [marketplace]
            executor_address = "0x2"
        "#;
        let err = Config::parse_toml_with_env(toml, no_env).unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::InvalidValue { field: "rpc_url", .. })
        ));
    }

    #[test]
    fn missing_executor_is_rejected() {
        let toml = r#"
            [network]
            rpc_url = "http://localhost:5050"
        "#;
        let err = Config::parse_toml_with_env(toml, no_env).unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::MissingField {
                field: "executor_address"
            })
        ));
    }

    #[test]
    fn invalid_executor_address_fails_to_parse() {
        let toml = r#"
            [network]
            rpc_url = "http://localhost:5050"

            [marketplace]
            executor_address = "not-an-address"
        "#;
        let err = Config::parse_toml_with_env(toml, no_env).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::Parse(_))));
    }

    #[test]
    fn unknown_policy_fails_to_parse() {
        let toml = r#"
            [network]
            rpc_url = "http://localhost:5050"

            [marketplace]
            executor_address = "0x2"

            [approvals]
            fungible_policy = "sometimes"
        "#;
        assert!(Config::parse_toml_with_env(toml, no_env).is_err());
    }
}
