use thiserror::Error;

use crate::domain::{ContractAddress, TokenStandard};

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Caller mistakes detected before any network call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("missing required parameter `{parameter}` for {operation}")]
    MissingParameter {
        operation: &'static str,
        parameter: &'static str,
    },
}

/// Failures binding to or reading from a token contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContractError {
    #[error("no interface description found for contract {address}")]
    ContractResolution { address: ContractAddress },

    #[error("contract {address} exposes none of the entry points {candidates:?}")]
    EntryPointNotFound {
        address: ContractAddress,
        candidates: Vec<&'static str>,
    },

    #[error("contract {address} is {found}, expected {expected}")]
    UnexpectedStandard {
        address: ContractAddress,
        expected: TokenStandard,
        found: TokenStandard,
    },

    #[error("malformed response from {entry_point}: {reason}")]
    MalformedResponse {
        entry_point: &'static str,
        reason: String,
    },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Request(#[from] RequestError),

    #[error(transparent)]
    Contract(#[from] ContractError),

    /// Transient failure of the network provider.
    #[error("network error: {0}")]
    Network(String),

    /// The approval submitter failed to build, sign or broadcast.
    #[error("approval submission failed: {0}")]
    Submission(String),

    #[error("parse error: {0}")]
    Parse(String),
}

impl Error {
    /// Whether retrying the same call later may succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Network(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
