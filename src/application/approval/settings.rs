//! Settings shared by both approval checkers.

use serde::Deserialize;

use crate::domain::ContractAddress;
use crate::error::{ConfigError, Result};
use crate::port::{BlockId, BlockTag, SubmissionContext};

/// What the ERC20 checker does once it has read the allowance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FungibleApprovalPolicy {
    /// Submit the approval regardless of the current allowance. The
    /// allowance is still read and logged.
    #[default]
    Always,

    /// Skip submission when the allowance already covers the request.
    SkipWhenSufficient,
}

/// When an existing ERC721 approval counts as already granted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpenderMatch {
    /// Any non-zero approved spender.
    #[default]
    Any,

    /// Only the configured marketplace spender.
    Exact,
}

impl SpenderMatch {
    /// Whether `approved` satisfies this policy for `spender`.
    #[must_use]
    pub fn is_satisfied(self, approved: Option<ContractAddress>, spender: ContractAddress) -> bool {
        match (self, approved) {
            (_, None) => false,
            (SpenderMatch::Any, Some(_)) => true,
            (SpenderMatch::Exact, Some(current)) => current == spender,
        }
    }
}

/// Validated settings for constructing checkers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApprovalSettings {
    pub context: SubmissionContext,
    pub block: BlockId,
    pub fungible_policy: FungibleApprovalPolicy,
    pub spender_match: SpenderMatch,
    /// Reject contracts whose ABI does not look like the expected standard.
    pub verify_standard: bool,
}

impl ApprovalSettings {
    /// Build settings for `spender` on `chain_id` with default policies.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the chain id is blank or the spender is the
    /// zero address.
    pub fn new(chain_id: impl Into<String>, spender: ContractAddress) -> Result<Self> {
        let chain_id = chain_id.into();
        if chain_id.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "chain_id" }.into());
        }
        if spender.is_zero() {
            return Err(ConfigError::InvalidValue {
                field: "executor_address",
                reason: "must not be the zero address".to_string(),
            }
            .into());
        }

        Ok(Self {
            context: SubmissionContext { chain_id, spender },
            block: BlockId::Tag(BlockTag::Latest),
            fungible_policy: FungibleApprovalPolicy::default(),
            spender_match: SpenderMatch::default(),
            verify_standard: false,
        })
    }

    #[must_use]
    pub fn with_block(mut self, block: BlockId) -> Self {
        self.block = block;
        self
    }

    #[must_use]
    pub fn with_fungible_policy(mut self, policy: FungibleApprovalPolicy) -> Self {
        self.fungible_policy = policy;
        self
    }

    #[must_use]
    pub fn with_spender_match(mut self, spender_match: SpenderMatch) -> Self {
        self.spender_match = spender_match;
        self
    }

    #[must_use]
    pub fn with_verify_standard(mut self, verify: bool) -> Self {
        self.verify_standard = verify;
        self
    }

    #[must_use]
    pub fn spender(&self) -> ContractAddress {
        self.context.spender
    }
}
