//! Marketplace spender and approval policy configuration.

use serde::Deserialize;

use crate::application::approval::{FungibleApprovalPolicy, SpenderMatch};
use crate::domain::ContractAddress;

/// Marketplace contracts.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MarketplaceConfig {
    /// Executor contract that spends currencies and transfers tokens on the
    /// owner's behalf. Required.
    #[serde(default)]
    pub executor_address: Option<ContractAddress>,
}

/// How the checkers act on what they read.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApprovalsConfig {
    #[serde(default)]
    pub fungible_policy: FungibleApprovalPolicy,

    #[serde(default)]
    pub spender_match: SpenderMatch,

    /// Reject contracts whose ABI does not match the expected token standard.
    #[serde(default)]
    pub verify_standard: bool,
}
