//! Composition root: wires the checkers from configuration and collaborators.

use std::sync::Arc;

use tracing::info;

use crate::application::approval::{FungibleApprovalChecker, NonFungibleApprovalChecker};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::{ApprovalSubmitter, NetworkProvider};

/// Both checkers, sharing one provider and one submitter.
pub struct ApprovalServices {
    pub fungible: FungibleApprovalChecker,
    pub non_fungible: NonFungibleApprovalChecker,
}

impl ApprovalServices {
    /// Build the checkers from `config`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the approval settings are invalid.
    pub fn from_config(
        config: &Config,
        provider: Arc<dyn NetworkProvider>,
        submitter: Arc<dyn ApprovalSubmitter>,
    ) -> Result<Self> {
        let settings = config.approval_settings()?;

        info!(
            chain_id = %settings.context.chain_id,
            spender = %settings.spender(),
            block = ?settings.block,
            fungible_policy = ?settings.fungible_policy,
            spender_match = ?settings.spender_match,
            "Approval services configured"
        );

        Ok(Self {
            fungible: FungibleApprovalChecker::new(
                &settings,
                Arc::clone(&provider),
                Arc::clone(&submitter),
            ),
            non_fungible: NonFungibleApprovalChecker::new(&settings, provider, submitter),
        })
    }
}
