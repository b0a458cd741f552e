//! ERC721 approval check and approval.

use std::sync::Arc;

use alloy_primitives::U256;
use tracing::{debug, info};

use super::settings::{ApprovalSettings, SpenderMatch};
use crate::application::contract::{ContractHandle, ContractResolver};
use crate::domain::{
    ApprovalOutcome, ApprovalPhase, ContractAddress, NonFungibleApproval,
    NonFungibleApprovalRequest, PhaseTracker, TokenStandard,
};
use crate::error::{RequestError, Result};
use crate::port::{ApprovalSubmitter, NetworkProvider, SubmissionContext};

/// Reads and grants per-token ERC721 approvals for the marketplace spender.
pub struct NonFungibleApprovalChecker {
    resolver: ContractResolver,
    submitter: Arc<dyn ApprovalSubmitter>,
    context: SubmissionContext,
    spender_match: SpenderMatch,
    verify_standard: bool,
}

impl NonFungibleApprovalChecker {
    pub fn new(
        settings: &ApprovalSettings,
        provider: Arc<dyn NetworkProvider>,
        submitter: Arc<dyn ApprovalSubmitter>,
    ) -> Self {
        Self {
            resolver: ContractResolver::new(provider, settings.block),
            submitter,
            context: settings.context.clone(),
            spender_match: settings.spender_match,
            verify_standard: settings.verify_standard,
        }
    }

    #[must_use]
    pub fn spender(&self) -> ContractAddress {
        self.context.spender
    }

    async fn resolve(&self, address: ContractAddress) -> Result<ContractHandle> {
        if self.verify_standard {
            self.resolver.resolve_as(address, TokenStandard::Erc721).await
        } else {
            self.resolver.resolve(address).await
        }
    }

    /// Read the spender currently approved for `token_id`.
    ///
    /// Returns `None` when nobody is approved.
    ///
    /// # Errors
    ///
    /// - [`RequestError::MissingParameter`] if `token_contract_address` is
    ///   `None`; no network call is made.
    /// - [`ContractError::ContractResolution`](crate::error::ContractError::ContractResolution)
    ///   if the contract has no ABI.
    /// - Provider errors, unchanged.
    pub async fn get_approved_spender(
        &self,
        token_contract_address: Option<ContractAddress>,
        token_id: U256,
    ) -> Result<Option<ContractAddress>> {
        let token = token_contract_address.ok_or(RequestError::MissingParameter {
            operation: "get_approved_spender",
            parameter: "token_contract_address",
        })?;

        let handle = self.resolve(token).await?;
        let approved = handle.get_approved(token_id).await?;

        debug!(
            token = %token,
            token_id = %token_id,
            approved = ?approved.map(|a| a.to_string()),
            "Read ERC721 approved spender"
        );

        Ok(approved)
    }

    /// Approve the marketplace spender for one token unless already approved.
    ///
    /// Repeated calls after a successful approval only perform the read.
    ///
    /// # Errors
    ///
    /// - [`RequestError::MissingParameter`] if the token contract is missing;
    ///   no network call is made.
    /// - Any error from [`get_approved_spender`](Self::get_approved_spender)
    ///   or the submitter, unchanged.
    pub async fn approve(&self, request: &NonFungibleApprovalRequest) -> Result<ApprovalOutcome> {
        let mut tracker = PhaseTracker::new("approve_erc721");

        let token = tracker.observe(request.token_contract_address())?;
        let approved = tracker.observe(
            self.get_approved_spender(Some(token), request.token_id).await,
        )?;

        if self.spender_match.is_satisfied(approved, self.context.spender) {
            tracker.advance(ApprovalPhase::CheckedSufficient);
            debug!(
                token = %token,
                token_id = %request.token_id,
                "Token already approved, nothing to submit"
            );
            return Ok(ApprovalOutcome::AlreadyApproved {
                current_allowance: None,
                approved_spender: approved,
            });
        }

        tracker.advance(ApprovalPhase::CheckedInsufficient);
        info!(
            owner = %request.account.address,
            token = %token,
            token_id = %request.token_id,
            spender = %self.context.spender,
            "Submitting ERC721 approval"
        );

        let handle = tracker.observe(
            self.submitter
                .approve_non_fungible(
                    &self.context,
                    NonFungibleApproval {
                        account: request.account,
                        contract_address: token,
                        token_id: request.token_id,
                    },
                )
                .await,
        )?;
        tracker.advance(ApprovalPhase::Submitted);

        info!(tx_hash = %handle.transaction_hash, "ERC721 approval submitted");

        Ok(ApprovalOutcome::Submitted(handle))
    }
}
