//! ERC20 allowance check and approval.

use std::sync::Arc;

use alloy_primitives::U256;
use tracing::{debug, info};

use super::settings::{ApprovalSettings, FungibleApprovalPolicy};
use crate::application::contract::{ContractHandle, ContractResolver};
use crate::domain::{
    ApprovalOutcome, ApprovalPhase, ContractAddress, FungibleApproval, FungibleApprovalRequest,
    PhaseTracker, TokenStandard,
};
use crate::error::{RequestError, Result};
use crate::port::{ApprovalSubmitter, NetworkProvider, SubmissionContext};

/// Reads and raises ERC20 allowances for the marketplace spender.
pub struct FungibleApprovalChecker {
    resolver: ContractResolver,
    submitter: Arc<dyn ApprovalSubmitter>,
    context: SubmissionContext,
    policy: FungibleApprovalPolicy,
    verify_standard: bool,
}

impl FungibleApprovalChecker {
    pub fn new(
        settings: &ApprovalSettings,
        provider: Arc<dyn NetworkProvider>,
        submitter: Arc<dyn ApprovalSubmitter>,
    ) -> Self {
        Self {
            resolver: ContractResolver::new(provider, settings.block),
            submitter,
            context: settings.context.clone(),
            policy: settings.fungible_policy,
            verify_standard: settings.verify_standard,
        }
    }

    /// The configured marketplace spender.
    #[must_use]
    pub fn spender(&self) -> ContractAddress {
        self.context.spender
    }

    async fn resolve(&self, address: ContractAddress) -> Result<ContractHandle> {
        if self.verify_standard {
            self.resolver.resolve_as(address, TokenStandard::Erc20).await
        } else {
            self.resolver.resolve(address).await
        }
    }

    /// Read the allowance `owner` has granted `spender` on a token.
    ///
    /// The amount is returned exactly as the contract reports it.
    ///
    /// # Errors
    ///
    /// - [`RequestError::MissingParameter`] if `token_contract_address` is
    ///   `None`; no network call is made.
    /// - [`ContractError::ContractResolution`](crate::error::ContractError::ContractResolution)
    ///   if the contract has no ABI.
    /// - Provider errors, unchanged.
    pub async fn get_allowance(
        &self,
        owner: ContractAddress,
        spender: ContractAddress,
        token_contract_address: Option<ContractAddress>,
    ) -> Result<U256> {
        let token = token_contract_address.ok_or(RequestError::MissingParameter {
            operation: "get_allowance",
            parameter: "token_contract_address",
        })?;

        let handle = self.resolve(token).await?;
        let allowance = handle.allowance(owner, spender).await?;

        debug!(
            owner = %owner,
            spender = %spender,
            token = %token,
            allowance = %allowance,
            "Read ERC20 allowance"
        );

        Ok(allowance)
    }

    /// Approve the marketplace spender for `request.start_amount`.
    ///
    /// The current allowance is always read first. Whether a sufficient
    /// allowance short-circuits submission depends on the configured
    /// [`FungibleApprovalPolicy`].
    ///
    /// # Errors
    ///
    /// - [`RequestError::MissingParameter`] if the currency address is
    ///   missing; no network call is made.
    /// - Any error from [`get_allowance`](Self::get_allowance) or the
    ///   submitter, unchanged.
    pub async fn approve(&self, request: &FungibleApprovalRequest) -> Result<ApprovalOutcome> {
        let mut tracker = PhaseTracker::new("approve_erc20");

        let currency = tracker.observe(request.currency_address())?;
        let owner = request.account.address;

        let allowance = tracker.observe(
            self.get_allowance(owner, self.context.spender, Some(currency)).await,
        )?;
        let sufficient = allowance >= request.start_amount;

        if sufficient && self.policy == FungibleApprovalPolicy::SkipWhenSufficient {
            tracker.advance(ApprovalPhase::CheckedSufficient);
            info!(
                owner = %owner,
                currency = %currency,
                allowance = %allowance,
                requested = %request.start_amount,
                "Allowance already sufficient, skipping approval"
            );
            return Ok(ApprovalOutcome::AlreadyApproved {
                current_allowance: Some(allowance),
                approved_spender: None,
            });
        }

        tracker.advance(ApprovalPhase::CheckedInsufficient);
        info!(
            owner = %owner,
            currency = %currency,
            allowance = %allowance,
            amount = %request.start_amount,
            "Submitting ERC20 approval"
        );

        let handle = tracker.observe(
            self.submitter
                .approve_fungible(
                    &self.context,
                    FungibleApproval {
                        account: request.account,
                        contract_address: currency,
                        amount: request.start_amount,
                    },
                )
                .await,
        )?;
        tracker.advance(ApprovalPhase::Submitted);

        info!(tx_hash = %handle.transaction_hash, "ERC20 approval submitted");

        Ok(ApprovalOutcome::Submitted(handle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Account, Felt};
    use crate::error::{ContractError, Error};
    use crate::testkit::domain::{erc20_class, erc721_class, settings};
    use crate::testkit::provider::MockProvider;
    use crate::testkit::submitter::RecordingSubmitter;

    fn checker(
        provider: &Arc<MockProvider>,
        submitter: &Arc<RecordingSubmitter>,
        policy: FungibleApprovalPolicy,
    ) -> FungibleApprovalChecker {
        FungibleApprovalChecker::new(
            &settings().with_fungible_policy(policy),
            provider.clone(),
            submitter.clone(),
        )
    }

    fn request(amount: u64) -> FungibleApprovalRequest {
        FungibleApprovalRequest::new(
            Account::new(ContractAddress::from(1u64)),
            ContractAddress::from(0xaaa_u64),
            U256::from(amount),
        )
    }

    #[tokio::test]
    async fn always_policy_submits_even_when_sufficient() {
        let provider = Arc::new(
            MockProvider::new()
                .with_class(erc20_class())
                .with_call_result(Ok(vec![Felt::from(500u64), Felt::ZERO])),
        );
        let submitter = Arc::new(RecordingSubmitter::new());
        let checker = checker(&provider, &submitter, FungibleApprovalPolicy::Always);

        let outcome = checker.approve(&request(100)).await.unwrap();

        assert!(outcome.is_submitted());
        assert_eq!(submitter.fungible_count(), 1);
    }

    #[tokio::test]
    async fn skip_policy_does_not_submit_when_sufficient() {
        let provider = Arc::new(
            MockProvider::new()
                .with_class(erc20_class())
                .with_call_result(Ok(vec![Felt::from(100u64), Felt::ZERO])),
        );
        let submitter = Arc::new(RecordingSubmitter::new());
        let checker = checker(&provider, &submitter, FungibleApprovalPolicy::SkipWhenSufficient);

        let outcome = checker.approve(&request(100)).await.unwrap();

        assert_eq!(
            outcome,
            ApprovalOutcome::AlreadyApproved {
                current_allowance: Some(U256::from(100u8)),
                approved_spender: None,
            }
        );
        assert_eq!(submitter.fungible_count(), 0);
    }

    #[tokio::test]
    async fn skip_policy_submits_when_insufficient() {
        let provider = Arc::new(
            MockProvider::new()
                .with_class(erc20_class())
                .with_call_result(Ok(vec![Felt::from(99u64), Felt::ZERO])),
        );
        let submitter = Arc::new(RecordingSubmitter::new());
        let checker = checker(&provider, &submitter, FungibleApprovalPolicy::SkipWhenSufficient);

        checker.approve(&request(100)).await.unwrap();

        assert_eq!(submitter.fungible_count(), 1);
    }

    #[tokio::test]
    async fn submitter_errors_propagate() {
        let provider = Arc::new(
            MockProvider::new()
                .with_class(erc20_class())
                .with_call_result(Ok(vec![Felt::ZERO, Felt::ZERO])),
        );
        let submitter = Arc::new(
            RecordingSubmitter::new().with_result(Err(Error::Submission("nonce too low".into()))),
        );
        let checker = checker(&provider, &submitter, FungibleApprovalPolicy::Always);

        let err = checker.approve(&request(100)).await.unwrap_err();

        assert!(matches!(err, Error::Submission(ref m) if m == "nonce too low"));
    }

    #[tokio::test]
    async fn verify_standard_rejects_nft_contracts() {
        let provider = Arc::new(MockProvider::new().with_class(erc721_class()));
        let submitter = Arc::new(RecordingSubmitter::new());
        let checker = FungibleApprovalChecker::new(
            &settings().with_verify_standard(true),
            provider.clone(),
            submitter.clone(),
        );

        let err = checker.approve(&request(100)).await.unwrap_err();

        assert!(matches!(
            err,
            Error::Contract(ContractError::UnexpectedStandard { .. })
        ));
        assert_eq!(provider.call_count(), 0);
        assert_eq!(submitter.fungible_count(), 0);
    }
}
