//! Approval submission port.
//!
//! The submitter owns everything after the decision to approve: building the
//! `approve` invocation, signing it with the owner's key and broadcasting it.

use async_trait::async_trait;

use crate::domain::{ContractAddress, FungibleApproval, NonFungibleApproval, TransactionHandle};
use crate::error::Result;

/// Chain context passed along with every submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionContext {
    /// Chain identifier, e.g. `SN_MAIN` or `SN_SEPOLIA`.
    pub chain_id: String,

    /// Marketplace executor contract that receives the approval.
    pub spender: ContractAddress,
}

/// Port for submitting approval transactions.
///
/// # Thread Safety
///
/// Implementations must be thread-safe (`Send + Sync`).
///
/// # Errors
///
/// Implementations report signing or broadcast failures as
/// [`Error::Submission`](crate::error::Error::Submission) and transport
/// failures as [`Error::Network`](crate::error::Error::Network).
#[async_trait]
pub trait ApprovalSubmitter: Send + Sync {
    /// Approve `spender` to spend `approval.amount` of an ERC20.
    async fn approve_fungible(
        &self,
        context: &SubmissionContext,
        approval: FungibleApproval,
    ) -> Result<TransactionHandle>;

    /// Approve `spender` to transfer one ERC721 token.
    async fn approve_non_fungible(
        &self,
        context: &SubmissionContext,
        approval: NonFungibleApproval,
    ) -> Result<TransactionHandle>;
}
