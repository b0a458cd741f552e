//! Recording [`ApprovalSubmitter`] for testing.
//!
//! Stores every payload it receives and answers with scripted results,
//! defaulting to a fixed transaction hash.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::{
    Felt, FungibleApproval, NonFungibleApproval, TransactionHandle, TransactionHash,
};
use crate::error::Result;
use crate::port::{ApprovalSubmitter, SubmissionContext};

/// Hash returned when no result is scripted.
pub const DEFAULT_TX_HASH: u64 = 0x7a11;

#[derive(Default)]
pub struct RecordingSubmitter {
    results: Mutex<VecDeque<Result<TransactionHandle>>>,
    contexts: Mutex<Vec<SubmissionContext>>,
    fungible: Mutex<Vec<FungibleApproval>>,
    non_fungible: Mutex<Vec<NonFungibleApproval>>,
}

impl RecordingSubmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a one-shot result for the next submission of either kind.
    pub fn with_result(self, result: Result<TransactionHandle>) -> Self {
        self.results.lock().unwrap().push_back(result);
        self
    }

    pub fn fungible_approvals(&self) -> Vec<FungibleApproval> {
        self.fungible.lock().unwrap().clone()
    }

    pub fn non_fungible_approvals(&self) -> Vec<NonFungibleApproval> {
        self.non_fungible.lock().unwrap().clone()
    }

    pub fn contexts(&self) -> Vec<SubmissionContext> {
        self.contexts.lock().unwrap().clone()
    }

    pub fn fungible_count(&self) -> usize {
        self.fungible.lock().unwrap().len()
    }

    pub fn non_fungible_count(&self) -> usize {
        self.non_fungible.lock().unwrap().len()
    }

    fn next_result(&self, context: &SubmissionContext) -> Result<TransactionHandle> {
        self.contexts.lock().unwrap().push(context.clone());
        self.results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(default_handle()))
    }
}

/// The handle returned when no result is scripted.
pub fn default_handle() -> TransactionHandle {
    TransactionHandle {
        transaction_hash: TransactionHash::new(Felt::from(DEFAULT_TX_HASH)),
    }
}

#[async_trait]
impl ApprovalSubmitter for RecordingSubmitter {
    async fn approve_fungible(
        &self,
        context: &SubmissionContext,
        approval: FungibleApproval,
    ) -> Result<TransactionHandle> {
        self.fungible.lock().unwrap().push(approval);
        self.next_result(context)
    }

    async fn approve_non_fungible(
        &self,
        context: &SubmissionContext,
        approval: NonFungibleApproval,
    ) -> Result<TransactionHandle> {
        self.non_fungible.lock().unwrap().push(approval);
        self.next_result(context)
    }
}
