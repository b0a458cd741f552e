//! Scripted [`NetworkProvider`] for testing.
//!
//! `get_class_at` pops the next scripted class result, falling back to a
//! fixed class when the queue is empty. `call` pops the next scripted call
//! result and fails with a network error once the queue is exhausted, so a
//! test that makes more reads than it scripted fails loudly.
//!
//! Every request is recorded for call-count and argument assertions.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::{ContractAddress, ContractClass, Felt};
use crate::error::{Error, Result};
use crate::port::{BlockId, FunctionCall, NetworkProvider};

#[derive(Default)]
pub struct MockProvider {
    class: Option<ContractClass>,
    class_results: Mutex<VecDeque<Result<ContractClass>>>,
    call_results: Mutex<VecDeque<Result<Vec<Felt>>>>,
    class_requests: Mutex<Vec<ContractAddress>>,
    blocks: Mutex<Vec<BlockId>>,
    calls: Mutex<Vec<FunctionCall>>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Class returned whenever no scripted class result is queued.
    pub fn with_class(mut self, class: ContractClass) -> Self {
        self.class = Some(class);
        self
    }

    /// Queue a one-shot `get_class_at` result.
    pub fn with_class_result(self, result: Result<ContractClass>) -> Self {
        self.class_results.lock().unwrap().push_back(result);
        self
    }

    /// Queue a one-shot `call` result.
    pub fn with_call_result(self, result: Result<Vec<Felt>>) -> Self {
        self.call_results.lock().unwrap().push_back(result);
        self
    }

    /// Addresses passed to `get_class_at`, in order.
    pub fn class_requests(&self) -> Vec<ContractAddress> {
        self.class_requests.lock().unwrap().clone()
    }

    /// Block ids seen across both methods, in order.
    pub fn blocks(&self) -> Vec<BlockId> {
        self.blocks.lock().unwrap().clone()
    }

    /// View calls issued, in order.
    pub fn calls(&self) -> Vec<FunctionCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn class_count(&self) -> usize {
        self.class_requests.lock().unwrap().len()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Total requests of any kind.
    pub fn request_count(&self) -> usize {
        self.class_count() + self.call_count()
    }
}

#[async_trait]
impl NetworkProvider for MockProvider {
    async fn get_class_at(&self, block_id: BlockId, address: Felt) -> Result<ContractClass> {
        let address = ContractAddress::from(address);
        self.class_requests.lock().unwrap().push(address);
        self.blocks.lock().unwrap().push(block_id);

        if let Some(result) = self.class_results.lock().unwrap().pop_front() {
            return result;
        }
        self.class
            .clone()
            .ok_or_else(|| Error::Network(format!("no class scripted for {address}")))
    }

    async fn call(&self, request: FunctionCall, block_id: BlockId) -> Result<Vec<Felt>> {
        let selector = request.entry_point_selector;
        self.calls.lock().unwrap().push(request);
        self.blocks.lock().unwrap().push(block_id);

        self.call_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(Error::Network(format!("no result scripted for {selector:#x}")))
            })
    }
}
