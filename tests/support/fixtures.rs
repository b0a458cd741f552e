use std::sync::Arc;

use ark_approvals::application::approval::{
    ApprovalSettings, FungibleApprovalChecker, NonFungibleApprovalChecker,
};
use ark_approvals::domain::{u256_calldata, ContractAddress, Felt, U256};
use ark_approvals::testkit::domain::settings;
use ark_approvals::testkit::provider::MockProvider;
use ark_approvals::testkit::submitter::RecordingSubmitter;

pub fn addr(hex: &str) -> ContractAddress {
    hex.parse().expect("valid address")
}

/// Felts a contract returns for a `u256` allowance.
pub fn u256_result(value: U256) -> Vec<Felt> {
    u256_calldata(value).to_vec()
}

pub fn pow10(exp: u64) -> U256 {
    U256::from(10u64).pow(U256::from(exp))
}

pub struct Harness {
    pub provider: Arc<MockProvider>,
    pub submitter: Arc<RecordingSubmitter>,
}

impl Harness {
    pub fn new(provider: MockProvider) -> Self {
        Self {
            provider: Arc::new(provider),
            submitter: Arc::new(RecordingSubmitter::new()),
        }
    }

    pub fn fungible(&self) -> FungibleApprovalChecker {
        self.fungible_with(&settings())
    }

    pub fn fungible_with(&self, settings: &ApprovalSettings) -> FungibleApprovalChecker {
        FungibleApprovalChecker::new(settings, self.provider.clone(), self.submitter.clone())
    }

    pub fn non_fungible(&self) -> NonFungibleApprovalChecker {
        self.non_fungible_with(&settings())
    }

    pub fn non_fungible_with(&self, settings: &ApprovalSettings) -> NonFungibleApprovalChecker {
        NonFungibleApprovalChecker::new(settings, self.provider.clone(), self.submitter.clone())
    }
}
