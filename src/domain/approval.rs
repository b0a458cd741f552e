//! Approval requests, submitter payloads and outcomes.

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use super::address::{ContractAddress, TransactionHash};
use crate::error::{RequestError, Result};

/// The account that owns the tokens and signs approvals.
///
/// Key material stays with the submitter; this only identifies the owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Account {
    pub address: ContractAddress,
}

impl Account {
    pub fn new(address: ContractAddress) -> Self {
        Self { address }
    }
}

/// Request to let the marketplace spend an ERC20 currency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FungibleApprovalRequest {
    pub account: Account,
    /// The ERC20 contract. Optional so that an unset currency is reported as
    /// a request error rather than silently defaulted.
    pub currency_address: Option<ContractAddress>,
    /// Amount, in base units, the marketplace must be able to spend.
    pub start_amount: U256,
}

impl FungibleApprovalRequest {
    pub fn new(account: Account, currency_address: ContractAddress, start_amount: U256) -> Self {
        Self {
            account,
            currency_address: Some(currency_address),
            start_amount,
        }
    }

    pub(crate) fn currency_address(&self) -> Result<ContractAddress> {
        self.currency_address.ok_or_else(|| {
            RequestError::MissingParameter {
                operation: "approve_erc20",
                parameter: "currency_address",
            }
            .into()
        })
    }
}

/// Request to let the marketplace transfer one ERC721 token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonFungibleApprovalRequest {
    pub account: Account,
    pub token_contract_address: Option<ContractAddress>,
    pub token_id: U256,
}

impl NonFungibleApprovalRequest {
    pub fn new(account: Account, token_contract_address: ContractAddress, token_id: U256) -> Self {
        Self {
            account,
            token_contract_address: Some(token_contract_address),
            token_id,
        }
    }

    pub(crate) fn token_contract_address(&self) -> Result<ContractAddress> {
        self.token_contract_address.ok_or_else(|| {
            RequestError::MissingParameter {
                operation: "approve_erc721",
                parameter: "token_contract_address",
            }
            .into()
        })
    }
}

/// Arguments handed to the submitter for an ERC20 approval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FungibleApproval {
    pub account: Account,
    pub contract_address: ContractAddress,
    pub amount: U256,
}

/// Arguments handed to the submitter for an ERC721 approval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonFungibleApproval {
    pub account: Account,
    pub contract_address: ContractAddress,
    pub token_id: U256,
}

/// What the submitter returns for a broadcast transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionHandle {
    pub transaction_hash: TransactionHash,
}

/// Result of an approve call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApprovalOutcome {
    /// An approval transaction was handed to the submitter.
    Submitted(TransactionHandle),

    /// Current on-chain state already grants what was asked; nothing sent.
    AlreadyApproved {
        /// Allowance for ERC20, `None` for ERC721.
        current_allowance: Option<U256>,
        /// Approved spender for ERC721, `None` for ERC20.
        approved_spender: Option<ContractAddress>,
    },
}

impl ApprovalOutcome {
    #[must_use]
    pub fn transaction(&self) -> Option<&TransactionHandle> {
        match self {
            ApprovalOutcome::Submitted(handle) => Some(handle),
            ApprovalOutcome::AlreadyApproved { .. } => None,
        }
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        matches!(self, ApprovalOutcome::Submitted(_))
    }
}
