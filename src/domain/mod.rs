//! Approval domain: addresses, amounts, ABIs, requests.
//!
//! Field elements, contract classes and Cairo `u256` words come from the
//! `starknet` crate; token amounts are `alloy_primitives::U256`.

mod abi;
mod address;
mod amount;
mod approval;
mod phase;

// Identifiers
pub use address::{parse_felt, ContractAddress, TransactionHash};

// Amounts
pub use amount::{
    felt_to_u256, format_units, from_cairo_u256, parse_units, to_cairo_u256, u256_calldata,
    u256_from_felts,
};

// Interface descriptions
pub use abi::{Abi, TokenStandard};

// Requests and outcomes
pub use approval::{
    Account, ApprovalOutcome, FungibleApproval, FungibleApprovalRequest, NonFungibleApproval,
    NonFungibleApprovalRequest, TransactionHandle,
};

// Lifecycle
pub use phase::{ApprovalPhase, PhaseTracker};

pub use alloy_primitives::U256;
pub use starknet::core::types::{ContractClass, Felt};
