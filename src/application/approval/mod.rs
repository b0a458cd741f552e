//! Approval use cases: ERC20 allowances and ERC721 per-token approvals.
//!
//! Both checkers follow the same sequence per call: validate the request,
//! resolve the contract, read current state, then submit if needed. Nothing
//! is cached between calls and the read and the submission are not atomic.

mod fungible;
mod non_fungible;
mod settings;

pub use fungible::FungibleApprovalChecker;
pub use non_fungible::NonFungibleApprovalChecker;
pub use settings::{ApprovalSettings, FungibleApprovalPolicy, SpenderMatch};
