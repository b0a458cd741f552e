//! ark-approvals - token approval checks for a Starknet NFT marketplace.
//!
//! Before a listing or an offer can be fulfilled, the marketplace executor
//! must be allowed to move the seller's NFT (ERC721 per-token approval) or
//! the buyer's currency (ERC20 allowance). This crate reads that state from
//! the chain and, when needed, hands an approval to a submitter.
//!
//! # Architecture
//!
//! - **`domain`** - Felts, addresses, `u256` amounts, ABIs, requests, outcomes
//! - **`port`** - `NetworkProvider` (reads) and `ApprovalSubmitter` (writes)
//! - **`application`** - Contract resolution and the two approval checkers
//!   - `FungibleApprovalChecker` - ERC20 allowance read and approve
//!   - `NonFungibleApprovalChecker` - ERC721 approved-spender read and approve
//! - **`infrastructure`** - TOML configuration, logging, wiring
//!
//! Signing, broadcasting and the RPC transport are out of scope; callers plug
//! them in through the ports.
//!
//! # Features
//!
//! - `testkit` - Expose `MockProvider` and `RecordingSubmitter` for tests
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use ark_approvals::application::approval::FungibleApprovalChecker;
//! use ark_approvals::domain::{Account, ContractAddress, FungibleApprovalRequest, U256};
//! use ark_approvals::infrastructure::config::settings::Config;
//! use ark_approvals::port::{ApprovalSubmitter, NetworkProvider};
//!
//! # async fn run(
//! #     provider: Arc<dyn NetworkProvider>,
//! #     submitter: Arc<dyn ApprovalSubmitter>,
//! # ) -> ark_approvals::error::Result<()> {
//! let config = Config::load("config.toml")?;
//! let checker = FungibleApprovalChecker::new(&config.approval_settings()?, provider, submitter);
//!
//! let request = FungibleApprovalRequest::new(
//!     Account::new("0x1".parse()?),
//!     "0x49d36570d4e46f48e99674bd3fcc84644ddd6b96f7c741b1562b82f9e004dc7".parse()?,
//!     U256::from(100u64),
//! );
//! let outcome = checker.approve(&request).await?;
//! # let _ = (outcome, ContractAddress::ZERO);
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
