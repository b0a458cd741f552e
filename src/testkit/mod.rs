//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`provider`]: `MockProvider`, a scripted
//!   [`NetworkProvider`](crate::port::NetworkProvider) that records requests.
//! - [`submitter`]: `RecordingSubmitter`, an
//!   [`ApprovalSubmitter`](crate::port::ApprovalSubmitter) that records payloads.
//! - [`domain`]: Canonical ERC20/ERC721 classes, selectors and checker settings.

pub mod domain;
pub mod provider;
pub mod submitter;
