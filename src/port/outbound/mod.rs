//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe the two collaborators the checkers depend on:
//! a network provider for reads and an approval submitter for writes.

pub mod approval;
pub mod provider;
