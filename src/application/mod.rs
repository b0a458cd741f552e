//! Application services (use cases).
//!
//! These services orchestrate domain logic and coordinate ports
//! to implement the approval checks.

pub mod approval;
pub mod contract;
