//! Infrastructure configuration modules.

pub mod approvals;
pub mod logging;
pub mod network;
pub mod settings;
