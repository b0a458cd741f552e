//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!              ┌──────────────────────────────┐
//!              │          Application         │
//!              │  Fungible / NonFungible      │
//!              │  approval checkers           │
//!              └──────┬───────────────┬───────┘
//!                     │               │
//!                     ▼               ▼
//!            ┌────────────────┐ ┌──────────────────┐
//!            │NetworkProvider │ │ApprovalSubmitter │
//!            └────────────────┘ └──────────────────┘
//! ```

pub mod outbound;

pub use outbound::approval::{ApprovalSubmitter, SubmissionContext};
pub use outbound::provider::NetworkProvider;
pub use starknet::core::types::{BlockId, BlockTag, FunctionCall};
