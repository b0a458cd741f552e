//! Network provider port for Starknet reads.
//!
//! Implementations wrap a JSON-RPC node (or anything that can answer
//! `starknet_getClassAt` and `starknet_call`). The checkers never write
//! through this port. Requests and responses use the `starknet` crate's RPC
//! types, so a `starknet::providers::Provider` adapts with one line per
//! method.

use async_trait::async_trait;
use starknet::core::types::{BlockId, ContractClass, Felt, FunctionCall};

use crate::error::Result;

/// Port for reading contract classes and calling view functions.
///
/// # Thread Safety
///
/// Implementations must be thread-safe (`Send + Sync`).
///
/// # Errors
///
/// Transport or node failures should be reported as
/// [`Error::Network`](crate::error::Error::Network); callers propagate them
/// unchanged.
#[async_trait]
pub trait NetworkProvider: Send + Sync {
    /// Fetch the class deployed at `address`.
    ///
    /// A class without an interface description is returned as-is, not as
    /// an error.
    async fn get_class_at(&self, block_id: BlockId, address: Felt) -> Result<ContractClass>;

    /// Call a view function and return its raw result felts.
    async fn call(&self, request: FunctionCall, block_id: BlockId) -> Result<Vec<Felt>>;
}
