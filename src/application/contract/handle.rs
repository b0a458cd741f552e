//! Call proxy bound to one deployed token contract.

use std::sync::Arc;

use alloy_primitives::U256;
use starknet::core::utils::get_selector_from_name;
use tracing::debug;

use crate::domain::{felt_to_u256, u256_calldata, u256_from_felts, Abi, ContractAddress, Felt};
use crate::error::{ContractError, Error, Result};
use crate::port::{BlockId, FunctionCall, NetworkProvider};

/// ERC20 `allowance(owner, spender) -> u256`.
pub const ALLOWANCE: &[&str] = &["allowance"];

/// ERC721 `get_approved(token_id: u256) -> ContractAddress`.
pub const GET_APPROVED: &[&str] = &["get_approved", "getApproved"];

/// A contract proxy bound to {address, ABI, provider}.
///
/// Handles are created per call by [`ContractResolver`](super::ContractResolver)
/// and dropped when the call finishes.
pub struct ContractHandle {
    address: ContractAddress,
    abi: Abi,
    provider: Arc<dyn NetworkProvider>,
    block: BlockId,
}

impl ContractHandle {
    pub fn new(
        address: ContractAddress,
        abi: Abi,
        provider: Arc<dyn NetworkProvider>,
        block: BlockId,
    ) -> Self {
        Self {
            address,
            abi,
            provider,
            block,
        }
    }

    #[must_use]
    pub fn address(&self) -> ContractAddress {
        self.address
    }

    #[must_use]
    pub fn abi(&self) -> &Abi {
        &self.abi
    }

    /// Call the first of `candidates` the ABI declares.
    async fn call(
        &self,
        candidates: &[&'static str],
        calldata: Vec<Felt>,
    ) -> Result<(&'static str, Vec<Felt>)> {
        let entry_point =
            self.abi
                .find_entry_point(candidates)
                .ok_or_else(|| ContractError::EntryPointNotFound {
                    address: self.address,
                    candidates: candidates.to_vec(),
                })?;

        let entry_point_selector = get_selector_from_name(entry_point)
            .map_err(|e| Error::Parse(format!("invalid entry point name {entry_point}: {e}")))?;

        debug!(
            contract = %self.address,
            entry_point,
            block = ?self.block,
            "Calling contract"
        );

        let request = FunctionCall {
            contract_address: self.address.felt(),
            entry_point_selector,
            calldata,
        };
        let result = self.provider.call(request, self.block).await?;

        Ok((entry_point, result))
    }

    /// Read how much `spender` may spend on behalf of `owner`.
    ///
    /// The `[low, high]` pair is joined without narrowing. A single-felt
    /// result is accepted for legacy contracts returning a plain felt.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::EntryPointNotFound`] if the ABI has no
    /// `allowance`, [`ContractError::MalformedResponse`] for an unexpected
    /// result shape, and provider errors unchanged.
    pub async fn allowance(&self, owner: ContractAddress, spender: ContractAddress) -> Result<U256> {
        let (entry_point, result) = self
            .call(ALLOWANCE, vec![owner.felt(), spender.felt()])
            .await?;

        match result.as_slice() {
            [value] => Ok(felt_to_u256(*value)),
            [low, high] => u256_from_felts(*low, *high).ok_or_else(|| {
                ContractError::MalformedResponse {
                    entry_point,
                    reason: "u256 half exceeds 128 bits".to_string(),
                }
                .into()
            }),
            other => Err(ContractError::MalformedResponse {
                entry_point,
                reason: format!("expected 1 or 2 felts, got {}", other.len()),
            }
            .into()),
        }
    }

    /// Read the spender approved for `token_id`.
    ///
    /// Returns `None` when the contract reports the zero address.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::EntryPointNotFound`] if the ABI has neither
    /// `get_approved` nor `getApproved`, [`ContractError::MalformedResponse`]
    /// for an empty result, and provider errors unchanged.
    pub async fn get_approved(&self, token_id: U256) -> Result<Option<ContractAddress>> {
        let (entry_point, result) = self
            .call(GET_APPROVED, u256_calldata(token_id).to_vec())
            .await?;

        let first = result
            .first()
            .copied()
            .ok_or_else(|| ContractError::MalformedResponse {
                entry_point,
                reason: "empty result".to_string(),
            })?;

        let spender = ContractAddress::from(first);
        Ok((!spender.is_zero()).then_some(spender))
    }
}
