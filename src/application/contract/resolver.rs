//! Maps a contract address to a callable [`ContractHandle`].

use std::sync::Arc;

use tracing::debug;

use super::handle::ContractHandle;
use crate::domain::{Abi, ContractAddress, TokenStandard};
use crate::error::{ContractError, Result};
use crate::port::{BlockId, NetworkProvider};

/// Fetches a contract's interface description and binds a handle to it.
///
/// Nothing is cached: every resolve issues one `get_class_at`.
#[derive(Clone)]
pub struct ContractResolver {
    provider: Arc<dyn NetworkProvider>,
    block: BlockId,
}

impl ContractResolver {
    pub fn new(provider: Arc<dyn NetworkProvider>, block: BlockId) -> Self {
        Self { provider, block }
    }

    /// Resolve `address` into a handle.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::ContractResolution`] if the class has no ABI,
    /// [`Error::Parse`](crate::error::Error::Parse) if its ABI cannot be
    /// decoded, and provider errors unchanged.
    pub async fn resolve(&self, address: ContractAddress) -> Result<ContractHandle> {
        let class = self.provider.get_class_at(self.block, address.felt()).await?;
        let abi = Abi::from_class(&class)?.ok_or(ContractError::ContractResolution { address })?;

        debug!(
            contract = %address,
            functions = abi.functions().len(),
            "Resolved contract class"
        );

        Ok(ContractHandle::new(
            address,
            abi,
            Arc::clone(&self.provider),
            self.block,
        ))
    }

    /// Resolve `address` and check that its ABI matches `expected`.
    ///
    /// # Errors
    ///
    /// As [`resolve`](Self::resolve), plus
    /// [`ContractError::UnexpectedStandard`] on a mismatch.
    pub async fn resolve_as(
        &self,
        address: ContractAddress,
        expected: TokenStandard,
    ) -> Result<ContractHandle> {
        let handle = self.resolve(address).await?;
        let found = handle.abi().token_standard();
        if found != expected {
            return Err(ContractError::UnexpectedStandard {
                address,
                expected,
                found,
            }
            .into());
        }
        Ok(handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::port::BlockTag;
    use crate::testkit::domain::{class_without_abi, erc20_class, erc721_class, legacy_class};
    use crate::testkit::provider::MockProvider;

    const LATEST: BlockId = BlockId::Tag(BlockTag::Latest);

    #[tokio::test]
    async fn resolve_binds_the_fetched_abi() {
        let provider = Arc::new(MockProvider::new().with_class(erc20_class()));
        let resolver = ContractResolver::new(provider.clone(), BlockId::Tag(BlockTag::Pending));

        let handle = resolver
            .resolve(ContractAddress::from(0xaaa_u64))
            .await
            .unwrap();

        assert_eq!(handle.address(), ContractAddress::from(0xaaa_u64));
        assert!(handle.abi().has_function("allowance"));
        assert_eq!(provider.class_requests(), vec![ContractAddress::from(0xaaa_u64)]);
        assert_eq!(provider.blocks(), vec![BlockId::Tag(BlockTag::Pending)]);
    }

    #[tokio::test]
    async fn class_without_abi_is_a_resolution_error() {
        let provider = Arc::new(MockProvider::new().with_class(class_without_abi()));
        let resolver = ContractResolver::new(provider, LATEST);

        let err = resolver
            .resolve(ContractAddress::from(0xaaa_u64))
            .await
            .err()
            .unwrap();

        assert!(matches!(
            err,
            Error::Contract(ContractError::ContractResolution { .. })
        ));
    }

    #[tokio::test]
    async fn provider_errors_pass_through() {
        let provider = Arc::new(
            MockProvider::new().with_class_result(Err(Error::Network("connection reset".into()))),
        );
        let resolver = ContractResolver::new(provider, LATEST);

        let err = resolver
            .resolve(ContractAddress::from(0xaaa_u64))
            .await
            .err()
            .unwrap();

        assert!(matches!(err, Error::Network(ref m) if m == "connection reset"));
    }

    #[tokio::test]
    async fn resolve_as_rejects_the_wrong_standard() {
        let provider = Arc::new(MockProvider::new().with_class(erc721_class()));
        let resolver = ContractResolver::new(provider, LATEST);

        let err = resolver
            .resolve_as(ContractAddress::from(0xbbb_u64), TokenStandard::Erc20)
            .await
            .err()
            .unwrap();

        assert!(matches!(
            err,
            Error::Contract(ContractError::UnexpectedStandard {
                expected: TokenStandard::Erc20,
                found: TokenStandard::Erc721,
                ..
            })
        ));
    }

    #[tokio::test]
    async fn resolve_as_accepts_legacy_classes() {
        let provider =
            Arc::new(MockProvider::new().with_class(legacy_class(&["ownerOf", "getApproved"])));
        let resolver = ContractResolver::new(provider, LATEST);

        assert!(resolver
            .resolve_as(ContractAddress::from(0xbbb_u64), TokenStandard::Erc721)
            .await
            .is_ok());
    }
}
