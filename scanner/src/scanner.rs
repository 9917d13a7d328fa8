use crate::{
    config::DiscoveryConfig,
    discovery::{self, errors::DiscoveryError},
    owners,
    standards::TokenStandard,
    types::{Address, NftCollection, U256},
};
use providers::ChainProvider;
use std::collections::HashMap;

/// Entry point tying a chain provider to a discovery configuration.
pub struct NftScanner<'a, P: ?Sized> {
    provider: &'a P,
    config: DiscoveryConfig,
}

impl<'a, P> NftScanner<'a, P>
where
    P: ChainProvider + Sync + ?Sized,
{
    pub fn new(provider: &'a P) -> Self {
        Self::with_config(provider, DiscoveryConfig::default())
    }

    pub fn with_config(provider: &'a P, config: DiscoveryConfig) -> Self {
        Self { provider, config }
    }

    pub fn config(&self) -> &DiscoveryConfig {
        &self.config
    }

    pub async fn wallet_nfts(
        &self,
        owner: Address,
        standard: TokenStandard,
    ) -> Result<Vec<NftCollection>, DiscoveryError> {
        discovery::wallet_nfts(self.provider, standard, owner, &self.config).await
    }

    async fn implements(&self, contract: Address, standard: TokenStandard) -> bool {
        match self
            .provider
            .supports_interface(contract, standard.profile().interface_id)
            .await
        {
            Ok(supported) => supported,
            Err(e) => {
                log::warn!("Interface probe of {contract:#x} failed: {e}");
                false
            }
        }
    }

    pub async fn is_erc721(&self, contract: Address) -> bool {
        self.implements(contract, TokenStandard::Erc721).await
    }

    pub async fn is_erc1155(&self, contract: Address) -> bool {
        self.implements(contract, TokenStandard::Erc1155).await
    }

    pub async fn collection_owners(
        &self,
        contract: Address,
    ) -> Result<HashMap<U256, Address>, DiscoveryError> {
        owners::collection_owners(self.provider, contract, self.config.from_block).await
    }
}
