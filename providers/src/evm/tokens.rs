use crate::evm::{
    general::{ProviderError, Web3Provider},
    ERC20_ABI, ERC721_ABI,
};
use serde::Serialize;
use web3::{
    contract::Options,
    types::{Address, U256},
};

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Erc20Token {
    pub address: Address,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub total_supply: U256,
}

impl Web3Provider {
    pub async fn erc20_info(&self, token_address: Address) -> Result<Erc20Token, ProviderError> {
        let contract = self.contract(token_address, ERC20_ABI)?;

        let name: String = contract
            .query("name", (), None, Options::default(), None)
            .await?;
        let symbol: String = contract
            .query("symbol", (), None, Options::default(), None)
            .await?;
        let decimals: u8 = contract
            .query("decimals", (), None, Options::default(), None)
            .await?;
        let total_supply: U256 = contract
            .query("totalSupply", (), None, Options::default(), None)
            .await?;

        Ok(Erc20Token {
            address: token_address,
            name,
            symbol,
            decimals,
            total_supply,
        })
    }

    pub async fn nft_name(&self, token_address: Address) -> Result<String, ProviderError> {
        let contract = self.contract(token_address, ERC721_ABI)?;

        Ok(contract
            .query("name", (), None, Options::default(), None)
            .await?)
    }

    pub async fn nft_symbol(&self, token_address: Address) -> Result<String, ProviderError> {
        let contract = self.contract(token_address, ERC721_ABI)?;

        Ok(contract
            .query("symbol", (), None, Options::default(), None)
            .await?)
    }

    pub async fn owner_of(
        &self,
        token_address: Address,
        token_id: U256,
    ) -> Result<Address, ProviderError> {
        let contract = self.contract(token_address, ERC721_ABI)?;

        Ok(contract
            .query("ownerOf", (token_id,), None, Options::default(), None)
            .await?)
    }
}
