pub mod evm;

use async_trait::async_trait;

pub use evm::{
    filter::LogFilter,
    general::{ProviderError, Web3Provider, PROVIDERS},
    EvmChain,
};
pub use web3::types::{Address, Log, H256, U256};

/// The slice of a chain client that holdings discovery depends on.
#[async_trait]
pub trait ChainProvider {
    type Error: std::error::Error + Send + Sync + 'static;

    async fn filter_logs(&self, filter: &LogFilter) -> Result<Vec<Log>, Self::Error>;

    /// ERC-165 `supportsInterface` against `contract`.
    async fn supports_interface(
        &self,
        contract: Address,
        interface_id: [u8; 4],
    ) -> Result<bool, Self::Error>;
}

#[async_trait]
pub trait BalanceQuerier {
    type Address;
    type Id;
    type Balance;
    type Error;

    async fn get_native_balance(
        &self,
        user_addresses: &[Self::Address],
    ) -> Vec<Result<Self::Balance, Self::Error>>;

    async fn get_fungible_balance(
        &self,
        token_address: Self::Address,
        user_addresses: &[Self::Address],
    ) -> Vec<Result<Self::Balance, Self::Error>>;

    async fn get_non_fungible_balance(
        &self,
        token_address: Self::Address,
        token_id: Option<Self::Id>,
        user_addresses: &[Self::Address],
    ) -> Vec<Result<Self::Balance, Self::Error>>;

    async fn get_special_balance(
        &self,
        token_address: Self::Address,
        token_id: Self::Id,
        user_addresses: &[Self::Address],
    ) -> Vec<Result<Self::Balance, Self::Error>>;
}
