use crate::{
    evm::{filter::LogFilter, EvmChain, ERC1155_ABI, ERC165_ABI, ERC20_ABI, ERC721_ABI},
    BalanceQuerier, ChainProvider,
};
use async_trait::async_trait;
use futures::{future::join_all, Stream, StreamExt};
use std::{collections::HashMap, sync::Arc, time::Duration};
use thiserror::Error;
use web3::{
    contract::{Contract, Options},
    ethabi::Token,
    transports::Http,
    types::{Address, Log, U256},
    Web3,
};

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error(transparent)]
    Web3Contract(#[from] web3::contract::Error),
    #[error(transparent)]
    Web3(#[from] web3::Error),
    #[error(transparent)]
    Abi(#[from] web3::ethabi::Error),
    #[error("{0}")]
    Other(String),
}

pub struct Web3Provider {
    chain: EvmChain,
    pub single: Web3<Http>,
}

impl Web3Provider {
    pub fn new(chain: EvmChain, rpc_url: &str) -> Result<Self, ProviderError> {
        let transport = Http::new(rpc_url)?;

        Ok(Self {
            chain,
            single: Web3::new(transport),
        })
    }

    pub fn chain(&self) -> EvmChain {
        self.chain
    }

    pub(crate) fn contract(&self, address: Address, abi: &[u8]) -> Result<Contract<Http>, ProviderError> {
        Ok(Contract::from_json(self.single.eth(), address, abi)?)
    }

    /// Polls a node-side log filter and yields every new matching log.
    pub async fn watch_logs(
        &self,
        filter: &LogFilter,
        poll_interval: Duration,
    ) -> Result<impl Stream<Item = Result<Log, ProviderError>>, ProviderError> {
        let base = self
            .single
            .eth_filter()
            .create_logs_filter(filter.into())
            .await?;

        log::debug!("{:?} log filter installed", self.chain);

        Ok(base
            .stream(poll_interval)
            .map(|res| res.map_err(ProviderError::Web3)))
    }
}

#[async_trait]
impl ChainProvider for Web3Provider {
    type Error = ProviderError;

    async fn filter_logs(&self, filter: &LogFilter) -> Result<Vec<Log>, Self::Error> {
        let logs = self.single.eth().logs(filter.into()).await?;

        log::debug!("{:?} eth_getLogs returned {} logs", self.chain, logs.len());

        Ok(logs)
    }

    async fn supports_interface(
        &self,
        contract: Address,
        interface_id: [u8; 4],
    ) -> Result<bool, Self::Error> {
        let contract = self.contract(contract, ERC165_ABI)?;

        let supported: bool = contract
            .query(
                "supportsInterface",
                (Token::FixedBytes(interface_id.to_vec()),),
                None,
                Options::default(),
                None,
            )
            .await?;

        Ok(supported)
    }
}

#[async_trait]
impl BalanceQuerier for Web3Provider {
    type Address = Address;
    type Id = U256;
    type Balance = U256;
    type Error = ProviderError;

    async fn get_native_balance(
        &self,
        user_addresses: &[Self::Address],
    ) -> Vec<Result<Self::Balance, Self::Error>> {
        join_all(user_addresses.iter().map(|ua| async {
            self.single
                .eth()
                .balance(*ua, None)
                .await
                .map_err(ProviderError::Web3)
        }))
        .await
    }

    async fn get_fungible_balance(
        &self,
        token_address: Self::Address,
        user_addresses: &[Self::Address],
    ) -> Vec<Result<Self::Balance, Self::Error>> {
        let contract = match self.contract(token_address, ERC20_ABI) {
            Ok(contract) => Arc::new(contract),
            Err(e) => return fail_all(user_addresses, &e),
        };

        join_all(user_addresses.iter().map(|ua| {
            let contract = Arc::clone(&contract);

            async move {
                let balance: Result<U256, web3::contract::Error> = contract
                    .query("balanceOf", (*ua,), None, Options::default(), None)
                    .await;

                balance.map_err(ProviderError::Web3Contract)
            }
        }))
        .await
    }

    async fn get_non_fungible_balance(
        &self,
        token_address: Self::Address,
        token_id: Option<Self::Id>,
        user_addresses: &[Self::Address],
    ) -> Vec<Result<Self::Balance, Self::Error>> {
        let contract = match self.contract(token_address, ERC721_ABI) {
            Ok(contract) => Arc::new(contract),
            Err(e) => return fail_all(user_addresses, &e),
        };

        join_all(user_addresses.iter().map(|ua| {
            let contract = Arc::clone(&contract);

            async move {
                match token_id {
                    Some(id) => {
                        let owner_res: Result<Address, web3::contract::Error> = contract
                            .query("ownerOf", (id,), None, Options::default(), None)
                            .await;

                        // ownerOf reverts for burned or unminted ids
                        Ok(match owner_res {
                            Ok(owner) => U256::from(u8::from(owner == *ua)),
                            Err(_) => U256::zero(),
                        })
                    }
                    None => {
                        let balance: Result<U256, web3::contract::Error> = contract
                            .query("balanceOf", (*ua,), None, Options::default(), None)
                            .await;

                        balance.map_err(ProviderError::Web3Contract)
                    }
                }
            }
        }))
        .await
    }

    async fn get_special_balance(
        &self,
        token_address: Self::Address,
        token_id: Self::Id,
        user_addresses: &[Self::Address],
    ) -> Vec<Result<Self::Balance, Self::Error>> {
        let contract = match self.contract(token_address, ERC1155_ABI) {
            Ok(contract) => Arc::new(contract),
            Err(e) => return fail_all(user_addresses, &e),
        };

        join_all(user_addresses.iter().map(|ua| {
            let contract = Arc::clone(&contract);

            async move {
                let balance: Result<U256, web3::contract::Error> = contract
                    .query("balanceOf", (*ua, token_id), None, Options::default(), None)
                    .await;

                balance.map_err(ProviderError::Web3Contract)
            }
        }))
        .await
    }
}

fn fail_all<T>(user_addresses: &[Address], e: &ProviderError) -> Vec<Result<T, ProviderError>> {
    user_addresses
        .iter()
        .map(|_| Err(ProviderError::Other(e.to_string())))
        .collect()
}

lazy_static::lazy_static! {
    pub static ref PROVIDERS: Arc<HashMap<EvmChain, Web3Provider>> = Arc::new({
        dotenv::dotenv().ok();

        let mut providers = HashMap::new();

        for chain in EvmChain::ALL {
            let Ok(rpc_url) = std::env::var(chain.rpc_var()) else {
                log::warn!("Environment variable `{}` not found, {:?} disabled", chain.rpc_var(), chain);
                continue;
            };

            match Web3Provider::new(chain, &rpc_url) {
                Ok(provider) => {
                    providers.insert(chain, provider);
                }
                Err(e) => log::error!("{:?} provider: {e}", chain),
            }
        }

        providers
    });
}

#[cfg(test)]
mod test {
    use super::Web3Provider;
    use crate::{address, evm::EvmChain, BalanceQuerier, ChainProvider};

    fn ethereum() -> Web3Provider {
        dotenv::dotenv().ok();

        let url = std::env::var("ETHEREUM_RPC").expect("ETHEREUM_RPC");
        Web3Provider::new(EvmChain::Ethereum, &url).unwrap()
    }

    #[test]
    fn rejects_malformed_rpc_url() {
        assert!(Web3Provider::new(EvmChain::Ethereum, "not a url").is_err());
    }

    #[tokio::test]
    #[ignore = "needs ETHEREUM_RPC"]
    async fn ens_registrar_is_erc721() {
        let provider = ethereum();

        assert!(provider
            .supports_interface(
                address!("0x57f1887a8bf19b14fc0df6fd9b2acc9af147ea85"),
                [0x80, 0xac, 0x58, 0xcd]
            )
            .await
            .unwrap());
    }

    #[tokio::test]
    #[ignore = "needs ETHEREUM_RPC"]
    async fn erc721_balance_by_owner() {
        let provider = ethereum();

        let balances = provider
            .get_non_fungible_balance(
                address!("0x57f1887a8bf19b14fc0df6fd9b2acc9af147ea85"),
                None,
                &[address!("0xE43878Ce78934fe8007748FF481f03B8Ee3b97DE")],
            )
            .await;

        assert!(balances[0].is_ok());
    }

    #[tokio::test]
    #[ignore = "needs ETHEREUM_RPC"]
    async fn erc1155_balance_per_user() {
        let provider = ethereum();
        let users = [
            address!("0xE43878Ce78934fe8007748FF481f03B8Ee3b97DE"),
            address!("0x20CC54c7ebc5f43b74866D839b4BD5c01BB23503"),
        ];

        let balances = provider
            .get_special_balance(
                address!("0x495f947276749Ce646f68AC8c248420045cb7b5e"),
                1.into(),
                &users,
            )
            .await;

        assert_eq!(balances.len(), users.len());
        assert!(balances.iter().all(Result::is_ok));
    }
}
