pub mod filter;
pub mod general;
pub mod tokens;

use serde::{Deserialize, Serialize};

pub const ERC20_ABI: &[u8] = include_bytes!("../../abi/ERC20.json");
pub const ERC721_ABI: &[u8] = include_bytes!("../../abi/ERC721.json");
pub const ERC1155_ABI: &[u8] = include_bytes!("../../abi/ERC1155.json");
pub const ERC165_ABI: &[u8] = include_bytes!("../../abi/ERC165.json");

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EvmChain {
    Ethereum,
    Polygon,
    Gnosis,
    Bsc,
    Fantom,
    Avalanche,
    Arbitrum,
    Optimism,
    Goerli,
    Sepolia,
}

impl EvmChain {
    pub const ALL: [EvmChain; 10] = [
        EvmChain::Ethereum,
        EvmChain::Polygon,
        EvmChain::Gnosis,
        EvmChain::Bsc,
        EvmChain::Fantom,
        EvmChain::Avalanche,
        EvmChain::Arbitrum,
        EvmChain::Optimism,
        EvmChain::Goerli,
        EvmChain::Sepolia,
    ];

    /// Name of the environment variable holding this chain's RPC url.
    pub fn rpc_var(&self) -> &'static str {
        use EvmChain::*;

        match self {
            Ethereum => "ETHEREUM_RPC",
            Polygon => "POLYGON_RPC",
            Gnosis => "GNOSIS_RPC",
            Bsc => "BSC_RPC",
            Fantom => "FANTOM_RPC",
            Avalanche => "AVALANCHE_RPC",
            Arbitrum => "ARBITRUM_RPC",
            Optimism => "OPTIMISM_RPC",
            Goerli => "GOERLI_RPC",
            Sepolia => "SEPOLIA_RPC",
        }
    }
}

#[macro_export]
macro_rules! address {
    ($addr:expr) => {{
        use std::str::FromStr;
        web3::types::Address::from_str($addr).expect(&format!("Invalid address {}", $addr))
    }};
}
