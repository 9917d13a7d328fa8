use nft_scanner::{types::Address, TokenStandard};
use providers::EvmChain;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct WalletNftsRequest {
    pub chain: EvmChain,
    pub address: Address,
    pub standard: TokenStandard,
    pub from_block: Option<u64>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CollectionOwnersRequest {
    pub chain: EvmChain,
    pub address: Address,
    pub from_block: Option<u64>,
}

#[derive(Serialize, Debug)]
pub struct ErrorBody {
    pub msg: String,
}
