use super::{Address, U256};
use crate::standards::TokenStandard;
use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Nft {
    pub contract_address: Address,
    pub token_id: U256,
    pub standard: TokenStandard,
    /// Always one for single-owner tokens.
    pub balance: U256,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NftCollection {
    pub contract_address: Address,
    pub standard: TokenStandard,
    pub tokens: Vec<Nft>,
}
