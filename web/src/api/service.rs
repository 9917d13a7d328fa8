use crate::api::types::ErrorBody;
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use nft_scanner::{
    types::{Address, NftCollection, U256},
    DiscoveryConfig, DiscoveryError, NftScanner, TokenStandard, CONFIG,
};
use providers::{EvmChain, Web3Provider, PROVIDERS};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("No provider configured for {0:?}")]
    UnknownChain(EvmChain),
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::UnknownChain(_) => StatusCode::BAD_REQUEST,
            ApiError::Discovery(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            msg: self.to_string(),
        })
    }
}

fn scanner(chain: EvmChain, from_block: Option<u64>) -> Result<NftScanner<'static, Web3Provider>, ApiError> {
    let provider = PROVIDERS.get(&chain).ok_or(ApiError::UnknownChain(chain))?;

    let config = DiscoveryConfig {
        from_block: from_block.unwrap_or(CONFIG.from_block),
        ..CONFIG.clone()
    };

    Ok(NftScanner::with_config(provider, config))
}

pub async fn wallet_nfts(
    chain: EvmChain,
    owner: Address,
    standard: TokenStandard,
    from_block: Option<u64>,
) -> Result<Vec<NftCollection>, ApiError> {
    let collections = scanner(chain, from_block)?
        .wallet_nfts(owner, standard)
        .await?;

    Ok(collections)
}

pub async fn collection_owners(
    chain: EvmChain,
    contract: Address,
    from_block: Option<u64>,
) -> Result<HashMap<U256, Address>, ApiError> {
    let owners = scanner(chain, from_block)?
        .collection_owners(contract)
        .await?;

    Ok(owners)
}
