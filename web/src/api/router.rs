use crate::api::{
    service::{self, ApiError},
    types::{CollectionOwnersRequest, WalletNftsRequest},
};
use actix_web::{post, web, Responder};

#[post("/walletNfts")]
async fn wallet_nfts(body: web::Json<WalletNftsRequest>) -> Result<impl Responder, ApiError> {
    log::info!("wallet_nfts - {:?}", body);

    Ok(web::Json(
        service::wallet_nfts(body.chain, body.address, body.standard, body.from_block).await?,
    ))
}

#[post("/collectionOwners")]
async fn collection_owners(
    body: web::Json<CollectionOwnersRequest>,
) -> Result<impl Responder, ApiError> {
    log::info!("collection_owners - {:?}", body);

    Ok(web::Json(
        service::collection_owners(body.chain, body.address, body.from_block).await?,
    ))
}
