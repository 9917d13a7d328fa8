use crate::{
    discovery::{
        errors::DiscoveryError,
        replay::chain_order,
        strategy::{LedgerStrategy, SingleOwner},
    },
    standards::TokenStandard,
    types::{Address, U256},
};
use providers::{ChainProvider, LogFilter};
use std::collections::HashMap;

/// Current owner of every live token of an ERC-721 collection, rebuilt
/// from the collection's own transfer history.
pub async fn collection_owners<P>(
    provider: &P,
    contract: Address,
    from_block: u64,
) -> Result<HashMap<U256, Address>, DiscoveryError>
where
    P: ChainProvider + Sync + ?Sized,
{
    let filter = LogFilter::new(from_block)
        .address(vec![contract])
        .topic(0, vec![TokenStandard::Erc721.profile().transfer_topic]);

    let logs = provider
        .filter_logs(&filter)
        .await
        .map_err(DiscoveryError::query)?;

    let mut owners = HashMap::new();

    for event in chain_order(&logs, SingleOwner::decode)? {
        for (token_id, _) in event.transfers() {
            if event.to.is_zero() {
                owners.remove(&token_id);
            } else {
                owners.insert(token_id, event.to);
            }
        }
    }

    log::debug!(
        "collection {contract:#x}: {} owned tokens from {} logs",
        owners.len(),
        logs.len()
    );

    Ok(owners)
}
