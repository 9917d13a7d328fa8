use crate::{
    discovery::errors::DiscoveryError,
    standards::StandardProfile,
    types::{Address, Log},
};
use providers::{evm::filter::address_topic, ChainProvider, LogFilter};

/// The two queries: transfers sent by `owner` and transfers received by it.
pub fn transfer_filters(profile: &StandardProfile, owner: Address, from_block: u64) -> [LogFilter; 2] {
    let owner = vec![address_topic(owner)];

    let sent = LogFilter::new(from_block)
        .topic(0, profile.event_topics())
        .topic(profile.from_position, owner.clone());
    let received = LogFilter::new(from_block)
        .topic(0, profile.event_topics())
        .topic(profile.to_position, owner);

    [sent, received]
}

/// Runs both queries concurrently. Either failure fails the whole fetch;
/// logs present in both answers (self-transfers) are kept twice.
pub async fn fetch_transfer_logs<P>(
    provider: &P,
    profile: &StandardProfile,
    owner: Address,
    from_block: u64,
) -> Result<Vec<Log>, DiscoveryError>
where
    P: ChainProvider + Sync + ?Sized,
{
    let [sent, received] = transfer_filters(profile, owner, from_block);

    let (mut logs, received) =
        futures::future::try_join(provider.filter_logs(&sent), provider.filter_logs(&received))
            .await
            .map_err(DiscoveryError::query)?;

    logs.extend(received);

    Ok(logs)
}
