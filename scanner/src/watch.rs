use crate::{
    discovery::{errors::DiscoveryError, strategy::decode_log},
    standards::TokenStandard,
    types::{Log, TransferEvent},
};
use futures::{future, Stream, StreamExt};

/// Decodes a live log stream into transfers of `standard`. Logs that are
/// not transfers of that standard are dropped, broken ones are yielded as
/// errors without ending the stream.
pub fn decode_transfers<St, E>(
    logs: St,
    standard: TokenStandard,
) -> impl Stream<Item = Result<TransferEvent, DiscoveryError>>
where
    St: Stream<Item = Result<Log, E>>,
    E: std::error::Error + Send + Sync + 'static,
{
    logs.filter_map(move |res| {
        future::ready(match res {
            Ok(log) => decode_log(standard, &log)
                .map_err(DiscoveryError::from)
                .transpose(),
            Err(e) => Some(Err(DiscoveryError::query(e))),
        })
    })
}
