use crate::types::Address;
use futures::future::join_all;
use providers::ChainProvider;
use std::collections::{HashMap, HashSet};
use tokio::sync::Mutex;

pub const DEFAULT_POOL_SIZE: usize = 10;

/// Probes every contract for `interface_id` with a fixed number of workers
/// pulling from a shared queue. Returns once every probe has finished.
/// Failed probes are recorded as unsupported.
pub async fn verify_contracts<P, I>(
    provider: &P,
    contracts: I,
    interface_id: [u8; 4],
    pool_size: usize,
) -> HashMap<Address, bool>
where
    P: ChainProvider + Sync + ?Sized,
    I: IntoIterator<Item = Address>,
{
    let contracts: HashSet<Address> = contracts.into_iter().collect();
    let workers = pool_size.max(1).min(contracts.len());
    let queue = Mutex::new(contracts.into_iter());

    let per_worker = join_all((0..workers).map(|worker| {
        let queue = &queue;

        async move {
            let mut verified = Vec::new();

            loop {
                let next = queue.lock().await.next();
                let Some(contract) = next else {
                    break;
                };

                let supported = match provider.supports_interface(contract, interface_id).await {
                    Ok(supported) => supported,
                    Err(e) => {
                        log::warn!("worker {worker}: probing {contract:#x} failed: {e}");
                        false
                    }
                };

                verified.push((contract, supported));
            }

            verified
        }
    }))
    .await;

    per_worker.into_iter().flatten().collect()
}
