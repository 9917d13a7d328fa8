use crate::{
    discovery::{
        errors::DecodeError,
        strategy::{HoldingsLedger, LedgerStrategy},
    },
    types::{Address, Log, TransferEvent, TransferKind},
};
use std::{
    cmp::{Ordering, Reverse},
    collections::BinaryHeap,
};

/// Heap entry keyed on (block, log index, arrival). Logs without a log
/// index fall back to arrival order within their block.
struct Pending {
    key: (u64, Option<u64>, usize),
    event: TransferEvent,
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Pending {}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

/// Decodes every log and returns the transfers in chain order.
pub fn chain_order<F>(logs: &[Log], decode: F) -> Result<Vec<TransferEvent>, DecodeError>
where
    F: Fn(&Log) -> Result<Option<TransferEvent>, DecodeError>,
{
    let mut heap = BinaryHeap::with_capacity(logs.len());

    for (arrival, log) in logs.iter().enumerate() {
        if let Some(event) = decode(log)? {
            heap.push(Reverse(Pending {
                key: (event.block_number, event.log_index, arrival),
                event,
            }));
        }
    }

    let mut ordered = Vec::with_capacity(heap.len());
    while let Some(Reverse(pending)) = heap.pop() {
        ordered.push(pending.event);
    }

    Ok(ordered)
}

/// Replays `logs` for `owner` and returns the pruned ledger.
pub fn replay<S: LedgerStrategy>(
    logs: &[Log],
    owner: Address,
) -> Result<HoldingsLedger<S::Entry>, DecodeError> {
    let mut ledger: HoldingsLedger<S::Entry> = HoldingsLedger::new();

    for event in chain_order(logs, S::decode)? {
        let tokens = ledger.entry(event.contract).or_default();

        match &event.kind {
            TransferKind::Single { token_id, amount } => {
                S::apply_transfer(tokens, owner, &event, *token_id, *amount)
            }
            TransferKind::Batch { token_ids, amounts } => {
                S::apply_batch_transfer(tokens, owner, &event, token_ids, amounts)?
            }
        }
    }

    for tokens in ledger.values_mut() {
        tokens.retain(|_, entry| S::is_held(entry));
    }
    ledger.retain(|_, tokens| !tokens.is_empty());

    Ok(ledger)
}
