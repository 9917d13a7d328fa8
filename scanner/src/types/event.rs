use super::{Address, Log, U256};
use crate::{discovery::errors::DecodeError, standards::StandardProfile};
use providers::evm::filter::topic_address;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferKind {
    Single { token_id: U256, amount: U256 },
    Batch { token_ids: Vec<U256>, amounts: Vec<U256> },
}

impl TransferKind {
    pub fn batch(token_ids: Vec<U256>, amounts: Vec<U256>) -> Result<Self, DecodeError> {
        if token_ids.len() != amounts.len() {
            return Err(DecodeError::BatchLengthMismatch {
                ids: token_ids.len(),
                amounts: amounts.len(),
            });
        }

        Ok(TransferKind::Batch { token_ids, amounts })
    }
}

/// A decoded token transfer log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferEvent {
    pub contract: Address,
    pub block_number: u64,
    pub log_index: Option<u64>,
    pub from: Address,
    pub to: Address,
    pub kind: TransferKind,
}

impl TransferEvent {
    /// Builds the event from the parts every standard shares: emitter,
    /// position in the chain and the sender/receiver topics.
    pub(crate) fn from_log(
        log: &Log,
        profile: &StandardProfile,
        kind: TransferKind,
    ) -> Result<Self, DecodeError> {
        let block_number = log
            .block_number
            .ok_or(DecodeError::MissingField("blockNumber"))?
            .as_u64();

        let party = |position: usize| {
            log.topics
                .get(position)
                .map(topic_address)
                .ok_or(DecodeError::UnexpectedTopics {
                    contract: log.address,
                    count: log.topics.len(),
                })
        };

        Ok(Self {
            contract: log.address,
            block_number,
            log_index: log.log_index.map(|i| i.low_u64()),
            from: party(profile.from_position)?,
            to: party(profile.to_position)?,
            kind,
        })
    }

    /// `(token id, amount)` pairs moved by this event.
    pub fn transfers(&self) -> Vec<(U256, U256)> {
        match &self.kind {
            TransferKind::Single { token_id, amount } => vec![(*token_id, *amount)],
            TransferKind::Batch { token_ids, amounts } => token_ids
                .iter()
                .copied()
                .zip(amounts.iter().copied())
                .collect(),
        }
    }
}
