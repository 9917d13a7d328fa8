use super::LedgerStrategy;
use crate::{
    discovery::errors::DecodeError,
    standards::TokenStandard,
    types::{Address, Log, TransferEvent, TransferKind, U256},
};
use std::collections::HashMap;

/// ERC-721: one owner per token id, the entry is a presence flag.
pub struct SingleOwner;

impl LedgerStrategy for SingleOwner {
    type Entry = bool;

    const STANDARD: TokenStandard = TokenStandard::Erc721;

    fn decode(log: &Log) -> Result<Option<TransferEvent>, DecodeError> {
        let profile = Self::STANDARD.profile();

        match log.topics.first() {
            Some(topic) if *topic == profile.transfer_topic => {}
            _ => return Ok(None),
        }

        match log.topics.len() {
            4 => {
                let token_id = U256::from_big_endian(log.topics[3].as_bytes());

                TransferEvent::from_log(
                    log,
                    profile,
                    TransferKind::Single {
                        token_id,
                        amount: U256::one(),
                    },
                )
                .map(Some)
            }
            // ERC-20 and other emitters sharing the signature without an indexed id
            count if count < 4 => {
                log::trace!("skipping non-NFT transfer from {:#x}", log.address);
                Ok(None)
            }
            count => Err(DecodeError::UnexpectedTopics {
                contract: log.address,
                count,
            }),
        }
    }

    fn apply_transfer(
        tokens: &mut HashMap<U256, bool>,
        owner: Address,
        event: &TransferEvent,
        token_id: U256,
        _amount: U256,
    ) {
        // unmark before mark: a self-transfer keeps the token
        if event.from == owner || event.to.is_zero() {
            tokens.remove(&token_id);
        }

        if event.to == owner && !event.to.is_zero() {
            tokens.insert(token_id, true);
        }
    }

    fn is_held(entry: &bool) -> bool {
        *entry
    }

    fn balance(_entry: &bool) -> U256 {
        U256::one()
    }
}
