mod multi_balance;
mod single_owner;

pub use multi_balance::MultiBalance;
pub use single_owner::SingleOwner;

use crate::{
    discovery::errors::DecodeError,
    standards::TokenStandard,
    types::{Address, Log, TransferEvent, U256},
};
use std::{collections::HashMap, fmt::Debug};

/// contract -> token id -> entry
pub type HoldingsLedger<E> = HashMap<Address, HashMap<U256, E>>;

/// How one token standard turns transfer logs into ledger updates.
pub trait LedgerStrategy {
    type Entry: Clone + Debug + PartialEq;

    const STANDARD: TokenStandard;

    /// `Ok(None)` marks a log that matched the query but is not a token
    /// transfer of this standard.
    fn decode(log: &Log) -> Result<Option<TransferEvent>, DecodeError>;

    fn apply_transfer(
        tokens: &mut HashMap<U256, Self::Entry>,
        owner: Address,
        event: &TransferEvent,
        token_id: U256,
        amount: U256,
    );

    fn apply_batch_transfer(
        tokens: &mut HashMap<U256, Self::Entry>,
        owner: Address,
        event: &TransferEvent,
        token_ids: &[U256],
        amounts: &[U256],
    ) -> Result<(), DecodeError> {
        if token_ids.len() != amounts.len() {
            return Err(DecodeError::BatchLengthMismatch {
                ids: token_ids.len(),
                amounts: amounts.len(),
            });
        }

        for (token_id, amount) in token_ids.iter().zip(amounts) {
            Self::apply_transfer(tokens, owner, event, *token_id, *amount);
        }

        Ok(())
    }

    fn is_held(entry: &Self::Entry) -> bool;

    /// Quantity reported for a held entry.
    fn balance(entry: &Self::Entry) -> U256;
}

pub fn decode_log(standard: TokenStandard, log: &Log) -> Result<Option<TransferEvent>, DecodeError> {
    match standard {
        TokenStandard::Erc721 => SingleOwner::decode(log),
        TokenStandard::Erc1155 => MultiBalance::decode(log),
    }
}
