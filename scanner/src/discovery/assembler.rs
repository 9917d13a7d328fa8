use crate::{
    discovery::strategy::{HoldingsLedger, LedgerStrategy},
    types::{Address, Nft, NftCollection},
};
use std::collections::HashMap;

/// Keeps the ledger contracts that passed verification. Collection order
/// follows map iteration and carries no meaning.
pub fn assemble<S: LedgerStrategy>(
    ledger: HoldingsLedger<S::Entry>,
    verified: &HashMap<Address, bool>,
) -> Vec<NftCollection> {
    ledger
        .into_iter()
        .filter(|(contract, _)| verified.get(contract).copied().unwrap_or_default())
        .map(|(contract, tokens)| NftCollection {
            contract_address: contract,
            standard: S::STANDARD,
            tokens: tokens
                .iter()
                .filter(|(_, entry)| S::is_held(entry))
                .map(|(token_id, entry)| Nft {
                    contract_address: contract,
                    token_id: *token_id,
                    standard: S::STANDARD,
                    balance: S::balance(entry),
                })
                .collect(),
        })
        .filter(|collection| !collection.tokens.is_empty())
        .collect()
}
