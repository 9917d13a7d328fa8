use super::LedgerStrategy;
use crate::{
    discovery::errors::DecodeError,
    standards::TokenStandard,
    types::{Address, Log, TransferEvent, TransferKind, U256},
};
use std::collections::HashMap;
use web3::ethabi::{self, ParamType, Token};

/// ERC-1155: per-id balances. Entries are signed 256 bit integers in
/// two's complement, a scan that starts mid-history can go negative.
pub struct MultiBalance;

fn uint(token: Token) -> Result<U256, DecodeError> {
    token
        .into_uint()
        .ok_or_else(|| DecodeError::InvalidData("expected uint256".into()))
}

fn uint_array(token: Token) -> Result<Vec<U256>, DecodeError> {
    token
        .into_array()
        .ok_or_else(|| DecodeError::InvalidData("expected uint256[]".into()))?
        .into_iter()
        .map(uint)
        .collect()
}

fn decode_data(types: &[ParamType], data: &[u8]) -> Result<[Token; 2], DecodeError> {
    let mut tokens = ethabi::decode(types, data)
        .map_err(|e| DecodeError::InvalidData(e.to_string()))?
        .into_iter();

    match (tokens.next(), tokens.next()) {
        (Some(first), Some(second)) => Ok([first, second]),
        _ => Err(DecodeError::InvalidData("expected two values".into())),
    }
}

impl LedgerStrategy for MultiBalance {
    type Entry = U256;

    const STANDARD: TokenStandard = TokenStandard::Erc1155;

    fn decode(log: &Log) -> Result<Option<TransferEvent>, DecodeError> {
        let profile = Self::STANDARD.profile();

        let is_batch = match log.topics.first() {
            Some(topic) if *topic == profile.transfer_topic => false,
            Some(topic) if Some(*topic) == profile.batch_topic => true,
            _ => return Ok(None),
        };

        if log.topics.len() != 4 {
            return Err(DecodeError::UnexpectedTopics {
                contract: log.address,
                count: log.topics.len(),
            });
        }

        let kind = if is_batch {
            let uints = ParamType::Array(Box::new(ParamType::Uint(256)));
            let [ids, values] = decode_data(&[uints.clone(), uints], &log.data.0)?;

            TransferKind::batch(uint_array(ids)?, uint_array(values)?)?
        } else {
            let [id, value] = decode_data(
                &[ParamType::Uint(256), ParamType::Uint(256)],
                &log.data.0,
            )?;

            TransferKind::Single {
                token_id: uint(id)?,
                amount: uint(value)?,
            }
        };

        TransferEvent::from_log(log, profile, kind).map(Some)
    }

    fn apply_transfer(
        tokens: &mut HashMap<U256, U256>,
        owner: Address,
        event: &TransferEvent,
        token_id: U256,
        amount: U256,
    ) {
        let balance = tokens.entry(token_id).or_default();

        if event.from == owner {
            *balance = balance.overflowing_sub(amount).0;
        }
        if event.to == owner {
            *balance = balance.overflowing_add(amount).0;
        }
    }

    fn is_held(entry: &U256) -> bool {
        !entry.is_zero() && !entry.bit(255)
    }

    fn balance(entry: &U256) -> U256 {
        *entry
    }
}

#[cfg(test)]
mod test {
    use super::MultiBalance;
    use crate::{
        discovery::{errors::DecodeError, strategy::LedgerStrategy},
        test_utils::{alice, bob, erc1155_batch, erc1155_single, erc20_transfer, nft_contract},
        types::{TransferKind, U256},
    };
    use std::collections::HashMap;

    #[test]
    fn decodes_single_and_batch() {
        let single = erc1155_single(nft_contract(2), alice(), bob(), 3, 5, 1, 0);
        assert_eq!(
            MultiBalance::decode(&single).unwrap().unwrap().kind,
            TransferKind::Single {
                token_id: U256::from(3),
                amount: U256::from(5)
            }
        );

        let batch = erc1155_batch(nft_contract(2), alice(), bob(), &[1, 2], &[5, 6], 1, 1);
        assert_eq!(
            MultiBalance::decode(&batch).unwrap().unwrap().kind,
            TransferKind::Batch {
                token_ids: vec![U256::from(1), U256::from(2)],
                amounts: vec![U256::from(5), U256::from(6)]
            }
        );
    }

    #[test]
    fn mismatched_batch_is_a_decode_error() {
        let batch = erc1155_batch(nft_contract(2), alice(), bob(), &[1, 2], &[5], 1, 1);

        assert!(matches!(
            MultiBalance::decode(&batch),
            Err(DecodeError::BatchLengthMismatch { ids: 2, amounts: 1 })
        ));
    }

    #[test]
    fn foreign_events_are_skipped_before_shape_checks() {
        let fungible = erc20_transfer(nft_contract(2), alice(), bob(), 10, 1, 0);
        assert!(MultiBalance::decode(&fungible).unwrap().is_none());

        let mut single = erc1155_single(nft_contract(2), alice(), bob(), 3, 5, 1, 0);
        single.topics.truncate(3);
        assert!(matches!(
            MultiBalance::decode(&single),
            Err(DecodeError::UnexpectedTopics { count: 3, .. })
        ));
    }

    #[test]
    fn truncated_data_is_a_decode_error() {
        let mut single = erc1155_single(nft_contract(2), alice(), bob(), 3, 5, 1, 0);
        single.data.0.truncate(40);

        assert!(matches!(
            MultiBalance::decode(&single),
            Err(DecodeError::InvalidData(_))
        ));
    }

    #[test]
    fn negative_balances_are_not_held() {
        let event = MultiBalance::decode(&erc1155_single(nft_contract(2), alice(), bob(), 3, 5, 1, 0))
            .unwrap()
            .unwrap();
        let mut tokens = HashMap::new();

        MultiBalance::apply_transfer(&mut tokens, alice(), &event, U256::from(3), U256::from(5));

        let entry = tokens[&U256::from(3)];
        assert!(!MultiBalance::is_held(&entry));

        MultiBalance::apply_transfer(&mut tokens, bob(), &event, U256::from(3), U256::from(5));
        MultiBalance::apply_transfer(&mut tokens, bob(), &event, U256::from(3), U256::from(5));
        assert!(MultiBalance::is_held(&tokens[&U256::from(3)]));
    }

    #[test]
    fn batch_apply_checks_lengths() {
        let event = MultiBalance::decode(&erc1155_batch(nft_contract(2), alice(), bob(), &[1], &[1], 1, 0))
            .unwrap()
            .unwrap();
        let mut tokens = HashMap::new();

        assert!(MultiBalance::apply_batch_transfer(
            &mut tokens,
            bob(),
            &event,
            &[U256::from(1), U256::from(2)],
            &[U256::from(1)]
        )
        .is_err());
    }
}
