use serde::{Deserialize, Serialize};
use web3::{signing::keccak256, types::H256};

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenStandard {
    Erc721,
    Erc1155,
}

/// Everything about a token standard that log scanning and probing need.
#[derive(Debug, Clone)]
pub struct StandardProfile {
    /// ERC-165 interface id.
    pub interface_id: [u8; 4],
    /// topic0 of the single transfer event.
    pub transfer_topic: H256,
    /// topic0 of the batch transfer event, if the standard has one.
    pub batch_topic: Option<H256>,
    /// Topic positions carrying the sender and the receiver.
    pub from_position: usize,
    pub to_position: usize,
}

impl StandardProfile {
    pub fn event_topics(&self) -> Vec<H256> {
        std::iter::once(self.transfer_topic)
            .chain(self.batch_topic)
            .collect()
    }
}

pub struct StandardRegistry {
    erc721: StandardProfile,
    erc1155: StandardProfile,
}

impl StandardRegistry {
    pub fn get(&self, standard: TokenStandard) -> &StandardProfile {
        match standard {
            TokenStandard::Erc721 => &self.erc721,
            TokenStandard::Erc1155 => &self.erc1155,
        }
    }
}

pub fn event_topic(signature: &str) -> H256 {
    H256::from(keccak256(signature.as_bytes()))
}

lazy_static::lazy_static! {
    pub static ref STANDARDS: StandardRegistry = StandardRegistry {
        erc721: StandardProfile {
            interface_id: [0x80, 0xac, 0x58, 0xcd],
            transfer_topic: event_topic("Transfer(address,address,uint256)"),
            batch_topic: None,
            from_position: 1,
            to_position: 2,
        },
        erc1155: StandardProfile {
            interface_id: [0xd9, 0xb6, 0x7a, 0x26],
            transfer_topic: event_topic("TransferSingle(address,address,address,uint256,uint256)"),
            batch_topic: Some(event_topic(
                "TransferBatch(address,address,address,uint256[],uint256[])",
            )),
            from_position: 2,
            to_position: 3,
        },
    };
}

impl TokenStandard {
    pub fn profile(&self) -> &'static StandardProfile {
        STANDARDS.get(*self)
    }
}

#[cfg(test)]
mod test {
    use super::TokenStandard;
    use std::str::FromStr;
    use web3::types::H256;

    #[test]
    fn well_known_event_topics() {
        assert_eq!(
            TokenStandard::Erc721.profile().transfer_topic,
            H256::from_str("ddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef")
                .unwrap()
        );
        assert_eq!(
            TokenStandard::Erc1155.profile().transfer_topic,
            H256::from_str("c3d58168c5ae7397731d063d5bbf3d657854427343f4c083240f7aacaa2d0f62")
                .unwrap()
        );
        assert_eq!(
            TokenStandard::Erc1155.profile().batch_topic,
            Some(
                H256::from_str("4a39dc06d4c0dbc64b70af90fd698a233a518aa5d07e595d983b8c0526c8f7fb")
                    .unwrap()
            )
        );
    }

    #[test]
    fn erc1155_scans_both_events() {
        assert_eq!(TokenStandard::Erc721.profile().event_topics().len(), 1);
        assert_eq!(TokenStandard::Erc1155.profile().event_topics().len(), 2);
    }
}
