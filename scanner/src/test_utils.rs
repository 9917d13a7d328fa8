use crate::{
    address,
    standards::TokenStandard,
    types::{Address, Log, H256, U256},
};
use async_trait::async_trait;
use providers::{evm::filter::address_topic, ChainProvider, LogFilter};
use std::{
    collections::{HashMap, HashSet},
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    },
};
use web3::{
    ethabi::{encode, Token},
    types::{Bytes, U64},
};

pub fn alice() -> Address {
    address!("0xE43878Ce78934fe8007748FF481f03B8Ee3b97DE")
}

pub fn bob() -> Address {
    address!("0x20CC54c7ebc5f43b74866D839b4BD5c01BB23503")
}

pub fn nft_contract(n: u64) -> Address {
    Address::from_low_u64_be(0x1000 + n)
}

fn id_topic(id: u64) -> H256 {
    let mut word = [0u8; 32];
    U256::from(id).to_big_endian(&mut word);
    H256::from(word)
}

pub fn raw_log(contract: Address, topics: Vec<H256>, data: Vec<u8>, block: u64, index: u64) -> Log {
    Log {
        address: contract,
        topics,
        data: Bytes(data),
        block_hash: None,
        block_number: Some(U64::from(block)),
        transaction_hash: None,
        transaction_index: None,
        log_index: Some(U256::from(index)),
        transaction_log_index: None,
        log_type: None,
        removed: None,
    }
}

pub fn erc721_transfer(
    contract: Address,
    from: Address,
    to: Address,
    token_id: u64,
    block: u64,
    index: u64,
) -> Log {
    raw_log(
        contract,
        vec![
            TokenStandard::Erc721.profile().transfer_topic,
            address_topic(from),
            address_topic(to),
            id_topic(token_id),
        ],
        vec![],
        block,
        index,
    )
}

pub fn erc20_transfer(
    contract: Address,
    from: Address,
    to: Address,
    value: u64,
    block: u64,
    index: u64,
) -> Log {
    raw_log(
        contract,
        vec![
            TokenStandard::Erc721.profile().transfer_topic,
            address_topic(from),
            address_topic(to),
        ],
        encode(&[Token::Uint(U256::from(value))]),
        block,
        index,
    )
}

fn erc1155_topics(topic: H256, from: Address, to: Address) -> Vec<H256> {
    // operator is the sender in these fixtures
    vec![topic, address_topic(from), address_topic(from), address_topic(to)]
}

pub fn erc1155_single(
    contract: Address,
    from: Address,
    to: Address,
    id: u64,
    value: u64,
    block: u64,
    index: u64,
) -> Log {
    raw_log(
        contract,
        erc1155_topics(TokenStandard::Erc1155.profile().transfer_topic, from, to),
        encode(&[Token::Uint(U256::from(id)), Token::Uint(U256::from(value))]),
        block,
        index,
    )
}

pub fn erc1155_batch(
    contract: Address,
    from: Address,
    to: Address,
    ids: &[u64],
    values: &[u64],
    block: u64,
    index: u64,
) -> Log {
    let uints = |xs: &[u64]| Token::Array(xs.iter().map(|x| Token::Uint(U256::from(*x))).collect());
    let topic = TokenStandard::Erc1155
        .profile()
        .batch_topic
        .unwrap_or_default();

    raw_log(
        contract,
        erc1155_topics(topic, from, to),
        encode(&[uints(ids), uints(values)]),
        block,
        index,
    )
}

#[derive(Debug, thiserror::Error)]
#[error("mock transport: {0}")]
pub struct MockError(pub &'static str);

/// In-memory provider that evaluates filters locally and counts probes.
#[derive(Default)]
pub struct MockProvider {
    logs: Vec<Log>,
    supported: HashSet<Address>,
    failing_probes: HashSet<Address>,
    fail_logs: bool,
    log_queries: AtomicUsize,
    logs_in_flight: AtomicUsize,
    peak_logs: AtomicUsize,
    probes: Mutex<HashMap<Address, usize>>,
    in_flight: AtomicUsize,
    peak: AtomicUsize,
}

impl MockProvider {
    pub fn new(logs: Vec<Log>) -> Self {
        Self {
            logs,
            ..Default::default()
        }
    }

    pub fn supporting(mut self, contracts: &[Address]) -> Self {
        self.supported.extend(contracts.iter().copied());
        self
    }

    pub fn failing_probe(mut self, contract: Address) -> Self {
        self.failing_probes.insert(contract);
        self
    }

    pub fn failing_logs(mut self) -> Self {
        self.fail_logs = true;
        self
    }

    pub fn log_queries(&self) -> usize {
        self.log_queries.load(Ordering::SeqCst)
    }

    pub fn peak_log_queries(&self) -> usize {
        self.peak_logs.load(Ordering::SeqCst)
    }

    pub fn probes_of(&self, contract: &Address) -> usize {
        self.probes
            .lock()
            .unwrap()
            .get(contract)
            .copied()
            .unwrap_or_default()
    }

    pub fn total_probes(&self) -> usize {
        self.probes.lock().unwrap().values().sum()
    }

    pub fn peak_probes(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ChainProvider for MockProvider {
    type Error = MockError;

    async fn filter_logs(&self, filter: &LogFilter) -> Result<Vec<Log>, Self::Error> {
        self.log_queries.fetch_add(1, Ordering::SeqCst);

        let now = self.logs_in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_logs.fetch_max(now, Ordering::SeqCst);
        tokio::task::yield_now().await;
        self.logs_in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.fail_logs {
            return Err(MockError("eth_getLogs unavailable"));
        }

        Ok(self
            .logs
            .iter()
            .filter(|log| filter.matches(log))
            .cloned()
            .collect())
    }

    async fn supports_interface(
        &self,
        contract: Address,
        _interface_id: [u8; 4],
    ) -> Result<bool, Self::Error> {
        *self.probes.lock().unwrap().entry(contract).or_default() += 1;

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
        tokio::task::yield_now().await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.failing_probes.contains(&contract) {
            return Err(MockError("execution reverted"));
        }

        Ok(self.supported.contains(&contract))
    }
}
