use web3::types::{Address, BlockNumber, Filter, FilterBuilder, Log, H256, U64};

/// A log query: optional emitter addresses, up to four topic positions
/// (each `None` is a wildcard, each `Some` an any-of set) and a start block.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LogFilter {
    pub addresses: Option<Vec<Address>>,
    pub topics: [Option<Vec<H256>>; 4],
    pub from_block: u64,
}

impl LogFilter {
    pub fn new(from_block: u64) -> Self {
        Self {
            from_block,
            ..Default::default()
        }
    }

    pub fn address(mut self, addresses: Vec<Address>) -> Self {
        self.addresses = Some(addresses);
        self
    }

    /// Panics if `position` is not a valid topic index (0..=3).
    pub fn topic(mut self, position: usize, values: Vec<H256>) -> Self {
        self.topics[position] = Some(values);
        self
    }

    /// Client-side evaluation of the filter, mirroring node semantics.
    pub fn matches(&self, log: &Log) -> bool {
        if let Some(addresses) = &self.addresses {
            if !addresses.contains(&log.address) {
                return false;
            }
        }

        if let Some(block) = log.block_number {
            if block.as_u64() < self.from_block {
                return false;
            }
        }

        self.topics
            .iter()
            .enumerate()
            .all(|(idx, wanted)| match wanted {
                None => true,
                Some(set) => log.topics.get(idx).map_or(false, |t| set.contains(t)),
            })
    }
}

impl From<&LogFilter> for Filter {
    fn from(filter: &LogFilter) -> Self {
        let [t0, t1, t2, t3] = filter.topics.clone();

        let mut builder = FilterBuilder::default()
            .from_block(BlockNumber::Number(U64::from(filter.from_block)))
            .topics(t0, t1, t2, t3);

        if let Some(addresses) = &filter.addresses {
            builder = builder.address(addresses.clone());
        }

        builder.build()
    }
}

/// Left-pads an address into a 32 byte topic word.
pub fn address_topic(address: Address) -> H256 {
    H256::from(address)
}

/// Inverse of [`address_topic`].
pub fn topic_address(topic: &H256) -> Address {
    Address::from(*topic)
}
