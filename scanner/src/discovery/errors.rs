use thiserror::Error;
use web3::types::Address;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Log from `{contract:#x}` has an unexpected topic layout ({count} topics)")]
    UnexpectedTopics { contract: Address, count: usize },
    #[error("Missing field `{0}`")]
    MissingField(&'static str),
    #[error("Invalid event data: {0}")]
    InvalidData(String),
    #[error("Batch transfer carries {ids} ids but {amounts} amounts")]
    BatchLengthMismatch { ids: usize, amounts: usize },
}

#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("Log query failed: {0}")]
    Query(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl DiscoveryError {
    pub(crate) fn query<E>(e: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        DiscoveryError::Query(Box::new(e))
    }
}
