pub use web3::types::{Address, Log, H256, U256};

pub mod collection;
pub mod event;
pub use collection::*;
pub use event::*;
