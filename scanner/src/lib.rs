#![deny(clippy::dbg_macro)]

pub mod config;
pub mod discovery;
pub mod owners;
pub mod scanner;
pub mod signature;
pub mod standards;
pub mod types;
pub mod watch;

#[cfg(test)]
mod test_utils;

pub use config::{DiscoveryConfig, CONFIG};
pub use discovery::{errors::DiscoveryError, wallet_nfts};
pub use scanner::NftScanner;
pub use signature::{verify_personal_sign, verify_typed_data, SignatureError};
pub use standards::TokenStandard;

#[macro_export]
macro_rules! address {
    ($addr:expr) => {{
        use std::str::FromStr;
        $crate::types::Address::from_str($addr).expect(&format!("Invalid address {}", $addr))
    }};
}
