use crate::discovery::verification::DEFAULT_POOL_SIZE;
use std::{env, str::FromStr};

const FROM_BLOCK_VAR: &str = "NFT_SCAN_FROM_BLOCK";
const PROBE_WORKERS_VAR: &str = "NFT_SCAN_PROBE_WORKERS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryConfig {
    /// First block scanned for transfer logs.
    pub from_block: u64,
    /// Upper bound on concurrent interface probes.
    pub max_concurrent_probes: usize,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            from_block: 0,
            max_concurrent_probes: DEFAULT_POOL_SIZE,
        }
    }
}

fn parse_or<T: FromStr>(var: &str, value: Option<String>, default: T) -> T {
    match value {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            log::warn!("Ignoring invalid `{var}` value `{raw}`");
            default
        }),
        None => default,
    }
}

impl DiscoveryConfig {
    /// Reads overrides from the environment (and `.env`).
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        Self::from_vars(
            env::var(FROM_BLOCK_VAR).ok(),
            env::var(PROBE_WORKERS_VAR).ok(),
        )
    }

    fn from_vars(from_block: Option<String>, probe_workers: Option<String>) -> Self {
        let default = Self::default();

        Self {
            from_block: parse_or(FROM_BLOCK_VAR, from_block, default.from_block),
            max_concurrent_probes: parse_or(
                PROBE_WORKERS_VAR,
                probe_workers,
                default.max_concurrent_probes,
            ),
        }
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: DiscoveryConfig = DiscoveryConfig::from_env();
}
