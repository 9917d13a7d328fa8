pub mod aggregator;
pub mod assembler;
pub mod errors;
pub mod replay;
pub mod strategy;
pub mod verification;

use crate::{
    config::DiscoveryConfig,
    standards::TokenStandard,
    types::{Address, NftCollection},
};
use errors::DiscoveryError;
use providers::ChainProvider;
use std::fmt;
use strategy::{LedgerStrategy, MultiBalance, SingleOwner};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscoveryStage {
    Idle,
    Aggregating,
    Replaying,
    Verifying,
    Assembling,
    Done,
}

impl fmt::Display for DiscoveryStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DiscoveryStage::Idle => "idle",
            DiscoveryStage::Aggregating => "aggregating",
            DiscoveryStage::Replaying => "replaying",
            DiscoveryStage::Verifying => "verifying",
            DiscoveryStage::Assembling => "assembling",
            DiscoveryStage::Done => "done",
        };

        f.write_str(name)
    }
}

fn enter(owner: Address, stage: DiscoveryStage) {
    log::debug!("wallet {owner:#x}: {stage}");
}

/// Reconstructs the tokens of `standard` that `owner` currently holds.
pub async fn wallet_nfts<P>(
    provider: &P,
    standard: TokenStandard,
    owner: Address,
    config: &DiscoveryConfig,
) -> Result<Vec<NftCollection>, DiscoveryError>
where
    P: ChainProvider + Sync + ?Sized,
{
    match standard {
        TokenStandard::Erc721 => discover::<SingleOwner, P>(provider, owner, config).await,
        TokenStandard::Erc1155 => discover::<MultiBalance, P>(provider, owner, config).await,
    }
}

pub async fn discover<S, P>(
    provider: &P,
    owner: Address,
    config: &DiscoveryConfig,
) -> Result<Vec<NftCollection>, DiscoveryError>
where
    S: LedgerStrategy,
    P: ChainProvider + Sync + ?Sized,
{
    let profile = S::STANDARD.profile();
    enter(owner, DiscoveryStage::Idle);

    enter(owner, DiscoveryStage::Aggregating);
    let logs =
        aggregator::fetch_transfer_logs(provider, profile, owner, config.from_block).await?;
    if logs.is_empty() {
        enter(owner, DiscoveryStage::Done);
        return Ok(vec![]);
    }

    enter(owner, DiscoveryStage::Replaying);
    let ledger = replay::replay::<S>(&logs, owner)?;
    if ledger.is_empty() {
        enter(owner, DiscoveryStage::Done);
        return Ok(vec![]);
    }

    enter(owner, DiscoveryStage::Verifying);
    let verified = verification::verify_contracts(
        provider,
        ledger.keys().copied(),
        profile.interface_id,
        config.max_concurrent_probes,
    )
    .await;

    enter(owner, DiscoveryStage::Assembling);
    let collections = assembler::assemble::<S>(ledger, &verified);

    log::info!(
        "wallet {owner:#x}: {} {:?} collections from {} logs",
        collections.len(),
        S::STANDARD,
        logs.len()
    );
    enter(owner, DiscoveryStage::Done);

    Ok(collections)
}
