//! `unfreeze` command

use super::args::UnfreezeArgs;
use crate::config::Config;
use crate::core::cluster::HttpClusterClient;
use crate::core::unfreeze::{UnfreezeOperator, UnfreezeReport};
use crate::utils::error::Result;
use tracing::warn;

pub fn prepare(args: &UnfreezeArgs, mut config: Config) -> Result<Config> {
    args.apply(&mut config);
    config.validate()?;
    Ok(config)
}

pub async fn execute(args: &UnfreezeArgs, config: Config) -> Result<UnfreezeReport> {
    let config = prepare(args, config)?;

    let (client, info) = HttpClusterClient::connect(&config.cluster).await?;
    if let Some(warning) = info.version_warning(&config.unfreeze.expected_version) {
        warn!("{}", warning);
    }

    UnfreezeOperator::new(&client, config.unfreeze.pattern.as_str())
        .scan_and_unfreeze()
        .await
}
