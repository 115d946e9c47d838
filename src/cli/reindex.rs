//! `reindex` command

use super::args::ReindexArgs;
use crate::config::Config;
use crate::core::batch::BatchSummary;
use crate::core::cluster::{HttpClusterClient, IndexAdmin};
use crate::core::index::IndexRange;
use crate::core::migration::MigrationOperator;
use crate::utils::error::Result;
use tracing::info;

/// Validate the range and merge flags into the configuration
///
/// Runs before any connection is made, so bad input never reaches the cluster.
pub fn prepare(args: &ReindexArgs, mut config: Config) -> Result<(IndexRange, Config)> {
    let range = IndexRange::parse(&args.start_index, &args.end_index)?;
    args.apply(&mut config);
    config.validate()?;
    Ok((range, config))
}

/// Migrate `range` against an already connected cluster
pub async fn run_with(cluster: &dyn IndexAdmin, range: &IndexRange, config: &Config) -> BatchSummary {
    MigrationOperator::new(cluster, config.migration.clone())
        .run(range)
        .await
}

pub async fn execute(args: &ReindexArgs, config: Config) -> Result<BatchSummary> {
    let (range, config) = prepare(args, config)?;
    info!(
        "Reindexing {} indices ({} .. {}), existing destinations: {}",
        range.len(),
        range.start(),
        range.end(),
        config.migration.existing_destination
    );

    let (client, _info) = HttpClusterClient::connect(&config.cluster).await?;
    Ok(run_with(&client, &range, &config).await)
}
