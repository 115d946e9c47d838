//! Command-line arguments

use crate::config::{ClusterConfig, Config, ExistingDestination};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    ", built ",
    env!("BUILD_TIME"),
    ")"
);

/// Batch maintenance for Elasticsearch-compatible clusters
#[derive(Debug, Parser)]
#[command(name = "index-maint", version, long_version = LONG_VERSION, about)]
pub struct Cli {
    /// YAML configuration file
    #[arg(long, global = true, env = "INDEX_MAINT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print the final summary as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Reindex a contiguous range of indices into `<name>-reindexed` copies
    Reindex(ReindexArgs),
    /// Find every frozen index in the cluster and unfreeze it
    Unfreeze(UnfreezeArgs),
}

/// Cluster connection flags shared by both commands
#[derive(Debug, Clone, Default, Args)]
pub struct ConnectionArgs {
    /// Cluster address (e.g. localhost:9200 or https://es:9200)
    #[arg(long, env = "ES_HOST")]
    pub host: Option<String>,

    /// Basic auth username
    #[arg(long, env = "ES_USERNAME")]
    pub username: Option<String>,

    /// Basic auth password
    #[arg(long, env = "ES_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Verify TLS certificates (`--verify-certs` or `--verify-certs=false`)
    #[arg(
        long,
        env = "ES_VERIFY_CERTS",
        num_args = 0..=1,
        default_missing_value = "true",
        require_equals = true
    )]
    pub verify_certs: Option<bool>,
}

impl ConnectionArgs {
    /// Overlay the flags that were given onto `cluster`
    pub fn apply(&self, cluster: &mut ClusterConfig) {
        if let Some(host) = &self.host {
            cluster.host = host.clone();
        }
        if let Some(username) = &self.username {
            cluster.username = Some(username.clone());
        }
        if let Some(password) = &self.password {
            cluster.password = Some(password.clone());
        }
        if let Some(verify) = self.verify_certs {
            cluster.verify_certs = verify;
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct ReindexArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// First index of the range (e.g. fg-009783)
    #[arg(long)]
    pub start_index: String,

    /// Last index of the range, inclusive (e.g. fg-009789)
    #[arg(long)]
    pub end_index: String,

    /// Alias to assign to reindexed indices
    #[arg(long)]
    pub alias: Option<String>,

    /// What to do when a destination already exists
    #[arg(long, value_enum)]
    pub existing_destination: Option<ExistingDestination>,
}

impl ReindexArgs {
    pub fn apply(&self, config: &mut Config) {
        self.connection.apply(&mut config.cluster);
        if let Some(alias) = &self.alias {
            config.migration.alias = Some(alias.clone());
        }
        if let Some(policy) = self.existing_destination {
            config.migration.existing_destination = policy;
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct UnfreezeArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Index pattern to scan
    #[arg(long)]
    pub pattern: Option<String>,

    /// Cluster version family (major.minor) to expect
    #[arg(long)]
    pub expected_version: Option<String>,
}

impl UnfreezeArgs {
    pub fn apply(&self, config: &mut Config) {
        self.connection.apply(&mut config.cluster);
        if let Some(pattern) = &self.pattern {
            config.unfreeze.pattern = pattern.clone();
        }
        if let Some(expected) = &self.expected_version {
            config.unfreeze.expected_version = expected.clone();
        }
    }
}
