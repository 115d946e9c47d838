//! Command-line front end

pub mod args;
pub mod reindex;
pub mod unfreeze;

pub use args::{Cli, Command, ConnectionArgs, ReindexArgs, UnfreezeArgs};

use crate::config::Config;
use crate::core::batch::{BatchSummary, OutcomeStatus};
use crate::utils::error::Result;
use serde::Serialize;
use std::io::{self, Write};

/// Run the selected command and print its summary on stdout
pub async fn run(cli: &Cli, config: Config) -> Result<()> {
    match &cli.command {
        Command::Reindex(args) => {
            let summary = reindex::execute(args, config).await?;
            write_summary(
                &mut io::stdout().lock(),
                cli.json,
                &summary,
                &summary,
                &summary.summary_line(),
            )
        }
        Command::Unfreeze(args) => {
            let report = unfreeze::execute(args, config).await?;
            write_summary(
                &mut io::stdout().lock(),
                cli.json,
                &report,
                &report.summary,
                &report.summary_line(),
            )
        }
    }
}

/// Write `value` as pretty JSON, or `line` followed by one line per failed item
pub fn write_summary<W, T>(
    out: &mut W,
    json: bool,
    value: &T,
    summary: &BatchSummary,
    line: &str,
) -> Result<()>
where
    W: Write,
    T: Serialize,
{
    if json {
        serde_json::to_writer_pretty(&mut *out, value)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", line)?;
        for record in summary.with_status(OutcomeStatus::Failed) {
            writeln!(out, "  failed {}: {}", record.item(), record.detail())?;
        }
    }
    out.flush()?;
    Ok(())
}
