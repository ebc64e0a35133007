//! Commands module
//!
//! Defines the CLI subcommands and routes them to their handlers.

mod check;
mod watch;

use anyhow::Result;
use clap::Subcommand;
use grader_core::domain::submission::SubmissionId;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Follow pending submissions until every one is evaluated
    Watch {
        /// Listing page (path on the server, URL, or local file) to scan for pending rows
        #[arg(long)]
        page: Option<String>,

        /// Submission id to watch; repeatable
        #[arg(long = "id")]
        ids: Vec<String>,

        /// Also write an HTML snapshot of the board to this file
        #[arg(long)]
        html_out: Option<std::path::PathBuf>,
    },
    /// Ask for the current status once and print it
    Check {
        /// Submission id to check; repeatable
        #[arg(long = "id", required = true)]
        ids: Vec<String>,
    },
}

/// Handle a CLI command
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Watch {
            page,
            ids,
            html_out,
        } => watch::handle_watch(config, page, ids, html_out).await,
        Commands::Check { ids } => check::handle_check(config, ids).await,
    }
}

/// Parses ids given on the command line
fn parse_ids(ids: &[String]) -> Result<Vec<SubmissionId>> {
    ids.iter()
        .map(|id| {
            id.parse::<SubmissionId>()
                .map_err(|e| anyhow::anyhow!("Invalid submission id {:?}: {}", id, e))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ids() {
        let ids = parse_ids(&["a:1".to_string(), "b".to_string()]).unwrap();
        assert_eq!(ids[0].key(), "a");
        assert!(parse_ids(&["".to_string()]).is_err());
    }
}
