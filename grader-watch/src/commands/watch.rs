//! Watch command
//!
//! Builds the board from a listing page or from explicit ids and runs the
//! status poller over it.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;
use grader_client::GraderClient;
use tracing::info;

use super::parse_ids;
use crate::board::{Board, Row, scan_html};
use crate::config::Config;
use crate::render::{HtmlSnapshotRenderer, Renderer, TerminalRenderer};
use crate::repository::HttpStatusRepository;
use crate::scheduler::{PollOutcome, StatusPoller};

pub async fn handle_watch(
    config: &Config,
    page: Option<String>,
    ids: Vec<String>,
    html_out: Option<PathBuf>,
) -> Result<()> {
    let client = config.client()?;
    let board = build_board(&client, config, page.as_deref(), &ids).await?;

    if board.is_empty() {
        println!("{}", "No pending submissions found.".yellow());
        return Ok(());
    }

    let mut renderers: Vec<Box<dyn Renderer>> = vec![Box::new(TerminalRenderer::stdout())];
    if let Some(path) = html_out {
        info!("Writing board snapshots to {}", path.display());
        renderers.push(Box::new(HtmlSnapshotRenderer::new(path)?));
    }

    let repository = HttpStatusRepository::new(client, config.status_path.clone());
    let mut poller = StatusPoller::new(config.clone(), repository, board);
    let outcome = poller.run(&mut renderers).await;

    let summary = poller.summary();
    match outcome {
        PollOutcome::Drained => println!(
            "{}",
            format!("All {} submission(s) resolved.", summary.tracked).green()
        ),
        PollOutcome::Aborted => println!(
            "{}",
            "Server reported an unrecognized status; stopped watching.".red()
        ),
        PollOutcome::TransportFailed | PollOutcome::EmptyResponse => {
            println!(
                "{}",
                format!(
                    "Stopped watching with {} submission(s) unresolved:",
                    summary.remaining
                )
                .yellow()
            );
            for id in poller.tracking().ids() {
                let last = poller
                    .board()
                    .rows()
                    .iter()
                    .rev()
                    .find(|row| row.id().key() == id.key())
                    .and_then(|row| row.status())
                    .map_or("unknown", |badge| badge.text.as_str());
                println!("  {} {} ({})", "▸".cyan(), id, last);
            }
        }
        PollOutcome::Continue => {}
    }

    Ok(())
}

async fn build_board(
    client: &GraderClient,
    config: &Config,
    page: Option<&str>,
    ids: &[String],
) -> Result<Board> {
    let mut rows: Vec<Row> = Vec::new();

    if let Some(page) = page {
        let html = if Path::new(page).is_file() {
            std::fs::read_to_string(page).with_context(|| format!("Failed to read {}", page))?
        } else {
            client
                .fetch_page(page)
                .await
                .with_context(|| format!("Failed to fetch listing page {}", page))?
        };
        let scanned = scan_html(&html, &config.pending_class, &config.id_attr)?;
        info!("Found {} pending row(s) on {}", scanned.len(), page);
        rows.extend(scanned.rows().iter().cloned());
    }

    let explicit = Board::from_ids(parse_ids(ids)?, &config.pending_class);
    rows.extend(explicit.rows().iter().cloned());

    Ok(Board::new(rows))
}
