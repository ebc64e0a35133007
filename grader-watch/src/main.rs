//! Grader Watch
//!
//! Command-line watcher for the grading server's submission queue.
//!
//! Architecture:
//! - Configuration: command-line flags with environment fallbacks
//! - Board: rows scanned from a listing page or built from ids
//! - Repository: HTTP access to the status endpoint
//! - Scheduler: the sequential status poll loop
//! - Render: terminal output and HTML snapshots of the board

mod board;
mod commands;
mod config;
mod lang;
mod render;
mod repository;
mod scheduler;

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "grader")]
#[command(about = "Watch submissions on a grading server", long_about = None)]
struct Cli {
    /// Grading server URL
    #[arg(long, env = "GRADER_SERVER_URL", default_value = "http://localhost:8000")]
    server_url: String,

    /// Status-check endpoint
    #[arg(long, default_value = "/task/submission/status/")]
    status_path: String,

    /// Report link template, `{}` is replaced by the submission id
    #[arg(long)]
    report_url: Option<String>,

    /// Link to staff re-evaluation reports
    #[arg(long)]
    staff: bool,

    /// Delay between a response and the next request, in milliseconds
    #[arg(long, default_value_t = 300)]
    update_rate_ms: u64,

    /// Class marking pending rows on a listing page
    #[arg(long, default_value = "pending")]
    pending_class: String,

    /// Attribute carrying the submission id on a listing page
    #[arg(long, default_value = "data-id")]
    id_attr: String,

    /// Stop when the server answers with no records
    #[arg(long)]
    stop_on_empty: bool,

    /// Session cookie for pages behind a login
    #[arg(long, env = "GRADER_SESSION", hide_env_values = true)]
    session_cookie: Option<String>,

    /// CSRF token sent with the session
    #[arg(long, env = "GRADER_CSRF_TOKEN", hide_env_values = true)]
    csrf_token: Option<String>,

    /// Verbose diagnostics
    #[arg(long)]
    dev: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn config(&self) -> Config {
        let mut config = Config::new(self.server_url.clone());
        if self.staff {
            config = config.staff();
        }
        if let Some(report_url) = &self.report_url {
            config.report_url = report_url.clone();
        }
        config.status_path = self.status_path.clone();
        config.update_rate = Duration::from_millis(self.update_rate_ms);
        config.pending_class = self.pending_class.clone();
        config.id_attr = self.id_attr.clone();
        config.stop_on_empty = self.stop_on_empty;
        config.session_cookie = self.session_cookie.clone();
        config.csrf_token = self.csrf_token.clone();
        config.dev = self.dev;
        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.dev {
        "grader_watch=debug,grader_client=debug"
    } else {
        "grader_watch=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = cli.config();
    config.validate()?;

    handle_command(cli.command, &config).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_builds_config() {
        let cli = Cli::parse_from([
            "grader",
            "--server-url",
            "https://grader.example",
            "--staff",
            "--update-rate-ms",
            "500",
            "check",
            "--id",
            "a:1",
        ]);
        let config = cli.config();

        assert_eq!(config.update_rate, Duration::from_millis(500));
        assert_eq!(
            config.report_href("a"),
            "https://grader.example/staff/submission/a/report/"
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_explicit_report_url_wins() {
        let cli = Cli::parse_from([
            "grader",
            "--report-url",
            "/r/{}",
            "watch",
            "--id",
            "a",
        ]);
        assert_eq!(cli.config().report_href("a"), "http://localhost:8000/r/a");
    }
}
