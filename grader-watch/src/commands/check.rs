//! Check command
//!
//! One status request, printed as is. Nothing is tracked and nothing is
//! polled again.

use anyhow::{Context, Result};
use colored::Colorize;
use grader_core::domain::status::SubmissionStatus;
use grader_core::dto::status::StatusRecord;

use super::parse_ids;
use crate::board::format_score;
use crate::config::Config;
use crate::lang;

pub async fn handle_check(config: &Config, ids: Vec<String>) -> Result<()> {
    let ids = parse_ids(&ids)?;
    let client = config.client()?;

    let records = client
        .check_status(&config.status_path, &ids)
        .await
        .context("Failed to check submission status")?;

    if records.is_empty() {
        println!("{}", "Server returned no status records.".yellow());
        return Ok(());
    }

    println!("{}", format!("Status of {} submission(s):", records.len()).bold());
    println!();
    for record in &records {
        print_record(config, record);
    }

    Ok(())
}

fn print_record(config: &Config, record: &StatusRecord) {
    println!("  {} {}", "▸".cyan(), record.id.dimmed());
    match SubmissionStatus::try_from(record) {
        Ok(status) => {
            println!("    Status:   {}", describe(&status));
            if let SubmissionStatus::Checked { .. } = status {
                println!("    Report:   {}", config.report_href(&record.id).dimmed());
            }
        }
        Err(e) => println!("    Status:   {}", e.to_string().red()),
    }
    println!();
}

fn describe(status: &SubmissionStatus) -> colored::ColoredString {
    match status {
        SubmissionStatus::NotFound => lang::STATUS_NOT_FOUND.red(),
        SubmissionStatus::Queued { position } => {
            format!("{} - {}", lang::STATUS_WAITING, lang::waiting_message(*position)).yellow()
        }
        SubmissionStatus::Running {
            job_state,
            progress,
        } => format!(
            "{} ({}%) - Worker {}",
            job_state.as_str(),
            progress,
            lang::job_state_message(*job_state)
        )
        .cyan(),
        SubmissionStatus::Checked {
            outcome,
            message,
            score,
            ..
        } => {
            let verdict = if outcome.is_accepted() {
                lang::RESULT_EVALUATED.green()
            } else {
                lang::RESULT_REJECTED.red()
            };
            let score = score.map(|s| format!(" {}%", format_score(s))).unwrap_or_default();
            format!("{}{} - {}", verdict, score, crate::render::strip_tags(message)).normal()
        }
    }
}
