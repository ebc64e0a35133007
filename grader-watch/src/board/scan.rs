//! Listing page scanner
//!
//! Finds the rows a listing page marks as pending and turns them into board
//! rows. Only the pending marker and the id attribute are read; everything
//! else on the page is ignored.

use anyhow::{Result, anyhow};
use grader_core::domain::submission::SubmissionId;
use scraper::{Html, Selector};
use tracing::debug;

use super::{Board, Row};

/// Scans `html` for elements carrying the `marker` class
///
/// Elements without the id attribute, or with an id that does not parse,
/// are skipped.
pub fn scan_html(html: &str, marker: &str, id_attr: &str) -> Result<Board> {
    let doc = Html::parse_document(html);
    let selector = Selector::parse(&format!(".{}", marker))
        .map_err(|e| anyhow!("Invalid pending class {:?}: {}", marker, e))?;

    let mut rows = Vec::new();
    for element in doc.select(&selector) {
        let Some(raw) = element.value().attr(id_attr) else {
            continue;
        };
        match SubmissionId::parse(raw) {
            Ok(id) => {
                let classes = element.value().classes().map(str::to_string).collect();
                rows.push(Row::new(id, classes));
            }
            Err(e) => debug!("Skipping pending row with bad id {:?}: {}", raw, e),
        }
    }

    Ok(Board::new(rows))
}
