//! HTML snapshot renderer
//!
//! Writes the board as a standalone page using the same markup the grading
//! server's listing pages use, so the snapshot can be opened in a browser.

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use serde::Serialize;
use tera::{Context, Tera};
use tracing::debug;

use super::{Renderer, Summary, strip_tags};
use crate::board::{Board, ProgressCell, ReportLink, Row, format_score};

const TEMPLATE: &str = "board.html";

/// Rewrites an HTML file whenever the board changes
pub struct HtmlSnapshotRenderer {
    path: PathBuf,
    tera: Tera,
    last_revision: Option<u64>,
}

impl HtmlSnapshotRenderer {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE, include_str!("../../templates/board.html"))
            .context("Failed to load board template")?;
        Ok(Self {
            path: path.into(),
            tera,
            last_revision: None,
        })
    }

    fn page(&self, board: &Board, summary: &Summary) -> Result<String> {
        let rows: Vec<RowView> = board.rows().iter().map(RowView::from).collect();

        let mut ctx = Context::new();
        ctx.insert("rows", &rows);
        ctx.insert("resolved", &summary.resolved());
        ctx.insert("tracked", &summary.tracked);
        if let Some(progress) = board.overall_progress(summary.tracked, summary.remaining) {
            ctx.insert("progress", &progress);
        }

        Ok(self.tera.render(TEMPLATE, &ctx)?)
    }
}

impl Renderer for HtmlSnapshotRenderer {
    fn render(&mut self, board: &Board, summary: &Summary) -> Result<()> {
        let revision = board.revision();
        if self.last_revision == Some(revision) {
            return Ok(());
        }

        let html = self.page(board, summary)?;
        std::fs::write(&self.path, html)
            .with_context(|| format!("Failed to write snapshot to {}", self.path.display()))?;
        self.last_revision = Some(revision);
        debug!("Wrote board snapshot to {}", self.path.display());
        Ok(())
    }
}

#[derive(Serialize)]
struct BadgeView<'a> {
    tone: &'static str,
    icon: &'static str,
    text: &'a str,
}

/// One table row as the template sees it; every field is escaped on output
#[derive(Serialize)]
struct RowView<'a> {
    id: &'a str,
    classes: String,
    status: Option<BadgeView<'a>>,
    bar: Option<u8>,
    score: Option<String>,
    score_color: &'a str,
    actor: Option<&'static str>,
    message: String,
    report: Option<&'a ReportLink>,
}

impl<'a> From<&'a Row> for RowView<'a> {
    fn from(row: &'a Row) -> Self {
        let (bar, score, score_color) = match row.progress() {
            ProgressCell::Empty => (None, None, "default"),
            ProgressCell::Bar(value) => (Some(*value), None, "default"),
            ProgressCell::Score { value, color } => (
                None,
                Some(format_score(*value)),
                color.as_deref().unwrap_or("default"),
            ),
        };

        Self {
            id: row.id().as_str(),
            classes: row.classes().join(" "),
            status: row.status().map(|badge| BadgeView {
                tone: badge.tone.css(),
                icon: badge.icon.css(),
                text: &badge.text,
            }),
            bar,
            score,
            score_color,
            actor: row.message().and_then(|m| m.actor).map(|actor| actor.name()),
            message: row
                .message()
                .map(|m| strip_tags(&m.text))
                .unwrap_or_default(),
            report: row.report(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grader_core::domain::status::{EvaluationOutcome, SubmissionStatus};
    use grader_core::domain::submission::SubmissionId;

    use crate::board::{Badge, Icon, Presenter, Tone};

    fn snapshot_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("grader-{}-{}.html", name, std::process::id()))
    }

    fn summary() -> Summary {
        Summary {
            tracked: 1,
            remaining: 1,
        }
    }

    #[test]
    fn test_row_markup_matches_listing_page() {
        let mut board = Board::from_ids([SubmissionId::parse("a\"b:1").unwrap()], "pending");
        board
            .row_mut(0)
            .unwrap()
            .replace_status(Badge::new(Tone::Success, Icon::Ok, "evaluated"));

        let renderer = HtmlSnapshotRenderer::new(snapshot_path("markup")).unwrap();
        let html = renderer.page(&board, &summary()).unwrap();
        assert!(html.contains("<tr class=\"pending\" data-id=\"a&quot;b:1\">"));
        assert!(html.contains("<td class=\"status\"><span class=\"label label-success\">"));
        assert!(html.contains("<td class=\"prog-bar\"></td>"));
    }

    #[test]
    fn test_server_values_are_escaped() {
        let mut board = Board::from_ids([SubmissionId::parse("x").unwrap()], "pending");
        let presenter = Presenter::new("/r/{}", "View report");
        presenter.apply(
            board.row_mut(0).unwrap(),
            "x\" onmouseover=\"alert(1)",
            &SubmissionStatus::Checked {
                outcome: EvaluationOutcome::Ok,
                message: "Tom &amp; <i>Jerry</i>".to_string(),
                score: Some(95.0),
                status_color: Some("success".to_string()),
            },
        );

        let renderer = HtmlSnapshotRenderer::new(snapshot_path("escape")).unwrap();
        let html = renderer.page(&board, &summary()).unwrap();
        assert!(!html.contains("\" onmouseover="));
        assert!(html.contains("x&quot; onmouseover=&quot;alert(1)"));
        assert!(html.contains("<td class=\"message\">Tom &amp; Jerry</td>"));
        assert!(html.contains("<span class=\"text-success\">95%</span>"));
    }

    #[test]
    fn test_snapshot_written_only_on_change() {
        let path = snapshot_path("snapshot");
        let mut board = Board::from_ids([SubmissionId::parse("a").unwrap()], "pending");
        let mut renderer = HtmlSnapshotRenderer::new(&path).unwrap();

        renderer.render(&board, &summary()).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().contains("data-id=\"a\""));

        std::fs::remove_file(&path).unwrap();
        renderer.render(&board, &summary()).unwrap();
        assert!(!path.exists());

        board.row_mut(0).unwrap().set_bar(30);
        renderer.render(&board, &summary()).unwrap();
        let html = std::fs::read_to_string(&path).unwrap();
        assert!(html.contains("aria-valuenow=\"30\""));
        assert!(html.contains("0 / 1 (30%)"));
        std::fs::remove_file(&path).unwrap();
    }
}
