//! Submission board
//!
//! The board is the watcher's view of a listing page: one row per
//! submission, each with status, progress, message and report cells. The
//! poller writes into rows; renderers project the board onto a terminal or
//! an HTML snapshot.

mod present;
mod row;
mod scan;

pub use present::Presenter;
pub use row::{Actor, Badge, Icon, Message, ProgressCell, ReportLink, Row, Tone, format_score};
pub use scan::scan_html;

use grader_core::domain::submission::SubmissionId;

/// Ordered collection of submission rows
#[derive(Debug, Clone, Default)]
pub struct Board {
    rows: Vec<Row>,
}

impl Board {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Builds pending rows for ids given on the command line
    pub fn from_ids(ids: impl IntoIterator<Item = SubmissionId>, marker: &str) -> Self {
        let rows = ids
            .into_iter()
            .map(|id| Row::new(id, vec![marker.to_string()]))
            .collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row_mut(&mut self, index: usize) -> Option<&mut Row> {
        self.rows.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sum of all revisions; changes whenever any cell changes
    pub fn revision(&self) -> u64 {
        self.rows.iter().map(Row::revision).sum()
    }

    /// Aggregate progress of a batch of `total` tracked submissions
    ///
    /// Resolved submissions count fully, running ones by their bar value.
    pub fn overall_progress(&self, total: usize, remaining: usize) -> Option<u8> {
        if total == 0 {
            return None;
        }
        let total_f = total as f64;
        let resolved = 1.0 - (remaining.min(total) as f64 / total_f);
        let running: f64 = self
            .rows
            .iter()
            .filter_map(|row| match row.progress() {
                ProgressCell::Bar(value) => Some(f64::from(*value)),
                _ => None,
            })
            .sum();

        let progress = (resolved * 100.0 + running / total_f).round();
        Some(progress.clamp(0.0, 100.0) as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(ids: &[&str]) -> Board {
        Board::from_ids(
            ids.iter().map(|id| SubmissionId::parse(id).unwrap()),
            "pending",
        )
    }

    #[test]
    fn test_from_ids_marks_rows_pending() {
        let board = board(&["a:1", "b:2"]);
        assert_eq!(board.len(), 2);
        assert!(board.rows().iter().all(|row| row.is_pending("pending")));
        assert_eq!(board.rows()[1].id().key(), "b");
    }

    #[test]
    fn test_overall_progress() {
        let mut board = board(&["a", "b", "c", "d"]);
        assert_eq!(board.overall_progress(0, 0), None);
        assert_eq!(board.overall_progress(4, 4), Some(0));

        // one resolved, one running at 50%
        board.row_mut(1).unwrap().set_bar(50);
        assert_eq!(board.overall_progress(4, 3), Some(38));

        assert_eq!(board.overall_progress(4, 0), Some(100));
    }

    #[test]
    fn test_revision_tracks_changes() {
        let mut board = board(&["a"]);
        assert_eq!(board.revision(), 0);
        board.row_mut(0).unwrap().set_bar(10);
        assert_eq!(board.revision(), 1);
    }
}
