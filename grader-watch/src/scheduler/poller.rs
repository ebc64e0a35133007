//! Status poller
//!
//! Polls the status endpoint for every tracked submission and renders the
//! answers until no tracked submission is left.
//! Requests are strictly sequential: the next one is only issued after the
//! previous response has been processed and the update delay has elapsed.

use std::collections::HashMap;

use grader_core::domain::status::{SubmissionStatus, UnrecognizedStatus};
use grader_core::domain::submission::SubmissionId;
use grader_core::dto::status::StatusRecord;
use tokio::time;
use tracing::{debug, info, warn};

use super::tracking::TrackingSet;
use crate::board::{Board, Presenter};
use crate::config::Config;
use crate::render::{Renderer, Summary};
use crate::repository::StatusRepository;

const DEFAULT_EXIT_MESSAGE: &str = "Unrecognized state... Terminating.";

/// Result of a single poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// Submissions remain; poll again after the update delay
    Continue,
    /// Every tracked submission reached a terminal state
    Drained,
    /// An unrecognized status ended tracking for all submissions
    Aborted,
    /// The request failed; polling stops without retrying
    TransportFailed,
    /// The server knew none of the ids and empty answers stop polling
    EmptyResponse,
}

/// Result of processing one status record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    /// Row updated, submission still tracked
    Updated,
    /// Row updated and submission removed from tracking
    Resolved,
    /// No row for the record; nothing changed
    Skipped,
    /// Unrecognized status; tracking cleared for every submission
    Aborted,
}

/// Polls submission status and keeps the board current
pub struct StatusPoller<R> {
    config: Config,
    repository: R,
    presenter: Presenter,
    board: Board,
    tracking: TrackingSet,
    /// Row key -> index into the board
    rows: HashMap<String, usize>,
    tracked: usize,
    aborted: bool,
}

impl<R: StatusRepository> StatusPoller<R> {
    /// Creates a new poller over `board`
    pub fn new(config: Config, repository: R, board: Board) -> Self {
        let presenter = config.presenter();
        Self {
            config,
            repository,
            presenter,
            board,
            tracking: TrackingSet::new(),
            rows: HashMap::new(),
            tracked: 0,
            aborted: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn tracking(&self) -> &TrackingSet {
        &self.tracking
    }

    pub fn summary(&self) -> Summary {
        Summary {
            tracked: self.tracked,
            remaining: self.tracking.len(),
        }
    }

    /// Builds the tracking set from every pending row
    ///
    /// Returns the number of tracked submissions. Rows sharing a key map to
    /// the last such row.
    pub fn initialize(&mut self) -> usize {
        self.tracking = TrackingSet::new();
        self.rows.clear();
        self.aborted = false;

        for (index, row) in self.board.rows().iter().enumerate() {
            if !row.is_pending(&self.config.pending_class) {
                continue;
            }
            self.tracking.push(row.id().clone());
            self.rows.insert(row.id().key().to_string(), index);
        }

        self.tracked = self.tracking.len();
        debug!("Tracking {} pending submission(s)", self.tracked);
        self.tracked
    }

    /// Initializes, then polls until nothing is left to track
    pub async fn run(&mut self, renderer: &mut dyn Renderer) -> PollOutcome {
        if self.initialize() == 0 {
            info!("No pending submissions to watch");
            return PollOutcome::Drained;
        }

        info!(
            "Watching {} submission(s) (update rate: {:?})",
            self.tracked, self.config.update_rate
        );
        self.render(renderer);

        loop {
            let outcome = self.poll_once().await;
            self.render(renderer);

            match outcome {
                PollOutcome::Continue => time::sleep(self.config.update_rate).await,
                other => {
                    debug!("Poll loop finished: {:?}", other);
                    return other;
                }
            }
        }
    }

    /// Issues one status request for the whole tracking set
    pub async fn poll_once(&mut self) -> PollOutcome {
        if self.tracking.is_empty() {
            return self.finished();
        }

        let records = match self.repository.check_status(self.tracking.ids()).await {
            Ok(records) => records,
            Err(e) => {
                debug!("Status request failed, stopping: {:#}", e);
                return PollOutcome::TransportFailed;
            }
        };

        if self.config.dev {
            debug!(
                "Status response: {}",
                serde_json::to_string(&records).unwrap_or_default()
            );
        }

        if records.is_empty() && self.config.stop_on_empty {
            debug!("Server returned no records, stopping");
            return PollOutcome::EmptyResponse;
        }

        for record in &records {
            self.process_status_record(record);
        }

        if self.tracking.is_empty() {
            self.finished()
        } else {
            PollOutcome::Continue
        }
    }

    /// Writes one record into its row and untracks it once terminal
    pub fn process_status_record(&mut self, record: &StatusRecord) -> RecordOutcome {
        let status = match SubmissionStatus::try_from(record) {
            Ok(status) => status,
            Err(e) => {
                self.abort_all(&record.id, &e);
                return RecordOutcome::Aborted;
            }
        };

        let key = SubmissionId::key_of(&record.id);
        let Some(row) = self
            .rows
            .get(key)
            .copied()
            .and_then(|index| self.board.row_mut(index))
        else {
            debug!("No row for submission {}, skipping", record.id);
            return RecordOutcome::Skipped;
        };

        self.presenter.apply(row, &record.id, &status);

        if status.is_terminal() && self.tracking.remove_first(row.id().as_str()) {
            debug!("Submission {} resolved", record.id);
            return RecordOutcome::Resolved;
        }

        RecordOutcome::Updated
    }

    fn abort_all(&mut self, id: &str, reason: &UnrecognizedStatus) {
        let dropped = self.tracking.clear();
        self.aborted = true;
        if self.config.dev {
            warn!("{} ({} for {})", DEFAULT_EXIT_MESSAGE, reason, id);
        }
        debug!("Stopped tracking {} submission(s)", dropped);
    }

    fn finished(&self) -> PollOutcome {
        if self.aborted {
            PollOutcome::Aborted
        } else {
            PollOutcome::Drained
        }
    }

    fn render(&self, renderer: &mut dyn Renderer) {
        if let Err(e) = renderer.render(&self.board, &self.summary()) {
            warn!("Failed to render board: {:#}", e);
        }
    }
}
