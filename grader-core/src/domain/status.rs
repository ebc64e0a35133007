//! Submission status domain types

use thiserror::Error;

use crate::dto::status::StatusRecord;

/// Numeric `state` values used on the wire
pub mod wire {
    pub const NOT_FOUND: i64 = -1;
    pub const QUEUED: i64 = 0;
    pub const RUNNING: i64 = 1;
    pub const CHECKED: i64 = 2;
}

/// Phase a worker reports while it holds a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobState {
    Preparing,
    Compiling,
    Testing,
    Done,
}

impl JobState {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "preparing" => Some(Self::Preparing),
            "compiling" => Some(Self::Compiling),
            "testing" => Some(Self::Testing),
            "done" => Some(Self::Done),
            _ => None,
        }
    }

    /// Wire name, also shown as the badge text
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Preparing => "preparing",
            Self::Compiling => "compiling",
            Self::Testing => "testing",
            Self::Done => "done",
        }
    }
}

/// Final verdict of a checked submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EvaluationOutcome {
    Ok,
    CompileError,
    InternalError,
}

impl EvaluationOutcome {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "ok" => Some(Self::Ok),
            "compile_error" => Some(Self::CompileError),
            "internal_error" => Some(Self::InternalError),
            _ => None,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Ok)
    }
}

/// A status value the client does not know how to display
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UnrecognizedStatus {
    #[error("unrecognized state {0:?}")]
    State(Option<i64>),
    #[error("unrecognized job state {0:?}")]
    JobState(Option<String>),
    #[error("unrecognized evaluation status {0:?}")]
    Evaluation(Option<String>),
}

/// Typed status of one submission
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionStatus {
    /// The server has no record of the submission
    NotFound,
    /// Waiting for a free worker
    Queued { position: Option<i64> },
    /// A worker is processing the submission
    Running { job_state: JobState, progress: u8 },
    /// Evaluation is stored and final
    Checked {
        outcome: EvaluationOutcome,
        message: String,
        score: Option<f64>,
        status_color: Option<String>,
    },
}

impl SubmissionStatus {
    /// No further transition follows this status
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::NotFound | Self::Checked { .. })
    }
}

impl TryFrom<&StatusRecord> for SubmissionStatus {
    type Error = UnrecognizedStatus;

    fn try_from(record: &StatusRecord) -> Result<Self, Self::Error> {
        match record.state {
            Some(wire::NOT_FOUND) => Ok(Self::NotFound),
            Some(wire::QUEUED) => Ok(Self::Queued {
                position: record.position,
            }),
            Some(wire::RUNNING) => {
                let job_state = record
                    .job_state
                    .as_deref()
                    .and_then(JobState::parse)
                    .ok_or_else(|| UnrecognizedStatus::JobState(record.job_state.clone()))?;
                Ok(Self::Running {
                    job_state,
                    progress: clamp_progress(record.progress),
                })
            }
            Some(wire::CHECKED) => {
                let outcome = record
                    .status
                    .as_deref()
                    .and_then(EvaluationOutcome::parse)
                    .ok_or_else(|| UnrecognizedStatus::Evaluation(record.status.clone()))?;
                Ok(Self::Checked {
                    outcome,
                    message: record.message.clone().unwrap_or_default(),
                    score: record.score,
                    status_color: record.status_color.clone(),
                })
            }
            other => Err(UnrecognizedStatus::State(other)),
        }
    }
}

/// Percentage in 0..=100; missing or NaN reads as 0
fn clamp_progress(progress: Option<f64>) -> u8 {
    match progress {
        Some(p) if p.is_finite() => p.round().clamp(0.0, 100.0) as u8,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(state: i64) -> StatusRecord {
        StatusRecord {
            id: "job1".to_string(),
            state: Some(state),
            ..Default::default()
        }
    }

    #[test]
    fn test_running_with_known_job_state() {
        let mut rec = record(1);
        rec.job_state = Some("compiling".to_string());
        rec.progress = Some(40.0);

        let status = SubmissionStatus::try_from(&rec).unwrap();
        assert_eq!(
            status,
            SubmissionStatus::Running {
                job_state: JobState::Compiling,
                progress: 40
            }
        );
        assert!(!status.is_terminal());
    }

    #[test]
    fn test_running_without_job_state_is_unrecognized() {
        let rec = record(1);
        assert_eq!(
            SubmissionStatus::try_from(&rec),
            Err(UnrecognizedStatus::JobState(None))
        );

        let mut rec = record(1);
        rec.job_state = Some("unknown_value".to_string());
        assert!(matches!(
            SubmissionStatus::try_from(&rec),
            Err(UnrecognizedStatus::JobState(Some(_)))
        ));
    }

    #[test]
    fn test_checked_outcomes() {
        for (wire, accepted) in [("ok", true), ("compile_error", false), ("internal_error", false)] {
            let mut rec = record(2);
            rec.status = Some(wire.to_string());
            match SubmissionStatus::try_from(&rec).unwrap() {
                SubmissionStatus::Checked { outcome, .. } => {
                    assert_eq!(outcome.is_accepted(), accepted)
                }
                other => panic!("unexpected status {:?}", other),
            }
        }

        let mut rec = record(2);
        rec.status = Some("timeout".to_string());
        assert!(SubmissionStatus::try_from(&rec).is_err());
    }

    #[test]
    fn test_unknown_or_missing_state() {
        assert_eq!(
            SubmissionStatus::try_from(&record(7)),
            Err(UnrecognizedStatus::State(Some(7)))
        );
        let mut rec = record(0);
        rec.state = None;
        assert_eq!(
            SubmissionStatus::try_from(&rec),
            Err(UnrecognizedStatus::State(None))
        );
    }

    #[test]
    fn test_progress_is_clamped() {
        assert_eq!(clamp_progress(Some(140.0)), 100);
        assert_eq!(clamp_progress(Some(-3.0)), 0);
        assert_eq!(clamp_progress(Some(f64::NAN)), 0);
        assert_eq!(clamp_progress(None), 0);
    }

    #[test]
    fn test_terminal_states() {
        assert!(SubmissionStatus::NotFound.is_terminal());
        assert!(!SubmissionStatus::Queued { position: Some(3) }.is_terminal());
    }
}
