//! Status presentation
//!
//! Maps a typed submission status onto a row's cells.

use grader_core::domain::status::{EvaluationOutcome, SubmissionStatus};

use super::row::{Actor, Badge, Icon, Message, ProgressCell, ReportLink, Row, Tone};
use crate::lang;

/// Writes submission statuses into rows
#[derive(Debug, Clone)]
pub struct Presenter {
    /// Absolute report URL with a `{}` placeholder
    report_template: String,
    report_label: String,
}

impl Presenter {
    pub fn new(report_template: impl Into<String>, report_label: impl Into<String>) -> Self {
        Self {
            report_template: report_template.into(),
            report_label: report_label.into(),
        }
    }

    pub fn report_link(&self, id: &str) -> ReportLink {
        ReportLink {
            href: self.report_template.replacen("{}", id, 1),
            label: self.report_label.clone(),
        }
    }

    /// Applies `status` to `row`; `record_id` is the id the server reported
    ///
    /// Queued submissions leave the progress cell untouched.
    pub fn apply(&self, row: &mut Row, record_id: &str, status: &SubmissionStatus) {
        match status {
            SubmissionStatus::NotFound => {
                row.replace_status(Badge::new(
                    Tone::Danger,
                    Icon::ExclamationSign,
                    lang::STATUS_NOT_FOUND,
                ));
                row.replace_message(Message::plain(lang::MESSAGE_NOT_FOUND));
                row.set_progress(ProgressCell::Empty);
            }
            SubmissionStatus::Queued { position } => {
                row.replace_status(Badge::new(Tone::Info, Icon::Hourglass, lang::STATUS_WAITING));
                row.replace_message(Message::by(Actor::System, lang::waiting_message(*position)));
            }
            SubmissionStatus::Running {
                job_state,
                progress,
            } => {
                row.replace_status(Badge::new(Tone::Info, Icon::Refresh, job_state.as_str()));
                row.replace_message(Message::by(
                    Actor::Worker,
                    lang::job_state_message(*job_state),
                ));
                row.set_bar(*progress);
            }
            SubmissionStatus::Checked {
                outcome,
                message,
                score,
                status_color,
            } => {
                row.replace_status(verdict_badge(*outcome));
                row.replace_message(Message::plain(message.clone()));
                row.clear_classes();
                row.set_progress(match score {
                    Some(value) => ProgressCell::Score {
                        value: *value,
                        color: status_color.clone(),
                    },
                    None => ProgressCell::Empty,
                });
                row.set_report(self.report_link(record_id));
            }
        }
    }
}

fn verdict_badge(outcome: EvaluationOutcome) -> Badge {
    if outcome.is_accepted() {
        Badge::new(Tone::Success, Icon::Ok, lang::RESULT_EVALUATED)
    } else {
        Badge::new(Tone::Danger, Icon::ExclamationSign, lang::RESULT_REJECTED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grader_core::domain::status::JobState;
    use grader_core::domain::submission::SubmissionId;

    fn presenter() -> Presenter {
        Presenter::new("http://localhost:8000/task/report/{}", lang::VIEW_REPORT)
    }

    fn row() -> Row {
        Row::new(
            SubmissionId::parse("job1:sig").unwrap(),
            vec!["pending".to_string()],
        )
    }

    #[test]
    fn test_queued_leaves_progress_alone() {
        let mut row = row();
        row.set_bar(20);
        presenter().apply(&mut row, "job1", &SubmissionStatus::Queued { position: Some(3) });

        assert_eq!(row.progress(), &ProgressCell::Bar(20));
        assert_eq!(row.status().unwrap().text, "waiting");
        assert!(row.message().unwrap().text.contains("queue position: 3"));
    }

    #[test]
    fn test_running_shows_spinner_and_bar() {
        let mut row = row();
        presenter().apply(
            &mut row,
            "job1",
            &SubmissionStatus::Running {
                job_state: JobState::Testing,
                progress: 10,
            },
        );

        let badge = row.status().unwrap();
        assert_eq!(badge.icon, Icon::Refresh);
        assert_eq!(badge.text, "testing");
        assert_eq!(row.message().unwrap().actor, Some(Actor::Worker));
        assert_eq!(row.progress(), &ProgressCell::Bar(10));
    }

    #[test]
    fn test_not_found_clears_progress() {
        let mut row = row();
        row.set_bar(60);
        presenter().apply(&mut row, "job1", &SubmissionStatus::NotFound);

        assert_eq!(row.status().unwrap().tone, Tone::Danger);
        assert_eq!(row.progress(), &ProgressCell::Empty);
        assert!(row.report().is_none());
    }

    #[test]
    fn test_checked_rejected_without_score() {
        let mut row = row();
        presenter().apply(
            &mut row,
            "job1",
            &SubmissionStatus::Checked {
                outcome: EvaluationOutcome::CompileError,
                message: "Compilation failed".to_string(),
                score: None,
                status_color: Some("danger".to_string()),
            },
        );

        assert_eq!(row.status().unwrap().text, "rejected");
        assert_eq!(row.progress(), &ProgressCell::Empty);
        assert!(row.classes().is_empty());
        assert_eq!(
            row.report().unwrap().href,
            "http://localhost:8000/task/report/job1"
        );
    }
}
