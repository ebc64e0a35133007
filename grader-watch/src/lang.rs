//! User-facing strings

use grader_core::domain::status::JobState;

pub const STATUS_NOT_FOUND: &str = "not found";
pub const MESSAGE_NOT_FOUND: &str =
    "An error occurred on our side while processing this submission (object not found).";
pub const STATUS_WAITING: &str = "waiting";
pub const RESULT_EVALUATED: &str = "evaluated";
pub const RESULT_REJECTED: &str = "rejected";
pub const VIEW_REPORT: &str = "View report";
pub const VIEW_NEW_REPORT: &str = "View new report";

/// Worker activity for a running submission
pub fn job_state_message(state: JobState) -> &'static str {
    match state {
        JobState::Preparing => "is preparing environment...",
        JobState::Compiling => "is compiling the code...",
        JobState::Testing => "is testing your work...",
        JobState::Done => "is preparing the report.. ",
    }
}

/// Queue message; an unknown position is shown as `?`
pub fn waiting_message(position: Option<i64>) -> String {
    let position = position.map_or_else(|| "?".to_string(), |p| p.to_string());
    format!(
        "is waiting for free worker (approx. queue position: {})...",
        position
    )
}
