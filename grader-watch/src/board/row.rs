//! A submission row and its cells
//!
//! Cells are only written when the new content differs from the current one,
//! and every actual change bumps the row's revision. Renderers use the
//! revision to redraw only what changed.

use grader_core::domain::submission::SubmissionId;
use serde::Serialize;

/// Color of a status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Success,
    Danger,
}

impl Tone {
    pub fn css(&self) -> &'static str {
        match self {
            Tone::Info => "info",
            Tone::Success => "success",
            Tone::Danger => "danger",
        }
    }
}

/// Glyph shown inside a status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    ExclamationSign,
    Hourglass,
    Refresh,
    Ok,
}

impl Icon {
    /// Glyphicon name plus animation class
    pub fn css(&self) -> &'static str {
        match self {
            Icon::ExclamationSign => "exclamation-sign",
            Icon::Hourglass => "hourglass gl-half-spin",
            Icon::Refresh => "refresh gl-spin",
            Icon::Ok => "ok",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Icon::ExclamationSign => "!",
            Icon::Hourglass => "⧗",
            Icon::Refresh => "↻",
            Icon::Ok => "✓",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub tone: Tone,
    pub icon: Icon,
    pub text: String,
}

impl Badge {
    pub fn new(tone: Tone, icon: Icon, text: impl Into<String>) -> Self {
        Self {
            tone,
            icon,
            text: text.into(),
        }
    }
}

/// Who a message is attributed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Actor {
    System,
    Worker,
}

impl Actor {
    pub fn name(&self) -> &'static str {
        match self {
            Actor::System => "System",
            Actor::Worker => "Worker",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub actor: Option<Actor>,
    pub text: String,
}

impl Message {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            actor: None,
            text: text.into(),
        }
    }

    pub fn by(actor: Actor, text: impl Into<String>) -> Self {
        Self {
            actor: Some(actor),
            text: text.into(),
        }
    }
}

/// Content of the progress column
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ProgressCell {
    #[default]
    Empty,
    /// Progress bar at the given percentage
    Bar(u8),
    /// Final score in place of the bar
    Score { value: f64, color: Option<String> },
}

/// Scores print like the server sends them: `95`, `72.5`
pub fn format_score(score: f64) -> String {
    if score.fract() == 0.0 && score.abs() < 1e15 {
        format!("{}", score as i64)
    } else {
        format!("{}", score)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportLink {
    pub href: String,
    pub label: String,
}

/// One submission row on the board
#[derive(Debug, Clone)]
pub struct Row {
    id: SubmissionId,
    classes: Vec<String>,
    status: Option<Badge>,
    progress: ProgressCell,
    message: Option<Message>,
    report: Option<ReportLink>,
    revision: u64,
}

impl Row {
    pub fn new(id: SubmissionId, classes: Vec<String>) -> Self {
        Self {
            id,
            classes,
            status: None,
            progress: ProgressCell::Empty,
            message: None,
            report: None,
            revision: 0,
        }
    }

    pub fn id(&self) -> &SubmissionId {
        &self.id
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn is_pending(&self, marker: &str) -> bool {
        self.classes.iter().any(|class| class == marker)
    }

    pub fn status(&self) -> Option<&Badge> {
        self.status.as_ref()
    }

    pub fn progress(&self) -> &ProgressCell {
        &self.progress
    }

    pub fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    pub fn report(&self) -> Option<&ReportLink> {
        self.report.as_ref()
    }

    /// Number of cell changes applied so far
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn replace_status(&mut self, badge: Badge) -> bool {
        if self.status.as_ref() == Some(&badge) {
            return false;
        }
        self.status = Some(badge);
        self.touch()
    }

    pub fn replace_message(&mut self, message: Message) -> bool {
        if self.message.as_ref() == Some(&message) {
            return false;
        }
        self.message = Some(message);
        self.touch()
    }

    pub fn set_progress(&mut self, progress: ProgressCell) -> bool {
        if self.progress == progress {
            return false;
        }
        self.progress = progress;
        self.touch()
    }

    /// Creates the progress bar if absent and moves it to `value`
    pub fn set_bar(&mut self, value: u8) -> bool {
        self.set_progress(ProgressCell::Bar(value.min(100)))
    }

    pub fn set_report(&mut self, link: ReportLink) -> bool {
        if self.report.as_ref() == Some(&link) {
            return false;
        }
        self.report = Some(link);
        self.touch()
    }

    /// Strips every state class, the pending marker included
    pub fn clear_classes(&mut self) -> bool {
        if self.classes.is_empty() {
            return false;
        }
        self.classes.clear();
        self.touch()
    }

    fn touch(&mut self) -> bool {
        self.revision += 1;
        true
    }
}
