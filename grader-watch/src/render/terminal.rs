//! Terminal renderer

use std::io::Write;

use anyhow::Result;
use colored::{ColoredString, Colorize};

use super::{Renderer, Summary, message_text};
use crate::board::{Badge, Board, ProgressCell, Row, Tone, format_score};

/// Prints rows as they change
pub struct TerminalRenderer<W> {
    out: W,
    /// Last printed revision per row
    seen: Vec<u64>,
    last_progress: Option<u8>,
}

impl TerminalRenderer<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            seen: Vec::new(),
            last_progress: None,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn print_row(&mut self, row: &Row) -> Result<()> {
        let time = chrono::Local::now().format("%H:%M:%S").to_string();
        let status = row.status().map(colorize_badge).unwrap_or_default();
        let message = row
            .message()
            .map(message_text)
            .unwrap_or_default();

        write!(
            self.out,
            "{} {} {} {}",
            time.dimmed(),
            row.id().key().cyan(),
            status,
            progress_text(row.progress()),
        )?;
        if !message.is_empty() {
            write!(self.out, " {}", message)?;
        }
        if let Some(report) = row.report() {
            write!(self.out, " {}", format!("[{}: {}]", report.label, report.href).dimmed())?;
        }
        writeln!(self.out)?;
        Ok(())
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render(&mut self, board: &Board, summary: &Summary) -> Result<()> {
        self.seen.resize(board.len(), 0);

        for (index, row) in board.rows().iter().enumerate() {
            if row.revision() == self.seen[index] {
                continue;
            }
            self.seen[index] = row.revision();
            self.print_row(row)?;
        }

        if summary.tracked > 1 {
            let progress = board.overall_progress(summary.tracked, summary.remaining);
            if progress != self.last_progress {
                self.last_progress = progress;
                if let Some(progress) = progress {
                    writeln!(
                        self.out,
                        "{}",
                        format!(
                            "  {} / {} ({}%)",
                            summary.resolved(),
                            summary.tracked,
                            progress
                        )
                        .bold()
                    )?;
                }
            }
        }

        self.out.flush()?;
        Ok(())
    }
}

fn colorize_badge(badge: &Badge) -> ColoredString {
    let text = format!("{} {}", badge.icon.symbol(), badge.text);
    match badge.tone {
        Tone::Info => text.cyan(),
        Tone::Success => text.green(),
        Tone::Danger => text.red(),
    }
}

fn progress_text(progress: &ProgressCell) -> ColoredString {
    match progress {
        ProgressCell::Empty => "".normal(),
        ProgressCell::Bar(value) => {
            let filled = usize::from(*value) / 10;
            format!("[{}{}] {:>3}%", "#".repeat(filled), ".".repeat(10 - filled), value).normal()
        }
        ProgressCell::Score { value, color } => {
            let text = format!("{}%", format_score(*value));
            match color.as_deref() {
                Some("success") => text.green(),
                Some("danger") => text.red(),
                Some("warning") => text.yellow(),
                Some("info") => text.cyan(),
                _ => text.normal(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grader_core::domain::submission::SubmissionId;

    use crate::board::{Icon, Message};

    fn board() -> Board {
        Board::from_ids(
            ["a:1", "b:2"].iter().map(|id| SubmissionId::parse(id).unwrap()),
            "pending",
        )
    }

    fn output(renderer: TerminalRenderer<Vec<u8>>) -> String {
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn test_prints_only_changed_rows() {
        colored::control::set_override(false);
        let mut board = board();
        let summary = Summary {
            tracked: 1,
            remaining: 1,
        };
        let mut renderer = TerminalRenderer::new(Vec::new());

        renderer.render(&board, &summary).unwrap();
        board
            .row_mut(1)
            .unwrap()
            .replace_status(Badge::new(Tone::Info, Icon::Hourglass, "waiting"));
        board
            .row_mut(1)
            .unwrap()
            .replace_message(Message::plain("<b>queued</b>"));
        renderer.render(&board, &summary).unwrap();
        renderer.render(&board, &summary).unwrap();

        let text = output(renderer);
        assert_eq!(text.lines().count(), 1);
        assert!(text.contains(" b "));
        assert!(text.contains("waiting"));
        assert!(text.contains("queued"));
        assert!(!text.contains("<b>"));
    }

    #[test]
    fn test_prints_overall_progress_for_batches() {
        colored::control::set_override(false);
        let mut board = board();
        board.row_mut(0).unwrap().set_bar(50);
        let mut renderer = TerminalRenderer::new(Vec::new());

        let summary = Summary {
            tracked: 2,
            remaining: 2,
        };
        renderer.render(&board, &summary).unwrap();
        renderer.render(&board, &summary).unwrap();

        let text = output(renderer);
        assert!(text.contains("[#####.....]  50%"));
        assert_eq!(text.matches("0 / 2 (25%)").count(), 1);
    }

    #[test]
    fn test_progress_text() {
        colored::control::set_override(false);
        assert_eq!(progress_text(&ProgressCell::Bar(100)).to_string(), "[##########] 100%");
        assert_eq!(
            progress_text(&ProgressCell::Score {
                value: 72.5,
                color: None
            })
            .to_string(),
            "72.5%"
        );
    }
}
