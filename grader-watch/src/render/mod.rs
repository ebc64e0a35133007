//! Board renderers
//!
//! Renderers receive the whole board after every poll and decide for
//! themselves what changed, using row revisions.

mod html;
mod terminal;

pub use html::HtmlSnapshotRenderer;
pub use terminal::TerminalRenderer;

use anyhow::Result;
use scraper::Html;

use crate::board::{Board, Message};

/// Progress of the watched batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Submissions tracked at initialization
    pub tracked: usize,
    /// Submissions still being polled
    pub remaining: usize,
}

impl Summary {
    pub fn resolved(&self) -> usize {
        self.tracked.saturating_sub(self.remaining)
    }
}

/// Projects the board somewhere visible
pub trait Renderer {
    fn render(&mut self, board: &Board, summary: &Summary) -> Result<()>;
}

impl Renderer for Vec<Box<dyn Renderer>> {
    fn render(&mut self, board: &Board, summary: &Summary) -> Result<()> {
        for renderer in self.iter_mut() {
            renderer.render(board, summary)?;
        }
        Ok(())
    }
}

/// Text content of a server-provided message, markup dropped and entities decoded
pub fn strip_tags(html: &str) -> String {
    Html::parse_fragment(html)
        .root_element()
        .text()
        .collect::<String>()
}

/// Message as plain text, prefixed with its actor
pub fn message_text(message: &Message) -> String {
    let text = strip_tags(&message.text);
    match message.actor {
        Some(actor) => format!("{} {}", actor.name(), text),
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_tags() {
        assert_eq!(
            strip_tags("<span class=\"text-info\">Worker</span> is testing"),
            "Worker is testing"
        );
        assert_eq!(strip_tags("3 > 2"), "3 > 2");
    }

    #[test]
    fn test_strip_tags_keeps_text_around_markup_characters() {
        assert_eq!(
            strip_tags("Score 3 < 4 and still running"),
            "Score 3 < 4 and still running"
        );
        assert_eq!(strip_tags("Tom &amp; Jerry"), "Tom & Jerry");
    }

    #[test]
    fn test_message_text() {
        use crate::board::Actor;

        assert_eq!(
            message_text(&Message::by(Actor::Worker, "is testing your work...")),
            "Worker is testing your work..."
        );
        assert_eq!(message_text(&Message::plain("<b>ok</b>")), "ok");
    }

    #[test]
    fn test_summary_resolved() {
        let summary = Summary {
            tracked: 3,
            remaining: 1,
        };
        assert_eq!(summary.resolved(), 2);
    }
}
