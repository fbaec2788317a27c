use crate::ui::theme::NOTICE;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

/// The single-line notification banner. Rendered only while a message
/// is on display.
pub struct Banner;

impl Banner {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, message: &str) -> Paragraph<'static> {
        Paragraph::new(Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(NOTICE),
        )))
    }
}

impl Default for Banner {
    fn default() -> Self {
        Self::new()
    }
}
