use crate::route::Route;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, TEXT, TEXT_DIM};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Menu;

impl Menu {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, route: Route) -> Paragraph<'static> {
        let separator_style = Style::default().fg(TEXT_DIM);

        let title = Line::from(Span::styled(
            " Software anecdotes",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ));

        // The detail view belongs to the anecdotes section.
        let entries = [
            ("[a]necdotes", matches!(route, Route::Anecdotes | Route::Anecdote(_))),
            ("[c]reate new", route == Route::Create),
            ("a[b]out", route == Route::About),
        ];

        let mut spans = vec![Span::raw(" ")];
        for (index, (label, active)) in entries.into_iter().enumerate() {
            if index > 0 {
                spans.push(Span::styled("  │  ", separator_style));
            }
            let style = if active {
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(TEXT)
            };
            spans.push(Span::styled(label, style));
        }

        Paragraph::new(vec![title, Line::from(spans)]).block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

impl Default for Menu {
    fn default() -> Self {
        Self::new()
    }
}
