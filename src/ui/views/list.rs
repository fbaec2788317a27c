use crate::store::StoreState;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, TEXT, TEXT_DIM};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

pub fn render(frame: &mut Frame<'_>, area: Rect, store: &StoreState, selection: usize) {
    let mut lines = vec![
        Line::from(Span::styled(
            " Anecdotes",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    if store.anecdotes().is_empty() {
        lines.push(Line::from(Span::styled(
            " nothing here yet, create the first one",
            Style::default().fg(TEXT_DIM),
        )));
    } else {
        for (index, anecdote) in store.anecdotes().iter().enumerate() {
            let style = if index == selection {
                Style::default().fg(TEXT).bg(ACTIVE_HIGHLIGHT)
            } else {
                Style::default().fg(TEXT)
            };
            lines.push(Line::from(Span::styled(
                format!(" {} ", anecdote.content),
                style,
            )));
        }
    }

    frame.render_widget(Paragraph::new(lines), area);
}
