use crate::model::AnecdoteId;
use crate::store::StoreState;
use crate::ui::theme::{ACCENT, ERROR, TEXT, TEXT_DIM};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

/// The single-anecdote view. An id that resolves to nothing gets an
/// explicit not-found body instead of any fallback content.
pub fn render(frame: &mut Frame<'_>, area: Rect, store: &StoreState, id: AnecdoteId) {
    let dim = Style::default().fg(TEXT_DIM);

    let lines = match store.get(id) {
        Some(anecdote) => vec![
            Line::from(Span::styled(
                format!(" {} by {}", anecdote.content, anecdote.author),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!(" has {} votes", anecdote.votes),
                Style::default().fg(TEXT),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled(" For more info see ", Style::default().fg(TEXT)),
                Span::styled(
                    anecdote.info.clone(),
                    Style::default()
                        .fg(TEXT)
                        .add_modifier(Modifier::UNDERLINED),
                ),
            ]),
            Line::from(""),
            Line::from(Span::styled(" v: vote │ Esc: back to the list", dim)),
        ],
        None => vec![
            Line::from(Span::styled(
                format!(" no anecdote with id {id}"),
                Style::default().fg(ERROR),
            )),
            Line::from(""),
            Line::from(Span::styled(" Esc: back to the list", dim)),
        ],
    };

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}
