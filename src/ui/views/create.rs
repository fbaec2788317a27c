use crate::ui::form::{FormFocus, FormState};
use crate::ui::theme::{ACCENT, TEXT, TEXT_DIM};
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

const CONTENT_LABEL: &str = "content: ";
const AUTHOR_LABEL: &str = "author: ";
const INFO_LABEL: &str = "url for more info: ";

/// The create form. The focused field shows the hardware cursor at its
/// end, since editing is append-only.
pub fn render(frame: &mut Frame<'_>, area: Rect, form: &FormState) {
    let field_line = |label: &'static str, value: &str, focused: bool| {
        let label_style = if focused {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(TEXT_DIM)
        };
        Line::from(vec![
            Span::raw(" "),
            Span::styled(label, label_style),
            Span::styled(value.to_string(), Style::default().fg(TEXT)),
        ])
    };

    let focus = form.focus();
    let lines = vec![
        Line::from(Span::styled(
            " create a new anecdote",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        field_line(CONTENT_LABEL, form.content(), focus == FormFocus::Content),
        field_line(AUTHOR_LABEL, form.author(), focus == FormFocus::Author),
        field_line(INFO_LABEL, form.info(), focus == FormFocus::Info),
        Line::from(""),
        Line::from(Span::styled(
            " Enter: create │ Tab: next field │ Ctrl+R: reset │ Esc: cancel",
            Style::default().fg(TEXT_DIM),
        )),
    ];

    frame.render_widget(Paragraph::new(lines), area);

    let (label, row) = match focus {
        FormFocus::Content => (CONTENT_LABEL, 2),
        FormFocus::Author => (AUTHOR_LABEL, 3),
        FormFocus::Info => (INFO_LABEL, 4),
    };
    let cursor_x =
        area.x + 1 + (label.chars().count() + form.focused_value().chars().count()) as u16;
    let cursor_y = area.y + row;
    if cursor_x < area.right() && cursor_y < area.bottom() {
        frame.set_cursor_position(Position::new(cursor_x, cursor_y));
    }
}
