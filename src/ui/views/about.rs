use crate::ui::theme::{ACCENT, TEXT, TEXT_DIM};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

const WIKIPEDIA_QUOTE: &str = "An anecdote is a brief, revealing account of an individual person \
    or an incident. Occasionally humorous, anecdotes differ from jokes because their primary \
    purpose is not simply to provoke laughter but to reveal a truth more general than the brief \
    tale itself, such as to characterize a person by delineating a specific quirk or trait, to \
    communicate an abstract idea about a person, place, or thing through the concrete details of \
    a short narrative. An anecdote is \"a story with a point.\"";

pub fn render(frame: &mut Frame<'_>, area: Rect) {
    let text_style = Style::default().fg(TEXT);

    let lines = vec![
        Line::from(Span::styled(
            " About anecdote app",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(" According to Wikipedia:", text_style)),
        Line::from(""),
        Line::from(Span::styled(
            format!(" {WIKIPEDIA_QUOTE}"),
            text_style.add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
        Line::from(Span::styled(
            " Software engineering is full of excellent anecdotes, at this app you can find the \
             best and add more.",
            text_style,
        )),
        Line::from(""),
        Line::from(Span::styled(
            " Anecdote app for Full Stack Open.",
            Style::default().fg(TEXT_DIM),
        )),
        Line::from(Span::styled(
            " See https://github.com/fullstack-hy2020/routed-anecdotes/blob/master/src/App.js \
             for the source code.",
            Style::default().fg(TEXT_DIM),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}
