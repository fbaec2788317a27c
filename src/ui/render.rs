use crate::route::Route;
use crate::ui::app::App;
use crate::ui::banner::Banner;
use crate::ui::footer::Footer;
use crate::ui::goto::GotoState;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::menu::Menu;
use crate::ui::theme::{ERROR, POPUP_BORDER, TEXT};
use crate::ui::views;
use ratatui::layout::Position;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let regions = layout_regions(frame.area());

    frame.render_widget(Menu::new().widget(app.route()), regions.menu);

    match app.route() {
        Route::Anecdotes => {
            views::list::render(frame, regions.body, app.store(), app.selection());
        }
        Route::Anecdote(id) => views::detail::render(frame, regions.body, app.store(), id),
        Route::Create => views::create::render(frame, regions.body, app.form()),
        Route::About => views::about::render(frame, regions.body),
    }

    if app.notification().is_visible() {
        frame.render_widget(
            Banner::new().widget(app.notification().message()),
            regions.banner,
        );
    }

    frame.render_widget(Footer::new().widget(regions.footer), regions.footer);

    // The prompt overlays everything, so it is drawn last.
    if let GotoState::Visible { input, error } = app.goto_prompt() {
        draw_goto_prompt(frame, input, error.as_deref());
    }
}

fn draw_goto_prompt(frame: &mut Frame<'_>, input: &str, error: Option<&str>) {
    let area = frame.area();
    let popup = centered_rect_by_size(46, 4, area);
    frame.render_widget(Clear, popup);

    let mut lines = vec![Line::from(Span::styled(
        format!(" {input}"),
        Style::default().fg(TEXT),
    ))];
    if let Some(message) = error {
        lines.push(Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(ERROR),
        )));
    }

    let block = Block::default()
        .title(" go to path ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), popup);

    // Cursor after the typed path, clamped inside the popup.
    if popup.width > 3 && popup.height > 1 {
        let max_x = popup.right().saturating_sub(2);
        let cursor_x = (popup.x + 2 + input.chars().count() as u16).min(max_x);
        frame.set_cursor_position(Position::new(cursor_x, popup.y + 1));
    }
}
