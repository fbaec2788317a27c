use crate::model::AnecdoteId;
use crate::route::Route;
use crate::ui::app::App;
use crate::ui::form::FormIntent;
use crate::ui::goto::GotoIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    // An open address prompt captures all input until closed.
    if app.goto_prompt().is_visible() {
        match key.code {
            KeyCode::Esc => app.dispatch_goto(GotoIntent::Close),
            KeyCode::Enter => app.try_goto(),
            KeyCode::Backspace => app.dispatch_goto(GotoIntent::Backspace),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.dispatch_goto(GotoIntent::Input(ch));
            }
            _ => {}
        }
        return;
    }

    if is_ctrl_char(key, 'g') {
        app.dispatch_goto(GotoIntent::Open);
        return;
    }

    match app.route() {
        Route::Anecdotes => handle_list_key(app, key),
        Route::Anecdote(id) => handle_detail_key(app, key, id),
        Route::Create => handle_create_key(app, key),
        Route::About => handle_about_key(app, key),
    }
}

pub fn handle_paste(app: &mut App, text: String) {
    if app.goto_prompt().is_visible() {
        app.dispatch_goto(GotoIntent::Paste(text));
    } else if app.route() == Route::Create {
        app.dispatch_form(FormIntent::Paste(text));
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up => app.move_selection(-1),
        KeyCode::Down => app.move_selection(1),
        KeyCode::Enter => app.open_selected(),
        KeyCode::Char('v') if key.modifiers.is_empty() => app.vote_selected(),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            handle_menu_char(app, ch);
        }
        _ => {}
    }
}

fn handle_detail_key(app: &mut App, key: KeyEvent, id: AnecdoteId) {
    match key.code {
        KeyCode::Esc | KeyCode::Backspace => app.navigate(Route::Anecdotes),
        KeyCode::Char('v') if key.modifiers.is_empty() => app.vote(id),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            handle_menu_char(app, ch);
        }
        _ => {}
    }
}

fn handle_create_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 'r') {
        app.dispatch_form(FormIntent::Reset);
        return;
    }
    match key.code {
        KeyCode::Esc => app.navigate(Route::Anecdotes),
        KeyCode::Enter => app.submit_form(),
        KeyCode::Tab | KeyCode::Down => app.dispatch_form(FormIntent::FocusNext),
        KeyCode::BackTab | KeyCode::Up => app.dispatch_form(FormIntent::FocusPrev),
        KeyCode::Backspace => app.dispatch_form(FormIntent::Backspace),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.dispatch_form(FormIntent::Input(ch));
        }
        _ => {}
    }
}

fn handle_about_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.navigate(Route::Anecdotes),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            handle_menu_char(app, ch);
        }
        _ => {}
    }
}

/// The menu's one-key shortcuts, shared by every view that is not
/// editing text.
fn handle_menu_char(app: &mut App, ch: char) {
    match ch {
        'a' => app.navigate(Route::Anecdotes),
        'c' => app.navigate(Route::Create),
        'b' => app.navigate(Route::About),
        'g' => app.dispatch_goto(GotoIntent::Open),
        'q' => app.request_quit(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
