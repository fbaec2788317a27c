//! Keyboard-driven walks through the application, from the seeded list
//! to creating, voting and navigating by typed path.

mod common;

use anecdota::model::AnecdoteId;
use anecdota::route::Route;
use anecdota::ui::goto::GotoState;
use common::{make_app, press, press_ctrl, type_str};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[test]
fn starts_with_the_two_seeded_anecdotes() {
    let app = make_app();
    let contents: Vec<&str> = app
        .store()
        .anecdotes()
        .iter()
        .map(|a| a.content.as_str())
        .collect();
    assert_eq!(
        contents,
        vec![
            "If it hurts, do it more often",
            "Premature optimization is the root of all evil",
        ]
    );
    assert!(app.store().anecdotes().iter().all(|a| a.votes == 0));
}

#[test]
fn arrow_keys_move_the_highlight_and_enter_opens_the_detail() {
    let mut app = make_app();

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.route(), Route::Anecdote(AnecdoteId(2)));
}

#[test]
fn voting_twice_from_the_detail_view_accumulates() {
    let mut app = make_app();
    press(&mut app, KeyCode::Enter);

    press(&mut app, KeyCode::Char('v'));
    press(&mut app, KeyCode::Char('v'));

    assert_eq!(app.store().get(AnecdoteId(1)).unwrap().votes, 2);
    app.navigate(Route::Anecdotes);
    assert_eq!(app.store().get(AnecdoteId(1)).unwrap().votes, 2);
}

#[test]
fn creating_an_anecdote_through_the_form_keys() {
    let mut app = make_app();

    press(&mut app, KeyCode::Char('c'));
    assert_eq!(app.route(), Route::Create);

    type_str(&mut app, "Simplicity is prerequisite for reliability");
    press(&mut app, KeyCode::Tab);
    type_str(&mut app, "Edsger W. Dijkstra");
    press(&mut app, KeyCode::Tab);
    type_str(&mut app, "https://en.wikiquote.org/wiki/Edsger_W._Dijkstra");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.route(), Route::Anecdotes);
    assert_eq!(app.store().anecdotes().len(), 3);
    let added = app.store().anecdotes().last().unwrap();
    assert_eq!(added.content, "Simplicity is prerequisite for reliability");
    assert_eq!(added.author, "Edsger W. Dijkstra");
    assert_eq!(added.votes, 0);
    assert_eq!(
        app.notification().message(),
        "a new anecdote \"Simplicity is prerequisite for reliability\" has been created"
    );
    assert!(app.store().get(added.id).is_some());
}

#[test]
fn submitting_an_untouched_form_stores_empty_fields() {
    let mut app = make_app();
    press(&mut app, KeyCode::Char('c'));

    press(&mut app, KeyCode::Enter);

    let added = app.store().anecdotes().last().unwrap();
    assert_eq!(added.content, "");
    assert_eq!(added.author, "");
    assert_eq!(added.info, "");
}

#[test]
fn escape_cancels_the_form_and_discards_the_draft() {
    let mut app = make_app();
    press(&mut app, KeyCode::Char('c'));
    type_str(&mut app, "never mind");

    press(&mut app, KeyCode::Esc);

    assert_eq!(app.route(), Route::Anecdotes);
    assert_eq!(app.store().anecdotes().len(), 2);

    press(&mut app, KeyCode::Char('c'));
    assert_eq!(app.form().content(), "");
}

#[test]
fn ctrl_r_resets_the_form_in_place() {
    let mut app = make_app();
    press(&mut app, KeyCode::Char('c'));
    type_str(&mut app, "typo");

    press_ctrl(&mut app, 'r');

    assert_eq!(app.route(), Route::Create);
    assert_eq!(app.form().content(), "");
}

#[test]
fn menu_keys_reach_every_view() {
    let mut app = make_app();

    press(&mut app, KeyCode::Char('b'));
    assert_eq!(app.route(), Route::About);

    press(&mut app, KeyCode::Char('c'));
    assert_eq!(app.route(), Route::Create);

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.route(), Route::Anecdotes);
}

#[test]
fn typing_a_path_navigates_to_an_unseen_detail() {
    let mut app = make_app();

    press_ctrl(&mut app, 'g');
    type_str(&mut app, "anecdotes/404");
    press(&mut app, KeyCode::Enter);

    // The route is taken verbatim; the view reports the missing id.
    assert_eq!(app.route(), Route::Anecdote(AnecdoteId(404)));
    assert!(app.store().get(AnecdoteId(404)).is_none());
    assert!(!app.goto_prompt().is_visible());
}

#[test]
fn typing_an_unrouted_path_keeps_the_prompt_open_with_the_error() {
    let mut app = make_app();

    press_ctrl(&mut app, 'g');
    type_str(&mut app, "anecdote");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.route(), Route::Anecdotes);
    match app.goto_prompt() {
        GotoState::Visible { input, error } => {
            assert_eq!(input, "/anecdote");
            assert!(error.as_deref().unwrap().contains("/anecdote"));
        }
        GotoState::Hidden => panic!("prompt must survive a rejected path"),
    }
}

#[test]
fn form_keys_do_not_leak_into_navigation() {
    let mut app = make_app();
    press(&mut app, KeyCode::Char('c'));

    // These are menu shortcuts everywhere else.
    type_str(&mut app, "cab");

    assert_eq!(app.route(), Route::Create);
    assert_eq!(app.form().content(), "cab");
}

#[test]
fn ctrl_q_quits_from_any_view() {
    for start in [Route::Anecdotes, Route::Create, Route::About] {
        let mut app = make_app();
        app.navigate(start);
        press_ctrl(&mut app, 'q');
        assert!(app.should_quit(), "Ctrl+Q must quit from {start}");
    }
}

#[test]
fn key_release_events_are_ignored() {
    let mut app = make_app();
    let mut release = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);
    release.kind = KeyEventKind::Release;

    anecdota::ui::input::handle_key(&mut app, release);

    assert_eq!(app.route(), Route::Anecdotes);
}
