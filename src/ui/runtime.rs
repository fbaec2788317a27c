use crate::config::Config;
use crate::route::Route;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_paste};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc;

/// Runs the interface until the user quits.
pub fn run(config: Config, start: Route) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = config.tick_rate();
    let events = EventHandler::new(tick_rate);
    let mut app = App::new(config, start);
    app.set_events_sender(events.sender());

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Paste(text)) => handle_paste(&mut app, text),
            Ok(AppEvent::NotificationExpired { generation }) => {
                app.on_notification_expired(generation);
            }
            Ok(AppEvent::Tick) => {}
            Ok(AppEvent::Resize(_, _)) => {}
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
