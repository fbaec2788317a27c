use std::sync::mpsc;
use std::thread;

use crate::config::Config;
use crate::model::AnecdoteId;
use crate::mvi::Reducer;
use crate::notify::{NotificationIntent, NotificationReducer, NotificationState};
use crate::route::Route;
use crate::store::{StoreIntent, StoreReducer, StoreState};
use crate::ui::events::AppEvent;
use crate::ui::form::{FormIntent, FormReducer, FormState};
use crate::ui::goto::{GotoIntent, GotoReducer, GotoState};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// All application state plus the side effects around it.
///
/// Every state change goes through a reducer; `App` itself only decides
/// which intents to dispatch and runs the effects that reducers cannot,
/// which here means arming notification expiry timers and tracing.
pub struct App {
    config: Config,
    route: Route,
    should_quit: bool,
    store: StoreState,
    notification: NotificationState,
    form: FormState,
    goto: GotoState,
    /// Index of the highlighted row in the anecdote list.
    list_selection: usize,
    /// Where expiry timers deliver. Absent in tests that do not need
    /// timers; then notifications simply never expire.
    events_tx: Option<mpsc::Sender<AppEvent>>,
}

impl App {
    pub fn new(config: Config, start: Route) -> Self {
        Self {
            config,
            route: start,
            should_quit: false,
            store: StoreState::seeded(),
            notification: NotificationState::default(),
            form: FormState::default(),
            goto: GotoState::default(),
            list_selection: 0,
            events_tx: None,
        }
    }

    pub fn set_events_sender(&mut self, tx: mpsc::Sender<AppEvent>) {
        self.events_tx = Some(tx);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn store(&self) -> &StoreState {
        &self.store
    }

    pub fn notification(&self) -> &NotificationState {
        &self.notification
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn goto_prompt(&self) -> &GotoState {
        &self.goto
    }

    pub fn selection(&self) -> usize {
        self.list_selection
    }

    /// Switch to another view.
    ///
    /// Leaving the create view throws away whatever was typed, matching
    /// a form that is remounted on return. An open address prompt is
    /// closed by any navigation.
    pub fn navigate(&mut self, route: Route) {
        if self.route == Route::Create && route != Route::Create {
            dispatch_mvi!(self, form, FormReducer, FormIntent::Reset);
        }
        if self.goto.is_visible() {
            dispatch_mvi!(self, goto, GotoReducer, GotoIntent::Close);
        }
        tracing::debug!(from = %self.route, to = %route, "navigate");
        self.route = route;
        self.clamp_selection();
    }

    /// Show a banner message and arm its expiry timer.
    pub fn show_notification(&mut self, message: String) {
        dispatch_mvi!(
            self,
            notification,
            NotificationReducer,
            NotificationIntent::Show { message }
        );
        self.schedule_expiry(self.notification.generation());
    }

    /// Arms a one-shot timer that reports back through the event
    /// channel. The generation makes the expiry self-identifying, so a
    /// message shown later is unaffected by this timer firing.
    fn schedule_expiry(&self, generation: u64) {
        let Some(tx) = &self.events_tx else {
            return;
        };
        let tx = tx.clone();
        let delay = self.config.notification_timeout();
        thread::spawn(move || {
            thread::sleep(delay);
            let _ = tx.send(AppEvent::NotificationExpired { generation });
        });
    }

    pub fn on_notification_expired(&mut self, generation: u64) {
        dispatch_mvi!(
            self,
            notification,
            NotificationReducer,
            NotificationIntent::Expire { generation }
        );
    }

    /// Add the form's current values as a new anecdote, announce it and
    /// return to the list. No validation: empty fields are stored as
    /// typed.
    pub fn submit_form(&mut self) {
        let content = self.form.content().to_string();
        let author = self.form.author().to_string();
        let info = self.form.info().to_string();

        tracing::debug!(%content, "adding anecdote");
        dispatch_mvi!(
            self,
            store,
            StoreReducer,
            StoreIntent::AddNew {
                content: content.clone(),
                author,
                info,
            }
        );
        self.show_notification(format!("a new anecdote \"{content}\" has been created"));
        self.navigate(Route::Anecdotes);
    }

    pub fn vote(&mut self, id: AnecdoteId) {
        tracing::debug!(%id, "vote");
        dispatch_mvi!(self, store, StoreReducer, StoreIntent::Vote { id });
    }

    pub fn vote_selected(&mut self) {
        if let Some(anecdote) = self.store.anecdotes().get(self.list_selection) {
            let id = anecdote.id;
            self.vote(id);
        }
    }

    pub fn open_selected(&mut self) {
        if let Some(anecdote) = self.store.anecdotes().get(self.list_selection) {
            let id = anecdote.id;
            self.navigate(Route::Anecdote(id));
        }
    }

    pub fn move_selection(&mut self, delta: i32) {
        let len = self.store.anecdotes().len();
        if len == 0 {
            return;
        }
        let next = (self.list_selection as i32 + delta).clamp(0, len as i32 - 1);
        self.list_selection = next as usize;
    }

    fn clamp_selection(&mut self) {
        let last = self.store.anecdotes().len().saturating_sub(1);
        self.list_selection = self.list_selection.min(last);
    }

    pub fn dispatch_form(&mut self, intent: FormIntent) {
        dispatch_mvi!(self, form, FormReducer, intent);
    }

    pub fn dispatch_goto(&mut self, intent: GotoIntent) {
        dispatch_mvi!(self, goto, GotoReducer, intent);
    }

    /// Parse the address prompt's input and navigate if it names a
    /// view. A path that matches nothing stays in the prompt with the
    /// router's complaint shown under it.
    pub fn try_goto(&mut self) {
        let GotoState::Visible { input, .. } = &self.goto else {
            return;
        };
        match input.parse::<Route>() {
            Ok(route) => self.navigate(route),
            Err(err) => {
                tracing::debug!(path = %input, error = %err, "goto rejected");
                let message = err.to_string();
                dispatch_mvi!(self, goto, GotoReducer, GotoIntent::Fail { message });
            }
        }
    }
}
