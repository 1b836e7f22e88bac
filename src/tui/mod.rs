//! # TUI Adapter
//!
//! The ratatui-specific layer. Renders the derived catalog, turns key
//! presses into store calls, and shows the store's messages as toasts.
//!
//! This is the only module that knows about ratatui and crossterm. It reads
//! the store exclusively through its published channels; the only write it
//! ever makes is `EventStore::toggle_favorite`.
//!
//! ## Redraw Strategy
//!
//! Countdowns tick every second, so the loop redraws at least every
//! `TICK` even when idle, and immediately after any input or publication.

pub mod component;
pub mod components;
pub mod countdown;
pub mod event;
pub mod plain;
mod ui;

use log::{debug, info};
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use tokio::task::JoinHandle;

use crate::core::clock::Clock;
use crate::core::config::ToastConfig;
use crate::core::model::Catalog;
use crate::core::published::Subscriber;
use crate::core::store::EventStore;
use crate::tui::component::EventHandler;
use crate::tui::components::{EventListState, ListEvent, Toast, ToastKind};
use crate::tui::countdown::{starting_between, starting_now_message};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const TICK: Duration = Duration::from_millis(250);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub event_list: EventListState,
    pub toast: Option<Toast>,
    pub toast_config: ToastConfig,
    pub is_loading: bool,
}

impl TuiState {
    pub fn new(toast_config: ToastConfig) -> Self {
        Self {
            event_list: EventListState::new(),
            toast: None,
            toast_config,
            is_loading: false,
        }
    }

    fn show_toast(&mut self, message: String, kind: ToastKind) {
        if !message.is_empty() {
            self.toast = Some(Toast::new(message, kind));
        }
    }

    /// Toasts every listed event whose start fell in `(previous, now]`.
    fn announce_starts(&mut self, previous: DateTime<Utc>, now: DateTime<Utc>) {
        for name in starting_between(self.event_list.sports(), previous, now) {
            info!("Event starting now: {}", name);
            self.show_toast(starting_now_message(&name), ToastKind::Info);
        }
    }

    fn expire_toast(&mut self, now: Instant) {
        if self
            .toast
            .as_ref()
            .is_some_and(|toast| toast.is_expired(&self.toast_config, now))
        {
            self.toast = None;
        }
    }
}

/// The three store channels, polled once per frame.
struct Subscriptions {
    sports: Subscriber<Catalog>,
    favorite_message: Subscriber<String>,
    fetch_error: Subscriber<String>,
}

impl Subscriptions {
    fn new(store: &EventStore) -> Self {
        Self {
            sports: store.subscribe_sports(),
            favorite_message: store.subscribe_favorite_message(),
            fetch_error: store.subscribe_fetch_error(),
        }
    }

    /// Applies any new publications.
    fn drain_into(&mut self, tui: &mut TuiState) {
        if let Some(sports) = self.sports.try_next() {
            tui.event_list.set_sports(sports);
        }
        if let Some(message) = self.favorite_message.try_next() {
            tui.show_toast(message, ToastKind::Info);
        }
        if let Some(error) = self.fetch_error.try_next() {
            tui.show_toast(error, ToastKind::Error);
        }
    }
}

fn spawn_refresh(store: &Arc<EventStore>) -> JoinHandle<()> {
    let store = store.clone();
    tokio::spawn(async move { store.refresh().await })
}

pub fn run(
    store: Arc<EventStore>,
    clock: Arc<dyn Clock>,
    toast_config: ToastConfig,
) -> std::io::Result<()> {
    let mut tui = TuiState::new(toast_config);
    let mut subscriptions = Subscriptions::new(&store);
    tui.event_list.set_sports(store.sports());

    let mut terminal = ratatui::init();
    info!("TUI started");

    let mut refresh_task = Some(spawn_refresh(&store));
    let mut last_tick = clock.now();

    let result = loop {
        subscriptions.drain_into(&mut tui);
        tui.is_loading = refresh_task.as_ref().is_some_and(|task| !task.is_finished());

        let now = clock.now();
        tui.announce_starts(last_tick, now);
        last_tick = now;
        tui.expire_toast(Instant::now());

        if let Err(e) = terminal.draw(|f| ui::draw_ui(f, &mut tui, now)) {
            break Err(e);
        }

        let first_event = poll_event_timeout(TICK);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match event {
                TuiEvent::Quit => should_quit = true,
                TuiEvent::Refresh => {
                    debug!("Refresh requested");
                    refresh_task = Some(spawn_refresh(&store));
                }
                TuiEvent::Resize => {}
                other => {
                    if let Some(ListEvent::ToggleFavorite { sport_id, event_id }) =
                        tui.event_list.handle_event(&other)
                    {
                        store.toggle_favorite(sport_id, &event_id);
                        // Reflect the new order before the next key press.
                        subscriptions.drain_into(&mut tui);
                    }
                }
            }
        }

        if should_quit {
            break Ok(());
        }
    };

    ratatui::restore();
    info!("TUI stopped");
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::SportId;
    use crate::test_support::{event_at, sport};

    #[test]
    fn test_event_crossing_its_start_time_is_toasted() {
        let start = DateTime::from_timestamp(1_760_000_000, 0).unwrap();
        let second = chrono::Duration::seconds(1);
        let mut tui = TuiState::new(ToastConfig::default());
        tui.event_list.set_sports(vec![sport(
            "Basketball",
            SportId::Basketball,
            vec![event_at("Lakers", SportId::Basketball, start)],
        )]);

        tui.announce_starts(start - second * 2, start - second);
        assert!(tui.toast.is_none());

        tui.announce_starts(start - second, start);
        let toast = tui.toast.take().unwrap();
        assert_eq!(toast.message, "The event Lakers-Away is starting now");
        assert_eq!(toast.kind, ToastKind::Info);

        tui.announce_starts(start, start + second);
        assert!(tui.toast.is_none());
    }
}
