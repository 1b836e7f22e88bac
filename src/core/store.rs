//! # Event Store
//!
//! Owns the catalog and everything derived from it.
//!
//! ```text
//! EventStore
//! ├── canonical: Catalog          // last successful fetch, favorites overlaid
//! ├── sports: Published<Catalog>  // derived view: filtered + favorites first
//! ├── favorite_message: Published<String>
//! └── fetch_error: Published<String>
//! ```
//!
//! Readers only ever see the derived view. The only write path into the
//! catalog is [`EventStore::toggle_favorite`]; everything else flows in through
//! [`EventStore::refresh`].
//!
//! ## Concurrency
//!
//! Every read-modify-publish sequence runs under one mutex, so concurrent
//! toggles don't lose updates. Refreshes are not deduplicated: the fetch runs
//! without the lock and two overlapping refreshes both apply, last writer wins.
//! There is no cancellation; a caller that stops caring just ignores the
//! publication.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Duration, Utc};
use log::{debug, info};

use crate::core::clock::Clock;
use crate::core::model::{Catalog, Event, SportId};
use crate::core::published::{Published, Subscriber};
use crate::core::service::EventsApi;

pub const FAVORITE_ADDED_MESSAGE: &str = "Event added to favorite!";
pub const FAVORITE_REMOVED_MESSAGE: &str = "Event removed from favorite!";

/// Events that started longer ago than this are hidden from the view.
pub fn stale_window() -> Duration {
    Duration::hours(24)
}

#[derive(Default)]
struct StoreState {
    canonical: Catalog,
}

pub struct EventStore {
    api: Arc<dyn EventsApi>,
    clock: Arc<dyn Clock>,
    state: Mutex<StoreState>,
    sports: Published<Catalog>,
    favorite_message: Published<String>,
    fetch_error: Published<String>,
}

impl EventStore {
    pub fn new(api: Arc<dyn EventsApi>, clock: Arc<dyn Clock>) -> Self {
        Self {
            api,
            clock,
            state: Mutex::new(StoreState::default()),
            sports: Published::default(),
            favorite_message: Published::default(),
            fetch_error: Published::default(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, StoreState> {
        // State is replaced wholesale, never left half-written, so a poisoned
        // lock still holds a consistent catalog.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Fetches the catalog and, on success, replaces the canonical catalog
    /// (carrying favorites forward) and republishes the view. On failure the
    /// catalogs stay as they were and the error text is published.
    pub async fn refresh(&self) {
        let result = self.api.fetch_catalog().await;

        let mut state = self.lock();
        match result {
            Ok(fetched) => {
                let canonical = carry_forward_favorites(&state.canonical, fetched);
                let derived = recompute(&canonical, self.clock.now());
                state.canonical = canonical;
                info!(
                    "Catalog refreshed: {} sports, {} events visible",
                    derived.len(),
                    derived.iter().map(|s| s.active_events.len()).sum::<usize>()
                );
                self.sports.publish(derived);
                self.fetch_error.publish(String::new());
            }
            Err(e) => {
                info!("Catalog refresh failed: {}", e);
                self.fetch_error.publish(e.message());
            }
        }
    }

    /// Flips the favorite flag of `(sport_id, event_id)`.
    ///
    /// The event is looked up in the published view; an event that isn't
    /// there (stale index, filtered out, never fetched) is ignored.
    pub fn toggle_favorite(&self, sport_id: SportId, event_id: &str) {
        let mut state = self.lock();

        let visible = self.sports.with_latest(|sports| {
            sports
                .iter()
                .flat_map(|sport| sport.active_events.iter())
                .any(|event| event.is(sport_id, event_id))
        });
        if !visible {
            debug!("toggle_favorite: {sport_id}/{event_id} not in view, ignoring");
            return;
        }

        let Some(event) = find_event_mut(&mut state.canonical, sport_id, event_id) else {
            debug!("toggle_favorite: {sport_id}/{event_id} not in catalog, ignoring");
            return;
        };
        event.is_favorite = !event.is_favorite;
        let message = if event.is_favorite {
            FAVORITE_ADDED_MESSAGE
        } else {
            FAVORITE_REMOVED_MESSAGE
        };
        debug!("toggle_favorite: {sport_id}/{event_id} -> {}", event.is_favorite);

        self.favorite_message.publish(message.to_string());
        let derived = recompute(&state.canonical, self.clock.now());
        self.sports.publish(derived);
    }

    /// The derived catalog currently published.
    pub fn sports(&self) -> Catalog {
        self.sports.latest()
    }

    /// The full catalog, including events hidden from the view.
    pub fn canonical(&self) -> Catalog {
        self.lock().canonical.clone()
    }

    pub fn favorite_message(&self) -> String {
        self.favorite_message.latest()
    }

    pub fn fetch_error(&self) -> String {
        self.fetch_error.latest()
    }

    pub fn subscribe_sports(&self) -> Subscriber<Catalog> {
        self.sports.subscribe()
    }

    pub fn subscribe_favorite_message(&self) -> Subscriber<String> {
        self.favorite_message.subscribe()
    }

    pub fn subscribe_fetch_error(&self) -> Subscriber<String> {
        self.fetch_error.subscribe()
    }
}

fn find_event_mut<'a>(
    catalog: &'a mut Catalog,
    sport_id: SportId,
    event_id: &str,
) -> Option<&'a mut Event> {
    catalog
        .iter_mut()
        .flat_map(|sport| sport.active_events.iter_mut())
        .find(|event| event.is(sport_id, event_id))
}

/// Returns `fetched` with favorite flags copied over from `previous` for every
/// event whose `(sport_id, event_id)` appears in both.
pub fn carry_forward_favorites(previous: &Catalog, mut fetched: Catalog) -> Catalog {
    let favorites: Vec<(SportId, &str)> = previous
        .iter()
        .flat_map(|sport| sport.active_events.iter())
        .filter(|event| event.is_favorite)
        .map(|event| (event.sport_id, event.event_id.as_str()))
        .collect();

    for event in fetched.iter_mut().flat_map(|sport| sport.active_events.iter_mut()) {
        if favorites
            .iter()
            .any(|(sport_id, event_id)| event.is(*sport_id, event_id))
        {
            event.is_favorite = true;
        }
    }
    fetched
}

/// Derives the view from the canonical catalog.
///
/// Per sport: drop events that started more than 24 hours before `now`, then
/// move favorites to the front keeping the relative order inside both groups.
/// Sport order is kept and sports left with no events stay in the view.
pub fn recompute(canonical: &Catalog, now: DateTime<Utc>) -> Catalog {
    let cutoff = now - stale_window();
    canonical
        .iter()
        .map(|sport| {
            let (mut events, rest): (Vec<Event>, Vec<Event>) = sport
                .active_events
                .iter()
                .filter(|event| event.start_time >= cutoff)
                .cloned()
                .partition(|event| event.is_favorite);
            events.extend(rest);

            let mut derived = sport.clone();
            derived.active_events = events;
            derived
        })
        .collect()
}
