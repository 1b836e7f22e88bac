//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::core::clock::Clock;
use crate::core::model::{Catalog, Event, Sport, SportId};
use crate::core::service::EventsApi;
use crate::network::{NetworkError, NetworkRequest, RawResponse, Transport, TransportError};

/// A transport that replays scripted responses in order and records every
/// request it was asked to send.
pub struct FakeTransport {
    responses: Mutex<VecDeque<Result<RawResponse, TransportError>>>,
    requests: Mutex<Vec<NetworkRequest>>,
}

impl FakeTransport {
    pub fn new(responses: Vec<Result<RawResponse, TransportError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<NetworkRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn execute(&self, request: &NetworkRequest) -> Result<RawResponse, TransportError> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Other("no scripted response".into())))
    }
}

/// An API that hands out queued fetch results.
pub struct StubApi {
    results: Mutex<VecDeque<Result<Catalog, NetworkError>>>,
    calls: AtomicUsize,
}

impl StubApi {
    pub fn new(results: Vec<Result<Catalog, NetworkError>>) -> Self {
        Self {
            results: Mutex::new(results.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EventsApi for StubApi {
    async fn fetch_catalog(&self) -> Result<Catalog, NetworkError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(NetworkError::UnknownGenericError("no stubbed result".into())))
    }
}

/// A clock stuck at one instant.
pub struct FixedClock {
    now: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}

/// A non-favorite event named `"<id>-Away"`.
pub fn event_at(id: &str, sport_id: SportId, start: DateTime<Utc>) -> Event {
    Event::new(id, format!("{id}-Away"), sport_id, start)
}

pub fn sport(name: &str, sport_id: SportId, events: Vec<Event>) -> Sport {
    Sport {
        sport_name: name.to_string(),
        sport_id,
        active_events: events,
    }
}
