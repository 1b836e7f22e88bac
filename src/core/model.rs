//! # Catalog Model
//!
//! Sports and their events, with the compact wire names the feed uses:
//!
//! ```text
//! [ { "d": sportName, "i": SPORT_ID, "e": [
//!       { "i": eventId, "d": "TeamA-TeamB", "si": SPORT_ID, "tt": epochSeconds }
//! ] } ]
//! ```
//!
//! Decoding is all-or-nothing: one bad event (unknown sport code, missing
//! field, out-of-range timestamp) fails the whole catalog.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Closed set of sports the feed may contain. Unknown codes fail decoding.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SportId {
    #[serde(rename = "BASK")]
    Basketball,
    #[serde(rename = "DART")]
    Darts,
    #[serde(rename = "ESPS")]
    ESports,
    #[serde(rename = "FOOT")]
    Football,
    #[serde(rename = "FUTS")]
    Futsal,
    #[serde(rename = "HAND")]
    Handball,
    #[serde(rename = "ICEH")]
    IceHockey,
    #[serde(rename = "SNOO")]
    Snooker,
    #[serde(rename = "TABL")]
    TableTennis,
    #[serde(rename = "TENN")]
    Tennis,
    #[serde(rename = "VOLL")]
    Volleyball,
}

impl SportId {
    pub const ALL: [SportId; 11] = [
        SportId::Basketball,
        SportId::Darts,
        SportId::ESports,
        SportId::Football,
        SportId::Futsal,
        SportId::Handball,
        SportId::IceHockey,
        SportId::Snooker,
        SportId::TableTennis,
        SportId::Tennis,
        SportId::Volleyball,
    ];

    /// The four-letter code used on the wire.
    pub fn code(self) -> &'static str {
        match self {
            SportId::Basketball => "BASK",
            SportId::Darts => "DART",
            SportId::ESports => "ESPS",
            SportId::Football => "FOOT",
            SportId::Futsal => "FUTS",
            SportId::Handball => "HAND",
            SportId::IceHockey => "ICEH",
            SportId::Snooker => "SNOO",
            SportId::TableTennis => "TABL",
            SportId::Tennis => "TENN",
            SportId::Volleyball => "VOLL",
        }
    }

    /// Section icon shown next to the sport name.
    pub fn emoji(self) -> &'static str {
        match self {
            SportId::Basketball => "🏀",
            SportId::Darts => "🎯",
            SportId::ESports => "🎮",
            SportId::Football | SportId::Futsal => "⚽",
            SportId::Handball => "🤾",
            SportId::IceHockey => "🏒",
            SportId::Snooker => "🎱",
            SportId::TableTennis => "🏓",
            SportId::Tennis => "🎾",
            SportId::Volleyball => "🏐",
        }
    }
}

impl fmt::Display for SportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One scheduled match. `is_favorite` is client-side only and never on the wire.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Event {
    #[serde(rename = "i")]
    pub event_id: String,
    #[serde(rename = "d")]
    pub event_name: String,
    #[serde(rename = "si")]
    pub sport_id: SportId,
    #[serde(rename = "tt", with = "chrono::serde::ts_seconds")]
    pub start_time: DateTime<Utc>,
    #[serde(skip)]
    pub is_favorite: bool,
}

impl Event {
    pub fn new(
        event_id: impl Into<String>,
        event_name: impl Into<String>,
        sport_id: SportId,
        start_time: DateTime<Utc>,
    ) -> Self {
        Self {
            event_id: event_id.into(),
            event_name: event_name.into(),
            sport_id,
            start_time,
            is_favorite: false,
        }
    }

    /// Wire representation of `start_time`.
    pub fn start_time_unix(&self) -> i64 {
        self.start_time.timestamp()
    }

    /// True if this event is the one identified by `(sport_id, event_id)`.
    pub fn is(&self, sport_id: SportId, event_id: &str) -> bool {
        self.sport_id == sport_id && self.event_id == event_id
    }
}

/// A named group of events. Every event is expected to share the sport's
/// `sport_id`; decoding doesn't enforce it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Sport {
    #[serde(rename = "d")]
    pub sport_name: String,
    #[serde(rename = "i")]
    pub sport_id: SportId,
    #[serde(rename = "e")]
    pub active_events: Vec<Event>,
}

/// The whole feed, in the order received.
pub type Catalog = Vec<Sport>;

#[cfg(test)]
mod tests {
    use super::*;

    const FEED: &str = r#"[
        {"d": "Basketball", "i": "BASK", "e": [
            {"i": "100", "d": "Lakers-Celtics", "si": "BASK", "tt": 1729000000},
            {"i": "101", "d": "Bulls-Heat", "si": "BASK", "tt": 1729003600}
        ]},
        {"d": "Tennis", "i": "TENN", "e": []}
    ]"#;

    #[test]
    fn test_decodes_wire_format() {
        let catalog: Catalog = serde_json::from_str(FEED).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[0].sport_name, "Basketball");
        assert_eq!(catalog[0].sport_id, SportId::Basketball);
        assert_eq!(catalog[0].active_events.len(), 2);

        let event = &catalog[0].active_events[0];
        assert_eq!(event.event_id, "100");
        assert_eq!(event.event_name, "Lakers-Celtics");
        assert_eq!(event.start_time_unix(), 1729000000);
        assert!(!event.is_favorite);
        assert!(catalog[1].active_events.is_empty());
    }

    #[test]
    fn test_unknown_sport_code_fails_whole_catalog() {
        let feed = r#"[{"d": "Curling", "i": "BASK", "e": [
            {"i": "1", "d": "A-B", "si": "XXXX", "tt": 0}
        ]}]"#;
        assert!(serde_json::from_str::<Catalog>(feed).is_err());
    }

    #[test]
    fn test_every_code_round_trips() {
        for id in SportId::ALL {
            let json = serde_json::to_string(&id).unwrap();
            assert_eq!(json, format!("\"{}\"", id.code()));
            let back: SportId = serde_json::from_str(&json).unwrap();
            assert_eq!(back, id);
        }
    }

    #[test]
    fn test_favorite_flag_is_not_serialized() {
        let mut event = Event::new(
            "7",
            "A-B",
            SportId::Darts,
            DateTime::from_timestamp(60, 0).unwrap(),
        );
        event.is_favorite = true;
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"i": "7", "d": "A-B", "si": "DART", "tt": 60})
        );
    }

    #[test]
    fn test_identity_is_sport_and_event_id() {
        let event = Event::new("9", "X-Y", SportId::Tennis, Utc::now());
        assert!(event.is(SportId::Tennis, "9"));
        assert!(!event.is(SportId::Tennis, "8"));
        assert!(!event.is(SportId::Volleyball, "9"));
    }
}
