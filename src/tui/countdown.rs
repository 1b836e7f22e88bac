//! Display helpers for a single event cell: the countdown label and the team
//! names. Pure functions of their inputs, so the render code stays dumb.

use chrono::{DateTime, Utc};

use crate::core::model::Catalog;

/// How long after kick-off an event still reads as "on going".
const ONGOING_GRACE_SECS: i64 = 90;
/// Under this many hours to go, the countdown is highlighted.
const SOON_HOURS: i64 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Countdown {
    Remaining { hours: i64, minutes: i64, seconds: i64 },
    Ongoing,
    EarlyToday,
}

impl Countdown {
    pub fn until(start: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let delta = (start - now).num_seconds();
        if delta > 0 {
            Countdown::Remaining {
                hours: delta / 3600,
                minutes: (delta % 3600) / 60,
                seconds: delta % 60,
            }
        } else if delta > -ONGOING_GRACE_SECS {
            Countdown::Ongoing
        } else {
            Countdown::EarlyToday
        }
    }

    pub fn label(&self) -> String {
        match self {
            Countdown::Remaining {
                hours,
                minutes,
                seconds,
            } => format!("{hours:02}:{minutes:02}:{seconds:02}"),
            Countdown::Ongoing => "on going".to_string(),
            Countdown::EarlyToday => "early today".to_string(),
        }
    }

    /// True while the event is less than two hours away.
    pub fn is_soon(&self) -> bool {
        matches!(self, Countdown::Remaining { hours, .. } if *hours < SOON_HOURS)
    }
}

/// Names of events whose start time was crossed between two ticks, i.e.
/// `previous < start_time <= now`, in catalog order.
pub fn starting_between(
    sports: &Catalog,
    previous: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Vec<String> {
    sports
        .iter()
        .flat_map(|sport| sport.active_events.iter())
        .filter(|event| previous < event.start_time && event.start_time <= now)
        .map(|event| event.event_name.clone())
        .collect()
}

pub fn starting_now_message(event_name: &str) -> String {
    format!("The event {event_name} is starting now")
}

/// Splits `"Home-Away"` into two team names. Anything that isn't exactly two
/// non-empty parts is shown as the raw name.
pub fn teams(event_name: &str) -> (String, Option<String>) {
    let parts: Vec<&str> = event_name.split('-').map(str::trim).collect();
    match parts.as_slice() {
        [home, away] if !home.is_empty() && !away.is_empty() => {
            (home.to_string(), Some(away.to_string()))
        }
        _ => (event_name.trim().to_string(), None),
    }
}
