//! Non-interactive output for `--plain`: the derived catalog as text.

use std::fmt::Write;

use chrono::{DateTime, Utc};

use crate::core::model::Catalog;
use crate::tui::countdown::{Countdown, teams};

pub fn render_plain(sports: &Catalog, now: DateTime<Utc>) -> String {
    let mut out = String::new();
    for sport in sports {
        let _ = writeln!(
            out,
            "{} {} ({})",
            sport.sport_id.emoji(),
            sport.sport_name,
            sport.active_events.len()
        );
        for event in &sport.active_events {
            let star = if event.is_favorite { "★" } else { "☆" };
            let name = match teams(&event.event_name) {
                (home, Some(away)) => format!("{home} vs {away}"),
                (raw, None) => raw,
            };
            let countdown = Countdown::until(event.start_time, now).label();
            let _ = writeln!(out, "  {star} {name} [{countdown}]");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::SportId;
    use crate::test_support::{event_at, sport};
    use chrono::Duration;

    #[test]
    fn test_render_plain() {
        let now = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let mut fav = event_at("Lakers", SportId::Basketball, now + Duration::seconds(3661));
        fav.is_favorite = true;
        let catalog = vec![
            sport("Basketball", SportId::Basketball, vec![fav]),
            sport("Tennis", SportId::Tennis, Vec::new()),
        ];

        let text = render_plain(&catalog, now);
        assert_eq!(
            text,
            "🏀 Basketball (1)\n  ★ Lakers vs Away [01:01:01]\n🎾 Tennis (0)\n"
        );
    }
}
