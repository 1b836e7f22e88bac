//! # TitleBar Component
//!
//! Top status line: app name, how many events are visible, and whether a
//! refresh is in flight.
//!
//! ```text
//! Sports Events | 3 sports, 42 events | Refreshing...
//! ```

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

/// Props-only component; it has no state of its own.
pub struct TitleBar {
    pub sport_count: usize,
    pub event_count: usize,
    pub is_loading: bool,
}

impl TitleBar {
    pub fn title_text(&self) -> String {
        let mut text = format!(
            "Sports Events | {} sports, {} events",
            self.sport_count, self.event_count
        );
        if self.is_loading {
            text.push_str(" | Refreshing...");
        }
        text
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let span = Span::styled(self.title_text(), Style::default().add_modifier(Modifier::BOLD));
        frame.render_widget(span, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_text() {
        let bar = TitleBar {
            sport_count: 2,
            event_count: 5,
            is_loading: false,
        };
        assert_eq!(bar.title_text(), "Sports Events | 2 sports, 5 events");

        let bar = TitleBar {
            is_loading: true,
            ..bar
        };
        assert!(bar.title_text().ends_with("| Refreshing..."));
    }
}
