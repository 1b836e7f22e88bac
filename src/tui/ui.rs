use chrono::{DateTime, Utc};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

use crate::core::config::ToastPosition;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{EventList, TitleBar, ToastView};

const KEY_HINTS: &str = "↑/↓ move · Enter favorite/collapse · r refresh · q quit";

pub fn draw_ui(frame: &mut Frame, tui: &mut TuiState, now: DateTime<Utc>) {
    use Constraint::{Length, Min};

    let (title_area, main_area, toast_area) = match tui.toast_config.position {
        ToastPosition::Top => {
            let [title, toast, main] = Layout::vertical([Length(1), Length(1), Min(0)]).areas(frame.area());
            (title, main, toast)
        }
        ToastPosition::Bottom => {
            let [title, main, toast] = Layout::vertical([Length(1), Min(0), Length(1)]).areas(frame.area());
            (title, main, toast)
        }
    };

    let sports = tui.event_list.sports();
    TitleBar {
        sport_count: sports.len(),
        event_count: sports.iter().map(|s| s.active_events.len()).sum(),
        is_loading: tui.is_loading,
    }
    .render(frame, title_area);

    EventList {
        state: &mut tui.event_list,
        now,
    }
    .render(frame, main_area);

    if tui.toast.is_some() {
        ToastView {
            toast: tui.toast.as_ref(),
        }
        .render(frame, toast_area);
    } else {
        let hints = Span::styled(KEY_HINTS, Style::default().add_modifier(Modifier::DIM));
        frame.render_widget(hints, toast_area);
    }
}
