//! # EventList Component
//!
//! The main scrolling area: one collapsible section per sport, one row per
//! event.
//!
//! ```text
//! ▾ 🏀 Basketball (2)
//!     ★ Lakers  vs  Celtics        00:42:10
//!     ☆ Bulls   vs  Heat           05:00:00
//! ▸ 🎾 Tennis (4)
//! ```
//!
//! The list only ever holds the derived catalog it was last handed. It never
//! changes a favorite itself; activating an event row emits
//! [`ListEvent::ToggleFavorite`] and the caller forwards it to the store.
//!
//! Selection follows identity across updates: after a toggle moves an event to
//! the top of its section, the cursor moves with it.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState};

use crate::core::model::{Catalog, Event, SportId};
use crate::tui::component::{Component, EventHandler};
use crate::tui::countdown::{Countdown, teams};
use crate::tui::event::TuiEvent;

const PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row {
    Header { section: usize },
    Event { section: usize, index: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEvent {
    ToggleFavorite { sport_id: SportId, event_id: String },
}

/// What the cursor points at, independent of row positions.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Selection {
    Section(usize),
    Event(SportId, String),
}

pub struct EventListState {
    sports: Catalog,
    collapsed: HashSet<usize>,
    rows: Vec<Row>,
    list_state: ListState,
}

impl EventListState {
    pub fn new() -> Self {
        Self {
            sports: Catalog::new(),
            collapsed: HashSet::new(),
            rows: Vec::new(),
            list_state: ListState::default(),
        }
    }

    pub fn sports(&self) -> &Catalog {
        &self.sports
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    pub fn is_collapsed(&self, section: usize) -> bool {
        self.collapsed.contains(&section)
    }

    /// Replaces the displayed catalog, keeping the cursor on the same
    /// section or event when it still exists.
    pub fn set_sports(&mut self, sports: Catalog) {
        let selection = self.current_selection();
        self.sports = sports;
        self.collapsed.retain(|section| *section < self.sports.len());
        self.rebuild_rows();
        self.restore_selection(selection);
    }

    fn rebuild_rows(&mut self) {
        self.rows = build_rows(&self.sports, &self.collapsed);
    }

    fn current_selection(&self) -> Option<Selection> {
        let row = *self.rows.get(self.list_state.selected()?)?;
        match row {
            Row::Header { section } => Some(Selection::Section(section)),
            Row::Event { section, index } => {
                let event = self.event_at(section, index)?;
                Some(Selection::Event(event.sport_id, event.event_id.clone()))
            }
        }
    }

    fn restore_selection(&mut self, selection: Option<Selection>) {
        if self.rows.is_empty() {
            self.list_state.select(None);
            return;
        }
        let found = selection.and_then(|selection| {
            self.rows.iter().position(|row| match (&selection, row) {
                (Selection::Section(s), Row::Header { section }) => s == section,
                (Selection::Event(sport_id, event_id), Row::Event { section, index }) => self
                    .event_at(*section, *index)
                    .is_some_and(|e| e.is(*sport_id, event_id)),
                _ => false,
            })
        });
        let fallback = self
            .list_state
            .selected()
            .unwrap_or(0)
            .min(self.rows.len() - 1);
        self.list_state.select(Some(found.unwrap_or(fallback)));
    }

    fn event_at(&self, section: usize, index: usize) -> Option<&Event> {
        self.sports.get(section)?.active_events.get(index)
    }

    fn move_by(&mut self, delta: isize) {
        if self.rows.is_empty() {
            return;
        }
        let last = self.rows.len() - 1;
        let current = self.list_state.selected().unwrap_or(0);
        let next = current.saturating_add_signed(delta).min(last);
        self.list_state.select(Some(next));
    }

    fn toggle_collapse(&mut self, section: usize) {
        if !self.collapsed.remove(&section) {
            self.collapsed.insert(section);
        }
        let selection = Some(Selection::Section(section));
        self.rebuild_rows();
        self.restore_selection(selection);
    }
}

impl Default for EventListState {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for EventListState {
    type Event = ListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<ListEvent> {
        match event {
            TuiEvent::Up => self.move_by(-1),
            TuiEvent::Down => self.move_by(1),
            TuiEvent::PageUp => self.move_by(-(PAGE_SIZE as isize)),
            TuiEvent::PageDown => self.move_by(PAGE_SIZE as isize),
            TuiEvent::Home => self.move_by(isize::MIN),
            TuiEvent::End => self.move_by(isize::MAX),
            TuiEvent::Activate => {
                let row = *self.rows.get(self.list_state.selected()?)?;
                match row {
                    Row::Header { section } => self.toggle_collapse(section),
                    Row::Event { section, index } => {
                        let event = self.event_at(section, index)?;
                        return Some(ListEvent::ToggleFavorite {
                            sport_id: event.sport_id,
                            event_id: event.event_id.clone(),
                        });
                    }
                }
            }
            _ => {}
        }
        None
    }
}

/// Headers for every sport; event rows only under expanded sections.
pub fn build_rows(sports: &Catalog, collapsed: &HashSet<usize>) -> Vec<Row> {
    let mut rows = Vec::new();
    for (section, sport) in sports.iter().enumerate() {
        rows.push(Row::Header { section });
        if collapsed.contains(&section) {
            continue;
        }
        rows.extend((0..sport.active_events.len()).map(|index| Row::Event { section, index }));
    }
    rows
}

/// Renders the list. Props: the list state and the instant countdowns are
/// measured from.
pub struct EventList<'a> {
    pub state: &'a mut EventListState,
    pub now: DateTime<Utc>,
}

impl Component for EventList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .state
            .rows
            .iter()
            .filter_map(|row| match *row {
                Row::Header { section } => {
                    let sport = self.state.sports.get(section)?;
                    Some(header_item(
                        sport.sport_id,
                        &sport.sport_name,
                        sport.active_events.len(),
                        self.state.is_collapsed(section),
                    ))
                }
                Row::Event { section, index } => {
                    let event = self.state.event_at(section, index)?;
                    Some(event_item(event, self.now))
                }
            })
            .collect();

        let title = if self.state.sports.is_empty() {
            "Sports Events (press r to load)"
        } else {
            "Sports Events"
        };
        let list = List::new(items)
            .block(Block::bordered().title(title))
            .highlight_style(Style::default().bg(Color::DarkGray));

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

fn header_item(sport_id: SportId, name: &str, count: usize, collapsed: bool) -> ListItem<'static> {
    let marker = if collapsed { "▸" } else { "▾" };
    ListItem::new(Line::from(Span::styled(
        format!("{marker} {} {name} ({count})", sport_id.emoji()),
        Style::default().add_modifier(Modifier::BOLD),
    )))
}

fn event_item(event: &Event, now: DateTime<Utc>) -> ListItem<'static> {
    let (star, star_style) = if event.is_favorite {
        ("★", Style::default().fg(Color::Yellow))
    } else {
        ("☆", Style::default().fg(Color::Gray))
    };

    let name = match teams(&event.event_name) {
        (home, Some(away)) => format!("{home}  vs  {away}"),
        (raw, None) => raw,
    };

    let countdown = Countdown::until(event.start_time, now);
    let countdown_style = if countdown.is_soon() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Gray)
    };

    ListItem::new(Line::from(vec![
        Span::raw("    "),
        Span::styled(star, star_style),
        Span::raw(format!(" {name:<40} ")),
        Span::styled(countdown.label(), countdown_style),
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{event_at, sport};

    fn now() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap()
    }

    fn catalog() -> Catalog {
        vec![
            sport(
                "Basketball",
                SportId::Basketball,
                vec![
                    event_at("E1", SportId::Basketball, now()),
                    event_at("E2", SportId::Basketball, now()),
                ],
            ),
            sport("Tennis", SportId::Tennis, vec![event_at("T1", SportId::Tennis, now())]),
        ]
    }

    fn loaded() -> EventListState {
        let mut state = EventListState::new();
        state.set_sports(catalog());
        state
    }

    #[test]
    fn test_rows_include_headers_and_events() {
        let state = loaded();
        assert_eq!(
            state.rows(),
            &[
                Row::Header { section: 0 },
                Row::Event { section: 0, index: 0 },
                Row::Event { section: 0, index: 1 },
                Row::Header { section: 1 },
                Row::Event { section: 1, index: 0 },
            ]
        );
        assert_eq!(state.selected(), Some(0));
    }

    #[test]
    fn test_activate_header_collapses_section() {
        let mut state = loaded();
        assert_eq!(state.handle_event(&TuiEvent::Activate), None);
        assert!(state.is_collapsed(0));
        assert_eq!(state.rows().len(), 3);
        assert_eq!(state.selected(), Some(0));

        state.handle_event(&TuiEvent::Activate);
        assert!(!state.is_collapsed(0));
        assert_eq!(state.rows().len(), 5);
    }

    #[test]
    fn test_activate_event_emits_toggle() {
        let mut state = loaded();
        state.handle_event(&TuiEvent::Down);
        state.handle_event(&TuiEvent::Down);
        assert_eq!(
            state.handle_event(&TuiEvent::Activate),
            Some(ListEvent::ToggleFavorite {
                sport_id: SportId::Basketball,
                event_id: "E2".to_string(),
            })
        );
    }

    #[test]
    fn test_selection_follows_event_after_reorder() {
        let mut state = loaded();
        state.handle_event(&TuiEvent::Down);
        state.handle_event(&TuiEvent::Down); // E2

        let mut reordered = catalog();
        reordered[0].active_events.swap(0, 1);
        reordered[0].active_events[0].is_favorite = true;
        state.set_sports(reordered);

        assert_eq!(state.selected(), Some(1));
    }

    #[test]
    fn test_movement_is_clamped() {
        let mut state = loaded();
        state.handle_event(&TuiEvent::Up);
        assert_eq!(state.selected(), Some(0));
        state.handle_event(&TuiEvent::End);
        assert_eq!(state.selected(), Some(4));
        state.handle_event(&TuiEvent::PageDown);
        assert_eq!(state.selected(), Some(4));
        state.handle_event(&TuiEvent::Home);
        assert_eq!(state.selected(), Some(0));
    }

    #[test]
    fn test_empty_catalog_has_no_selection() {
        let mut state = loaded();
        state.set_sports(Catalog::new());
        assert!(state.rows().is_empty());
        assert_eq!(state.selected(), None);
        assert_eq!(state.handle_event(&TuiEvent::Activate), None);
    }
}
