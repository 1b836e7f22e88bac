//! # Toast Component
//!
//! A one-line transient message for favorite changes, events starting and
//! fetch errors.
//! Style and lifetime come from the [`ToastConfig`] handed in at startup.

use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;

use crate::core::config::ToastConfig;
use crate::tui::component::Component;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    shown_at: Instant,
}

impl Toast {
    pub fn new(message: String, kind: ToastKind) -> Self {
        Self {
            message,
            kind,
            shown_at: Instant::now(),
        }
    }

    pub fn is_expired(&self, config: &ToastConfig, now: Instant) -> bool {
        now.duration_since(self.shown_at) >= config.duration
    }
}

/// Renders the current toast, if any.
pub struct ToastView<'a> {
    pub toast: Option<&'a Toast>,
}

impl Component for ToastView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let Some(toast) = self.toast else {
            return;
        };
        let style = match toast.kind {
            ToastKind::Info => Style::default().fg(Color::White).bg(Color::DarkGray),
            ToastKind::Error => Style::default().fg(Color::White).bg(Color::Red),
        };
        let paragraph = Paragraph::new(toast.message.as_str())
            .style(style)
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_toast_expires_after_configured_duration() {
        let config = ToastConfig {
            duration: Duration::from_millis(500),
            ..Default::default()
        };
        let toast = Toast::new("Event added to favorite!".into(), ToastKind::Info);
        assert!(!toast.is_expired(&config, toast.shown_at));
        assert!(toast.is_expired(&config, toast.shown_at + Duration::from_millis(500)));
    }
}
