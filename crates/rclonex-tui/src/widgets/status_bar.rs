//! Status bar widget
//!
//! Key hints for the current mode and page, plus the load status.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use rclonex_app::state::{AppState, Page, UiMode};

use crate::theme::styles;

pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// `(key, description)` pairs for the current mode
    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        match (self.state.ui_mode, self.state.page) {
            (UiMode::SearchInput, _) => &[("Enter", "keep"), ("Esc", "clear"), ("↑↓", "move")],
            (UiMode::RemoteForm, _) | (UiMode::ConfirmDialog, _) | (UiMode::Login, _) => &[],
            (UiMode::Normal, Page::Dashboard) => &[
                ("Tab", "page"),
                ("r", "reload"),
                ("a", "add"),
                ("/", "search"),
                ("L", "logout"),
                ("q", "quit"),
            ],
            (UiMode::Normal, Page::Remotes) => &[
                ("j/k", "move"),
                ("a", "add"),
                ("e", "edit"),
                ("d", "delete"),
                ("t", "test"),
                ("/", "search"),
                ("r", "reload"),
                ("q", "quit"),
            ],
        }
    }

    fn load_status(&self) -> Span<'static> {
        if self.state.loading {
            return Span::styled("↻ loading ", styles::status_yellow());
        }
        match self.state.loaded_at {
            Some(at) => Span::styled(
                format!("loaded {} ", at.format("%H:%M:%S")),
                styles::text_muted(),
            ),
            None => Span::raw(""),
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::raw(" ")];
        for (key, description) in self.hints() {
            spans.push(Span::styled(*key, styles::keybinding()));
            spans.push(Span::styled(format!(" {description}  "), styles::text_muted()));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);

        Paragraph::new(self.load_status())
            .alignment(Alignment::Right)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{console_state, TestTerminal};
    use chrono::Local;

    #[test]
    fn test_dashboard_hints() {
        let mut term = TestTerminal::with_size(100, 1);
        let state = console_state();

        term.render_widget(StatusBar::new(&state), term.area());

        assert!(term.buffer_contains("r reload"));
        assert!(term.buffer_contains("L logout"));
        assert!(!term.buffer_contains("d delete"));
    }

    #[test]
    fn test_remotes_hints() {
        let mut term = TestTerminal::with_size(100, 1);
        let mut state = console_state();
        state.page = Page::Remotes;

        term.render_widget(StatusBar::new(&state), term.area());

        assert!(term.buffer_contains("d delete"));
        assert!(term.buffer_contains("t test"));
    }

    #[test]
    fn test_load_status() {
        let mut term = TestTerminal::with_size(100, 1);
        let mut state = console_state();
        state.loading = true;

        term.render_widget(StatusBar::new(&state), term.area());
        assert!(term.buffer_contains("loading"));

        state.loading = false;
        state.loaded_at = Some(Local::now());
        term.render_widget(StatusBar::new(&state), term.area());
        assert!(term.buffer_contains("loaded "));
    }
}
