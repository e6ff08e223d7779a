//! Search prompt shown at the bottom of the remote list

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

/// Inline `/query` prompt with the match count
pub struct SearchInput<'a> {
    query: &'a str,
    /// Still capturing keystrokes
    active: bool,
    matches: usize,
}

impl<'a> SearchInput<'a> {
    pub fn new(query: &'a str, matches: usize) -> Self {
        Self {
            query,
            active: false,
            matches,
        }
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![
            Span::styled("/", styles::keybinding()),
            Span::styled(self.query, styles::text_primary()),
        ];

        if self.active {
            spans.push(Span::styled("_", styles::status_yellow()));
        }

        if !self.query.is_empty() {
            let noun = if self.matches == 1 { "match" } else { "matches" };
            let style = if self.matches > 0 {
                styles::status_green()
            } else {
                styles::status_red()
            };
            spans.push(Span::raw(" "));
            spans.push(Span::styled(format!("[{} {}]", self.matches, noun), style));
        }

        if self.active {
            spans.push(Span::styled("  Enter keep · Esc clear", styles::text_muted()));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
