//! Dashboard page: connection summary and remote counts per provider type.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use rclonex_app::state::AppState;
use rclonex_core::provider_label;

use crate::theme::{palette, styles};

const LABEL_WIDTH: usize = 12;

pub struct Dashboard<'a> {
    state: &'a AppState,
}

impl<'a> Dashboard<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn row(label: &str, value: impl Into<String>, value_style: Style) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("  {:<LABEL_WIDTH$}", label), styles::text_muted()),
            Span::styled(value.into(), value_style),
        ])
    }

    fn connection_lines(&self) -> Vec<Line<'static>> {
        let (url, user) = match &self.state.session {
            Some(session) => (
                session.base_url.clone(),
                session.display_name().to_string(),
            ),
            None => ("-".to_string(), "-".to_string()),
        };

        let remotes = if self.state.loading && self.state.loaded_at.is_none() {
            "loading...".to_string()
        } else {
            self.state.remotes.len().to_string()
        };

        let refreshed = self
            .state
            .loaded_at
            .map(|t| t.format("%H:%M:%S").to_string())
            .unwrap_or_else(|| "never".to_string());

        vec![
            Line::default(),
            Self::row("Daemon", url, styles::accent()),
            Self::row("User", user, styles::text_primary()),
            Self::row("Remotes", remotes, styles::text_bright_bold()),
            Self::row("Refreshed", refreshed, styles::text_secondary()),
        ]
    }

    fn provider_lines(&self) -> Vec<Line<'static>> {
        let counts = self.state.provider_counts();
        if counts.is_empty() {
            return vec![
                Line::default(),
                Line::from(Span::styled(
                    "  No remotes configured yet. Press 'a' to add one.",
                    styles::text_muted(),
                )),
            ];
        }

        let max = counts.values().copied().max().unwrap_or(1).max(1);
        let mut lines = vec![Line::default()];
        for (provider_type, count) in &counts {
            // Bar scaled to the largest count, at most 20 cells
            let bar_len = (count * 20).div_ceil(max);
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:<LABEL_WIDTH$}", provider_label(provider_type)),
                    styles::text_secondary(),
                ),
                Span::styled(format!("{:>3} ", count), styles::text_bright_bold()),
                Span::styled("█".repeat(bar_len), Style::default().fg(palette::ACCENT)),
            ]));
        }
        lines
    }
}

impl Widget for Dashboard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [top, bottom] =
            Layout::vertical([Constraint::Length(7), Constraint::Min(3)]).areas(area);

        let connection = styles::glass_block(false).title(" Connection ");
        Paragraph::new(self.connection_lines())
            .block(connection)
            .render(top, buf);

        let providers = styles::glass_block(false).title(" Remotes by type ");
        Paragraph::new(self.provider_lines())
            .block(providers)
            .render(bottom, buf);
    }
}
