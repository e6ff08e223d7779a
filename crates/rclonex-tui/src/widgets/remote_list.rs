//! Remote list page: one card per remote.
//!
//! A card is two rows: the name with its provider label, then up to two
//! key-info entries (or the detail-fetch error). A blank row separates cards.

use chrono::Local;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use rclonex_app::state::{AppState, UiMode};
use rclonex_core::{key_info, provider_label, RemoteConfig};

use super::SearchInput;
use crate::theme::{palette, styles};

/// Rows per card, including the separator
const CARD_HEIGHT: u16 = 3;

/// First card index to draw so that `selected` stays on screen.
pub fn scroll_offset(selected: usize, per_page: usize) -> usize {
    if per_page == 0 || selected < per_page {
        0
    } else {
        selected + 1 - per_page
    }
}

pub struct RemoteList<'a> {
    state: &'a AppState,
}

impl<'a> RemoteList<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn title(&self, shown: usize) -> String {
        let total = self.state.remotes.len();
        if self.state.search_query.is_empty() {
            format!(" Remotes ({total}) ")
        } else {
            format!(" Remotes ({shown}/{total}) ")
        }
    }

    fn showing_search(&self) -> bool {
        self.state.ui_mode == UiMode::SearchInput || !self.state.search_query.is_empty()
    }

    fn empty_message(&self) -> &'static str {
        if self.state.loading && self.state.loaded_at.is_none() {
            "Loading remotes..."
        } else if !self.state.search_query.is_empty() {
            "No remotes match the search."
        } else {
            "No remotes configured yet. Press 'a' to add one."
        }
    }

    /// Transient activity on a card, if any
    fn activity(&self, remote: &RemoteConfig) -> Option<&'static str> {
        if self.state.deleting.as_deref() == Some(remote.name.as_str()) {
            Some("deleting...")
        } else if self.state.testing.as_deref() == Some(remote.name.as_str()) {
            Some("testing...")
        } else {
            None
        }
    }

    fn render_card(&self, remote: &RemoteConfig, selected: bool, area: Rect, buf: &mut Buffer) {
        if selected {
            buf.set_style(area, Style::default().bg(palette::SELECTED_BG));
        }

        let name_style = if selected {
            styles::accent_bold()
        } else {
            styles::text_bright_bold()
        };
        let mut title = vec![
            Span::styled(if selected { "▸ " } else { "  " }, styles::accent()),
            Span::styled(remote.name.clone(), name_style),
            Span::raw("  "),
            Span::styled(
                format!("[{}]", provider_label(&remote.provider_type)),
                styles::text_secondary(),
            ),
        ];
        if let Some(activity) = self.activity(remote) {
            title.push(Span::raw("  "));
            title.push(Span::styled(activity, styles::status_yellow()));
        }

        let detail = match &remote.detail_error {
            Some(error) => Line::from(vec![
                Span::raw("    "),
                Span::styled(format!("⚠ details unavailable: {error}"), styles::status_red()),
            ]),
            None => {
                let info = key_info(remote);
                if info.is_empty() {
                    Line::from(Span::styled("    no details", styles::text_muted()))
                } else {
                    let mut spans = vec![Span::raw("    ")];
                    for (i, (label, value)) in info.into_iter().enumerate() {
                        if i > 0 {
                            spans.push(Span::styled(" · ", styles::text_muted()));
                        }
                        spans.push(Span::styled(format!("{label}: "), styles::text_muted()));
                        spans.push(Span::styled(value, styles::text_primary()));
                    }
                    Line::from(spans)
                }
            }
        };

        let title_area = Rect { height: 1, ..area };
        Paragraph::new(Line::from(title)).render(title_area, buf);

        if self.state.settings.ui.show_fetch_time {
            let fetched = remote
                .created_at
                .with_timezone(&Local)
                .format("fetched %H:%M:%S ")
                .to_string();
            Paragraph::new(Span::styled(
                fetched,
                Style::default()
                    .fg(palette::TEXT_MUTED)
                    .add_modifier(Modifier::ITALIC),
            ))
            .alignment(Alignment::Right)
            .render(title_area, buf);
        }

        if area.height > 1 {
            let detail_area = Rect {
                y: area.y + 1,
                height: 1,
                ..area
            };
            Paragraph::new(detail).render(detail_area, buf);
        }
    }
}

impl Widget for RemoteList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let visible = self.state.visible_remotes();

        let block = styles::glass_block(true).title(self.title(visible.len()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut list_area = inner;
        if self.showing_search() {
            list_area.height = list_area.height.saturating_sub(1);
            let search_area = Rect {
                y: inner.bottom() - 1,
                height: 1,
                ..inner
            };
            SearchInput::new(&self.state.search_query, visible.len())
                .active(self.state.ui_mode == UiMode::SearchInput)
                .render(search_area, buf);
        }

        if visible.is_empty() {
            Paragraph::new(Span::styled(self.empty_message(), styles::text_muted()))
                .alignment(Alignment::Center)
                .render(
                    Rect {
                        y: list_area.y + list_area.height / 2,
                        height: list_area.height.min(1),
                        ..list_area
                    },
                    buf,
                );
            return;
        }

        let per_page = (list_area.height / CARD_HEIGHT).max(1) as usize;
        let offset = scroll_offset(self.state.selected, per_page);

        for (row, (index, remote)) in visible
            .iter()
            .enumerate()
            .skip(offset)
            .take(per_page)
            .enumerate()
        {
            let y = list_area.y + row as u16 * CARD_HEIGHT;
            if y >= list_area.bottom() {
                break;
            }
            let card_area = Rect {
                y,
                height: (list_area.bottom() - y).min(2),
                ..list_area
            };
            self.render_card(remote, index == self.state.selected, card_area, buf);
        }
    }
}
