//! Header bar widget
//!
//! App title, page tabs, and the daemon the console is connected to.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use rclonex_app::state::{AppState, Page};

use crate::theme::{palette, styles};

/// Main header: `● rclonex │ 1 Dashboard  2 Remotes` on the left,
/// `user @ url` on the right.
pub struct MainHeader<'a> {
    state: &'a AppState,
}

impl<'a> MainHeader<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn page_tabs(&self) -> Vec<Span<'static>> {
        let mut spans = Vec::new();
        for (i, page) in Page::ALL.iter().enumerate() {
            let label = format!(" {} {} ", i + 1, page.title());
            let style = if *page == self.state.page {
                styles::focused_selected()
            } else {
                styles::text_secondary()
            };
            spans.push(Span::styled(label, style));
            spans.push(Span::raw(" "));
        }
        spans
    }

    fn connection(&self) -> Line<'static> {
        match &self.state.session {
            Some(session) => Line::from(vec![
                Span::styled(
                    session.display_name().to_string(),
                    styles::text_bright_bold(),
                ),
                Span::styled(" @ ", styles::text_muted()),
                Span::styled(session.base_url.clone(), styles::accent()),
                Span::raw(" "),
            ]),
            None => Line::from(Span::styled("not connected ", styles::text_muted())),
        }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let status_style = if self.state.loading {
            styles::status_yellow()
        } else {
            styles::status_green()
        };

        let mut left = vec![
            Span::raw(" "),
            Span::styled("●", status_style),
            Span::raw(" "),
            Span::styled(
                "rclonex",
                Style::default()
                    .fg(palette::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" │ ", styles::text_muted()),
        ];
        left.extend(self.page_tabs());
        let left = Line::from(left);
        let left_width = left.width() as u16;

        Paragraph::new(left).render(inner, buf);

        // Right side only when it fits next to the tabs
        let right = self.connection();
        let right_width = right.width() as u16;
        if left_width + right_width < inner.width {
            let right_area = Rect {
                x: inner.right() - right_width,
                y: inner.y,
                width: right_width,
                height: 1,
            };
            Paragraph::new(right).render(right_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{console_state, TestTerminal};

    #[test]
    fn test_header_shows_title_and_tabs() {
        let mut term = TestTerminal::new();
        let state = console_state();

        term.render_widget(MainHeader::new(&state), Rect::new(0, 0, 80, 3));

        assert!(term.buffer_contains("rclonex"));
        assert!(term.buffer_contains("1 Dashboard"));
        assert!(term.buffer_contains("2 Remotes"));
    }

    #[test]
    fn test_header_shows_user_and_daemon() {
        let mut term = TestTerminal::new();
        let state = console_state();

        term.render_widget(MainHeader::new(&state), Rect::new(0, 0, 80, 3));

        assert!(term.buffer_contains("admin @ http://localhost:5572"));
    }

    #[test]
    fn test_active_tab_is_highlighted() {
        let mut term = TestTerminal::new();
        let mut state = console_state();
        state.page = Page::Remotes;

        term.render_widget(MainHeader::new(&state), Rect::new(0, 0, 80, 3));

        let buf = term.buffer();
        let tab_x = |label: char| {
            (0..78)
                .find(|&x| {
                    buf[(x + 2, 1)].symbol() == label.to_string()
                        && buf[(x + 1, 1)].symbol() == " "
                        && matches!(buf[(x, 1)].symbol(), "1" | "2")
                })
                .expect("tab rendered")
        };
        assert_eq!(buf[(tab_x('R'), 1)].bg, palette::ACCENT);
        assert_ne!(buf[(tab_x('D'), 1)].bg, palette::ACCENT);
    }

    #[test]
    fn test_narrow_header_drops_connection() {
        let mut term = TestTerminal::with_size(40, 3);
        let state = console_state();

        term.render_widget(MainHeader::new(&state), term.area());

        assert!(term.buffer_contains("rclonex"));
        assert!(!term.buffer_contains("localhost"));
    }
}
