//! Toast stack in the top-right corner

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use rclonex_app::toast::Toasts;

use crate::theme::{palette, styles};

const MAX_WIDTH: u16 = 56;

/// Renders the live toasts, oldest on top, one row each.
pub struct ToastStack<'a> {
    toasts: &'a Toasts,
}

impl<'a> ToastStack<'a> {
    pub fn new(toasts: &'a Toasts) -> Self {
        Self { toasts }
    }
}

impl Widget for ToastStack<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.toasts.is_empty() || area.width < 4 {
            return;
        }

        for (row, toast) in self.toasts.iter().enumerate() {
            let y = area.y + row as u16;
            if y >= area.bottom() {
                break;
            }

            let (icon, icon_style) = styles::toast_indicator(toast.kind);
            let line = Line::from(vec![
                Span::styled(format!(" {icon} "), icon_style),
                Span::styled(toast.message.as_str(), styles::text_primary()),
                Span::raw(" "),
            ]);

            let width = (line.width() as u16).min(MAX_WIDTH).min(area.width);
            let toast_area = Rect {
                x: area.right() - width,
                y,
                width,
                height: 1,
            };
            Clear.render(toast_area, buf);
            Paragraph::new(line)
                .style(Style::default().bg(palette::POPUP_BG))
                .render(toast_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use std::time::Duration;

    #[test]
    fn test_toasts_render_right_aligned() {
        let mut term = TestTerminal::new();
        let mut toasts = Toasts::new(Duration::from_secs(60));
        toasts.success("Loaded 2 remotes");

        term.render_widget(ToastStack::new(&toasts), term.area());

        assert!(term.line_contains(0, "✓ Loaded 2 remotes"));
        // Last column is the trailing pad of the toast
        assert_eq!(term.buffer()[(79, 0)].bg, palette::POPUP_BG);
    }

    #[test]
    fn test_toasts_stack_oldest_first() {
        let mut term = TestTerminal::new();
        let mut toasts = Toasts::new(Duration::from_secs(60));
        toasts.info("first");
        toasts.error("Failed to load remotes: boom");

        term.render_widget(ToastStack::new(&toasts), term.area());

        assert!(term.line_contains(0, "ℹ first"));
        assert!(term.line_contains(1, "✗ Failed to load remotes: boom"));
    }

    #[test]
    fn test_empty_stack_renders_nothing() {
        let mut term = TestTerminal::new();
        let toasts = Toasts::new(Duration::from_secs(60));

        term.render_widget(ToastStack::new(&toasts), term.area());

        assert_eq!(term.content().trim(), "");
    }
}
