//! Confirmation dialog widget (remote deletion)

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget, Wrap},
};

// Re-export state from app layer
pub use rclonex_app::confirm_dialog::ConfirmDialogState;

use super::modal_overlay;
use crate::theme::styles;

/// Confirmation dialog widget
pub struct ConfirmDialog<'a> {
    state: &'a ConfirmDialogState,
}

impl<'a> ConfirmDialog<'a> {
    pub fn new(state: &'a ConfirmDialogState) -> Self {
        Self { state }
    }

    /// `[y] Delete  [n] Cancel`, labels taken from the dialog options
    fn buttons(&self) -> Line<'a> {
        let confirm = self
            .state
            .options
            .first()
            .map(|(label, _)| label.as_str())
            .unwrap_or("Yes");
        let cancel = self
            .state
            .options
            .get(1)
            .map(|(label, _)| label.as_str())
            .unwrap_or("No");

        Line::from(vec![
            Span::styled("[", styles::text_muted()),
            Span::styled("y", styles::status_red().patch(styles::text_bright_bold())),
            Span::styled(format!("] {confirm}  "), styles::text_muted()),
            Span::styled("[", styles::text_muted()),
            Span::styled("n", styles::status_green().patch(styles::text_bright_bold())),
            Span::styled(format!("] {cancel}"), styles::text_muted()),
        ])
    }
}

impl Widget for ConfirmDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = modal_overlay::prepare_modal(buf, area, 54, 9);
        Clear.render(modal_area, buf);

        let title = format!(" {} ", self.state.title);
        let block = styles::modal_block(&title).title_alignment(Alignment::Center);
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let [_, message, _, buttons, _] = Layout::vertical([
            Constraint::Length(1), // Spacer
            Constraint::Length(2), // Message
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Buttons
            Constraint::Min(0),
        ])
        .areas(inner);

        Paragraph::new(self.state.message.as_str())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(styles::status_yellow())
            .render(message, buf);

        Paragraph::new(self.buttons())
            .alignment(Alignment::Center)
            .render(buttons, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_delete_dialog_renders_title_and_message() {
        let mut term = TestTerminal::new();
        let state = ConfirmDialogState::delete_remote("photos");

        term.render_widget(ConfirmDialog::new(&state), term.area());

        assert!(term.buffer_contains("Delete remote?"));
        assert!(term.buffer_contains("'photos'"));
    }

    #[test]
    fn test_buttons_use_option_labels() {
        let mut term = TestTerminal::new();
        let state = ConfirmDialogState::delete_remote("photos");

        term.render_widget(ConfirmDialog::new(&state), term.area());

        assert!(term.buffer_contains("[y] Delete"));
        assert!(term.buffer_contains("[n] Cancel"));
    }

    #[test]
    fn test_generic_dialog_falls_back_to_yes_no() {
        let mut term = TestTerminal::new();
        let state = ConfirmDialogState::new("Quit?", "Leave the console?", vec![]);

        term.render_widget(ConfirmDialog::new(&state), term.area());

        assert!(term.buffer_contains("Quit?"));
        assert!(term.buffer_contains("[y] Yes"));
        assert!(term.buffer_contains("[n] No"));
        assert!(state.confirm_message().is_none());
    }
}
