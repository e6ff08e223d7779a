//! Login screen: daemon URL, user and password.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use rclonex_app::login_form::{LoginField, LoginFormState};

use super::modal_overlay::{centered_rect, render_shadow};
use crate::theme::styles;

const FORM_WIDTH: u16 = 60;
const FORM_HEIGHT: u16 = 13;

pub struct LoginForm<'a> {
    state: &'a LoginFormState,
}

impl<'a> LoginForm<'a> {
    pub fn new(state: &'a LoginFormState) -> Self {
        Self { state }
    }

    fn field_line(&self, field: LoginField, label: &str, value: String) -> Line<'static> {
        let focused = self.state.focus == field;
        let cursor = if focused && !self.state.submitting {
            "_"
        } else {
            ""
        };
        Line::from(vec![
            Span::styled(if focused { " › " } else { "   " }, styles::accent()),
            Span::styled(
                format!("{label:<10}"),
                if focused {
                    styles::text_bright_bold()
                } else {
                    styles::text_secondary()
                },
            ),
            Span::styled(format!(" {value}{cursor} "), styles::input(focused)),
        ])
    }
}

impl Widget for LoginForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal = centered_rect(FORM_WIDTH, FORM_HEIGHT, area);
        render_shadow(buf, modal);
        Clear.render(modal, buf);

        let masked = "•".repeat(self.state.password.chars().count());
        let mut lines = vec![
            Line::default(),
            Line::from(Span::styled(
                "   Connect to an rclone remote-control daemon",
                styles::text_secondary(),
            )),
            Line::default(),
            self.field_line(LoginField::Url, "Daemon", self.state.url.clone()),
            self.field_line(LoginField::User, "User", self.state.user.clone()),
            self.field_line(LoginField::Password, "Password", masked),
            Line::default(),
        ];

        lines.push(match &self.state.error {
            Some(error) => Line::from(Span::styled(format!("   {error}"), styles::status_red())),
            None => Line::default(),
        });

        lines.push(if self.state.submitting {
            Line::from(Span::styled("   Connecting...", styles::status_yellow()))
        } else {
            Line::from(vec![
                Span::styled("   Enter", styles::keybinding()),
                Span::styled(" connect  ", styles::text_muted()),
                Span::styled("Tab", styles::keybinding()),
                Span::styled(" next field  ", styles::text_muted()),
                Span::styled("Esc", styles::keybinding()),
                Span::styled(" quit", styles::text_muted()),
            ])
        });

        let block = styles::modal_block(" rclonex ").title_alignment(Alignment::Center);
        Paragraph::new(lines).block(block).render(modal, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    fn filled() -> LoginFormState {
        let mut state = LoginFormState::with_url("http://localhost:5572");
        state.user = "admin".to_string();
        state.password = "secret".to_string();
        state
    }

    #[test]
    fn test_login_form_renders_fields() {
        let mut term = TestTerminal::new();
        let state = filled();

        term.render_widget(LoginForm::new(&state), term.area());

        assert!(term.buffer_contains("rclonex"));
        assert!(term.buffer_contains("http://localhost:5572_"));
        assert!(term.buffer_contains("admin"));
        assert!(term.buffer_contains("••••••"));
        assert!(!term.buffer_contains("secret"));
        assert!(term.buffer_contains("Enter connect"));
    }

    #[test]
    fn test_focus_marker_follows_field() {
        let mut term = TestTerminal::new();
        let mut state = filled();
        state.focus = LoginField::User;

        term.render_widget(LoginForm::new(&state), term.area());

        let line = term.find_line("User").expect("user row");
        assert!(term.line_contains(line, "›"));
        assert!(term.buffer_contains("admin_"));
    }

    #[test]
    fn test_error_and_submitting_states() {
        let mut term = TestTerminal::new();
        let mut state = filled();
        state.error = Some("Daemon URL is required".to_string());

        term.render_widget(LoginForm::new(&state), term.area());
        assert!(term.buffer_contains("Daemon URL is required"));

        state.submitting = true;
        term.render_widget(LoginForm::new(&state), term.area());
        assert!(term.buffer_contains("Connecting..."));
        assert!(!term.buffer_contains("Enter connect"));
    }
}
