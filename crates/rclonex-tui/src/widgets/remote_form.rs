//! Add/edit remote modal
//!
//! Rows come from the provider schema. The type selector only exists in add
//! mode; in edit mode the name is shown read-only.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use rclonex_app::remote_form::{FormFocus, RemoteFormState};
use rclonex_core::{provider_label, FieldDescriptor, FieldKind};

use super::modal_overlay;
use crate::theme::styles;

const MODAL_WIDTH: u16 = 64;
const LABEL_WIDTH: usize = 20;

pub struct RemoteFormDialog<'a> {
    form: &'a RemoteFormState,
}

impl<'a> RemoteFormDialog<'a> {
    pub fn new(form: &'a RemoteFormState) -> Self {
        Self { form }
    }

    fn is_focused(&self, target: FormFocus) -> bool {
        self.form.focused() == Some(target)
    }

    fn row(label: &str, required: bool, value: Span<'a>, focused: bool) -> Line<'a> {
        let marker = if focused { "›" } else { " " };
        let label = format!("{label}{}", if required { " *" } else { "" });
        Line::from(vec![
            Span::styled(format!("{marker} "), styles::accent()),
            Span::styled(
                format!("{label:<LABEL_WIDTH$}"),
                if focused {
                    styles::text_bright_bold()
                } else {
                    styles::text_secondary()
                },
            ),
            value,
        ])
    }

    /// Text shown for a field's value, with masking and choice labels
    fn value_span(&self, field: &FieldDescriptor, focused: bool) -> Span<'a> {
        let value = self.form.value_of(field);
        let style = styles::input(focused);

        match field.kind {
            FieldKind::Choice => {
                let label = field.option_label(value).unwrap_or(value);
                let label = if label.is_empty() { "select" } else { label };
                Span::styled(format!(" ◂ {label} ▸ "), style)
            }
            _ if value.is_empty() => {
                let placeholder = field.placeholder.unwrap_or("");
                let cursor = if focused { "_" } else { "" };
                Span::styled(
                    format!(" {cursor}{placeholder} "),
                    style.patch(styles::text_muted()),
                )
            }
            FieldKind::Secret => {
                let masked = "•".repeat(value.chars().count());
                Span::styled(format!(" {masked}{} ", cursor(focused)), style)
            }
            FieldKind::Text | FieldKind::Number => {
                Span::styled(format!(" {value}{} ", cursor(focused)), style)
            }
        }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let mut lines = vec![Line::default()];

        if self.form.is_edit() {
            lines.push(Self::row(
                "Name",
                false,
                Span::styled(self.form.name.clone(), styles::text_muted()),
                false,
            ));
            lines.push(Self::row(
                "Type",
                false,
                Span::styled(provider_label(&self.form.provider_type), styles::text_muted()),
                false,
            ));
        } else {
            let focused = self.is_focused(FormFocus::Name);
            lines.push(Self::row(
                "Name",
                true,
                Span::styled(
                    format!(" {}{} ", self.form.name, cursor(focused)),
                    styles::input(focused),
                ),
                focused,
            ));

            let focused = self.is_focused(FormFocus::ProviderType);
            let label = if self.form.provider_type.is_empty() {
                "select a type".to_string()
            } else {
                provider_label(&self.form.provider_type)
            };
            lines.push(Self::row(
                "Type",
                true,
                Span::styled(format!(" ◂ {label} ▸ "), styles::input(focused)),
                focused,
            ));
        }

        lines.push(Line::default());

        let fields = self.form.fields();
        if self.form.provider_type.is_empty() {
            lines.push(Line::from(Span::styled(
                "  Pick a provider type with ←/→",
                styles::text_muted(),
            )));
        } else if fields.is_empty() {
            lines.push(Line::from(Span::styled(
                "  No settings for this type",
                styles::text_muted(),
            )));
        }
        for (i, field) in fields.iter().enumerate() {
            let focused = self.is_focused(FormFocus::Field(i));
            lines.push(Self::row(
                field.label,
                field.required,
                self.value_span(field, focused),
                focused,
            ));
        }

        lines.push(Line::default());
        lines.push(match &self.form.error {
            Some(error) => Line::from(Span::styled(format!("  {error}"), styles::status_red())),
            None => Line::default(),
        });

        lines.push(if self.form.saving {
            Line::from(Span::styled("  Saving...", styles::status_yellow()))
        } else {
            Line::from(vec![
                Span::styled("  Tab", styles::keybinding()),
                Span::styled(" next  ", styles::text_muted()),
                Span::styled("←/→", styles::keybinding()),
                Span::styled(" choose  ", styles::text_muted()),
                Span::styled("Enter", styles::keybinding()),
                Span::styled(" save  ", styles::text_muted()),
                Span::styled("Esc", styles::keybinding()),
                Span::styled(" cancel", styles::text_muted()),
            ])
        });

        lines
    }
}

fn cursor(focused: bool) -> &'static str {
    if focused {
        "_"
    } else {
        ""
    }
}

impl Widget for RemoteFormDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.lines();
        let height = lines.len() as u16 + 2;
        let modal = modal_overlay::prepare_modal(buf, area, MODAL_WIDTH, height);

        Clear.render(modal, buf);
        let title = format!(" {} ", self.form.title());
        Paragraph::new(lines)
            .block(styles::modal_block(&title))
            .render(modal, buf);
    }
}
