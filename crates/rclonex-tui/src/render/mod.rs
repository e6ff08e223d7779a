//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use rclonex_app::state::{AppState, Page, UiMode};

use super::{layout, widgets};
use crate::theme::palette;

/// Render the complete UI (View function in TEA)
///
/// Pure with respect to `state`: everything shown is derived from it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    if state.ui_mode == UiMode::Login || !state.is_logged_in() {
        frame.render_widget(widgets::LoginForm::new(&state.login), area);
        render_toasts(frame, area, state);
        return;
    }

    let areas = layout::create(area);

    frame.render_widget(widgets::MainHeader::new(state), areas.header);

    match state.page {
        Page::Dashboard => frame.render_widget(widgets::Dashboard::new(state), areas.body),
        Page::Remotes => frame.render_widget(widgets::RemoteList::new(state), areas.body),
    }

    frame.render_widget(widgets::StatusBar::new(state), areas.status);

    // Modal overlays based on UI mode
    match state.ui_mode {
        UiMode::RemoteForm => {
            if let Some(ref form) = state.remote_form {
                frame.render_widget(widgets::RemoteFormDialog::new(form), area);
            }
        }
        UiMode::ConfirmDialog => {
            if let Some(ref dialog) = state.confirm_dialog {
                frame.render_widget(widgets::ConfirmDialog::new(dialog), area);
            }
        }
        UiMode::Normal | UiMode::SearchInput | UiMode::Login => {}
    }

    render_toasts(frame, areas.body, state);
}

/// Toasts sit just inside the top-right corner of `area`
fn render_toasts(frame: &mut Frame, area: Rect, state: &AppState) {
    let toast_area = Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    };
    frame.render_widget(widgets::ToastStack::new(&state.toasts), toast_area);
}
