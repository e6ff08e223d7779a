//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Header height: top border + title row + bottom border
pub const HEADER_HEIGHT: u16 = 3;

/// Screen areas for the console layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title, page tabs and the connected daemon
    pub header: Rect,

    /// Current page (dashboard or remote list)
    pub body: Rect,

    /// Single-row key hints and load status
    pub status: Rect,
}

/// Split the terminal into header, page body and status bar
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        body: chunks[1],
        status: chunks[2],
    }
}
