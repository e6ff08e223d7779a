//! Color palette for the console theme.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black; // Terminal background
pub const CARD_BG: Color = Color::Black; // Panel/card backgrounds
pub const POPUP_BG: Color = Color::Rgb(28, 33, 43); // Modal backgrounds
pub const SELECTED_BG: Color = Color::Rgb(22, 27, 34); // Selected card

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Cyan;

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;
pub const TEXT_BRIGHT: Color = Color::White;
pub const CONTRAST_FG: Color = Color::Black; // Text on accent backgrounds

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_RED: Color = Color::Red;
pub const STATUS_YELLOW: Color = Color::Yellow;
pub const STATUS_BLUE: Color = Color::Blue;

// --- Effects ---
pub const SHADOW: Color = Color::Rgb(5, 6, 8);

// --- Inputs ---
pub const INPUT_BG: Color = Color::Rgb(40, 40, 50);
pub const INPUT_ACTIVE_BG: Color = Color::Rgb(60, 60, 80);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_backgrounds_are_rgb() {
        for color in [POPUP_BG, INPUT_BG, INPUT_ACTIVE_BG] {
            assert!(matches!(color, Color::Rgb(_, _, _)), "{color:?} should be RGB");
        }
    }

    #[test]
    fn test_contrast_differs_from_accent() {
        assert_ne!(CONTRAST_FG, ACCENT);
    }
}
