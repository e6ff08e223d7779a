//! Centralized theme for the console.
//!
//! - `palette` holds the raw color constants
//! - `styles` holds the semantic style and block builders

pub mod palette;
pub mod styles;
