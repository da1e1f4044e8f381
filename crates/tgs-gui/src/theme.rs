//! Theme and layout constants.
//!
//! The application uses a stock iced theme; only spacing is centralized
//! here so the views stay consistent.

use iced::Theme;

// =============================================================================
// SPACING SCALE
// =============================================================================

/// Extra small spacing - tight gaps between related elements
pub const SPACING_XS: f32 = 4.0;

/// Small spacing - small gaps, control margins
pub const SPACING_SM: f32 = 8.0;

/// Medium spacing - default padding, standard gaps
pub const SPACING_MD: f32 = 16.0;

/// Large spacing - section padding, major gaps
pub const SPACING_LG: f32 = 24.0;

// =============================================================================
// LAYOUT WIDTHS
// =============================================================================

/// Options sidebar width
pub const SIDEBAR_WIDTH: f32 = 280.0;

/// Application theme.
///
/// Solarized dark pairs well with the highlighter themes used by the
/// two editors.
pub fn app_theme() -> Theme {
    Theme::SolarizedDark
}

/// Highlighter theme matching [`app_theme`].
pub fn highlight_theme() -> iced::highlighter::Theme {
    iced::highlighter::Theme::SolarizedDark
}
