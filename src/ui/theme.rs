use ratatui::style::Color;

use crate::types::ThemeMode;

/// Unified color theme for the application, resolved per light/dark mode.
/// The active mode is the terminal analog of a document theme attribute:
/// every frame reads it and styles itself accordingly.
pub struct Theme {
    mode: ThemeMode,
}

impl Theme {
    pub fn new(mode: ThemeMode) -> Self {
        Self { mode }
    }

    /// Primary branding color
    pub fn primary(&self) -> Color {
        match self.mode {
            ThemeMode::Dark => Color::Magenta,
            ThemeMode::Light => Color::LightMagenta,
        }
    }

    /// Secondary/border color
    pub fn secondary(&self) -> Color {
        match self.mode {
            ThemeMode::Dark => Color::Cyan,
            ThemeMode::Light => Color::Blue,
        }
    }

    /// Selection/highlight
    pub fn highlight(&self) -> Color {
        match self.mode {
            ThemeMode::Dark => Color::Cyan,
            ThemeMode::Light => Color::Blue,
        }
    }

    /// Dimmed/inactive text
    pub fn dim(&self) -> Color {
        match self.mode {
            ThemeMode::Dark => Color::DarkGray,
            ThemeMode::Light => Color::Gray,
        }
    }

    /// Normal text
    pub fn text(&self) -> Color {
        match self.mode {
            ThemeMode::Dark => Color::White,
            ThemeMode::Light => Color::Black,
        }
    }

    /// Accent for titles/counts
    pub fn accent(&self) -> Color {
        match self.mode {
            ThemeMode::Dark => Color::LightBlue,
            ThemeMode::Light => Color::Blue,
        }
    }

    /// Warning/failure messages on the status line
    pub fn warn(&self) -> Color {
        Color::Yellow
    }
}
