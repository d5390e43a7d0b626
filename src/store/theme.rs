/// Presentation theme persistence.
use anyhow::Result;
use rusqlite::Connection;

use crate::types::ThemeMode;

/// Loads the stored theme; unknown or missing values fall back to light.
pub fn load_theme(conn: &Connection) -> ThemeMode {
    match super::get(super::THEME_KEY, conn) {
        Ok(Some(raw)) => ThemeMode::parse(&raw).unwrap_or_default(),
        _ => ThemeMode::default(),
    }
}

/// Persists the theme choice as its literal name.
pub fn persist_theme(mode: ThemeMode, conn: &Connection) -> Result<()> {
    super::set(super::THEME_KEY, mode.as_str(), conn)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_light() {
        let conn = super::super::init_memory().unwrap();
        assert_eq!(load_theme(&conn), ThemeMode::Light);
    }

    #[test]
    fn persists_as_literal_name() {
        let conn = super::super::init_memory().unwrap();
        persist_theme(ThemeMode::Dark, &conn).unwrap();
        assert_eq!(
            super::super::get(super::super::THEME_KEY, &conn)
                .unwrap()
                .as_deref(),
            Some("dark")
        );
        assert_eq!(load_theme(&conn), ThemeMode::Dark);
    }

    #[test]
    fn unknown_value_falls_back_to_light() {
        let conn = super::super::init_memory().unwrap();
        super::super::set(super::super::THEME_KEY, "sepia", &conn).unwrap();
        assert_eq!(load_theme(&conn), ThemeMode::Light);
    }
}
