/// Saved-palette history persistence.
use anyhow::Result;
use rusqlite::Connection;

use crate::types::SavedPalette;

/// Loads the saved-palette history. Missing or malformed stored JSON
/// silently falls back to an empty history.
pub fn load_history(conn: &Connection) -> Vec<SavedPalette> {
    let raw = match super::get(super::PALETTES_KEY, conn) {
        Ok(Some(raw)) => raw,
        _ => return Vec::new(),
    };
    serde_json::from_str(&raw).unwrap_or_default()
}

/// Persists the entire history, overwriting the stored value.
pub fn persist_history(history: &[SavedPalette], conn: &Connection) -> Result<()> {
    let raw = serde_json::to_string(history)?;
    super::set(super::PALETTES_KEY, &raw, conn)
}

/// Deletes the stored history key.
pub fn clear_history(conn: &Connection) -> Result<()> {
    super::remove(super::PALETTES_KEY, conn)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette(colors: &[&str]) -> SavedPalette {
        SavedPalette {
            colors: colors.iter().map(|c| c.to_string()).collect(),
        }
    }

    #[test]
    fn empty_store_loads_empty_history() {
        let conn = super::super::init_memory().unwrap();
        assert!(load_history(&conn).is_empty());
    }

    #[test]
    fn persist_and_reload() {
        let conn = super::super::init_memory().unwrap();
        let history = vec![palette(&["#111111", "#222222", "#333333", "#444444", "#555555"])];
        persist_history(&history, &conn).unwrap();

        let loaded = load_history(&conn);
        assert_eq!(loaded, history);

        // Stored shape is a JSON array of color arrays.
        let raw = super::super::get(super::super::PALETTES_KEY, &conn)
            .unwrap()
            .unwrap();
        assert!(raw.starts_with("[["));
    }

    #[test]
    fn malformed_json_falls_back_to_empty() {
        let conn = super::super::init_memory().unwrap();
        super::super::set(super::super::PALETTES_KEY, "not json {", &conn).unwrap();
        assert!(load_history(&conn).is_empty());
    }

    #[test]
    fn clear_removes_the_key() {
        let conn = super::super::init_memory().unwrap();
        persist_history(&[palette(&["#000000"; 5])], &conn).unwrap();
        clear_history(&conn).unwrap();
        assert_eq!(
            super::super::get(super::super::PALETTES_KEY, &conn).unwrap(),
            None
        );
        assert!(load_history(&conn).is_empty());
    }
}
