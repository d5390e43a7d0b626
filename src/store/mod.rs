/// Key-value storage backed by SQLite, plus saved-palette and theme helpers.
mod saved;
mod theme;

use anyhow::Result;
use rusqlite::{Connection, params};

pub use saved::{clear_history, load_history, persist_history};
pub use theme::{load_theme, persist_theme};

/// Storage key for the saved-palette history (JSON array of color arrays).
pub const PALETTES_KEY: &str = "palettes";
/// Storage key for the presentation theme ("light" or "dark").
pub const THEME_KEY: &str = "palette-theme";

/// Opens (or creates) the SQLite database and runs migrations.
pub fn init(db_path: &str) -> Result<Connection> {
    let conn = Connection::open(db_path)?;
    run_migrations(&conn)?;
    Ok(conn)
}

/// Returns the default database path inside the user's data directory.
/// Falls back to `./swatchr.db` when no data dir is found.
pub fn default_db_path() -> String {
    if let Some(data_dir) = dirs::data_local_dir() {
        let swatchr_dir = data_dir.join("swatchr");
        std::fs::create_dir_all(&swatchr_dir).ok();
        swatchr_dir.join("swatchr.db").to_string_lossy().into_owned()
    } else {
        "swatchr.db".to_string()
    }
}

fn run_migrations(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS kv (
            key   TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );
        ",
    )?;
    Ok(())
}

#[cfg(test)]
pub fn init_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory()?;
    run_migrations(&conn)?;
    Ok(conn)
}

/// Read the stored value for `key`, if any.
pub fn get(key: &str, conn: &Connection) -> Result<Option<String>> {
    let mut stmt = conn.prepare("SELECT value FROM kv WHERE key = ?1")?;
    let mut rows = stmt.query(params![key])?;
    match rows.next()? {
        Some(row) => Ok(Some(row.get(0)?)),
        None => Ok(None),
    }
}

/// Overwrite the stored value for `key` in one shot.
pub fn set(key: &str, value: &str, conn: &Connection) -> Result<()> {
    conn.execute(
        "
        INSERT INTO kv (key, value) VALUES (?1, ?2)
        ON CONFLICT(key) DO UPDATE SET value = excluded.value
        ",
        params![key, value],
    )?;
    Ok(())
}

/// Delete the stored value for `key`; a missing key is not an error.
pub fn remove(key: &str, conn: &Connection) -> Result<()> {
    conn.execute("DELETE FROM kv WHERE key = ?1", params![key])?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove_round_trip() {
        let conn = init_memory().unwrap();
        assert_eq!(get("missing", &conn).unwrap(), None);

        set("k", "v1", &conn).unwrap();
        assert_eq!(get("k", &conn).unwrap().as_deref(), Some("v1"));

        set("k", "v2", &conn).unwrap();
        assert_eq!(get("k", &conn).unwrap().as_deref(), Some("v2"));

        remove("k", &conn).unwrap();
        assert_eq!(get("k", &conn).unwrap(), None);
        // Removing again is a no-op.
        remove("k", &conn).unwrap();
    }
}
