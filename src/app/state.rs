use std::path::PathBuf;

use crossterm::event::KeyCode;
use rusqlite::Connection;

use crate::color;
use crate::types::{PALETTE_SIZE, SavedPalette, Swatch, ThemeMode};
use crate::{clipboard, export, store};

use super::{AppEvent, AppView, FocusMode};

/// The top-level application state.
pub struct App {
    pub running: bool,
    pub db: Connection,
    pub view: AppView,
    pub focus_mode: FocusMode,
    pub palette: Vec<Swatch>,
    pub saved: Vec<SavedPalette>,
    pub theme: ThemeMode,
    pub status: Option<String>,
    pub selected_swatch_index: usize,
    pub selected_saved_index: usize,
    pub export_dir: PathBuf,
}

impl App {
    pub fn new(db: Connection) -> Self {
        let saved = store::load_history(&db);
        let theme = store::load_theme(&db);
        let palette = (0..PALETTE_SIZE).map(|_| Swatch::random()).collect();
        Self {
            running: true,
            db,
            view: AppView::Palette,
            focus_mode: FocusMode::Swatches,
            palette,
            saved,
            theme,
            status: None,
            selected_swatch_index: 0,
            selected_saved_index: 0,
            export_dir: PathBuf::from("."),
        }
    }

    /// Central update function - process an event and mutate state.
    pub fn update(&mut self, event: AppEvent) {
        match event {
            AppEvent::Tick => {}
            AppEvent::KeyPress(key) => self.handle_key(key),
        }
    }

    fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') => self.running = false,
            KeyCode::Char('?') => {
                self.view = match self.view {
                    AppView::Help => AppView::Palette,
                    AppView::Palette => AppView::Help,
                };
            }
            KeyCode::Esc => {
                self.view = AppView::Palette;
                self.clear_status();
            }
            KeyCode::Tab => {
                self.focus_mode = match self.focus_mode {
                    FocusMode::Swatches => FocusMode::SavedList,
                    FocusMode::SavedList => FocusMode::Swatches,
                };
            }
            KeyCode::Char('g') => self.generate_palette(),
            KeyCode::Char(' ') => self.toggle_lock(self.selected_swatch_index),
            KeyCode::Char('c') => self.copy_selected_hex(),
            KeyCode::Char('s') => self.save_current_palette(),
            KeyCode::Char('x') => self.clear_saved(),
            KeyCode::Char('j') => self.export_json(),
            KeyCode::Char('p') => self.export_png(),
            KeyCode::Char('t') => self.toggle_theme(),
            KeyCode::Left => {
                if self.focus_mode == FocusMode::Swatches {
                    self.move_swatch_selection_left();
                }
            }
            KeyCode::Right => {
                if self.focus_mode == FocusMode::Swatches {
                    self.move_swatch_selection_right();
                }
            }
            KeyCode::Up => {
                if self.focus_mode == FocusMode::SavedList {
                    self.move_saved_selection_up();
                }
            }
            KeyCode::Down => {
                if self.focus_mode == FocusMode::SavedList {
                    self.move_saved_selection_down();
                }
            }
            KeyCode::Enter => {
                if self.focus_mode == FocusMode::SavedList {
                    self.load_selected_saved();
                }
            }
            _ => {}
        }
    }

    /// Re-randomize every unlocked swatch; locked swatches keep their color.
    pub fn generate_palette(&mut self) {
        for swatch in &mut self.palette {
            if !swatch.locked {
                swatch.color = color::random_color();
            }
        }
        self.clear_status();
    }

    /// Flip the lock flag at `index`; out-of-range indices are ignored.
    pub fn toggle_lock(&mut self, index: usize) {
        let Some(swatch) = self.palette.get_mut(index) else {
            return;
        };
        swatch.locked = !swatch.locked;
        let verb = if swatch.locked { "Locked" } else { "Unlocked" };
        self.status = Some(format!("{verb} {}.", swatch.color.to_ascii_uppercase()));
    }

    /// Snapshot the current colors into history and persist the whole history.
    pub fn save_current_palette(&mut self) {
        self.saved.push(SavedPalette::snapshot(&self.palette));
        if let Err(err) = store::persist_history(&self.saved, &self.db) {
            self.status = Some(format!("Failed to save palette: {err}"));
            return;
        }
        self.status = Some("Palette saved.".to_string());
    }

    /// Empty the history and delete the stored key.
    pub fn clear_saved(&mut self) {
        self.saved.clear();
        self.selected_saved_index = 0;
        if let Err(err) = store::clear_history(&self.db) {
            self.status = Some(format!("Failed to clear saved palettes: {err}"));
            return;
        }
        self.status = Some("Saved palettes cleared.".to_string());
    }

    /// Flip light/dark and persist the choice.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        if let Err(err) = store::persist_theme(self.theme, &self.db) {
            self.status = Some(format!("Failed to save theme: {err}"));
        }
    }

    /// Replace the working swatches with the selected saved palette. All
    /// locks reset, since the loaded colors are a fresh starting point.
    pub fn load_selected_saved(&mut self) {
        let Some(saved) = self.saved.get(self.selected_saved_index) else {
            return;
        };
        if saved.colors.len() != self.palette.len() {
            self.status = Some("Saved palette has an unexpected size.".to_string());
            return;
        }
        for (swatch, loaded) in self.palette.iter_mut().zip(&saved.colors) {
            swatch.color = loaded.clone();
            swatch.locked = false;
        }
        self.status = Some(format!("Loaded palette {}.", self.selected_saved_index + 1));
    }

    fn copy_selected_hex(&mut self) {
        let Some(swatch) = self.palette.get(self.selected_swatch_index) else {
            return;
        };
        let hex = swatch.color.clone();
        match clipboard::copy_text(&hex) {
            Ok(()) => self.status = Some(format!("Copied {}.", hex.to_ascii_uppercase())),
            Err(_) => self.status = Some("Clipboard not available.".to_string()),
        }
    }

    fn export_json(&mut self) {
        let colors = self.current_colors();
        match export::write_json(&colors, &self.export_dir) {
            Ok(path) => self.status = Some(format!("Exported {}.", path.display())),
            Err(err) => self.status = Some(format!("Failed to export JSON: {err}")),
        }
    }

    fn export_png(&mut self) {
        let colors = self.current_colors();
        // A failed render or write aborts the export without feedback.
        if let Ok(path) = export::write_png(&colors, &self.export_dir) {
            self.status = Some(format!("Exported {}.", path.display()));
        }
    }

    pub fn current_colors(&self) -> Vec<String> {
        self.palette.iter().map(|s| s.color.clone()).collect()
    }

    fn move_swatch_selection_left(&mut self) {
        if self.selected_swatch_index == 0 {
            self.selected_swatch_index = self.palette.len() - 1;
        } else {
            self.selected_swatch_index -= 1;
        }
    }

    fn move_swatch_selection_right(&mut self) {
        self.selected_swatch_index = (self.selected_swatch_index + 1) % self.palette.len();
    }

    fn move_saved_selection_up(&mut self) {
        if self.saved.is_empty() {
            return;
        }
        if self.selected_saved_index == 0 {
            self.selected_saved_index = self.saved.len() - 1;
        } else {
            self.selected_saved_index -= 1;
        }
    }

    fn move_saved_selection_down(&mut self) {
        if self.saved.is_empty() {
            return;
        }
        self.selected_saved_index = (self.selected_saved_index + 1) % self.saved.len();
    }

    fn clear_status(&mut self) {
        self.status = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        App::new(store::init_memory().unwrap())
    }

    fn set_colors(app: &mut App, colors: [&str; PALETTE_SIZE]) {
        for (swatch, color) in app.palette.iter_mut().zip(colors) {
            swatch.color = color.to_string();
        }
    }

    #[test]
    fn starts_with_five_valid_swatches() {
        let app = test_app();
        assert_eq!(app.palette.len(), PALETTE_SIZE);
        for swatch in &app.palette {
            assert!(color::is_valid_hex(&swatch.color));
            assert!(!swatch.locked);
        }
    }

    #[test]
    fn generate_preserves_locked_swatches() {
        let mut app = test_app();
        set_colors(
            &mut app,
            ["#aabbcc", "#aabbcc", "#aabbcc", "#aabbcc", "#aabbcc"],
        );
        app.toggle_lock(2);
        app.generate_palette();

        assert_eq!(app.palette[2].color, "#aabbcc");
        for (index, swatch) in app.palette.iter().enumerate() {
            assert!(color::is_valid_hex(&swatch.color));
            assert_eq!(swatch.locked, index == 2);
        }
    }

    #[test]
    fn toggle_lock_flips_only_one_index() {
        let mut app = test_app();
        app.toggle_lock(3);
        for (index, swatch) in app.palette.iter().enumerate() {
            assert_eq!(swatch.locked, index == 3);
        }
        app.toggle_lock(3);
        assert!(app.palette.iter().all(|s| !s.locked));
        // Out of range is ignored.
        app.toggle_lock(PALETTE_SIZE);
        assert!(app.palette.iter().all(|s| !s.locked));
    }

    #[test]
    fn save_appends_and_persists_one_entry() {
        let mut app = test_app();
        app.save_current_palette();
        assert_eq!(app.saved.len(), 1);
        assert_eq!(app.saved[0].colors, app.current_colors());

        let persisted = store::load_history(&app.db);
        assert_eq!(persisted.len(), 1);

        app.save_current_palette();
        assert_eq!(store::load_history(&app.db).len(), 2);
    }

    #[test]
    fn clear_empties_history_and_storage() {
        let mut app = test_app();
        app.save_current_palette();
        app.clear_saved();
        assert!(app.saved.is_empty());
        assert!(store::load_history(&app.db).is_empty());
        assert_eq!(store::get(store::PALETTES_KEY, &app.db).unwrap(), None);
    }

    #[test]
    fn theme_toggle_persists() {
        let mut app = test_app();
        assert_eq!(app.theme, ThemeMode::Light);
        app.toggle_theme();
        assert_eq!(app.theme, ThemeMode::Dark);
        assert_eq!(store::load_theme(&app.db), ThemeMode::Dark);
        app.toggle_theme();
        assert_eq!(store::load_theme(&app.db), ThemeMode::Light);
    }

    #[test]
    fn loading_a_saved_palette_resets_locks() {
        let mut app = test_app();
        set_colors(
            &mut app,
            ["#111111", "#222222", "#333333", "#444444", "#555555"],
        );
        app.save_current_palette();
        app.generate_palette();
        app.toggle_lock(0);

        app.load_selected_saved();
        assert_eq!(
            app.current_colors(),
            ["#111111", "#222222", "#333333", "#444444", "#555555"]
        );
        assert!(app.palette.iter().all(|s| !s.locked));
    }

    #[test]
    fn selection_wraps_around() {
        let mut app = test_app();
        app.move_swatch_selection_left();
        assert_eq!(app.selected_swatch_index, PALETTE_SIZE - 1);
        app.move_swatch_selection_right();
        assert_eq!(app.selected_swatch_index, 0);
    }
}
