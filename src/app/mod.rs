mod state;

use crossterm::event::KeyCode;

pub use state::App;

/// Possible input events the app reacts to.
pub enum AppEvent {
    Tick,
    KeyPress(KeyCode),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppView {
    Palette,
    Help,
}

/// Which panel key navigation currently targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusMode {
    Swatches,
    SavedList,
}
