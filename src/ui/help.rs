use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::theme::Theme;
use crate::app::App;

pub fn build_help_text(app: &App) -> Text<'_> {
    let theme = Theme::new(app.theme);
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        "Key bindings",
        Style::default()
            .fg(theme.accent())
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    lines.push(section_title(&theme, "Global"));
    lines.extend(section_lines(
        &theme,
        &[
            "q: Quit",
            "?: Toggle help",
            "t: Toggle light/dark theme",
            "Tab: Toggle focus (palette / saved list)",
            "esc: Back",
        ],
    ));

    lines.push(Line::from(""));
    lines.push(section_title(&theme, "Palette"));
    lines.extend(section_lines(
        &theme,
        &[
            "Left/Right: Select swatch",
            "g: Generate new colors (locked swatches keep theirs)",
            "space: Lock/unlock the selected swatch",
            "c: Copy the selected hex value to the clipboard",
            "s: Save the current palette",
            "j: Export palette.json",
            "p: Export palette.png",
        ],
    ));

    lines.push(Line::from(""));
    lines.push(section_title(&theme, "Saved palettes"));
    lines.extend(section_lines(
        &theme,
        &[
            "Up/Down: Move selection",
            "enter: Load the selected palette",
            "x: Clear all saved palettes",
        ],
    ));

    Text::from(lines)
}

fn section_title(theme: &Theme, title: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {title}"),
        Style::default()
            .fg(theme.secondary())
            .add_modifier(Modifier::BOLD),
    ))
}

fn section_lines(theme: &Theme, items: &[&str]) -> Vec<Line<'static>> {
    items
        .iter()
        .map(|item| {
            Line::from(Span::styled(
                format!("  - {item}"),
                Style::default().fg(theme.text()),
            ))
        })
        .collect()
}
