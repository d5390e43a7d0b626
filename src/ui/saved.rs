use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::helpers::hex_to_color;
use super::theme::Theme;
use crate::app::{App, FocusMode};

/// Builds the saved-palettes sidebar: one row per saved palette showing its
/// five colors as mini blocks.
pub fn build_saved_text(app: &App) -> Text<'_> {
    let theme = Theme::new(app.theme);
    if app.saved.is_empty() {
        return Text::from(vec![
            Line::from(""),
            Line::from(Span::styled(
                "  No saved palettes yet.",
                Style::default().fg(theme.dim()),
            )),
            Line::from(Span::styled(
                "  Press 's' to save the current one.",
                Style::default().fg(theme.dim()),
            )),
        ]);
    }

    let focused = app.focus_mode == FocusMode::SavedList;
    let mut lines = vec![Line::from("")];
    for (index, saved) in app.saved.iter().enumerate() {
        let selected = focused && index == app.selected_saved_index;
        let marker_style = if selected {
            Style::default()
                .fg(theme.highlight())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.dim())
        };
        let mut spans = vec![Span::styled(if selected { " > " } else { "   " }, marker_style)];
        for color in &saved.colors {
            let style = hex_to_color(color)
                .map(|c| Style::default().fg(c))
                .unwrap_or_else(|| Style::default().fg(theme.dim()));
            spans.push(Span::styled("██", style));
        }
        spans.push(Span::styled(
            format!("  {}", index + 1),
            Style::default().fg(theme.dim()),
        ));
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  enter: Load   x: Clear all",
        Style::default().fg(theme.dim()),
    )));

    Text::from(lines)
}
