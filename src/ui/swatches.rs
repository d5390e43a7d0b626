use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::helpers::{contrast_for, hex_to_color};
use super::theme::Theme;
use crate::app::{App, FocusMode};

/// Builds the active-palette panel: one row per swatch with a color block,
/// its uppercase hex value, and the lock marker.
pub fn build_swatches_text(app: &App) -> Text<'_> {
    let theme = Theme::new(app.theme);
    let focused = app.focus_mode == FocusMode::Swatches;

    let mut lines = vec![Line::from("")];
    for (index, swatch) in app.palette.iter().enumerate() {
        let selected = focused && index == app.selected_swatch_index;
        let marker_style = if selected {
            Style::default()
                .fg(theme.highlight())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.dim())
        };
        let block_style = hex_to_color(&swatch.color)
            .map(|color| Style::default().bg(color).fg(contrast_for(&swatch.color)))
            .unwrap_or_default();
        let hex_style = hex_to_color(&swatch.color)
            .map(|color| Style::default().fg(color).add_modifier(Modifier::BOLD))
            .unwrap_or_else(|| Style::default().fg(theme.text()));

        let mut spans = vec![
            Span::styled(if selected { " > " } else { "   " }, marker_style),
            Span::styled(
                format!("  {}  ", swatch.color.to_ascii_uppercase()),
                block_style,
            ),
            Span::raw("  "),
            Span::styled(swatch.color.to_ascii_uppercase(), hex_style),
        ];
        if swatch.locked {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                "[locked]",
                Style::default().fg(theme.warn()),
            ));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "  g: Generate   space: Lock/Unlock   c: Copy hex",
        Style::default().fg(theme.dim()),
    )));
    lines.push(Line::from(Span::styled(
        "  s: Save   j: Export JSON   p: Export PNG",
        Style::default().fg(theme.dim()),
    )));

    Text::from(lines)
}
