mod help;
mod helpers;
mod saved;
mod swatches;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::app::{App, AppView};
use theme::Theme;

/// Renders the entire UI for a single frame.
pub fn draw(frame: &mut Frame, app: &App) {
    let theme = Theme::new(app.theme);
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(area);

    let header_lines = vec![Line::from(vec![
        Span::styled(
            "  Swatchr  ",
            Style::default().fg(Color::Black).bg(theme.primary()),
        ),
        Span::raw(" "),
        Span::styled(
            "color palette studio",
            Style::default()
                .fg(theme.secondary())
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(
            format!("[{} mode]", app.theme.as_str()),
            Style::default().fg(theme.dim()),
        ),
    ])];
    let header = Paragraph::new(Text::from(header_lines))
        .alignment(Alignment::Left)
        .block(bordered_block(&theme));
    frame.render_widget(header, layout[0]);

    match app.view {
        AppView::Help => {
            let body = Paragraph::new(help::build_help_text(app))
                .style(Style::default().fg(theme.text()))
                .block(bordered_block(&theme).title(" Help "));
            frame.render_widget(body, layout[1]);
        }
        AppView::Palette => {
            let panels = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Min(40), Constraint::Length(30)])
                .split(layout[1]);

            let palette_panel = Paragraph::new(swatches::build_swatches_text(app))
                .style(Style::default().fg(theme.text()))
                .block(bordered_block(&theme).title(" Active palette "));
            frame.render_widget(palette_panel, panels[0]);

            let saved_panel = Paragraph::new(saved::build_saved_text(app))
                .style(Style::default().fg(theme.text()))
                .block(
                    bordered_block(&theme)
                        .title(Line::from(format!(" Saved ({}) ", app.saved.len()))),
                );
            frame.render_widget(saved_panel, panels[1]);
        }
    }

    let footer = Paragraph::new(Text::from(status_line(app, &theme)))
        .alignment(Alignment::Left)
        .block(bordered_block(&theme));
    frame.render_widget(footer, layout[2]);
}

fn bordered_block(theme: &Theme) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(theme.secondary()))
}

fn status_line<'a>(app: &'a App, theme: &Theme) -> Line<'a> {
    match &app.status {
        Some(status) => Line::from(Span::styled(
            format!(" {status}"),
            Style::default().fg(theme.warn()),
        )),
        None => Line::from(Span::styled(
            " g: Generate   s: Save   t: Theme   ?: Help   q: Quit",
            Style::default().fg(theme.dim()),
        )),
    }
}
