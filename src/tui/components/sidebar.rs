//! Sidebar component: logo, picker tabs and saved values.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::config::PickerKind;
use crate::tui::theme::*;

const LOGO: &str = "wheelpick";

/// Render the logo centered in `area`.
pub fn render_logo(frame: &mut Frame, area: Rect) {
    let palette = [LOGO_CORAL, LOGO_GOLD, LOGO_LIGHT_BLUE, LOGO_MINT];
    let padding = (area.width.saturating_sub(LOGO.len() as u16)) / 2;
    let mut spans = vec![Span::raw(" ".repeat(padding as usize))];
    spans.extend(LOGO.chars().enumerate().map(|(i, c)| {
        Span::styled(c.to_string(), Style::new().fg(palette[i % palette.len()]).bold())
    }));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the picker tabs and the list of saved values.
pub fn render_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines: Vec<Line> = vec![];

    let tabs = [
        (PickerKind::Time, "1", "Reminder time"),
        (PickerKind::Month, "2", "Monthly date"),
        (PickerKind::Year, "3", "Yearly date"),
    ];
    for (kind, key, label) in tabs {
        let is_active = app.picker.kind() == kind;
        let cursor = if is_active { "> " } else { "  " };
        lines.push(Line::from(vec![
            Span::styled(cursor, Style::new().fg(LOGO_MINT)),
            Span::styled(format!("{} ", key), Style::new().fg(TEXT_DIM)),
            Span::styled(
                label,
                if is_active {
                    Style::new().fg(TEXT_WHITE).bold()
                } else {
                    Style::new().fg(TEXT_WHITE)
                },
            ),
        ]));
    }

    lines.push(Line::raw(""));
    lines.push(Line::styled("Saved", Style::new().fg(LOGO_LIGHT_BLUE).bold()));

    if app.saved.is_empty() {
        lines.push(Line::styled("  nothing yet", Style::new().fg(TEXT_DIM)));
    }

    // Newest first, as many as fit
    let room = (area.height as usize).saturating_sub(lines.len());
    for entry in app.saved.iter().rev().take(room) {
        lines.push(Line::from(vec![
            Span::styled(format!("  {}: ", entry.title), Style::new().fg(TEXT_DIM)),
            Span::styled(entry.description.clone(), Style::new().fg(TEXT_WHITE)),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), area);
}
