//! Help popup component.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::tui::interaction::{ClickRegion, InteractionRegistry, InteractiveRegion};
use crate::tui::theme::*;

const SHORTCUTS: &[(&str, &str)] = &[
    ("  ↑/↓ j/k  ", "Previous / next value"),
    ("  PgUp/Dn  ", "Jump five values"),
    ("  ←/→ Tab  ", "Focus column"),
    ("  Enter    ", "Save the current values"),
    ("  r        ", "Reset columns"),
    ("  1 2 3    ", "Time / monthly / yearly picker"),
    ("  ?        ", "Toggle this help"),
    ("  q Esc    ", "Quit"),
];

const MOUSE: &[(&str, &str)] = &[
    ("  click    ", "Select the value"),
    ("  drag     ", "Scroll the column"),
    ("  wheel    ", "Scroll, snaps when you stop"),
];

fn section<'a>(title: &'a str, rows: &'a [(&'a str, &'a str)]) -> Vec<Line<'a>> {
    let mut lines = vec![Line::styled(title, Style::new().fg(LOGO_LIGHT_BLUE).bold())];
    lines.extend(rows.iter().map(|(key, text)| {
        Line::from(vec![
            Span::styled(*key, Style::new().fg(TEXT_WHITE)),
            Span::styled(*text, Style::new().fg(TEXT_DIM)),
        ])
    }));
    lines
}

/// Render the help popup and block mouse input underneath it.
pub fn render_help_popup(frame: &mut Frame, area: Rect, interactions: &mut InteractionRegistry) {
    let popup_width = 48u16;
    let popup_height = (SHORTCUTS.len() + MOUSE.len() + 7) as u16;
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(
        x,
        y,
        popup_width.min(area.width),
        popup_height.min(area.height),
    );

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let mut lines: Vec<Line> = vec![Line::styled(
        "Shortcuts",
        Style::new().fg(TEXT_WHITE).bold(),
    )];
    lines.push(Line::raw(""));
    lines.extend(section("Keyboard", SHORTCUTS));
    lines.push(Line::raw(""));
    lines.extend(section("Mouse", MOUSE));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::new().fg(LOGO_GOLD));
    frame.render_widget(Paragraph::new(lines).block(block), popup_area);

    interactions.register(
        InteractiveRegion::blocker("help", ClickRegion::from(popup_area)).with_priority(10),
    );
}
