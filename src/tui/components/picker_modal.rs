//! Picker popup: the active picker's columns side by side.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Margin, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::App;
use crate::tui::theme::*;

use super::wheel::{preview_line, render_wheel, wheel_width};

/// Render the active picker as a centered popup.
pub fn render_picker_modal(frame: &mut Frame, area: Rect, app: &mut App) {
    let columns = app.picker.columns();
    let widths: Vec<u16> = columns.iter().map(|c| wheel_width(*c)).collect();
    let body_height = app.spec.visible_slots as u16 + 2;

    let popup_width = (widths.iter().sum::<u16>() + widths.len() as u16 + 3)
        .max(36)
        .min(area.width);
    let popup_height = (body_height + 4).min(area.height);
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(x, y, popup_width, popup_height);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::new().fg(LOGO_GOLD))
        .title(Span::styled(
            format!(" {} ", app.picker.title()),
            Style::new().fg(TEXT_WHITE).bold(),
        ));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let [body, preview, status] = Layout::vertical([
        Constraint::Length(body_height),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner.inner(Margin::new(1, 0)));

    // Center the columns horizontally inside the body
    let total: u16 = widths.iter().sum::<u16>() + widths.len().saturating_sub(1) as u16;
    let left = body.x + body.width.saturating_sub(total) / 2;
    let mut cursor = left;
    for (index, (column, width)) in columns.iter().zip(&widths).enumerate() {
        let width = (*width).min((body.x + body.width).saturating_sub(cursor));
        if width == 0 {
            break;
        }
        let column_area = Rect::new(cursor, body.y, width, body.height);
        render_wheel(
            frame,
            column_area,
            *column,
            index,
            index == app.focus,
            &mut app.interactions,
        );
        cursor = cursor.saturating_add(width + 1);
    }

    frame.render_widget(Paragraph::new(preview_line(app.picker.describe())).centered(), preview);

    if let Some(message) = &app.status {
        let line = Line::styled(message.clone(), Style::new().fg(TEXT_DIM));
        frame.render_widget(Paragraph::new(line).centered(), status);
    }
}
