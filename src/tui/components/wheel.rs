//! Scroll column widget.
//!
//! Draws the visible slots of one column, weighting each row by its
//! distance from the center, and registers the rows for mouse input.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::picker::Column;
use crate::tui::interaction::{ClickRegion, InteractionRegistry, InteractiveRegion};
use crate::tui::theme::*;

/// Render column `index` into `area` and register its rows.
pub fn render_wheel(
    frame: &mut Frame,
    area: Rect,
    column: &dyn Column,
    index: usize,
    focused: bool,
    interactions: &mut InteractionRegistry,
) {
    let border = if focused { LOGO_LIGHT_BLUE } else { TEXT_DIM };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::new().fg(border))
        .title(Span::styled(
            format!(" {} ", column.name()),
            Style::new().fg(border),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if column.is_disabled() {
        let line = Line::styled("-", Style::new().fg(TEXT_FAINT)).centered();
        frame.render_widget(Paragraph::new(line), inner);
        return;
    }

    let rows = column.row_views();
    let width = inner.width as usize;
    let lines: Vec<Line> = rows
        .iter()
        .take(inner.height as usize)
        .map(|row| {
            let style = weight_style(row.distance, focused);
            if row.distance == 0 {
                let label = format!("{:^w$}", row.label, w = width.saturating_sub(2));
                Line::from(vec![
                    Span::styled("▸", Style::new().fg(LOGO_GOLD)),
                    Span::styled(label, style),
                    Span::styled("◂", Style::new().fg(LOGO_GOLD)),
                ])
            } else {
                Line::styled(format!("{:^width$}", row.label), style)
            }
        })
        .collect();
    let slots = lines.len();
    frame.render_widget(Paragraph::new(lines), inner);

    interactions.register(InteractiveRegion::column(
        column.name(),
        index,
        ClickRegion::from(area),
        inner.y,
        slots,
    ));
}

/// Width a column widget needs for its longest label.
pub fn wheel_width(column: &dyn Column) -> u16 {
    let longest = column
        .row_views()
        .iter()
        .map(|row| row.label.chars().count())
        .max()
        .unwrap_or(0)
        .max(column.name().len());
    (longest as u16).saturating_add(6)
}

/// Summary line shown under the columns while picking.
pub fn preview_line(description: Option<String>) -> Line<'static> {
    match description {
        Some(text) => Line::from(vec![
            Span::styled("→ ", Style::new().fg(LOGO_MINT)),
            Span::styled(text, Style::new().fg(TEXT_WHITE).bold()),
        ]),
        None => Line::styled("no selection", Style::new().fg(TEXT_DIM)),
    }
}
