use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use super::components::*;
use super::theme::*;

pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Hit regions are rebuilt from scratch every frame
    app.interactions.clear();

    // Main vertical layout: logo, content, hotkeys
    let main_layout = Layout::vertical([
        Constraint::Length(2),  // Logo + spacing
        Constraint::Min(0),     // Content
        Constraint::Length(1),  // Hotkeys
    ])
    .split(area);

    render_logo(frame, main_layout[0]);

    // Horizontal split: sidebar | picker
    let content_layout = Layout::horizontal([
        Constraint::Length(34), // Sidebar
        Constraint::Min(0),     // Picker
    ])
    .split(main_layout[1]);

    render_sidebar(frame, content_layout[0], app);

    let picker_area = content_layout[1];
    let frame_block = Block::default()
        .borders(Borders::LEFT)
        .border_style(Style::new().fg(TEXT_DIM));
    let picker_inner = frame_block.inner(picker_area);
    frame.render_widget(frame_block, picker_area);

    render_picker_modal(frame, picker_inner, app);

    if app.show_help {
        render_help_popup(frame, area, &mut app.interactions);
    }

    render_hotkeys(frame, main_layout[2]);
}

fn render_hotkeys(frame: &mut Frame, area: Rect) {
    let hotkeys = Line::from(vec![
        Span::styled("[↑↓]", Style::new().fg(TEXT_WHITE)),
        Span::styled(" pick • ", Style::new().fg(TEXT_DIM)),
        Span::styled("[Tab]", Style::new().fg(TEXT_WHITE)),
        Span::styled(" column • ", Style::new().fg(TEXT_DIM)),
        Span::styled("[Enter]", Style::new().fg(TEXT_WHITE)),
        Span::styled(" save • ", Style::new().fg(TEXT_DIM)),
        Span::styled("[1-3]", Style::new().fg(TEXT_WHITE)),
        Span::styled(" picker • ", Style::new().fg(TEXT_DIM)),
        Span::styled("[?]", Style::new().fg(TEXT_WHITE)),
        Span::styled(" help • ", Style::new().fg(TEXT_DIM)),
        Span::styled("[q]", Style::new().fg(TEXT_WHITE)),
        Span::styled("uit", Style::new().fg(TEXT_DIM)),
    ]);

    frame.render_widget(Paragraph::new(hotkeys).centered(), area);
}
