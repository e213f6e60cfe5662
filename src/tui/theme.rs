use ratatui::style::{Color, Modifier, Style};

// Logo colors
pub const LOGO_CORAL: Color = Color::Rgb(232, 131, 136);     // #E88388
pub const LOGO_GOLD: Color = Color::Rgb(219, 171, 121);      // #DBAB79
pub const LOGO_LIGHT_BLUE: Color = Color::Rgb(124, 175, 194); // #7CAFC2
pub const LOGO_MINT: Color = Color::Rgb(161, 193, 129);       // #A1C181

// UI colors
pub const TEXT_DIM: Color = Color::Rgb(136, 136, 136);        // #888888
pub const TEXT_FAINT: Color = Color::Rgb(88, 88, 88);         // #585858
pub const TEXT_WHITE: Color = Color::Rgb(255, 255, 255);      // #FFFFFF

/// Style for a column row `distance` slots away from the center.
pub fn weight_style(distance: i64, focused: bool) -> Style {
    match distance.unsigned_abs() {
        0 if focused => Style::new().fg(LOGO_MINT).add_modifier(Modifier::BOLD),
        0 => Style::new().fg(TEXT_WHITE).add_modifier(Modifier::BOLD),
        1 => Style::new().fg(TEXT_DIM),
        _ => Style::new().fg(TEXT_FAINT),
    }
}
