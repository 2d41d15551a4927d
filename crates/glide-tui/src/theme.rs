use ratatui::style::Color;

/// Color palette for the pager
#[derive(Debug, Clone)]
pub struct Theme {
    // Base colors
    pub bg: Color,
    pub fg: Color,
    pub dim: Color,

    // Status bar
    pub status_bg: Color,
    pub status_fg: Color,
    pub status_hint: Color,

    // Floating controls
    pub control_bg: Color,
    pub control_fg: Color,
    pub control_border: Color,
    pub control_hover_bg: Color,
    pub control_hover_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Gruvbox Material dark
        Self {
            bg: Color::Rgb(0x28, 0x28, 0x28),
            fg: Color::Rgb(0xd4, 0xbe, 0x98),
            dim: Color::Rgb(0x92, 0x83, 0x74),
            status_bg: Color::Rgb(0x45, 0x40, 0x3d),
            status_fg: Color::Rgb(0xd4, 0xbe, 0x98),
            status_hint: Color::Rgb(0xa8, 0x99, 0x84),
            control_bg: Color::Rgb(0x32, 0x30, 0x2f),
            control_fg: Color::Rgb(0xa8, 0x99, 0x84),
            control_border: Color::Rgb(0x7c, 0x6f, 0x64),
            control_hover_bg: Color::Rgb(0x50, 0x49, 0x45),
            control_hover_fg: Color::Rgb(0xd8, 0xa6, 0x57),
        }
    }
}
