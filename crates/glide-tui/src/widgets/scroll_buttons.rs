use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;
use crate::controls::{control_areas, ControlId};
use crate::theme::Theme;

pub struct ScrollButtonsWidget;

impl ScrollButtonsWidget {
    /// Render the floating scroll controls over the document area.
    ///
    /// Drawn after the document so they sit on top; hidden controls are
    /// simply not drawn.
    pub fn render(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
        let Some(controls) = &app.controls else {
            return;
        };

        let (up_area, down_area) = control_areas(area);
        let visibility = controls.visibility();

        if visibility.show_up {
            render_control(
                frame,
                up_area,
                "▲",
                controls.hovered() == Some(ControlId::Up),
                theme,
            );
        }
        if visibility.show_down {
            render_control(
                frame,
                down_area,
                "▼",
                controls.hovered() == Some(ControlId::Down),
                theme,
            );
        }
    }
}

fn render_control(frame: &mut Frame, area: Rect, glyph: &str, hovered: bool, theme: &Theme) {
    if area.is_empty() {
        return;
    }

    let style = if hovered {
        Style::default()
            .fg(theme.control_hover_fg)
            .bg(theme.control_hover_bg)
    } else {
        Style::default().fg(theme.control_fg).bg(theme.control_bg)
    };

    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.control_border))
        .style(style);
    let paragraph = Paragraph::new(glyph)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}
