use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::theme::Theme;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
        let status_text = format!(
            " {} | {} lines | {}",
            app.document.name(),
            app.document.height(),
            app.position_label()
        );

        let help_hint = " q:quit j/k:scroll gg/G:top/bottom ";
        let padding_len = area
            .width
            .saturating_sub(status_text.chars().count() as u16 + help_hint.len() as u16)
            as usize;

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default().fg(theme.status_fg).bg(theme.status_bg),
            ),
            Span::styled(
                " ".repeat(padding_len),
                Style::default().bg(theme.status_bg),
            ),
            Span::styled(
                help_hint,
                Style::default().fg(theme.status_hint).bg(theme.status_bg),
            ),
        ]);

        let paragraph = Paragraph::new(line);
        frame.render_widget(paragraph, area);
    }
}
