use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthChar;

use crate::app::App;
use crate::theme::Theme;

pub struct DocumentWidget;

impl DocumentWidget {
    /// Render the visible slice of the document starting at the current
    /// scroll offset.
    pub fn render(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
        if area.height == 0 {
            return;
        }

        let top = app.viewport.top_line();
        let bottom = top + area.height as usize;

        let lines: Vec<Line> = app
            .document
            .lines()
            .iter()
            .skip(top)
            .take(bottom - top)
            .map(|line| Line::raw(truncate_to_width(line, area.width as usize)))
            .collect();

        let paragraph =
            Paragraph::new(lines).style(Style::default().fg(theme.fg).bg(theme.bg));
        frame.render_widget(paragraph, area);
    }
}

/// Truncate a line to a display width, keeping double-width characters
/// intact (a wide character never straddles the boundary).
fn truncate_to_width(line: &str, width: usize) -> String {
    let mut used = 0;
    let mut out = String::new();
    for ch in line.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > width {
            break;
        }
        out.push(ch);
        used += ch_width;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate_to_width("hello world", 5), "hello");
        assert_eq!(truncate_to_width("hi", 5), "hi");
    }

    #[test]
    fn test_truncate_wide_chars() {
        // Each CJK character is two cells; the third does not fit in 5
        assert_eq!(truncate_to_width("日本語", 5), "日本");
        assert_eq!(truncate_to_width("日本語", 6), "日本語");
    }
}
