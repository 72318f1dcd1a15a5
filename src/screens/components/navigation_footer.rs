use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

/// Footer with `key = action` hints, wrapped to the available width.
#[derive(Debug, Clone)]
pub struct NavigationFooter {}

impl NavigationFooter {
    pub fn new() -> Self {
        Self {}
    }

    pub fn render(&self, f: &mut Frame, area: Rect, entries: Vec<(String, String)>) {
        let max_width = area.width as usize;
        let mut lines: Vec<Line> = Vec::new();
        let mut current: Vec<Span> = Vec::new();
        let mut width = 0;
        for (key, action) in entries {
            let entry_width = key.len() + action.len() + 6;
            if width + entry_width > max_width && !current.is_empty() {
                lines.push(Line::from(std::mem::take(&mut current)));
                width = 0;
            }
            current.push(Span::styled(key, Style::default().fg(Color::Cyan)));
            current.push(Span::raw(" = "));
            current.push(Span::styled(action, Style::default().fg(Color::White)));
            current.push(Span::raw("   "));
            width += entry_width;
        }
        if !current.is_empty() {
            lines.push(Line::from(current));
        }
        let paragraph = Paragraph::new(Text::from(lines))
            .block(
                Block::default()
                    .borders(Borders::NONE)
                    .padding(Padding::new(1, 0, 0, 0)),
            )
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }
}
