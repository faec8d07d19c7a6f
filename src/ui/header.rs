use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::theme::Palette;

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, endpoint: &str, palette: &Palette) -> Paragraph<'static> {
        let title_style = Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD);
        let separator_style = Style::default().fg(palette.separator);
        let endpoint_style = Style::default().fg(palette.dim_text);

        let line = Line::from(vec![
            Span::styled("  mathpad", title_style),
            Span::styled("  │  ", separator_style),
            Span::styled(endpoint.to_string(), endpoint_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(palette.border)),
        )
    }
}
