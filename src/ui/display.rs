//! The expression display and its status line.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::expr::format_expression;
use crate::ui::app::StatusLine;
use crate::ui::theme::Palette;

/// Render the formatted expression with a one-row status line below it.
///
/// An empty buffer shows `0`, like any desk calculator at rest.
pub fn render(
    frame: &mut Frame<'_>,
    area: Rect,
    buffer: &str,
    status: Option<StatusLine>,
    palette: &Palette,
) {
    if area.height == 0 {
        return;
    }

    let expr_height = area.height.saturating_sub(1);
    let expr_area = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: expr_height,
    };
    let status_area = Rect {
        x: area.x,
        y: area.y + expr_height,
        width: area.width,
        height: 1,
    };

    if expr_height > 0 {
        let shown = if buffer.is_empty() {
            "0".to_string()
        } else {
            format_expression(buffer)
        };

        let expression = Paragraph::new(Line::from(Span::styled(
            shown,
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border)),
        );
        frame.render_widget(expression, expr_area);
    }

    let line = match status {
        Some(StatusLine::Pending) => Line::from(Span::styled(
            " Evaluating…",
            Style::default()
                .fg(palette.pending)
                .add_modifier(Modifier::ITALIC),
        )),
        Some(StatusLine::Error(message)) => Line::from(Span::styled(
            format!(" {}", message),
            Style::default().fg(palette.error),
        )),
        None => Line::default(),
    };
    frame.render_widget(Paragraph::new(line), status_area);
}
