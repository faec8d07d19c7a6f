//! The on-screen keypad grid.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::expr::Token;
use crate::ui::theme::Palette;

pub const ROWS: usize = 5;
pub const COLS: usize = 4;

/// Keypad layout, row-major.
pub const LAYOUT: [[Token; COLS]; ROWS] = [
    [Token::Clear, Token::Backspace, Token::Input("("), Token::Input(")")],
    [Token::Input("7"), Token::Input("8"), Token::Input("9"), Token::Input("/")],
    [Token::Input("4"), Token::Input("5"), Token::Input("6"), Token::Input("*")],
    [Token::Input("1"), Token::Input("2"), Token::Input("3"), Token::Input("-")],
    [Token::Input("0"), Token::Input("."), Token::Evaluate, Token::Input("+")],
];

/// Position of the cell selected with the arrow keys.
///
/// Starts on `=` so a bare Enter submits the expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadSelection {
    pub row: usize,
    pub col: usize,
}

impl Default for KeypadSelection {
    fn default() -> Self {
        // The `=` cell.
        Self { row: 4, col: 2 }
    }
}

impl KeypadSelection {
    pub fn token(&self) -> Token {
        LAYOUT[self.row][self.col]
    }

    pub fn move_up(&mut self) {
        self.row = if self.row == 0 { ROWS - 1 } else { self.row - 1 };
    }

    pub fn move_down(&mut self) {
        self.row = if self.row + 1 >= ROWS { 0 } else { self.row + 1 };
    }

    pub fn move_left(&mut self) {
        self.col = if self.col == 0 { COLS - 1 } else { self.col - 1 };
    }

    pub fn move_right(&mut self) {
        self.col = if self.col + 1 >= COLS { 0 } else { self.col + 1 };
    }
}

/// Render the keypad grid into `area`.
///
/// While an evaluation is pending the whole pad renders dimmed and the
/// selection highlight disappears, signalling that input is disabled.
pub fn render(
    frame: &mut Frame<'_>,
    area: Rect,
    selection: KeypadSelection,
    palette: &Palette,
    enabled: bool,
) {
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, ROWS as u32); ROWS])
        .split(area);

    for (r, row) in LAYOUT.iter().enumerate() {
        let col_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, COLS as u32); COLS])
            .split(row_areas[r]);

        for (c, token) in row.iter().enumerate() {
            let selected = enabled && selection.row == r && selection.col == c;

            let mut style = Style::default().fg(palette.text);
            if *token == Token::Evaluate {
                style = style.fg(palette.accent);
            }
            if !enabled {
                style = style.add_modifier(Modifier::DIM);
            }
            if selected {
                style = style.bg(palette.key_selected).add_modifier(Modifier::BOLD);
            }

            let border_color = if selected { palette.accent } else { palette.border };
            let cell = Paragraph::new(Line::from(Span::styled(token.label(), style)))
                .alignment(Alignment::Center)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(border_color)),
                );
            frame.render_widget(cell, col_areas[c]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_selection_is_the_evaluate_key() {
        assert_eq!(KeypadSelection::default().token(), Token::Evaluate);
    }

    #[test]
    fn selection_wraps_vertically() {
        let mut selection = KeypadSelection { row: 0, col: 0 };
        selection.move_up();
        assert_eq!(selection.row, ROWS - 1);
        selection.move_down();
        assert_eq!(selection.row, 0);
    }

    #[test]
    fn selection_wraps_horizontally() {
        let mut selection = KeypadSelection { row: 1, col: COLS - 1 };
        selection.move_right();
        assert_eq!(selection.col, 0);
        selection.move_left();
        assert_eq!(selection.col, COLS - 1);
    }

    #[test]
    fn every_cell_has_a_nonempty_label() {
        for row in LAYOUT.iter() {
            for token in row.iter() {
                assert!(!token.label().is_empty());
            }
        }
    }
}
