//! Keyboard handling.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::expr::Token;
use crate::ui::app::App;

/// Route a key event to the app.
///
/// Quit and theme toggle are session commands and stay available while an
/// evaluation is pending; everything else maps to keypad tokens, which
/// the app rejects on its own while a request is outstanding.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => app.request_quit(),
        KeyCode::Char('q') | KeyCode::Char('c') if ctrl => app.request_quit(),
        KeyCode::Char('t') if ctrl => app.toggle_theme(),
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => app.on_arrow(key.code),
        KeyCode::Enter => app.press_selected(),
        KeyCode::Backspace => app.press(Token::Backspace),
        KeyCode::Char(c) => {
            if let Some(token) = Token::from_char(c) {
                app.press(token);
            }
        }
        _ => {}
    }
}
