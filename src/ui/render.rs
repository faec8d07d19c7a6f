//! Frame composition.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::display;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::keypad;
use crate::ui::theme;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let palette = theme::palette(app.theme());
    let area = frame.area();

    // Whole-screen background so the theme covers the terminal.
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        area,
    );

    let header_height = 3.min(area.height);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let body_height = area.height.saturating_sub(header_height + footer_height);
    let display_height = 4.min(body_height);
    let keypad_height = body_height.saturating_sub(display_height);

    let header_area = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let display_area = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: display_height,
    };
    let keypad_area = Rect {
        x: area.x,
        y: display_area.y + display_height,
        width: area.width,
        height: keypad_height,
    };
    let footer_area = Rect {
        x: area.x,
        y: keypad_area.y + keypad_height,
        width: area.width,
        height: footer_height,
    };

    frame.render_widget(Header::new().widget(&app.endpoint(), palette), header_area);
    display::render(frame, display_area, app.buffer(), app.status_line(), palette);
    keypad::render(
        frame,
        keypad_area,
        app.selection(),
        palette,
        app.input_enabled(),
    );
    frame.render_widget(Footer::new().widget(footer_area, palette), footer_area);
}
