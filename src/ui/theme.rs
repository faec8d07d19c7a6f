//! Color palettes for the two themes.

use ratatui::style::Color;

use crate::config::Theme;

/// Named colors used across the UI.
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub dim_text: Color,
    pub border: Color,
    pub separator: Color,
    pub accent: Color,
    pub error: Color,
    pub pending: Color,
    pub key_selected: Color,
}

pub const DARK: Palette = Palette {
    background: Color::Rgb(0x1a, 0x1a, 0x1a),
    text: Color::Rgb(0xe5, 0xe5, 0xe5),
    dim_text: Color::Rgb(0x6b, 0x72, 0x80),
    border: Color::Rgb(0x40, 0x40, 0x40),
    separator: Color::Rgb(0x6b, 0x72, 0x80),
    accent: Color::Rgb(0xf5, 0x9e, 0x0b),
    error: Color::Rgb(0xef, 0x44, 0x44),
    pending: Color::Rgb(0x22, 0xc5, 0x5e),
    key_selected: Color::Rgb(0x26, 0x26, 0x26),
};

pub const LIGHT: Palette = Palette {
    background: Color::Rgb(0xfa, 0xfa, 0xf7),
    text: Color::Rgb(0x1f, 0x29, 0x37),
    dim_text: Color::Rgb(0x6b, 0x72, 0x80),
    border: Color::Rgb(0xd1, 0xd5, 0xdb),
    separator: Color::Rgb(0x9c, 0xa3, 0xaf),
    accent: Color::Rgb(0xb4, 0x53, 0x09),
    error: Color::Rgb(0xdc, 0x26, 0x26),
    pending: Color::Rgb(0x15, 0x80, 0x3d),
    key_selected: Color::Rgb(0xe5, 0xe7, 0xeb),
};

/// Palette for the given theme preference.
pub fn palette(theme: Theme) -> &'static Palette {
    match theme {
        Theme::Dark => &DARK,
        Theme::Light => &LIGHT,
    }
}
