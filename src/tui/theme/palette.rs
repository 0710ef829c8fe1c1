//! UI chrome colours, plus the bridge from palette colours to terminal colours

use ratatui::style::Color;

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_primary: Color,
    pub bg_highlight: Color,
    pub fg_primary: Color,
    pub fg_secondary: Color,
    pub accent: Color,
    pub accent_alt: Color,
    pub border: Color,
    pub confirm: Color,
}

impl Palette {
    /// Greys only, so the swatches are the only colour on screen
    pub const MONO: Self = Self {
        bg_primary: Color::Rgb(0, 0, 0),          // #000000
        bg_highlight: Color::Rgb(48, 48, 48),     // #303030
        fg_primary: Color::Rgb(255, 255, 255),    // #ffffff
        fg_secondary: Color::Rgb(136, 136, 136),  // #888888
        accent: Color::Rgb(255, 255, 255),        // #ffffff
        accent_alt: Color::Rgb(200, 200, 200),    // #c8c8c8
        border: Color::Rgb(64, 64, 64),           // #404040
        confirm: Color::Rgb(200, 200, 200),       // #c8c8c8
    };
}

/// Terminal truecolor for a generated colour.
pub fn swatch_color(c: crate::palette::Color) -> Color {
    let (r, g, b) = c.channels();
    Color::Rgb(r, g, b)
}
