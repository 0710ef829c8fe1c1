//! Greyscale chrome so the swatches are the only colour on screen

pub mod icons;
pub mod palette;

pub use icons::Icons;
pub use palette::Palette;

use ratatui::symbols::border;

#[derive(Debug, Clone)]
pub struct Theme {
    pub palette: Palette,
    pub icons: Icons,
}

impl Theme {
    pub const MONO: Self = Self {
        palette: Palette::MONO,
        icons: Icons::nerd(),
    };

    pub fn border_set(&self) -> border::Set<'static> {
        border::ROUNDED
    }
}

pub fn get_theme() -> &'static Theme {
    &Theme::MONO
}
