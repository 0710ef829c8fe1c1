//! Swatch display - one full-width block per palette colour, stacked top to bottom

use crate::app::state::AppState;
use crate::config::SwatchConfig;
use crate::palette::Color;
use crate::tui::theme::{get_theme, palette::swatch_color};
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Widget},
};

/// Stack of colour blocks with centred hex labels. Blocks that do not fit
/// the area are clipped.
pub struct Swatches<'a> {
    colors: &'a [Color],
    height: u16,
    spacing: u16,
}

impl<'a> Swatches<'a> {
    pub fn new(colors: &'a [Color], cfg: &SwatchConfig) -> Self {
        Self {
            colors,
            height: cfg.height.max(1),
            spacing: cfg.spacing,
        }
    }

    /// Rows needed to show every block.
    pub fn total_height(&self) -> u16 {
        let count = u16::try_from(self.colors.len()).unwrap_or(u16::MAX);
        count.saturating_mul(self.height.saturating_add(self.spacing))
    }
}

impl Widget for Swatches<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let step = self.height.saturating_add(self.spacing);
        for (i, color) in self.colors.iter().enumerate() {
            let Some(top) = u16::try_from(i)
                .ok()
                .and_then(|i| i.checked_mul(step))
                .and_then(|offset| area.y.checked_add(offset))
            else {
                break;
            };
            if top >= area.bottom() {
                break;
            }
            let rows = self.height.min(area.bottom() - top);
            let bg = swatch_color(*color);
            buf.set_style(Rect::new(area.x, top, area.width, rows), Style::default().bg(bg));

            let label = color.to_string();
            let label_width = label.len() as u16;
            if area.width < label_width {
                continue;
            }
            let mid = top.saturating_add((self.height - 1) / 2);
            if mid >= area.bottom() {
                continue;
            }
            let x = area.x + (area.width - label_width) / 2;
            let fg = swatch_color(color.text_color().color());
            buf.set_string(
                x,
                mid,
                &label,
                Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD),
            );
        }
    }
}

pub fn render(frame: &mut Frame, cfg: &SwatchConfig, state: &AppState, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.palette.border))
        .title(format!(" {} Palette ", icons.palette))
        .title_style(Style::default().fg(theme.palette.accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let swatches = Swatches::new(state.controller.palette(), cfg);
    if swatches.total_height() > inner.height {
        tracing::trace!(
            needed = swatches.total_height(),
            available = inner.height,
            "swatches clipped"
        );
    }
    frame.render_widget(swatches, inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg(height: u16, spacing: u16) -> SwatchConfig {
        SwatchConfig { height, spacing }
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (buf.area.x..buf.area.right())
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_blocks_and_labels() {
        let colors = [Color::BLACK, Color::WHITE];
        let area = Rect::new(0, 0, 11, 6);
        let mut buf = Buffer::empty(area);
        Swatches::new(&colors, &cfg(3, 0)).render(area, &mut buf);

        // first block: rows 0..3 black, label on row 1 in white
        assert_eq!(buf[(0, 0)].bg, ratatui::style::Color::Rgb(0, 0, 0));
        assert_eq!(buf[(10, 2)].bg, ratatui::style::Color::Rgb(0, 0, 0));
        assert_eq!(row_text(&buf, 1), "  #000000  ");
        assert_eq!(buf[(2, 1)].fg, ratatui::style::Color::Rgb(255, 255, 255));

        // second block: rows 3..6 white, label on row 4 in black
        assert_eq!(buf[(0, 3)].bg, ratatui::style::Color::Rgb(255, 255, 255));
        assert_eq!(row_text(&buf, 4), "  #FFFFFF  ");
        assert_eq!(buf[(2, 4)].fg, ratatui::style::Color::Rgb(0, 0, 0));
    }

    #[test]
    fn test_spacing_and_total_height() {
        let colors = [Color::rgb(1, 2, 3); 3];
        let swatches = Swatches::new(&colors, &cfg(2, 1));
        assert_eq!(swatches.total_height(), 9);

        let area = Rect::new(0, 0, 10, 9);
        let mut buf = Buffer::empty(area);
        swatches.render(area, &mut buf);
        let blue = ratatui::style::Color::Rgb(1, 2, 3);
        assert_eq!(buf[(0, 0)].bg, blue);
        assert_eq!(buf[(0, 1)].bg, blue);
        assert_ne!(buf[(0, 2)].bg, blue);
        assert_eq!(buf[(0, 3)].bg, blue);
    }

    #[test]
    fn test_extreme_geometry_does_not_overflow() {
        let colors = [Color::BLACK; 3];
        let swatches = Swatches::new(&colors, &cfg(u16::MAX, u16::MAX));
        assert_eq!(swatches.total_height(), u16::MAX);

        let area = Rect::new(0, 0, 10, 4);
        let mut buf = Buffer::empty(area);
        swatches.render(area, &mut buf);
        assert_eq!(buf[(0, 3)].bg, ratatui::style::Color::Rgb(0, 0, 0));
    }

    #[test]
    fn test_clips_to_area() {
        let colors = [Color::WHITE; 12];
        let area = Rect::new(0, 0, 10, 4);
        let mut buf = Buffer::empty(area);
        // must not write past the buffer
        Swatches::new(&colors, &cfg(3, 0)).render(area, &mut buf);
        assert_eq!(buf[(0, 3)].bg, ratatui::style::Color::Rgb(255, 255, 255));
    }
}
