use crate::export::ExportFormat;
use crate::palette::{Color, PaletteController};
use std::collections::HashSet;

pub struct AppState {
    pub should_quit: bool,

    pub controller: PaletteController,

    // Keep panel
    pub cursor: usize,

    // Copy controls currently showing the confirmation glyph
    pub copy_confirmed: HashSet<ExportFormat>,

    pub show_help: bool,
}

impl AppState {
    pub fn new(controller: PaletteController) -> Self {
        Self {
            should_quit: false,
            controller,
            cursor: 0,
            copy_confirmed: HashSet::new(),
            show_help: false,
        }
    }

    pub fn cursor_color(&self) -> Option<Color> {
        self.controller.palette().get(self.cursor).copied()
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        let len = self.controller.palette().len();
        if len > 0 {
            self.cursor = (self.cursor + 1).min(len - 1);
        }
    }

    /// Keeps the cursor on a row after the palette shrinks.
    pub fn clamp_cursor(&mut self) {
        let len = self.controller.palette().len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    pub fn is_copy_confirmed(&self, format: ExportFormat) -> bool {
        self.copy_confirmed.contains(&format)
    }

    pub fn export_text(&self, format: ExportFormat) -> String {
        format.render(self.controller.palette())
    }
}
