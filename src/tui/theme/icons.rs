//! Nerd Font icons for TUI display
//! Requires a Nerd Font to be installed (https://www.nerdfonts.com)

#[derive(Debug, Clone)]
pub struct Icons {
    pub palette: &'static str,
    pub keep: &'static str,
    pub code: &'static str,
    pub copy: &'static str,
    pub copied: &'static str,
    pub help: &'static str,

    // Checkboxes
    pub checked: &'static str,
    pub unchecked: &'static str,

    // Selection
    pub selected: &'static str,
    pub unselected: &'static str,

    pub preview: &'static str,
    pub bullet: &'static str,
}

impl Icons {
    /// Nerd Font icon set
    pub const fn nerd() -> Self {
        Self {
            palette: "\u{f1fc}",   // nf-fa-paint_brush
            keep: "\u{f08d}",      // nf-fa-thumb_tack
            code: "\u{f121}",      // nf-fa-code
            copy: "\u{f0c5}",      // nf-fa-copy
            copied: "✓",
            help: "\u{f059}",      // nf-fa-question_circle

            checked: "[x]",
            unchecked: "[ ]",

            selected: "\u{f054}",  // nf-fa-chevron_right
            unselected: " ",

            preview: "██",
            bullet: "•",
        }
    }
}
