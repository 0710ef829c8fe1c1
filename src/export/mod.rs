//! Code snippets for pasting a palette into other languages.

use crate::palette::Color;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// `c('#AABBCC', '#112233')`
    R,
    /// `['#AABBCC', '#112233']`
    List,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 2] = [ExportFormat::R, ExportFormat::List];

    pub fn label(self) -> &'static str {
        match self {
            ExportFormat::R => "R",
            ExportFormat::List => "Python",
        }
    }

    pub fn render(self, palette: &[Color]) -> String {
        let quoted = palette
            .iter()
            .map(|c| format!("'{c}'"))
            .collect::<Vec<_>>()
            .join(", ");
        match self {
            ExportFormat::R => format!("c({quoted})"),
            ExportFormat::List => format!("[{quoted}]"),
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonPalette<'a> {
    count: usize,
    colors: &'a [Color],
}

pub fn to_json(palette: &[Color]) -> anyhow::Result<String> {
    let doc = JsonPalette {
        count: palette.len(),
        colors: palette,
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}
