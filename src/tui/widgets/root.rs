//! Root layout widget - orchestrates main layout structure

use crate::app::state::AppState;
use crate::config::Config;
use crate::export::ExportFormat;
use crate::tui::theme::get_theme;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::{code_export, count_selector, help, keep_panel, swatches};

/// Main layout structure:
/// ┌──────────────────────────────────────────────────────┐
/// │ Colours   1  2  3 [4] 5 ...                          │
/// ├───────────────────────────────────┬──────────────────┤
/// │            Swatches               │   Keep panel     │
/// │                                   │                  │
/// ├───────────────────────────────────┼──────────────────┤
/// │ R export                          │ Python export    │
/// └───────────────────────────────────┴──────────────────┘
///   key hints
pub fn render(frame: &mut Frame, cfg: &Config, state: &AppState) {
    let root = frame.area();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Count selector
            Constraint::Min(5),    // Swatches + keep panel
            Constraint::Length(5), // Export blocks
            Constraint::Length(1), // Key hints
        ])
        .split(root);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[1]);

    let exports = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[2]);

    count_selector::render(frame, state, rows[0]);
    swatches::render(frame, &cfg.swatches, state, middle[0]);
    keep_panel::render(frame, state, middle[1]);
    for (format, area) in ExportFormat::ALL.into_iter().zip(exports.iter()) {
        code_export::render(frame, state, format, *area);
    }
    render_hints(frame, rows[3]);

    if state.show_help {
        help::render(frame, root);
    }
}

fn render_hints(frame: &mut Frame, area: Rect) {
    let theme = get_theme();
    let hints = [
        ("r", "generate"),
        ("+/-", "count"),
        ("space", "keep"),
        ("c", "copy R"),
        ("y", "copy Python"),
        ("?", "help"),
        ("q", "quit"),
    ];

    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(
                format!(" {} ", theme.icons.bullet),
                Style::default().fg(theme.palette.border),
            ));
        }
        spans.push(Span::styled(*key, Style::default().fg(theme.palette.accent_alt)));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Style::default().fg(theme.palette.fg_secondary)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
