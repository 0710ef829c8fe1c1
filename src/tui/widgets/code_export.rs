//! Code export blocks with their copy controls

use crate::app::state::AppState;
use crate::export::ExportFormat;
use crate::tui::theme::get_theme;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub fn render(frame: &mut Frame, state: &AppState, format: ExportFormat, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;

    let key = match format {
        ExportFormat::R => 'c',
        ExportFormat::List => 'y',
    };
    let copy_control = if state.is_copy_confirmed(format) {
        Span::styled(
            format!(" {} ", icons.copied),
            Style::default().fg(theme.palette.confirm),
        )
    } else {
        Span::styled(
            format!(" {} {key} ", icons.copy),
            Style::default().fg(theme.palette.fg_secondary),
        )
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.palette.border))
        .title(format!(" {} {} ", icons.code, format.label()))
        .title_style(Style::default().fg(theme.palette.accent))
        .title_top(Line::from(copy_control).right_aligned());

    let para = Paragraph::new(state.export_text(format))
        .style(Style::default().fg(theme.palette.fg_primary))
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(para, area);
}
