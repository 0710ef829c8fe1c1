//! Help overlay showing keybindings

use crate::tui::theme::{Theme, get_theme};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

pub fn render(frame: &mut Frame, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;

    let popup = centered(area, 56, 21);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.palette.border))
        .title(format!(" {} Keybinds ", icons.help))
        .title_style(Style::default().fg(theme.palette.accent))
        .style(Style::default().bg(theme.palette.bg_primary));

    let content = vec![
        section_header("Palette", theme),
        keybind("r / Enter", "Generate new colours", theme),
        keybind("+ / l / Right", "One more colour", theme),
        keybind("- / h / Left", "One fewer colour", theme),
        keybind("1-9", "Set colour count", theme),
        Line::default(),
        section_header("Keep", theme),
        keybind("j / Down", "Move down", theme),
        keybind("k / Up", "Move up", theme),
        keybind("Space / x", "Keep or release colour", theme),
        Line::default(),
        section_header("Export", theme),
        keybind("c", "Copy R vector", theme),
        keybind("y", "Copy Python list", theme),
        Line::default(),
        section_header("General", theme),
        keybind("?", "Toggle this help", theme),
        keybind("q / Esc", "Quit", theme),
    ];

    frame.render_widget(Paragraph::new(content).block(block), popup);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(height.min(area.height))])
        .flex(ratatui::layout::Flex::Center)
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(width.min(area.width))])
        .flex(ratatui::layout::Flex::Center)
        .split(rows[0])[0]
}

fn section_header(title: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![Span::styled(
        format!("━━ {} ━━", title),
        Style::default()
            .fg(theme.palette.accent)
            .add_modifier(Modifier::BOLD),
    )])
}

fn keybind(key: &str, desc: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled("  ", Style::default()),
        Span::styled(
            format!("{:16}", key),
            Style::default()
                .fg(theme.palette.accent_alt)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(desc.to_string(), Style::default().fg(theme.palette.fg_primary)),
    ])
}
