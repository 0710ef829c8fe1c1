//! Keep panel - one checkbox per palette colour

use crate::app::state::AppState;
use crate::tui::theme::{get_theme, palette::swatch_color};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};

pub fn render(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;
    let ctl = &state.controller;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.palette.border))
        .title(format!(" {} Keep ({}) ", icons.keep, ctl.kept().len()))
        .title_style(Style::default().fg(theme.palette.accent));

    let items: Vec<ListItem> = ctl
        .palette()
        .iter()
        .enumerate()
        .map(|(i, &color)| {
            let is_selected = i == state.cursor;
            let checkbox = if ctl.is_kept(color) {
                icons.checked
            } else {
                icons.unchecked
            };
            let prefix = if is_selected { icons.selected } else { icons.unselected };

            let label_style = if is_selected {
                Style::default()
                    .fg(theme.palette.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.palette.fg_primary)
            };

            ListItem::new(Line::from(vec![
                Span::styled(prefix, Style::default().fg(theme.palette.accent)),
                Span::raw(" "),
                Span::styled(checkbox, Style::default().fg(theme.palette.accent_alt)),
                Span::raw(" "),
                Span::styled(icons.preview, Style::default().fg(swatch_color(color))),
                Span::raw(" "),
                Span::styled(color.to_string(), label_style),
            ]))
        })
        .collect();

    let mut list_state = ListState::default();
    if !items.is_empty() {
        list_state.select(Some(state.cursor));
    }

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(theme.palette.bg_highlight))
        .highlight_symbol("");

    frame.render_stateful_widget(list, area, &mut list_state);
}
