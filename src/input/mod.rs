use crate::app::actions::Action;
use crate::app::events::{Event, InputEvent};
use crate::app::state::AppState;
use crate::export::ExportFormat;
use crossterm::event::{self, Event as CtEvent, KeyCode, KeyEvent, KeyEventKind, MouseEventKind};
use tokio::sync::mpsc;

pub fn spawn_input_task(tx: mpsc::Sender<Event>) {
    tokio::task::spawn_blocking(move || {
        loop {
            if event::poll(std::time::Duration::from_millis(250)).unwrap_or(false) {
                let ev = match event::read() {
                    Ok(CtEvent::Key(k)) if k.kind == KeyEventKind::Press => InputEvent::Key(k),
                    Ok(CtEvent::Mouse(m)) => InputEvent::Mouse(m),
                    Ok(CtEvent::Resize(_, _)) => InputEvent::Resize,
                    Ok(_) => continue,
                    Err(e) => {
                        tracing::warn!("terminal read failed: {e}");
                        continue;
                    }
                };
                if tx.blocking_send(Event::Input(ev)).is_err() {
                    break;
                }
            } else if tx.is_closed() {
                break;
            }
        }
    });
}

pub fn map_input_to_action(state: &AppState, ev: InputEvent) -> Option<Action> {
    match ev {
        InputEvent::Resize => Some(Action::Resize),
        InputEvent::Mouse(m) => match m.kind {
            MouseEventKind::ScrollUp => Some(Action::CursorUp),
            MouseEventKind::ScrollDown => Some(Action::CursorDown),
            _ => None,
        },
        InputEvent::Key(k) if state.show_help => handle_help_overlay(k),
        InputEvent::Key(k) => handle_normal_mode(state, k),
    }
}

fn handle_help_overlay(k: KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::Enter => Some(Action::CloseHelp),
        _ => None,
    }
}

fn handle_normal_mode(state: &AppState, k: KeyEvent) -> Option<Action> {
    match k.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),

        // Generate
        KeyCode::Char('r') | KeyCode::Enter => Some(Action::Regenerate),

        // Count selector
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Char('l') | KeyCode::Right => {
            Some(Action::IncreaseCount)
        }
        KeyCode::Char('-') | KeyCode::Char('h') | KeyCode::Left => Some(Action::DecreaseCount),
        KeyCode::Char(c @ '1'..='9') => {
            let n = c.to_digit(10)? as usize;
            (n <= state.controller.max_colors()).then_some(Action::SetCount(n))
        }

        // Keep panel
        KeyCode::Up | KeyCode::Char('k') => Some(Action::CursorUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::CursorDown),
        KeyCode::Char(' ') | KeyCode::Char('x') => Some(Action::ToggleKeep),

        // Copy
        KeyCode::Char('c') => Some(Action::Copy(ExportFormat::R)),
        KeyCode::Char('y') => Some(Action::Copy(ExportFormat::List)),

        KeyCode::Char('?') | KeyCode::F(1) => Some(Action::ToggleHelp),

        _ => None,
    }
}
