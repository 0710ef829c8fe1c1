use crate::app::state::AppState;
use crate::config::{Config, InputConfig};
use anyhow::Context;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};

pub mod theme;
pub mod widgets;

pub type TuiTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Raw mode plus the alternate screen for as long as the guard lives.
/// Mouse capture is only requested when the config enables it.
pub struct TerminalGuard {
    terminal: TuiTerminal,
    input: InputConfig,
}

impl TerminalGuard {
    pub fn enter(input: &InputConfig) -> anyhow::Result<Self> {
        enable_raw_mode().context("enable raw mode")?;
        let mut stdout = io::stdout();
        let entered = execute!(stdout, EnterAlternateScreen)
            .context("enter alt screen")
            .and_then(|_| {
                if input.mouse {
                    execute!(stdout, EnableMouseCapture).context("enable mouse capture")?;
                }
                Ok(())
            })
            .and_then(|_| Terminal::new(CrosstermBackend::new(io::stdout())).context("create terminal"));

        match entered {
            Ok(terminal) => Ok(Self {
                terminal,
                input: input.clone(),
            }),
            Err(e) => {
                restore(input.mouse);
                Err(e)
            }
        }
    }

    pub fn terminal_mut(&mut self) -> &mut TuiTerminal {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore(self.input.mouse);
    }
}

fn restore(mouse: bool) {
    let mut stdout = io::stdout();
    if mouse {
        let _ = execute!(stdout, DisableMouseCapture);
    }
    let _ = execute!(stdout, LeaveAlternateScreen);
    let _ = disable_raw_mode();
}

/// Rebuilds the whole frame from the current state.
pub fn draw(terminal: &mut TuiTerminal, cfg: &Config, state: &AppState) -> anyhow::Result<()> {
    terminal
        .draw(|f| widgets::root::render(f, cfg, state))
        .context("terminal draw")?;
    Ok(())
}
