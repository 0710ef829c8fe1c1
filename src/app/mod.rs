pub mod actions;
pub mod events;
pub mod state;

use crate::clipboard::ClipboardCopier;
use crate::config::Config;
use crate::input;
use crate::palette::PaletteController;
use crate::tui::{self, TuiTerminal};
use actions::Action;
use events::{ClipboardEvent, Event};
use state::AppState;
use tokio::sync::mpsc;

pub struct App {
    cfg: Config,
    state: AppState,
    copier: ClipboardCopier,
}

impl App {
    pub fn new(cfg: Config) -> Self {
        Self::with_copier(cfg, ClipboardCopier::system())
    }

    pub fn with_copier(cfg: Config, copier: ClipboardCopier) -> Self {
        let mut controller =
            PaletteController::new(cfg.palette.max_colors, cfg.palette.default_count);
        controller.regenerate();

        Self {
            cfg,
            state: AppState::new(controller),
            copier,
        }
    }

    pub async fn run(&mut self, terminal: &mut TuiTerminal) -> anyhow::Result<()> {
        let (tx, mut rx) = mpsc::channel::<Event>(256);

        input::spawn_input_task(tx.clone());

        // First draw
        tui::draw(terminal, &self.cfg, &self.state)?;

        // Redraw only on events; there is no ticker.
        while let Some(ev) = rx.recv().await {
            match ev {
                Event::Input(input_ev) => {
                    if let Some(action) = input::map_input_to_action(&self.state, input_ev) {
                        self.handle_action(action, &tx);
                    }
                }
                Event::Clipboard(ce) => self.handle_clipboard(ce),
            }

            if self.state.should_quit {
                break;
            }

            tui::draw(terminal, &self.cfg, &self.state)?;
        }

        tracing::info!("quit");
        Ok(())
    }

    fn handle_action(&mut self, action: Action, tx: &mpsc::Sender<Event>) {
        match action {
            Action::Copy(format) => {
                let text = self.state.export_text(format);
                self.copier.copy(format, text, tx.clone());
            }
            _ => self.reduce(action),
        }
    }

    fn handle_clipboard(&mut self, ev: ClipboardEvent) {
        match ev {
            ClipboardEvent::Copied(format) => {
                self.state.copy_confirmed.insert(format);
            }
            ClipboardEvent::Reverted(format) => {
                self.state.copy_confirmed.remove(&format);
            }
        }
    }

    fn reduce(&mut self, action: Action) {
        let ctl = &mut self.state.controller;
        match action {
            Action::Quit => self.state.should_quit = true,
            Action::Regenerate => {
                ctl.regenerate();
                self.state.clamp_cursor();
            }
            Action::IncreaseCount => {
                let n = (ctl.requested_count() + 1).min(ctl.max_colors());
                if n != ctl.requested_count() {
                    ctl.set_requested_count(n);
                }
            }
            Action::DecreaseCount => {
                let n = ctl.requested_count().saturating_sub(1).max(1);
                if n != ctl.requested_count() {
                    ctl.set_requested_count(n);
                    self.state.clamp_cursor();
                }
            }
            Action::SetCount(n) => {
                if (1..=ctl.max_colors()).contains(&n) {
                    ctl.set_requested_count(n);
                    self.state.clamp_cursor();
                }
            }
            Action::CursorUp => self.state.cursor_up(),
            Action::CursorDown => self.state.cursor_down(),
            Action::ToggleKeep => {
                if let Some(color) = self.state.cursor_color() {
                    let checked = !self.state.controller.is_kept(color);
                    self.state.controller.toggle_keep(color, checked);
                }
            }
            Action::ToggleHelp => self.state.show_help = !self.state.show_help,
            Action::CloseHelp => self.state.show_help = false,
            // Copy is handled in handle_action; resize just redraws.
            Action::Copy(_) | Action::Resize => {}
        }
    }
}
