use crate::export::ExportFormat;

#[derive(Debug, Clone)]
pub enum Event {
    Input(InputEvent),
    Clipboard(ClipboardEvent),
}

#[derive(Debug, Clone)]
pub enum InputEvent {
    Key(crossterm::event::KeyEvent),
    Mouse(crossterm::event::MouseEvent),
    Resize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardEvent {
    /// The export block's text reached the clipboard.
    Copied(ExportFormat),
    /// The confirmation period for a copy has elapsed.
    Reverted(ExportFormat),
}
