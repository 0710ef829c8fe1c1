use crate::export::ExportFormat;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Regenerate,

    // Count selector
    IncreaseCount,
    DecreaseCount,
    SetCount(usize),

    // Keep panel
    CursorUp,
    CursorDown,
    ToggleKeep,

    Copy(ExportFormat),

    ToggleHelp,
    CloseHelp,
    Resize,
}
