pub mod code_export;
pub mod count_selector;
pub mod help;
pub mod keep_panel;
pub mod root;
pub mod swatches;
