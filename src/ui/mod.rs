//! FLTK widget construction: window, menu, toolbar, tab bar and dialogs.

pub mod dialogs;
pub mod file_dialogs;
pub mod main_window;
pub mod menu;
pub mod tab_bar;
