use super::document::DocumentId;

/// All messages that can be sent through the FLTK channel.
/// Each menu item, toolbar button, shortcut and tab bar interaction sends
/// one of these; the dispatch loop in main handles them.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    // Tabs
    TabNew,
    TabSwitch(DocumentId),
    TabRename(DocumentId),

    // File
    FileSave,
    FileSaveAs,
    FileQuit,

    // Edit
    EditUndo,
    SelectAll,
    CopyAll,

    // Format
    ToggleBold,
    ToggleUnderline,
    ChangeFontSize,

    // Help
    ShowAbout,

    // Sent by the buffer modify callback so the dirty indicators refresh
    // while the user types
    BufferModified(DocumentId),
}
