use fltk::{
    app,
    app::Sender,
    dialog,
    enums::Font,
    prelude::*,
    text::TextEditor,
    window::Window,
};

use super::document::DocumentId;
use super::file_ops::{ensure_txt_extension, write_text_file};
use super::messages::Message;
use super::style_map::StyleMap;
use super::style_ops::{self, StyleFlag};
use super::tab_registry::TabRegistry;
use crate::ui::dialogs::about::show_about_dialog;
use crate::ui::dialogs::prompt::{prompt_font_size, prompt_string};
use crate::ui::file_dialogs::native_save_dialog;
use crate::ui::tab_bar::TabBar;

/// Shared starting font for new tabs. A no-selection font size change
/// mutates the size half of this via the style map.
pub const DEFAULT_FONT: Font = Font::Helvetica;
pub const DEFAULT_FONT_SIZE: i32 = 16;

pub struct AppState {
    pub registry: TabRegistry,
    pub style_map: StyleMap,
    pub tab_bar: TabBar,
    pub editor: TextEditor,
    pub window: Window,
}

impl AppState {
    pub fn new(
        editor: TextEditor,
        window: Window,
        tab_bar: TabBar,
        sender: Sender<Message>,
    ) -> Self {
        Self {
            registry: TabRegistry::new(Some(sender)),
            style_map: StyleMap::new(DEFAULT_FONT, DEFAULT_FONT_SIZE),
            tab_bar,
            editor,
            window,
        }
    }

    // --- Tab management ---

    /// Prompt for a title and create a tab. Cancelled or empty input
    /// creates nothing.
    pub fn tab_new(&mut self) {
        let title = match prompt_string("New Tab", "Enter tab title:", "") {
            Some(t) => t,
            None => return,
        };
        if let Some(id) = self.registry.create(&title) {
            log::debug!("created tab {:?} ({}), {} open", id, title, self.registry.count());
            self.bind_active_buffer();
            self.update_window_title();
            self.rebuild_tab_bar();
        }
    }

    /// Switch the shared editor to a different document.
    pub fn tab_switch(&mut self, id: DocumentId) {
        if self.registry.active_id() == Some(id) {
            return;
        }
        if let Some(current) = self.registry.active_doc_mut() {
            current.cursor_position = self.editor.insert_position();
        }
        self.registry.set_active(id);
        self.bind_active_buffer();
        if let Some(doc) = self.registry.active_doc() {
            let cursor = doc.cursor_position;
            self.editor.set_insert_position(cursor);
            self.editor.show_insert_position();
        }
        self.update_window_title();
        self.rebuild_tab_bar();
    }

    /// Prompt for a new title for the given tab. Cancelled or empty input
    /// retains the original title.
    pub fn tab_rename(&mut self, id: DocumentId) {
        let current = match self.registry.doc_by_id(id) {
            Some(doc) => doc.title.clone(),
            None => return,
        };
        if let Some(new_title) = prompt_string("Rename Tab", "Enter tab title:", &current) {
            if self.registry.rename(id, &new_title) {
                self.update_window_title();
                self.rebuild_tab_bar();
            }
        }
    }

    /// An edit landed in a document's buffer. Refresh the dirty indicators:
    /// the window title when the edit is in the active tab, and the tab bar
    /// dot either way.
    pub fn buffer_modified(&mut self, id: DocumentId) {
        if self.registry.active_id() == Some(id) {
            self.update_window_title();
        }
        self.rebuild_tab_bar();
    }

    // --- File operations ---

    /// Save to the stored path, or fall back to Save As when the tab has
    /// never been saved.
    pub fn file_save(&mut self) {
        let (file_path, text) = match self.registry.active_doc() {
            Some(doc) => (doc.file_path.clone(), doc.buffer.text()),
            None => return,
        };

        match file_path {
            Some(path) => match write_text_file(&path, &text) {
                Ok(()) => {
                    if let Some(doc) = self.registry.active_doc() {
                        doc.mark_clean();
                    }
                    self.update_window_title();
                    self.rebuild_tab_bar();
                }
                Err(e) => {
                    log::warn!("save to {} failed: {}", path, e);
                    dialog::alert_default(&format!("Could not save file: {}", e));
                }
            },
            None => self.file_save_as(),
        }
    }

    /// Prompt for a save location, then save. Cancelling the chooser leaves
    /// the tab untouched.
    pub fn file_save_as(&mut self) {
        let text = match self.registry.active_doc() {
            Some(doc) => doc.buffer.text(),
            None => return,
        };

        let path = match native_save_dialog() {
            Some(p) => ensure_txt_extension(&p),
            None => return,
        };

        match write_text_file(&path, &text) {
            Ok(()) => {
                if let Some(doc) = self.registry.active_doc_mut() {
                    doc.file_path = Some(path);
                    doc.mark_clean();
                }
                self.update_window_title();
                self.rebuild_tab_bar();
            }
            Err(e) => {
                log::warn!("save to {} failed: {}", path, e);
                dialog::alert_default(&format!("Could not save file: {}", e));
            }
        }
    }

    /// Handle a quit request. Returns `true` if the app should exit.
    pub fn request_quit(&mut self) -> bool {
        let any_dirty = self.registry.documents().iter().any(|d| d.is_dirty());
        if !any_dirty {
            return true;
        }
        matches!(
            dialog::choice2_default(
                "You have unsaved changes in one or more tabs.",
                "Quit Without Saving",
                "Cancel",
                "",
            ),
            Some(0)
        )
    }

    // --- Styling ---

    /// Toggle bold or underline across the current selection. Without a
    /// selection this is a silent no-op.
    pub fn toggle_style(&mut self, flag: StyleFlag) {
        let (start, end, letters) = match self.registry.active_doc() {
            Some(doc) => match doc.selection() {
                Some((start, end)) => (start as usize, end as usize, doc.style_buffer.text()),
                None => return,
            },
            None => return,
        };
        let rewritten = style_ops::toggle_flag(&letters, start, end, flag, &mut self.style_map);
        self.set_style_letters(rewritten);
    }

    /// Prompt for a font size. With a selection the size applies to exactly
    /// the selected range (later applications win on overlap); without one
    /// it becomes the shared default size for all unstyled text.
    pub fn change_font_size(&mut self) {
        let size = match prompt_font_size() {
            Some(s) => s,
            None => return,
        };

        let selection = self.registry.active_doc().and_then(|doc| doc.selection());
        match selection {
            Some((start, end)) => {
                let letters = match self.registry.active_doc() {
                    Some(doc) => doc.style_buffer.text(),
                    None => return,
                };
                let rewritten = style_ops::apply_size(
                    &letters,
                    start as usize,
                    end as usize,
                    size,
                    &mut self.style_map,
                );
                self.set_style_letters(rewritten);
            }
            None => {
                self.style_map.set_default_size(size);
                self.editor.set_text_size(size);
                self.refresh_highlight();
            }
        }
    }

    // --- Clipboard & selection ---

    /// Replace the clipboard contents with the whole buffer text, unstyled.
    pub fn copy_all(&mut self) {
        if let Some(doc) = self.registry.active_doc() {
            app::copy(&doc.buffer.text());
        }
    }

    pub fn select_all(&mut self) {
        if let Some(doc) = self.registry.active_doc() {
            let mut buffer = doc.buffer.clone();
            let len = buffer.length();
            buffer.select(0, len);
            self.editor.redraw();
        }
    }

    /// One undo step of the buffer's built-in edit history. Styling is not
    /// part of that history.
    pub fn undo(&mut self) {
        if self.registry.active_doc().is_some() {
            self.editor.undo();
        }
    }

    pub fn show_about(&self) {
        show_about_dialog();
    }

    // --- Widget glue ---

    /// Bind the active document's buffers to the shared editor.
    pub fn bind_active_buffer(&mut self) {
        if let Some(doc) = self.registry.active_doc() {
            self.editor.set_buffer(doc.buffer.clone());
            self.editor
                .set_highlight_data_ext(doc.style_buffer.clone(), self.style_map.style_table());
        }
    }

    /// Re-bind the active document's style buffer after the map or the
    /// letters changed.
    fn refresh_highlight(&mut self) {
        if let Some(doc) = self.registry.active_doc() {
            self.editor
                .set_highlight_data_ext(doc.style_buffer.clone(), self.style_map.style_table());
        }
        self.editor.redraw();
    }

    fn set_style_letters(&mut self, letters: String) {
        if let Some(doc) = self.registry.active_doc_mut() {
            doc.style_buffer.set_text(&letters);
        }
        self.refresh_highlight();
    }

    pub fn update_window_title(&mut self) {
        match self.registry.active_doc() {
            Some(doc) => {
                let prefix = if doc.is_dirty() { "*" } else { "" };
                self.window
                    .set_label(&format!("{}{} - TabPad", prefix, doc.title));
            }
            None => self.window.set_label("TabPad"),
        }
    }

    pub fn rebuild_tab_bar(&mut self) {
        let active_id = self.registry.active_id();
        self.tab_bar.rebuild(self.registry.documents(), active_id);
    }
}
