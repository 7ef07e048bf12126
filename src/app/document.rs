use std::cell::Cell;
use std::rc::Rc;

use fltk::app::Sender;
use fltk::text::TextBuffer;

use super::messages::Message;
use super::style_map::DEFAULT_STYLE_CHAR;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(pub u64);

/// One open tab: a user-assigned title, the text buffer, a parallel
/// style buffer holding one style letter per byte of text, and the
/// optional path the tab saves to.
pub struct Document {
    pub id: DocumentId,
    pub title: String,
    pub buffer: TextBuffer,
    pub style_buffer: TextBuffer,
    pub file_path: Option<String>,
    pub has_unsaved_changes: Rc<Cell<bool>>,
    pub cursor_position: i32,
}

impl Document {
    /// `sender` is None only in headless tests; the app always wires the
    /// channel so dirty indicators refresh while the user types.
    pub fn new(id: DocumentId, title: String, sender: Option<Sender<Message>>) -> Self {
        let mut buffer = TextBuffer::default();
        let style_buffer = TextBuffer::default();
        let has_unsaved_changes = Rc::new(Cell::new(false));

        // Keep the style buffer length-synchronized with the text buffer:
        // inserted bytes get the default style letter, deleted bytes drop
        // their letters. Also flips the dirty flag on any edit and notifies
        // the dispatch loop.
        let changes = has_unsaved_changes.clone();
        let mut style_buf = style_buffer.clone();
        buffer.add_modify_callback(move |pos, inserted, deleted, _restyled, _deleted_text| {
            if inserted > 0 || deleted > 0 {
                changes.set(true);
                if inserted > 0 {
                    let filler: String = std::iter::repeat(DEFAULT_STYLE_CHAR)
                        .take(inserted as usize)
                        .collect();
                    style_buf.insert(pos, &filler);
                }
                if deleted > 0 {
                    style_buf.remove(pos, pos + deleted);
                }
                if let Some(s) = sender {
                    s.send(Message::BufferModified(id));
                }
            }
        });

        Self {
            id,
            title,
            buffer,
            style_buffer,
            file_path: None,
            has_unsaved_changes,
            cursor_position: 0,
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.has_unsaved_changes.get()
    }

    pub fn mark_clean(&self) {
        self.has_unsaved_changes.set(false);
    }

    /// Current selection as byte offsets, or None when nothing is selected.
    pub fn selection(&self) -> Option<(i32, i32)> {
        match self.buffer.selection_position() {
            Some((start, end)) if end > start => Some((start, end)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Buffer modify callbacks fire synchronously, so the dirty flag and
    // style letter sync are observable without a running event loop. The
    // channel notification itself is dispatch-loop glue and is exercised
    // through the UI.

    #[test]
    fn test_edit_sets_dirty_flag() {
        let mut doc = Document::new(DocumentId(1), "Notes".to_string(), None);
        assert!(!doc.is_dirty());
        doc.buffer.append("Hello");
        assert!(doc.is_dirty());
        doc.mark_clean();
        assert!(!doc.is_dirty());
    }

    #[test]
    fn test_style_letters_track_buffer_length() {
        let mut doc = Document::new(DocumentId(1), "Notes".to_string(), None);
        doc.buffer.append("Hello World");
        assert_eq!(doc.style_buffer.length(), doc.buffer.length());
        doc.buffer.remove(0, 6);
        assert_eq!(doc.style_buffer.length(), doc.buffer.length());
    }
}
