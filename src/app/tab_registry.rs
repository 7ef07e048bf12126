use fltk::app::Sender;

use super::document::{Document, DocumentId};
use super::messages::Message;

/// Insertion-ordered collection of open tabs. Ids are monotonic and never
/// reused; insertion order is display order. There is no remove operation:
/// tabs live until the process exits.
pub struct TabRegistry {
    documents: Vec<Document>,
    active_id: Option<DocumentId>,
    next_id: u64,
    sender: Option<Sender<Message>>,
}

impl TabRegistry {
    pub fn new(sender: Option<Sender<Message>>) -> Self {
        Self {
            documents: Vec::new(),
            active_id: None,
            next_id: 1,
            sender,
        }
    }

    fn next_document_id(&mut self) -> DocumentId {
        let id = DocumentId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Create a tab with the given title and make it active. An empty title
    /// aborts creation (the prompt was cancelled or left blank).
    pub fn create(&mut self, title: &str) -> Option<DocumentId> {
        if title.is_empty() {
            return None;
        }
        let id = self.next_document_id();
        let doc = Document::new(id, title.to_string(), self.sender);
        self.documents.push(doc);
        self.active_id = Some(id);
        Some(id)
    }

    /// Rename a tab in place. An empty title discards the rename and the
    /// original title is retained.
    pub fn rename(&mut self, id: DocumentId, new_title: &str) -> bool {
        if new_title.is_empty() {
            return false;
        }
        match self.documents.iter_mut().find(|d| d.id == id) {
            Some(doc) => {
                doc.title = new_title.to_string();
                true
            }
            None => false,
        }
    }

    pub fn active_doc(&self) -> Option<&Document> {
        let active_id = self.active_id?;
        self.documents.iter().find(|d| d.id == active_id)
    }

    pub fn active_doc_mut(&mut self) -> Option<&mut Document> {
        let active_id = self.active_id?;
        self.documents.iter_mut().find(|d| d.id == active_id)
    }

    pub fn set_active(&mut self, id: DocumentId) {
        if self.documents.iter().any(|d| d.id == id) {
            self.active_id = Some(id);
        }
    }

    pub fn active_id(&self) -> Option<DocumentId> {
        self.active_id
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn count(&self) -> usize {
        self.documents.len()
    }

    pub fn doc_by_id(&self, id: DocumentId) -> Option<&Document> {
        self.documents.iter().find(|d| d.id == id)
    }
}
