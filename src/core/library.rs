//! Append-only document collection with a single selection.

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::document::{Document, DocumentId, IncomingFile};

#[derive(Debug, Clone, Default)]
pub struct DocumentLibrary {
    documents: Vec<Document>,
    // Stored as an id and resolved on read so the selection can never point
    // outside the collection.
    selected: Option<DocumentId>,
}

impl DocumentLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Appends one document per file, in input order, all stamped with
    /// `uploaded_at`, and selects the first of them.
    ///
    /// Returns the number of documents added. An empty input changes nothing.
    pub fn ingest<I>(&mut self, files: I, uploaded_at: DateTime<Utc>) -> usize
    where
        I: IntoIterator<Item = IncomingFile>,
    {
        let start = self.documents.len();
        self.documents.extend(
            files
                .into_iter()
                .map(|file| Document::from_incoming(file, uploaded_at)),
        );

        let added = self.documents.len() - start;
        if let Some(first) = self.documents.get(start) {
            self.selected = Some(first.id.clone());
        }
        added
    }

    /// Selects the document with `id`. Re-selecting the current document is
    /// allowed. Unknown ids are ignored and reported as `false`.
    pub fn select(&mut self, id: &DocumentId) -> bool {
        if self.get(id).is_none() {
            warn!(%id, "select: unknown document id");
            return false;
        }
        debug!(%id, "document selected");
        self.selected = Some(id.clone());
        true
    }

    pub fn selected(&self) -> Option<&Document> {
        let id = self.selected.as_ref()?;
        self.get(id)
    }

    pub fn is_selected(&self, id: &DocumentId) -> bool {
        self.selected.as_ref() == Some(id)
    }

    pub fn get(&self, id: &DocumentId) -> Option<&Document> {
        self.documents.iter().find(|d| &d.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn files(names: &[&str]) -> Vec<IncomingFile> {
        names.iter().map(|n| IncomingFile::new(*n, "")).collect()
    }

    #[test]
    fn ingest_appends_in_order_and_selects_first_new() {
        let mut lib = DocumentLibrary::new();
        let now = Utc::now();

        assert_eq!(lib.ingest(files(&["a.pdf", "b.txt"]), now), 2);
        assert_eq!(lib.selected().map(|d| d.name.as_str()), Some("a.pdf"));

        assert_eq!(lib.ingest(files(&["c.doc", "d.docx", "e.pdf"]), now), 3);
        let names: Vec<&str> = lib.documents().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["a.pdf", "b.txt", "c.doc", "d.docx", "e.pdf"]);
        assert_eq!(lib.selected().map(|d| d.name.as_str()), Some("c.doc"));
    }

    #[test]
    fn empty_ingest_is_a_no_op() {
        let mut lib = DocumentLibrary::new();
        lib.ingest(files(&["a.pdf"]), Utc::now());
        let before = lib.selected().cloned();

        assert_eq!(lib.ingest(Vec::new(), Utc::now()), 0);
        assert_eq!(lib.len(), 1);
        assert_eq!(lib.selected().cloned(), before);
    }

    #[test]
    fn duplicate_names_are_kept_as_separate_documents() {
        let mut lib = DocumentLibrary::new();
        lib.ingest(files(&["a.pdf", "a.pdf"]), Utc::now());
        assert_eq!(lib.len(), 2);
        assert_ne!(lib.documents()[0].id, lib.documents()[1].id);
    }

    #[test]
    fn select_is_unconditional_for_known_ids() {
        let mut lib = DocumentLibrary::new();
        lib.ingest(files(&["a.pdf", "b.txt"]), Utc::now());
        let b = lib.documents()[1].id.clone();

        assert!(lib.select(&b));
        assert!(lib.select(&b));
        assert!(lib.is_selected(&b));
        assert!(!lib.is_selected(&lib.documents()[0].id));
    }

    #[test]
    fn select_ignores_unknown_ids() {
        let mut lib = DocumentLibrary::new();
        lib.ingest(files(&["a.pdf"]), Utc::now());

        assert!(!lib.select(&DocumentId::from("missing")));
        assert_eq!(lib.selected().map(|d| d.name.as_str()), Some("a.pdf"));
    }

    #[test]
    fn new_library_has_no_selection() {
        let lib = DocumentLibrary::new();
        assert!(lib.is_empty());
        assert!(lib.selected().is_none());
    }
}
