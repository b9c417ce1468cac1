//! Document corpus: identifiers, raw document storage, and loading from disk.

pub mod loader;

use std::fmt;

pub use loader::load_corpus;

/// Process-local document identifier.
///
/// Assigned densely at ingestion in deterministic (path-sorted) order and
/// never reused or reassigned within a process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocId(pub u32);

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "doc_{}", self.0)
    }
}

/// A raw document as loaded from disk, before analysis.
#[derive(Debug, Clone)]
pub struct Document {
    pub id: DocId,
    /// Path relative to the corpus root, used for display.
    pub name: String,
    pub text: String,
}

/// The loaded corpus. Documents are stored in `DocId` order, so lookup by id
/// is a direct index.
#[derive(Debug, Default)]
pub struct Corpus {
    documents: Vec<Document>,
}

impl Corpus {
    pub fn new(documents: Vec<Document>) -> Self {
        Self { documents }
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn get(&self, id: DocId) -> Option<&Document> {
        self.documents.get(id.0 as usize)
    }

    pub fn documents(&self) -> impl Iterator<Item = &Document> {
        self.documents.iter()
    }
}
