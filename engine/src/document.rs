use serde::Serialize;
use std::fmt;

pub type DocumentId = i32;

/// Moderation state of a stored document. Searches filter on it; the default
/// search form matches only `Actual` documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DocumentStatus {
    Actual,
    Irrelevant,
    Banned,
    Removed,
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DocumentStatus::Actual => "Actual",
            DocumentStatus::Irrelevant => "Irrelevant",
            DocumentStatus::Banned => "Banned",
            DocumentStatus::Removed => "Removed",
        };
        f.write_str(name)
    }
}

/// One search result. `relevance` is computed fresh for every query and is
/// not a stored attribute of the document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Document {
    pub id: DocumentId,
    pub relevance: f64,
    pub rating: i32,
}

impl Document {
    pub fn new(id: DocumentId, relevance: f64, rating: i32) -> Self {
        Self { id, relevance, rating }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ document_id = {}, relevance = {}, rating = {} }}",
            self.id, self.relevance, self.rating
        )
    }
}
