use crate::document::{DocumentId, DocumentStatus};
use crate::error::{Result, SearchError};
use std::collections::HashMap;

/// Persisted per-document state. Immutable once stored; there is no update
/// or delete operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentProperties {
    pub rating: i32,
    pub status: DocumentStatus,
}

/// Maps document ids to their properties and remembers insertion order.
#[derive(Debug, Default)]
pub struct DocumentStore {
    properties: HashMap<DocumentId, DocumentProperties>,
    insertion_order: Vec<DocumentId>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores status and average rating for a new document and returns the
    /// average. Ids must be non-negative and never seen before.
    pub fn add(&mut self, id: DocumentId, status: DocumentStatus, ratings: &[i32]) -> Result<i32> {
        if id < 0 {
            return Err(SearchError::NegativeDocumentId(id));
        }
        if self.properties.contains_key(&id) {
            return Err(SearchError::DuplicateDocumentId(id));
        }
        let rating = average_rating(ratings);
        self.properties.insert(id, DocumentProperties { rating, status });
        self.insertion_order.push(id);
        Ok(rating)
    }

    pub fn get(&self, id: DocumentId) -> Result<&DocumentProperties> {
        self.properties
            .get(&id)
            .ok_or(SearchError::DocumentNotFound(id))
    }

    pub fn count(&self) -> usize {
        self.properties.len()
    }

    /// Id of the document added at `position` (0-based insertion order).
    pub fn id_at(&self, position: usize) -> Result<DocumentId> {
        self.insertion_order
            .get(position)
            .copied()
            .ok_or(SearchError::PositionOutOfRange {
                position,
                count: self.insertion_order.len(),
            })
    }

    pub fn iter_in_order(&self) -> impl Iterator<Item = (DocumentId, &DocumentProperties)> {
        self.insertion_order
            .iter()
            .filter_map(|id| self.properties.get(id).map(|properties| (*id, properties)))
    }
}

/// Truncating integer average, 0 for an empty list. The sum is widened so
/// long rating lists cannot overflow.
fn average_rating(ratings: &[i32]) -> i32 {
    if ratings.is_empty() {
        return 0;
    }
    let sum: i64 = ratings.iter().map(|&rating| i64::from(rating)).sum();
    (sum / ratings.len() as i64) as i32
}
