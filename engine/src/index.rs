use crate::document::DocumentId;
use std::collections::BTreeMap;

/// Term frequency of one term across the documents containing it.
pub type TermFrequencies = BTreeMap<DocumentId, f64>;

/// Maps every indexed term to the documents containing it, with the term
/// frequency (occurrences / total word count of the document) precomputed
/// at indexing time.
#[derive(Debug, Default)]
pub struct InvertedIndex {
    postings: BTreeMap<String, TermFrequencies>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records term frequencies for one document. An empty word list is a
    /// no-op: a document consisting entirely of stop words contributes no
    /// terms but still exists in the store.
    pub fn index_document(&mut self, id: DocumentId, words: &[&str]) {
        if words.is_empty() {
            return;
        }
        let tf_step = 1.0 / words.len() as f64;
        for word in words {
            *self
                .postings
                .entry((*word).to_string())
                .or_default()
                .entry(id)
                .or_insert(0.0) += tf_step;
        }
    }

    /// TF of `term` in document `id`, 0.0 when either is absent.
    pub fn term_frequency(&self, term: &str, id: DocumentId) -> f64 {
        self.postings
            .get(term)
            .and_then(|frequencies| frequencies.get(&id))
            .copied()
            .unwrap_or(0.0)
    }

    /// Number of distinct documents containing `term`.
    pub fn documents_with_term(&self, term: &str) -> usize {
        self.postings.get(term).map_or(0, BTreeMap::len)
    }

    pub fn contains(&self, term: &str, id: DocumentId) -> bool {
        self.postings
            .get(term)
            .is_some_and(|frequencies| frequencies.contains_key(&id))
    }

    pub fn postings(&self, term: &str) -> Option<&TermFrequencies> {
        self.postings.get(term)
    }

    pub fn terms(&self) -> impl Iterator<Item = (&str, &TermFrequencies)> {
        self.postings
            .iter()
            .map(|(term, frequencies)| (term.as_str(), frequencies))
    }
}
