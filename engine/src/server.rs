use crate::document::{Document, DocumentId, DocumentStatus};
use crate::error::Result;
use crate::index::{InvertedIndex, TermFrequencies};
use crate::query::{split_into_words_no_stop, Query};
use crate::stopwords::StopWordSet;
use crate::store::DocumentStore;
use serde::Serialize;
use std::collections::BTreeMap;

/// Hard cap on the number of documents a search returns.
pub const MAX_RESULT_DOCUMENT_COUNT: usize = 5;

/// Relevance scores closer than this are tied; ties fall back to rating.
pub const RELEVANCE_EPSILON: f64 = 1e-6;

/// In-memory TF-IDF search engine: owns the inverted index, the document
/// store, and the stop word set. Queries are stateless; each search depends
/// only on the documents added so far.
#[derive(Debug, Default)]
pub struct SearchServer {
    index: InvertedIndex,
    store: DocumentStore,
    stop_words: StopWordSet,
}

impl SearchServer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Server with stop words taken from a space-delimited string.
    pub fn with_stop_words(text: &str) -> Result<Self> {
        Ok(Self {
            stop_words: StopWordSet::from_text(text)?,
            ..Self::default()
        })
    }

    /// Server with stop words taken from an already tokenized collection.
    pub fn with_stop_word_list<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self {
            stop_words: StopWordSet::from_words(words)?,
            ..Self::default()
        })
    }

    /// Adds more stop words from a space-delimited string.
    pub fn set_stop_words(&mut self, text: &str) -> Result<()> {
        self.stop_words.insert_text(text)
    }

    /// Indexes one document. Fails on a negative or duplicate id and on
    /// control characters in `text`, leaving the server untouched. A
    /// document whose words are all stop words is stored with no terms.
    pub fn add_document(
        &mut self,
        id: DocumentId,
        text: &str,
        status: DocumentStatus,
        ratings: &[i32],
    ) -> Result<()> {
        let words = split_into_words_no_stop(text, &self.stop_words)?;
        self.store.add(id, status, ratings)?;
        self.index.index_document(id, &words);
        Ok(())
    }

    /// Top matches among documents with status `Actual`.
    pub fn find_top_documents(&self, raw_query: &str) -> Result<Vec<Document>> {
        self.find_top_documents_with_status(raw_query, DocumentStatus::Actual)
    }

    /// Top matches among documents with the given status.
    pub fn find_top_documents_with_status(
        &self,
        raw_query: &str,
        wanted: DocumentStatus,
    ) -> Result<Vec<Document>> {
        self.find_top_documents_with_predicate(raw_query, move |_, status, _| status == wanted)
    }

    /// Top matches among documents accepted by `predicate`, ordered by
    /// descending relevance with rating breaking near-ties, capped at
    /// [`MAX_RESULT_DOCUMENT_COUNT`].
    pub fn find_top_documents_with_predicate<F>(
        &self,
        raw_query: &str,
        predicate: F,
    ) -> Result<Vec<Document>>
    where
        F: Fn(DocumentId, DocumentStatus, i32) -> bool,
    {
        let query = Query::parse(raw_query, &self.stop_words)?;
        let mut matched = self.find_all_documents(&query, predicate);
        sort_matched(&mut matched);
        matched.truncate(MAX_RESULT_DOCUMENT_COUNT);
        Ok(matched)
    }

    pub fn document_count(&self) -> usize {
        self.store.count()
    }

    /// Id of the document added at `position` (0-based insertion order).
    pub fn document_id_at(&self, position: usize) -> Result<DocumentId> {
        self.store.id_at(position)
    }

    /// Plus words of the query that occur in the given document, sorted,
    /// together with the document's status. Any matching minus word empties
    /// the list.
    pub fn match_document(
        &self,
        raw_query: &str,
        id: DocumentId,
    ) -> Result<(Vec<String>, DocumentStatus)> {
        let status = self.store.get(id)?.status;
        let query = Query::parse(raw_query, &self.stop_words)?;
        if query.minus_words.iter().any(|word| self.index.contains(word, id)) {
            return Ok((Vec::new(), status));
        }
        let matched = query
            .plus_words
            .iter()
            .filter(|word| self.index.contains(word, id))
            .cloned()
            .collect();
        Ok((matched, status))
    }

    /// Snapshot of the whole index and store for debug printing. Not part
    /// of the functional search contract.
    pub fn dump(&self) -> IndexDump {
        IndexDump {
            terms: self
                .index
                .terms()
                .map(|(term, frequencies)| (term.to_string(), frequencies.clone()))
                .collect(),
            documents: self
                .store
                .iter_in_order()
                .map(|(id, properties)| DumpedDocument {
                    id,
                    status: properties.status,
                    rating: properties.rating,
                })
                .collect(),
        }
    }

    /// Unsorted candidates: TF-IDF accumulated over plus words for documents
    /// the predicate accepts, then documents carrying any minus word erased.
    /// The predicate runs at accumulation time, so a rejected document never
    /// enters the candidate set at all.
    fn find_all_documents<F>(&self, query: &Query, predicate: F) -> Vec<Document>
    where
        F: Fn(DocumentId, DocumentStatus, i32) -> bool,
    {
        // Accumulated in id order so fully tied documents always come out
        // in the same order.
        let mut relevance: BTreeMap<DocumentId, f64> = BTreeMap::new();
        for plus_word in &query.plus_words {
            let Some(postings) = self.index.postings(plus_word) else {
                continue;
            };
            let idf = self.inverse_document_frequency(plus_word);
            for (&id, &term_frequency) in postings {
                let Ok(properties) = self.store.get(id) else {
                    continue;
                };
                if predicate(id, properties.status, properties.rating) {
                    *relevance.entry(id).or_insert(0.0) += term_frequency * idf;
                }
            }
        }
        for minus_word in &query.minus_words {
            if let Some(postings) = self.index.postings(minus_word) {
                for id in postings.keys() {
                    relevance.remove(id);
                }
            }
        }
        relevance
            .into_iter()
            .filter_map(|(id, score)| {
                self.store
                    .get(id)
                    .ok()
                    .map(|properties| Document::new(id, score, properties.rating))
            })
            .collect()
    }

    // Callers check that the term is present in the index, so the
    // denominator is never zero.
    fn inverse_document_frequency(&self, term: &str) -> f64 {
        (self.store.count() as f64 / self.index.documents_with_term(term) as f64).ln()
    }
}

/// Stable insertion sort on the epsilon-band ranking. The band comparison
/// is not a total order, so the std sort (which requires one and may panic
/// without it) is not usable here.
fn sort_matched(documents: &mut [Document]) {
    for i in 1..documents.len() {
        let mut j = i;
        while j > 0 && ranks_before(&documents[j], &documents[j - 1]) {
            documents.swap(j, j - 1);
            j -= 1;
        }
    }
}

fn ranks_before(lhs: &Document, rhs: &Document) -> bool {
    if (lhs.relevance - rhs.relevance).abs() < RELEVANCE_EPSILON {
        lhs.rating > rhs.rating
    } else {
        lhs.relevance > rhs.relevance
    }
}

#[derive(Debug, Serialize)]
pub struct DumpedDocument {
    pub id: DocumentId,
    pub status: DocumentStatus,
    pub rating: i32,
}

/// Serializable debug snapshot produced by [`SearchServer::dump`].
#[derive(Debug, Serialize)]
pub struct IndexDump {
    pub terms: BTreeMap<String, TermFrequencies>,
    pub documents: Vec<DumpedDocument>,
}
