//! In-memory document search engine ranking results with TF-IDF.
//!
//! Documents are short texts with a status and an integer rating. Queries
//! are free text with plus words (must match) and `-`-prefixed minus words
//! (disqualify a document). The whole corpus lives in memory; there is no
//! persistence and no concurrency.

pub mod document;
pub mod error;
pub mod index;
pub mod query;
pub mod server;
pub mod stopwords;
pub mod store;
pub mod tokenizer;

pub use document::{Document, DocumentId, DocumentStatus};
pub use error::{Result, SearchError};
pub use index::InvertedIndex;
pub use query::Query;
pub use server::{IndexDump, SearchServer, MAX_RESULT_DOCUMENT_COUNT, RELEVANCE_EPSILON};
pub use stopwords::StopWordSet;
pub use store::{DocumentProperties, DocumentStore};
