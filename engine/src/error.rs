use crate::document::DocumentId;
use thiserror::Error;

/// Errors raised by the search engine. All of them surface synchronously at
/// the point of violation; the engine never retries or recovers internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("document id {0} is less than zero")]
    NegativeDocumentId(DocumentId),
    #[error("document with id {0} has already been added")]
    DuplicateDocumentId(DocumentId),
    #[error("text contains control characters")]
    ControlCharacterInText,
    #[error("no word after minus in query")]
    MissingWordAfterMinus,
    #[error("more than one minus before a minus word in query")]
    DoubleMinusPrefix,
    #[error("document position {position} is outside [0, {count})")]
    PositionOutOfRange { position: usize, count: usize },
    #[error("document with id {0} was never added")]
    DocumentNotFound(DocumentId),
}

pub type Result<T> = std::result::Result<T, SearchError>;
