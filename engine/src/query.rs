use crate::error::{Result, SearchError};
use crate::stopwords::StopWordSet;
use crate::tokenizer::{is_valid_text, split_into_words};
use std::collections::BTreeSet;

/// A parsed query: words that must match and words that disqualify a
/// document outright. The sets are disjoint after parsing.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Query {
    pub plus_words: BTreeSet<String>,
    pub minus_words: BTreeSet<String>,
}

impl Query {
    /// Parses raw query text. Stop words are dropped before minus handling,
    /// testing each word with any single leading minus removed.
    pub fn parse(raw: &str, stop_words: &StopWordSet) -> Result<Self> {
        let mut query = Query::default();
        for word in split_into_words_no_stop(raw, stop_words)? {
            if let Some(rest) = word.strip_prefix('-') {
                if rest.is_empty() {
                    return Err(SearchError::MissingWordAfterMinus);
                }
                if rest.starts_with('-') {
                    return Err(SearchError::DoubleMinusPrefix);
                }
                query.minus_words.insert(rest.to_string());
            } else {
                query.plus_words.insert(word.to_string());
            }
        }
        // A word queried both plainly and with a minus keeps only the minus form.
        let Query { plus_words, minus_words } = &mut query;
        plus_words.retain(|word| !minus_words.contains(word));
        Ok(query)
    }
}

/// Splits text into words, dropping those whose form without a single
/// leading minus is a stop word. Shared by document indexing and parsing.
pub(crate) fn split_into_words_no_stop<'a>(
    text: &'a str,
    stop_words: &StopWordSet,
) -> Result<Vec<&'a str>> {
    if !is_valid_text(text) {
        return Err(SearchError::ControlCharacterInText);
    }
    Ok(split_into_words(text)
        .into_iter()
        .filter(|word| !stop_words.contains(word.strip_prefix('-').unwrap_or(word)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stop_words() -> StopWordSet {
        StopWordSet::from_text("and in the").unwrap()
    }

    #[test]
    fn separates_plus_and_minus_words() {
        let query = Query::parse("white cat -fluffy", &stop_words()).unwrap();
        assert!(query.plus_words.contains("white"));
        assert!(query.plus_words.contains("cat"));
        assert!(query.minus_words.contains("fluffy"));
        assert!(!query.plus_words.contains("fluffy"));
    }

    #[test]
    fn drops_stop_words_even_with_minus_prefix() {
        let query = Query::parse("cat -the and", &stop_words()).unwrap();
        assert_eq!(query.plus_words.len(), 1);
        assert!(query.minus_words.is_empty());
    }

    #[test]
    fn duplicate_words_collapse() {
        let query = Query::parse("cat cat -dog -dog", &stop_words()).unwrap();
        assert_eq!(query.plus_words.len(), 1);
        assert_eq!(query.minus_words.len(), 1);
    }

    #[test]
    fn minus_form_wins_over_plus_form() {
        let query = Query::parse("cat -cat tail", &stop_words()).unwrap();
        assert!(query.minus_words.contains("cat"));
        assert!(!query.plus_words.contains("cat"));
        assert!(query.plus_words.contains("tail"));
    }

    #[test]
    fn bare_minus_is_rejected() {
        assert_eq!(
            Query::parse("cat -", &stop_words()).unwrap_err(),
            SearchError::MissingWordAfterMinus
        );
    }

    #[test]
    fn double_minus_is_rejected() {
        assert_eq!(
            Query::parse("--cat", &stop_words()).unwrap_err(),
            SearchError::DoubleMinusPrefix
        );
    }

    #[test]
    fn control_characters_are_rejected() {
        assert_eq!(
            Query::parse("cat\x07", &stop_words()).unwrap_err(),
            SearchError::ControlCharacterInText
        );
    }
}
