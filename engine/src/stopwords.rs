use crate::error::{Result, SearchError};
use crate::tokenizer::{is_valid_text, split_into_words};
use std::collections::HashSet;

/// Words excluded from both indexing and query matching. Every entry point
/// validates words for control characters.
#[derive(Debug, Default, Clone)]
pub struct StopWordSet {
    words: HashSet<String>,
}

impl StopWordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the set from a space-delimited string.
    pub fn from_text(text: &str) -> Result<Self> {
        let mut set = Self::new();
        set.insert_text(text)?;
        Ok(set)
    }

    /// Builds the set from an already tokenized collection of words.
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for word in words {
            set.insert(word.as_ref())?;
        }
        Ok(set)
    }

    /// Splits `text` and inserts every word.
    pub fn insert_text(&mut self, text: &str) -> Result<()> {
        if !is_valid_text(text) {
            return Err(SearchError::ControlCharacterInText);
        }
        for word in split_into_words(text) {
            self.words.insert(word.to_string());
        }
        Ok(())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    fn insert(&mut self, word: &str) -> Result<()> {
        if !is_valid_text(word) {
            return Err(SearchError::ControlCharacterInText);
        }
        self.words.insert(word.to_string());
        Ok(())
    }
}
