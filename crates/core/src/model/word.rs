use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum WordError {
    #[error("word cannot be empty")]
    EmptyWord,
}

/// A single row of a word list: the word and its definition.
///
/// Both fields are trimmed on construction. The `word` text is the identity
/// key for remembered-tracking, so two entries with the same word share
/// one progress entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    word: String,
    definition: String,
}

impl WordEntry {
    /// Creates a new entry.
    ///
    /// # Errors
    ///
    /// Returns `WordError::EmptyWord` if the word is blank after trimming.
    pub fn new(
        word: impl Into<String>,
        definition: impl Into<String>,
    ) -> Result<Self, WordError> {
        let word = word.into().trim().to_owned();
        if word.is_empty() {
            return Err(WordError::EmptyWord);
        }
        let definition = definition.into().trim().to_owned();
        Ok(Self { word, definition })
    }

    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[must_use]
    pub fn definition(&self) -> &str {
        &self.definition
    }
}
