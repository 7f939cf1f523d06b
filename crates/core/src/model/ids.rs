use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised when a string cannot name a word list.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseListIdError {
    #[error("list id cannot be empty")]
    Empty,

    #[error("list id {raw:?} contains a path separator or parent reference")]
    InvalidCharacter { raw: String },
}

/// Identifier of a word list and its progress partition.
///
/// The identifier doubles as a file stem under the words directory, so it is
/// trimmed and must not contain path separators or `..`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ListId(String);

impl ListId {
    /// Creates a new `ListId`
    ///
    /// # Errors
    ///
    /// Returns `ParseListIdError` if the trimmed value is empty or could
    /// escape the words directory.
    pub fn new(raw: impl Into<String>) -> Result<Self, ParseListIdError> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ParseListIdError::Empty);
        }
        if trimmed.contains(['/', '\\']) || trimmed.contains("..") {
            return Err(ParseListIdError::InvalidCharacter { raw });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the identifier as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ListId({:?})", self.0)
    }
}

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ListId {
    type Err = ParseListIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ListId {
    type Error = ParseListIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ListId> for String {
    fn from(value: ListId) -> Self {
        value.0
    }
}

impl AsRef<str> for ListId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
