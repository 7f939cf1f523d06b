//! Shared error types for the services crate.

use thiserror::Error;

use wordcards_core::model::ListId;

/// Errors emitted by session services.
///
/// Storage failures never show up here: missing or corrupt data degrades to
/// empty data and failed saves are logged, so the session always has a valid
/// display state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("unknown word list: {0}")]
    UnknownList(ListId),
    #[error("no word lists configured")]
    NoLists,
}
