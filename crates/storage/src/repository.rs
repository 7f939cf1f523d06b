use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use thiserror::Error;
use wordcards_core::model::{ListId, Progress, WordEntry};

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("write error: {0}")]
    Write(String),

    #[error("io error: {0}")]
    Io(String),
}

impl StorageError {
    /// Returns true when the resource simply does not exist yet.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::NotFound(_))
    }
}

/// Source of the (word, definition) rows behind a list identifier.
pub trait WordSource: Send + Sync {
    /// Load every entry of a list, in source order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if the list has no backing resource,
    /// or `StorageError::Parse` if the resource is malformed.
    fn load_words(&self, list: &ListId) -> Result<Vec<WordEntry>, StorageError>;
}

/// Durable home of the remembered-words mapping.
pub trait ProgressRepository: Send + Sync {
    /// Read the full persisted mapping.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if nothing was saved yet, or
    /// `StorageError::Parse` if the stored data is not a mapping.
    fn load(&self) -> Result<Progress, StorageError>;

    /// Replace the persisted mapping with `progress`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Write` if the data cannot be stored.
    fn save(&self, progress: &Progress) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    lists: Arc<Mutex<HashMap<ListId, Vec<WordEntry>>>>,
    progress: Arc<Mutex<Option<Progress>>>,
    fail_saves: Arc<Mutex<bool>>,
    saves: Arc<Mutex<usize>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the rows of a list.
    pub fn insert_list(&self, list: ListId, words: Vec<WordEntry>) {
        if let Ok(mut guard) = self.lists.lock() {
            guard.insert(list, words);
        }
    }

    /// Seed the persisted progress as if a previous run had saved it.
    pub fn seed_progress(&self, progress: Progress) {
        if let Ok(mut guard) = self.progress.lock() {
            *guard = Some(progress);
        }
    }

    /// Make every subsequent `save` fail until switched back.
    pub fn set_fail_saves(&self, fail: bool) {
        if let Ok(mut guard) = self.fail_saves.lock() {
            *guard = fail;
        }
    }

    /// Last successfully saved (or seeded) progress.
    #[must_use]
    pub fn persisted(&self) -> Option<Progress> {
        self.progress.lock().ok().and_then(|guard| guard.clone())
    }

    /// Number of successful saves.
    #[must_use]
    pub fn save_count(&self) -> usize {
        self.saves.lock().map(|guard| *guard).unwrap_or(0)
    }
}

impl WordSource for InMemoryRepository {
    fn load_words(&self, list: &ListId) -> Result<Vec<WordEntry>, StorageError> {
        let guard = self
            .lists
            .lock()
            .map_err(|e| StorageError::Io(e.to_string()))?;
        guard
            .get(list)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(list.to_string()))
    }
}

impl ProgressRepository for InMemoryRepository {
    fn load(&self) -> Result<Progress, StorageError> {
        let guard = self
            .progress
            .lock()
            .map_err(|e| StorageError::Io(e.to_string()))?;
        guard
            .clone()
            .ok_or_else(|| StorageError::NotFound("progress".into()))
    }

    fn save(&self, progress: &Progress) -> Result<(), StorageError> {
        let fail = self
            .fail_saves
            .lock()
            .map_err(|e| StorageError::Write(e.to_string()))?;
        if *fail {
            return Err(StorageError::Write("saves disabled".into()));
        }
        let mut guard = self
            .progress
            .lock()
            .map_err(|e| StorageError::Write(e.to_string()))?;
        *guard = Some(progress.clone());
        if let Ok(mut saves) = self.saves.lock() {
            *saves += 1;
        }
        Ok(())
    }
}

/// Aggregates word and progress repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub words: Arc<dyn WordSource>,
    pub progress: Arc<dyn ProgressRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self::from_repository(InMemoryRepository::new())
    }

    /// Use one in-memory repository for both concerns, keeping a handle for seeding.
    #[must_use]
    pub fn from_repository(repo: InMemoryRepository) -> Self {
        let words: Arc<dyn WordSource> = Arc::new(repo.clone());
        let progress: Arc<dyn ProgressRepository> = Arc::new(repo);
        Self { words, progress }
    }
}
