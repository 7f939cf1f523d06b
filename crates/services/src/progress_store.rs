use std::sync::Arc;

use storage::ProgressRepository;
use wordcards_core::model::{ListId, Progress, RememberedWords};

/// In-memory progress mapping that writes through to a repository.
///
/// The in-memory copy is authoritative. Every mutation is saved immediately;
/// a failed save is logged and the next mutation tries again with the full
/// mapping.
pub struct ProgressStore {
    progress: Progress,
    repo: Arc<dyn ProgressRepository>,
}

impl ProgressStore {
    /// Load persisted progress, starting empty if it is missing or unreadable.
    #[must_use]
    pub fn open(repo: Arc<dyn ProgressRepository>) -> Self {
        let progress = match repo.load() {
            Ok(progress) => progress,
            Err(e) if e.is_not_found() => {
                log::info!("no saved progress ({e}); starting fresh");
                Progress::new()
            }
            Err(e) => {
                log::warn!("ignoring unreadable progress: {e}");
                Progress::new()
            }
        };
        Self { progress, repo }
    }

    #[must_use]
    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    /// Remembered words of a list; empty when the list is unknown.
    #[must_use]
    pub fn remembered(&self, list: &ListId) -> RememberedWords {
        self.progress.remembered(list)
    }

    /// Make sure `list` has an entry so that resets reach it. Does not save.
    pub fn ensure_list(&mut self, list: &ListId) {
        self.progress.ensure_list(list);
    }

    /// Replace a list's remembered words and save.
    pub fn set_remembered(&mut self, list: ListId, words: Vec<String>) {
        self.progress.set_words(list, words);
        self.save();
    }

    /// Empty every known list and save.
    pub fn clear_all(&mut self) {
        self.progress.clear_all();
        self.save();
    }

    fn save(&self) {
        if let Err(e) = self.repo.save(&self.progress) {
            log::error!("failed to save progress: {e}");
        }
    }
}

impl std::fmt::Debug for ProgressStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressStore")
            .field("lists", &self.progress.len())
            .finish_non_exhaustive()
    }
}
