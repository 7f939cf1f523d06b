use std::sync::Arc;

use storage::Storage;
use wordcards_core::Shuffler;

use crate::config::SessionConfig;
use crate::error::SessionError;
use crate::progress_store::ProgressStore;
use crate::sessions::SessionController;

/// Assembles the session controller from configuration.
#[derive(Clone)]
pub struct AppServices {
    config: SessionConfig,
    storage: Storage,
    shuffler: Shuffler,
}

impl AppServices {
    /// Services backed by CSV word lists and a JSON progress file.
    #[must_use]
    pub fn from_config(config: SessionConfig) -> Self {
        let storage = Storage::files(&config.words_dir, &config.progress_path);
        Self::with_storage(config, storage)
    }

    /// Services backed by an arbitrary storage bundle.
    #[must_use]
    pub fn with_storage(config: SessionConfig, storage: Storage) -> Self {
        Self {
            config,
            storage,
            shuffler: Shuffler::default(),
        }
    }

    #[must_use]
    pub fn with_shuffler(mut self, shuffler: Shuffler) -> Self {
        self.shuffler = shuffler;
        self
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Load progress and open a session on the startup list.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoLists` if the catalog is empty, or
    /// `SessionError::UnknownList` if the startup list is not in it.
    pub fn start_session(&self) -> Result<SessionController, SessionError> {
        let list = self
            .config
            .startup_list()
            .cloned()
            .ok_or(SessionError::NoLists)?;

        let progress = ProgressStore::open(Arc::clone(&self.storage.progress));
        let mut session = SessionController::new(
            self.config.lists.clone(),
            Arc::clone(&self.storage.words),
            progress,
        )
        .with_shuffler(self.shuffler.clone());
        session.select_list(list)?;
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ListCatalog;
    use storage::InMemoryRepository;
    use wordcards_core::model::{ListId, WordEntry};

    fn list(id: &str) -> ListId {
        ListId::new(id).unwrap()
    }

    #[test]
    fn starts_on_first_catalog_list() {
        let repo = InMemoryRepository::new();
        repo.insert_list(list("list1"), vec![WordEntry::new("cat", "猫").unwrap()]);
        let services = AppServices::with_storage(
            SessionConfig::default(),
            Storage::from_repository(repo),
        );

        let session = services.start_session().unwrap();

        assert_eq!(session.active_list(), Some(&list("list1")));
        assert_eq!(session.display().current_word.as_deref(), Some("cat"));
    }

    #[test]
    fn empty_catalog_cannot_start() {
        let config = SessionConfig {
            lists: ListCatalog::new(Vec::new()),
            ..SessionConfig::default()
        };
        let services = AppServices::with_storage(config, Storage::in_memory());

        assert_eq!(services.start_session().unwrap_err(), SessionError::NoLists);
    }

    #[test]
    fn startup_list_outside_catalog_is_rejected() {
        let config = SessionConfig::default().with_initial_list(list("list10"));
        let services = AppServices::with_storage(config, Storage::in_memory());

        assert_eq!(
            services.start_session().unwrap_err(),
            SessionError::UnknownList(list("list10"))
        );
    }
}
