use std::path::PathBuf;

use wordcards_core::model::ListId;

/// Default directory holding `<list id>.csv` files.
pub const DEFAULT_WORDS_DIR: &str = "vocabulary_csv";
/// Default location of the progress file.
pub const DEFAULT_PROGRESS_FILE: &str = "progress.json";
/// Number of lists in the default catalog (`list1`..`list9`).
pub const DEFAULT_LIST_COUNT: usize = 9;

//
// ─── LIST CATALOG ──────────────────────────────────────────────────────────────
//

/// The fixed set of list identifiers a session may select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListCatalog {
    ids: Vec<ListId>,
}

impl ListCatalog {
    /// Builds a catalog from explicit ids, dropping repeats.
    pub fn new(ids: impl IntoIterator<Item = ListId>) -> Self {
        let mut unique: Vec<ListId> = Vec::new();
        for id in ids {
            if !unique.contains(&id) {
                unique.push(id);
            }
        }
        Self { ids: unique }
    }

    /// `<prefix>1` through `<prefix><count>`.
    #[must_use]
    pub fn numbered(prefix: &str, count: usize) -> Self {
        Self::new((1..=count).filter_map(|i| ListId::new(format!("{prefix}{i}")).ok()))
    }

    #[must_use]
    pub fn contains(&self, id: &ListId) -> bool {
        self.ids.contains(id)
    }

    #[must_use]
    pub fn first(&self) -> Option<&ListId> {
        self.ids.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ListId> {
        self.ids.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl Default for ListCatalog {
    fn default() -> Self {
        Self::numbered("list", DEFAULT_LIST_COUNT)
    }
}

//
// ─── SESSION CONFIG ────────────────────────────────────────────────────────────
//

/// Where word lists and progress live, and which lists exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub words_dir: PathBuf,
    pub progress_path: PathBuf,
    pub lists: ListCatalog,
    /// List shown at startup; the first catalog entry when `None`.
    pub initial_list: Option<ListId>,
}

impl SessionConfig {
    #[must_use]
    pub fn with_words_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.words_dir = dir.into();
        self
    }

    #[must_use]
    pub fn with_progress_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.progress_path = path.into();
        self
    }

    #[must_use]
    pub fn with_initial_list(mut self, list: ListId) -> Self {
        self.initial_list = Some(list);
        self
    }

    /// The list to select at startup.
    #[must_use]
    pub fn startup_list(&self) -> Option<&ListId> {
        self.initial_list.as_ref().or_else(|| self.lists.first())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            words_dir: PathBuf::from(DEFAULT_WORDS_DIR),
            progress_path: PathBuf::from(DEFAULT_PROGRESS_FILE),
            lists: ListCatalog::default(),
            initial_list: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(id: &str) -> ListId {
        ListId::new(id).unwrap()
    }

    #[test]
    fn default_catalog_has_nine_lists() {
        let catalog = ListCatalog::default();
        assert_eq!(catalog.len(), 9);
        assert_eq!(catalog.first(), Some(&list("list1")));
        assert!(catalog.contains(&list("list9")));
        assert!(!catalog.contains(&list("list10")));
    }

    #[test]
    fn catalog_drops_repeats() {
        let catalog = ListCatalog::new([list("a"), list("b"), list("a")]);
        assert_eq!(catalog.iter().map(ListId::as_str).collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn startup_list_prefers_explicit_choice() {
        let config = SessionConfig::default();
        assert_eq!(config.startup_list(), Some(&list("list1")));

        let config = config.with_initial_list(list("list4"));
        assert_eq!(config.startup_list(), Some(&list("list4")));
    }

    #[test]
    fn default_paths_are_relative_to_working_dir() {
        let config = SessionConfig::default();
        assert_eq!(config.words_dir, PathBuf::from("vocabulary_csv"));
        assert_eq!(config.progress_path, PathBuf::from("progress.json"));
    }
}
