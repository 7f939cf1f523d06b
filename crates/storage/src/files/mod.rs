use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::repository::{ProgressRepository, Storage, WordSource};

mod progress_json;
mod word_csv;

pub use progress_json::JsonProgressFile;
pub use word_csv::{CsvWordSource, parse_words};

impl Storage {
    /// Build a `Storage` backed by CSV word lists under `words_dir` and a JSON
    /// progress file at `progress_path`.
    ///
    /// Nothing is touched on disk until the first load or save.
    #[must_use]
    pub fn files(words_dir: impl Into<PathBuf>, progress_path: impl AsRef<Path>) -> Self {
        let words: Arc<dyn WordSource> = Arc::new(CsvWordSource::new(words_dir));
        let progress: Arc<dyn ProgressRepository> =
            Arc::new(JsonProgressFile::new(progress_path.as_ref()));
        Self { words, progress }
    }
}
