use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use wordcards_core::model::{ListId, WordEntry};

use crate::repository::{StorageError, WordSource};

/// Word lists stored as `<dir>/<list id>.csv`.
///
/// Files have no header row. The first column is the word and the second the
/// definition; further columns are ignored.
#[derive(Debug, Clone)]
pub struct CsvWordSource {
    dir: PathBuf,
}

impl CsvWordSource {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Location of the file backing `list`.
    #[must_use]
    pub fn path_for(&self, list: &ListId) -> PathBuf {
        self.dir.join(format!("{list}.csv"))
    }
}

impl WordSource for CsvWordSource {
    fn load_words(&self, list: &ListId) -> Result<Vec<WordEntry>, StorageError> {
        let path = self.path_for(list);
        let file = File::open(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => StorageError::NotFound(path.display().to_string()),
            _ => StorageError::Io(format!("{}: {e}", path.display())),
        })?;

        let words = parse_words(file)
            .map_err(|e| StorageError::Parse(format!("{}: {e}", path.display())))?;
        log::debug!("loaded {} words from {}", words.len(), path.display());
        Ok(words)
    }
}

/// Parse header-less two-column CSV into word entries.
///
/// Blank lines and rows whose first column is blank are skipped; a missing
/// second column yields an empty definition.
///
/// # Errors
///
/// Returns the underlying `csv::Error` on malformed input or invalid UTF-8.
pub fn parse_words<R: Read>(reader: R) -> Result<Vec<WordEntry>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut words = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        let word = record.get(0).unwrap_or("").trim_start_matches('\u{feff}');
        let definition = record.get(1).unwrap_or("");
        match WordEntry::new(word, definition) {
            Ok(entry) => words.push(entry),
            Err(_) => log::debug!("skipping row {} without a word", row + 1),
        }
    }
    Ok(words)
}
