use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde_json::Value;
use wordcards_core::model::Progress;

use crate::repository::{ProgressRepository, StorageError};

/// Progress persisted as one JSON object mapping list ids to word arrays.
///
/// Saves go to a sibling temporary file that is renamed over the target, so a
/// crash mid-write leaves the previous file intact.
#[derive(Debug, Clone)]
pub struct JsonProgressFile {
    path: PathBuf,
}

impl JsonProgressFile {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "progress.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl ProgressRepository for JsonProgressFile {
    fn load(&self) -> Result<Progress, StorageError> {
        let contents = fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => StorageError::NotFound(self.path.display().to_string()),
            io::ErrorKind::InvalidData => {
                StorageError::Parse(format!("{}: {e}", self.path.display()))
            }
            _ => StorageError::Io(format!("{}: {e}", self.path.display())),
        })?;
        let value: Value = serde_json::from_str(&contents)
            .map_err(|e| StorageError::Parse(format!("{}: {e}", self.path.display())))?;
        progress_from_value(value)
            .map_err(|reason| StorageError::Parse(format!("{}: {reason}", self.path.display())))
    }

    fn save(&self, progress: &Progress) -> Result<(), StorageError> {
        let contents = serde_json::to_string_pretty(progress)
            .map_err(|e| StorageError::Write(format!("failed to serialize progress: {e}")))?;
        let temp = self.temp_path();
        write_replace(&temp, &self.path, contents.as_bytes()).map_err(|e| {
            let _ = fs::remove_file(&temp);
            StorageError::Write(format!("{}: {e}", self.path.display()))
        })
    }
}

fn write_replace(temp: &Path, target: &Path, bytes: &[u8]) -> io::Result<()> {
    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(temp)?;
    file.write_all(bytes)?;
    file.write_all(b"\n")?;
    file.sync_all()?;
    drop(file);
    fs::rename(temp, target)
}

/// Convert a parsed JSON document into `Progress`.
///
/// The root must be an object. Keys are kept verbatim. Entries with a
/// non-array value are dropped, as are non-string array items; each drop is
/// logged.
fn progress_from_value(value: Value) -> Result<Progress, String> {
    let map = match value {
        Value::Object(map) => map,
        other => return Err(format!("root is {}, expected an object", kind_of(&other))),
    };

    let mut progress = Progress::new();
    for (key, value) in map {
        let items = match value {
            Value::Array(items) => items,
            other => {
                log::warn!(
                    "dropping progress entry {key:?}: value is {}, expected an array",
                    kind_of(&other)
                );
                continue;
            }
        };
        let total = items.len();
        let words: Vec<String> = items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(word) => Some(word),
                _ => None,
            })
            .collect();
        if words.len() != total {
            log::warn!(
                "progress entry {key:?}: dropped {} non-string items",
                total - words.len()
            );
        }
        progress.set_entry(key, words);
    }
    Ok(progress)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
