use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

use crate::model::ids::ListId;

//
// ─── REMEMBERED WORDS ──────────────────────────────────────────────────────────
//

/// Set of remembered words for one list.
///
/// Keeps first-insertion order so that saving and reloading a list does not
/// reshuffle the persisted array.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RememberedWords {
    order: Vec<String>,
    lookup: HashSet<String>,
}

impl RememberedWords {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the set from persisted words, dropping repeats.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::new();
        for word in words {
            set.insert(word);
        }
        set
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.lookup.contains(word)
    }

    /// Adds a word. Returns `false` if it was already present.
    pub fn insert(&mut self, word: impl Into<String>) -> bool {
        let word = word.into();
        if self.lookup.contains(&word) {
            return false;
        }
        self.lookup.insert(word.clone());
        self.order.push(word);
        true
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.lookup.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Ordered copy suitable for persisting.
    #[must_use]
    pub fn to_vec(&self) -> Vec<String> {
        self.order.clone()
    }
}

//
// ─── PROGRESS ──────────────────────────────────────────────────────────────────
//

/// Remembered words for every known list, as persisted.
///
/// Keys are kept exactly as stored, including ones that are not valid
/// `ListId`s, so that entries written by other tools survive a save. Arrays
/// are stored as given (repeats tolerated, order kept); the set semantics
/// live in `RememberedWords`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Progress {
    lists: BTreeMap<String, Vec<String>>,
}

impl Progress {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Remembered words of a list; empty when the list is unknown.
    #[must_use]
    pub fn remembered(&self, list: &ListId) -> RememberedWords {
        self.lists
            .get(list.as_str())
            .map(|words| RememberedWords::from_words(words.iter().cloned()))
            .unwrap_or_default()
    }

    /// Raw persisted words of a list.
    #[must_use]
    pub fn words(&self, list: &ListId) -> Option<&[String]> {
        self.lists.get(list.as_str()).map(Vec::as_slice)
    }

    /// Replaces the entry for a list.
    pub fn set_words(&mut self, list: ListId, words: Vec<String>) {
        self.lists.insert(list.into(), words);
    }

    /// Replaces the entry stored under an arbitrary key.
    pub fn set_entry(&mut self, key: impl Into<String>, words: Vec<String>) {
        self.lists.insert(key.into(), words);
    }

    /// Inserts an empty entry for `list` if none exists. Returns `true` on insert.
    pub fn ensure_list(&mut self, list: &ListId) -> bool {
        if self.lists.contains_key(list.as_str()) {
            return false;
        }
        self.lists.insert(list.as_str().to_owned(), Vec::new());
        true
    }

    /// Empties every entry, keeping the keys.
    pub fn clear_all(&mut self) {
        for words in self.lists.values_mut() {
            words.clear();
        }
    }

    /// Every stored entry, by key.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.lists
            .iter()
            .map(|(key, words)| (key.as_str(), words.as_slice()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }
}

impl FromIterator<(ListId, Vec<String>)> for Progress {
    fn from_iter<T: IntoIterator<Item = (ListId, Vec<String>)>>(iter: T) -> Self {
        Self {
            lists: iter
                .into_iter()
                .map(|(list, words)| (list.into(), words))
                .collect(),
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
    fn remembered_words_dedupe_and_keep_order() {
        let set = RememberedWords::from_words(["dog", "cat", "dog"]);
        assert_eq!(set.len(), 2);
        assert_eq!(set.to_vec(), vec!["dog".to_string(), "cat".to_string()]);
        assert!(set.contains("cat"));
        assert!(!set.contains("bird"));
    }

    #[test]
    fn insert_reports_new_words_only() {
        let mut set = RememberedWords::new();
        assert!(set.insert("cat"));
        assert!(!set.insert("cat"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn unknown_list_has_no_remembered_words() {
        let progress = Progress::new();
        assert!(progress.remembered(&list("list4")).is_empty());
        assert_eq!(progress.words(&list("list4")), None);
    }

    #[test]
    fn clear_all_keeps_keys() {
        let mut progress: Progress = [
            (list("list1"), vec!["cat".to_string()]),
            (list("list2"), vec!["狗".to_string()]),
        ]
        .into_iter()
        .collect();

        progress.clear_all();

        assert_eq!(progress.len(), 2);
        assert_eq!(progress.words(&list("list1")).map(<[String]>::len), Some(0));
        assert_eq!(progress.words(&list("list2")).map(<[String]>::len), Some(0));
    }

    #[test]
    fn ensure_list_does_not_overwrite() {
        let mut progress = Progress::new();
        progress.set_words(list("list1"), vec!["cat".into()]);
        assert!(!progress.ensure_list(&list("list1")));
        assert!(progress.ensure_list(&list("list2")));
        assert_eq!(progress.words(&list("list1")).map(<[String]>::len), Some(1));
    }

    #[test]
    fn foreign_keys_are_kept_verbatim() {
        let mut progress: Progress =
            serde_json::from_str(r#"{"unit/2":["apple"]," list3 ":["梨"],"list3":["桃"]}"#)
                .unwrap();
        assert_eq!(progress.len(), 3);
        assert_eq!(progress.words(&list("list3")), Some(&["桃".to_string()][..]));

        progress.clear_all();
        progress.set_words(list("list1"), vec!["cat".into()]);

        let keys: Vec<&str> = progress.entries().map(|(key, _)| key).collect();
        assert_eq!(keys, vec![" list3 ", "list1", "list3", "unit/2"]);
    }

    #[test]
    fn progress_serializes_as_plain_mapping() {
        let mut progress = Progress::new();
        progress.set_words(list("list1"), vec!["cat".into(), "猫".into()]);
        let json = serde_json::to_string(&progress).unwrap();
        assert_eq!(json, r#"{"list1":["cat","猫"]}"#);

        let back: Progress = serde_json::from_str(&json).unwrap();
        assert_eq!(back, progress);
    }
}
