use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::content::model::VocabEntry;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VocabError {
    #[error("no saved word at index {index} (have {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// The user's study list. Insertion order is display order and no two
/// entries share a `word`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<VocabEntry>")]
pub struct SavedWords(Vec<VocabEntry>);

impl From<Vec<VocabEntry>> for SavedWords {
    fn from(entries: Vec<VocabEntry>) -> Self {
        Self::from_entries(entries)
    }
}

impl SavedWords {
    /// Build from persisted data, dropping later duplicates.
    pub fn from_entries(entries: Vec<VocabEntry>) -> Self {
        let mut words = Self::default();
        for entry in entries {
            words.insert(entry);
        }
        words
    }

    pub fn contains(&self, word: &str) -> bool {
        self.0.iter().any(|w| w.word == word)
    }

    /// Append a copy of `entry`. Returns false when the word is already saved.
    pub fn insert(&mut self, entry: VocabEntry) -> bool {
        if self.contains(&entry.word) {
            return false;
        }
        self.0.push(entry);
        true
    }

    pub fn remove(&mut self, index: usize) -> Result<VocabEntry, VocabError> {
        if index >= self.0.len() {
            return Err(VocabError::IndexOutOfRange {
                index,
                len: self.0.len(),
            });
        }
        Ok(self.0.remove(index))
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[VocabEntry] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VocabEntry> {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_is_idempotent_by_word() {
        let mut words = SavedWords::default();
        assert!(words.insert(VocabEntry::new("دن", "din", "day")));
        assert!(!words.insert(VocabEntry::new("دن", "din", "day")));
        // same word, different gloss: still a duplicate
        assert!(!words.insert(VocabEntry::new("دن", "dinn", "daytime")));
        assert_eq!(words.len(), 1);
        assert_eq!(words.as_slice()[0].meaning, "day");
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut words = SavedWords::default();
        words.insert(VocabEntry::new("پانی", "paani", "water"));
        words.insert(VocabEntry::new("کوا", "kawwa", "crow"));
        words.insert(VocabEntry::new("دن", "din", "day"));
        let order: Vec<&str> = words.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(order, vec!["پانی", "کوا", "دن"]);
    }

    #[test]
    fn test_remove_by_index() {
        let mut words = SavedWords::from_entries(vec![
            VocabEntry::new("a", "", ""),
            VocabEntry::new("b", "", ""),
        ]);
        let removed = words.remove(0).unwrap();
        assert_eq!(removed.word, "a");
        assert_eq!(words.len(), 1);
        assert_eq!(
            words.remove(5),
            Err(VocabError::IndexOutOfRange { index: 5, len: 1 })
        );
        assert_eq!(words.len(), 1);
    }

    #[test]
    fn test_from_entries_drops_duplicates() {
        let words = SavedWords::from_entries(vec![
            VocabEntry::new("a", "", "first"),
            VocabEntry::new("a", "", "second"),
        ]);
        assert_eq!(words.len(), 1);
        assert_eq!(words.as_slice()[0].meaning, "first");
    }

    #[test]
    fn test_deserialize_drops_duplicates() {
        let json = r#"[{"word":"a","meaning":"x"},{"word":"a","meaning":"y"}]"#;
        let words: SavedWords = serde_json::from_str(json).unwrap();
        assert_eq!(words.len(), 1);
    }

    #[test]
    fn test_serializes_as_plain_list() {
        let words = SavedWords::from_entries(vec![VocabEntry::new("دن", "din", "day")]);
        let json = serde_json::to_string(&words).unwrap();
        assert_eq!(json, r#"[{"word":"دن","transliteration":"din","meaning":"day"}]"#);
    }
}
