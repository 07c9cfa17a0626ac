use std::collections::{HashMap, HashSet};

use crate::content::model::{Chapter, VocabEntry};
use crate::text::normalize::{normalize, tokenize};

/// Normalized token -> vocabulary entry.
pub type VocabMap<'a> = HashMap<String, &'a VocabEntry>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnnotatedToken<'a> {
    pub token: &'a str,
    pub vocab: Option<&'a VocabEntry>,
    pub is_difficult: bool,
}

impl AnnotatedToken<'_> {
    pub fn is_interactive(&self) -> bool {
        self.vocab.is_some()
    }
}

/// Later entries win when two words normalize to the same key. Entries whose
/// key normalizes to nothing are skipped.
pub fn build_vocab_map(entries: &[VocabEntry]) -> VocabMap<'_> {
    let mut map = HashMap::with_capacity(entries.len());
    for entry in entries {
        let key = normalize(&entry.word);
        if !key.is_empty() {
            map.insert(key, entry);
        }
    }
    map
}

pub fn build_difficult_set<S: AsRef<str>>(words: &[S]) -> HashSet<String> {
    words
        .iter()
        .map(|w| normalize(w.as_ref()))
        .filter(|w| !w.is_empty())
        .collect()
}

pub fn annotate<'a>(
    tokens: &[&'a str],
    vocab: &VocabMap<'a>,
    difficult: &HashSet<String>,
) -> Vec<AnnotatedToken<'a>> {
    tokens
        .iter()
        .map(|&token| {
            let key = normalize(token);
            if key.is_empty() {
                return AnnotatedToken {
                    token,
                    vocab: None,
                    is_difficult: false,
                };
            }
            AnnotatedToken {
                token,
                vocab: vocab.get(&key).copied(),
                is_difficult: difficult.contains(&key),
            }
        })
        .collect()
}

pub fn annotate_chapter(chapter: &Chapter) -> Vec<AnnotatedToken<'_>> {
    let tokens = tokenize(&chapter.urdu_text);
    let vocab = build_vocab_map(&chapter.vocab);
    let difficult = build_difficult_set(chapter.difficult_words.as_slice());
    annotate(&tokens, &vocab, &difficult)
}
