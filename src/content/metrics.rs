use std::collections::HashSet;

use crate::content::model::Story;

pub const WORDS_PER_MINUTE: usize = 80;

pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Estimated minutes to read every chapter, never less than one.
pub fn reading_time(story: &Story) -> usize {
    let total: usize = story
        .chapters
        .iter()
        .map(|ch| count_words(&ch.urdu_text))
        .sum();
    total.div_ceil(WORDS_PER_MINUTE).max(1)
}

/// Distinct vocabulary words across all chapters, compared by raw text.
pub fn vocab_count(story: &Story) -> usize {
    story
        .chapters
        .iter()
        .flat_map(|ch| ch.vocab.iter().map(|v| v.word.as_str()))
        .collect::<HashSet<_>>()
        .len()
}
