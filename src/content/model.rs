use serde::{Deserialize, Serialize};

use crate::content::ContentError;

/// A word with its romanisation and English gloss.
///
/// Chapters embed these as reference data; saving one copies it into the
/// user's study list, so the saved copy has its own lifetime.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabEntry {
    pub word: String,
    #[serde(default)]
    pub transliteration: String,
    #[serde(default)]
    pub meaning: String,
}

impl VocabEntry {
    pub fn new(word: &str, transliteration: &str, meaning: &str) -> Self {
        Self {
            word: word.to_string(),
            transliteration: transliteration.to_string(),
            meaning: meaning.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    pub urdu_text: String,
    #[serde(default)]
    pub transliteration: String,
    #[serde(default)]
    pub english_meaning: String,
    #[serde(default)]
    pub vocab: Vec<VocabEntry>,
    #[serde(default)]
    pub difficult_words: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub difficulty: u32,
    pub chapters: Vec<Chapter>,
}

impl Story {
    pub fn chapter_count(&self) -> usize {
        self.chapters.len()
    }

    /// Clamp a requested chapter index into the valid range for this story.
    pub fn clamp_chapter(&self, index: usize) -> usize {
        index.min(self.chapters.len().saturating_sub(1))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarExample {
    pub urdu: String,
    #[serde(default)]
    pub transliteration: String,
    #[serde(default)]
    pub meaning: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarLesson {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub examples: Vec<GrammarExample>,
    #[serde(default)]
    pub exercise: Option<Exercise>,
}

/// Shape checks applied after deserialization, before a collection is
/// handed to the rest of the app.
pub trait Validate {
    fn validate(&self) -> Result<(), ContentError>;
}

impl Validate for Story {
    fn validate(&self) -> Result<(), ContentError> {
        if self.chapters.is_empty() {
            return Err(ContentError::Invalid(format!(
                "story {} has no chapters",
                self.id
            )));
        }
        Ok(())
    }
}

impl Validate for GrammarLesson {
    fn validate(&self) -> Result<(), ContentError> {
        if let Some(ref exercise) = self.exercise
            && exercise.correct_answer >= exercise.options.len()
        {
            return Err(ContentError::Invalid(format!(
                "exercise in lesson '{}' points at option {} of {}",
                self.title,
                exercise.correct_answer,
                exercise.options.len()
            )));
        }
        Ok(())
    }
}
