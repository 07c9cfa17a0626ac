use rand::Rng;
use rand::seq::SliceRandom;

use crate::content::model::VocabEntry;
use crate::quiz::QuizError;

pub const MIN_SAVED_WORDS: usize = 3;
pub const MAX_DISTRACTORS: usize = 3;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Question {
    pub word: String,
    pub transliteration: String,
    pub options: Vec<String>,
    /// Index into `options` of the subject's meaning.
    pub answer: usize,
}

impl Question {
    pub fn correct_meaning(&self) -> &str {
        &self.options[self.answer]
    }
}

/// Draw up to `max_questions` multiple-choice questions from the saved words.
///
/// Each question asks for the meaning of one saved word; wrong options are
/// meanings of other saved words. Fewer than three distractors are used
/// when there are not enough distinct meanings to go around.
pub fn generate<R: Rng + ?Sized>(
    saved: &[VocabEntry],
    max_questions: usize,
    rng: &mut R,
) -> Result<Vec<Question>, QuizError> {
    if saved.len() < MIN_SAVED_WORDS {
        return Err(QuizError::InsufficientData {
            saved: saved.len(),
            required: MIN_SAVED_WORDS,
        });
    }

    let mut subjects: Vec<&VocabEntry> = saved.iter().collect();
    subjects.shuffle(rng);
    subjects.truncate(max_questions.min(saved.len()));

    Ok(subjects
        .into_iter()
        .map(|subject| question_for(subject, saved, rng))
        .collect())
}

fn question_for<R: Rng + ?Sized>(subject: &VocabEntry, saved: &[VocabEntry], rng: &mut R) -> Question {
    let mut pool: Vec<&str> = Vec::new();
    for other in saved {
        if other.word == subject.word
            || other.meaning == subject.meaning
            || pool.contains(&other.meaning.as_str())
        {
            continue;
        }
        pool.push(&other.meaning);
    }

    let mut options: Vec<String> = pool
        .choose_multiple(rng, MAX_DISTRACTORS)
        .map(|m| m.to_string())
        .collect();
    options.push(subject.meaning.clone());
    options.shuffle(rng);

    let answer = options
        .iter()
        .position(|o| *o == subject.meaning)
        .unwrap_or_default();

    Question {
        word: subject.word.clone(),
        transliteration: subject.transliteration.clone(),
        options,
        answer,
    }
}
