use thiserror::Error;

use crate::content::model::Exercise;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExerciseError {
    #[error("Please select an answer")]
    NoSelection,
    #[error("answer already submitted")]
    AlreadySubmitted,
    #[error("option {0} does not exist")]
    OptionOutOfRange(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect { correct: usize },
}

impl Verdict {
    pub fn message(self) -> &'static str {
        match self {
            Verdict::Correct => "Great job! Correct answer.",
            Verdict::Incorrect { .. } => "Incorrect. Try again.",
        }
    }
}

/// Progress through a grammar lesson's single multiple-choice exercise.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExerciseState {
    selected: Option<usize>,
    verdict: Option<Verdict>,
}

impl ExerciseState {
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn verdict(&self) -> Option<Verdict> {
        self.verdict
    }

    pub fn is_submitted(&self) -> bool {
        self.verdict.is_some()
    }

    pub fn select(&mut self, exercise: &Exercise, option: usize) -> Result<(), ExerciseError> {
        if self.is_submitted() {
            return Err(ExerciseError::AlreadySubmitted);
        }
        if option >= exercise.options.len() {
            return Err(ExerciseError::OptionOutOfRange(option));
        }
        self.selected = Some(option);
        Ok(())
    }

    pub fn submit(&mut self, exercise: &Exercise) -> Result<Verdict, ExerciseError> {
        if self.is_submitted() {
            return Err(ExerciseError::AlreadySubmitted);
        }
        let selected = self.selected.ok_or(ExerciseError::NoSelection)?;
        let verdict = if selected == exercise.correct_answer {
            Verdict::Correct
        } else {
            Verdict::Incorrect {
                correct: exercise.correct_answer,
            }
        };
        self.verdict = Some(verdict);
        Ok(verdict)
    }
}
