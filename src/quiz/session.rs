use rand::Rng;

use crate::content::model::VocabEntry;
use crate::quiz::QuizError;
use crate::quiz::generator::{Question, generate};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizPhase {
    InProgress,
    Finished,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackTier {
    Perfect,
    High,
    Mid,
    Encouragement,
}

impl FeedbackTier {
    pub fn from_score(score: usize, total: usize) -> Self {
        let percentage = if total == 0 {
            0.0
        } else {
            score as f64 / total as f64 * 100.0
        };
        if percentage >= 100.0 {
            FeedbackTier::Perfect
        } else if percentage >= 80.0 {
            FeedbackTier::High
        } else if percentage >= 60.0 {
            FeedbackTier::Mid
        } else {
            FeedbackTier::Encouragement
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            FeedbackTier::Perfect => "Excellent! You answered everything correctly.",
            FeedbackTier::High => "Great work! Keep it up.",
            FeedbackTier::Mid => "Good effort. A little more practice will help.",
            FeedbackTier::Encouragement => "Keep practicing and try again.",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub chosen: usize,
    pub correct: usize,
}

impl AnswerFeedback {
    pub fn is_correct(&self) -> bool {
        self.chosen == self.correct
    }
}

/// One run through a generated question set.
///
/// Answering a question locks it until [`QuizSession::advance`] moves on,
/// so a second answer cannot score twice. Not having a session at all is
/// the not-started state.
#[derive(Clone, Debug)]
pub struct QuizSession {
    questions: Vec<Question>,
    current: usize,
    score: usize,
    pending: Option<AnswerFeedback>,
    max_questions: usize,
}

impl QuizSession {
    pub fn start<R: Rng + ?Sized>(
        saved: &[VocabEntry],
        max_questions: usize,
        rng: &mut R,
    ) -> Result<Self, QuizError> {
        let questions = generate(saved, max_questions, rng)?;
        log::debug!("quiz started with {} questions", questions.len());
        Ok(Self {
            questions,
            current: 0,
            score: 0,
            pending: None,
            max_questions,
        })
    }

    /// Regenerate questions from the current saved words.
    pub fn restart<R: Rng + ?Sized>(
        &mut self,
        saved: &[VocabEntry],
        rng: &mut R,
    ) -> Result<(), QuizError> {
        *self = Self::start(saved, self.max_questions, rng)?;
        Ok(())
    }

    pub fn phase(&self) -> QuizPhase {
        if self.current >= self.questions.len() {
            QuizPhase::Finished
        } else {
            QuizPhase::InProgress
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    /// Zero-based index of the question on screen.
    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    /// Feedback for the answered question awaiting [`QuizSession::advance`].
    pub fn pending(&self) -> Option<AnswerFeedback> {
        self.pending
    }

    pub fn answer(&mut self, option: usize) -> Result<AnswerFeedback, QuizError> {
        let question = self.current_question().ok_or(QuizError::Finished)?;
        if self.pending.is_some() {
            return Err(QuizError::AlreadyAnswered);
        }
        if option >= question.options.len() {
            return Err(QuizError::OptionOutOfRange(option));
        }
        let feedback = AnswerFeedback {
            chosen: option,
            correct: question.answer,
        };
        if feedback.is_correct() {
            self.score += 1;
        }
        self.pending = Some(feedback);
        Ok(feedback)
    }

    /// Move past an answered question. Returns false if nothing was pending.
    pub fn advance(&mut self) -> bool {
        if self.pending.take().is_none() {
            return false;
        }
        self.current += 1;
        if self.phase() == QuizPhase::Finished {
            log::debug!("quiz finished: {}/{}", self.score, self.total());
        }
        true
    }

    pub fn feedback_tier(&self) -> Option<FeedbackTier> {
        match self.phase() {
            QuizPhase::Finished => Some(FeedbackTier::from_score(self.score, self.total())),
            QuizPhase::InProgress => None,
        }
    }
}
