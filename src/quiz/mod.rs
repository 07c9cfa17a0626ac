pub mod generator;
pub mod session;

use thiserror::Error;

pub use generator::{MIN_SAVED_WORDS, Question, generate};
pub use session::{AnswerFeedback, FeedbackTier, QuizPhase, QuizSession};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    #[error("Please save at least {required} words to start the quiz ({saved} saved).")]
    InsufficientData { saved: usize, required: usize },
    #[error("this question has already been answered")]
    AlreadyAnswered,
    #[error("the quiz is finished")]
    Finished,
    #[error("option {0} does not exist")]
    OptionOutOfRange(usize),
}
