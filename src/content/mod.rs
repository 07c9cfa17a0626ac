pub mod filter;
pub mod metrics;
pub mod model;
pub mod repository;

use thiserror::Error;

pub use model::{Chapter, Exercise, GrammarExample, GrammarLesson, Story, VocabEntry};

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("fetch failed: {0}")]
    Fetch(String),
    #[error("malformed content: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid content: {0}")]
    Invalid(String),
    #[error("no bundled copy of {0}")]
    MissingEmbedded(&'static str),
}
