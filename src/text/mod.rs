pub mod annotate;
pub mod normalize;

pub use annotate::{AnnotatedToken, VocabMap, annotate, annotate_chapter, build_difficult_set, build_vocab_map};
pub use normalize::{normalize, tokenize};
