//! Assignment validity judgment: decides whether an OCR'd homework scan
//! documents a real, registered course assignment, with an explainable
//! confidence score.

pub mod engine;
pub mod lexicon;

pub use engine::{JudgmentEngine, ScoreWeights};
pub use lexicon::DEFAULT_KEYWORDS;
