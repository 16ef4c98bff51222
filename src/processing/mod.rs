//! Text analysis pipeline

pub mod engine;
pub mod extractor;
pub mod gaps;
pub mod matcher;
pub mod normalizer;
pub mod requirements;
pub mod scorer;
pub mod suggestions;
pub mod synonyms;
