//! Heuristic requirement extraction from free-form job descriptions.
//!
//! The scan combines structural cues (bullets, numbered items, section headers),
//! lexical cues (requirement phrases, technology names) and a one-line
//! continuation join, then filters candidates by length and case-insensitive
//! duplicates.

mod extractor;
pub mod lexicon;
mod normalizer;

pub use extractor::{classify_line, extract_requirements, LineKind};
pub use normalizer::MIN_REQUIREMENT_CHARS;
