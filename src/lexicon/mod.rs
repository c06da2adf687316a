//! Linguistic capabilities the filters call into.
//!
//! The pipeline never reaches for a corpus directly; it goes through three
//! small traits so tests (and alternative corpora) can swap implementations:
//!
//! - [`WordList`]: dictionary membership
//! - [`Tokenizer`]: text -> word tokens
//! - [`PosTagger`]: tokens -> part-of-speech tags

use std::fs;
use std::path::Path;

use crate::error::AppError;

pub mod tagger;
pub mod tokenizer;
pub mod words;

pub use tagger::{LexiconTagger, PosTag};
pub use tokenizer::TreebankTokenizer;
pub use words::WordSet;

/// Dictionary membership check.
pub trait WordList: Send + Sync {
    fn is_known_word(&self, word: &str) -> bool;
}

/// Break a cleaned name into word tokens.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Assign a part-of-speech tag to each token.
pub trait PosTagger: Send + Sync {
    fn tag(&self, tokens: &[String]) -> Vec<(String, PosTag)>;
}

/// Read a line-oriented corpus file, skipping blank lines and `#` comments.
pub(crate) fn read_entries(path: &Path, what: &str) -> Result<Vec<String>, AppError> {
    let text = fs::read_to_string(path)
        .map_err(|e| AppError::input(format!("Failed to read {what} '{}': {e}", path.display())))?;
    Ok(parse_entries(&text))
}

pub(crate) fn parse_entries(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| line.trim().trim_start_matches('\u{feff}'))
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
