//! Dictionary word list backed by a hash set.

use std::collections::HashSet;
use std::path::Path;

use crate::error::AppError;
use crate::lexicon::{WordList, read_entries};

/// In-memory word list. Lookups are case-sensitive, like the corpus files
/// it is usually loaded from (which list proper nouns capitalised).
#[derive(Debug, Clone, Default)]
pub struct WordSet {
    words: HashSet<String>,
}

impl WordSet {
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Load one word per line.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let entries = read_entries(path, "word list")?;
        if entries.is_empty() {
            return Err(AppError::input(format!("Word list '{}' is empty.", path.display())));
        }
        Ok(Self::from_words(entries))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordList for WordSet {
    fn is_known_word(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn membership_is_case_sensitive() {
        let words = WordSet::from_words(["apple", "Paris"]);
        assert!(words.is_known_word("apple"));
        assert!(!words.is_known_word("Apple"));
        assert!(!words.is_known_word("paris"));
    }

    #[test]
    fn load_reads_one_word_per_line() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "soup\nchicken\n\n# comment\nstew").unwrap();

        let words = WordSet::load(file.path()).unwrap();
        assert_eq!(words.len(), 3);
        assert!(words.is_known_word("stew"));
    }

    #[test]
    fn load_rejects_empty_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let err = WordSet::load(file.path()).unwrap_err();
        assert_eq!(err.exit_code(), crate::error::EXIT_INPUT);
    }
}
