//! Lexicon-driven part-of-speech tagger.
//!
//! Names reaching the validator are short, lowercase and already filtered
//! against a dictionary, so a lookup table covers what the validator asks
//! about: possessive pronouns and proper nouns. Extra `word<TAB>TAG` entries
//! (Penn Treebank tags) can be loaded from a file; anything not in the table
//! is tagged as a common noun.

use std::collections::HashMap;
use std::path::Path;

use crate::error::AppError;
use crate::lexicon::{PosTagger, read_entries};

/// Penn Treebank tags the pipeline distinguishes. Everything else is kept
/// verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PosTag {
    /// `PRP$` (my, your, ...)
    PossessivePronoun,
    /// `PRP`
    PersonalPronoun,
    /// `NNP`
    ProperNoun,
    /// `NNPS`
    ProperNounPlural,
    /// `NN`
    Noun,
    /// `NNS`
    NounPlural,
    /// `JJ`
    Adjective,
    /// `POS` (the `'s` clitic)
    PossessiveEnding,
    Other(String),
}

impl PosTag {
    pub fn from_penn(tag: &str) -> Self {
        match tag.trim() {
            "PRP$" => PosTag::PossessivePronoun,
            "PRP" => PosTag::PersonalPronoun,
            "NNP" => PosTag::ProperNoun,
            "NNPS" => PosTag::ProperNounPlural,
            "NN" => PosTag::Noun,
            "NNS" => PosTag::NounPlural,
            "JJ" => PosTag::Adjective,
            "POS" => PosTag::PossessiveEnding,
            other => PosTag::Other(other.to_string()),
        }
    }

    pub fn as_penn(&self) -> &str {
        match self {
            PosTag::PossessivePronoun => "PRP$",
            PosTag::PersonalPronoun => "PRP",
            PosTag::ProperNoun => "NNP",
            PosTag::ProperNounPlural => "NNPS",
            PosTag::Noun => "NN",
            PosTag::NounPlural => "NNS",
            PosTag::Adjective => "JJ",
            PosTag::PossessiveEnding => "POS",
            PosTag::Other(tag) => tag,
        }
    }

    /// Tags that mark personal names, places, or "my"/"our" style branding.
    pub fn is_rejected_for_names(&self) -> bool {
        matches!(
            self,
            PosTag::PossessivePronoun | PosTag::ProperNoun | PosTag::ProperNounPlural
        )
    }
}

const POSSESSIVE_PRONOUNS: [&str; 9] = ["my", "your", "his", "her", "its", "our", "their", "whose", "thy"];

/// Dictionary-lookup tagger. Unknown tokens are tagged `NN`.
///
/// The default table only knows possessive pronouns and `'s`; proper nouns
/// have to come from a lexicon file (see [`LexiconTagger::load`]).
#[derive(Debug, Clone)]
pub struct LexiconTagger {
    entries: HashMap<String, PosTag>,
}

impl Default for LexiconTagger {
    fn default() -> Self {
        let mut entries: HashMap<String, PosTag> = POSSESSIVE_PRONOUNS
            .iter()
            .map(|w| (w.to_string(), PosTag::PossessivePronoun))
            .collect();
        entries.insert("'s".to_string(), PosTag::PossessiveEnding);
        Self { entries }
    }
}

impl LexiconTagger {
    /// Built-in entries plus `word<TAB>TAG` lines from `path`.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let mut tagger = Self::default();
        for (idx, line) in read_entries(path, "tag lexicon")?.iter().enumerate() {
            let (word, tag) = line
                .split_once('\t')
                .or_else(|| line.split_once(' '))
                .ok_or_else(|| {
                    AppError::config(format!(
                        "Invalid tag lexicon entry {} in '{}': expected `word<TAB>TAG`.",
                        idx + 1,
                        path.display()
                    ))
                })?;
            tagger.insert(word.trim(), PosTag::from_penn(tag));
        }
        Ok(tagger)
    }

    pub fn insert(&mut self, word: &str, tag: PosTag) {
        self.entries.insert(word.to_lowercase(), tag);
    }

    pub fn with_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, PosTag)>,
    {
        let mut tagger = Self::default();
        for (word, tag) in entries {
            tagger.insert(word, tag);
        }
        tagger
    }

    fn lookup(&self, token: &str) -> PosTag {
        self.entries
            .get(&token.to_lowercase())
            .cloned()
            .unwrap_or(PosTag::Noun)
    }
}

impl PosTagger for LexiconTagger {
    fn tag(&self, tokens: &[String]) -> Vec<(String, PosTag)> {
        tokens
            .iter()
            .map(|t| (t.clone(), self.lookup(t)))
            .collect()
    }
}
