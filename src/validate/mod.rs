//! Candidate -> accepted recipe name.
//!
//! [`Validator::check`] runs only on normalizer output. A candidate is
//! accepted when:
//!
//! - no token is tagged as a possessive pronoun or proper noun
//! - no token is a filler word
//! - it has at least `min_tokens` tokens
//! - some contiguous token run is a culinary term
//!
//! The optional numbering rule is separate: [`Validator::check_numbering`]
//! looks at the raw record, since normalization strips the `#`/`.` it keys on
//! and the numeral rule would reject the digits first.
//!
//! Failures all count as `InvalidRecipeName`; the finer-grained
//! [`ValidationFailure`] is only used for tracing.

use std::fmt;
use std::sync::Arc;

use regex::Regex;

use crate::error::AppError;
use crate::lexicon::{PosTagger, Tokenizer};

pub mod terms;

pub use terms::TermSet;

/// Matches "no 2", "no. 3", "#4" style numbering.
pub const DEFAULT_NUMBERING_PATTERN: &str = r"(?:^|\s)(?:no\.?|#)\s*\d+";

#[derive(Debug, Clone)]
pub struct ValidatorConfig {
    pub min_tokens: usize,
    pub numbering_pattern: Option<Regex>,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            min_tokens: 2,
            numbering_pattern: None,
        }
    }
}

impl ValidatorConfig {
    /// Enable the numbering rule with the default pattern.
    pub fn with_numbering_rule(mut self) -> Result<Self, AppError> {
        self.numbering_pattern = Some(compile_numbering_pattern(DEFAULT_NUMBERING_PATTERN)?);
        Ok(self)
    }
}

pub fn compile_numbering_pattern(pattern: &str) -> Result<Regex, AppError> {
    Regex::new(pattern).map_err(|e| AppError::config(format!("Invalid numbering pattern '{pattern}': {e}")))
}

/// Which validator rule a candidate failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationFailure {
    NumberingPattern,
    ProperNounOrPossessive { token: String },
    FillerWord { token: String },
    TooFewTokens { count: usize },
    NoCulinaryTerm,
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationFailure::NumberingPattern => write!(f, "matches numbering pattern"),
            ValidationFailure::ProperNounOrPossessive { token } => {
                write!(f, "proper noun or possessive `{token}`")
            }
            ValidationFailure::FillerWord { token } => write!(f, "filler word `{token}`"),
            ValidationFailure::TooFewTokens { count } => write!(f, "only {count} token(s)"),
            ValidationFailure::NoCulinaryTerm => write!(f, "no culinary term"),
        }
    }
}

pub struct Validator {
    config: ValidatorConfig,
    tokenizer: Arc<dyn Tokenizer>,
    tagger: Arc<dyn PosTagger>,
    filler_words: Arc<TermSet>,
    culinary_terms: Arc<TermSet>,
}

impl Validator {
    pub fn new(
        config: ValidatorConfig,
        tokenizer: Arc<dyn Tokenizer>,
        tagger: Arc<dyn PosTagger>,
        filler_words: Arc<TermSet>,
        culinary_terms: Arc<TermSet>,
    ) -> Self {
        Self {
            config,
            tokenizer,
            tagger,
            filler_words,
            culinary_terms,
        }
    }

    pub fn is_valid(&self, name: &str) -> bool {
        self.check(name).is_ok()
    }

    /// Numbering rule against a raw (pre-normalization) record. Always passes
    /// when the rule is disabled.
    pub fn check_numbering(&self, raw: &str) -> Result<(), ValidationFailure> {
        match &self.config.numbering_pattern {
            Some(pattern) if pattern.is_match(&raw.trim().to_lowercase()) => {
                Err(ValidationFailure::NumberingPattern)
            }
            _ => Ok(()),
        }
    }

    pub fn check(&self, name: &str) -> Result<(), ValidationFailure> {
        let tokens = self.tokenizer.tokenize(name);

        if let Some((token, _)) = self
            .tagger
            .tag(&tokens)
            .into_iter()
            .find(|(_, tag)| tag.is_rejected_for_names())
        {
            return Err(ValidationFailure::ProperNounOrPossessive { token });
        }

        if let Some(token) = tokens
            .iter()
            .find(|t| self.filler_words.contains(&t.to_lowercase()))
        {
            return Err(ValidationFailure::FillerWord { token: token.clone() });
        }

        if tokens.len() < self.config.min_tokens {
            return Err(ValidationFailure::TooFewTokens { count: tokens.len() });
        }

        if !self.has_culinary_term(&tokens) {
            return Err(ValidationFailure::NoCulinaryTerm);
        }

        Ok(())
    }

    /// Check every contiguous token run `tokens[i..j]` against the term set.
    fn has_culinary_term(&self, tokens: &[String]) -> bool {
        (0..tokens.len()).any(|i| {
            (i + 1..=tokens.len()).any(|j| {
                let phrase = tokens[i..j].join(" ").to_lowercase();
                self.culinary_terms.contains(&phrase)
            })
        })
    }
}
