//! Raw name -> cleaned candidate.
//!
//! Every step is a hard gate; the first rule a record fails is the reason it
//! carries. On success the candidate is lowercase, uses only
//! `[a-z0-9 '\-&]`, has single spaces between words, and is a fixed point of
//! [`Normalizer::normalize`].

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::domain::{NumeralRule, RejectionReason};
use crate::lexicon::WordList;

/// Single-character words allowed to survive ("a", "&", "n" as in rock 'n
/// roll, "o" as in o'brien).
pub const DEFAULT_ALLOWED_SINGLE_CHARS: [&str; 4] = ["a", "&", "n", "o"];

#[derive(Debug, Clone)]
pub struct NormalizerConfig {
    /// Longest accepted candidate, in characters.
    pub max_length: usize,
    /// Candidates of this many characters or fewer are rejected.
    pub min_length: usize,
    pub max_words: usize,
    pub allowed_single_chars: BTreeSet<String>,
    pub numeral_rule: NumeralRule,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            max_length: 50,
            min_length: 3,
            max_words: 5,
            allowed_single_chars: DEFAULT_ALLOWED_SINGLE_CHARS.iter().map(|s| s.to_string()).collect(),
            numeral_rule: NumeralRule::AnyDigit,
        }
    }
}

pub struct Normalizer {
    config: NormalizerConfig,
    words: Arc<dyn WordList>,
}

impl Normalizer {
    pub fn new(config: NormalizerConfig, words: Arc<dyn WordList>) -> Self {
        Self { config, words }
    }

    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Clean one raw value, or say why it cannot become a candidate.
    pub fn normalize(&self, raw: Option<&str>) -> Result<String, RejectionReason> {
        let Some(raw) = raw.filter(|s| !s.trim().is_empty()) else {
            return Err(RejectionReason::EmptyOrNaN);
        };

        let cleaned = clean_chars(&raw.trim().to_lowercase());
        let words: Vec<&str> = cleaned.split_whitespace().collect();

        if self.has_numeral(&cleaned, &words) {
            return Err(RejectionReason::IncludesNumber);
        }

        let allowed = &self.config.allowed_single_chars;
        if words
            .iter()
            .any(|w| w.chars().count() == 1 && !allowed.contains(*w))
        {
            return Err(RejectionReason::InvalidSingleChar);
        }

        if words.len() > self.config.max_words {
            return Err(RejectionReason::TooManyWords);
        }

        if !words
            .iter()
            .all(|w| allowed.contains(*w) || self.words.is_known_word(w))
        {
            return Err(RejectionReason::NonEnglishWords);
        }

        let name = words.join(" ");
        let len = name.chars().count();

        if len <= self.config.min_length {
            return Err(RejectionReason::TooShort);
        }
        if len > self.config.max_length {
            return Err(RejectionReason::TooLong);
        }

        Ok(name)
    }

    fn has_numeral(&self, cleaned: &str, words: &[&str]) -> bool {
        match self.config.numeral_rule {
            NumeralRule::AnyDigit => cleaned.chars().any(|c| c.is_ascii_digit()),
            NumeralRule::DigitWord => words.iter().any(|w| w.chars().all(|c| c.is_ascii_digit())),
        }
    }
}

/// Replace every character outside `[a-z0-9\s'\-&]` with a space.
fn clean_chars(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' | '\'' | '-' | '&' => c,
            c if c.is_whitespace() => c,
            _ => ' ',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::WordSet;

    fn normalizer_with(config: NormalizerConfig) -> Normalizer {
        let words = WordSet::from_words([
            "chicken", "soup", "apple", "pie", "my", "mom's", "tacos", "rock", "roll", "mac",
            "cheese", "stir-fry", "beef", "layer", "dip", "with", "extra", "garlic", "and",
            "spicy", "sauce", "supercalifragilisticexpialidocious", "tea",
        ]);
        Normalizer::new(config, Arc::new(words))
    }

    fn normalizer() -> Normalizer {
        normalizer_with(NormalizerConfig::default())
    }

    #[test]
    fn cleans_case_punctuation_and_spacing() {
        let n = normalizer();
        assert_eq!(n.normalize(Some("  Chicken   SOUP!! ")), Ok("chicken soup".to_string()));
        assert_eq!(n.normalize(Some("Mac\t&\nCheese")), Ok("mac & cheese".to_string()));
        assert_eq!(n.normalize(Some("Beef Stir-Fry")), Ok("beef stir-fry".to_string()));
        assert_eq!(n.normalize(Some("My Mom's Apple Pie")), Ok("my mom's apple pie".to_string()));
    }

    #[test]
    fn missing_and_blank_values_are_empty() {
        let n = normalizer();
        assert_eq!(n.normalize(None), Err(RejectionReason::EmptyOrNaN));
        assert_eq!(n.normalize(Some("")), Err(RejectionReason::EmptyOrNaN));
        assert_eq!(n.normalize(Some(" \t ")), Err(RejectionReason::EmptyOrNaN));
    }

    #[test]
    fn numeral_rule_variants() {
        let any = normalizer();
        assert_eq!(any.normalize(Some("Tacos123")), Err(RejectionReason::IncludesNumber));
        assert_eq!(any.normalize(Some("7 Layer Dip")), Err(RejectionReason::IncludesNumber));

        let word = normalizer_with(NormalizerConfig {
            numeral_rule: NumeralRule::DigitWord,
            ..NormalizerConfig::default()
        });
        assert_eq!(word.normalize(Some("7 Layer Dip")), Err(RejectionReason::IncludesNumber));
        // Not an all-digit word, so it falls through to the dictionary check.
        assert_eq!(word.normalize(Some("Tacos123")), Err(RejectionReason::NonEnglishWords));
    }

    #[test]
    fn disallowed_single_char_is_fatal() {
        let n = normalizer();
        assert_eq!(n.normalize(Some("chicken x soup")), Err(RejectionReason::InvalidSingleChar));
        assert_eq!(n.normalize(Some("rock n roll")), Ok("rock n roll".to_string()));
        // "i" is only allowed when configured.
        assert_eq!(n.normalize(Some("i tea")), Err(RejectionReason::InvalidSingleChar));

        let mut config = NormalizerConfig::default();
        config.allowed_single_chars.insert("i".to_string());
        assert_eq!(normalizer_with(config).normalize(Some("i tea")), Ok("i tea".to_string()));
    }

    #[test]
    fn punctuation_only_single_chars_count_after_cleaning() {
        // "!" turns into a space, so nothing single-char is left behind.
        assert_eq!(normalizer().normalize(Some("chicken ! soup")), Ok("chicken soup".to_string()));
    }

    #[test]
    fn word_count_limit() {
        let n = normalizer();
        assert_eq!(
            n.normalize(Some("chicken soup with extra garlic and spicy sauce")),
            Err(RejectionReason::TooManyWords)
        );
        assert!(n.normalize(Some("chicken soup with extra garlic")).is_ok());
    }

    #[test]
    fn unknown_words_are_rejected() {
        assert_eq!(
            normalizer().normalize(Some("chicken zoup")),
            Err(RejectionReason::NonEnglishWords)
        );
    }

    #[test]
    fn length_bounds() {
        let n = normalizer();
        assert_eq!(n.normalize(Some("pie")), Err(RejectionReason::TooShort));
        assert_eq!(n.normalize(Some("!!!")), Err(RejectionReason::TooShort));
        assert_eq!(n.normalize(Some("soup")), Ok("soup".to_string()));

        let long = "supercalifragilisticexpialidocious chicken soup";
        assert!(n.normalize(Some(long)).is_ok());
        let strict = normalizer_with(NormalizerConfig {
            max_length: 20,
            ..NormalizerConfig::default()
        });
        assert_eq!(strict.normalize(Some(long)), Err(RejectionReason::TooLong));
    }

    #[test]
    fn rules_apply_in_order() {
        // Both a digit and an unknown word: the number rule comes first.
        assert_eq!(
            normalizer().normalize(Some("zoup 42")),
            Err(RejectionReason::IncludesNumber)
        );
        // Unknown single char and too many words: single char comes first.
        assert_eq!(
            normalizer().normalize(Some("q chicken soup with extra garlic and")),
            Err(RejectionReason::InvalidSingleChar)
        );
    }

    #[test]
    fn output_is_a_fixed_point() {
        let n = normalizer();
        let inputs = [
            "  Chicken   SOUP!! ",
            "Mac & Cheese",
            "My Mom's Apple Pie",
            "BEEF stir-fry",
            "rock ’n’ roll",
        ];
        for input in inputs {
            let first = n.normalize(Some(input));
            if let Ok(candidate) = &first {
                assert_eq!(n.normalize(Some(candidate)), first, "input: {input}");
            }
        }
    }

    #[test]
    fn deterministic_for_repeated_calls() {
        let n = normalizer();
        for input in ["Tacos123", "chicken soup", "", "zzz zzz"] {
            assert_eq!(n.normalize(Some(input)), n.normalize(Some(input)));
        }
    }
}
