//! Treebank-style word tokenizer.
//!
//! Input is an already-normalized name (lowercase ASCII letters, digits,
//! `'`, `-`, `&`, single spaces), so only the contraction rules of the Penn
//! Treebank convention matter here: clitics become their own tokens,
//! hyphenated words stay whole.

use crate::lexicon::Tokenizer;

/// Clitic suffixes split off as separate tokens. `n't` is handled first so
/// `"don't"` becomes `["do", "n't"]` rather than `["don", "'t"]`.
const CLITICS: [&str; 7] = ["n't", "'s", "'re", "'ve", "'ll", "'d", "'m"];

#[derive(Debug, Clone, Copy, Default)]
pub struct TreebankTokenizer;

impl Tokenizer for TreebankTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        for word in text.split_whitespace() {
            split_word(word, &mut tokens);
        }
        tokens
    }
}

fn split_word(word: &str, out: &mut Vec<String>) {
    if CLITICS.contains(&word.to_ascii_lowercase().as_str()) {
        out.push(word.to_string());
        return;
    }

    let mut rest = word;

    let mut leading = 0;
    while let Some(stripped) = rest.strip_prefix('\'') {
        leading += 1;
        rest = stripped;
    }
    for _ in 0..leading {
        out.push("'".to_string());
    }

    let mut trailing = 0;
    while rest.len() > 1 {
        match rest.strip_suffix('\'') {
            Some(stripped) => {
                trailing += 1;
                rest = stripped;
            }
            None => break,
        }
    }

    let lower = rest.to_ascii_lowercase();
    let clitic = CLITICS
        .iter()
        .find(|c| lower.len() > c.len() && lower.ends_with(*c));

    match clitic {
        Some(c) => {
            let split = rest.len() - c.len();
            out.push(rest[..split].to_string());
            out.push(rest[split..].to_string());
        }
        None if !rest.is_empty() => out.push(rest.to_string()),
        None => {}
    }

    for _ in 0..trailing {
        out.push("'".to_string());
    }
}
