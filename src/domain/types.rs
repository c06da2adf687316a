//! Shared domain types.
//!
//! These types are intentionally kept lightweight so they can be:
//!
//! - passed across the worker boundary during aggregation
//! - exported in the JSON run report
//!
//! The option enums double as clap `ValueEnum`s, and `ProcessConfig` carries
//! resolved [`InputSource`]s, so this module sits above `io` and next to the
//! CLI rather than below them.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::io::ingest::InputSource;

/// One raw input value. `None` is a missing cell (or a JSON `null`).
pub type RawRecord = Option<String>;

/// Why a record did not make it into the vocabulary.
///
/// Variants are declared in evaluation order; a rejected record carries the
/// first rule it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    EmptyOrNaN,
    IncludesNumber,
    InvalidSingleChar,
    TooManyWords,
    NonEnglishWords,
    TooShort,
    TooLong,
    InvalidRecipeName,
    Duplicate,
}

impl RejectionReason {
    pub fn label(self) -> &'static str {
        match self {
            RejectionReason::EmptyOrNaN => "Empty or NaN",
            RejectionReason::IncludesNumber => "Includes number",
            RejectionReason::InvalidSingleChar => "Invalid single char",
            RejectionReason::TooManyWords => "Too many words",
            RejectionReason::NonEnglishWords => "Non-English words",
            RejectionReason::TooShort => "Too short",
            RejectionReason::TooLong => "Too long",
            RejectionReason::InvalidRecipeName => "Invalid recipe name",
            RejectionReason::Duplicate => "Duplicates",
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Count of rejected records per reason.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReasonTally {
    counts: BTreeMap<RejectionReason, usize>,
}

impl ReasonTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, reason: RejectionReason) {
        *self.counts.entry(reason).or_insert(0) += 1;
    }

    /// Make sure `reason` shows up in the tally even with a zero count.
    pub fn touch(&mut self, reason: RejectionReason) {
        self.counts.entry(reason).or_insert(0);
    }

    pub fn merge(&mut self, other: &ReasonTally) {
        for (reason, count) in &other.counts {
            *self.counts.entry(*reason).or_insert(0) += count;
        }
    }

    pub fn get(&self, reason: RejectionReason) -> usize {
        self.counts.get(&reason).copied().unwrap_or(0)
    }

    /// Total number of rejected records.
    pub fn removed(&self) -> usize {
        self.counts.values().sum()
    }

    /// Reasons by descending count; ties keep evaluation order.
    pub fn most_common(&self) -> Vec<(RejectionReason, usize)> {
        let mut out: Vec<_> = self.counts.iter().map(|(r, c)| (*r, *c)).collect();
        out.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        out
    }

    pub fn iter(&self) -> impl Iterator<Item = (RejectionReason, usize)> + '_ {
        self.counts.iter().map(|(r, c)| (*r, *c))
    }
}

/// How digits in a name are treated.
///
/// Two rule variants exist in the wild, so this stays a knob.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum NumeralRule {
    /// Reject when any character is a digit (`"tacos123"` is rejected).
    AnyDigit,
    /// Reject only when a whole word is digits (`"7 layer dip"` is rejected,
    /// `"tacos123"` is not).
    DigitWord,
}

/// How the input is partitioned for the worker pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ChunkingMode {
    /// Contiguous chunks of `--chunk-size` records.
    Fixed,
    /// One chunk per worker (`ceil(total / workers)` records each).
    PerWorker,
}

/// Vocabulary output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Csv,
    Json,
    Sql,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Sql => "sql",
        }
    }
}

/// Where SQL seed statements go and what they target.
#[derive(Debug, Clone)]
pub struct SqlConfig {
    pub table: String,
    pub column: String,
    /// Emit one multi-row `INSERT` instead of one statement per name.
    pub batch: bool,
}

impl Default for SqlConfig {
    fn default() -> Self {
        Self {
            table: "recipes".to_string(),
            column: "name".to_string(),
            batch: false,
        }
    }
}

/// Fully resolved settings for a `process` run.
#[derive(Debug, Clone)]
pub struct ProcessConfig {
    pub inputs: Vec<InputSource>,
    pub output_path: PathBuf,
    pub format: OutputFormat,
    pub sql: SqlConfig,
    pub report_path: Option<PathBuf>,
    pub sort: bool,

    pub wordlist_path: PathBuf,
    pub tags_path: Option<PathBuf>,
    pub culinary_terms_path: Option<PathBuf>,
    pub filler_words_path: Option<PathBuf>,

    pub max_length: usize,
    pub max_words: usize,
    pub allowed_single_chars: BTreeSet<String>,
    pub numeral_rule: NumeralRule,
    pub reject_numbering: bool,

    pub chunking: ChunkingMode,
    pub chunk_size: usize,
    pub workers: Option<usize>,
}
