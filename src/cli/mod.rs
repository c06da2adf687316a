//! Command-line parsing for the recipe vocabulary builder.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the normalization/validation code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::aggregate::DEFAULT_CHUNK_SIZE;
use crate::domain::{ChunkingMode, NumeralRule, OutputFormat};
use crate::io::DEFAULT_COLUMN;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "rvocab", version, about = "Recipe name vocabulary builder")]
pub struct Cli {
    /// Log level when `RUST_LOG` is not set (error, warn, info, debug, trace).
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Clean, filter, and deduplicate recipe names from CSV/TXT/JSON sources.
    Process(ProcessArgs),
    /// Turn a processed vocabulary file (JSON or CSV) into seed INSERT statements.
    Sql(SqlArgs),
}

#[derive(Debug, Parser, Clone)]
pub struct ProcessArgs {
    /// Comma-separated input files with optional column names
    /// (`filename:column_name` or just `filename`).
    pub input: String,

    /// Output file name without extension (saved in the output directory).
    #[arg(short, long)]
    pub output: Option<String>,

    /// Output file format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Csv)]
    pub format: OutputFormat,

    /// Column to read when a file does not name one.
    #[arg(short = 'd', long, default_value = DEFAULT_COLUMN)]
    pub default_column: String,

    /// Directory relative input paths resolve against.
    #[arg(long, env = "RECIPE_VOCAB_INPUT_DIR", default_value = "data/raw")]
    pub input_dir: PathBuf,

    /// Directory the vocabulary is written to.
    #[arg(long, env = "RECIPE_VOCAB_OUTPUT_DIR", default_value = "data/sanitized")]
    pub output_dir: PathBuf,

    /// Also write a JSON run report (totals + removal reasons).
    #[arg(long, value_name = "JSON")]
    pub report: Option<PathBuf>,

    /// Sort the vocabulary alphabetically instead of first-seen order.
    #[arg(long)]
    pub sort: bool,

    /// Dictionary word list, one word per line.
    #[arg(long, env = "RECIPE_VOCAB_WORDLIST", default_value = "/usr/share/dict/words")]
    pub wordlist: PathBuf,

    /// Extra part-of-speech entries (`word<TAB>PennTag` per line).
    ///
    /// Without this file only possessive pronouns are tagged; proper nouns
    /// (NNP/NNPS) are rejected only for words listed here.
    #[arg(long, env = "RECIPE_VOCAB_TAGS")]
    pub tags: Option<PathBuf>,

    /// Replace the built-in culinary term list.
    #[arg(long)]
    pub culinary_terms: Option<PathBuf>,

    /// Replace the built-in filler word list.
    #[arg(long)]
    pub filler_words: Option<PathBuf>,

    /// Longest accepted name, in characters.
    #[arg(long, default_value_t = 50)]
    pub max_length: usize,

    /// Most words a name may have.
    #[arg(long, default_value_t = 5)]
    pub max_words: usize,

    /// Single-character words that may appear in a name. Repeatable; giving
    /// any replaces the default set.
    #[arg(long = "allow-single-char", value_name = "CHAR", default_values = ["a", "&", "n", "o"])]
    pub allow_single_char: Vec<String>,

    /// How digits are rejected.
    #[arg(long, value_enum, default_value_t = NumeralRule::AnyDigit)]
    pub numeral_rule: NumeralRule,

    /// Reject "no 2" / "#3" style numbering.
    #[arg(long)]
    pub reject_numbering: bool,

    /// How the input is split across workers.
    #[arg(long, value_enum, default_value_t = ChunkingMode::Fixed)]
    pub chunking: ChunkingMode,

    /// Records per chunk with `--chunking fixed`.
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    pub chunk_size: usize,

    /// Worker threads (default: available parallelism).
    #[arg(long)]
    pub workers: Option<usize>,

    /// Table name for `--format sql`.
    #[arg(short, long, default_value = "recipes")]
    pub table: String,

    /// Column name for `--format sql`.
    #[arg(long, default_value = DEFAULT_COLUMN)]
    pub column: String,

    /// With `--format sql`, emit one multi-row INSERT.
    #[arg(long)]
    pub batch: bool,
}

#[derive(Debug, Parser, Clone)]
pub struct SqlArgs {
    /// Vocabulary file (JSON or CSV) in the sanitized directory.
    pub input: PathBuf,

    /// Output SQL file name.
    #[arg(short, long, default_value = "seed.sql")]
    pub output: PathBuf,

    /// Table to insert into.
    #[arg(short, long, default_value = "recipes")]
    pub table: String,

    /// Column to insert into.
    #[arg(short, long, default_value = DEFAULT_COLUMN)]
    pub column: String,

    /// Emit one multi-row INSERT instead of one per name.
    #[arg(long)]
    pub batch: bool,

    /// Directory a relative `input` resolves against.
    #[arg(long, env = "RECIPE_VOCAB_OUTPUT_DIR", default_value = "data/sanitized")]
    pub input_dir: PathBuf,

    /// Directory a relative `--output` resolves against.
    #[arg(long, default_value = "data")]
    pub output_dir: PathBuf,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn tags_help_says_proper_nouns_need_a_lexicon() {
        let cmd = Cli::command();
        let process = cmd.find_subcommand("process").unwrap();
        let tags = process.get_arguments().find(|a| a.get_id() == "tags").unwrap();
        let help = tags.get_long_help().unwrap().to_string();
        assert!(help.contains("proper nouns"), "{help}");
    }
}
