//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and parses CLI arguments
//! - sets up logging
//! - runs the process pipeline or the SQL generator
//! - writes outputs and prints the summary

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::cli::{Command, ProcessArgs, SqlArgs};
use crate::domain::{ProcessConfig, SqlConfig};
use crate::error::AppError;
use crate::io::ingest::InputSource;

pub mod pipeline;

/// Entry point for the `rvocab` binary.
pub fn run() -> Result<(), AppError> {
    // Settings like RECIPE_VOCAB_WORDLIST may live in `.env`; load it before
    // clap reads env fallbacks.
    dotenvy::dotenv().ok();

    let cli = crate::cli::Cli::parse();
    crate::logging::init_logging(&cli.log_level);

    match cli.command {
        Command::Process(args) => handle_process(args),
        Command::Sql(args) => handle_sql(args),
    }
}

fn handle_process(args: ProcessArgs) -> Result<(), AppError> {
    let config = process_config_from_args(&args)?;
    let run = pipeline::run_process(&config)?;

    crate::io::export::write_vocabulary(
        &config.output_path,
        &run.aggregation.vocabulary,
        config.format,
        &config.sql,
    )?;
    if let Some(path) = &config.report_path {
        crate::io::export::write_report_json(path, &run.aggregation)?;
    }

    println!("{}", crate::report::format_summary(&run.aggregation, run.sources));
    println!(
        "Saved {} unique recipe names to {}",
        run.aggregation.kept(),
        config.output_path.display()
    );
    Ok(())
}

fn handle_sql(args: SqlArgs) -> Result<(), AppError> {
    let input = resolve_under(&args.input_dir, &args.input);
    let output = resolve_under(&args.output_dir, &args.output);
    let config = SqlConfig {
        table: args.table,
        column: args.column,
        batch: args.batch,
    };

    let names = crate::io::ingest::read_vocabulary(&input)?;
    crate::io::sql::write_seed_sql_file(&output, &names, &config)?;

    println!("Generated SQL file: {}", output.display());
    println!(
        "Successfully generated SQL file containing {} VALUES for table '{}'.",
        names.len(),
        config.table
    );
    Ok(())
}

/// Resolve CLI arguments into a `ProcessConfig`. Input specs (and their
/// extensions) are validated here, before anything is read.
pub fn process_config_from_args(args: &ProcessArgs) -> Result<ProcessConfig, AppError> {
    let inputs = InputSource::parse_list(&args.input, &args.default_column, &args.input_dir)?;

    if args.max_words == 0 {
        return Err(AppError::config("--max-words must be at least 1."));
    }

    let allowed_single_chars = args
        .allow_single_char
        .iter()
        .map(|c| c.trim().to_lowercase())
        .collect::<std::collections::BTreeSet<_>>();
    if let Some(bad) = allowed_single_chars.iter().find(|c| c.chars().count() != 1) {
        return Err(AppError::config(format!(
            "--allow-single-char expects one character, got '{bad}'."
        )));
    }

    Ok(ProcessConfig {
        inputs,
        output_path: crate::io::export::output_path(&args.output_dir, args.output.as_deref(), args.format),
        format: args.format,
        sql: SqlConfig {
            table: args.table.clone(),
            column: args.column.clone(),
            batch: args.batch,
        },
        report_path: args.report.clone(),
        sort: args.sort,
        wordlist_path: args.wordlist.clone(),
        tags_path: args.tags.clone(),
        culinary_terms_path: args.culinary_terms.clone(),
        filler_words_path: args.filler_words.clone(),
        max_length: args.max_length,
        max_words: args.max_words,
        allowed_single_chars,
        numeral_rule: args.numeral_rule,
        reject_numbering: args.reject_numbering,
        chunking: args.chunking,
        chunk_size: args.chunk_size,
        workers: args.workers,
    })
}

fn resolve_under(dir: &Path, path: &Path) -> PathBuf {
    if path.is_relative() {
        dir.join(path)
    } else {
        path.to_path_buf()
    }
}
