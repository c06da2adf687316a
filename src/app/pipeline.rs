//! Shared "process" workflow, kept apart from argument handling and printing.
//!
//! Workflow:
//! load sources -> build filters -> classify in parallel -> dedupe -> (sort)

use std::sync::Arc;

use crate::aggregate::{Aggregation, ChunkStrategy, RecordPipeline, aggregate};
use crate::domain::{ProcessConfig, RawRecord};
use crate::error::AppError;
use crate::io::ingest::load_sources;
use crate::lexicon::{LexiconTagger, PosTagger, TreebankTokenizer, WordList, WordSet};
use crate::normalize::{Normalizer, NormalizerConfig};
use crate::validate::{TermSet, Validator, ValidatorConfig};

/// All computed outputs of a single `rvocab process` run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub aggregation: Aggregation,
    pub sources: usize,
}

/// Load the corpora and term sets named in `config` and wire up the
/// per-record pipeline.
pub fn build_record_pipeline(config: &ProcessConfig) -> Result<RecordPipeline, AppError> {
    let word_set = WordSet::load(&config.wordlist_path).map_err(|e| {
        AppError::new(
            e.exit_code(),
            format!("{} (set --wordlist or RECIPE_VOCAB_WORDLIST)", e.message()),
        )
    })?;
    tracing::info!(path = %config.wordlist_path.display(), words = word_set.len(), "loaded word list");
    let words: Arc<dyn WordList> = Arc::new(word_set);

    let tagger: Arc<dyn PosTagger> = match &config.tags_path {
        Some(path) => Arc::new(LexiconTagger::load(path)?),
        None => Arc::new(LexiconTagger::default()),
    };
    let culinary = match &config.culinary_terms_path {
        Some(path) => TermSet::load(path)?,
        None => TermSet::culinary_terms(),
    };
    let filler = match &config.filler_words_path {
        Some(path) => TermSet::load(path)?,
        None => TermSet::filler_words(),
    };

    let normalizer = Normalizer::new(
        NormalizerConfig {
            max_length: config.max_length,
            max_words: config.max_words,
            allowed_single_chars: config.allowed_single_chars.clone(),
            numeral_rule: config.numeral_rule,
            ..NormalizerConfig::default()
        },
        words,
    );

    let mut validator_config = ValidatorConfig::default();
    if config.reject_numbering {
        validator_config = validator_config.with_numbering_rule()?;
    }
    let validator = Validator::new(
        validator_config,
        Arc::new(TreebankTokenizer),
        tagger,
        Arc::new(filler),
        Arc::new(culinary),
    );

    Ok(RecordPipeline::new(normalizer, validator))
}

/// Execute the full process pipeline and return the computed outputs.
pub fn run_process(config: &ProcessConfig) -> Result<RunOutput, AppError> {
    // 1) Read every source up front; any bad file aborts before processing.
    let loaded = load_sources(&config.inputs)?;

    // 2) Corpora + term sets.
    let pipeline = build_record_pipeline(config)?;

    // 3) Classify and dedupe.
    let records: Vec<RawRecord> = loaded.into_iter().flat_map(|l| l.records).collect();
    let strategy = ChunkStrategy::from_mode(config.chunking, config.chunk_size);
    let mut aggregation = aggregate(&records, &pipeline, strategy, config.workers)?;

    if config.sort {
        aggregation.vocabulary.sort();
    }

    Ok(RunOutput {
        aggregation,
        sources: config.inputs.len(),
    })
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::path::Path;

    use super::*;
    use crate::domain::{ChunkingMode, NumeralRule, OutputFormat, RejectionReason, SqlConfig};
    use crate::io::ingest::InputSource;

    fn config_for(dir: &Path, inputs: &str) -> ProcessConfig {
        ProcessConfig {
            inputs: InputSource::parse_list(inputs, "name", dir).unwrap(),
            output_path: dir.join("out.json"),
            format: OutputFormat::Json,
            sql: SqlConfig::default(),
            report_path: None,
            sort: false,
            wordlist_path: dir.join("words.txt"),
            tags_path: None,
            culinary_terms_path: None,
            filler_words_path: None,
            max_length: 50,
            max_words: 5,
            allowed_single_chars: ["a", "&", "n", "o"].iter().map(|s| s.to_string()).collect::<BTreeSet<_>>(),
            numeral_rule: NumeralRule::AnyDigit,
            reject_numbering: false,
            chunking: ChunkingMode::Fixed,
            chunk_size: 2,
            workers: Some(2),
        }
    }

    #[test]
    fn run_process_across_two_sources() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("words.txt"), "beef\nstew\nchicken\nsoup\ntaco\nsalad\nbest\n").unwrap();
        fs::write(dir.path().join("a.csv"), "name\nBeef Stew\nBest Beef Stew\nsoup\n").unwrap();
        fs::write(dir.path().join("b.csv"), "title\nTaco Salad\nbeef stew\n\"Chicken Soup, 2\"\n").unwrap();

        let mut config = config_for(dir.path(), "a,b:title");
        config.sort = true;
        let run = run_process(&config).unwrap();

        let agg = &run.aggregation;
        assert_eq!(run.sources, 2);
        assert_eq!(agg.total, 6);
        assert_eq!(agg.vocabulary, vec!["beef stew", "taco salad"]);
        assert_eq!(agg.tally.get(RejectionReason::Duplicate), 1);
        assert_eq!(agg.tally.get(RejectionReason::InvalidRecipeName), 2);
        assert_eq!(agg.tally.get(RejectionReason::IncludesNumber), 1);
        assert_eq!(agg.removed() + agg.kept(), agg.total);
    }

    #[test]
    fn missing_column_aborts_before_processing() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("words.txt"), "beef\n").unwrap();
        fs::write(dir.path().join("a.csv"), "title\nBeef Stew\n").unwrap();

        let err = run_process(&config_for(dir.path(), "a")).unwrap_err();
        assert_eq!(err.exit_code(), crate::error::EXIT_INPUT);
    }

    #[test]
    fn missing_wordlist_points_at_the_setting() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.csv"), "name\nBeef Stew\n").unwrap();

        let err = run_process(&config_for(dir.path(), "a")).unwrap_err();
        assert!(err.message().contains("RECIPE_VOCAB_WORDLIST"));
    }
}
