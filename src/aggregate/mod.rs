//! Parallel classification and global deduplication.
//!
//! Workflow:
//! records -> contiguous chunks -> (rayon pool) classify each chunk
//! -> merge in chunk order -> keep first occurrence of each name
//!
//! Workers share nothing mutable; the merge runs on the calling thread once
//! every chunk result is in.

use std::collections::HashSet;

use rayon::prelude::*;

use crate::domain::{RawRecord, ReasonTally, RejectionReason};
use crate::error::AppError;
use crate::normalize::Normalizer;
use crate::validate::Validator;

pub mod chunks;

pub use chunks::{ChunkStrategy, DEFAULT_CHUNK_SIZE};

/// Normalizer followed by validator, applied to one record at a time. The
/// numbering rule (if enabled) sees the raw record before normalization.
pub struct RecordPipeline {
    normalizer: Normalizer,
    validator: Validator,
}

impl RecordPipeline {
    pub fn new(normalizer: Normalizer, validator: Validator) -> Self {
        Self { normalizer, validator }
    }

    pub fn classify(&self, raw: Option<&str>) -> Result<String, RejectionReason> {
        if let Some(value) = raw {
            if let Err(failure) = self.validator.check_numbering(value) {
                tracing::trace!(raw = value, %failure, "rejected record");
                return Err(RejectionReason::InvalidRecipeName);
            }
        }
        let candidate = self.normalizer.normalize(raw)?;
        match self.validator.check(&candidate) {
            Ok(()) => Ok(candidate),
            Err(failure) => {
                tracing::trace!(%candidate, %failure, "rejected candidate");
                Err(RejectionReason::InvalidRecipeName)
            }
        }
    }
}

/// Output of one aggregation run.
#[derive(Debug, Clone, Default)]
pub struct Aggregation {
    /// Accepted names, first occurrence order.
    pub vocabulary: Vec<String>,
    pub tally: ReasonTally,
    /// Number of input records seen.
    pub total: usize,
}

impl Aggregation {
    pub fn kept(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn removed(&self) -> usize {
        self.tally.removed()
    }
}

/// Per-chunk result returned by a worker.
#[derive(Debug, Default)]
struct ChunkOutput {
    accepted: Vec<String>,
    tally: ReasonTally,
    size: usize,
}

fn process_chunk(pipeline: &RecordPipeline, chunk: &[RawRecord]) -> ChunkOutput {
    let mut out = ChunkOutput {
        size: chunk.len(),
        ..ChunkOutput::default()
    };
    for record in chunk {
        match pipeline.classify(record.as_deref()) {
            Ok(name) => out.accepted.push(name),
            Err(reason) => out.tally.record(reason),
        }
    }
    out
}

/// Classify `records` on a pool of `workers` threads (default: available
/// parallelism) and merge the results.
pub fn aggregate(
    records: &[RawRecord],
    pipeline: &RecordPipeline,
    strategy: ChunkStrategy,
    workers: Option<usize>,
) -> Result<Aggregation, AppError> {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = workers {
        if n == 0 {
            return Err(AppError::config("Worker count must be at least 1."));
        }
        builder = builder.num_threads(n);
    }
    let pool = builder
        .build()
        .map_err(|e| AppError::config(format!("Failed to start worker pool: {e}")))?;

    let workers = pool.current_num_threads();
    let chunk_size = strategy.chunk_size(records.len(), workers);
    tracing::info!(
        records = records.len(),
        chunk_size,
        chunks = records.len().div_ceil(chunk_size),
        workers,
        "classifying records"
    );

    let outputs: Vec<ChunkOutput> = pool.install(|| {
        records
            .par_chunks(chunk_size)
            .enumerate()
            .map(|(idx, chunk)| {
                let out = process_chunk(pipeline, chunk);
                tracing::debug!(chunk = idx, size = out.size, accepted = out.accepted.len(), "chunk done");
                out
            })
            .collect()
    });

    Ok(merge(outputs))
}

/// Concatenate chunk results in order and drop repeated names.
fn merge(outputs: Vec<ChunkOutput>) -> Aggregation {
    let mut tally = ReasonTally::new();
    tally.touch(RejectionReason::Duplicate);

    let mut seen = HashSet::new();
    let mut vocabulary = Vec::new();
    let mut total = 0;

    for out in outputs {
        total += out.size;
        tally.merge(&out.tally);
        for name in out.accepted {
            if seen.insert(name.clone()) {
                vocabulary.push(name);
            } else {
                tally.record(RejectionReason::Duplicate);
            }
        }
    }

    Aggregation {
        vocabulary,
        tally,
        total,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::sync::Arc;

    use super::*;
    use crate::lexicon::{LexiconTagger, TreebankTokenizer, WordSet};
    use crate::domain::NumeralRule;
    use crate::normalize::NormalizerConfig;
    use crate::validate::{TermSet, ValidatorConfig};

    fn pipeline() -> RecordPipeline {
        pipeline_with(NumeralRule::AnyDigit, false)
    }

    fn pipeline_with(numeral_rule: NumeralRule, reject_numbering: bool) -> RecordPipeline {
        let words = WordSet::from_words([
            "best", "chicken", "soup", "my", "mom's", "apple", "pie", "tacos", "beef", "stew",
            "taco", "salad", "morning", "glory",
        ]);
        let normalizer = Normalizer::new(
            NormalizerConfig {
                numeral_rule,
                ..NormalizerConfig::default()
            },
            Arc::new(words),
        );
        let mut config = ValidatorConfig::default();
        if reject_numbering {
            config = config.with_numbering_rule().unwrap();
        }
        let validator = Validator::new(
            config,
            Arc::new(TreebankTokenizer),
            Arc::new(LexiconTagger::default()),
            Arc::new(TermSet::filler_words()),
            Arc::new(TermSet::from_terms(["chicken soup", "apple pie", "taco", "stew"])),
        );
        RecordPipeline::new(normalizer, validator)
    }

    fn records(items: &[Option<&str>]) -> Vec<RawRecord> {
        items.iter().map(|r| r.map(str::to_string)).collect()
    }

    fn sample() -> Vec<RawRecord> {
        records(&[
            Some("Chicken Soup!!"),
            Some("soup"),
            Some("My Mom's Apple Pie"),
            Some("Best Chicken Soup!!"),
            Some("chicken   soup"),
            Some("Tacos123"),
            Some(""),
            None,
            Some("Beef Stew"),
            Some("taco salad"),
            Some("morning glory"),
            Some("BEEF STEW"),
        ])
    }

    #[test]
    fn classify_mixed_records() {
        let agg = aggregate(&sample(), &pipeline(), ChunkStrategy::Fixed(3), Some(2)).unwrap();

        assert_eq!(agg.vocabulary, vec!["chicken soup", "beef stew", "taco salad"]);
        assert_eq!(agg.total, 12);
        assert_eq!(agg.tally.get(RejectionReason::EmptyOrNaN), 2);
        assert_eq!(agg.tally.get(RejectionReason::IncludesNumber), 1);
        // "soup" (too few tokens), "my mom's apple pie" (possessive),
        // "best chicken soup" (filler), "morning glory" (no culinary term)
        assert_eq!(agg.tally.get(RejectionReason::InvalidRecipeName), 4);
        assert_eq!(agg.tally.get(RejectionReason::Duplicate), 2);
    }

    #[test]
    fn numbering_rule_applies_to_raw_records() {
        for rule in [NumeralRule::AnyDigit, NumeralRule::DigitWord] {
            let off = pipeline_with(rule, false);
            let on = pipeline_with(rule, true);

            for raw in ["Chicken Soup No. 2", "#3 Chicken Soup", "chicken soup no 2"] {
                assert_eq!(off.classify(Some(raw)), Err(RejectionReason::IncludesNumber), "{rule:?} {raw}");
                assert_eq!(on.classify(Some(raw)), Err(RejectionReason::InvalidRecipeName), "{rule:?} {raw}");
            }
            assert_eq!(on.classify(Some("No2 chicken soup")), Err(RejectionReason::InvalidRecipeName));
            assert_eq!(on.classify(Some("Chicken Soup")), Ok("chicken soup".to_string()));
            assert_eq!(on.classify(None), Err(RejectionReason::EmptyOrNaN));
        }
    }

    #[test]
    fn tally_plus_vocabulary_equals_input() {
        let input = sample();
        for size in [1, 2, 5, 1000] {
            let agg = aggregate(&input, &pipeline(), ChunkStrategy::Fixed(size), Some(3)).unwrap();
            assert_eq!(agg.removed() + agg.kept(), input.len(), "chunk size {size}");
            assert_eq!(agg.total, input.len());
        }
    }

    #[test]
    fn partitioning_does_not_change_results() {
        let input = sample();
        let one = aggregate(&input, &pipeline(), ChunkStrategy::Fixed(1), Some(4)).unwrap();
        let all = aggregate(&input, &pipeline(), ChunkStrategy::Fixed(input.len()), Some(1)).unwrap();
        let per_worker = aggregate(&input, &pipeline(), ChunkStrategy::PerWorker, Some(3)).unwrap();

        let as_set = |a: &Aggregation| a.vocabulary.iter().cloned().collect::<BTreeSet<_>>();
        assert_eq!(as_set(&one), as_set(&all));
        assert_eq!(as_set(&one), as_set(&per_worker));
        assert_eq!(one.tally, all.tally);
        assert_eq!(one.tally, per_worker.tally);
        // Chunks are merged in order, so first-occurrence order is stable too.
        assert_eq!(one.vocabulary, all.vocabulary);
    }

    #[test]
    fn duplicate_count_matches_repeats() {
        let input = records(&[
            Some("beef stew"),
            Some("Beef Stew"),
            Some("BEEF  STEW!"),
            Some("chicken soup"),
            Some("chicken soup"),
        ]);
        let agg = aggregate(&input, &pipeline(), ChunkStrategy::Fixed(2), None).unwrap();
        assert_eq!(agg.vocabulary, vec!["beef stew", "chicken soup"]);
        assert_eq!(agg.tally.get(RejectionReason::Duplicate), 3);
    }

    #[test]
    fn empty_input_reports_zero_duplicates() {
        let agg = aggregate(&[], &pipeline(), ChunkStrategy::default(), Some(1)).unwrap();
        assert!(agg.vocabulary.is_empty());
        assert_eq!(agg.total, 0);
        assert_eq!(agg.tally.most_common(), vec![(RejectionReason::Duplicate, 0)]);
    }

    #[test]
    fn zero_workers_is_rejected() {
        let err = aggregate(&sample(), &pipeline(), ChunkStrategy::default(), Some(0)).unwrap_err();
        assert_eq!(err.exit_code(), crate::error::EXIT_CONFIG);
    }
}
