//! Write the vocabulary and the run report.
//!
//! The CSV/JSON vocabulary files are also valid input for `rvocab sql`.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::aggregate::Aggregation;
use crate::domain::{OutputFormat, SqlConfig};
use crate::error::AppError;
use crate::io::sql;

pub const DEFAULT_OUTPUT_STEM: &str = "processed_recipes";
pub const CSV_HEADER: &str = "recipe_name";

/// `<dir>/<stem>.<ext>`, with `processed_recipes` as the default stem.
pub fn output_path(dir: &Path, stem: Option<&str>, format: OutputFormat) -> PathBuf {
    let stem = stem.filter(|s| !s.trim().is_empty()).unwrap_or(DEFAULT_OUTPUT_STEM);
    dir.join(format!("{}.{}", stem.trim(), format.extension()))
}

/// Write the vocabulary in the requested format, creating parent directories.
pub fn write_vocabulary(
    path: &Path,
    names: &[String],
    format: OutputFormat,
    sql_config: &SqlConfig,
) -> Result<(), AppError> {
    let mut out = create_output(path)?;
    match format {
        OutputFormat::Csv => write_vocabulary_csv(&mut out, names),
        OutputFormat::Json => serde_json::to_writer_pretty(&mut out, names)
            .map_err(|e| AppError::output(format!("Failed to write JSON '{}': {e}", path.display()))),
        OutputFormat::Sql => sql::write_seed_sql(&mut out, names, sql_config),
    }?;
    out.flush()
        .map_err(|e| AppError::output(format!("Failed to write '{}': {e}", path.display())))?;

    tracing::info!(path = %path.display(), names = names.len(), "wrote vocabulary");
    Ok(())
}

fn write_vocabulary_csv<W: Write>(out: W, names: &[String]) -> Result<(), AppError> {
    let mut writer = csv::Writer::from_writer(out);
    writer
        .write_record([CSV_HEADER])
        .map_err(|e| AppError::output(format!("Failed to write CSV header: {e}")))?;
    for name in names {
        writer
            .write_record([name])
            .map_err(|e| AppError::output(format!("Failed to write CSV row: {e}")))?;
    }
    writer
        .flush()
        .map_err(|e| AppError::output(format!("Failed to write CSV: {e}")))
}

pub(crate) fn create_output(path: &Path) -> Result<BufWriter<File>, AppError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            AppError::output(format!("Failed to create directory '{}': {e}", parent.display()))
        })?;
    }
    let file = File::create(path)
        .map_err(|e| AppError::output(format!("Failed to create '{}': {e}", path.display())))?;
    Ok(BufWriter::new(file))
}

/// Machine-readable summary of one run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub total: usize,
    pub kept: usize,
    pub removed: usize,
    pub reasons: BTreeMap<String, usize>,
}

impl RunReport {
    pub fn from_aggregation(agg: &Aggregation) -> Self {
        Self {
            total: agg.total,
            kept: agg.kept(),
            removed: agg.removed(),
            reasons: agg
                .tally
                .iter()
                .map(|(reason, count)| (reason.label().to_string(), count))
                .collect(),
        }
    }
}

pub fn write_report_json(path: &Path, agg: &Aggregation) -> Result<(), AppError> {
    let mut out = create_output(path)?;
    serde_json::to_writer_pretty(&mut out, &RunReport::from_aggregation(agg))
        .map_err(|e| AppError::output(format!("Failed to write report '{}': {e}", path.display())))?;
    out.flush()
        .map_err(|e| AppError::output(format!("Failed to write report '{}': {e}", path.display())))
}
