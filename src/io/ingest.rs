//! Input source parsing and record loading.
//!
//! This module is responsible for turning `file[:column]` specs into raw
//! records the pipeline can classify.
//!
//! - **Fail fast**: every source is resolved and read before any record is
//!   processed; a missing file, empty file, or missing column aborts the run.
//! - **No cleaning here**: cells are passed through untouched. An empty CSV
//!   cell becomes a missing record (`None`).

use std::collections::HashMap;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

use csv::StringRecord;

use crate::domain::RawRecord;
use crate::error::AppError;

pub const DEFAULT_COLUMN: &str = "name";

/// Supported input file kinds, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// CSV with a header row; records come from one named column.
    Csv,
    /// Plain text, one record per line.
    Lines,
    /// JSON array of strings (or nulls).
    Json,
}

impl InputKind {
    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "csv" => Ok(InputKind::Csv),
            "txt" => Ok(InputKind::Lines),
            "json" => Ok(InputKind::Json),
            _ => Err(AppError::config(format!(
                "Unsupported input format '{}' for '{}'. Use .csv, .txt, or .json.",
                if ext.is_empty() { "<none>" } else { ext.as_str() },
                path.display()
            ))),
        }
    }
}

/// One input file plus the column to read from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputSource {
    pub path: PathBuf,
    pub column: String,
    pub kind: InputKind,
}

impl InputSource {
    /// Parse `file` or `file:column`. Names without an extension get `.csv`;
    /// relative paths resolve under `input_dir`.
    pub fn parse(spec: &str, default_column: &str, input_dir: &Path) -> Result<Self, AppError> {
        let spec = spec.trim();
        let parts: Vec<&str> = spec.split(':').collect();
        let (file, column) = match parts.as_slice() {
            [file] => (*file, default_column),
            [file, column] => (*file, *column),
            _ => {
                return Err(AppError::input(format!(
                    "Invalid input format '{spec}'. Use 'filename:column_name' or just 'filename'."
                )));
            }
        };

        let file = file.trim();
        let column = column.trim();
        if file.is_empty() || column.is_empty() {
            return Err(AppError::input(format!(
                "Invalid input format '{spec}'. File and column names must not be empty."
            )));
        }

        let mut path = PathBuf::from(file);
        if path.extension().is_none() {
            path.set_extension("csv");
        }
        if path.is_relative() {
            path = input_dir.join(path);
        }

        let kind = InputKind::from_path(&path)?;
        Ok(Self {
            path,
            column: column.to_string(),
            kind,
        })
    }

    /// Parse a comma-separated list of source specs.
    pub fn parse_list(specs: &str, default_column: &str, input_dir: &Path) -> Result<Vec<Self>, AppError> {
        let sources = specs
            .split(',')
            .filter(|s| !s.trim().is_empty())
            .map(|s| Self::parse(s, default_column, input_dir))
            .collect::<Result<Vec<_>, _>>()?;
        if sources.is_empty() {
            return Err(AppError::input("No input files given."));
        }
        Ok(sources)
    }
}

/// Records loaded from one source.
#[derive(Debug, Clone)]
pub struct LoadedSource {
    pub source: InputSource,
    pub records: Vec<RawRecord>,
}

/// Load every source, failing on the first bad one.
pub fn load_sources(sources: &[InputSource]) -> Result<Vec<LoadedSource>, AppError> {
    sources
        .iter()
        .map(|source| {
            let records = load_records(source)?;
            tracing::info!(
                path = %source.path.display(),
                column = %source.column,
                rows = records.len(),
                "loaded input"
            );
            Ok(LoadedSource {
                source: source.clone(),
                records,
            })
        })
        .collect()
}

pub fn load_records(source: &InputSource) -> Result<Vec<RawRecord>, AppError> {
    let text = read_non_empty(&source.path)?;
    match source.kind {
        InputKind::Csv => read_csv_column(&text, &source.path, &source.column),
        InputKind::Lines => Ok(text.lines().map(|l| Some(l.to_string())).collect()),
        InputKind::Json => read_json_records(&text, &source.path),
    }
}

fn read_non_empty(path: &Path) -> Result<String, AppError> {
    if !path.exists() {
        return Err(AppError::input(format!("File '{}' not found.", path.display())));
    }
    let text = fs::read_to_string(path)
        .map_err(|e| AppError::input(format!("Failed to read '{}': {e}", path.display())))?;
    if text.trim().is_empty() {
        return Err(AppError::input(format!("File '{}' is empty.", path.display())));
    }
    Ok(text)
}

fn read_csv_column(text: &str, path: &Path, column: &str) -> Result<Vec<RawRecord>, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| AppError::input(format!("Failed to read CSV headers of '{}': {e}", path.display())))?
        .clone();

    let header_map = build_header_map(&headers);
    let idx = *header_map.get(column).ok_or_else(|| {
        AppError::input(format!(
            "'{column}' column not found in the file '{}'.",
            path.display()
        ))
    })?;

    let mut records = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let record = result.map_err(|e| {
            AppError::input(format!(
                "CSV parse error in '{}' at line {}: {e}",
                path.display(),
                row + 2
            ))
        })?;
        records.push(record.get(idx).filter(|s| !s.is_empty()).map(str::to_string));
    }
    Ok(records)
}

fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        // Spreadsheet exports often prefix the first header with a BOM.
        .map(|(idx, name)| (name.trim().trim_start_matches('\u{feff}').to_string(), idx))
        .collect()
}

fn read_json_records(text: &str, path: &Path) -> Result<Vec<RawRecord>, AppError> {
    serde_json::from_str::<Vec<Option<String>>>(text).map_err(|e| {
        AppError::input(format!(
            "Invalid JSON in '{}': expected an array of strings ({e}).",
            path.display()
        ))
    })
}

/// Read a vocabulary file written by `process` (`.json` array or `.csv`
/// whose first column holds the names after a header row).
pub fn read_vocabulary(path: &Path) -> Result<Vec<String>, AppError> {
    match InputKind::from_path(path)? {
        InputKind::Json => {
            let text = read_non_empty(path)?;
            serde_json::from_str::<Vec<String>>(&text).map_err(|e| {
                AppError::input(format!("Invalid JSON in '{}': {e}", path.display()))
            })
        }
        InputKind::Csv => {
            let file = File::open(path)
                .map_err(|e| AppError::input(format!("Failed to open '{}': {e}", path.display())))?;
            let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(file);
            let mut names = Vec::new();
            for result in reader.records() {
                let record = result
                    .map_err(|e| AppError::input(format!("CSV parse error in '{}': {e}", path.display())))?;
                if let Some(name) = record.get(0) {
                    names.push(name.to_string());
                }
            }
            Ok(names)
        }
        InputKind::Lines => Err(AppError::config(format!(
            "Unsupported file format for '{}'. Please use JSON or CSV.",
            path.display()
        ))),
    }
}
