//! Seed SQL generation.

use std::io::Write;
use std::path::Path;

use crate::domain::SqlConfig;
use crate::error::AppError;
use crate::io::export::create_output;

/// Double every single quote; nothing else changes.
pub fn escape_sql_literal(value: &str) -> String {
    value.replace('\'', "''")
}

/// Render the whole seed script.
pub fn render_seed_sql(names: &[String], config: &SqlConfig) -> String {
    let mut out = format!("-- Seed data for {} table\n\n", config.table);

    if config.batch {
        if names.is_empty() {
            return out;
        }
        out.push_str(&format!("INSERT INTO {} ({}) VALUES\n", config.table, config.column));
        let rows: Vec<String> = names
            .iter()
            .map(|n| format!("('{}')", escape_sql_literal(n)))
            .collect();
        out.push_str(&rows.join(",\n"));
        out.push_str(";\n");
    } else {
        for name in names {
            out.push_str(&format!(
                "INSERT INTO {} ({}) VALUES ('{}');\n",
                config.table,
                config.column,
                escape_sql_literal(name)
            ));
        }
    }

    out
}

pub fn write_seed_sql<W: Write>(out: &mut W, names: &[String], config: &SqlConfig) -> Result<(), AppError> {
    out.write_all(render_seed_sql(names, config).as_bytes())
        .map_err(|e| AppError::output(format!("Failed to write SQL: {e}")))
}

pub fn write_seed_sql_file(path: &Path, names: &[String], config: &SqlConfig) -> Result<(), AppError> {
    let mut out = create_output(path)?;
    write_seed_sql(&mut out, names, config)?;
    out.flush()
        .map_err(|e| AppError::output(format!("Failed to write '{}': {e}", path.display())))?;
    tracing::info!(path = %path.display(), statements = names.len(), table = %config.table, "wrote seed SQL");
    Ok(())
}
