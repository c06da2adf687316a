//! Input/output helpers.
//!
//! - source parsing + record loading (`ingest`)
//! - vocabulary/report exports (`export`)
//! - seed SQL generation (`sql`)

pub mod export;
pub mod ingest;
pub mod sql;

pub use export::*;
pub use ingest::*;
pub use sql::*;
