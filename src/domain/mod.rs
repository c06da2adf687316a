//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - per-record outcomes (`RawRecord`, `RejectionReason`, `ReasonTally`)
//! - rule knobs (`NumeralRule`, `ChunkingMode`)
//! - resolved run settings (`ProcessConfig`, `SqlConfig`, `OutputFormat`)

pub mod types;

pub use types::*;
