//! `recipe-vocab` library crate.
//!
//! The binary (`rvocab`) is a thin wrapper around this library so that:
//!
//! - the normalize/validate/aggregate core is testable without spawning processes
//! - the filters can be reused with other word lists, taggers, or term sets
//! - file formats and CLI concerns stay at the edges

pub mod aggregate;
pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod lexicon;
pub mod logging;
pub mod normalize;
pub mod report;
pub mod validate;
