//! # jar-class-finder
//!
//! Finds which jar files on disk provide a class whose fully-qualified name
//! contains a given fragment.
//!
//! ## Architecture
//!
//! - **cli**: `---flag value` command-line parsing
//! - **config**: Validated search request and process-wide constants
//! - **error**: Usage errors that abort before scanning
//! - **scan**: Recursive jar file discovery
//! - **catalog**: Class listing for one jar and for a batch of jars
//! - **matcher**: First-match filter and the ordered match table
//! - **report**: Elapsed-time formatting and the console report
//! - **search**: Drives scan, catalog and match over every input

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod matcher;
pub mod report;
pub mod scan;
pub mod search;
