//! sheet_cleaner - cleans a single tabular file for downstream ETL use.
//!
//! Loads an Excel, CSV, or delimited text file, strips a fixed set of
//! problematic characters and whitespace from every cell, normalizes null
//! markers, re-exports the table in a format matching the input, and reports
//! how many characters were removed.

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;

pub use config::CleanOptions;
pub use error::CleanError;
pub use models::{CleanOutcome, Column, FileClassification, RemovalCounter, Table};
pub use services::clean_file;
pub use services::stats::summarize;
