//! LibreLink Processor Library
//!
//! Converts FreeStyle LibreLink glucose exports (German-localized CSV) into a
//! JSON array of readings for downstream glucose-tracking tools.
//!
//! This library provides tools for:
//! - Validating the run configuration (timezone, unit, export path) up front
//! - Resolving the localized header row into typed column positions
//! - Filtering historic and scan glucose rows out of mixed record types
//! - Normalizing mmol/L values to mg/dL and device timestamps to epoch milliseconds
//! - Writing the readings as a single JSON document, all or nothing

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod export_parser;
pub mod models;
pub mod processor;
pub mod writer;

// Re-export commonly used types
pub use config::ConversionConfig;
pub use error::{ConvertError, Result};
pub use models::{ConversionStats, GlucoseUnit, GlucoseValue, Reading, RecordType};
pub use processor::{ExportProcessor, convert_export, load_export, run};
