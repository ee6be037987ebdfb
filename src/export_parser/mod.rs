//! LibreLink export parser
//!
//! Turns the text of a LibreLink CSV export into normalized glucose readings.
//!
//! ## Architecture
//!
//! - [`parser`] - CSV record reading and orchestration over the whole export
//! - [`header`] - Resolution of the German header row into column positions
//! - [`record_parser`] - Record type filtering and per-row conversion
//! - [`field_parsers`] - Glucose unit normalization and timestamp parsing
//!
//! ## Usage
//!
//! ```rust
//! use librelink_processor::export_parser::ExportParser;
//! use librelink_processor::models::GlucoseUnit;
//!
//! let text = "Glukosewerte\n\
//!     Gerät,Seriennummer,Gerätezeitstempel,Aufzeichnungstyp,Glukosewert-Verlauf mg/dL,Glukose-Scan mg/dL\n\
//!     FreeStyle LibreLink,ABC123,01-01-2022 09:00,0,120,\n";
//!
//! let parser = ExportParser::new(GlucoseUnit::MgDl, chrono_tz::Tz::UTC);
//! let result = parser.parse_str(text).unwrap();
//! assert_eq!(result.readings.len(), 1);
//! ```

pub mod field_parsers;
pub mod header;
pub mod parser;
pub mod record_parser;

#[cfg(test)]
pub mod tests;

pub use header::{Column, HeaderIndex, HeaderSet};
pub use parser::ExportParser;
pub use record_parser::RecordParser;
