//! Core parsing orchestration for LibreLink export text

use super::header::{HeaderIndex, HeaderSet};
use super::record_parser::RecordParser;
use crate::constants::FIELD_DELIMITER;
use crate::error::{ConvertError, Result};
use crate::models::{ConversionResult, ConversionStats, GlucoseUnit};
use chrono_tz::Tz;
use tracing::debug;

/// Parser for a whole LibreLink export held in memory
#[derive(Debug, Clone)]
pub struct ExportParser {
    unit: GlucoseUnit,
    timezone: Tz,
}

impl ExportParser {
    pub fn new(unit: GlucoseUnit, timezone: Tz) -> Self {
        Self { unit, timezone }
    }

    /// Convert export text into readings in file order.
    ///
    /// Record 1 is the export title and record 2 the column headers; every
    /// later non-empty line is a data row. Stops at the first row that
    /// cannot be converted; no partial result is returned.
    pub fn parse_str(&self, text: &str) -> Result<ConversionResult> {
        // Cells are split on every comma, as the export never quotes them
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .delimiter(FIELD_DELIMITER)
            .from_reader(text.as_bytes());
        let mut records = csv_reader.records();

        if let Some(title) = records.next().transpose()? {
            debug!("Export title: {}", title.iter().collect::<Vec<_>>().join(","));
        }

        let header_record = records
            .next()
            .transpose()?
            .ok_or(ConvertError::MissingHeaderRow)?;

        let index = HeaderIndex::resolve(&header_record, HeaderSet::for_unit(self.unit))?;
        let record_parser = RecordParser::new(&index, self.unit, self.timezone);

        let mut readings = Vec::new();
        let mut stats = ConversionStats::default();

        for result in records {
            let record = result?;
            let line = record.position().map_or(0, |pos| pos.line() as usize);

            match record_parser.parse_record(&record, line)? {
                Some((record_type, reading)) => {
                    stats.record(Some(record_type));
                    readings.push(reading);
                }
                None => stats.record(None),
            }
        }

        debug!(
            "Parsed {} data rows: {} historic, {} scan, {} filtered",
            stats.total_rows, stats.historic_readings, stats.scan_readings, stats.filtered_rows
        );

        Ok(ConversionResult { readings, stats })
    }
}
