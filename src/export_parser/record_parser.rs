//! Individual data row processing
//!
//! Filters a data record on its record type and assembles a
//! [`Reading`] from the retained glucose rows.

use super::field_parsers::{device_timestamp_millis, get_required_field, normalize_glucose};
use super::header::{Column, HeaderIndex};
use crate::error::Result;
use crate::models::{GlucoseUnit, Reading, RecordType};
use chrono_tz::Tz;
use csv::StringRecord;
use tracing::trace;

/// Converts data rows using a resolved header and the run's unit and zone
#[derive(Debug, Clone)]
pub struct RecordParser<'a> {
    index: &'a HeaderIndex,
    unit: GlucoseUnit,
    timezone: Tz,
}

impl<'a> RecordParser<'a> {
    pub fn new(index: &'a HeaderIndex, unit: GlucoseUnit, timezone: Tz) -> Self {
        Self {
            index,
            unit,
            timezone,
        }
    }

    /// Record type of a data record, `None` for anything that is not glucose
    pub fn classify(&self, record: &StringRecord) -> Option<RecordType> {
        record
            .get(self.index.position(Column::RecordType))
            .and_then(RecordType::from_code)
    }

    /// Convert one data record.
    ///
    /// Returns `Ok(None)` for rows the filter drops and an error for glucose
    /// rows that cannot be converted. `line` is the 1-based file line.
    pub fn parse_record(
        &self,
        record: &StringRecord,
        line: usize,
    ) -> Result<Option<(RecordType, Reading)>> {
        let Some(record_type) = self.classify(record) else {
            trace!("Line {}: skipping non-glucose record", line);
            return Ok(None);
        };

        let reading = self.build_reading(record, record_type, line)?;
        Ok(Some((record_type, reading)))
    }

    fn build_reading(
        &self,
        record: &StringRecord,
        record_type: RecordType,
        line: usize,
    ) -> Result<Reading> {
        let glucose_column = match record_type {
            RecordType::Historic => Column::HistoricGlucose,
            RecordType::Scan => Column::ScanGlucose,
        };

        let raw_glucose = get_required_field(record, self.index, glucose_column, line)?;
        let sgv = normalize_glucose(raw_glucose, self.unit, line)?;

        let raw_timestamp = get_required_field(record, self.index, Column::DeviceTimestamp, line)?;
        let date = device_timestamp_millis(raw_timestamp, &self.timezone, line)?;

        let device = get_required_field(record, self.index, Column::Device, line)?;
        let serial_number = get_required_field(record, self.index, Column::SerialNumber, line)?;

        Ok(Reading {
            sgv,
            date,
            device: Reading::device_label(device, serial_number),
        })
    }
}
