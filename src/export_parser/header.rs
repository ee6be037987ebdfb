//! Header row resolution for LibreLink exports
//!
//! Maps the six logical columns the converter reads onto positions in the
//! export's header row. The header names are German and two of them carry
//! the unit, so the set to look for depends on the configured unit.

use crate::constants::headers;
use crate::error::{ConvertError, Result};
use crate::models::GlucoseUnit;
use csv::StringRecord;
use tracing::debug;

/// Logical columns consumed from each data row, in [`HeaderIndex`] slot order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Device,
    SerialNumber,
    RecordType,
    HistoricGlucose,
    ScanGlucose,
    DeviceTimestamp,
}

impl Column {
    pub const ALL: [Column; 6] = [
        Column::Device,
        Column::SerialNumber,
        Column::RecordType,
        Column::HistoricGlucose,
        Column::ScanGlucose,
        Column::DeviceTimestamp,
    ];
}

/// Header names of one export dialect
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderSet {
    pub device: &'static str,
    pub serial_number: &'static str,
    pub record_type: &'static str,
    pub historic_glucose: &'static str,
    pub scan_glucose: &'static str,
    pub device_timestamp: &'static str,
}

impl HeaderSet {
    pub fn for_unit(unit: GlucoseUnit) -> Self {
        let (historic_glucose, scan_glucose) = match unit {
            GlucoseUnit::MgDl => (
                headers::mg_dl::HISTORIC_GLUCOSE,
                headers::mg_dl::SCAN_GLUCOSE,
            ),
            GlucoseUnit::MmolL => (
                headers::mmol_l::HISTORIC_GLUCOSE,
                headers::mmol_l::SCAN_GLUCOSE,
            ),
        };

        Self {
            device: headers::DEVICE,
            serial_number: headers::SERIAL_NUMBER,
            record_type: headers::RECORD_TYPE,
            historic_glucose,
            scan_glucose,
            device_timestamp: headers::DEVICE_TIMESTAMP,
        }
    }

    pub fn name(&self, column: Column) -> &'static str {
        match column {
            Column::Device => self.device,
            Column::SerialNumber => self.serial_number,
            Column::RecordType => self.record_type,
            Column::HistoricGlucose => self.historic_glucose,
            Column::ScanGlucose => self.scan_glucose,
            Column::DeviceTimestamp => self.device_timestamp,
        }
    }
}

/// Resolved column positions, complete by construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderIndex {
    headers: HeaderSet,
    positions: [usize; 6],
}

impl HeaderIndex {
    /// Resolve every column of `headers` against the header record.
    ///
    /// Fails with [`ConvertError::MissingColumns`] naming all absent headers.
    /// Matching is exact; the first occurrence of a duplicated header wins.
    pub fn resolve(header_record: &StringRecord, headers: HeaderSet) -> Result<Self> {
        let mut positions = [0usize; 6];
        let mut missing = Vec::new();

        for column in Column::ALL {
            let name = headers.name(column);
            match header_record.iter().position(|cell| cell == name) {
                Some(index) => positions[column as usize] = index,
                None => missing.push(name.to_string()),
            }
        }

        if !missing.is_empty() {
            return Err(ConvertError::MissingColumns { missing });
        }

        debug!(
            "Resolved {} of {} header cells: {:?}",
            Column::ALL.len(),
            header_record.len(),
            positions
        );

        Ok(Self { headers, positions })
    }

    pub fn position(&self, column: Column) -> usize {
        self.positions[column as usize]
    }

    pub fn name(&self, column: Column) -> &'static str {
        self.headers.name(column)
    }
}
