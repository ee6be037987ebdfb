//! Core data structures and types for LibreLink conversion.
//!
//! Defines the glucose unit and record type enums, the normalized
//! [`Reading`] emitted for every glucose row, and conversion statistics.

use crate::constants::{UNIT_MG_DL, UNIT_MMOL_L, record_types};
use crate::error::ConvertError;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Unit the export's glucose columns are recorded in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GlucoseUnit {
    #[serde(rename = "mg/dL")]
    MgDl,
    #[serde(rename = "mmol/L")]
    MmolL,
}

impl GlucoseUnit {
    pub fn label(&self) -> &'static str {
        match self {
            GlucoseUnit::MgDl => UNIT_MG_DL,
            GlucoseUnit::MmolL => UNIT_MMOL_L,
        }
    }
}

impl FromStr for GlucoseUnit {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            UNIT_MG_DL => Ok(GlucoseUnit::MgDl),
            UNIT_MMOL_L => Ok(GlucoseUnit::MmolL),
            other => Err(ConvertError::configuration(format!(
                "unit must be '{}' or '{}' to parse glucose values, got '{}'",
                UNIT_MG_DL, UNIT_MMOL_L, other
            ))),
        }
    }
}

impl fmt::Display for GlucoseUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Glucose record types the converter keeps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    /// Periodic sensor reading, read from the historic glucose column
    Historic,
    /// User-initiated scan, read from the scan glucose column
    Scan,
}

impl RecordType {
    /// Classify a raw record type cell; anything but the two glucose codes is `None`
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            record_types::HISTORIC_GLUCOSE => Some(RecordType::Historic),
            record_types::SCAN_GLUCOSE => Some(RecordType::Scan),
            _ => None,
        }
    }
}

/// Sensor glucose value in mg/dL.
///
/// Values converted from mmol/L are truncated integers, values already in
/// mg/dL keep whatever the export contained. Integral values serialize as
/// JSON integers (`120`, not `120.0`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GlucoseValue {
    Converted(i64),
    Native(f64),
}

impl GlucoseValue {
    pub fn as_f64(&self) -> f64 {
        match *self {
            GlucoseValue::Converted(v) => v as f64,
            GlucoseValue::Native(v) => v,
        }
    }
}

// Largest integer an f64 holds exactly
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

impl Serialize for GlucoseValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            GlucoseValue::Converted(v) => serializer.serialize_i64(v),
            GlucoseValue::Native(v) if v.fract() == 0.0 && v.abs() <= MAX_SAFE_INTEGER => {
                serializer.serialize_i64(v as i64)
            }
            GlucoseValue::Native(v) => serializer.serialize_f64(v),
        }
    }
}

/// One normalized glucose reading; field order is the output field order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reading {
    pub sgv: GlucoseValue,
    /// Epoch milliseconds
    pub date: i64,
    /// `"<device> | <serial number>"`
    pub device: String,
}

impl Reading {
    pub fn device_label(device: &str, serial_number: &str) -> String {
        format!("{} | {}", device, serial_number)
    }
}

/// Row counts collected during a conversion
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConversionStats {
    /// Data rows seen (line 3 onward, blank lines included)
    pub total_rows: usize,
    pub historic_readings: usize,
    pub scan_readings: usize,
    /// Rows dropped for carrying a non-glucose record type
    pub filtered_rows: usize,
}

impl ConversionStats {
    pub fn readings(&self) -> usize {
        self.historic_readings + self.scan_readings
    }

    pub(crate) fn record(&mut self, record_type: Option<RecordType>) {
        self.total_rows += 1;
        match record_type {
            Some(RecordType::Historic) => self.historic_readings += 1,
            Some(RecordType::Scan) => self.scan_readings += 1,
            None => self.filtered_rows += 1,
        }
    }
}

/// Readings in file order together with the counts behind them
#[derive(Debug, Clone, Default)]
pub struct ConversionResult {
    pub readings: Vec<Reading>,
    pub stats: ConversionStats,
}
