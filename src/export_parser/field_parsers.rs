//! Field parsing utilities for LibreLink data rows
//!
//! Glucose normalization to mg/dL and device timestamp conversion to epoch
//! milliseconds. Both report the 1-based source line on failure.

use super::header::{Column, HeaderIndex};
use crate::constants::{DEVICE_TIMESTAMP_FORMAT, DEVICE_TIMESTAMP_PATTERN, MMOL_TO_MG_DL};
use crate::error::{ConvertError, Result};
use crate::models::{GlucoseUnit, GlucoseValue};
use chrono::{Duration, NaiveDate, NaiveDateTime, Offset, TimeZone};
use chrono_tz::Tz;
use csv::StringRecord;
use regex::Regex;
use std::sync::LazyLock;

static DEVICE_TIMESTAMP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(DEVICE_TIMESTAMP_PATTERN).expect("device timestamp pattern is a valid regex")
});

/// Get a required cell of a data row
pub fn get_required_field<'a>(
    record: &'a StringRecord,
    index: &HeaderIndex,
    column: Column,
    line: usize,
) -> Result<&'a str> {
    record
        .get(index.position(column))
        .ok_or_else(|| ConvertError::MissingField {
            line,
            column: index.name(column).to_string(),
        })
}

/// Convert a raw glucose cell to mg/dL.
///
/// mg/dL values pass through as parsed. mmol/L values are multiplied by 18
/// and cut to their integer part, so 5.55 mmol/L becomes 99, not 100.
pub fn normalize_glucose(raw: &str, unit: GlucoseUnit, line: usize) -> Result<GlucoseValue> {
    let value = parse_glucose_number(raw, line)?;

    Ok(match unit {
        GlucoseUnit::MgDl => GlucoseValue::Native(value),
        GlucoseUnit::MmolL => GlucoseValue::Converted(mmol_to_mg_dl(value)),
    })
}

/// Integer part of `mmol * 18`
pub fn mmol_to_mg_dl(mmol: f64) -> i64 {
    (mmol * MMOL_TO_MG_DL).trunc() as i64
}

fn parse_glucose_number(raw: &str, line: usize) -> Result<f64> {
    let invalid = || ConvertError::InvalidGlucoseValue {
        line,
        value: raw.to_string(),
    };

    let value = raw.trim().parse::<f64>().map_err(|_| invalid())?;
    if !value.is_finite() {
        return Err(invalid());
    }
    Ok(value)
}

/// Parse a `dd-MM-yyyy hh:mm` device timestamp
pub fn parse_device_timestamp(raw: &str, line: usize) -> Result<NaiveDateTime> {
    let invalid = |reason: String| ConvertError::InvalidTimestamp {
        line,
        value: raw.to_string(),
        reason,
    };

    let caps = DEVICE_TIMESTAMP_RE
        .captures(raw)
        .ok_or_else(|| invalid(format!("expected format '{}'", DEVICE_TIMESTAMP_FORMAT)))?;

    // Captures are ASCII digits only
    let number = |i: usize| caps[i].parse::<u32>().unwrap_or_default();
    let (day, month, hour, minute) = (number(1), number(2), number(4), number(5));
    let year = caps[3].parse::<i32>().unwrap_or_default();

    // No AM/PM marker exists, so the hour digits are taken as the hour of day
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .ok_or_else(|| invalid("date or time component out of range".to_string()))
}

/// Epoch milliseconds of a wall-clock time in `tz`.
///
/// Ambiguous times (clocks falling back) take the earlier instant. Times
/// inside a spring-forward gap keep the offset in force before the gap,
/// which moves them forward by the gap length.
pub fn local_to_epoch_millis(naive: &NaiveDateTime, tz: &Tz) -> i64 {
    if let Some(dt) = tz.from_local_datetime(naive).earliest() {
        return dt.timestamp_millis();
    }

    let before_gap = *naive - Duration::days(1);
    let offset_seconds = tz
        .offset_from_local_datetime(&before_gap)
        .earliest()
        .map(|offset| offset.fix().local_minus_utc())
        .unwrap_or_default();

    (*naive - Duration::seconds(i64::from(offset_seconds)))
        .and_utc()
        .timestamp_millis()
}

/// Parse a device timestamp and place it in `tz`
pub fn device_timestamp_millis(raw: &str, tz: &Tz, line: usize) -> Result<i64> {
    let naive = parse_device_timestamp(raw, line)?;
    Ok(local_to_epoch_millis(&naive, tz))
}
