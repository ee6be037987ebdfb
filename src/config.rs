//! Conversion configuration and validation.
//!
//! The raw settings (timezone name, unit label, data path) arrive from the
//! command line or the environment as strings. [`ConversionConfig::from_raw`]
//! validates them once; everything downstream takes typed values.

use crate::error::{ConvertError, Result};
use crate::models::GlucoseUnit;
use chrono_tz::Tz;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Unvalidated settings as supplied by the caller
#[derive(Debug, Clone, Default)]
pub struct RawConfig {
    pub timezone: Option<String>,
    pub unit: Option<String>,
    pub data_path: Option<PathBuf>,
    /// Directory relative data paths are resolved against
    pub base_dir: Option<PathBuf>,
}

/// Validated settings for one conversion run
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionConfig {
    pub timezone: Tz,
    pub unit: GlucoseUnit,
    pub data_path: PathBuf,
}

impl ConversionConfig {
    pub fn new(timezone: Tz, unit: GlucoseUnit, data_path: impl Into<PathBuf>) -> Self {
        Self {
            timezone,
            unit,
            data_path: data_path.into(),
        }
    }

    /// Validate raw settings.
    ///
    /// The timezone is checked first, then the unit, then the path, so a
    /// missing timezone is always the reported failure when several are absent.
    pub fn from_raw(raw: RawConfig) -> Result<Self> {
        let timezone = parse_timezone(raw.timezone.as_deref())?;

        let unit = match raw.unit.as_deref() {
            Some(label) => label.parse::<GlucoseUnit>()?,
            None => {
                return Err(ConvertError::configuration(
                    "unit must be defined as mg/dL or mmol/L to parse glucose values",
                ));
            }
        };

        let data_path = raw
            .data_path
            .ok_or_else(|| ConvertError::configuration("path to the export CSV must be defined"))?;

        let base_dir = match raw.base_dir {
            Some(dir) => dir,
            None => default_base_dir()?,
        };
        let data_path = resolve_data_path(&data_path, &base_dir);

        debug!(
            "Validated configuration: timezone={}, unit={}, data_path={}",
            timezone.name(),
            unit,
            data_path.display()
        );

        Ok(Self {
            timezone,
            unit,
            data_path,
        })
    }
}

fn parse_timezone(name: Option<&str>) -> Result<Tz> {
    let name = name.map(str::trim).filter(|s| !s.is_empty()).ok_or_else(|| {
        ConvertError::configuration(
            "timezone must be defined to parse device timestamps in the correct zone",
        )
    })?;

    name.parse::<Tz>().map_err(|_| {
        ConvertError::configuration(format!("'{}' is not a known IANA timezone", name))
    })
}

/// Directory containing the running executable
fn default_base_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    Ok(exe
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(".")))
}

/// Join a relative data path onto the base directory; absolute paths are kept
pub fn resolve_data_path(data_path: &Path, base_dir: &Path) -> PathBuf {
    if data_path.is_absolute() {
        data_path.to_path_buf()
    } else {
        base_dir.join(data_path)
    }
}
