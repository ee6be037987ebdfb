//! Application constants for the LibreLink processor
//!
//! This module contains the fixed header names of the LibreLink export,
//! record type codes, conversion factors and environment variable names
//! used throughout the processor.

// =============================================================================
// Export Layout
// =============================================================================

/// Field delimiter used by the LibreLink export. Cells are never quoted.
pub const FIELD_DELIMITER: u8 = b',';

// =============================================================================
// Column Headers
// =============================================================================

/// Header names shared by both unit variants of the export
pub mod headers {
    pub const DEVICE: &str = "Gerät";
    pub const SERIAL_NUMBER: &str = "Seriennummer";
    pub const RECORD_TYPE: &str = "Aufzeichnungstyp";
    pub const DEVICE_TIMESTAMP: &str = "Gerätezeitstempel";

    /// Glucose columns of an export recorded in mg/dL
    pub mod mg_dl {
        pub const HISTORIC_GLUCOSE: &str = "Glukosewert-Verlauf mg/dL";
        pub const SCAN_GLUCOSE: &str = "Glukose-Scan mg/dL";
    }

    /// Glucose columns of an export recorded in mmol/L
    pub mod mmol_l {
        pub const HISTORIC_GLUCOSE: &str = "Glukosewert-Verlauf mmol/L";
        pub const SCAN_GLUCOSE: &str = "Glukose-Scan mmol/L";
    }
}

// =============================================================================
// Record Types
// =============================================================================

/// Record type codes found in the `Aufzeichnungstyp` column.
///
/// Only the two glucose codes are converted; insulin, food, notes and
/// alarm records carry other codes and are dropped.
pub mod record_types {
    /// Periodic reading logged by the sensor
    pub const HISTORIC_GLUCOSE: &str = "0";

    /// On-demand reading taken by scanning the sensor
    pub const SCAN_GLUCOSE: &str = "1";
}

// =============================================================================
// Units and Time
// =============================================================================

/// Unit labels accepted on the command line and in the environment
pub const UNIT_MG_DL: &str = "mg/dL";
pub const UNIT_MMOL_L: &str = "mmol/L";

/// Multiplier from mmol/L to mg/dL used by the export tooling
pub const MMOL_TO_MG_DL: f64 = 18.0;

/// Device timestamp layout, `dd-MM-yyyy hh:mm`
pub const DEVICE_TIMESTAMP_PATTERN: &str = r"^([0-9]{2})-([0-9]{2})-([0-9]{4}) ([0-9]{2}):([0-9]{2})$";

/// Human readable form of [`DEVICE_TIMESTAMP_PATTERN`] for error messages
pub const DEVICE_TIMESTAMP_FORMAT: &str = "dd-MM-yyyy hh:mm";

// =============================================================================
// Environment
// =============================================================================

pub const ENV_TIMEZONE: &str = "TZ";
pub const ENV_DATA_CSV: &str = "DATA_CSV";
pub const ENV_UNIT: &str = "UNIT";
pub const ENV_BASE_DIR: &str = "DATA_BASE_DIR";

/// Log target used when building the default `EnvFilter` directive
pub const LOG_TARGET: &str = "librelink_processor";
