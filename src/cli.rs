//! Command-line interface components.
//!
//! Every setting can come from a flag or from an environment variable
//! (`TZ`, `DATA_CSV`, `UNIT`, `DATA_BASE_DIR`); flags win.

use crate::config::{ConversionConfig, RawConfig};
use crate::constants::{ENV_BASE_DIR, ENV_DATA_CSV, ENV_TIMEZONE, ENV_UNIT};
use crate::error::Result;
use crate::writer::OutputTarget;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "librelink_processor")]
#[command(about = "Convert a LibreLink glucose CSV export into a JSON array of readings")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(after_help = "Example:\n  \
    TZ=Europe/Berlin UNIT=mg/dL librelink_processor ../data/glucose.csv > libreview-parsed.json")]
pub struct Args {
    /// Path to the LibreLink CSV export (relative paths resolve against --base-dir)
    #[arg(value_name = "DATA_CSV", env = ENV_DATA_CSV)]
    pub data_csv: Option<PathBuf>,

    /// IANA timezone the device timestamps were recorded in, e.g. Europe/Berlin
    #[arg(long, env = ENV_TIMEZONE)]
    pub timezone: Option<String>,

    /// Unit of the export's glucose columns: mg/dL or mmol/L
    #[arg(long, env = ENV_UNIT)]
    pub unit: Option<String>,

    /// Directory relative export paths are resolved against (default: the executable's directory)
    #[arg(long, value_name = "DIR", env = ENV_BASE_DIR)]
    pub base_dir: Option<PathBuf>,

    /// Write the JSON document to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only report errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Validate the supplied settings into a conversion configuration
    pub fn to_config(&self) -> Result<ConversionConfig> {
        ConversionConfig::from_raw(RawConfig {
            timezone: self.timezone.clone(),
            unit: self.unit.clone(),
            data_path: self.data_csv.clone(),
            base_dir: self.base_dir.clone(),
        })
    }

    pub fn output_target(&self) -> OutputTarget {
        match &self.output {
            Some(path) => OutputTarget::File(path.clone()),
            None => OutputTarget::Stdout,
        }
    }

    /// Get the log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_parse() {
        let args = Args::try_parse_from([
            "librelink_processor",
            "--timezone",
            "Europe/Berlin",
            "--unit",
            "mmol/L",
            "--base-dir",
            "/data",
            "-o",
            "out.json",
            "-vv",
            "export.csv",
        ])
        .unwrap();

        assert_eq!(args.get_log_level(), "debug");
        assert_eq!(args.output_target(), OutputTarget::File(PathBuf::from("out.json")));

        let config = args.to_config().unwrap();
        assert_eq!(config.timezone, chrono_tz::Tz::Europe__Berlin);
        assert_eq!(config.data_path, PathBuf::from("/data/export.csv"));
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Args::try_parse_from(["librelink_processor", "-q", "-v"]).is_err());

        let args = Args::try_parse_from(["librelink_processor", "-q"]).unwrap();
        assert_eq!(args.get_log_level(), "error");
    }

    #[test]
    fn test_bad_unit_flag_is_configuration_error() {
        let args = Args::try_parse_from([
            "librelink_processor",
            "--timezone",
            "UTC",
            "--unit",
            "mg",
            "--base-dir",
            "/data",
            "export.csv",
        ])
        .unwrap();

        assert!(args.to_config().unwrap_err().is_configuration());
    }
}
