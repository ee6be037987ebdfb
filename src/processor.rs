//! Conversion pipeline.
//!
//! Load → resolve header → filter and transform rows → serialize. Each run
//! converts exactly one export file; the first failure aborts the run before
//! anything is written.

use crate::config::ConversionConfig;
use crate::error::{ConvertError, Result};
use crate::export_parser::ExportParser;
use crate::models::{ConversionResult, ConversionStats};
use crate::writer::{OutputTarget, render_readings, write_document};
use std::borrow::Cow;
use std::io::Write;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Read the whole export into memory.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD instead of
/// failing the run.
pub fn load_export(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(ConvertError::ExportNotFound {
            path: path.to_path_buf(),
        });
    }

    let bytes = std::fs::read(path)?;
    debug!("Loaded {} bytes from {}", bytes.len(), path.display());

    let text = match String::from_utf8_lossy(&bytes) {
        Cow::Borrowed(text) => text.to_string(),
        Cow::Owned(text) => {
            warn!("{} is not valid UTF-8; invalid bytes replaced", path.display());
            text
        }
    };
    Ok(text)
}

/// Convert export text without touching the filesystem
pub fn convert_export(text: &str, config: &ConversionConfig) -> Result<ConversionResult> {
    ExportParser::new(config.unit, config.timezone).parse_str(text)
}

/// Load, convert and render the configured export into one JSON document
fn render_export(config: &ConversionConfig) -> Result<(String, ConversionStats)> {
    info!(
        "Converting {} ({} in {})",
        config.data_path.display(),
        config.unit,
        config.timezone.name()
    );

    let text = load_export(&config.data_path)?;
    let result = convert_export(&text, config)?;
    let document = render_readings(&result.readings)?;
    Ok((document, result.stats))
}

/// Convert the configured export and write the document to `sink`.
///
/// Nothing reaches the sink unless every row converted.
pub fn run(config: &ConversionConfig, mut sink: impl Write) -> Result<ConversionStats> {
    let (document, stats) = render_export(config)?;
    sink.write_all(document.as_bytes())?;
    sink.flush()?;
    Ok(stats)
}

/// Runs one conversion from a validated configuration
#[derive(Debug, Clone)]
pub struct ExportProcessor {
    config: ConversionConfig,
    output: OutputTarget,
}

impl ExportProcessor {
    pub fn new(config: ConversionConfig) -> Self {
        Self {
            config,
            output: OutputTarget::Stdout,
        }
    }

    /// Send the document somewhere other than stdout
    pub fn with_output(mut self, output: OutputTarget) -> Self {
        self.output = output;
        self
    }

    /// Main processing entry point
    pub fn process(&self) -> Result<ConversionStats> {
        let start_time = Instant::now();

        let (document, stats) = render_export(&self.config)?;
        write_document(&document, &self.output)?;

        info!(
            "Converted {} readings from {} rows in {}ms",
            stats.readings(),
            stats.total_rows,
            start_time.elapsed().as_millis()
        );

        Ok(stats)
    }
}
