//! JSON output of converted readings.
//!
//! The whole array is rendered into memory first and written with a single
//! call, so a failed run never emits a partial document.

use crate::error::Result;
use crate::models::Reading;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// Where the JSON document goes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OutputTarget {
    #[default]
    Stdout,
    File(PathBuf),
}

/// Render readings as one compact JSON array followed by a newline
pub fn render_readings(readings: &[Reading]) -> Result<String> {
    let mut document = serde_json::to_string(readings)?;
    document.push('\n');
    Ok(document)
}

/// Write a rendered document to the target
pub fn write_document(document: &str, target: &OutputTarget) -> Result<()> {
    match target {
        OutputTarget::Stdout => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(document.as_bytes())?;
            stdout.flush()?;
        }
        OutputTarget::File(path) => persist_atomically(document, path)?,
    }

    debug!("Wrote {} bytes to {:?}", document.len(), target);
    Ok(())
}

/// Write through a temporary file in the destination directory and rename it into place
fn persist_atomically(document: &str, path: &Path) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let mut temp_file = NamedTempFile::new_in(&dir)?;
    temp_file.write_all(document.as_bytes())?;
    temp_file.flush()?;
    temp_file.persist(path).map_err(|e| e.error)?;
    Ok(())
}
