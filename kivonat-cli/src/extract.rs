//! Text extraction by shelling out to poppler's `pdftotext`.

use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;

/// The external text tool could not produce text for a PDF.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("pdftotext not found on PATH; install poppler-utils")]
    ToolMissing(#[source] which::Error),

    #[error("running pdftotext on {}", .path.display())]
    Spawn {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("pdftotext failed on {}: {detail}", .path.display())]
    Tool { path: PathBuf, detail: String },
}

/// Locate `pdftotext` once per run so a missing tool fails fast, before
/// any statement is touched.
pub fn locate_pdftotext() -> Result<PathBuf, ExtractionError> {
    which::which("pdftotext").map_err(ExtractionError::ToolMissing)
}

/// Run `pdftotext -layout` and return the extracted text.
///
/// `-layout` preserves column alignment so the parser sees date and
/// amount tokens on one line. Output is decoded lossily; statements
/// occasionally carry bytes outside UTF-8.
pub fn extract_text(tool: &Path, pdf: &Path) -> Result<String, ExtractionError> {
    let output = Command::new(tool)
        .arg("-layout")
        .arg("-enc")
        .arg("UTF-8")
        .arg(pdf)
        .arg("-")
        .output()
        .map_err(|source| ExtractionError::Spawn {
            path: pdf.to_path_buf(),
            source,
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let detail = match stderr.trim() {
            "" => output.status.to_string(),
            msg => msg.to_string(),
        };
        return Err(ExtractionError::Tool {
            path: pdf.to_path_buf(),
            detail,
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
