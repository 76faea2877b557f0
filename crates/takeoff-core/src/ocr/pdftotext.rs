use crate::error::TakeoffError;
use crate::ocr::OcrEngine;
use std::io::Write;
use std::process::Command;

/// Text recovery for PDFs using pdftotext (from poppler-utils).
///
/// Uses `pdftotext -layout` to keep label/area tokens of a drawing on the
/// same output line where possible.
pub struct PdftotextOcr;

impl PdftotextOcr {
    pub fn new() -> Self {
        PdftotextOcr
    }

    /// Check if pdftotext is available on the system.
    pub fn is_available() -> bool {
        Command::new("pdftotext")
            .arg("-v")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }
}

impl Default for PdftotextOcr {
    fn default() -> Self {
        Self::new()
    }
}

impl OcrEngine for PdftotextOcr {
    fn recognize(&self, document: &[u8], _filename: &str) -> Result<String, TakeoffError> {
        // Write document bytes to a temp file
        let mut tmpfile =
            tempfile::NamedTempFile::new().map_err(|e| TakeoffError::Extraction(e.to_string()))?;
        tmpfile
            .write_all(document)
            .map_err(|e| TakeoffError::Extraction(e.to_string()))?;

        let output = Command::new("pdftotext")
            .arg("-layout")
            .arg(tmpfile.path())
            .arg("-") // output to stdout
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    TakeoffError::PdftotextNotFound
                } else {
                    TakeoffError::Extraction(format!("pdftotext failed: {}", e))
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            return Err(TakeoffError::PdftotextFailed { code, stderr });
        }

        // pdftotext separates pages with form feeds; the pipeline only
        // needs a flat line sequence.
        let text = String::from_utf8_lossy(&output.stdout).replace('\x0c', "\n");
        Ok(text)
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}
