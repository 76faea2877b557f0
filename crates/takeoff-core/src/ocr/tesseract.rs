use crate::error::TakeoffError;
use crate::ocr::OcrEngine;
use std::io::Write;
use std::process::Command;

/// Text recovery for raster images using the tesseract CLI.
pub struct TesseractOcr;

impl TesseractOcr {
    pub fn new() -> Self {
        TesseractOcr
    }

    /// Check if tesseract is available on the system.
    pub fn is_available() -> bool {
        Command::new("tesseract")
            .arg("--version")
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }
}

impl Default for TesseractOcr {
    fn default() -> Self {
        Self::new()
    }
}

impl OcrEngine for TesseractOcr {
    fn recognize(&self, document: &[u8], filename: &str) -> Result<String, TakeoffError> {
        // Tesseract sniffs the format from content, but keeping the
        // original extension avoids surprises with some builds.
        let extension = filename.rsplit('.').next().unwrap_or("png").to_lowercase();
        let mut tmpfile = tempfile::Builder::new()
            .suffix(&format!(".{extension}"))
            .tempfile()
            .map_err(|e| TakeoffError::Extraction(e.to_string()))?;
        tmpfile
            .write_all(document)
            .map_err(|e| TakeoffError::Extraction(e.to_string()))?;

        let output = Command::new("tesseract")
            .arg(tmpfile.path())
            .arg("stdout") // output to stdout instead of an .txt file
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    TakeoffError::TesseractNotFound
                } else {
                    TakeoffError::Extraction(format!("tesseract failed: {}", e))
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            return Err(TakeoffError::TesseractFailed { code, stderr });
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }

    fn backend_name(&self) -> &str {
        "tesseract"
    }
}
