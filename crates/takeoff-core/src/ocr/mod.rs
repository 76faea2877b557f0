pub mod pdftotext;
pub mod tesseract;

use crate::error::TakeoffError;
use pdftotext::PdftotextOcr;
use tesseract::TesseractOcr;

/// Trait for text-recovery backends.
///
/// Implementations receive the raw document bytes and the original
/// filename (used for format hints) and return plain text.
pub trait OcrEngine: Send + Sync {
    fn recognize(&self, document: &[u8], filename: &str) -> Result<String, TakeoffError>;

    /// Name of this backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Pick a backend from the document's file extension.
pub fn engine_for(filename: &str) -> Result<Box<dyn OcrEngine>, TakeoffError> {
    let extension = filename
        .rsplit('.')
        .next()
        .map(str::to_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "pdf" => Ok(Box::new(PdftotextOcr::new())),
        "png" | "jpg" | "jpeg" | "tif" | "tiff" => Ok(Box::new(TesseractOcr::new())),
        _ => Err(TakeoffError::UnsupportedDocument(extension)),
    }
}
