use std::path::Path;
use std::path::PathBuf;
use takeoff_core::error::TakeoffError;
use takeoff_core::{ocr, parsing};

use crate::output;

pub fn run(
    input_file: PathBuf,
    output_format: &str,
    output_file: Option<PathBuf>,
) -> Result<(), TakeoffError> {
    let text = read_text(&input_file)?;
    let lines = parsing::normalize_lines(&text);
    let rooms = parsing::extract_rooms(&lines);

    match output_file {
        Some(path) => {
            // Always write JSON when saving to file
            let json = serde_json::to_string_pretty(&rooms)?;
            std::fs::write(&path, json)?;
            eprintln!(
                "Extracted {} room(s), written to {}",
                rooms.len(),
                path.display()
            );
        }
        None => match output_format {
            "json" => println!("{}", serde_json::to_string_pretty(&rooms)?),
            _ => print!("{}", output::table::format_rooms(&rooms)),
        },
    }

    Ok(())
}

/// Read OCR text from the input: a .txt file is taken as-is, anything
/// else goes through the OCR backend picked by extension.
pub fn read_text(input_file: &Path) -> Result<String, TakeoffError> {
    let is_text = input_file
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("txt"))
        .unwrap_or(false);

    if is_text {
        return Ok(std::fs::read_to_string(input_file)?);
    }

    let document = std::fs::read(input_file)?;
    let filename = input_file
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let engine = ocr::engine_for(&filename)?;
    engine.recognize(&document, &filename)
}
