use std::path::PathBuf;
use takeoff_core::error::TakeoffError;
use takeoff_core::model::RoomArea;
use takeoff_core::EstimateOptions;

use crate::output;

pub fn run(
    input_file: PathBuf,
    wall_height: Option<f64>,
    output_format: &str,
    out_dir: Option<PathBuf>,
) -> Result<(), TakeoffError> {
    let options = match wall_height {
        Some(wall_height_m) => EstimateOptions { wall_height_m },
        None => EstimateOptions::default(),
    };

    // Determine input type by extension
    let is_json = input_file
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let result = if is_json {
        // Load pre-extracted rooms from JSON
        let json_bytes = std::fs::read(&input_file)?;
        let rooms: Vec<RoomArea> = serde_json::from_slice(&json_bytes)?;
        takeoff_core::estimate_rooms(rooms, &options)?
    } else {
        let text = super::extract::read_text(&input_file)?;
        takeoff_core::estimate_text(&text, &options)?
    };

    if let Some(dir) = &out_dir {
        std::fs::create_dir_all(dir)?;
        let csv_path = dir.join("boq.csv");
        let workbook_path = dir.join("boq.xlsx");
        std::fs::write(&csv_path, &result.artifacts.csv)?;
        std::fs::write(&workbook_path, &result.artifacts.workbook)?;
        eprintln!(
            "Wrote {} and {}",
            csv_path.display(),
            workbook_path.display()
        );
    }

    match output_format {
        "json" => output::json::print(&result)?,
        _ => output::table::print(&result),
    }

    Ok(())
}
