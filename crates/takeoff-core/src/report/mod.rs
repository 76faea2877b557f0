pub mod csv;
pub mod xlsx;

use crate::error::TakeoffError;
use crate::model::{Artifacts, BoqItem, RoomArea};

/// Render both output documents for one estimate.
///
/// Empty room/BOQ sequences produce valid header-only artifacts.
pub fn build_artifacts(rooms: &[RoomArea], boq: &[BoqItem]) -> Result<Artifacts, TakeoffError> {
    Ok(Artifacts {
        csv: csv::render_boq(boq),
        workbook: xlsx::render_workbook(rooms, boq)?,
    })
}
