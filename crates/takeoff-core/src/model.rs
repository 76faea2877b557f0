use serde::{Deserialize, Serialize};
use std::fmt;

/// A room label with its aggregated floor area in square meters.
///
/// Labels are title-cased keywords (or "Unknown") and unique within one
/// extraction result; duplicate labels are summed during aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomArea {
    pub room: String,
    pub area_m2: f64,
}

/// Unit of measure for a BOQ line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Uom {
    #[serde(rename = "m²")]
    SquareMeters,
    #[serde(rename = "m")]
    Meters,
}

impl fmt::Display for Uom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Uom::SquareMeters => write!(f, "m²"),
            Uom::Meters => write!(f, "m"),
        }
    }
}

/// One bill-of-quantities line item for a single room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoqItem {
    /// Human-readable description, includes the room name.
    pub item: String,
    pub uom: Uom,
    /// Unrounded quantity; rounded to 2 decimals at rendering time only.
    pub qty: f64,
}

/// Rendered output documents for one estimate.
#[derive(Debug, Clone)]
pub struct Artifacts {
    pub csv: Vec<u8>,
    pub workbook: Vec<u8>,
}

/// Result of one pipeline invocation. Built once, never mutated.
#[derive(Debug, Clone)]
pub struct EstimateResult {
    pub rooms: Vec<RoomArea>,
    pub boq: Vec<BoqItem>,
    pub artifacts: Artifacts,
}

/// Work item handed over by the job collaborator once a job is dequeued.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRequest {
    pub job_id: String,
    /// Storage key of the uploaded document.
    pub document_key: String,
    /// Original filename, used to pick the OCR backend.
    pub filename: String,
    pub user_address: String,
    pub project_label: String,
}

/// Record stored as the job result.
///
/// A job that found zero rooms is still `ok: true` with an empty BOQ;
/// `ok: false` is reserved for OCR/storage/notification failures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobOutcome {
    pub job_id: String,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub rooms: Vec<RoomArea>,
    pub boq: Vec<BoqItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub csv_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workbook_url: Option<String>,
}

impl JobOutcome {
    pub fn failure(job_id: &str, error: String) -> JobOutcome {
        JobOutcome {
            job_id: job_id.to_string(),
            ok: false,
            error: Some(error),
            rooms: Vec::new(),
            boq: Vec::new(),
            csv_url: None,
            workbook_url: None,
        }
    }
}
