pub mod delivery;
pub mod error;
pub mod model;
pub mod ocr;
pub mod parsing;
pub mod report;
pub mod rules;

use delivery::{ArtifactStore, Notifier};
use error::TakeoffError;
use model::{EstimateResult, JobOutcome, JobRequest, RoomArea};
use ocr::OcrEngine;
pub use rules::EstimateOptions;
use std::time::Duration;

/// How long signed artifact links stay valid.
pub const DEFAULT_LINK_TTL: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// Run the text-to-quantities pipeline on recovered OCR text.
///
/// Normalize -> extract rooms -> estimate quantities -> render artifacts,
/// in strict sequence. Empty text is valid input and yields an empty
/// result with header-only artifacts; finding no rooms is a normal
/// outcome, not a failure.
pub fn estimate_text(text: &str, options: &EstimateOptions) -> Result<EstimateResult, TakeoffError> {
    let lines = parsing::normalize_lines(text);
    let rooms = parsing::extract_rooms(&lines);
    estimate_rooms(rooms, options)
}

/// Run the estimation half of the pipeline on already-extracted rooms.
pub fn estimate_rooms(
    rooms: Vec<RoomArea>,
    options: &EstimateOptions,
) -> Result<EstimateResult, TakeoffError> {
    let boq = rules::estimate(&rooms, options);
    let artifacts = report::build_artifacts(&rooms, &boq)?;
    Ok(EstimateResult {
        rooms,
        boq,
        artifacts,
    })
}

/// Recover text from a document via the injected OCR engine, then run the
/// pipeline on it.
pub fn estimate_document(
    document: &[u8],
    filename: &str,
    engine: &dyn OcrEngine,
    options: &EstimateOptions,
) -> Result<EstimateResult, TakeoffError> {
    let text = engine.recognize(document, filename)?;
    estimate_text(&text, options)
}

/// Entry point invoked by the job collaborator once a job is dequeued.
///
/// Fetches the document from storage, runs the pipeline, stores the
/// artifacts and notifies the user. Never panics; any failure comes back
/// as an `ok: false` record so one bad job cannot take down the others.
pub fn process_job(
    request: &JobRequest,
    engine: &dyn OcrEngine,
    store: &dyn ArtifactStore,
    notifier: &dyn Notifier,
    options: &EstimateOptions,
) -> JobOutcome {
    match run_job(request, engine, store, notifier, options) {
        Ok(outcome) => outcome,
        Err(e) => JobOutcome::failure(&request.job_id, e.to_string()),
    }
}

fn run_job(
    request: &JobRequest,
    engine: &dyn OcrEngine,
    store: &dyn ArtifactStore,
    notifier: &dyn Notifier,
    options: &EstimateOptions,
) -> Result<JobOutcome, TakeoffError> {
    let document = store.get(&request.document_key)?;
    let result = estimate_document(&document, &request.filename, engine, options)?;

    let receipt = delivery::deliver(
        &request.job_id,
        &request.user_address,
        &request.project_label,
        &result,
        store,
        notifier,
        DEFAULT_LINK_TTL,
    )?;

    Ok(JobOutcome {
        job_id: request.job_id.clone(),
        ok: true,
        error: None,
        rooms: result.rooms,
        boq: result.boq,
        csv_url: Some(receipt.csv_url),
        workbook_url: Some(receipt.workbook_url),
    })
}
