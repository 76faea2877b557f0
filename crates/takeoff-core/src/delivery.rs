use crate::error::TakeoffError;
use crate::model::EstimateResult;
use std::time::Duration;

pub const CSV_CONTENT_TYPE: &str = "text/csv";
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Storage collaborator for uploaded documents and rendered artifacts.
pub trait ArtifactStore: Send + Sync {
    /// Store bytes under a key, returning a locator.
    fn put(&self, key: &str, bytes: &[u8], content_type: &str) -> Result<String, TakeoffError>;

    fn get(&self, key: &str) -> Result<Vec<u8>, TakeoffError>;

    /// Produce a time-limited URL for a stored key.
    fn sign(&self, key: &str, ttl: Duration) -> Result<String, TakeoffError>;
}

/// An email attachment.
#[derive(Debug, Clone)]
pub struct Attachment {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Notification collaborator, invoked once per completed job.
pub trait Notifier: Send + Sync {
    fn send(
        &self,
        to_address: &str,
        subject: &str,
        body: &str,
        attachments: &[Attachment],
    ) -> Result<(), TakeoffError>;
}

pub fn csv_key(job_id: &str) -> String {
    format!("results/{job_id}/boq.csv")
}

pub fn workbook_key(job_id: &str) -> String {
    format!("results/{job_id}/boq.xlsx")
}

/// Links handed back after a delivery.
#[derive(Debug, Clone)]
pub struct DeliveryReceipt {
    pub csv_url: String,
    pub workbook_url: String,
}

/// Persist both artifacts and notify the user with download links.
pub fn deliver(
    job_id: &str,
    to_address: &str,
    project_label: &str,
    result: &EstimateResult,
    store: &dyn ArtifactStore,
    notifier: &dyn Notifier,
    link_ttl: Duration,
) -> Result<DeliveryReceipt, TakeoffError> {
    let csv_key = csv_key(job_id);
    let workbook_key = workbook_key(job_id);

    store.put(&csv_key, &result.artifacts.csv, CSV_CONTENT_TYPE)?;
    store.put(&workbook_key, &result.artifacts.workbook, XLSX_CONTENT_TYPE)?;

    let csv_url = store.sign(&csv_key, link_ttl)?;
    let workbook_url = store.sign(&workbook_key, link_ttl)?;

    let subject = format!("BOQ estimate ready: {project_label}");
    let body = format!(
        "Your BOQ estimate for \"{project_label}\" is ready.\n\
         Rooms found: {}\n\
         Line items: {}\n\n\
         CSV: {csv_url}\n\
         Workbook: {workbook_url}\n",
        result.rooms.len(),
        result.boq.len(),
    );
    notifier.send(to_address, &subject, &body, &[])?;

    Ok(DeliveryReceipt {
        csv_url,
        workbook_url,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_key_layout() {
        assert_eq!(csv_key("job-1"), "results/job-1/boq.csv");
        assert_eq!(workbook_key("job-1"), "results/job-1/boq.xlsx");
    }
}
