//! Per-case processing — wait for the detail view, sweep every section.

use crate::browser::driver::PageDriver;
use crate::error::HarvestError;
use crate::extract::{dom, photos, rows};
use crate::harvest::sections;
use crate::records::{self, CaseRecord, FieldMap};
use std::time::Duration;
use tracing::debug;

/// The site reveals the case information block with a scripted animation;
/// extracting before it finishes reads half-rendered rows.
const REVEAL_ANIMATION: Duration = Duration::from_millis(600);

/// Process the case detail page the driver currently shows.
///
/// `previous_case_id` is the id of the case processed before this one,
/// threaded through by the caller; the page transition is detected by the
/// title dropping that id. Returns the new case id and its record.
pub async fn process_case(
    driver: &mut dyn PageDriver,
    previous_case_id: Option<&str>,
    wait_timeout: Duration,
) -> Result<(String, CaseRecord), HarvestError> {
    if let Some(prev) = previous_case_id {
        driver.wait_title_not_containing(prev, wait_timeout).await?;
    }
    driver
        .wait_for(sections::CASE_INFORMATION_BLOCK, wait_timeout)
        .await?;
    tokio::time::sleep(REVEAL_ANIMATION).await;

    let title = driver.title().await?;
    let case_id = records::case_id_from_title(&title)
        .ok_or_else(|| HarvestError::MissingCaseId(title.clone()))?
        .to_string();
    debug!(case_id = %case_id, "processing case");

    let record = CaseRecord {
        case_info: table_fields(driver, sections::CASE_INFO_ROWS).await?,
        circumstances: table_fields(driver, sections::CIRCUMSTANCES_ROWS).await?,
        characteristics: table_fields(driver, sections::CHARACTERISTICS_ROWS).await?,
        photos: photo_fields(driver, sections::PHOTO_IMAGES).await?,
        investigating_agency: table_fields(driver, sections::AGENCY_ROWS).await?,
        case_manager: table_fields(driver, sections::CASE_MANAGER_ROWS).await?,
        regional_administrator: table_fields(driver, sections::REGIONAL_ADMIN_ROWS).await?,
    };

    Ok((case_id, record))
}

/// Run the in-page row script for one section and extract its field map.
async fn table_fields(
    driver: &dyn PageDriver,
    selector: &str,
) -> Result<FieldMap, HarvestError> {
    let value = driver.eval_json(&dom::row_script(selector)).await?;
    let raw: Vec<rows::RawRow> = serde_json::from_value(value)?;
    Ok(rows::extract_fields(&raw))
}

/// Run the in-page photo script and index the sources.
async fn photo_fields(
    driver: &dyn PageDriver,
    selector: &str,
) -> Result<FieldMap, HarvestError> {
    let value = driver.eval_json(&dom::photo_script(selector)).await?;
    let srcs: Vec<String> = serde_json::from_value(value)?;
    Ok(photos::index_photos(srcs))
}
