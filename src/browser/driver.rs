//! The seam between the harvest loop and a live page.

use crate::error::HarvestError;
use async_trait::async_trait;
use std::time::Duration;

/// Operations the harvest loop needs from a rendered page.
///
/// The production implementation drives Chromium over CDP; tests substitute
/// a scripted fake so the loop and extractors run without a browser.
#[async_trait]
pub trait PageDriver: Send {
    /// Navigate to a URL and wait for the load to settle.
    async fn goto(&mut self, url: &str) -> Result<(), HarvestError>;

    /// Current document title.
    async fn title(&self) -> Result<String, HarvestError>;

    /// Click the first element matching `selector`.
    async fn click(&mut self, selector: &str) -> Result<(), HarvestError>;

    /// Select the option with the given `value` in the `<select>` with the
    /// given element id, firing a change event. Returns the option's
    /// visible text.
    async fn select_option(
        &mut self,
        select_id: &str,
        value: &str,
    ) -> Result<String, HarvestError>;

    /// Evaluate a JavaScript expression and return its JSON value.
    async fn eval_json(&self, script: &str) -> Result<serde_json::Value, HarvestError>;

    /// Whether an element matching `selector` currently exists.
    async fn exists(&self, selector: &str) -> Result<bool, HarvestError>;

    /// Poll until `selector` matches an element, or time out.
    async fn wait_for(&self, selector: &str, timeout: Duration) -> Result<(), HarvestError>;

    /// Poll until the title no longer contains `needle`, or time out. Used
    /// to detect the transition away from the previous case's page.
    async fn wait_title_not_containing(
        &self,
        needle: &str,
        timeout: Duration,
    ) -> Result<(), HarvestError>;
}
