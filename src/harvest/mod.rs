//! The per-state harvest loop.
//!
//! One state at a time: select the state in the search form, submit, open
//! the first result, then follow the next-case control until it disappears.
//! Each case's sections are extracted into a [`CaseRecord`] and collected
//! into a [`StateResults`] the caller persists.

pub mod case;
pub mod sections;

use crate::browser::driver::PageDriver;
use crate::error::HarvestError;
use crate::records::StateResults;
use std::time::Duration;
use tracing::{info, warn};

/// Search-flow selectors, pinned to the source site's current markup.
const STATE_SELECT_ID: &str = "search_Circumstances.StateLKA";
const SEARCH_COMMIT: &str = "input[name=\"commit\"]";
/// First data row of the result list (row 1 is the header).
const FIRST_RESULT_ROW: &str = "table#list > tbody > tr:nth-child(2)";
const NEXT_CASE: &str = "#NextCase";

/// Tunables for one harvest run.
#[derive(Debug, Clone)]
pub struct HarvestConfig {
    /// Search page every state iteration starts from.
    pub base_url: String,
    /// Longest wait for any page element or transition.
    pub wait_timeout: Duration,
}

/// Drives one browser through the per-state search flow.
pub struct HarvestLoop<'d> {
    driver: &'d mut dyn PageDriver,
    config: HarvestConfig,
    /// Id of the case processed most recently, used to detect the page
    /// transition to the next case. Threaded here explicitly rather than
    /// living in process-wide state.
    previous_case_id: Option<String>,
}

impl<'d> HarvestLoop<'d> {
    pub fn new(driver: &'d mut dyn PageDriver, config: HarvestConfig) -> Self {
        Self {
            driver,
            config,
            previous_case_id: None,
        }
    }

    /// Harvest every case for one state, identified by its numeric code in
    /// the search form's state dropdown.
    ///
    /// An empty result list surfaces as a wait timeout — the site never
    /// renders the first data row — and fails the state. A failure while
    /// walking cases stops the walk but keeps the records collected so
    /// far, so a late navigation error doesn't discard the whole state.
    pub async fn harvest_state(&mut self, state_code: u32) -> Result<StateResults, HarvestError> {
        let timeout = self.config.wait_timeout;

        self.driver.goto(&self.config.base_url).await?;
        let state_name = self
            .driver
            .select_option(STATE_SELECT_ID, &state_code.to_string())
            .await?;
        info!(state = %state_name, code = state_code, "searching state");

        self.driver.click(SEARCH_COMMIT).await?;
        self.driver.wait_for(FIRST_RESULT_ROW, timeout).await?;
        self.driver.click(FIRST_RESULT_ROW).await?;

        let mut results = StateResults::new(state_name);
        loop {
            match case::process_case(self.driver, self.previous_case_id.as_deref(), timeout).await
            {
                Ok((case_id, record)) => {
                    self.previous_case_id = Some(case_id.clone());
                    results.cases.insert(case_id, record);
                }
                Err(e) => {
                    warn!(
                        state = %results.state_name,
                        collected = results.cases.len(),
                        "case processing stopped: {e}"
                    );
                    break;
                }
            }

            if !self.driver.exists(NEXT_CASE).await? {
                break;
            }
            self.driver.click(NEXT_CASE).await?;
        }

        info!(
            state = %results.state_name,
            cases = results.cases.len(),
            "state harvested"
        );
        Ok(results)
    }
}
