//! Chromium implementation of the page driver.

use crate::browser::driver::PageDriver;
use crate::error::HarvestError;
use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::Page;
use futures::StreamExt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Environment variable overriding the Chromium executable path.
pub const CHROME_ENV: &str = "CASEHARVEST_CHROME";

/// Binary names probed on PATH, in order.
const CHROME_NAMES: &[&str] = &["google-chrome", "chromium", "chromium-browser", "chrome"];

/// Polling interval for the wait helpers.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// How to launch the browser.
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    /// Explicit Chromium executable; discovered if absent.
    pub executable: Option<PathBuf>,
    /// Show the browser window instead of running headless.
    pub headed: bool,
}

/// Locate a Chromium executable: explicit path first, then the
/// `CASEHARVEST_CHROME` environment variable, then well-known binary names
/// on PATH.
pub fn find_chrome(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        if path.exists() {
            return Some(path.to_path_buf());
        }
        warn!("chrome path {} does not exist, falling back to discovery", path.display());
    }
    if let Ok(path) = std::env::var(CHROME_ENV) {
        let path = PathBuf::from(path);
        if path.exists() {
            return Some(path);
        }
        warn!("{CHROME_ENV} points at a missing file, falling back to PATH");
    }
    CHROME_NAMES
        .iter()
        .find_map(|name| which::which(name).ok())
}

/// A launched browser with one active page.
pub struct ChromeSession {
    browser: Browser,
    handler_task: JoinHandle<()>,
    page: Page,
}

impl ChromeSession {
    /// Launch Chromium and open a blank page. The CDP event handler drains
    /// on its own task for the life of the session.
    pub async fn launch(options: &LaunchOptions) -> Result<Self, HarvestError> {
        let mut builder = BrowserConfig::builder();
        if options.headed {
            builder = builder.with_head();
        }
        if let Some(ref exec) = options.executable {
            builder = builder.chrome_executable(exec);
        }
        let config = builder.build().map_err(HarvestError::Launch)?;

        let (browser, mut handler) = Browser::launch(config).await?;
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    debug!("cdp handler closed: {e}");
                    break;
                }
            }
        });

        let page = browser.new_page("about:blank").await?;

        Ok(Self {
            browser,
            handler_task,
            page,
        })
    }

    /// Close the page and browser and stop the event handler.
    pub async fn close(mut self) {
        if let Err(e) = self.browser.close().await {
            warn!("browser did not close cleanly: {e}");
        }
        self.handler_task.abort();
    }
}

#[async_trait]
impl PageDriver for ChromeSession {
    async fn goto(&mut self, url: &str) -> Result<(), HarvestError> {
        self.page.goto(url).await?;
        self.page.wait_for_navigation().await?;
        Ok(())
    }

    async fn title(&self) -> Result<String, HarvestError> {
        Ok(self.page.get_title().await?.unwrap_or_default())
    }

    async fn click(&mut self, selector: &str) -> Result<(), HarvestError> {
        let element = self.page.find_element(selector).await?;
        element.click().await?;
        Ok(())
    }

    async fn select_option(
        &mut self,
        select_id: &str,
        value: &str,
    ) -> Result<String, HarvestError> {
        let script = format!(
            r#"(() => {{
                const select = document.getElementById('{id}');
                if (!select) return null;
                const option = Array.from(select.options).find((o) => o.value === '{value}');
                if (!option) return null;
                select.value = option.value;
                select.dispatchEvent(new Event('change', {{ bubbles: true }}));
                return option.textContent.trim();
            }})()"#,
            id = select_id.replace('\'', "\\'"),
            value = value.replace('\'', "\\'"),
        );
        let result = self.eval_json(&script).await?;
        result
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| {
                HarvestError::Script(format!("no option {value:?} in select #{select_id}"))
            })
    }

    async fn eval_json(&self, script: &str) -> Result<serde_json::Value, HarvestError> {
        let evaluation = self.page.evaluate(script).await?;
        Ok(evaluation.into_value()?)
    }

    async fn exists(&self, selector: &str) -> Result<bool, HarvestError> {
        Ok(self.page.find_element(selector).await.is_ok())
    }

    async fn wait_for(&self, selector: &str, timeout: Duration) -> Result<(), HarvestError> {
        let deadline = tokio::time::Instant::now() + timeout;
        loop {
            if self.page.find_element(selector).await.is_ok() {
                return Ok(());
            }
            if tokio::time::Instant::now() >= deadline {
                return Err(HarvestError::WaitTimeout {
                    what: format!("selector {selector:?}"),
                    timeout_ms: timeout.as_millis() as u64,
                });
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }

    async fn wait_title_not_containing(
        &self,
        needle: &str,
        timeout: Duration,
    ) -> Result<(), HarvestError> {
        let deadline = tokio::time::Instant::now() + timeout;
        loop {
            let title = self.title().await?;
            if !title.contains(needle) {
                return Ok(());
            }
            if tokio::time::Instant::now() >= deadline {
                return Err(HarvestError::WaitTimeout {
                    what: format!("title to move past {needle:?}"),
                    timeout_ms: timeout.as_millis() as u64,
                });
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }
}
