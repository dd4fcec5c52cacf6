//! Error types for the harvest library.

use thiserror::Error;

/// Errors raised while driving the browser or persisting results.
///
/// Content-level oddities (unknown labels, header-only rows, nested
/// sub-tables) are not errors; the extractor drops those silently.
#[derive(Debug, Error)]
pub enum HarvestError {
    /// A selector or page condition never appeared within the deadline.
    #[error("timed out after {timeout_ms}ms waiting for {what}")]
    WaitTimeout { what: String, timeout_ms: u64 },

    /// The browser could not be configured or launched.
    #[error("browser launch failed: {0}")]
    Launch(String),

    /// An in-page script returned something other than the expected shape.
    #[error("page script returned unexpected shape: {0}")]
    Script(String),

    /// The detail-page title carried no case identifier suffix.
    #[error("page title {0:?} carries no case identifier")]
    MissingCaseId(String),

    #[error(transparent)]
    Cdp(#[from] chromiumoxide::error::CdpError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
