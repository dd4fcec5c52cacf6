//! Per-state JSON output files.

use crate::error::HarvestError;
use crate::records::StateResults;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// Render one state's case map as 4-space-indented JSON.
pub fn render(results: &StateResults) -> Result<Vec<u8>, HarvestError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    results.cases.serialize(&mut ser)?;
    Ok(buf)
}

/// Write `<state-slug>-output.json` into `dir`, returning the path.
///
/// Callers treat a failure here as reportable, not fatal: the in-memory
/// results stay valid and remaining states still run.
pub fn write_state(dir: &Path, results: &StateResults) -> Result<PathBuf, HarvestError> {
    let path = dir.join(results.file_name());
    std::fs::write(&path, render(results)?)?;
    info!(
        state = %results.state_name,
        cases = results.cases.len(),
        file = %path.display(),
        "wrote state results"
    );
    Ok(path)
}
