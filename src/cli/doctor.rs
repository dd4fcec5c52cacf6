//! `caseharvest doctor` — environment readiness check.
//!
//! Verifies the pieces a harvest needs before a ten-hour run discovers
//! they're missing: a Chromium executable and a writable output directory.
//! Every failure prints a specific fix.

use crate::browser::chrome::{self, CHROME_ENV};
use anyhow::Result;
use std::path::Path;

/// Run the readiness checks. Returns an error exit when any check fails.
pub fn run(out_dir: &Path) -> Result<()> {
    let mut ready = true;

    eprintln!();
    eprintln!("  caseharvest doctor");
    eprintln!();

    let os = std::env::consts::OS;
    let arch = std::env::consts::ARCH;
    eprintln!("  ok    OS:        {os} ({arch})");

    match chrome::find_chrome(None) {
        Some(path) => eprintln!("  ok    Chromium:  {}", path.display()),
        None => {
            ready = false;
            eprintln!("  FAIL  Chromium:  not found");
            eprintln!("        Install Chrome or Chromium, or set {CHROME_ENV}=/path/to/chrome");
            eprintln!("        (or pass --chrome to `caseharvest run`)");
        }
    }

    match check_writable(out_dir) {
        Ok(()) => eprintln!("  ok    Output:    {} is writable", out_dir.display()),
        Err(e) => {
            ready = false;
            eprintln!("  FAIL  Output:    {} ({e})", out_dir.display());
            eprintln!("        Pick a writable directory with --out-dir");
        }
    }

    eprintln!();
    if ready {
        eprintln!("  Ready to harvest.");
        Ok(())
    } else {
        anyhow::bail!("environment is not ready");
    }
}

/// Probe the directory by creating and removing a marker file.
fn check_writable(dir: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(dir)?;
    let probe = dir.join(".caseharvest-write-probe");
    std::fs::write(&probe, b"probe")?;
    std::fs::remove_file(&probe)?;
    Ok(())
}
