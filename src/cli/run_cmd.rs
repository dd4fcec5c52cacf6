//! `caseharvest run` — drive the browser through each state and write the
//! per-state output files.

use crate::browser::chrome::{self, ChromeSession, LaunchOptions};
use crate::harvest::{HarvestConfig, HarvestLoop};
use crate::sink;
use anyhow::{ensure, Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{error, warn};
use url::Url;

#[derive(Args, Debug)]
pub struct RunArgs {
    /// First numeric state code to harvest.
    #[arg(long, default_value_t = 1)]
    pub from_state: u32,

    /// Last numeric state code to harvest (inclusive).
    #[arg(long, default_value_t = 56)]
    pub to_state: u32,

    /// Directory the per-state output files are written into.
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Search page every state iteration starts from.
    #[arg(long, default_value = "https://www.findthemissing.org/en")]
    pub base_url: String,

    /// Longest wait for any page element or transition, in seconds.
    #[arg(long, default_value_t = 600)]
    pub wait_timeout: u64,

    /// Show the browser window instead of running headless.
    #[arg(long)]
    pub headed: bool,

    /// Chromium executable to use instead of discovering one.
    #[arg(long)]
    pub chrome: Option<PathBuf>,
}

/// Run the harvest across the configured state range.
pub async fn run(args: RunArgs) -> Result<()> {
    Url::parse(&args.base_url).context("invalid --base-url")?;
    ensure!(
        args.from_state <= args.to_state,
        "--from-state must not exceed --to-state"
    );
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;

    let executable = chrome::find_chrome(args.chrome.as_deref());
    if executable.is_none() {
        warn!("no Chromium executable found, letting the CDP library try its own lookup");
    }
    let mut session = ChromeSession::launch(&LaunchOptions {
        executable,
        headed: args.headed,
    })
    .await
    .context("launching browser")?;

    let config = HarvestConfig {
        base_url: args.base_url.clone(),
        wait_timeout: Duration::from_secs(args.wait_timeout),
    };
    let mut harvest = HarvestLoop::new(&mut session, config);

    let total = u64::from(args.to_state - args.from_state + 1);
    let bar = ProgressBar::new(total);
    bar.set_style(
        ProgressStyle::with_template("  {bar:30} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    for code in args.from_state..=args.to_state {
        bar.set_message(format!("state {code}"));
        match harvest.harvest_state(code).await {
            Ok(results) => {
                // A write failure is logged; the remaining states still run.
                if let Err(e) = sink::write_state(&args.out_dir, &results) {
                    error!(state = %results.state_name, "writing output failed: {e}");
                }
            }
            Err(e) => warn!("state {code} failed: {e}"),
        }
        bar.inc(1);
    }
    bar.finish_with_message("done");

    session.close().await;
    Ok(())
}
