//! CLI for the leakprobe scanner.

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::io::Read;

use leakprobe_core::config;
use leakprobe_core::paths::candidate_paths;
use leakprobe_core::probe::{Outcome, ProbeSettings};
use leakprobe_core::scan::run_scan;
use leakprobe_core::{TOOL_NAME, TOOL_VERSION};

/// Checks whether local files are accidentally published on a web server.
///
/// Reads newline-separated file paths from stdin, fetches each against the
/// base URL, and warns when the remote body appears to contain the local
/// file's leading lines.
#[derive(Debug, Parser)]
#[command(name = "leakprobe", version)]
pub struct Cli {
    /// Base URL the candidate paths are resolved against.
    #[arg(short = 'u', long = "url", value_name = "BASE_URL")]
    pub url: String,

    /// Maximum simultaneous in-flight probes.
    #[arg(short = 'c', long, value_name = "N")]
    pub concurrency: Option<usize>,

    /// Per-request timeout in seconds.
    #[arg(short = 't', long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Allow connections to TLS sites without valid certificates.
    #[arg(short = 'k', long)]
    pub insecure: bool,

    /// Log transport and local-file failures and keep scanning instead of
    /// aborting the run.
    #[arg(short = 's', long)]
    pub skip_errors: bool,
}

pub async fn run_from_args() -> Result<()> {
    let cli = Cli::parse();
    run(cli).await
}

async fn run(cli: Cli) -> Result<()> {
    let cfg = config::load_or_init().unwrap_or_else(|e| {
        tracing::warn!("config unavailable, using built-in defaults: {:#}", e);
        config::LeakprobeConfig::default()
    });
    tracing::debug!("loaded config: {:?}", cfg);

    let concurrency = cli.concurrency.unwrap_or(cfg.concurrency);
    let timeout_secs = cli.timeout.unwrap_or(cfg.timeout_secs);

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("reading path list from stdin")?;
    let paths = candidate_paths(&input);

    let settings = ProbeSettings {
        base_url: cli.url,
        timeout_secs,
        insecure: cli.insecure,
        skip_errors: cli.skip_errors,
        user_agent: format!("{}/{}", TOOL_NAME, TOOL_VERSION),
    };

    let summary = run_scan(settings, concurrency, paths).await?;

    for report in summary.reports.iter().filter(|r| r.outcome == Outcome::Leaked) {
        tracing::debug!("leaked: {} ({})", report.path, report.detail);
    }
    tracing::info!(
        "scan finished: {} probed, {} leaked, {} skipped",
        summary.probed(),
        summary.leaked(),
        summary.skipped()
    );

    if let Some(fatal) = summary.first_fatal {
        bail!("scan aborted: {}", fatal);
    }
    Ok(())
}
