//! Bounded dispatcher: fan probes out under a concurrency cap and aggregate
//! the outcomes.
//!
//! A semaphore permit is acquired before each probe is spawned and released
//! unconditionally when the probe finishes, so at most `concurrency` probes
//! are in flight at once. The first fatal probe is recorded; peers already
//! running are not cancelled, and the run fails only after every spawned
//! probe has drained.

use anyhow::Result;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::probe::{self, Outcome, ProbeReport, ProbeSettings};

/// Aggregate result of one run.
#[derive(Debug)]
pub struct ScanSummary {
    /// One report per dispatched probe, in completion order.
    pub reports: Vec<ProbeReport>,
    /// Detail line of the first fatal probe, if any.
    pub first_fatal: Option<String>,
}

impl ScanSummary {
    pub fn probed(&self) -> usize {
        self.reports.len()
    }

    pub fn leaked(&self) -> usize {
        self.count(Outcome::Leaked)
    }

    pub fn skipped(&self) -> usize {
        self.count(Outcome::Skipped)
    }

    /// True when no probe ended the run fatally.
    pub fn is_success(&self) -> bool {
        self.first_fatal.is_none()
    }

    fn count(&self, outcome: Outcome) -> usize {
        self.reports.iter().filter(|r| r.outcome == outcome).count()
    }
}

/// Probes every candidate path, at most `concurrency` in flight at once.
///
/// Paths are dispatched in input order; completions arrive in any order.
/// Each probe runs its blocking section (curl, file reads) on the blocking
/// thread pool.
pub async fn run_scan(
    settings: ProbeSettings,
    concurrency: usize,
    paths: Vec<String>,
) -> Result<ScanSummary> {
    let gate = Arc::new(Semaphore::new(concurrency.max(1)));
    let settings = Arc::new(settings);

    let mut join_set: JoinSet<ProbeReport> = JoinSet::new();
    let mut reports = Vec::with_capacity(paths.len());
    let mut first_fatal: Option<String> = None;

    for path in paths {
        // Token acquired before the probe starts; moved into the task and
        // dropped on every exit path, including panic unwinds.
        let permit = Arc::clone(&gate)
            .acquire_owned()
            .await
            .map_err(|e| anyhow::anyhow!("concurrency gate closed: {}", e))?;
        let settings = Arc::clone(&settings);
        join_set.spawn(async move {
            let path_for_panic = path.clone();
            let report = tokio::task::spawn_blocking(move || probe::probe_one(&settings, &path))
                .await
                .unwrap_or_else(|e| ProbeReport {
                    path: path_for_panic,
                    url: None,
                    outcome: Outcome::Fatal,
                    detail: format!("probe task panicked: {}", e),
                });
            drop(permit);
            report
        });

        // Drain any completions so far without blocking dispatch.
        while let Some(res) = join_set.try_join_next() {
            collect(res, &mut reports, &mut first_fatal)?;
        }
    }

    while let Some(res) = join_set.join_next().await {
        collect(res, &mut reports, &mut first_fatal)?;
    }

    Ok(ScanSummary {
        reports,
        first_fatal,
    })
}

fn collect(
    res: std::result::Result<ProbeReport, tokio::task::JoinError>,
    reports: &mut Vec<ProbeReport>,
    first_fatal: &mut Option<String>,
) -> Result<()> {
    let report = res.map_err(|e| anyhow::anyhow!("probe task join: {}", e))?;
    if report.outcome == Outcome::Fatal && first_fatal.is_none() {
        *first_fatal = Some(report.detail.clone());
    }
    reports.push(report);
    Ok(())
}
