//! One probe: resolve, fetch, gate on status, compare fingerprint, classify.

use crate::error::ProbeError;
use crate::fetch::{self, FetchOptions};
use crate::fingerprint;
use crate::matcher;
use crate::resolve;

/// HTTP statuses that count as "successfully probed": the server answered
/// with a response whose body carries signal about file presence. Anything
/// else (5xx, unfollowed redirects, ...) is logged and treated as no signal.
const ACCEPTED_STATUSES: [u32; 3] = [200, 404, 403];

/// Classification of a finished probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The remote body appears to contain the local file's fingerprint.
    Leaked,
    /// No reliable evidence the file is published.
    NotLeaked,
    /// Probe failed but skip-on-error policy let the run continue.
    Skipped,
    /// Probe failed and the failure aborts the run.
    Fatal,
}

/// Immutable record of one probe, consumed by the outcome sink.
#[derive(Debug)]
pub struct ProbeReport {
    /// Candidate path as it appeared on input.
    pub path: String,
    /// Resolved request URL, when resolution succeeded.
    pub url: Option<String>,
    pub outcome: Outcome,
    /// Human-readable status line (HTTP status, error text, ...).
    pub detail: String,
}

/// Settings shared by every probe in a run.
#[derive(Debug, Clone)]
pub struct ProbeSettings {
    pub base_url: String,
    pub timeout_secs: u64,
    pub insecure: bool,
    pub skip_errors: bool,
    pub user_agent: String,
}

impl ProbeSettings {
    fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            timeout_secs: self.timeout_secs,
            insecure: self.insecure,
            user_agent: self.user_agent.clone(),
        }
    }
}

/// Runs the full pipeline for one candidate path. Blocking (curl + local
/// file I/O); the dispatcher drives this through `spawn_blocking`.
pub fn probe_one(settings: &ProbeSettings, path: &str) -> ProbeReport {
    let url = match resolve::resolve(&settings.base_url, path) {
        Ok(u) => u,
        Err(e) => return classify_failure(settings, path, None, e),
    };

    let response = match fetch::fetch(&url, &settings.fetch_options()) {
        Ok(r) => r,
        Err(e) => return classify_failure(settings, path, Some(url), e),
    };

    tracing::info!("request: {} {}", url, response.status);

    if !ACCEPTED_STATUSES.contains(&response.status) {
        tracing::warn!(
            "unexpected status {} for {}, no presence signal",
            response.status,
            url
        );
        return ProbeReport {
            path: path.to_string(),
            url: Some(url),
            outcome: Outcome::NotLeaked,
            detail: format!("unexpected status {}", response.status),
        };
    }

    let fp = match fingerprint::read_fingerprint(path) {
        Ok(fp) => fp,
        Err(e) => return classify_failure(settings, path, Some(url), e),
    };

    if matcher::body_contains_fingerprint(&fp, &response.body) {
        tracing::warn!("This file is published {}", path);
        ProbeReport {
            path: path.to_string(),
            url: Some(url),
            outcome: Outcome::Leaked,
            detail: format!("HTTP {}", response.status),
        }
    } else {
        ProbeReport {
            path: path.to_string(),
            url: Some(url),
            outcome: Outcome::NotLeaked,
            detail: format!("HTTP {}", response.status),
        }
    }
}

/// Maps a probe error to Skipped or Fatal per the skip-on-error policy.
/// An invalid URL is always probe-local regardless of the policy.
fn classify_failure(
    settings: &ProbeSettings,
    path: &str,
    url: Option<String>,
    err: ProbeError,
) -> ProbeReport {
    let fatal = err.is_fatal_unless_skipped() && !settings.skip_errors;
    let outcome = if fatal { Outcome::Fatal } else { Outcome::Skipped };
    tracing::error!("probe failed for {}: {}", path, err);
    ProbeReport {
        path: path.to_string(),
        url,
        outcome,
        detail: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProbeError;

    fn settings(skip_errors: bool) -> ProbeSettings {
        ProbeSettings {
            base_url: "https://example.com/site/".to_string(),
            timeout_secs: 3,
            insecure: false,
            skip_errors,
            user_agent: "leakprobe/test".to_string(),
        }
    }

    #[test]
    fn invalid_url_is_skipped_even_without_skip_errors() {
        let report = probe_one(
            &ProbeSettings {
                base_url: "not a url".to_string(),
                ..settings(false)
            },
            "a.txt",
        );
        assert_eq!(report.outcome, Outcome::Skipped);
        assert!(report.url.is_none());
    }

    #[test]
    fn classify_unreadable_file_fatal_without_skip() {
        let err = ProbeError::FileUnreadable {
            path: "a.txt".to_string(),
            reason: "missing".to_string(),
        };
        let report = classify_failure(&settings(false), "a.txt", None, err);
        assert_eq!(report.outcome, Outcome::Fatal);
    }

    #[test]
    fn classify_unreadable_file_skipped_with_skip() {
        let err = ProbeError::FileUnreadable {
            path: "a.txt".to_string(),
            reason: "missing".to_string(),
        };
        let report = classify_failure(&settings(true), "a.txt", None, err);
        assert_eq!(report.outcome, Outcome::Skipped);
    }

    #[test]
    fn accepted_statuses() {
        assert!(ACCEPTED_STATUSES.contains(&200));
        assert!(ACCEPTED_STATUSES.contains(&404));
        assert!(ACCEPTED_STATUSES.contains(&403));
        assert!(!ACCEPTED_STATUSES.contains(&500));
        assert!(!ACCEPTED_STATUSES.contains(&301));
    }
}
