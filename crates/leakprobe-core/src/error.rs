//! Per-probe error taxonomy.
//!
//! Typed so the dispatcher can classify a failure (probe-local vs. fatal to
//! the run) before it is converted to anyhow for reporting.

use thiserror::Error;

/// Error raised while probing a single candidate path.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// Base URL or candidate path failed to parse as a URL reference.
    /// Always probe-local: logged, never fatal to the run.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Local file missing, unopenable, or with a pathologically long line.
    /// Fatal to the run unless skip-on-error mode is enabled.
    #[error("unreadable local file {path}: {reason}")]
    FileUnreadable { path: String, reason: String },

    /// Network-level failure reaching the remote server (DNS, connect,
    /// timeout, TLS handshake). Fatal to the run unless skip-on-error mode
    /// is enabled.
    #[error("transport error: {0}")]
    Transport(#[from] curl::Error),
}

impl ProbeError {
    /// True for failures that abort the run when skip-on-error is disabled.
    pub fn is_fatal_unless_skipped(&self) -> bool {
        match self {
            ProbeError::InvalidUrl(_) => false,
            ProbeError::FileUnreadable { .. } | ProbeError::Transport(_) => true,
        }
    }
}
