pub mod config;
pub mod logging;

// Core modules
pub mod error;
pub mod fetch;
pub mod fingerprint;
pub mod matcher;
pub mod paths;
pub mod probe;
pub mod resolve;
pub mod scan;

/// Tool name, sent as part of the User-Agent header.
pub const TOOL_NAME: &str = "leakprobe";

/// Tool version, sent as part of the User-Agent header.
pub const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");
