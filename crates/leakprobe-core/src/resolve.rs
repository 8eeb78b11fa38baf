//! Base + reference URL resolution.

use crate::error::ProbeError;
use url::Url;

/// Resolves a candidate path against the base URL per RFC 3986
/// reference-resolution rules (relative segments, query handling, scheme and
/// host inheritance all follow the standard).
///
/// Deterministic: the same (base, path) pair always yields the same string.
pub fn resolve(base: &str, path: &str) -> Result<String, ProbeError> {
    let base = Url::parse(base)?;
    let joined = base.join(path)?;
    Ok(joined.into())
}
