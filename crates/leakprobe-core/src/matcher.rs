//! Heuristic content match: does a response body contain a fingerprint?
//!
//! Substring containment, not byte-exact comparison. Each fingerprint line is
//! tested independently; order and position in the body do not matter. False
//! positives (body coincidentally contains the same lines) and false
//! negatives (line-ending mismatch between local and remote) are accepted
//! trade-offs for a fast warning signal.

/// Returns true when every fingerprint line occurs somewhere in `body`.
///
/// An empty fingerprint never matches: an empty local file carries no
/// signal, and claiming a leak for it would be a guaranteed false positive.
/// Evaluation short-circuits on the first absent line.
pub fn body_contains_fingerprint(fingerprint: &[String], body: &[u8]) -> bool {
    if fingerprint.is_empty() {
        return false;
    }
    fingerprint
        .iter()
        .all(|line| contains_subslice(body, line.as_bytes()))
}

/// Byte-level substring search so non-UTF-8 bodies are matched without error.
fn contains_subslice(haystack: &[u8], needle: &[u8]) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.windows(needle.len()).any(|w| w == needle)
}
