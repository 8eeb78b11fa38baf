//! Candidate path source: raw input text to an ordered list of paths.

/// Splits raw input into candidate file paths, one per non-empty line.
///
/// Whitespace-only lines are dropped. No further validation happens here;
/// a malformed path simply fails later at resolve or open time. Order of
/// appearance is preserved so logging stays deterministic.
pub fn candidate_paths(input: &str) -> Vec<String> {
    input
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}
