//! Local head reader: the first lines of a file, used as its fingerprint.

use crate::error::ProbeError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Stop collecting once more than this many lines have been read. The
/// resulting fingerprint holds up to `HEAD_LINE_LIMIT + 1` lines; the extra
/// line is a long-standing boundary quirk kept for compatibility.
const HEAD_LINE_LIMIT: usize = 10;

/// A single line may grow to at most this many bytes before the file is
/// treated as unreadable (guards against pathological single-line files).
const MAX_LINE_BYTES: usize = 1024 * 1024;

/// Reads the head of `path` as a fingerprint: the leading lines in file
/// order, line terminators stripped. An empty file yields an empty
/// fingerprint.
pub fn read_fingerprint(path: &str) -> Result<Vec<String>, ProbeError> {
    let file = File::open(Path::new(path)).map_err(|e| unreadable(path, &e))?;
    let mut reader = BufReader::with_capacity(4096, file);

    let mut lines = Vec::new();
    loop {
        let line = match read_capped_line(&mut reader) {
            Ok(Some(l)) => l,
            Ok(None) => break,
            Err(reason) => {
                return Err(ProbeError::FileUnreadable {
                    path: path.to_string(),
                    reason,
                })
            }
        };
        lines.push(line);
        if lines.len() > HEAD_LINE_LIMIT {
            break;
        }
    }
    Ok(lines)
}

/// Reads one line (without the terminator), enforcing `MAX_LINE_BYTES`.
/// Returns `Ok(None)` at end of input. Works on the underlying buffer
/// directly so an oversized line is rejected before it is fully materialized.
fn read_capped_line<R: BufRead>(reader: &mut R) -> Result<Option<String>, String> {
    let mut buf: Vec<u8> = Vec::new();
    loop {
        let chunk = reader.fill_buf().map_err(|e| e.to_string())?;
        if chunk.is_empty() {
            // EOF: a trailing unterminated line still counts.
            if buf.is_empty() {
                return Ok(None);
            }
            break;
        }
        match chunk.iter().position(|&b| b == b'\n') {
            Some(idx) => {
                buf.extend_from_slice(&chunk[..idx]);
                reader.consume(idx + 1);
                break;
            }
            None => {
                buf.extend_from_slice(chunk);
                let consumed = chunk.len();
                reader.consume(consumed);
            }
        }
        if buf.len() > MAX_LINE_BYTES {
            return Err(format!("line exceeds {} bytes", MAX_LINE_BYTES));
        }
    }
    if buf.ends_with(b"\r") {
        buf.pop();
    }
    String::from_utf8(buf).map(Some).map_err(|e| e.to_string())
}

fn unreadable(path: &str, err: &std::io::Error) -> ProbeError {
    ProbeError::FileUnreadable {
        path: path.to_string(),
        reason: err.to_string(),
    }
}
