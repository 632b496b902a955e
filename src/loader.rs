use std::fs;
use std::io;
use std::path::Path;

use encoding_rs::{Encoding, UTF_8};

use crate::cli::Options;
use crate::error::LoadError;

/// Reads a file and returns its lines normalized according to `opts`, in
/// file order. Comment lines are dropped before whitespace handling, so a
/// dropped line consumes no output index.
pub fn load_lines(path: &Path, opts: &Options) -> Result<Vec<String>, LoadError> {
    let bytes = fs::read(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Read {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let text = decode_text(&bytes).map_err(|e| LoadError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut lines = Vec::new();
    for raw in text.lines() {
        if opts.ignore_comments && raw.trim_start().starts_with('#') {
            continue;
        }
        if opts.ignore_whitespace {
            lines.push(raw.split_whitespace().collect());
        } else {
            lines.push(raw.trim().to_string());
        }
    }
    Ok(lines)
}

// BOM selects the encoding; otherwise strict UTF-8. Malformed input is an
// error, not a lossy fallback.
fn decode_text(bytes: &[u8]) -> io::Result<String> {
    let (encoding, bom_len) = match Encoding::for_bom(bytes) {
        Some((encoding, bom_len)) => (encoding, bom_len),
        None => (UTF_8, 0),
    };

    match encoding.decode_without_bom_handling_and_without_replacement(&bytes[bom_len..]) {
        Some(text) => Ok(text.into_owned()),
        None => Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("stream did not contain valid {}", encoding.name()),
        )),
    }
}
