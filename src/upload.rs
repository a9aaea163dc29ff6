//! Decoding of uploaded `.txt` files.

use std::{fs, path::Path};

use crate::error::{CheckError, Result};

/// Decode uploaded bytes as UTF-8.
/// Invalid content fails with [`CheckError::MalformedUpload`]; nothing is
/// replaced or transliterated.
pub fn decode_upload(name: &str, bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|source| CheckError::MalformedUpload {
        name: name.to_string(),
        source,
    })
}

/// Read a file and return `(display name, text)`.
/// The display name is the file name without its directories.
pub fn read_upload(path: impl AsRef<Path>) -> Result<(String, String)> {
    let path = path.as_ref();
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let bytes = fs::read(path).map_err(|source| CheckError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let text = decode_upload(&name, bytes)?;
    tracing::debug!(%name, words = text.split_whitespace().count(), "upload decoded");
    Ok((name, text))
}
