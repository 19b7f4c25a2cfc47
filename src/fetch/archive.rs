// src/fetch/archive.rs

use crate::error::ArchiveError;
use std::io::{Cursor, Read};
use tracing::{debug, instrument};
use zip::ZipArchive;

/// Decoded text of the single file inside the archive, already split into lines.
#[derive(Debug, Clone)]
pub struct RawDocument {
    /// Name of the archive entry the text came from.
    pub entry_name: String,
    pub lines: Vec<String>,
}

impl RawDocument {
    pub fn from_text(entry_name: impl Into<String>, text: &str) -> Self {
        Self {
            entry_name: entry_name.into(),
            lines: split_lines(text).into_iter().map(str::to_string).collect(),
        }
    }
}

/// Open `bytes` as a ZIP in memory and decode its first file entry as Latin-1.
#[instrument(level = "info", skip(bytes), fields(len = bytes.len()))]
pub fn decode_single_entry(bytes: &[u8]) -> Result<RawDocument, ArchiveError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;
        if !entry.is_file() {
            continue;
        }
        let name = entry.name().to_string();

        let mut buf = Vec::with_capacity(entry.size() as usize);
        entry
            .read_to_end(&mut buf)
            .map_err(|source| ArchiveError::Read {
                name: name.clone(),
                source,
            })?;

        let text = latin1_to_string(&buf);
        let doc = RawDocument::from_text(name, &text);
        debug!(entry = %doc.entry_name, lines = doc.lines.len(), "decoded entry");
        return Ok(doc);
    }

    Err(ArchiveError::NoEntries)
}

/// Every byte maps to the code point of the same value, so this never fails.
fn latin1_to_string(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

/// Split on `\n`, `\r\n` and lone `\r`. A trailing terminator does not
/// produce an extra empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let bytes = text.as_bytes();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                out.push(&text[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                out.push(&text[start..i]);
                i += 1;
                if bytes.get(i) == Some(&b'\n') {
                    i += 1;
                }
                start = i;
            }
            _ => i += 1,
        }
    }
    if start < bytes.len() {
        out.push(&text[start..]);
    }
    out
}
