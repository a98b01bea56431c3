use crate::error::{Result, VcfError};
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing::warn;

const BOM: char = '\u{feff}';

/// Reads a whole text file. Invalid UTF-8 is replaced rather than rejected.
pub fn read_text_file(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| VcfError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(decode(bytes, &path.display().to_string()))
}

pub fn read_text<R: Read>(mut reader: R) -> Result<String> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(decode(bytes, "stdin"))
}

fn decode(bytes: Vec<u8>, source: &str) -> String {
    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            warn!(source, "input is not valid utf-8, replacing invalid bytes");
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }
    };
    match text.strip_prefix(BOM) {
        Some(rest) => rest.to_string(),
        None => text,
    }
}
